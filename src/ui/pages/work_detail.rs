//! Case study page for one work sample

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::content::{Site, WorkSample, find_work};
use crate::ui::media::ShowreelPlayer;
use crate::ui::pages::NotFoundPage;
use crate::ui::sections::{SeoMeta, SiteFooter, SiteHeader};
use crate::ui::widget::BookingButton;

/// `/agency/work/:slug`; unknown slugs get the 404 page
#[component]
pub fn WorkDetailPage() -> impl IntoView {
    let params = use_params_map();
    let work = move || params.read().get("slug").and_then(|slug| find_work(&slug));

    move || match work() {
        Some(sample) => view! { <WorkDetail sample=sample /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn WorkDetail(sample: &'static WorkSample) -> impl IntoView {
    let site = Site::Agency;

    view! {
        <SeoMeta
            title=format!("{} for {} | {}", sample.title, sample.client, site.name())
            description=sample.summary
            path=format!("/agency/work/{}", sample.slug)
        />
        <div class="site-agency min-h-screen">
            <SiteHeader site=site />
            <article class="max-w-5xl mx-auto px-4 pt-28 pb-20">
                <p class="text-sm uppercase tracking-wide text-muted mb-2">{sample.client}</p>
                <h1 class="text-4xl sm:text-5xl font-bold mb-6">{sample.title}</h1>
                <ul class="flex flex-wrap gap-2 mb-10">
                    {sample
                        .tags
                        .iter()
                        .map(|tag| view! { <li class="tag">{*tag}</li> })
                        .collect_view()}
                </ul>
                <ShowreelPlayer src=sample.video poster=sample.poster title=sample.title />
                <p class="text-lg leading-relaxed mt-10 max-w-3xl">{sample.summary}</p>
                <div class="flex gap-4 mt-12">
                    <BookingButton label="Start a project" />
                    <A href="/agency" attr:class="btn-secondary">"Back to all work"</A>
                </div>
            </article>
            <SiteFooter site=site />
        </div>
    }
}

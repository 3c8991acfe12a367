//! Index of the hosted sites

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::Site;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Pagecraft | Landing pages" />
        <Meta name="description" content="Landing pages for a studio, a writer, a musician, a product and a coach." />
        <main class="min-h-screen max-w-4xl mx-auto px-4 py-24">
            <h1 class="text-4xl sm:text-5xl font-bold mb-4">"Pagecraft"</h1>
            <p class="text-lg text-muted mb-12">
                "Five landing pages sharing one set of sections and widgets."
            </p>
            <ul class="grid sm:grid-cols-2 gap-6">
                {Site::ALL
                    .iter()
                    .map(|site| {
                        view! {
                            <li>
                                <A
                                    href=site.path()
                                    attr:class="block p-6 rounded-2xl border border-theme hover:bg-theme-secondary transition-colors"
                                >
                                    <span class="flex items-center justify-between font-semibold text-lg">
                                        {site.name()}
                                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                    </span>
                                    <span class="block mt-2 text-sm text-muted">{site.tagline()}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}

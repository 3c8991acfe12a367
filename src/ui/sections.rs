//! Building blocks shared by every site: header, hero, pricing, CTA, footer, meta tags

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::content::{PricingTier, Site};
use crate::core::scroll::ScrollTransform;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::ScrollLinked;
use crate::ui::widget::use_site_settings;

/// Title, description, Open Graph and canonical link for a page
#[component]
pub fn SeoMeta(
    title: String,
    description: &'static str,
    /// Path of the page, e.g. `/agency`
    path: String,
) -> impl IntoView {
    let url = use_site_settings().absolute_url(&path);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description />
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=title />
        <Link rel="canonical" href=url />
    }
}

#[component]
pub fn SiteHeader(
    site: Site,
    /// In-page anchors as `(label, "#id")`
    #[prop(default = &[])]
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 backdrop-blur bg-theme-primary/80 border-b border-theme">
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <A href=site.path() attr:class="font-bold text-lg tracking-tight">
                    {site.name()}
                </A>
                <ul class="hidden md:flex items-center gap-6 text-sm">
                    {links
                        .iter()
                        .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden btn-icon"
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </button>
            </nav>
            <ul
                class="md:hidden px-4 pb-4 space-y-2"
                class:hidden=move || !menu_open.get()
            >
                {links
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href on:click=move |_| set_menu_open.set(false)>
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </header>
    }
}

/// Full-height opening section; content eases out as it scrolls away
#[component]
pub fn Hero(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] eyebrow: Option<&'static str>,
    #[prop(default = "hero")] class: &'static str,
    /// Call-to-action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("min-h-screen flex items-center justify-center relative pt-16 {}", class)>
            <ScrollLinked transform=ScrollTransform::hero_exit() class="text-center px-4 max-w-4xl mx-auto">
                {eyebrow.map(|e| view! { <p class="uppercase tracking-widest text-sm mb-4 fade-in-up">{e}</p> })}
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-6 tracking-tight fade-in-up">
                    {title}
                </h1>
                <p class="text-xl sm:text-2xl max-w-2xl mx-auto mb-10 leading-relaxed fade-in-up delay-200">
                    {subtitle}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 fade-in-up delay-400">
                    {children()}
                </div>
            </ScrollLinked>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-hidden="true">
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 scroll-reveal">
            <h2 class="text-3xl sm:text-4xl font-bold mb-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-lg max-w-2xl mx-auto text-muted">{s}</p> })}
        </div>
    }
}

#[component]
pub fn PricingSection(
    tiers: &'static [PricingTier],
    /// Where every plan button leads
    cta_href: &'static str,
    #[prop(default = "Simple, transparent pricing")] title: &'static str,
    #[prop(optional)] footnote: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title=title />
                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {tiers
                        .iter()
                        .map(|tier| view! { <PricingCard tier=*tier cta_href=cta_href /> })
                        .collect_view()}
                </div>
                {footnote.map(|f| view! { <p class="text-center text-sm mt-8 scroll-reveal">{f}</p> })}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: PricingTier, cta_href: &'static str) -> impl IntoView {
    let card_class = if tier.highlighted {
        "scroll-reveal relative p-8 rounded-2xl border-2 border-accent-primary shadow-xl scale-105"
    } else {
        "scroll-reveal p-8 rounded-2xl border border-theme transition-colors"
    };

    view! {
        <div class=card_class>
            {tier.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold mb-2">{tier.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold">{tier.price}</span>
                    <span class="text-muted">{tier.period}</span>
                </div>
                <p class="text-sm mt-2 text-muted">{tier.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {tier
                    .features
                    .iter()
                    .map(|(feature, included)| {
                        let icon = if *included { icons::CHECK } else { icons::X };
                        view! {
                            <li class="flex items-center gap-3">
                                <Icon name=icon class="w-5 h-5 flex-shrink-0" />
                                <span class:text-muted=!*included>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <a
                href=cta_href
                class=if tier.highlighted { "btn-primary block w-full text-center" } else { "btn-secondary block w-full text-center" }
            >
                {tier.cta}
            </a>
        </div>
    }
}

/// Closing call to action
#[component]
pub fn CtaBanner(
    heading: &'static str,
    text: &'static str,
    #[prop(default = "cta")] id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="py-24 px-4">
            <div class="max-w-4xl mx-auto text-center rounded-3xl p-12 bg-accent-primary/10 scroll-reveal">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">{heading}</h2>
                <p class="text-lg mb-8 max-w-2xl mx-auto">{text}</p>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn SiteFooter(site: Site) -> impl IntoView {
    view! {
        <footer class="py-12 px-4 border-t border-theme">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4 text-sm">
                <span class="font-semibold">{site.name()}</span>
                <span class="text-muted">{site.tagline()}</span>
                <A href="/" attr:class="inline-flex items-center gap-1">
                    "More sites"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </A>
            </div>
        </footer>
    }
}

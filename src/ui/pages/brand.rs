//! Maya Okafor: personal brand site with newsletter signup

use leptos::prelude::*;

use crate::core::content::{BRAND_TOPICS, Site};
use crate::ui::scroll::{ParallaxLayer, use_scroll_reveal};
use crate::ui::sections::{CtaBanner, Hero, SectionHeading, SeoMeta, SiteFooter, SiteHeader};
use crate::ui::widget::{BookingButton, NewsletterForm};

const NAV: &[(&str, &str)] = &[
    ("Topics", "#topics"),
    ("Newsletter", "#newsletter"),
    ("Speaking", "#speaking"),
];

#[component]
pub fn BrandPage() -> impl IntoView {
    let site = Site::Brand;
    use_scroll_reveal();

    view! {
        <SeoMeta
            title=format!("{} | Writer and operator", site.name())
            description="Weekly notes on running a calm, profitable company. Keynotes and workshops for founder-led teams."
            path=site.path().to_string()
        />
        <div class="site-brand min-h-screen overflow-x-hidden">
            <SiteHeader site=site links=NAV />

            <Hero title="Build the company you'd want to work at" subtitle=site.tagline()>
                <a href="#newsletter" class="btn-primary">"Read the newsletter"</a>
                <a href="#speaking" class="btn-secondary">"Invite me to speak"</a>
            </Hero>

            <section class="relative h-[60vh] overflow-hidden" aria-hidden="true">
                <ParallaxLayer distance=80.0 class="absolute inset-0">
                    <img src="/media/brand/portrait.jpg" alt="" class="w-full h-[120%] object-cover" />
                </ParallaxLayer>
            </section>

            <section id="topics" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading title="What I write about" />
                    <div class="grid md:grid-cols-3 gap-8">
                        {BRAND_TOPICS
                            .iter()
                            .map(|(title, body)| {
                                view! {
                                    <div class="scroll-reveal p-8 rounded-2xl border border-theme">
                                        <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                        <p class="text-muted leading-relaxed">{*body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="newsletter" class="py-20 px-4">
                <div class="max-w-xl mx-auto scroll-reveal">
                    <NewsletterForm
                        heading="Thursday Notes"
                        blurb="One essay a week on hiring, planning and saying no. 14,000 readers, zero spam."
                    />
                </div>
            </section>

            <CtaBanner
                id="speaking"
                heading="Speaking and workshops"
                text="Keynotes on calm growth and half-day planning workshops for leadership teams."
            >
                <BookingButton label="Check availability" />
            </CtaBanner>

            <SiteFooter site=site />
        </div>
    }
}

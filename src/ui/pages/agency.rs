//! Northlight Studio: video agency portfolio

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{AGENCY_FAQ, AGENCY_TESTIMONIALS, Site, WORK};
use crate::ui::accordion::FaqAccordion;
use crate::ui::carousel::{TestimonialCarousel, WorkSlider};
use crate::ui::media::{HoverVideo, ShowreelPlayer};
use crate::ui::scroll::use_scroll_reveal;
use crate::ui::sections::{CtaBanner, Hero, SectionHeading, SeoMeta, SiteFooter, SiteHeader};
use crate::ui::widget::{BookingButton, BookingInline};

const NAV: &[(&str, &str)] = &[
    ("Showreel", "#showreel"),
    ("Work", "#work"),
    ("Clients", "#clients"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

#[component]
pub fn AgencyPage() -> impl IntoView {
    let site = Site::Agency;
    use_scroll_reveal();

    view! {
        <SeoMeta
            title=format!("{} | {}", site.name(), "Video-first brand studio")
            description="Campaigns, launch films and documentary shorts for brands that want people to watch to the end."
            path=site.path().to_string()
        />
        <div class="site-agency min-h-screen overflow-x-hidden">
            <SiteHeader site=site links=NAV />

            <Hero
                eyebrow="Brand films · Campaigns · Social"
                title="Ads people actually finish"
                subtitle=site.tagline()
            >
                <BookingButton label="Book an intro call" />
                <a href="#work" class="btn-secondary">"See the work"</a>
            </Hero>

            <section id="showreel" class="py-20 px-4">
                <div class="max-w-5xl mx-auto scroll-reveal">
                    <ShowreelPlayer
                        src="/media/agency/showreel-2024.mp4"
                        poster="/media/agency/showreel-poster.jpg"
                        title="Northlight 2024 showreel"
                    />
                </div>
            </section>

            <section id="featured" class="py-20 px-4">
                <SectionHeading title="Featured" />
                <WorkSlider work=WORK />
            </section>

            <section id="work" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Selected work"
                        subtitle="Hover for a preview, click for the story behind it."
                    />
                    <div class="grid md:grid-cols-2 gap-8">
                        {WORK
                            .iter()
                            .map(|w| {
                                view! {
                                    <A href=format!("/agency/work/{}", w.slug) attr:class="work-card scroll-reveal block">
                                        <div class="aspect-video rounded-2xl overflow-hidden">
                                            <HoverVideo src=w.video poster=w.poster label=w.title />
                                        </div>
                                        <div class="mt-4">
                                            <p class="text-sm uppercase tracking-wide text-muted">{w.client}</p>
                                            <h3 class="text-xl font-semibold">{w.title}</h3>
                                        </div>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="clients" class="py-20 px-4">
                <SectionHeading title="What clients say" />
                <TestimonialCarousel testimonials=AGENCY_TESTIMONIALS autoplay_ms=6000 />
            </section>

            <section id="faq" class="py-20 px-4">
                <div class="max-w-3xl mx-auto">
                    <SectionHeading title="Questions" />
                    <FaqAccordion entries=AGENCY_FAQ />
                </div>
            </section>

            <CtaBanner
                id="contact"
                heading="Have something to make?"
                text="Pick a slot for a thirty minute intro. No deck required."
            >
                <BookingInline container_id="agency-booking" />
            </CtaBanner>

            <SiteFooter site=site />
        </div>
    }
}

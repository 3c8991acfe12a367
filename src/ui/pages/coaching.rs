//! Steady Ground: coaching funnel

use leptos::prelude::*;

use crate::core::content::{COACHING_FAQ, COACHING_PRICING, COACHING_TESTIMONIALS, Site};
use crate::ui::accordion::FaqAccordion;
use crate::ui::carousel::TestimonialCarousel;
use crate::ui::scroll::use_scroll_reveal;
use crate::ui::sections::{
    CtaBanner, Hero, PricingSection, SectionHeading, SeoMeta, SiteFooter, SiteHeader,
};
use crate::ui::widget::{BookingInline, NewsletterForm};

const NAV: &[(&str, &str)] = &[
    ("Results", "#results"),
    ("Program", "#pricing"),
    ("FAQ", "#faq"),
    ("Book", "#book"),
];

#[component]
pub fn CoachingPage() -> impl IntoView {
    let site = Site::Coaching;
    use_scroll_reveal();

    view! {
        <SeoMeta
            title=format!("{} | Owner coaching", site.name())
            description="A twelve week coaching program for owners of service businesses who want their evenings back."
            path=site.path().to_string()
        />
        <div class="site-coaching min-h-screen overflow-x-hidden">
            <SiteHeader site=site links=NAV />

            <Hero
                eyebrow="For owners of service businesses"
                title="Step out of the day-to-day"
                subtitle=site.tagline()
            >
                <a href="#book" class="btn-primary">"Book a discovery call"</a>
                <a href="#guide" class="btn-secondary">"Get the free guide"</a>
            </Hero>

            <section id="results" class="py-20 px-4">
                <SectionHeading title="Owners who stepped back" />
                <TestimonialCarousel testimonials=COACHING_TESTIMONIALS autoplay_ms=7000 />
            </section>

            <PricingSection
                tiers=COACHING_PRICING
                cta_href="#book"
                title="The program"
                footnote="Payment plans available. Ask on the call."
            />

            <section id="faq" class="py-20 px-4">
                <div class="max-w-3xl mx-auto">
                    <SectionHeading title="Before you book" />
                    <FaqAccordion entries=COACHING_FAQ initially_open=0 />
                </div>
            </section>

            <section id="guide" class="py-20 px-4">
                <div class="max-w-xl mx-auto scroll-reveal">
                    <NewsletterForm
                        heading="The Stepping Back guide"
                        blurb="Twelve pages on the first five things to delegate. Sent straight to your inbox."
                    />
                </div>
            </section>

            <CtaBanner
                id="book"
                heading="Book a discovery call"
                text="Thirty minutes, no pitch deck. You leave with a next step either way."
            >
                <BookingInline container_id="coaching-booking" />
            </CtaBanner>

            <SiteFooter site=site />
        </div>
    }
}

//! Echo: AI clone product page

use leptos::prelude::*;

use crate::core::content::{CLONE_FAQ, CLONE_PRICING, Site};
use crate::ui::accordion::FaqAccordion;
use crate::ui::media::ShowreelPlayer;
use crate::ui::scroll::{ParallaxLayer, use_scroll_reveal};
use crate::ui::sections::{
    CtaBanner, Hero, PricingSection, SectionHeading, SeoMeta, SiteFooter, SiteHeader,
};
use crate::ui::widget::BookingButton;

const NAV: &[(&str, &str)] = &[
    ("How it works", "#how"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Connect",
        "Link your newsletter, podcast and inbox. Echo reads, it never posts without asking.",
    ),
    ("Review", "Approve drafted replies in one swipe while Echo learns what you would change."),
    ("Relax", "Turn on autopilot for the questions you are tired of answering."),
];

#[component]
pub fn ClonePage() -> impl IntoView {
    let site = Site::Clone;
    use_scroll_reveal();

    view! {
        <SeoMeta
            title=format!("{} | Your inbox, in your voice", site.name())
            description="Echo drafts replies to DMs and emails in your voice, so your audience hears back without you living in the inbox."
            path=site.path().to_string()
        />
        <div class="site-clone min-h-screen overflow-x-hidden">
            <SiteHeader site=site links=NAV />

            <Hero title="Answer every DM. Write none of them." subtitle=site.tagline()>
                <BookingButton label="Book a demo" />
                <a href="#pricing" class="btn-secondary">"See pricing"</a>
            </Hero>

            <section id="how" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading title="How it works" />
                    <div class="grid md:grid-cols-3 gap-8">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, body))| {
                                view! {
                                    <ParallaxLayer distance={20.0 + 15.0 * i as f64}>
                                        <div class="scroll-reveal p-8 rounded-2xl border border-theme">
                                            <span class="text-sm font-mono text-muted">{format!("0{}", i + 1)}</span>
                                            <h3 class="text-xl font-semibold my-2">{*title}</h3>
                                            <p class="text-muted leading-relaxed">{*body}</p>
                                        </div>
                                    </ParallaxLayer>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="max-w-4xl mx-auto mt-16 scroll-reveal">
                        <ShowreelPlayer
                            src="/media/clone/demo.mp4"
                            poster="/media/clone/demo.jpg"
                            title="Echo product demo"
                        />
                    </div>
                </div>
            </section>

            <PricingSection
                tiers=CLONE_PRICING
                cta_href="#cta"
                footnote="Every plan starts with a 14-day trial in review mode."
            />

            <section id="faq" class="py-20 px-4">
                <div class="max-w-3xl mx-auto">
                    <SectionHeading title="Frequently asked questions" />
                    <FaqAccordion entries=CLONE_FAQ />
                </div>
            </section>

            <CtaBanner
                heading="Meet your Echo"
                text="A fifteen minute demo with your own content loaded in."
            >
                <BookingButton label="Book a demo" />
            </CtaBanner>

            <SiteFooter site=site />
        </div>
    }
}

//! Juniper Vale: musician site

use leptos::prelude::*;

use crate::core::content::{MUSIC_POSTS, RELEASES, Site};
use crate::ui::media::HoverVideo;
use crate::ui::scroll::use_scroll_reveal;
use crate::ui::sections::{Hero, SectionHeading, SeoMeta, SiteFooter, SiteHeader};
use crate::ui::social::SocialWall;
use crate::ui::widget::NewsletterForm;

const NAV: &[(&str, &str)] = &[
    ("Music", "#music"),
    ("Videos", "#videos"),
    ("Mailing list", "#list"),
];

#[component]
pub fn MusicPage() -> impl IntoView {
    let site = Site::Music;
    use_scroll_reveal();

    view! {
        <SeoMeta
            title=format!("{} | Official site", site.name())
            description="New record Hayloft Static out now. Tour dates, videos and the mailing list."
            path=site.path().to_string()
        />
        <div class="site-music min-h-screen overflow-x-hidden">
            <SiteHeader site=site links=NAV />

            <Hero
                eyebrow="New record out now"
                title="Hayloft Static"
                subtitle=site.tagline()
                class="hero-music"
            >
                <a href="#music" class="btn-primary">"Listen"</a>
                <a href="#list" class="btn-secondary">"Join the list"</a>
            </Hero>

            <section id="music" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading title="Records" subtitle="Hover a cover to hear a loop." />
                    <div class="grid sm:grid-cols-3 gap-8">
                        {RELEASES
                            .iter()
                            .map(|r| {
                                view! {
                                    <div class="scroll-reveal">
                                        <div class="aspect-square rounded-xl overflow-hidden">
                                            <HoverVideo src=r.preview poster=r.cover label=r.title />
                                        </div>
                                        <h3 class="mt-3 font-semibold">{r.title}</h3>
                                        <p class="text-sm text-muted">{r.year}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="videos" class="py-20 px-4">
                <SectionHeading title="From the barn" />
                <SocialWall posts=MUSIC_POSTS />
            </section>

            <section id="list" class="py-20 px-4">
                <div class="max-w-xl mx-auto scroll-reveal">
                    <NewsletterForm
                        heading="Mailing list"
                        blurb="Tour dates and first listens, about once a month."
                    />
                </div>
            </section>

            <SiteFooter site=site />
        </div>
    }
}

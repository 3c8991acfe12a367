//! Social media embeds
//!
//! TikTok's script scans the document for its blockquotes by itself. Instagram's
//! only does that on first load, so blocks rendered after navigation need an
//! explicit `instgrm.Embeds.process()` once the global exists.

use leptos::prelude::*;

use crate::core::content::SocialPost;
use crate::core::vendor::WidgetSpec;
use crate::ui::widget::{use_vendor_script, use_widget_attacher};

const TIKTOK_SCRIPT: &str = "https://www.tiktok.com/embed.js";
const INSTAGRAM_SCRIPT: &str = "https://www.instagram.com/embed.js";

#[component]
pub fn TikTokEmbed(user: &'static str, video_id: &'static str) -> impl IntoView {
    use_vendor_script("tiktok-embed", TIKTOK_SCRIPT);

    let cite = format!("https://www.tiktok.com/@{}/video/{}", user, video_id);
    let href = cite.clone();

    view! {
        <blockquote
            class="tiktok-embed"
            cite=cite
            data-video-id=video_id
            style="max-width: 605px; min-width: 325px;"
        >
            <section>
                <a target="_blank" rel="noopener noreferrer" href=href>
                    {format!("@{}", user)}
                </a>
            </section>
        </blockquote>
    }
}

#[component]
pub fn InstagramEmbed(
    permalink: &'static str,
    /// Wrapper id, unique per page
    container_id: String,
) -> impl IntoView {
    use_vendor_script("instagram-embed", INSTAGRAM_SCRIPT);
    use_widget_attacher(WidgetSpec::instagram(&container_id));

    view! {
        <div id=container_id>
            <blockquote
                class="instagram-media"
                data-instgrm-permalink=permalink
                data-instgrm-version="14"
                style="max-width: 540px; min-width: 326px; width: 100%;"
            >
                <a href=permalink target="_blank" rel="noopener noreferrer">
                    "View this post on Instagram"
                </a>
            </blockquote>
        </div>
    }
}

/// Grid of posts
#[component]
pub fn SocialWall(posts: &'static [SocialPost]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6 justify-items-center">
            {posts
                .iter()
                .enumerate()
                .map(|(i, post)| match *post {
                    SocialPost::TikTok { user, video_id } => {
                        view! { <TikTokEmbed user=user video_id=video_id /> }.into_any()
                    }
                    SocialPost::Instagram { permalink } => {
                        view! {
                            <InstagramEmbed
                                permalink=permalink
                                container_id=format!("instagram-post-{}", i)
                            />
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}

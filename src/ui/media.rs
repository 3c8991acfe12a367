//! Video components: hover previews and the showreel player
//!
//! Both keep a [`Playback`] in a signal, translate input into [`MediaCommand`]s and
//! apply those to the `<video>` element. The element's own events are the source of
//! truth for whether it is actually playing.

use leptos::html;
use leptos::prelude::*;

use crate::core::media::{MediaCommand, Playback, PointerMode, format_timestamp};
use crate::ui::icon::{Icon, icons};

/// Run `cmd` against the video element behind `node`.
///
/// A rejected `play()` (autoplay policy, missing source) only resets the flag.
fn apply_command(node: NodeRef<html::Video>, state: RwSignal<Playback>, cmd: MediaCommand) {
    #[cfg(feature = "hydrate")]
    {
        let Some(video) = node.get_untracked() else {
            return;
        };
        match cmd {
            MediaCommand::Play => match video.play() {
                Ok(promise) => {
                    leptos::task::spawn_local(async move {
                        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                            leptos::logging::debug_warn!("Playback rejected: {:?}", e);
                            state.update(|p| p.on_play_rejected());
                        }
                    });
                }
                Err(e) => {
                    leptos::logging::debug_warn!("Playback rejected: {:?}", e);
                    state.update(|p| p.on_play_rejected());
                }
            },
            MediaCommand::Pause => {
                let _ = video.pause();
            }
            MediaCommand::Rewind => {
                let _ = video.pause();
                video.set_current_time(0.0);
            }
            MediaCommand::Seek(secs) => video.set_current_time(secs),
            MediaCommand::SetMuted(muted) => video.set_muted(muted),
            MediaCommand::SetRate(rate) => video.set_playback_rate(rate),
            MediaCommand::Fullscreen => {
                if let Err(e) = video.request_fullscreen() {
                    leptos::logging::debug_warn!("Fullscreen refused: {:?}", e);
                }
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, state, cmd);
    }
}

/// Switch to tap handling on devices without hover
fn use_pointer_mode(state: RwSignal<Playback>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let can_hover = leptos::web_sys::window()
            .and_then(|w| w.match_media("(hover: hover)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(true);
        state.update(|p| p.set_mode(PointerMode::detect(can_hover)));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

fn sync_time(node: NodeRef<html::Video>, state: RwSignal<Playback>) {
    #[cfg(feature = "hydrate")]
    if let Some(video) = node.get_untracked() {
        state.update(|p| p.on_time_update(video.current_time(), video.duration()));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (node, state);
}

/// Muted looping clip that plays while hovered (or on tap on touch screens)
#[component]
pub fn HoverVideo(
    src: &'static str,
    poster: &'static str,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "w-full h-full object-cover")] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Video>::new();
    let state = RwSignal::new(Playback::new(PointerMode::Hover, true));
    use_pointer_mode(state);

    let run = move |cmd: Option<MediaCommand>| {
        if let Some(cmd) = cmd {
            apply_command(node, state, cmd);
        }
    };

    view! {
        <div
            class="hover-video relative"
            on:mouseenter=move |_| run(state.try_update(|p| p.pointer_enter()).flatten())
            on:mouseleave=move |_| run(state.try_update(|p| p.pointer_leave()).flatten())
            on:click=move |_| run(state.try_update(|p| p.tap()).flatten())
        >
            <video
                node_ref=node
                src=src
                poster=poster
                class=class
                muted=true
                loop=true
                playsinline=true
                preload="metadata"
                aria-label=label
                on:play=move |_| state.update(|p| p.on_play())
                on:pause=move |_| state.update(|p| p.on_pause())
            ></video>
            <div
                class="hover-video-badge"
                class:hidden=move || state.with(|p| p.is_playing())
                aria-hidden="true"
            >
                <Icon name=icons::PLAY class="w-6 h-6" />
            </div>
        </div>
    }
}

/// Full showreel with custom controls.
///
/// Keyboard: space/k play-pause, m mute, f fullscreen, arrows seek five seconds.
#[component]
pub fn ShowreelPlayer(
    src: &'static str,
    poster: &'static str,
    #[prop(default = "Showreel")] title: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Video>::new();
    let bar = NodeRef::<html::Div>::new();
    let state = RwSignal::new(Playback::new(PointerMode::Hover, false));

    let run = move |cmd: MediaCommand| apply_command(node, state, cmd);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(cmd) = state.try_update(|p| p.handle_key(&ev.key())).flatten() {
            ev.prevent_default();
            run(cmd);
        }
    };

    let on_seek = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(bar) = bar.get_untracked() {
            let rect = bar.get_bounding_client_rect();
            if rect.width() > 0.0 {
                let fraction = (ev.client_x() as f64 - rect.left()) / rect.width();
                if let Some(cmd) = state.try_update(|p| p.seek_fraction(fraction)) {
                    run(cmd);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, bar);
    };

    let progress_style = move || format!("width: {:.2}%;", state.with(|p| p.progress()) * 100.0);
    let time_label = move || {
        state.with(|p| {
            format!(
                "{} / {}",
                format_timestamp(p.position()),
                format_timestamp(p.duration())
            )
        })
    };

    view! {
        <div
            class="showreel relative rounded-2xl overflow-hidden bg-black"
            tabindex="0"
            aria-label=title
            on:keydown=on_keydown
        >
            <video
                node_ref=node
                src=src
                poster=poster
                class="w-full aspect-video"
                playsinline=true
                preload="metadata"
                on:click=move |_| {
                    if let Some(cmd) = state.try_update(|p| p.toggle()) {
                        run(cmd);
                    }
                }
                on:play=move |_| state.update(|p| p.on_play())
                on:pause=move |_| state.update(|p| p.on_pause())
                on:ended=move |_| state.update(|p| p.on_pause())
                on:timeupdate=move |_| sync_time(node, state)
                on:loadedmetadata=move |_| sync_time(node, state)
            ></video>

            <div class="showreel-controls absolute inset-x-0 bottom-0 p-4 flex items-center gap-3">
                <button
                    class="btn-icon"
                    aria-label=move || if state.with(|p| p.is_playing()) { "Pause" } else { "Play" }
                    on:click=move |_| {
                        if let Some(cmd) = state.try_update(|p| p.toggle()) {
                            run(cmd);
                        }
                    }
                >
                    {move || {
                        let name = if state.with(|p| p.is_playing()) { icons::PAUSE } else { icons::PLAY };
                        view! { <Icon name=name class="w-5 h-5" /> }
                    }}
                </button>

                <div
                    node_ref=bar
                    class="showreel-progress flex-1 h-1.5 rounded-full bg-white/20 cursor-pointer"
                    role="slider"
                    aria-label="Seek"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || format!("{:.0}", state.with(|p| p.progress()) * 100.0)
                    on:click=on_seek
                >
                    <div class="h-full rounded-full bg-white" style=progress_style></div>
                </div>

                <span class="text-xs tabular-nums text-white/80">{time_label}</span>

                <button
                    class="btn-icon"
                    aria-label=move || if state.with(|p| p.is_muted()) { "Unmute" } else { "Mute" }
                    on:click=move |_| {
                        if let Some(cmd) = state.try_update(|p| p.toggle_mute()) {
                            run(cmd);
                        }
                    }
                >
                    {move || {
                        let name = if state.with(|p| p.is_muted()) { icons::VOLUME_OFF } else { icons::VOLUME_ON };
                        view! { <Icon name=name class="w-5 h-5" /> }
                    }}
                </button>

                <button
                    class="text-xs font-semibold text-white w-10"
                    aria-label="Playback speed"
                    on:click=move |_| {
                        if let Some(cmd) = state.try_update(|p| p.cycle_rate()) {
                            run(cmd);
                        }
                    }
                >
                    {move || state.with(|p| p.rate().to_string())}
                </button>

                <button
                    class="btn-icon"
                    aria-label="Fullscreen"
                    on:click=move |_| run(MediaCommand::Fullscreen)
                >
                    <Icon name=icons::EXPAND class="w-5 h-5" />
                </button>
            </div>
        </div>
    }
}

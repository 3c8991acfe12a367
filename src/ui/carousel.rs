//! Carousels: testimonials and the featured work slider

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::carousel::Carousel;
use crate::core::content::{Testimonial, WorkSample};
use crate::ui::icon::{Icon, icons};

/// Advance `state` every `period_ms` unless `paused`. Stops with the component.
fn use_autoplay(state: RwSignal<Carousel>, paused: RwSignal<bool>, period_ms: Option<u32>) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        let Some(period_ms) = period_ms else {
            return;
        };
        let interval = StoredValue::new_local(None::<Interval>);

        Effect::new(move |_| {
            let timer = Interval::new(period_ms, move || {
                if !paused.get_untracked() {
                    state.update(|c| {
                        c.next();
                    });
                }
            });
            interval.set_value(Some(timer));
        });

        on_cleanup(move || {
            // Dropping a gloo Interval clears it
            interval.try_update_value(|i| i.take());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, paused, period_ms);
    }
}

#[component]
fn CarouselControls(state: RwSignal<Carousel>, label: &'static str) -> impl IntoView {
    let len = state.with_untracked(|c| c.len());

    view! {
        <div class="flex items-center justify-center gap-4 mt-8">
            <button
                class="btn-icon"
                aria-label=format!("Previous {}", label)
                on:click=move |_| state.update(|c| { c.prev(); })
            >
                <Icon name=icons::CHEVRON_LEFT class="w-5 h-5" />
            </button>
            <div class="flex gap-2" role="tablist">
                {(0..len)
                    .map(|i| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot-active=move || state.with(|c| c.index() == i)
                                role="tab"
                                aria-selected=move || state.with(|c| c.index() == i).to_string()
                                aria-label=format!("Show {} {}", label, i + 1)
                                on:click=move |_| state.update(|c| { c.go_to(i); })
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="btn-icon"
                aria-label=format!("Next {}", label)
                on:click=move |_| state.update(|c| { c.next(); })
            >
                <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
            </button>
        </div>
    }
}

/// One quote at a time, arrow keys and dots to navigate
#[component]
pub fn TestimonialCarousel(
    testimonials: &'static [Testimonial],
    /// Auto-advance period; `None` disables autoplay
    #[prop(optional)]
    autoplay_ms: Option<u32>,
) -> impl IntoView {
    let state = RwSignal::new(Carousel::new(testimonials.len()));
    let hovered = RwSignal::new(false);
    use_autoplay(state, hovered, autoplay_ms);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let mut consumed = false;
        state.update(|c| consumed = c.handle_key(&ev.key()));
        if consumed {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class="testimonial-carousel max-w-3xl mx-auto text-center"
            tabindex="0"
            role="region"
            aria-roledescription="carousel"
            aria-label="Testimonials"
            on:keydown=on_keydown
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="relative min-h-[220px]">
                {testimonials
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        let active = move || state.with(|c| c.index() == i);
                        view! {
                            <figure
                                class="absolute inset-0 transition-opacity duration-500"
                                class:opacity-0=move || !active()
                                class:opacity-100=active
                                aria-hidden=move || (!active()).to_string()
                            >
                                <blockquote class="text-2xl leading-relaxed mb-6">
                                    "\u{201C}" {t.quote} "\u{201D}"
                                </blockquote>
                                <figcaption>
                                    <span class="font-semibold">{t.author}</span>
                                    <span class="text-muted">" · " {t.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
            <CarouselControls state=state label="testimonial" />
        </div>
    }
}

/// Featured work cards, neighbours peeking in from both sides
#[component]
pub fn WorkSlider(work: &'static [WorkSample]) -> impl IntoView {
    let state = RwSignal::new(Carousel::new(work.len()));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let mut consumed = false;
        state.update(|c| consumed = c.handle_key(&ev.key()));
        if consumed {
            ev.prevent_default();
        }
    };

    view! {
        <div class="work-slider" tabindex="0" aria-label="Featured work" on:keydown=on_keydown>
            <div class="relative h-[420px] overflow-hidden">
                {work
                    .iter()
                    .enumerate()
                    .map(|(i, sample)| {
                        let style = move || {
                            let offset = state.with(|c| c.offset_of(i));
                            let scale = if offset == 0 { 1.0 } else { 0.85 };
                            let opacity = if offset.abs() > 1 { 0.0 } else { 1.0 };
                            format!(
                                "transform: translateX({}%) scale({}); opacity: {};",
                                offset * 70,
                                scale,
                                opacity
                            )
                        };
                        view! {
                            <A
                                href=format!("/agency/work/{}", sample.slug)
                                attr:class="work-slide absolute inset-y-0 left-[20%] w-[60%] transition-all duration-500"
                                attr:style=style
                            >
                                <img src=sample.poster alt=sample.title class="w-full h-full object-cover rounded-2xl" />
                                <div class="work-slide-caption">
                                    <span class="text-sm uppercase tracking-wide">{sample.client}</span>
                                    <h3 class="text-2xl font-bold">{sample.title}</h3>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <CarouselControls state=state label="project" />
        </div>
    }
}

//! Scroll-linked animation helpers

use leptos::html;
use leptos::prelude::*;

use crate::core::scroll::ScrollTransform;

/// Class marking elements that fade in when they first enter the viewport
pub const REVEAL_CLASS: &str = "scroll-reveal";

/// Progress of `node` through the viewport, updated on scroll and resize.
pub fn use_scroll_progress(node: NodeRef<html::Div>) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::scroll::scroll_progress;
        use leptos::ev::{resize, scroll};

        let measure = move || {
            let Some(el) = node.get_untracked() else {
                return;
            };
            let viewport = leptos::web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let rect = el.get_bounding_client_rect();
            set_progress.set(scroll_progress(rect.top(), rect.height(), viewport));
        };

        Effect::new(move |_| {
            if node.get().is_some() {
                measure();
            }
        });

        let on_scroll = window_event_listener(scroll, move |_| measure());
        let on_resize = window_event_listener(resize, move |_| measure());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (node, set_progress);

    progress
}

/// Wraps its children in a layer whose transform follows the scroll position
#[component]
pub fn ScrollLinked(
    transform: ScrollTransform,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(node);
    let style = move || transform.style(progress.get());

    view! {
        <div node_ref=node class=class>
            <div class="will-change-transform" style=style>
                {children()}
            </div>
        </div>
    }
}

/// Parallax layer drifting `distance` pixels each way
#[component]
pub fn ParallaxLayer(
    #[prop(default = 60.0)] distance: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <ScrollLinked transform=ScrollTransform::parallax(distance) class=class>
            {children()}
        </ScrollLinked>
    }
}

/// Add `visible` to every `.scroll-reveal` element once it intersects the viewport.
///
/// Call once per page, after its content is in place.
pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::wasm_bindgen::closure::Closure;
        use leptos::wasm_bindgen::JsCast;
        use leptos::web_sys::{
            IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        };

        let observer = StoredValue::new_local(None::<IntersectionObserver>);

        Effect::new(move |_| {
            let Some(document) = leptos::web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("visible");
                            observer.unobserve(&target);
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&leptos::wasm_bindgen::JsValue::from_f64(0.1));
            options.set_root_margin("0px 0px -50px 0px");

            let Ok(io) = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };
            // The observer holds the only reference to the callback
            callback.forget();

            if let Ok(nodes) = document.query_selector_all(&format!(".{}", REVEAL_CLASS)) {
                for i in 0..nodes.length() {
                    if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into().ok()) {
                        io.observe(&el);
                    }
                }
            }
            observer.set_value(Some(io));
        });

        on_cleanup(move || {
            observer.try_update_value(|o| {
                if let Some(io) = o.take() {
                    io.disconnect();
                }
            });
        });
    }
}

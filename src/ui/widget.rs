//! Third-party widget embeds
//!
//! Components here render an empty container on the server. After hydration,
//! `use_widget_attacher` polls until the vendor script has registered its global
//! and then hands the container over exactly once. See `core::attacher` for the
//! state machine.

use leptos::prelude::*;

use crate::core::settings::SiteSettings;
use crate::core::vendor::{VendorApi, WidgetSpec, newsletter_container_id};
#[cfg(feature = "hydrate")]
use crate::core::{
    settings::SETTINGS_ELEMENT_ID,
    vendor::{BookingEvent, PAGE_BLUR_CLASS},
};

/// Scheduling widget script
pub const BOOKING_SCRIPT: &str = "https://assets.calendly.com/assets/external/widget.js";
/// Newsletter widget script
pub const NEWSLETTER_SCRIPT: &str = "https://cdn.sender.net/accounts_resources/universal.js";

#[cfg(feature = "hydrate")]
pub use browser::{BrowserTimer, DomWidgetHost, load_script, resolve_global};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use leptos::wasm_bindgen::closure::Closure;
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use leptos::web_sys;
    use serde::Serialize;

    use crate::core::attacher::WidgetHost;
    use crate::core::error::WidgetError;
    use crate::core::timer::{PollTimer, TimerHandle};
    use crate::core::vendor::{ContainerBinding, VendorApi, WidgetSpec};

    /// `setInterval` backed timer
    pub struct BrowserTimer;

    pub struct BrowserInterval {
        id: Cell<Option<i32>>,
        _closure: Closure<dyn Fn()>,
    }

    impl TimerHandle for BrowserInterval {
        fn cancel(&self) {
            if let Some(id) = self.id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }

        fn is_cancelled(&self) -> bool {
            self.id.get().is_none()
        }
    }

    impl Drop for BrowserInterval {
        fn drop(&mut self) {
            self.cancel();
        }
    }

    impl PollTimer for BrowserTimer {
        type Handle = BrowserInterval;

        fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> BrowserInterval {
            let closure = Closure::<dyn Fn()>::new(move || tick());
            let id = web_sys::window().and_then(|window| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        closure.as_ref().unchecked_ref(),
                        i32::try_from(period.as_millis()).unwrap_or(i32::MAX),
                    )
                    .ok()
            });
            BrowserInterval {
                id: Cell::new(id),
                _closure: closure,
            }
        }
    }

    /// Walk `window.a.b.c`, stopping at the first missing link
    pub fn resolve_global(path: &[&str]) -> Option<JsValue> {
        let mut current: JsValue = web_sys::window()?.into();
        for key in path {
            current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
            if current.is_undefined() || current.is_null() {
                return None;
            }
        }
        Some(current)
    }

    /// Owner object and function of a vendor entry point
    fn entry_point(api: &VendorApi) -> Option<(JsValue, js_sys::Function)> {
        let owner = resolve_global(api.global_path)?;
        let entry = js_sys::Reflect::get(&owner, &JsValue::from_str(api.entry))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some((owner, entry))
    }

    fn to_js(value: &serde_json::Value) -> Result<JsValue, WidgetError> {
        value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WidgetError::Options(e.to_string()))
    }

    /// Call a vendor entry point that takes a single options object
    pub fn call_with_options(
        api: &VendorApi,
        options: &serde_json::Value,
    ) -> Result<(), WidgetError> {
        let (owner, entry) =
            entry_point(api).ok_or_else(|| WidgetError::EntryPointMissing(api.qualified_name()))?;
        entry
            .call1(&owner, &to_js(options)?)
            .map(|_| ())
            .map_err(|e| WidgetError::Render(format!("{:?}", e)))
    }

    /// Widget host backed by the live document
    pub struct DomWidgetHost {
        spec: WidgetSpec,
    }

    impl DomWidgetHost {
        pub fn new(spec: WidgetSpec) -> Self {
            Self { spec }
        }

        fn container(&self) -> Option<web_sys::Element> {
            web_sys::window()?
                .document()?
                .query_selector(&self.spec.container.selector())
                .ok()
                .flatten()
        }
    }

    impl WidgetHost for DomWidgetHost {
        fn describe(&self) -> String {
            self.spec.describe()
        }

        fn container_ready(&self) -> bool {
            self.container().is_some()
        }

        fn vendor_ready(&self) -> bool {
            entry_point(&self.spec.api).is_some()
        }

        fn render(&self) -> Result<(), WidgetError> {
            let api = &self.spec.api;
            let (owner, entry) = entry_point(api)
                .ok_or_else(|| WidgetError::EntryPointMissing(api.qualified_name()))?;
            let container = self
                .container()
                .ok_or_else(|| WidgetError::ContainerMissing(self.spec.container.selector()))?;

            let result = match &self.spec.binding {
                ContainerBinding::ElementOption(key) => {
                    let options = to_js(&self.spec.options.as_value())?;
                    js_sys::Reflect::set(&options, &JsValue::from_str(key), &container)
                        .map_err(|e| WidgetError::Options(format!("{:?}", e)))?;
                    entry.call1(&owner, &options)
                }
                ContainerBinding::SelectorArgument { leading } => {
                    let options = to_js(&self.spec.selector_options())?;
                    entry.call2(&owner, &JsValue::from_str(leading), &options)
                }
                ContainerBinding::None => entry.call0(&owner),
            };

            result
                .map(|_| ())
                .map_err(|e| WidgetError::Render(format!("{:?}", e)))
        }

        fn clear_container(&self) {
            if let Some(container) = self.container() {
                container.set_inner_html("");
            }
        }
    }

    /// Append `<script id=.. src=.. async>` to `<head>` unless it is already there
    pub fn load_script(id: &str, src: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.get_element_by_id(id).is_some() {
            return;
        }
        let Ok(script) = document.create_element("script") else {
            return;
        };
        script.set_id(id);
        let _ = script.set_attribute("src", src);
        let _ = script.set_attribute("async", "");
        if let Some(head) = document.head() {
            let _ = head.append_child(&script);
        }
    }
}

/// Provide site settings to the component tree.
pub fn provide_site_settings(settings: SiteSettings) {
    provide_context(settings);
}

/// Settings from context, falling back to the JSON the server embedded in the page.
pub fn use_site_settings() -> SiteSettings {
    if let Some(settings) = use_context::<SiteSettings>() {
        return settings;
    }
    read_embedded_settings().unwrap_or_default()
}

fn read_embedded_settings() -> Option<SiteSettings> {
    #[cfg(feature = "hydrate")]
    {
        let text = leptos::web_sys::window()?
            .document()?
            .get_element_by_id(SETTINGS_ELEMENT_ID)?
            .text_content()?;
        match SiteSettings::from_json(&text) {
            Ok(settings) => Some(settings),
            Err(e) => {
                leptos::logging::warn!("Invalid embedded site settings: {}", e);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Attach `spec` once its container and vendor global are ready.
///
/// Polling starts after mount, stops on attach or give-up, and is torn down with the
/// calling component (which also empties the container).
pub fn use_widget_attacher(spec: WidgetSpec) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::attacher::AttachSession;

        let policy = use_site_settings().attach;
        let session =
            StoredValue::new_local(None::<AttachSession<DomWidgetHost, BrowserTimer>>);

        Effect::new(move |_| {
            let host = DomWidgetHost::new(spec.clone());
            session.set_value(Some(AttachSession::start(host, &BrowserTimer, policy)));
        });

        on_cleanup(move || {
            session.try_update_value(|s| s.take());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = spec;
    }
}

/// Load a vendor script once the component is mounted
pub fn use_vendor_script(id: &'static str, src: &'static str) {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| load_script(id, src));

    #[cfg(not(feature = "hydrate"))]
    let _ = (id, src);
}

/// Mailing-list signup form
#[component]
pub fn NewsletterForm(
    /// Form id; defaults to the configured one
    #[prop(optional, into)]
    form_id: Option<String>,
    /// Heading above the form
    #[prop(default = "Get the newsletter")]
    heading: &'static str,
    /// Line under the heading
    #[prop(optional)]
    blurb: Option<&'static str>,
) -> impl IntoView {
    let form_id = form_id.unwrap_or_else(|| use_site_settings().newsletter_form_id);
    let container_id = newsletter_container_id(&form_id);

    use_vendor_script("newsletter-widget", NEWSLETTER_SCRIPT);
    use_widget_attacher(WidgetSpec::newsletter(&form_id));

    view! {
        <div class="newsletter-block">
            <h3 class="text-2xl font-semibold mb-2">{heading}</h3>
            {blurb.map(|b| view! { <p class="text-muted mb-6">{b}</p> })}
            <div id=container_id class="newsletter-embed min-h-[160px]"></div>
        </div>
    }
}

/// Inline scheduling calendar
#[component]
pub fn BookingInline(
    /// Container id, unique per page
    #[prop(default = "booking-inline")]
    container_id: &'static str,
    /// Scheduling page; defaults to the configured one
    #[prop(optional, into)]
    url: Option<String>,
) -> impl IntoView {
    let url = url.unwrap_or_else(|| use_site_settings().booking_url);

    use_vendor_script("booking-widget", BOOKING_SCRIPT);
    use_widget_attacher(WidgetSpec::booking_inline(container_id, &url));

    view! {
        <div id=container_id class="booking-embed w-full min-w-[320px] h-[700px]"></div>
    }
}

/// Button opening the scheduling popup.
///
/// Falls back to opening the scheduling page in a new tab when the vendor script has
/// not loaded (blocked, offline, still downloading).
#[component]
pub fn BookingButton(
    #[prop(default = "Book a call")] label: &'static str,
    #[prop(default = "btn-primary")] class: &'static str,
    #[prop(optional, into)] url: Option<String>,
) -> impl IntoView {
    let url = url.unwrap_or_else(|| use_site_settings().booking_url);

    use_vendor_script("booking-widget", BOOKING_SCRIPT);
    use_booking_blur();

    let on_click = move |_| open_booking(&url);

    view! {
        <button class=class on:click=on_click>
            {label}
        </button>
    }
}

fn open_booking(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let options = serde_json::json!({ "url": url });
        match browser::call_with_options(&VendorApi::BOOKING_POPUP, &options) {
            Ok(()) => set_page_blur(true),
            Err(e) => {
                leptos::logging::debug_warn!("Booking popup unavailable ({}), opening page", e);
                if let Some(window) = leptos::web_sys::window() {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, VendorApi::BOOKING_POPUP);
    }
}

#[cfg(feature = "hydrate")]
fn set_page_blur(on: bool) {
    let Some(body) = leptos::web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let _ = if on {
        class_list.add_1(PAGE_BLUR_CLASS)
    } else {
        class_list.remove_1(PAGE_BLUR_CLASS)
    };
}

/// Blur the page while the booking popup is open.
///
/// Listens to the lifecycle messages the scheduling widget posts to the window. Escape
/// also clears the blur since the popup closes on it.
pub fn use_booking_blur() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{keydown, message};
        use leptos::wasm_bindgen::JsValue;

        let on_message = window_event_listener(message, move |ev| {
            let name = js_sys::Reflect::get(&ev.data(), &JsValue::from_str("event"))
                .ok()
                .and_then(|v| v.as_string());
            if let Some(event) = name.as_deref().and_then(BookingEvent::from_message_name) {
                set_page_blur(event.blur_after());
            }
        });

        let on_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                set_page_blur(false);
            }
        });

        on_cleanup(move || {
            on_message.remove();
            on_keydown.remove();
            set_page_blur(false);
        });
    }
}

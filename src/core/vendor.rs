//! Vendor embed API descriptors
//!
//! Each third-party widget is described by where its global lives, which function
//! renders it and how the container is handed over. The browser host in
//! `ui::widget` turns a [`WidgetSpec`] into actual `js_sys` calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Location of a vendor entry point on `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorApi {
    /// Property path from `window` to the object owning the entry point
    pub global_path: &'static [&'static str],
    /// Name of the render function on that object
    pub entry: &'static str,
}

impl VendorApi {
    /// Scheduling widget, inline calendar
    pub const BOOKING_INLINE: VendorApi = VendorApi {
        global_path: &["Calendly"],
        entry: "initInlineWidget",
    };

    /// Scheduling widget, popup calendar
    pub const BOOKING_POPUP: VendorApi = VendorApi {
        global_path: &["Calendly"],
        entry: "initPopupWidget",
    };

    /// Mailing-list signup form
    pub const NEWSLETTER: VendorApi = VendorApi {
        global_path: &["sender"],
        entry: "render",
    };

    /// Instagram post embeds
    pub const INSTAGRAM: VendorApi = VendorApi {
        global_path: &["instgrm", "Embeds"],
        entry: "process",
    };

    /// Dotted name for log lines, e.g. `instgrm.Embeds.process`
    pub fn qualified_name(&self) -> String {
        let mut name = self.global_path.join(".");
        name.push('.');
        name.push_str(self.entry);
        name
    }
}

/// Where the widget should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerTarget {
    Id(String),
    Selector(String),
}

impl ContainerTarget {
    pub fn id(id: impl Into<String>) -> Self {
        ContainerTarget::Id(id.into())
    }

    /// CSS selector resolving the container
    pub fn selector(&self) -> String {
        match self {
            ContainerTarget::Id(id) => format!("#{}", id),
            ContainerTarget::Selector(selector) => selector.clone(),
        }
    }
}

/// How the container reaches the vendor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerBinding {
    /// Element set as `options[key]`, single options argument
    ElementOption(&'static str),
    /// `entry(leading, { container: "<selector>", ...options })`
    SelectorArgument { leading: String },
    /// `entry(options)`; the vendor scans the document on its own
    None,
}

/// JSON object handed to the vendor entry point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions(Map<String, Value>);

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Everything needed to attach one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub api: VendorApi,
    pub container: ContainerTarget,
    pub binding: ContainerBinding,
    pub options: RenderOptions,
}

impl WidgetSpec {
    /// Inline scheduling calendar for `url`, rendered into `#container_id`
    pub fn booking_inline(container_id: &str, url: &str) -> Self {
        Self {
            api: VendorApi::BOOKING_INLINE,
            container: ContainerTarget::id(container_id),
            binding: ContainerBinding::ElementOption("parentElement"),
            options: RenderOptions::new().with("url", url).with("resize", true),
        }
    }

    /// Newsletter signup form `form_id`, rendered into `#sender-form-<form_id>`
    pub fn newsletter(form_id: &str) -> Self {
        Self {
            api: VendorApi::NEWSLETTER,
            container: ContainerTarget::id(newsletter_container_id(form_id)),
            binding: ContainerBinding::SelectorArgument {
                leading: form_id.to_string(),
            },
            options: RenderOptions::new(),
        }
    }

    /// Instagram blockquotes inside `#container_id`
    pub fn instagram(container_id: &str) -> Self {
        Self {
            api: VendorApi::INSTAGRAM,
            container: ContainerTarget::id(container_id),
            binding: ContainerBinding::None,
            options: RenderOptions::new(),
        }
    }

    /// Selector plus vendor name, used in log lines
    pub fn describe(&self) -> String {
        format!("{} -> {}", self.api.qualified_name(), self.container.selector())
    }

    /// Options merged with the container selector for `SelectorArgument` bindings
    pub fn selector_options(&self) -> Value {
        let mut options = self.options.clone();
        if matches!(self.binding, ContainerBinding::SelectorArgument { .. }) {
            options = options.with("container", self.container.selector());
        }
        options.as_value()
    }
}

/// Container id the newsletter vendor expects for a form
pub fn newsletter_container_id(form_id: &str) -> String {
    format!("sender-form-{}", form_id)
}

/// Lifecycle notifications posted by the scheduling widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    Opened,
    Closed,
    Scheduled,
}

impl BookingEvent {
    const PREFIX: &'static str = "calendly.";

    /// Map a posted message's `event` field. Unrelated messages give `None`.
    pub fn from_message_name(name: &str) -> Option<Self> {
        let event = name.strip_prefix(Self::PREFIX)?;
        match event {
            "profile_page_viewed" | "event_type_viewed" | "date_and_time_selected" => {
                Some(BookingEvent::Opened)
            }
            "popup_closed" => Some(BookingEvent::Closed),
            "event_scheduled" => Some(BookingEvent::Scheduled),
            _ => None,
        }
    }

    /// Whether the page behind the popup should be blurred afterwards
    pub fn blur_after(&self) -> bool {
        matches!(self, BookingEvent::Opened)
    }
}

/// CSS class put on `<body>` while the booking popup is open
pub const PAGE_BLUR_CLASS: &str = "page-blur";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_names() {
        assert_eq!(
            VendorApi::BOOKING_INLINE.qualified_name(),
            "Calendly.initInlineWidget"
        );
        assert_eq!(VendorApi::INSTAGRAM.qualified_name(), "instgrm.Embeds.process");
    }

    #[test]
    fn test_container_selector() {
        assert_eq!(ContainerTarget::id("booking").selector(), "#booking");
        assert_eq!(
            ContainerTarget::Selector(".embed > div".into()).selector(),
            ".embed > div"
        );
    }

    #[test]
    fn test_newsletter_spec() {
        let spec = WidgetSpec::newsletter("ABC123");
        assert_eq!(spec.container.selector(), "#sender-form-ABC123");
        assert_eq!(spec.describe(), "sender.render -> #sender-form-ABC123");
        assert_eq!(
            spec.selector_options(),
            serde_json::json!({ "container": "#sender-form-ABC123" })
        );
    }

    #[test]
    fn test_booking_inline_keeps_options_untouched() {
        let spec = WidgetSpec::booking_inline("booking", "https://calendly.com/northlight/intro");
        assert_eq!(spec.binding, ContainerBinding::ElementOption("parentElement"));
        assert_eq!(
            spec.selector_options(),
            serde_json::json!({ "url": "https://calendly.com/northlight/intro", "resize": true })
        );
    }

    #[test]
    fn test_booking_events() {
        assert_eq!(
            BookingEvent::from_message_name("calendly.event_type_viewed"),
            Some(BookingEvent::Opened)
        );
        assert_eq!(
            BookingEvent::from_message_name("calendly.event_scheduled"),
            Some(BookingEvent::Scheduled)
        );
        assert_eq!(
            BookingEvent::from_message_name("calendly.popup_closed"),
            Some(BookingEvent::Closed)
        );
        assert_eq!(BookingEvent::from_message_name("calendly.unknown"), None);
        assert_eq!(BookingEvent::from_message_name("webpackHotUpdate"), None);
    }

    #[test]
    fn test_blur_follows_events() {
        assert!(BookingEvent::Opened.blur_after());
        assert!(!BookingEvent::Closed.blur_after());
        assert!(!BookingEvent::Scheduled.blur_after());
    }
}

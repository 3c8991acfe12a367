//! Settings shared by the server and the hydrated client
//!
//! The server builds [`SiteSettings`] from its environment and embeds them in the
//! HTML shell as JSON, so the client renders the same widget ids without a round
//! trip.

use serde::{Deserialize, Serialize};

use super::attacher::AttachPolicy;

/// Id of the `<script type="application/json">` element carrying the settings
pub const SETTINGS_ELEMENT_ID: &str = "site-settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Public origin used in canonical links and social cards
    pub site_url: String,
    /// Scheduling page opened by booking widgets
    pub booking_url: String,
    /// Mailing-list form rendered by newsletter widgets
    pub newsletter_form_id: String,
    /// Polling policy for every widget attachment
    pub attach: AttachPolicy,
}

impl SiteSettings {
    /// JSON safe to place inside a `<script>` element.
    ///
    /// `<` is written as `\u003c` so values can't close the element early.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .map(|json| json.replace('<', "\\u003c"))
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute URL for a site path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: "http://127.0.0.1:3000".to_string(),
            booking_url: "https://calendly.com/northlight-studio/intro".to_string(),
            newsletter_form_id: "bJ7yXq".to_string(),
            attach: AttachPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_keeps_policy() {
        let settings = SiteSettings {
            attach: AttachPolicy::new(250, 40),
            ..SiteSettings::default()
        };
        let parsed = SiteSettings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed.attach.interval_ms, 250);
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_json_cannot_close_script_element() {
        let settings = SiteSettings {
            booking_url: "https://calendly.com/x</script><script>alert(1)</script>".to_string(),
            ..SiteSettings::default()
        };
        let json = settings.to_json();
        assert!(!json.contains('<'));
        assert!(json.contains("\\u003c/script>"));
        assert_eq!(SiteSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SiteSettings::from_json("<html>").is_err());
    }

    #[test]
    fn test_absolute_url() {
        let settings = SiteSettings {
            site_url: "https://pagecraft.example/".to_string(),
            ..SiteSettings::default()
        };
        assert_eq!(
            settings.absolute_url("/agency"),
            "https://pagecraft.example/agency"
        );
    }
}

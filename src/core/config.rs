//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::attacher::AttachPolicy;
use super::error::ConfigError;
use super::settings::SiteSettings;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin of the deployment
    /// Example: https://pagecraft.example
    pub site_url: Option<String>,

    /// Scheduling page for booking widgets
    /// Example: https://calendly.com/northlight-studio/intro
    pub booking_url: Option<String>,

    /// Mailing-list form id for newsletter widgets
    pub newsletter_form_id: Option<String>,

    /// Milliseconds between widget readiness checks
    pub poll_interval_ms: Option<u32>,

    /// Readiness checks before a widget gives up
    pub max_attempts: Option<u32>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup_or_defaults(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_lookup`], but an invalid number is logged and only that
    /// variable falls back to its default.
    pub fn from_lookup_or_defaults(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ignored: Vec<&'static str> = Vec::new();
        loop {
            let filtered = |name: &str| {
                if ignored.iter().any(|n| *n == name) {
                    None
                } else {
                    lookup(name)
                }
            };
            match Self::from_lookup(filtered) {
                Ok(config) => return config,
                Err(err @ ConfigError::InvalidNumber { name, .. }) => {
                    tracing::warn!("Using default for {}: {}", name, err);
                    ignored.push(name);
                }
            }
        }
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            site_url: lookup("SITE_URL"),
            booking_url: lookup("BOOKING_URL"),
            newsletter_form_id: lookup("NEWSLETTER_FORM_ID"),
            poll_interval_ms: parse_positive("WIDGET_POLL_INTERVAL_MS", &lookup)?,
            max_attempts: parse_positive("WIDGET_MAX_ATTEMPTS", &lookup)?,
        })
    }

    /// Check if a booking page is configured
    pub fn has_booking(&self) -> bool {
        self.booking_url.is_some()
    }

    /// Check if a newsletter form is configured
    pub fn has_newsletter(&self) -> bool {
        self.newsletter_form_id.is_some()
    }

    /// Polling policy with defaults filled in
    pub fn attach_policy(&self) -> AttachPolicy {
        AttachPolicy::new(
            self.poll_interval_ms
                .unwrap_or(AttachPolicy::DEFAULT_INTERVAL_MS),
            self.max_attempts
                .unwrap_or(AttachPolicy::DEFAULT_MAX_ATTEMPTS),
        )
    }

    /// The subset of configuration the browser gets to see
    pub fn site_settings(&self) -> SiteSettings {
        let defaults = SiteSettings::default();
        SiteSettings {
            site_url: self.site_url.clone().unwrap_or(defaults.site_url),
            booking_url: self.booking_url.clone().unwrap_or(defaults.booking_url),
            newsletter_form_id: self
                .newsletter_form_id
                .clone()
                .unwrap_or(defaults.newsletter_form_id),
            attach: self.attach_policy(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_positive(
    name: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("SITE_URL", "https://pagecraft.example"),
            ("BOOKING_URL", "https://calendly.com/steady-ground/discovery"),
            ("NEWSLETTER_FORM_ID", "ABC123"),
            ("WIDGET_POLL_INTERVAL_MS", "250"),
            ("WIDGET_MAX_ATTEMPTS", "40"),
        ]))
        .unwrap();

        assert!(config.has_booking());
        assert!(config.has_newsletter());
        assert_eq!(config.attach_policy(), AttachPolicy::new(250, 40));

        let settings = config.site_settings();
        assert_eq!(settings.site_url, "https://pagecraft.example");
        assert_eq!(settings.newsletter_form_id, "ABC123");
    }

    #[test]
    fn test_config_with_no_fields_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert!(!config.has_booking());
        assert!(!config.has_newsletter());
        assert_eq!(config.attach_policy(), AttachPolicy::default());
        assert_eq!(config.site_settings(), SiteSettings::default());
    }

    #[test]
    fn test_config_with_partial_policy() {
        let config =
            Config::from_lookup(lookup(&[("WIDGET_MAX_ATTEMPTS", " 20 ")])).unwrap();

        let policy = config.attach_policy();
        assert_eq!(policy.interval_ms, AttachPolicy::DEFAULT_INTERVAL_MS);
        assert_eq!(policy.max_attempts, 20);
    }

    #[test]
    fn test_config_rejects_bad_numbers() {
        let err = Config::from_lookup(lookup(&[("WIDGET_POLL_INTERVAL_MS", "fast")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "WIDGET_POLL_INTERVAL_MS",
                value: "fast".to_string(),
            }
        );

        assert!(Config::from_lookup(lookup(&[("WIDGET_MAX_ATTEMPTS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("WIDGET_MAX_ATTEMPTS", "-5")])).is_err());
    }

    #[test]
    fn test_config_defaults_only_the_invalid_number() {
        let config = Config::from_lookup_or_defaults(lookup(&[
            ("WIDGET_POLL_INTERVAL_MS", "250"),
            ("WIDGET_MAX_ATTEMPTS", "lots"),
            ("BOOKING_URL", "https://calendly.com/steady-ground/discovery"),
        ]));

        assert_eq!(config.poll_interval_ms, Some(250));
        assert_eq!(config.max_attempts, None);
        assert!(config.has_booking());
        assert_eq!(
            config.attach_policy(),
            AttachPolicy::new(250, AttachPolicy::DEFAULT_MAX_ATTEMPTS)
        );
    }

    #[test]
    fn test_config_defaults_both_invalid_numbers() {
        let config = Config::from_lookup_or_defaults(lookup(&[
            ("WIDGET_POLL_INTERVAL_MS", "soon"),
            ("WIDGET_MAX_ATTEMPTS", "0"),
        ]));

        assert_eq!(config.attach_policy(), AttachPolicy::default());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        let _ = config.has_booking();
        let _ = config.attach_policy();
    }
}

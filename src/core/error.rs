//! Error types shared by the widget glue and the server configuration.

/// Failures that can happen while talking to a vendor embed API.
///
/// None of these are shown to visitors. They end up in the browser console and the
/// affected container simply stays empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("vendor global `{0}` is not available")]
    VendorMissing(String),

    #[error("vendor entry point `{0}` is not a function")]
    EntryPointMissing(String),

    #[error("container `{0}` is not in the document")]
    ContainerMissing(String),

    #[error("render options could not be converted: {0}")]
    Options(String),

    #[error("vendor render call failed: {0}")]
    Render(String),
}

/// Invalid environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_error_messages() {
        assert_eq!(
            WidgetError::VendorMissing("Calendly".into()).to_string(),
            "vendor global `Calendly` is not available"
        );
        assert_eq!(
            WidgetError::ContainerMissing("#sender-form-ABC123".into()).to_string(),
            "container `#sender-form-ABC123` is not in the document"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidNumber {
            name: "WIDGET_MAX_ATTEMPTS",
            value: "lots".into(),
        };
        assert_eq!(
            err.to_string(),
            "WIDGET_MAX_ATTEMPTS must be a positive integer, got `lots`"
        );
    }
}

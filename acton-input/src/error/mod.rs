//! Error types and error handling

use thiserror::Error;

/// Input rendering error type
#[derive(Debug, Error)]
pub enum InputError {
    /// The `type` attribute is not one of the supported input kinds
    #[error("Unsupported input type: {0:?}")]
    UnsupportedType(String),

    /// The `color` attribute is not one of the theme colors
    #[error("Unsupported input color: {0:?}")]
    UnsupportedColor(String),

    /// Option fragments are only rendered for autocompletes
    #[error("Input type {0:?} has no option list to render")]
    NoOptionList(String),

    /// A client action chain could not be serialized
    #[error("Client action serialization error: {0}")]
    Actions(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_message() {
        let err = InputError::UnsupportedType("slider".into());
        assert_eq!(err.to_string(), r#"Unsupported input type: "slider""#);
    }

    #[test]
    fn test_unsupported_color_message() {
        let err = InputError::UnsupportedColor("mauve".into());
        assert!(err.to_string().contains("mauve"));
    }

    #[test]
    fn test_no_option_list_message() {
        let err = InputError::NoOptionList("textarea".into());
        assert_eq!(err.to_string(), r#"Input type "textarea" has no option list to render"#);
    }
}

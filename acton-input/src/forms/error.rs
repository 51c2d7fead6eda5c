//! Field validation error types
//!
//! Errors are kept untranslated (a message template, an optional code and
//! interpolation params) until an input renders them through an
//! [`ErrorTranslator`](super::translate::ErrorTranslator).

use std::collections::BTreeMap;

/// A single validation error for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The message template, possibly containing `%{param}` placeholders
    pub message: String,
    /// Optional error code for programmatic handling and translation
    pub code: Option<String>,
    /// Interpolation parameters, ordered by name
    pub params: Vec<(String, String)>,
}

impl FieldError {
    /// Create a new field error with just a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            params: Vec::new(),
        }
    }

    /// Create a field error with a message and code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
            params: Vec::new(),
        }
    }

    /// Create a field error identified only by its code
    ///
    /// The message is left empty; translators fill it from their catalog.
    #[must_use]
    pub fn code(code: impl Into<String>) -> Self {
        Self::with_code(String::new(), code)
    }

    /// Add an interpolation parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, self.message.is_empty()) {
            (Some(code), true) => write!(f, "{code}"),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Collection of validation errors keyed by field name
///
/// Field order is stable (sorted by name) so anything rendered from the
/// collection is deterministic.
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "is required");
/// errors.add("email", "must be a valid email address");
/// errors.add("password", "must be at least 8 characters");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.for_field("email").len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create a new empty error collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field, FieldError::new(message));
    }

    /// Add an error with a code for a field
    pub fn add_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.push(field, FieldError::with_code(message, code));
    }

    /// Add a prebuilt error for a field
    pub fn push(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if a specific field has errors
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get all errors for a specific field
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Get the total number of errors
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Iterate over all errors
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Convert from validator crate's `ValidationErrors`
///
/// Codes and params are kept so translators can produce their own text;
/// the validator message, when set, becomes the message template.
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let mut params: Vec<(String, String)> = error
                    .params
                    .iter()
                    .filter(|(name, _)| name.as_ref() != "value")
                    .map(|(name, value)| {
                        let value = value
                            .as_str()
                            .map_or_else(|| value.to_string(), ToString::to_string);
                        (name.to_string(), value)
                    })
                    .collect();
                params.sort();

                result.push(
                    field.to_string(),
                    FieldError {
                        message: error
                            .message
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                        code: Some(error.code.to_string()),
                        params,
                    },
                );
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error() {
        let error = FieldError::new("is required");
        assert_eq!(error.message, "is required");
        assert!(error.code.is_none());
    }

    #[test]
    fn test_field_error_code_only() {
        let error = FieldError::code("required").param("min", "3");
        assert!(error.message.is_empty());
        assert_eq!(error.code.as_deref(), Some("required"));
        assert_eq!(error.params, vec![("min".to_string(), "3".to_string())]);
        assert_eq!(error.to_string(), "required");
    }

    #[test]
    fn test_validation_errors_add() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "is required");
        errors.add_with_code("email", "is invalid", "email");

        assert!(errors.has_errors());
        assert!(errors.has_field_error("email"));
        assert!(!errors.has_field_error("password"));
        assert_eq!(errors.for_field("email").len(), 2);
        assert_eq!(errors.count(), 2);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", "z");
        errors.add("alpha", "a");
        let names: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_from_validator_errors() {
        let mut source = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("length");
        error.add_param("min".into(), &3);
        error.add_param("value".into(), &"ab");
        source.add("username", error);

        let errors = ValidationErrors::from(source);
        let field = errors.for_field("username");
        assert_eq!(field.len(), 1);
        assert_eq!(field[0].code.as_deref(), Some("length"));
        assert_eq!(field[0].params, vec![("min".to_string(), "3".to_string())]);
        assert!(field[0].message.is_empty());
    }
}

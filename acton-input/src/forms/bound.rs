//! Form-field binding
//!
//! A bound field bundles the current value, name, id and validation errors
//! of one form field. When an input is rendered from a field, the field's
//! state is normalized once by [`normalize_field`] before the type dispatch.

use super::error::{FieldError, ValidationErrors};
use super::field::{Color, InputValue};
use super::translate::ErrorTranslator;

/// Read access to a form field's state
pub trait FieldRef {
    /// Element id of the field
    fn id(&self) -> &str;
    /// Submission name of the field
    fn name(&self) -> &str;
    /// Current value, if any
    fn value(&self) -> Option<&InputValue>;
    /// Validation errors, untranslated
    fn errors(&self) -> &[FieldError];
    /// Whether the user has interacted with the field or submitted the form
    fn is_used(&self) -> bool;
}

/// A concrete form field
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::{BoundField, FieldError, FieldRef};
///
/// let field = BoundField::new("user[email]")
///     .with_value("someone@example.com")
///     .with_error(FieldError::code("email"))
///     .used(true);
///
/// assert_eq!(field.id(), "user_email");
/// assert!(field.is_used());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundField {
    id: String,
    name: String,
    value: Option<InputValue>,
    errors: Vec<FieldError>,
    used: bool,
}

impl BoundField {
    /// Create a field from its submission name
    ///
    /// The id is derived from the name, with brackets collapsed to
    /// underscores (`user[email]` becomes `user_email`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id_from_name(&name),
            name,
            value: None,
            errors: Vec::new(),
            used: false,
        }
    }

    /// Create a field carrying the errors recorded for `name`
    #[must_use]
    pub fn from_errors(name: impl Into<String>, errors: &ValidationErrors) -> Self {
        let field = Self::new(name);
        let errors = errors.for_field(&field.name).to_vec();
        Self { errors, ..field }
    }

    /// Override the element id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the current value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a validation error
    #[must_use]
    pub fn with_error(mut self, error: FieldError) -> Self {
        self.errors.push(error);
        self
    }

    /// Mark whether the field has been interacted with
    #[must_use]
    pub const fn used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }
}

impl FieldRef for BoundField {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&InputValue> {
        self.value.as_ref()
    }

    fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn is_used(&self) -> bool {
        self.used
    }
}

pub(crate) fn id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' => id.push('_'),
            ']' => {}
            other => id.push(other),
        }
    }
    id.trim_end_matches('_').to_string()
}

/// Input attributes derived from a bound field
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputConfig {
    /// Element id
    pub id: String,
    /// Submission name (`[]` appended for multiple values)
    pub name: String,
    /// Current value
    pub value: Option<InputValue>,
    /// Translated errors to display
    pub errors: Vec<String>,
    /// Effective color
    pub color: Option<Color>,
}

/// Normalize a bound field into input attributes
///
/// Errors are only surfaced once the field has been used; an untouched
/// field reports no errors and keeps `explicit_color`. Any surfaced error
/// forces [`Color::Error`].
#[must_use]
pub fn normalize_field(
    field: &dyn FieldRef,
    multiple: bool,
    explicit_color: Option<Color>,
    translator: &dyn ErrorTranslator,
) -> NormalizedInputConfig {
    let errors: Vec<String> = if field.is_used() {
        field
            .errors()
            .iter()
            .map(|error| translator.translate(error))
            .collect()
    } else {
        Vec::new()
    };

    let name = if multiple {
        format!("{}[]", field.name())
    } else {
        field.name().to_string()
    };

    let color = if errors.is_empty() {
        explicit_color
    } else {
        Some(Color::Error)
    };

    tracing::trace!(
        name = %name,
        used = field.is_used(),
        error_count = errors.len(),
        "normalized bound field"
    );

    NormalizedInputConfig {
        id: field.id().to_string(),
        name,
        value: field.value().cloned(),
        errors,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::translate::DefaultTranslator;

    fn required_field() -> BoundField {
        BoundField::new("email").with_error(FieldError::code("required"))
    }

    #[test]
    fn test_id_from_name() {
        assert_eq!(BoundField::new("user[email]").id, "user_email");
        assert_eq!(BoundField::new("a[b][c]").id, "a_b_c");
        assert_eq!(BoundField::new("plain").id, "plain");
    }

    #[test]
    fn test_untouched_field_hides_errors() {
        let field = required_field();
        let config = normalize_field(&field, false, Some(Color::Primary), &DefaultTranslator);
        assert!(config.errors.is_empty());
        assert_eq!(config.color, Some(Color::Primary));
    }

    #[test]
    fn test_used_field_shows_translated_errors() {
        let field = required_field().used(true);
        let config = normalize_field(&field, false, Some(Color::Primary), &DefaultTranslator);
        assert_eq!(config.errors, vec!["can't be blank".to_string()]);
        assert_eq!(config.color, Some(Color::Error));
    }

    #[test]
    fn test_multiple_appends_brackets() {
        let field = BoundField::new("tags");
        let config = normalize_field(&field, true, None, &DefaultTranslator);
        assert_eq!(config.name, "tags[]");
        assert_eq!(config.id, "tags");
    }

    #[test]
    fn test_from_errors_collects_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "is taken");
        errors.add("name", "is short");
        let field = BoundField::from_errors("email", &errors);
        assert_eq!(field.errors().len(), 1);
        assert_eq!(field.errors()[0].message, "is taken");
    }
}

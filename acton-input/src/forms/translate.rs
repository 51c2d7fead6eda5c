//! Error message translation
//!
//! Inputs show field errors as human-readable text. The [`ErrorTranslator`]
//! trait turns a [`FieldError`] into that text; applications plug in their
//! own catalog or closure, and [`DefaultTranslator`] covers the common
//! validator codes in English.

use std::collections::BTreeMap;

use super::error::FieldError;

/// Turns a field error into display text
pub trait ErrorTranslator: Send + Sync {
    /// Translate a single error
    fn translate(&self, error: &FieldError) -> String;
}

impl<F> ErrorTranslator for F
where
    F: Fn(&FieldError) -> String + Send + Sync,
{
    fn translate(&self, error: &FieldError) -> String {
        self(error)
    }
}

/// Replace `%{name}` placeholders with the error's params
#[must_use]
pub fn interpolate(template: &str, params: &[(String, String)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("%{{{name}}}"), value)
    })
}

/// English messages for the codes produced by `validator`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl DefaultTranslator {
    fn template_for(code: &str) -> Option<&'static str> {
        Some(match code {
            "required" => "can't be blank",
            "email" => "must be a valid email address",
            "url" => "must be a valid URL",
            "length" => "has an invalid length",
            "range" => "is out of range",
            "must_match" => "does not match",
            "contains" => "is missing a required value",
            "regex" => "has invalid format",
            "credit_card" => "must be a valid card number",
            "inclusion" => "is invalid",
            "acceptance" => "must be accepted",
            _ => return None,
        })
    }
}

impl ErrorTranslator for DefaultTranslator {
    fn translate(&self, error: &FieldError) -> String {
        if !error.message.is_empty() {
            return interpolate(&error.message, &error.params);
        }
        let template = error
            .code
            .as_deref()
            .and_then(Self::template_for)
            .unwrap_or("is invalid");
        interpolate(template, &error.params)
    }
}

/// Translator backed by a code → template catalog
///
/// Falls back to [`DefaultTranslator`] for codes the catalog lacks.
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::{CatalogTranslator, ErrorTranslator, FieldError};
///
/// let catalog = CatalogTranslator::new()
///     .entry("required", "ist erforderlich")
///     .entry("length", "muss mindestens %{min} Zeichen lang sein");
///
/// let msg = catalog.translate(&FieldError::code("length").param("min", "8"));
/// assert_eq!(msg, "muss mindestens 8 Zeichen lang sein");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: BTreeMap<String, String>,
}

impl CatalogTranslator {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template for a code
    #[must_use]
    pub fn entry(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries.insert(code.into(), template.into());
        self
    }
}

impl ErrorTranslator for CatalogTranslator {
    fn translate(&self, error: &FieldError) -> String {
        error
            .code
            .as_deref()
            .and_then(|code| self.entries.get(code))
            .map_or_else(
                || DefaultTranslator.translate(error),
                |template| interpolate(template, &error.params),
            )
    }
}

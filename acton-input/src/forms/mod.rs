//! Smart form inputs for HTMX applications
//!
//! One entry point renders every kind of input. The `type` of an
//! [`InputBuilder`] selects the leaf component:
//!
//! - `checkbox`, `toggle`, `radio`
//! - `select`, `textarea`, `range`
//! - `autocomplete` (text box, option list and hidden value)
//! - every other supported type renders as a text-like `<input>`
//!
//! # Quick Start
//!
//! ```rust
//! use acton_input::forms::{Color, InputBuilder, InputType};
//!
//! let html = InputBuilder::text(InputType::Email, "email")
//!     .label("Email Address")
//!     .placeholder("you@example.com")
//!     .color(Color::Primary)
//!     .required()
//!     .render()
//!     .unwrap();
//!
//! assert!(html.contains(r#"class="input input-bordered input-primary""#));
//! ```
//!
//! # Field Binding
//!
//! A bound field supplies the value, name, id and errors. Errors only
//! appear once the field has been used, and switch the color to `error`:
//!
//! ```rust
//! use acton_input::forms::{BoundField, InputBuilder, InputType, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! errors.add_with_code("email", "", "required");
//!
//! let field = BoundField::from_errors("email", &errors).used(true);
//! let html = InputBuilder::text(InputType::Email, "email")
//!     .field(&field)
//!     .render()
//!     .unwrap();
//!
//! assert!(html.contains("can&#39;t be blank") || html.contains("can't be blank"));
//! assert!(html.contains("input-error"));
//! ```
//!
//! # Autocomplete
//!
//! ```rust
//! use acton_input::forms::{InputBuilder, QueryHandler};
//!
//! let html = InputBuilder::autocomplete("city")
//!     .options([("Paris", "par"), ("Tokyo", "tyo")])
//!     .value("tyo")
//!     .on_query(QueryHandler::get("/cities").target("#city-listbox"))
//!     .render()
//!     .unwrap();
//!
//! assert!(html.contains(r#"value="Tokyo""#));
//! assert!(html.contains(r#"hx-trigger="input changed delay:300ms""#));
//! ```
//!
//! Picking an option runs a declarative action chain in the browser. Pages
//! load the interpreter once with [`runtime_script_tag`].

mod actions;
mod autocomplete;
mod bound;
mod builder;
mod error;
mod field;
mod html;
mod normalize;
mod render;
mod runtime;
mod template_fn;
mod translate;

pub use actions::{ActionChain, ActionOp, ClientAction, QueryHandler, QueryMethod, Target};
pub use autocomplete::{display_label, select_chain, typing_chain};
pub use bound::{normalize_field, BoundField, FieldRef, NormalizedInputConfig};
pub use builder::{CheckboxSpec, InputAttrs, InputBuilder, InputKind, InputSpec};
pub use error::{FieldError, ValidationErrors};
pub use field::{Color, HtmxAttrs, InputType, InputValue, NativeAttrs, SelectOption};
pub use html::{escape_attr, escape_html};
pub use normalize::{
    checkbox_checked, normalize_value, radio_checked, DEFAULT_CHECKED_VALUE,
    DEFAULT_UNCHECKED_VALUE,
};
pub use render::InputRenderer;
pub use runtime::{runtime_script_tag, ACTION_EVENTS, CLIENT_RUNTIME};
pub use template_fn::register_input_function;
pub use translate::{interpolate, CatalogTranslator, DefaultTranslator, ErrorTranslator};

#[cfg(test)]
mod tests {
    use super::*;

    /// Markup that identifies the element rendered for a type
    fn role_marker(input_type: InputType) -> String {
        match input_type {
            InputType::Checkbox => r#"type="checkbox""#.to_string(),
            InputType::Toggle => r#"role="switch""#.to_string(),
            InputType::Radio => r#"type="radio""#.to_string(),
            InputType::Select => "<select".to_string(),
            InputType::Textarea => "<textarea".to_string(),
            InputType::Range => r#"type="range""#.to_string(),
            InputType::Autocomplete => r#"role="combobox""#.to_string(),
            other => format!(r#"type="{}""#, other.as_str()),
        }
    }

    #[test]
    fn test_each_type_yields_exactly_one_element_with_its_role() {
        for input_type in InputType::ALL {
            let html = InputBuilder::text(input_type, "f").render().unwrap();
            let marker = role_marker(input_type);
            assert_eq!(html.matches(marker.as_str()).count(), 1, "{input_type}: {html}");
        }
    }

    #[test]
    fn test_composite_parts_are_single() {
        let html = InputBuilder::autocomplete("f").render().unwrap();
        assert_eq!(html.matches(r#"role="listbox""#).count(), 1);
        assert_eq!(html.matches(r#"type="hidden""#).count(), 1);

        let html = InputBuilder::toggle("f").render().unwrap();
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 1);
        assert_eq!(html.matches(r#"type="hidden""#).count(), 1);

        let html = InputBuilder::select("f").options([("A", "a")]).render().unwrap();
        assert_eq!(html.matches("</select>").count(), 1);
    }

    #[test]
    fn test_unused_field_hides_errors() {
        let field = BoundField::new("email").with_error(FieldError::code("required"));
        let html = InputBuilder::text(InputType::Email, "email")
            .field(&field)
            .color(Color::Primary)
            .render()
            .unwrap();
        assert!(!html.contains("input-error-message"));
        assert!(html.contains("input-primary"));
    }

    #[test]
    fn test_used_field_shows_errors_in_order() {
        let field = BoundField::new("password")
            .with_error(FieldError::code("required"))
            .with_error(FieldError::new("is too common"))
            .used(true);
        let html = InputBuilder::text(InputType::Password, "password")
            .field(&field)
            .render()
            .unwrap();
        let first = html.find("can't be blank").unwrap();
        let second = html.find("is too common").unwrap();
        assert!(first < second);
        assert!(html.contains("input-error"));
    }

    #[test]
    fn test_catalog_translator_through_renderer() {
        let renderer = InputRenderer::default()
            .with_translator(CatalogTranslator::new().entry("length", "needs %{min} characters"));
        let field = BoundField::new("name")
            .with_error(FieldError::code("length").param("min", "3"))
            .used(true);
        let html = renderer
            .render_builder(&InputBuilder::text(InputType::Text, "name").field(&field))
            .unwrap();
        assert!(html.contains("needs 3 characters"));
    }
}

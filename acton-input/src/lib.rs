//! acton-input: smart form inputs for HTMX applications
//!
//! A single `input` entry point renders checkboxes, toggles, radios,
//! selects, textareas, range sliders, autocompletes and every text-like
//! input type. Inputs can be bound to form fields, which supply their
//! value, name and validation errors.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_input::prelude::*;
//!
//! let html = InputBuilder::select("country")
//!     .label("Country")
//!     .options([("France", "fr"), ("Japan", "jp")])
//!     .prompt("Choose a country")
//!     .value("fr")
//!     .render()
//!     .unwrap();
//!
//! assert!(html.contains(r#"<option value="fr" selected>France</option>"#));
//! ```
//!
//! # Templates
//!
//! [`forms::register_input_function`] exposes the same entry point to
//! minijinja templates as `input(...)`.

pub mod config;
pub mod error;
pub mod forms;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::ActonInputConfig;
    pub use crate::error::InputError;
    pub use crate::forms::{
        register_input_function, ActionChain, BoundField, CatalogTranslator, Color,
        DefaultTranslator, ErrorTranslator, FieldError, FieldRef, InputAttrs, InputBuilder,
        InputRenderer, InputType, InputValue, QueryHandler, SelectOption, Target,
        ValidationErrors,
    };
}

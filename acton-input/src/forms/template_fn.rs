//! minijinja integration
//!
//! Registers an `input(...)` function so templates can render inputs with
//! keyword arguments:
//!
//! ```jinja
//! {{ input(type="select", name="country", options=[["France", "fr"], ["Japan", "jp"]], value=country) }}
//! ```

use std::sync::Arc;

use minijinja::value::Kwargs;
use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Deserialize;

use super::builder::InputAttrs;
use super::render::InputRenderer;

/// Register the `input` function in a template environment
///
/// Keyword arguments are read as [`InputAttrs`]. An unsupported `type` or
/// `color` fails the template render.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use acton_input::forms::{register_input_function, InputRenderer};
///
/// let mut env = minijinja::Environment::new();
/// register_input_function(&mut env, Arc::new(InputRenderer::default()));
/// env.add_template("t", r#"{{ input(type="toggle", name="dark", value=true) }}"#).unwrap();
///
/// let html = env.get_template("t").unwrap().render(()).unwrap();
/// assert!(html.contains(r#"role="switch""#));
/// ```
pub fn register_input_function(env: &mut Environment<'_>, renderer: Arc<InputRenderer>) {
    env.add_function("input", move |kwargs: Kwargs| -> Result<Value, Error> {
        let attrs = InputAttrs::deserialize(Value::from(kwargs))?;
        let builder = attrs.into_builder();
        let html = renderer.render_builder(&builder).map_err(|e| {
            Error::new(ErrorKind::InvalidOperation, "failed to render input").with_source(e)
        })?;
        Ok(Value::from_safe_string(html))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_input_function(&mut env, Arc::new(InputRenderer::default()));
        env
    }

    #[test]
    fn test_select_from_template() {
        let env = env();
        let html = env
            .render_str(
                r#"{{ input(type="select", name="c", options=[["A", "a"], ["B", "b"]], value=current) }}"#,
                minijinja::context! { current => "b" },
            )
            .unwrap();
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
    }

    #[test]
    fn test_output_is_not_escaped() {
        let env = env();
        let html = env
            .render_str(r#"{{ input(type="text", name="q") }}"#, ())
            .unwrap();
        assert!(html.contains("<input"));
        assert!(!html.contains("&lt;input"));
    }

    #[test]
    fn test_unknown_type_fails_render() {
        let env = env();
        let err = env
            .render_str(r#"{{ input(type="slider", name="x") }}"#, ())
            .unwrap_err();
        assert!(err.to_string().contains("slider") || format!("{err:#}").contains("slider"));
    }

    #[test]
    fn test_autocomplete_with_query_handler() {
        let env = env();
        let html = env
            .render_str(
                r#"{{ input(type="autocomplete", name="city", on_query={"url": "/cities"}) }}"#,
                (),
            )
            .unwrap();
        assert!(html.contains(r#"hx-get="/cities""#));
        assert!(html.contains(r#"hx-trigger="input changed delay:300ms""#));
    }
}

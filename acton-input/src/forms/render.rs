//! Input rendering to HTML
//!
//! [`InputRenderer`] is the dispatcher: it takes a resolved [`InputSpec`],
//! picks the leaf renderer for its [`InputKind`] and wraps the element
//! with its label, errors and help text.

use std::fmt::Write;

use super::autocomplete;
use super::builder::{CheckboxSpec, InputBuilder, InputKind, InputSpec};
use super::field::{InputType, InputValue, SelectOption};
use super::html::{escape_html, write_attr, write_flag, write_num_attr, write_opt_attr};
use super::translate::{DefaultTranslator, ErrorTranslator};
use crate::config::ActonInputConfig;
use crate::error::InputError;

/// Renders inputs to HTML
///
/// The renderer is `Send + Sync` and can be shared from application state.
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::{InputBuilder, InputRenderer};
///
/// let renderer = InputRenderer::default();
/// let html = renderer
///     .render_builder(&InputBuilder::checkbox("terms").label("I agree").value("on"))
///     .unwrap();
///
/// assert!(html.contains(r#"type="checkbox""#));
/// assert!(html.contains(" checked"));
/// ```
pub struct InputRenderer {
    config: ActonInputConfig,
    translator: Box<dyn ErrorTranslator>,
}

impl Default for InputRenderer {
    fn default() -> Self {
        Self::new(ActonInputConfig::default())
    }
}

impl std::fmt::Debug for InputRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl InputRenderer {
    /// Create a renderer with the given configuration
    #[must_use]
    pub fn new(config: ActonInputConfig) -> Self {
        Self {
            config,
            translator: Box::new(DefaultTranslator),
        }
    }

    /// Use a custom error translator for bound fields
    #[must_use]
    pub fn with_translator(mut self, translator: impl ErrorTranslator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ActonInputConfig {
        &self.config
    }

    /// Active error translator
    #[must_use]
    pub fn translator(&self) -> &dyn ErrorTranslator {
        self.translator.as_ref()
    }

    /// Build and render an input
    ///
    /// # Errors
    ///
    /// Returns an error if a client action chain fails to serialize.
    pub fn render_builder(&self, builder: &InputBuilder<'_>) -> Result<String, InputError> {
        self.render(&builder.build(self.translator()))
    }

    /// Render a resolved input, including its wrapper
    ///
    /// # Errors
    ///
    /// Returns an error if a client action chain fails to serialize.
    pub fn render(&self, spec: &InputSpec) -> Result<String, InputError> {
        let input_type = spec.input_type();
        tracing::debug!(input_type = %input_type, name = ?spec.name, "rendering input");

        let element = match &spec.kind {
            InputKind::Checkbox(checkbox) => self.render_checkbox(spec, checkbox, false),
            InputKind::Toggle(checkbox) => self.render_checkbox(spec, checkbox, true),
            InputKind::Radio { checked, value } => {
                self.render_radio(spec, *checked, value.as_deref())
            }
            InputKind::Select {
                options,
                prompt,
                selected,
                multiple,
            } => self.render_select(spec, options, prompt.as_deref(), selected.as_ref(), *multiple),
            InputKind::Autocomplete {
                options,
                value,
                on_query,
            } => autocomplete::render(self, spec, options, value.as_deref(), on_query.as_ref())?,
            InputKind::Textarea { content } => self.render_textarea(spec, content),
            InputKind::Range { value } => self.render_range(spec, value.as_deref()),
            InputKind::Text { input_type, value } => {
                self.render_text(spec, *input_type, value.as_deref())
            }
        };

        Ok(self.wrap(spec, &element))
    }

    /// Render only the option items of an autocomplete
    ///
    /// Query endpoints answer with this fragment, built from the same
    /// builder as the full input so option actions target the same ids.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoOptionList`] if the builder is not an
    /// autocomplete, or an error if an action chain fails to serialize.
    pub fn render_options(&self, builder: &InputBuilder<'_>) -> Result<String, InputError> {
        let spec = builder.build(self.translator());
        match &spec.kind {
            InputKind::Autocomplete { options, value, .. } => {
                autocomplete::render_options(self, &spec, options, value.as_deref())
            }
            other => Err(InputError::NoOptionList(other.input_type().to_string())),
        }
    }

    fn wrap(&self, spec: &InputSpec, element: &str) -> String {
        if spec.input_type() == InputType::Hidden {
            return element.to_string();
        }

        let settings = &self.config.render;
        let mut html = String::with_capacity(element.len() + 128);

        if settings.wrap_fields {
            let _ = writeln!(html, r#"<div class="{}">"#, settings.group_class);
        }

        let label_after = spec.input_type().is_checkable();
        let label_html = spec.label.as_ref().map(|label| {
            let mut tag = String::from("  <label");
            write_opt_attr(&mut tag, "for", label_target(spec).as_deref());
            write_attr(&mut tag, "class", &settings.label_class);
            let _ = writeln!(tag, ">{}</label>", escape_html(label));
            tag
        });

        if !label_after {
            if let Some(ref label) = label_html {
                html.push_str(label);
            }
        }
        html.push_str(element);
        if label_after {
            if let Some(ref label) = label_html {
                html.push_str(label);
            }
        }

        for error in &spec.errors {
            let _ = writeln!(
                html,
                r#"  <p class="{}">{}</p>"#,
                settings.error_class,
                escape_html(error)
            );
        }

        if let Some(ref help) = spec.help {
            let _ = writeln!(
                html,
                r#"  <p class="{}">{}</p>"#,
                settings.help_class,
                escape_html(help)
            );
        }

        if settings.wrap_fields {
            html.push_str("</div>\n");
        }
        html
    }

    pub(super) fn classes(&self, spec: &InputSpec, input_type: InputType) -> String {
        self.config
            .theme
            .classes(input_type, spec.color, spec.ghost, spec.class.as_deref())
    }

    fn render_checkbox(&self, spec: &InputSpec, checkbox: &CheckboxSpec, toggle: bool) -> String {
        let mut html = String::with_capacity(192);
        let input_type = if toggle {
            InputType::Toggle
        } else {
            InputType::Checkbox
        };

        if let (Some(name), Some(unchecked)) = (&spec.name, &checkbox.unchecked_value) {
            html.push_str("  <input");
            write_attr(&mut html, "type", "hidden");
            write_attr(&mut html, "name", name);
            write_attr(&mut html, "value", unchecked);
            html.push_str(">\n");
        }

        html.push_str("  <input");
        write_attr(&mut html, "type", "checkbox");
        if toggle {
            write_attr(&mut html, "role", "switch");
        }
        write_identity(&mut html, spec);
        write_attr(&mut html, "class", &self.classes(spec, input_type));
        write_attr(&mut html, "value", &checkbox.checked_value);
        write_flag(&mut html, "checked", checkbox.checked);
        write_passthrough(&mut html, spec);
        html.push_str(">\n");

        tracing::trace!(checked = checkbox.checked, toggle, "rendered checkbox");
        html
    }

    fn render_radio(&self, spec: &InputSpec, checked: bool, value: Option<&str>) -> String {
        let mut html = String::with_capacity(128);
        html.push_str("  <input");
        write_attr(&mut html, "type", "radio");
        write_identity(&mut html, spec);
        write_attr(&mut html, "class", &self.classes(spec, InputType::Radio));
        write_opt_attr(&mut html, "value", value);
        write_flag(&mut html, "checked", checked);
        write_passthrough(&mut html, spec);
        html.push_str(">\n");
        html
    }

    fn render_select(
        &self,
        spec: &InputSpec,
        options: &[SelectOption],
        prompt: Option<&str>,
        selected: Option<&InputValue>,
        multiple: bool,
    ) -> String {
        let mut html = String::with_capacity(256);

        html.push_str("  <select");
        write_identity(&mut html, spec);
        write_attr(&mut html, "class", &self.classes(spec, InputType::Select));
        write_flag(&mut html, "multiple", multiple);
        write_passthrough(&mut html, spec);
        html.push_str(">\n");

        if let Some(prompt) = prompt {
            let _ = writeln!(html, r#"    <option value="">{}</option>"#, escape_html(prompt));
        }

        let mut selected_count = 0_usize;
        for opt in options {
            let is_selected = selected.is_some_and(|value| value.matches(&opt.value));
            selected_count += usize::from(is_selected);

            html.push_str("    <option");
            write_attr(&mut html, "value", &opt.value);
            write_flag(&mut html, "disabled", opt.disabled);
            write_flag(&mut html, "selected", is_selected);
            let _ = writeln!(html, ">{}</option>", escape_html(&opt.label));
        }

        html.push_str("  </select>\n");
        tracing::trace!(selected_count, option_count = options.len(), "rendered select");
        html
    }

    fn render_textarea(&self, spec: &InputSpec, content: &str) -> String {
        let mut html = String::with_capacity(128 + content.len());
        html.push_str("  <textarea");
        write_identity(&mut html, spec);
        write_attr(&mut html, "class", &self.classes(spec, InputType::Textarea));
        write_passthrough(&mut html, spec);
        html.push('>');
        html.push_str(&escape_html(content));
        html.push_str("</textarea>\n");
        html
    }

    fn render_range(&self, spec: &InputSpec, value: Option<&str>) -> String {
        let mut html = String::with_capacity(128);
        html.push_str("  <input");
        write_attr(&mut html, "type", "range");
        write_identity(&mut html, spec);
        write_attr(&mut html, "class", &self.classes(spec, InputType::Range));
        write_opt_attr(&mut html, "value", value);
        write_passthrough(&mut html, spec);
        html.push_str(">\n");
        html
    }

    fn render_text(&self, spec: &InputSpec, input_type: InputType, value: Option<&str>) -> String {
        let mut html = String::with_capacity(128);
        html.push_str("  <input");
        write_attr(&mut html, "type", input_type.as_str());
        write_identity(&mut html, spec);
        if input_type == InputType::Hidden {
            write_opt_attr(&mut html, "class", spec.class.as_deref());
        } else {
            write_attr(&mut html, "class", &self.classes(spec, input_type));
        }
        write_opt_attr(&mut html, "value", value);
        write_passthrough(&mut html, spec);
        html.push_str(">\n");
        html
    }
}

fn label_target(spec: &InputSpec) -> Option<String> {
    match spec.kind {
        InputKind::Autocomplete { .. } => autocomplete::text_box_id(spec),
        _ => spec.id.clone(),
    }
}

fn write_identity(html: &mut String, spec: &InputSpec) {
    write_opt_attr(html, "id", spec.id.as_deref());
    write_opt_attr(html, "name", spec.name.as_deref());
}

/// Native, HTMX and custom attributes, in a fixed order
pub(super) fn write_passthrough(html: &mut String, spec: &InputSpec) {
    let attrs = &spec.attrs;
    write_opt_attr(html, "autocomplete", attrs.autocomplete.as_deref());
    write_num_attr(html, "cols", attrs.cols);
    write_flag(html, "disabled", attrs.disabled);
    write_opt_attr(html, "form", attrs.form.as_deref());
    write_opt_attr(html, "list", attrs.list.as_deref());
    write_opt_attr(html, "max", attrs.max.as_deref());
    write_num_attr(html, "maxlength", attrs.maxlength);
    write_opt_attr(html, "min", attrs.min.as_deref());
    write_num_attr(html, "minlength", attrs.minlength);
    write_opt_attr(html, "pattern", attrs.pattern.as_deref());
    write_opt_attr(html, "placeholder", attrs.placeholder.as_deref());
    write_flag(html, "readonly", attrs.readonly);
    write_flag(html, "required", attrs.required);
    write_num_attr(html, "rows", attrs.rows);
    write_num_attr(html, "size", attrs.size);
    write_opt_attr(html, "step", attrs.step.as_deref());
    write_flag(html, "autofocus", attrs.autofocus);

    if !spec.errors.is_empty() {
        write_attr(html, "aria-invalid", "true");
    }

    let htmx = &spec.htmx;
    write_opt_attr(html, "hx-get", htmx.get.as_deref());
    write_opt_attr(html, "hx-post", htmx.post.as_deref());
    write_opt_attr(html, "hx-target", htmx.target.as_deref());
    write_opt_attr(html, "hx-swap", htmx.swap.as_deref());
    write_opt_attr(html, "hx-trigger", htmx.trigger.as_deref());
    write_opt_attr(html, "hx-indicator", htmx.indicator.as_deref());
    write_opt_attr(html, "hx-include", htmx.include.as_deref());

    for (name, value) in &spec.custom_attrs {
        write_attr(html, name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderSettings;
    use crate::forms::field::Color;

    fn render(builder: &InputBuilder<'_>) -> String {
        builder.render().unwrap()
    }

    #[test]
    fn test_render_text_input() {
        let html = render(
            &InputBuilder::text(InputType::Email, "email")
                .id("email")
                .label("Email")
                .placeholder("you@example.com")
                .required()
                .value("a@b.c"),
        );

        assert!(html.contains(
            r#"<input type="email" id="email" name="email" class="input input-bordered" value="a@b.c" placeholder="you@example.com" required>"#
        ));
        assert!(html.contains(r#"<label for="email" class="label">Email</label>"#));
        assert!(html.starts_with(r#"<div class="form-control">"#));
    }

    #[test]
    fn test_render_checkbox_with_hidden_default() {
        let html = render(&InputBuilder::checkbox("terms").id("terms").value("on"));
        assert!(html.contains(r#"<input type="hidden" name="terms" value="false">"#));
        assert!(html.contains(
            r#"<input type="checkbox" id="terms" name="terms" class="checkbox" value="true" checked>"#
        ));
    }

    #[test]
    fn test_checkbox_without_unchecked_value_has_no_hidden_input() {
        let html = render(&InputBuilder::checkbox("terms").without_unchecked_value());
        assert!(!html.contains(r#"type="hidden""#));
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 1);
    }

    #[test]
    fn test_bound_checkbox_group_submits_only_checked_values() {
        use crate::forms::bound::BoundField;

        let field = BoundField::new("tags").with_value(vec!["a".to_string(), "b".to_string()]);
        let html = render(
            &InputBuilder::checkbox("tags")
                .multiple()
                .checked_value("b")
                .field(&field),
        );
        assert!(!html.contains(r#"type="hidden""#));
        assert!(html.contains(
            r#"<input type="checkbox" id="tags" name="tags[]" class="checkbox" value="b" checked>"#
        ));
    }

    #[test]
    fn test_checkbox_label_after_element() {
        let html = render(&InputBuilder::checkbox("terms").id("terms").label("Agree"));
        let element = html.find(r#"type="checkbox""#).unwrap();
        let label = html.find("<label").unwrap();
        assert!(label > element);
    }

    #[test]
    fn test_render_toggle_has_switch_role() {
        let html = render(&InputBuilder::toggle("dark").color(Color::Accent));
        assert!(html.contains(r#"type="checkbox" role="switch""#));
        assert!(html.contains(r#"class="toggle toggle-accent""#));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_render_radio() {
        let html = render(&InputBuilder::radio("size").value("true"));
        assert!(html.contains(r#"<input type="radio" name="size" class="radio" value="true" checked>"#));
    }

    #[test]
    fn test_render_select_marks_match() {
        let html = render(
            &InputBuilder::select("letter")
                .options([("A", "a"), ("B", "b")])
                .value("b"),
        );
        assert!(html.contains(r#"<option value="a">A</option>"#));
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn test_render_select_prompt_first() {
        let html = render(
            &InputBuilder::select("letter")
                .options([("A", "a"), ("B", "b")])
                .prompt("Choose"),
        );
        let prompt = html.find(r#"<option value="">Choose</option>"#).unwrap();
        let first = html.find(r#"<option value="a">"#).unwrap();
        assert!(prompt < first);
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_render_multi_select() {
        let html = render(
            &InputBuilder::select("tags")
                .multiple()
                .options([("A", "a"), ("B", "b"), ("C", "c")])
                .value(vec!["a".to_string(), "c".to_string()]),
        );
        assert!(html.contains(" multiple"));
        assert_eq!(html.matches(" selected").count(), 2);
    }

    #[test]
    fn test_render_textarea() {
        let html = render(&InputBuilder::textarea("bio").rows(5).value("<b>hi</b>"));
        assert!(html.contains(r#"rows="5""#));
        assert!(html.contains(">\n&lt;b&gt;hi&lt;/b&gt;</textarea>"));
    }

    #[test]
    fn test_render_range() {
        let html = render(&InputBuilder::range("volume").min("0").max("10").value(4_i64));
        assert!(html.contains(
            r#"<input type="range" name="volume" class="range" value="4" max="10" min="0">"#
        ));
    }

    #[test]
    fn test_hidden_input_is_not_wrapped() {
        let html = render(&InputBuilder::text(InputType::Hidden, "token").value("abc").label("x"));
        assert_eq!(html, "  <input type=\"hidden\" name=\"token\" value=\"abc\">\n");
    }

    #[test]
    fn test_errors_render_and_mark_invalid() {
        let html = render(&InputBuilder::text(InputType::Text, "n").errors(["is <short>"]));
        assert!(html.contains(r#"<p class="input-error-message">is &lt;short&gt;</p>"#));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn test_unwrapped_layout() {
        let mut config = ActonInputConfig::default();
        config.render = RenderSettings {
            wrap_fields: false,
            ..RenderSettings::default()
        };
        let renderer = InputRenderer::new(config);
        let html = renderer
            .render_builder(&InputBuilder::text(InputType::Text, "q").help("Search terms"))
            .unwrap();
        assert!(!html.contains("<div"));
        assert!(html.contains(r#"<p class="input-help">Search terms</p>"#));
    }

    #[test]
    fn test_custom_translator() {
        use crate::forms::bound::BoundField;
        use crate::forms::error::FieldError;

        let renderer = InputRenderer::default().with_translator(|e: &FieldError| {
            format!("[{}]", e.code.as_deref().unwrap_or("?"))
        });
        let field = BoundField::new("age")
            .with_error(FieldError::code("range"))
            .used(true);
        let html = renderer
            .render_builder(&InputBuilder::text(InputType::Number, "age").field(&field))
            .unwrap();
        assert!(html.contains(">[range]</p>"));
    }

    #[test]
    fn test_htmx_and_custom_attrs() {
        let html = render(
            &InputBuilder::text(InputType::Search, "q")
                .htmx(crate::forms::field::HtmxAttrs {
                    get: Some("/search".into()),
                    trigger: Some("keyup changed delay:500ms".into()),
                    ..Default::default()
                })
                .attr("data-test", "x"),
        );
        assert!(html.contains(
            r#"hx-get="/search" hx-trigger="keyup changed delay:500ms" data-test="x">"#
        ));
    }
}

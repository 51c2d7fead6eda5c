//! Input builder API with fluent interface
//!
//! [`InputBuilder`] collects the attributes of one input. [`InputBuilder::build`]
//! resolves them once into an [`InputSpec`]: field binding is applied,
//! values are normalized for the chosen type, and only the fields that
//! type uses survive in its [`InputKind`] variant.

use serde::{Deserialize, Serialize};

use super::actions::QueryHandler;
use super::bound::{normalize_field, FieldRef};
use super::field::{Color, HtmxAttrs, InputType, InputValue, NativeAttrs, SelectOption};
use super::normalize::{
    checkbox_checked, normalize_value, radio_checked, DEFAULT_CHECKED_VALUE,
    DEFAULT_UNCHECKED_VALUE,
};
use super::render::InputRenderer;
use super::translate::ErrorTranslator;
use crate::error::InputError;

/// Builder for a single input
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::{Color, InputBuilder};
///
/// let html = InputBuilder::select("country")
///     .label("Country")
///     .option("France", "fr")
///     .option("Japan", "jp")
///     .prompt("Choose a country")
///     .value("jp")
///     .color(Color::Primary)
///     .render()
///     .unwrap();
///
/// assert!(html.contains(r#"<option value="jp" selected>Japan</option>"#));
/// ```
#[derive(Clone)]
pub struct InputBuilder<'a> {
    input_type: InputType,
    id: Option<String>,
    name: Option<String>,
    label: Option<String>,
    value: Option<InputValue>,
    color: Option<Color>,
    field: Option<&'a dyn FieldRef>,
    class: Option<String>,
    ghost: bool,
    errors: Vec<String>,
    checked: Option<bool>,
    checked_value: Option<String>,
    unchecked_value: Option<String>,
    omit_unchecked_value: bool,
    prompt: Option<String>,
    options: Vec<SelectOption>,
    multiple: bool,
    on_query: Option<QueryHandler>,
    help: Option<String>,
    attrs: NativeAttrs,
    htmx: HtmxAttrs,
    custom_attrs: Vec<(String, String)>,
}

impl std::fmt::Debug for InputBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBuilder")
            .field("input_type", &self.input_type)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("field", &self.field.map(|field| field.name()))
            .finish_non_exhaustive()
    }
}

impl<'a> InputBuilder<'a> {
    /// Create a builder for an input type
    #[must_use]
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            id: None,
            name: None,
            label: None,
            value: None,
            color: None,
            field: None,
            class: None,
            ghost: false,
            errors: Vec::new(),
            checked: None,
            checked_value: None,
            unchecked_value: None,
            omit_unchecked_value: false,
            prompt: None,
            options: Vec::new(),
            multiple: false,
            on_query: None,
            help: None,
            attrs: NativeAttrs::default(),
            htmx: HtmxAttrs::default(),
            custom_attrs: Vec::new(),
        }
    }

    /// Create a builder from a `type` string
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedType`] for strings outside the
    /// supported set.
    pub fn parse(input_type: &str, name: impl Into<String>) -> Result<Self, InputError> {
        Ok(Self::new(input_type.parse()?).name(name))
    }

    fn named(input_type: InputType, name: impl Into<String>) -> Self {
        Self::new(input_type).name(name)
    }

    /// Text-like input of the given type
    #[must_use]
    pub fn text(input_type: InputType, name: impl Into<String>) -> Self {
        Self::named(input_type, name)
    }

    /// Checkbox
    #[must_use]
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::named(InputType::Checkbox, name)
    }

    /// Toggle switch
    #[must_use]
    pub fn toggle(name: impl Into<String>) -> Self {
        Self::named(InputType::Toggle, name)
    }

    /// Radio button
    #[must_use]
    pub fn radio(name: impl Into<String>) -> Self {
        Self::named(InputType::Radio, name)
    }

    /// Select dropdown
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        Self::named(InputType::Select, name)
    }

    /// Autocomplete text box
    #[must_use]
    pub fn autocomplete(name: impl Into<String>) -> Self {
        Self::named(InputType::Autocomplete, name)
    }

    /// Textarea
    #[must_use]
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::named(InputType::Textarea, name)
    }

    /// Range slider
    #[must_use]
    pub fn range(name: impl Into<String>) -> Self {
        Self::named(InputType::Range, name)
    }

    /// Declared input type
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Set the element id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the submission name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the label text
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the raw value
    #[must_use]
    pub fn value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the theme color
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Bind a form field; its value, name and errors take precedence
    #[must_use]
    pub fn field(mut self, field: &'a dyn FieldRef) -> Self {
        self.field = Some(field);
        self
    }

    /// Add CSS classes
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Use the ghost style
    #[must_use]
    pub const fn ghost(mut self) -> Self {
        self.ghost = true;
        self
    }

    /// Set already-translated errors (ignored when a field is bound)
    #[must_use]
    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }

    /// Force the checked state (checkbox, toggle, radio)
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Value submitted by a checked checkbox or toggle (default `"true"`)
    #[must_use]
    pub fn checked_value(mut self, value: impl Into<String>) -> Self {
        self.checked_value = Some(value.into());
        self
    }

    /// Value submitted by the hidden input of an unchecked checkbox (default `"false"`)
    #[must_use]
    pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
        self.unchecked_value = Some(value.into());
        self
    }

    /// Render no hidden input for an unchecked checkbox or toggle
    ///
    /// An unchecked box then submits nothing at all.
    #[must_use]
    pub const fn without_unchecked_value(mut self) -> Self {
        self.omit_unchecked_value = true;
        self
    }

    /// Blank first option of a select
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Add an option (select, autocomplete)
    #[must_use]
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(label, value));
        self
    }

    /// Set all options (select, autocomplete)
    #[must_use]
    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Allow multiple values
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Handler queried while typing in an autocomplete
    #[must_use]
    pub fn on_query(mut self, handler: QueryHandler) -> Self {
        self.on_query = Some(handler);
        self
    }

    /// Help text shown below the input
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replace the native attribute set
    #[must_use]
    pub fn attrs(mut self, attrs: NativeAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.attrs.placeholder = Some(placeholder.into());
        self
    }

    /// Mark as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.attrs.required = true;
        self
    }

    /// Mark as disabled
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.attrs.disabled = true;
        self
    }

    /// Mark as read-only
    #[must_use]
    pub const fn readonly(mut self) -> Self {
        self.attrs.readonly = true;
        self
    }

    /// Set the `autocomplete` attribute
    #[must_use]
    pub fn autocomplete_attr(mut self, value: impl Into<String>) -> Self {
        self.attrs.autocomplete = Some(value.into());
        self
    }

    /// Set the minimum value
    #[must_use]
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.attrs.min = Some(min.into());
        self
    }

    /// Set the maximum value
    #[must_use]
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.attrs.max = Some(max.into());
        self
    }

    /// Set the step value
    #[must_use]
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.attrs.step = Some(step.into());
        self
    }

    /// Set the minimum length
    #[must_use]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.attrs.minlength = Some(len);
        self
    }

    /// Set the maximum length
    #[must_use]
    pub const fn max_length(mut self, len: usize) -> Self {
        self.attrs.maxlength = Some(len);
        self
    }

    /// Set the validation pattern
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.attrs.pattern = Some(pattern.into());
        self
    }

    /// Set textarea rows
    #[must_use]
    pub const fn rows(mut self, rows: u32) -> Self {
        self.attrs.rows = Some(rows);
        self
    }

    /// Set textarea cols
    #[must_use]
    pub const fn cols(mut self, cols: u32) -> Self {
        self.attrs.cols = Some(cols);
        self
    }

    /// Replace the HTMX attributes
    #[must_use]
    pub fn htmx(mut self, htmx: HtmxAttrs) -> Self {
        self.htmx = htmx;
        self
    }

    /// Add a custom attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_attrs.push((name.into(), value.into()));
        self
    }

    /// Resolve the attributes into a render-ready spec
    #[must_use]
    pub fn build(&self, translator: &dyn ErrorTranslator) -> InputSpec {
        let (id, name, value, errors, color) = match self.field {
            Some(field) => {
                let normalized = normalize_field(field, self.multiple, self.color, translator);
                (
                    self.id.clone().or(Some(normalized.id)),
                    Some(normalized.name),
                    normalized.value,
                    normalized.errors,
                    normalized.color,
                )
            }
            None => (
                self.id.clone(),
                self.name.clone(),
                self.value.clone(),
                self.errors.clone(),
                self.color,
            ),
        };

        let kind = self.build_kind(value.as_ref());
        tracing::trace!(input_type = %self.input_type, ?kind, "built input spec");

        InputSpec {
            id,
            name,
            label: self.label.clone(),
            color,
            class: self.class.clone(),
            ghost: self.ghost,
            errors,
            help: self.help.clone(),
            attrs: self.attrs.clone(),
            htmx: self.htmx.clone(),
            custom_attrs: self.custom_attrs.clone(),
            kind,
        }
    }

    fn build_kind(&self, value: Option<&InputValue>) -> InputKind {
        match self.input_type {
            InputType::Checkbox | InputType::Toggle => {
                let checked_value = self
                    .checked_value
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHECKED_VALUE.to_string());
                let checked = self
                    .checked
                    .unwrap_or_else(|| checkbox_checked(value, &checked_value));
                // Checkbox groups submit only the checked values.
                let unchecked_value = if self.omit_unchecked_value || self.multiple {
                    None
                } else {
                    Some(
                        self.unchecked_value
                            .clone()
                            .unwrap_or_else(|| DEFAULT_UNCHECKED_VALUE.to_string()),
                    )
                };
                let spec = CheckboxSpec {
                    checked,
                    checked_value,
                    unchecked_value,
                };
                if self.input_type == InputType::Toggle {
                    InputKind::Toggle(spec)
                } else {
                    InputKind::Checkbox(spec)
                }
            }
            InputType::Radio => {
                // Bound radios keep their own value; the field value decides checked.
                let own = if self.field.is_some() {
                    self.value.as_ref().map(InputValue::to_display)
                } else {
                    value.map(InputValue::to_display)
                };
                let checked = self.checked.unwrap_or_else(|| {
                    if self.field.is_some() {
                        radio_checked(value, own.as_deref())
                    } else {
                        radio_checked(value, None)
                    }
                });
                InputKind::Radio { checked, value: own }
            }
            InputType::Select => InputKind::Select {
                options: self.options.clone(),
                prompt: self.prompt.clone(),
                selected: value.cloned(),
                multiple: self.multiple,
            },
            InputType::Autocomplete => InputKind::Autocomplete {
                options: self.options.clone(),
                value: value.map(InputValue::to_display),
                on_query: self.on_query.clone(),
            },
            InputType::Textarea => InputKind::Textarea {
                content: normalize_value(InputType::Textarea, value).unwrap_or_default(),
            },
            InputType::Range => InputKind::Range {
                value: normalize_value(InputType::Range, value),
            },
            other => InputKind::Text {
                input_type: other,
                value: normalize_value(other, value),
            },
        }
    }

    /// Render with the default renderer and translator
    ///
    /// # Errors
    ///
    /// Returns an error if a client action chain fails to serialize.
    pub fn render(&self) -> Result<String, InputError> {
        InputRenderer::default().render_builder(self)
    }
}

/// Checked-state attributes shared by checkboxes and toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxSpec {
    /// Whether the box renders checked
    pub checked: bool,
    /// Value submitted when checked
    pub checked_value: String,
    /// Value of the preceding hidden input; `None` omits it
    pub unchecked_value: Option<String>,
}

/// Per-type render data
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// Checkbox
    Checkbox(CheckboxSpec),
    /// Toggle switch
    Toggle(CheckboxSpec),
    /// Radio button
    Radio {
        /// Whether the radio renders checked
        checked: bool,
        /// Submitted value
        value: Option<String>,
    },
    /// Select dropdown
    Select {
        /// Options in display order
        options: Vec<SelectOption>,
        /// Blank first option text
        prompt: Option<String>,
        /// Value(s) to mark selected
        selected: Option<InputValue>,
        /// Allow multiple selections
        multiple: bool,
    },
    /// Autocomplete composite
    Autocomplete {
        /// Options in display order
        options: Vec<SelectOption>,
        /// Value carried by the hidden input
        value: Option<String>,
        /// Query handler for typed text
        on_query: Option<QueryHandler>,
    },
    /// Textarea
    Textarea {
        /// Normalized text content
        content: String,
    },
    /// Range slider
    Range {
        /// Normalized value
        value: Option<String>,
    },
    /// Generic text-like input
    Text {
        /// Concrete `type` attribute
        input_type: InputType,
        /// Normalized value
        value: Option<String>,
    },
}

impl InputKind {
    /// Input type this variant renders
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        match self {
            Self::Checkbox(_) => InputType::Checkbox,
            Self::Toggle(_) => InputType::Toggle,
            Self::Radio { .. } => InputType::Radio,
            Self::Select { .. } => InputType::Select,
            Self::Autocomplete { .. } => InputType::Autocomplete,
            Self::Textarea { .. } => InputType::Textarea,
            Self::Range { .. } => InputType::Range,
            Self::Text { input_type, .. } => *input_type,
        }
    }
}

/// A fully resolved input, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    /// Element id
    pub id: Option<String>,
    /// Submission name
    pub name: Option<String>,
    /// Label text
    pub label: Option<String>,
    /// Effective color
    pub color: Option<Color>,
    /// Caller classes
    pub class: Option<String>,
    /// Ghost style
    pub ghost: bool,
    /// Translated errors to display
    pub errors: Vec<String>,
    /// Help text
    pub help: Option<String>,
    /// Native passthrough attributes
    pub attrs: NativeAttrs,
    /// HTMX attributes
    pub htmx: HtmxAttrs,
    /// Custom attributes
    pub custom_attrs: Vec<(String, String)>,
    /// Per-type data
    pub kind: InputKind,
}

impl InputSpec {
    /// Input type of this spec
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.kind.input_type()
    }
}

/// Attribute bag accepted from templates and other untyped sources
///
/// Deserialization validates `type` and `color` against their closed sets.
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::InputAttrs;
///
/// let attrs: InputAttrs = serde_json::from_str(
///     r#"{"type": "checkbox", "name": "terms", "value": "on"}"#,
/// ).unwrap();
/// let html = attrs.into_builder().render().unwrap();
/// assert!(html.contains(" checked"));
///
/// assert!(serde_json::from_str::<InputAttrs>(r#"{"type": "slider"}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputAttrs {
    /// Input type
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Element id
    pub id: Option<String>,
    /// Submission name
    pub name: Option<String>,
    /// Label text
    pub label: Option<String>,
    /// Raw value
    pub value: Option<InputValue>,
    /// Theme color
    pub color: Option<Color>,
    /// Caller classes
    pub class: Option<String>,
    /// Ghost style
    pub ghost: bool,
    /// Pre-translated errors
    pub errors: Vec<String>,
    /// Forced checked state
    pub checked: Option<bool>,
    /// Value submitted when checked
    pub checked_value: Option<String>,
    /// Value submitted by the hidden input of an unchecked checkbox
    pub unchecked_value: Option<String>,
    /// Render no hidden input for an unchecked checkbox
    pub omit_unchecked_value: bool,
    /// Blank first option of a select
    pub prompt: Option<String>,
    /// Options (select, autocomplete)
    pub options: Vec<SelectOption>,
    /// Allow multiple values
    pub multiple: bool,
    /// Autocomplete query handler
    pub on_query: Option<QueryHandler>,
    /// Help text
    pub help: Option<String>,
    /// HTMX attributes
    pub htmx: HtmxAttrs,
    /// Native passthrough attributes
    #[serde(flatten)]
    pub attrs: NativeAttrs,
}

impl InputAttrs {
    /// Convert into a builder
    #[must_use]
    pub fn into_builder<'a>(self) -> InputBuilder<'a> {
        let mut builder = InputBuilder::new(self.input_type);
        builder.id = self.id;
        builder.name = self.name;
        builder.label = self.label;
        builder.value = self.value;
        builder.color = self.color;
        builder.class = self.class;
        builder.ghost = self.ghost;
        builder.errors = self.errors;
        builder.checked = self.checked;
        builder.checked_value = self.checked_value;
        builder.unchecked_value = self.unchecked_value;
        builder.omit_unchecked_value = self.omit_unchecked_value;
        builder.prompt = self.prompt;
        builder.options = self.options;
        builder.multiple = self.multiple;
        builder.on_query = self.on_query;
        builder.help = self.help;
        builder.htmx = self.htmx;
        builder.attrs = self.attrs;
        builder
    }
}

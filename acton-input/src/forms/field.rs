//! Input types, colors, values and attribute sets
//!
//! Defines the closed set of input kinds the dispatcher understands and
//! the attribute groups forwarded to the leaf components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Supported values of the `type` attribute
///
/// Parsing any other string fails with [`InputError::UnsupportedType`],
/// so an unknown type never reaches the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input with validation
    Email,
    /// Password input (masked)
    Password,
    /// Number input
    Number,
    /// Telephone input
    Tel,
    /// URL input
    Url,
    /// Search input
    Search,
    /// Date input
    Date,
    /// Time input
    Time,
    /// Date and time input
    DateTimeLocal,
    /// Month input
    Month,
    /// Week input
    Week,
    /// Color picker
    Color,
    /// Hidden input
    Hidden,
    /// File upload
    File,
    /// Range slider
    Range,
    /// Multi-line text
    Textarea,
    /// Native select dropdown
    Select,
    /// Checkbox
    Checkbox,
    /// Checkbox styled as a switch
    Toggle,
    /// Radio button
    Radio,
    /// Text box with a filterable option list
    Autocomplete,
}

impl InputType {
    /// Every supported input type, in declaration order
    pub const ALL: [Self; 22] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
        Self::Date,
        Self::Time,
        Self::DateTimeLocal,
        Self::Month,
        Self::Week,
        Self::Color,
        Self::Hidden,
        Self::File,
        Self::Range,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Toggle,
        Self::Radio,
        Self::Autocomplete,
    ];

    /// Get the `type` attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Color => "color",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Range => "range",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Toggle => "toggle",
            Self::Radio => "radio",
            Self::Autocomplete => "autocomplete",
        }
    }

    /// Whether the value of this type is a checked state rather than text
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Toggle | Self::Radio)
    }

    /// Whether this type renders through the generic text-input leaf
    #[must_use]
    pub const fn is_text_like(&self) -> bool {
        !matches!(
            self,
            Self::Range
                | Self::Textarea
                | Self::Select
                | Self::Checkbox
                | Self::Toggle
                | Self::Radio
                | Self::Autocomplete
        )
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| InputError::UnsupportedType(s.to_string()))
    }
}

impl TryFrom<String> for InputType {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InputType> for String {
    fn from(ty: InputType) -> Self {
        ty.as_str().to_string()
    }
}

/// Theme colors for inputs
///
/// [`Color::Error`] is also the color forced onto a field with visible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Primary brand color
    Primary,
    /// Secondary brand color
    Secondary,
    /// Accent color
    Accent,
    /// Informational
    Info,
    /// Success
    Success,
    /// Warning
    Warning,
    /// Error indicator
    Error,
}

impl Color {
    /// Get the class suffix for this color
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "accent" => Ok(Self::Accent),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(InputError::UnsupportedColor(other.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, InputError> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

/// A raw input value before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Multiple values (multi-selects)
    List(Vec<String>),
}

impl InputValue {
    /// Displayable string form of the value
    #[must_use]
    pub fn to_display(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// Whether `candidate` is one of the values held
    ///
    /// A list matches any of its elements; scalars compare by display form.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item == candidate),
            Self::Text(s) => s == candidate,
            other => other.to_display() == candidate,
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for InputValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Option for selects and autocompletes
///
/// Deserializes from either `{"label": .., "value": ..}` or a
/// `[label, value]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectOptionRepr")]
pub struct SelectOption {
    /// Display text
    pub label: String,
    /// Value attribute
    pub value: String,
    /// Whether this option is disabled
    pub disabled: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectOptionRepr {
    Pair(String, String),
    Full {
        label: String,
        value: String,
        #[serde(default)]
        disabled: bool,
    },
}

impl From<SelectOptionRepr> for SelectOption {
    fn from(repr: SelectOptionRepr) -> Self {
        match repr {
            SelectOptionRepr::Pair(label, value) => Self::new(label, value),
            SelectOptionRepr::Full {
                label,
                value,
                disabled,
            } => Self {
                label,
                value,
                disabled,
            },
        }
    }
}

impl SelectOption {
    /// Create a new option from a label and value
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// Create a disabled option
    #[must_use]
    pub fn disabled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(label, value)
        }
    }
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for SelectOption {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}

/// Native HTML attributes forwarded verbatim to the rendered element
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeAttrs {
    /// `autocomplete` attribute
    pub autocomplete: Option<String>,
    /// Visible width of a textarea
    pub cols: Option<u32>,
    /// Whether the element is disabled
    pub disabled: bool,
    /// Owning form id
    pub form: Option<String>,
    /// Datalist id
    pub list: Option<String>,
    /// Maximum value
    pub max: Option<String>,
    /// Maximum length
    pub maxlength: Option<usize>,
    /// Minimum value
    pub min: Option<String>,
    /// Minimum length
    pub minlength: Option<usize>,
    /// Validation pattern (regex)
    pub pattern: Option<String>,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Whether the element is read-only
    pub readonly: bool,
    /// Whether the element is required
    pub required: bool,
    /// Visible rows of a textarea
    pub rows: Option<u32>,
    /// Visible size
    pub size: Option<u32>,
    /// Step value
    pub step: Option<String>,
    /// Autofocus this element
    pub autofocus: bool,
}

/// HTMX attributes for an input element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmxAttrs {
    /// hx-get URL
    pub get: Option<String>,
    /// hx-post URL
    pub post: Option<String>,
    /// hx-target selector
    pub target: Option<String>,
    /// hx-swap strategy
    pub swap: Option<String>,
    /// hx-trigger event
    pub trigger: Option<String>,
    /// hx-indicator selector
    pub indicator: Option<String>,
    /// hx-include selector
    pub include: Option<String>,
}

impl HtmxAttrs {
    /// Check if any HTMX attributes are set
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.get.is_some()
            || self.post.is_some()
            || self.target.is_some()
            || self.swap.is_some()
            || self.trigger.is_some()
            || self.indicator.is_some()
            || self.include.is_some()
    }
}

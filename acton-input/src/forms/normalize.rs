//! Value normalization
//!
//! Maps raw input values to what each leaf component renders: a checked
//! state for checkboxes, toggles and radios, a display string otherwise.

use chrono::NaiveDateTime;

use super::field::{InputType, InputValue};

/// Default submitted value of a checked checkbox
pub const DEFAULT_CHECKED_VALUE: &str = "true";

/// Default value submitted by the hidden input of an unchecked checkbox
pub const DEFAULT_UNCHECKED_VALUE: &str = "false";

/// Checked state of a checkbox or toggle
///
/// `true`, `"true"`, `"on"` and the checkbox's own `checked_value` are
/// checked. Everything else, including an absent value, is unchecked.
/// Numbers compare by their display form, so `1` only checks the box
/// when `checked_value` is `"1"`. A list (a checkbox group bound to one
/// field) checks the box when it holds `checked_value`.
#[must_use]
pub fn checkbox_checked(value: Option<&InputValue>, checked_value: &str) -> bool {
    match value {
        None => false,
        Some(InputValue::Bool(b)) => *b,
        Some(InputValue::List(items)) => items.iter().any(|item| item == checked_value),
        Some(other) => {
            let s = other.to_display();
            s == "true" || s == "on" || s == checked_value
        }
    }
}

/// Checked state of a radio button
///
/// Unlike checkboxes, `"on"` carries no meaning here. A radio is checked by
/// `true`, `"true"`, or a value equal to the radio's own submitted value.
#[must_use]
pub fn radio_checked(value: Option<&InputValue>, own_value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(InputValue::Bool(b)) => *b,
        Some(other) => {
            let s = other.to_display();
            s == "true" || own_value.is_some_and(|own| own == s)
        }
    }
}

/// Display form of a value for the given input type
///
/// Returns `None` when no value attribute should be rendered.
/// Textareas get a leading newline so that content starting with a
/// newline survives the browser stripping the first one.
/// `datetime-local` values with seconds are truncated to minutes.
#[must_use]
pub fn normalize_value(input_type: InputType, value: Option<&InputValue>) -> Option<String> {
    match input_type {
        InputType::Textarea => Some(format!(
            "\n{}",
            value.map(InputValue::to_display).unwrap_or_default()
        )),
        InputType::DateTimeLocal => value.map(|v| truncate_datetime(&v.to_display())),
        _ => value.map(InputValue::to_display),
    }
}

fn truncate_datetime(raw: &str) -> String {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map_or_else(
            || raw.to_string(),
            |dt| dt.format("%Y-%m-%dT%H:%M").to_string(),
        )
}

//! Autocomplete composite
//!
//! An autocomplete renders three parts inside one wrapper:
//!
//! - a visible text box showing the label of the current value, which
//!   queries the caller's handler after a quiet period of typing
//! - a listbox of options
//! - a hidden input carrying the submitted value
//!
//! Typing clears the hidden value so stale selections are never submitted.
//! Choosing an option writes its value into the hidden input, announces
//! the change and removes focus.

use std::fmt::Write;

use super::actions::{ActionChain, QueryHandler, Target};
use super::builder::InputSpec;
use super::field::{InputType, SelectOption};
use super::html::{escape_html, write_attr, write_flag, write_opt_attr};
use super::render::{write_passthrough, InputRenderer};
use crate::error::InputError;

/// Marks the wrapper; scoped targets resolve inside it
const WRAPPER_ATTR: &str = "data-autocomplete";
const WRAPPER_SELECTOR: &str = "[data-autocomplete]";
const HIDDEN_SELECTOR: &str = "input[type=hidden]";
const TEXT_BOX_SELECTOR: &str = "input[role=combobox]";

/// Element ids of the three parts
struct PartIds {
    hidden: String,
    text: String,
    list: String,
}

/// How chains reach the hidden input and the text box
///
/// With an id or name the parts get ids derived from it. Without either,
/// no ids are rendered and chains use targets scoped to the wrapper, so
/// several anonymous autocompletes on one page stay independent.
struct Parts {
    ids: Option<PartIds>,
}

impl Parts {
    fn for_spec(spec: &InputSpec) -> Self {
        let base = spec.id.clone().or_else(|| {
            spec.name
                .as_deref()
                .map(super::bound::id_from_name)
                .filter(|id| !id.is_empty())
        });
        Self {
            ids: base.map(|base| PartIds {
                text: format!("{base}-input"),
                list: format!("{base}-listbox"),
                hidden: base,
            }),
        }
    }

    fn hidden(&self) -> Target {
        self.ids.as_ref().map_or_else(
            || Target::within(WRAPPER_SELECTOR, HIDDEN_SELECTOR),
            |ids| Target::id(&ids.hidden),
        )
    }

    fn text_box(&self) -> Target {
        self.ids.as_ref().map_or_else(
            || Target::within(WRAPPER_SELECTOR, TEXT_BOX_SELECTOR),
            |ids| Target::id(&ids.text),
        )
    }
}

/// Id of the visible text box, when the input has an id or name
pub(super) fn text_box_id(spec: &InputSpec) -> Option<String> {
    Parts::for_spec(spec).ids.map(|ids| ids.text)
}

/// Label shown for `value`, blank when no option matches
#[must_use]
pub fn display_label<'o>(options: &'o [SelectOption], value: Option<&str>) -> &'o str {
    value
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map_or("", |opt| opt.label.as_str())
}

/// Chain run on `input` in the text box: clear the hidden value and
/// announce the change
#[must_use]
pub fn typing_chain(hidden: Target) -> ActionChain {
    ActionChain::new()
        .set_attr(hidden.clone(), "value", "")
        .dispatch(hidden, "change")
}

/// Chain run on `click` of an option
#[must_use]
pub fn select_chain(hidden: Target, text_box: Target, option: &SelectOption) -> ActionChain {
    ActionChain::new()
        .set_attr(hidden.clone(), "value", option.value.as_str())
        .set_attr(text_box, "value", option.label.as_str())
        .dispatch(hidden, "change")
        .blur(Target::ActiveElement)
}

/// Option items only, for answering a query with a fresh list
pub(super) fn render_options(
    renderer: &InputRenderer,
    spec: &InputSpec,
    options: &[SelectOption],
    value: Option<&str>,
) -> Result<String, InputError> {
    let mut html = String::with_capacity(options.len() * 192);
    write_options(&mut html, renderer, &Parts::for_spec(spec), options, value, "")?;
    tracing::trace!(option_count = options.len(), "rendered autocomplete options");
    Ok(html)
}

fn write_options(
    html: &mut String,
    renderer: &InputRenderer,
    parts: &Parts,
    options: &[SelectOption],
    value: Option<&str>,
    indent: &str,
) -> Result<(), InputError> {
    let option_class = &renderer.config().autocomplete.option_class;
    for opt in options {
        let selected = value == Some(opt.value.as_str());
        html.push_str(indent);
        html.push_str("<li");
        write_attr(html, "role", "option");
        write_attr(html, "class", option_class);
        write_attr(html, "data-value", &opt.value);
        write_attr(html, "aria-selected", if selected { "true" } else { "false" });
        if opt.disabled {
            write_attr(html, "aria-disabled", "true");
        } else {
            write_attr(
                html,
                "data-on-click",
                &select_chain(parts.hidden(), parts.text_box(), opt).to_json()?,
            );
        }
        let _ = writeln!(html, ">{}</li>", escape_html(&opt.label));
    }
    Ok(())
}

pub(super) fn render(
    renderer: &InputRenderer,
    spec: &InputSpec,
    options: &[SelectOption],
    value: Option<&str>,
    on_query: Option<&QueryHandler>,
) -> Result<String, InputError> {
    let settings = &renderer.config().autocomplete;
    let parts = Parts::for_spec(spec);
    let ids = parts.ids.as_ref();
    let label = display_label(options, value);

    let mut html = String::with_capacity(512 + options.len() * 192);
    html.push_str("  <div");
    write_attr(&mut html, "class", &settings.wrapper_class);
    write_flag(&mut html, WRAPPER_ATTR, true);
    html.push_str(">\n");

    // Visible text box. It only carries a name when there is a handler to query.
    html.push_str("    <input");
    write_attr(&mut html, "type", "text");
    write_opt_attr(&mut html, "id", ids.map(|ids| ids.text.as_str()));
    if on_query.is_some() {
        write_attr(&mut html, "name", &settings.query_param);
    }
    write_attr(&mut html, "class", &renderer.classes(spec, InputType::Autocomplete));
    write_attr(&mut html, "value", label);
    write_attr(&mut html, "role", "combobox");
    write_attr(&mut html, "aria-autocomplete", "list");
    write_opt_attr(&mut html, "aria-controls", ids.map(|ids| ids.list.as_str()));
    write_attr(&mut html, "aria-expanded", "false");
    if spec.attrs.autocomplete.is_none() {
        write_attr(&mut html, "autocomplete", "off");
    }
    write_attr(&mut html, "data-on-input", &typing_chain(parts.hidden()).to_json()?);
    if let Some(handler) = on_query {
        let mut text_spec = spec.clone();
        text_spec.htmx = handler.htmx_attrs(settings.debounce());
        write_passthrough(&mut html, &text_spec);
    } else {
        write_passthrough(&mut html, spec);
    }
    html.push_str(">\n");

    html.push_str("    <ul");
    write_opt_attr(&mut html, "id", ids.map(|ids| ids.list.as_str()));
    write_attr(&mut html, "role", "listbox");
    write_attr(&mut html, "class", &settings.list_class);
    html.push_str(">\n");
    write_options(&mut html, renderer, &parts, options, value, "      ")?;
    html.push_str("    </ul>\n");

    html.push_str("    <input");
    write_attr(&mut html, "type", "hidden");
    write_opt_attr(&mut html, "id", ids.map(|ids| ids.hidden.as_str()));
    write_opt_attr(&mut html, "name", spec.name.as_deref());
    write_attr(&mut html, "value", value.unwrap_or_default());
    write_flag(&mut html, "disabled", spec.attrs.disabled);
    html.push_str(">\n");

    html.push_str("  </div>\n");

    tracing::trace!(
        option_count = options.len(),
        matched = !label.is_empty(),
        has_handler = on_query.is_some(),
        scoped = ids.is_none(),
        "rendered autocomplete"
    );
    Ok(html)
}

//! Client runtime for action chains
//!
//! Pages that render autocompletes (or any element carrying a
//! `data-on-{event}` chain) include the runtime once, typically with
//! [`runtime_script_tag`] in the page layout.

/// JavaScript that runs `data-on-{event}` action chains
pub const CLIENT_RUNTIME: &str = include_str!("runtime.js");

/// DOM events the runtime listens for
pub const ACTION_EVENTS: [&str; 3] = ["click", "input", "change"];

/// Inline `<script>` element carrying [`CLIENT_RUNTIME`]
///
/// # Examples
///
/// ```rust
/// use acton_input::forms::runtime_script_tag;
///
/// let tag = runtime_script_tag();
/// assert!(tag.starts_with("<script>"));
/// assert!(tag.contains("window.actonInput"));
/// ```
#[must_use]
pub fn runtime_script_tag() -> String {
    format!("<script>\n{CLIENT_RUNTIME}</script>\n")
}

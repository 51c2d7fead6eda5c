//! Declarative client-side actions
//!
//! Inputs never emit inline scripts. Client behavior is declared as an
//! [`ActionChain`], an ordered list of `{target, op}` steps serialized to
//! JSON in a `data-on-{event}` attribute. The client runtime
//! ([`CLIENT_RUNTIME`](super::CLIENT_RUNTIME)) runs the chain when that DOM
//! event (`click`, `input`, `change`) reaches the element.
//!
//! ```json
//! {"actions":[
//!   {"target":{"selector":"#country"},"op":"set_attr","attr":"value","value":"fr"},
//!   {"target":{"selector":"#country"},"op":"dispatch","event":"change"},
//!   {"target":"active_element","op":"blur"}
//! ]}
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::field::HtmxAttrs;
use crate::error::InputError;

/// Element an action applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Elements matching a CSS selector
    Selector(String),
    /// The element carrying the chain
    This,
    /// Whatever element currently has focus
    ActiveElement,
    /// Elements matching `selector` inside the nearest ancestor of the
    /// element carrying the chain that matches `closest`
    Within {
        /// Ancestor selector
        closest: String,
        /// Selector applied inside that ancestor
        selector: String,
    },
}

impl Target {
    /// Target an element by id
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self::Selector(format!("#{id}"))
    }

    /// Target elements relative to an ancestor of the acting element
    #[must_use]
    pub fn within(closest: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::Within {
            closest: closest.into(),
            selector: selector.into(),
        }
    }
}

/// Operation performed on a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ActionOp {
    /// Set an attribute (and the matching DOM property)
    SetAttr {
        /// Attribute name
        attr: String,
        /// New value
        value: String,
    },
    /// Dispatch a bubbling DOM event
    Dispatch {
        /// Event name
        event: String,
    },
    /// Remove focus
    Blur,
}

/// One step of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAction {
    /// Element to act on
    pub target: Target,
    /// What to do
    #[serde(flatten)]
    pub op: ActionOp,
}

/// Ordered list of client actions with an optional debounce
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use acton_input::forms::{ActionChain, Target};
///
/// let chain = ActionChain::new()
///     .set_attr(Target::id("city"), "value", "")
///     .dispatch(Target::id("city"), "change")
///     .debounce(Duration::from_millis(300));
///
/// assert_eq!(chain.len(), 2);
/// assert!(chain.to_json().unwrap().contains(r#""debounce_ms":300"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionChain {
    actions: Vec<ClientAction>,
    #[serde(
        rename = "debounce_ms",
        skip_serializing_if = "Option::is_none",
        default,
        with = "duration_ms"
    )]
    debounce: Option<Duration>,
}

impl ActionChain {
    /// Create an empty chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action
    #[must_use]
    pub fn then(mut self, target: Target, op: ActionOp) -> Self {
        self.actions.push(ClientAction { target, op });
        self
    }

    /// Append a set-attribute action
    #[must_use]
    pub fn set_attr(self, target: Target, attr: impl Into<String>, value: impl Into<String>) -> Self {
        self.then(
            target,
            ActionOp::SetAttr {
                attr: attr.into(),
                value: value.into(),
            },
        )
    }

    /// Append an event-dispatch action
    #[must_use]
    pub fn dispatch(self, target: Target, event: impl Into<String>) -> Self {
        self.then(
            target,
            ActionOp::Dispatch {
                event: event.into(),
            },
        )
    }

    /// Append a blur action
    #[must_use]
    pub fn blur(self, target: Target) -> Self {
        self.then(target, ActionOp::Blur)
    }

    /// Delay the chain until `quiet` has elapsed since the last trigger
    #[must_use]
    pub const fn debounce(mut self, quiet: Duration) -> Self {
        self.debounce = Some(quiet);
        self
    }

    /// Actions in execution order
    #[must_use]
    pub fn actions(&self) -> &[ClientAction] {
        &self.actions
    }

    /// Configured debounce, if any
    #[must_use]
    pub const fn debounce_duration(&self) -> Option<Duration> {
        self.debounce
    }

    /// Number of actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the chain has no actions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Serialize for a `data-on-*` attribute
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Actions`] if serialization fails.
    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string(self)?)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

/// HTTP method used for autocomplete queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMethod {
    /// `hx-get`
    #[default]
    Get,
    /// `hx-post`
    Post,
}

/// Caller-supplied handler for autocomplete queries
///
/// Rendered as HTMX attributes on the visible text box; the request fires
/// after the configured quiet period of typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryHandler {
    /// Endpoint URL
    pub url: String,
    /// HTTP method
    #[serde(default)]
    pub method: QueryMethod,
    /// hx-target selector for the response
    #[serde(default)]
    pub target: Option<String>,
    /// hx-swap strategy
    #[serde(default)]
    pub swap: Option<String>,
    /// hx-indicator selector
    #[serde(default)]
    pub indicator: Option<String>,
}

impl QueryHandler {
    /// Query `url` with GET
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: QueryMethod::Get,
            target: None,
            swap: None,
            indicator: None,
        }
    }

    /// Query `url` with POST
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: QueryMethod::Post,
            ..Self::get(url)
        }
    }

    /// Set the hx-target selector
    #[must_use]
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// Set the hx-swap strategy
    #[must_use]
    pub fn swap(mut self, strategy: impl Into<String>) -> Self {
        self.swap = Some(strategy.into());
        self
    }

    /// Set the hx-indicator selector
    #[must_use]
    pub fn indicator(mut self, selector: impl Into<String>) -> Self {
        self.indicator = Some(selector.into());
        self
    }

    /// HTMX attributes firing this query after `debounce` of inactivity
    #[must_use]
    pub fn htmx_attrs(&self, debounce: Duration) -> HtmxAttrs {
        let (get, post) = match self.method {
            QueryMethod::Get => (Some(self.url.clone()), None),
            QueryMethod::Post => (None, Some(self.url.clone())),
        };
        HtmxAttrs {
            get,
            post,
            target: self.target.clone(),
            swap: self.swap.clone(),
            trigger: Some(format!("input changed delay:{}ms", debounce.as_millis())),
            indicator: self.indicator.clone(),
            include: Some("this".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_json_shape() {
        let chain = ActionChain::new()
            .set_attr(Target::id("c"), "value", "fr")
            .dispatch(Target::id("c"), "change")
            .blur(Target::ActiveElement);

        let json = chain.to_json().unwrap();
        assert_eq!(
            json,
            concat!(
                r##"{"actions":["##,
                r##"{"target":{"selector":"#c"},"op":"set_attr","attr":"value","value":"fr"},"##,
                r##"{"target":{"selector":"#c"},"op":"dispatch","event":"change"},"##,
                r##"{"target":"active_element","op":"blur"}"##,
                r##"]}"##
            )
        );
    }

    #[test]
    fn test_chain_debounce_serialized_in_ms() {
        let chain = ActionChain::new()
            .dispatch(Target::This, "query")
            .debounce(Duration::from_millis(300));
        let json = chain.to_json().unwrap();
        assert!(json.ends_with(r#","debounce_ms":300}"#));

        let back: ActionChain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.debounce_duration(), Some(Duration::from_millis(300)));
        assert_eq!(back, chain);
    }

    #[test]
    fn test_within_target_json() {
        let chain = ActionChain::new().blur(Target::within("[data-autocomplete]", "input"));
        assert_eq!(
            chain.to_json().unwrap(),
            r#"{"actions":[{"target":{"within":{"closest":"[data-autocomplete]","selector":"input"}},"op":"blur"}]}"#
        );
    }

    #[test]
    fn test_empty_chain() {
        let chain = ActionChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.to_json().unwrap(), r#"{"actions":[]}"#);
    }

    #[test]
    fn test_query_handler_get_attrs() {
        let attrs = QueryHandler::get("/search")
            .target("#results")
            .htmx_attrs(Duration::from_millis(300));
        assert_eq!(attrs.get.as_deref(), Some("/search"));
        assert!(attrs.post.is_none());
        assert_eq!(attrs.trigger.as_deref(), Some("input changed delay:300ms"));
        assert_eq!(attrs.target.as_deref(), Some("#results"));
    }

    #[test]
    fn test_query_handler_post_attrs() {
        let attrs = QueryHandler::post("/search").htmx_attrs(Duration::from_millis(150));
        assert!(attrs.get.is_none());
        assert_eq!(attrs.post.as_deref(), Some("/search"));
        assert_eq!(attrs.trigger.as_deref(), Some("input changed delay:150ms"));
    }
}

//! Configuration management for acton-input
//!
//! Styling classes, wrapper layout and autocomplete timing are read from
//! layered sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_INPUT_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-input/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-input/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [theme]
//! input = "input"
//! bordered = "input-bordered"
//!
//! [render]
//! wrap_fields = true
//! group_class = "form-control"
//!
//! [autocomplete]
//! debounce_ms = 250
//! query_param = "q"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::forms::{Color, InputType};

/// Base classes for each leaf component
///
/// Colors and the ghost style are appended as `{base}-{color}` and
/// `{base}-ghost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Text-like inputs and the autocomplete text box
    pub input: String,
    /// Extra class for text-like inputs (empty to disable)
    pub bordered: String,
    /// Checkbox
    pub checkbox: String,
    /// Toggle switch
    pub toggle: String,
    /// Radio button
    pub radio: String,
    /// Select dropdown
    pub select: String,
    /// Textarea
    pub textarea: String,
    /// Range slider
    pub range: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            input: "input".into(),
            bordered: "input-bordered".into(),
            checkbox: "checkbox".into(),
            toggle: "toggle".into(),
            radio: "radio".into(),
            select: "select".into(),
            textarea: "textarea".into(),
            range: "range".into(),
        }
    }
}

impl ThemeSettings {
    /// Base class for an input type
    #[must_use]
    pub fn base_for(&self, input_type: InputType) -> &str {
        match input_type {
            InputType::Checkbox => &self.checkbox,
            InputType::Toggle => &self.toggle,
            InputType::Radio => &self.radio,
            InputType::Select => &self.select,
            InputType::Textarea => &self.textarea,
            InputType::Range => &self.range,
            _ => &self.input,
        }
    }

    /// Full class list for an element
    ///
    /// Order: base, bordered (text-like only), color, ghost, caller classes.
    #[must_use]
    pub fn classes(
        &self,
        input_type: InputType,
        color: Option<Color>,
        ghost: bool,
        extra: Option<&str>,
    ) -> String {
        let base = self.base_for(input_type);
        let mut classes: Vec<String> = Vec::with_capacity(5);
        if !base.is_empty() {
            classes.push(base.to_string());
        }
        let text_like = input_type.is_text_like() || input_type == InputType::Autocomplete;
        if text_like && !self.bordered.is_empty() {
            classes.push(self.bordered.clone());
        }
        if let Some(color) = color {
            classes.push(format!("{base}-{color}"));
        }
        if ghost {
            classes.push(format!("{base}-ghost"));
        }
        if let Some(extra) = extra.filter(|e| !e.is_empty()) {
            classes.push(extra.to_string());
        }
        classes.join(" ")
    }
}

/// Wrapper layout around each input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Wrap label, element and errors in a group element
    pub wrap_fields: bool,
    /// CSS class for the group wrapper
    pub group_class: String,
    /// CSS class for labels
    pub label_class: String,
    /// CSS class for error messages
    pub error_class: String,
    /// CSS class for help text
    pub help_class: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            wrap_fields: true,
            group_class: "form-control".into(),
            label_class: "label".into(),
            error_class: "input-error-message".into(),
            help_class: "input-help".into(),
        }
    }
}

/// Autocomplete behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Quiet period before a query fires, in milliseconds
    pub debounce_ms: u64,
    /// Name of the visible text box, sent as the query parameter
    pub query_param: String,
    /// CSS class for the wrapper element
    pub wrapper_class: String,
    /// CSS class for the option list
    pub list_class: String,
    /// CSS class for each option
    pub option_class: String,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            query_param: "query".into(),
            wrapper_class: "autocomplete dropdown".into(),
            list_class: "dropdown-content menu".into(),
            option_class: "autocomplete-option".into(),
        }
    }
}

impl AutocompleteSettings {
    /// Debounce as a duration
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Complete acton-input configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActonInputConfig {
    /// Styling classes
    #[serde(default)]
    pub theme: ThemeSettings,

    /// Wrapper layout
    #[serde(default)]
    pub render: RenderSettings,

    /// Autocomplete behavior
    #[serde(default)]
    pub autocomplete: AutocompleteSettings,
}

impl ActonInputConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`ACTON_INPUT_*`)
    /// 2. `./config.toml`
    /// 3. `~/.config/acton-input/{service_name}/config.toml`
    /// 4. `/etc/acton-input/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_input::config::ActonInputConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ActonInputConfig::load_for_service("my-app")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/acton-input")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            tracing::debug!(path = %system_config.display(), "loading system input config");
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "loading user input config");
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading local input config");
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed("ACTON_INPUT_").split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults (plus environment overrides).
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has
    /// the wrong type.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ACTON_INPUT_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_input::config::ActonInputConfig;
    ///
    /// let path = ActonInputConfig::recommended_path("my-app");
    /// // Returns: ~/.config/acton-input/my-app/config.toml
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-input")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Create config directory for a service
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_config_dir(service_name: &str) -> anyhow::Result<PathBuf> {
        let config_path = Self::recommended_path(service_name);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ActonInputConfig::default();
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.autocomplete.debounce(), Duration::from_millis(300));
        assert!(config.render.wrap_fields);
        assert_eq!(config.theme.input, "input");
    }

    #[test]
    fn test_theme_classes() {
        let theme = ThemeSettings::default();
        assert_eq!(
            theme.classes(InputType::Email, Some(Color::Primary), false, Some("w-full")),
            "input input-bordered input-primary w-full"
        );
        assert_eq!(
            theme.classes(InputType::Checkbox, Some(Color::Error), false, None),
            "checkbox checkbox-error"
        );
        assert_eq!(
            theme.classes(InputType::Select, None, true, Some("")),
            "select select-ghost"
        );
    }

    #[test]
    fn test_recommended_path() {
        let path = ActonInputConfig::recommended_path("test-app");
        let path = path.to_string_lossy();
        assert!(path.contains("test-app"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = ActonInputConfig::load_from("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config.autocomplete.query_param, "query");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[theme]
checkbox = "cb"

[render]
wrap_fields = false

[autocomplete]
debounce_ms = 500
"#
        )
        .unwrap();

        let config = ActonInputConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.theme.checkbox, "cb");
        assert_eq!(config.theme.toggle, "toggle");
        assert!(!config.render.wrap_fields);
        assert_eq!(config.autocomplete.debounce_ms, 500);
        assert_eq!(config.autocomplete.query_param, "query");
    }

    #[test]
    fn test_load_for_service_with_defaults() {
        let config = ActonInputConfig::load_for_service("nonexistent-service-123").unwrap();
        assert_eq!(config.autocomplete.debounce_ms, 300);
    }

    #[test]
    fn test_create_config_dir() {
        let service = format!("acton-input-test-{}", std::process::id());
        let path = ActonInputConfig::create_config_dir(&service).unwrap();
        if let Some(parent) = path.parent() {
            assert!(parent.exists());
            std::fs::remove_dir_all(parent).ok();
        }
    }
}

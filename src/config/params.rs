//! Host parameter strings so plugin managers that hand over raw text resolve like the CLI.

use super::cli::{DisplayMode, TouchUiConfig, DEFAULT_BOTTOM_BUTTON_LABEL, DEFAULT_DISPLAY_MODE};

impl DisplayMode {
    /// Parse a host parameter value. Unknown or missing values resolve to `UserDefined`.
    pub fn from_param(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return DEFAULT_DISPLAY_MODE;
        };
        match raw.to_ascii_lowercase().as_str() {
            "always" => DisplayMode::Always,
            "user-defined" | "user_defined" | "userdefined" => DisplayMode::UserDefined,
            "never" => DisplayMode::Never,
            _ => {
                tracing::debug!(value = raw, "unknown display mode parameter; using default");
                DEFAULT_DISPLAY_MODE
            }
        }
    }
}

impl TouchUiConfig {
    /// Build the static configuration from raw host parameters.
    ///
    /// Only the literal `"true"` turns the default on; an empty label keeps the stock text.
    pub fn from_params(
        display_mode: Option<&str>,
        touch_ui_default: Option<&str>,
        bottom_button_label: Option<&str>,
    ) -> Self {
        let bottom_button_label = match bottom_button_label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => DEFAULT_BOTTOM_BUTTON_LABEL.to_string(),
        };
        Self {
            display_mode: DisplayMode::from_param(display_mode),
            touch_ui_default: touch_ui_default == Some("true"),
            bottom_button_label,
        }
    }
}

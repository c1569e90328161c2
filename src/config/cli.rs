//! CLI flag schema for the static configuration, fixed for the whole session.

use clap::{Args, ValueEnum};

pub const DEFAULT_BOTTOM_BUTTON_LABEL: &str = "Touch UI at bottom";
pub const DEFAULT_DISPLAY_MODE: DisplayMode = DisplayMode::UserDefined;
pub const DEFAULT_TOUCH_UI_ON: bool = false;

/// When the touch buttons are shown on non-mobile devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DisplayMode {
    /// Always visible
    Always,
    /// Player decides from the options menu
    #[default]
    UserDefined,
    /// Never visible, and the option is hidden
    Never,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisplayMode::Always => "Always",
            DisplayMode::UserDefined => "User-defined",
            DisplayMode::Never => "Never",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct TouchUiConfig {
    /// When to show the touch buttons (mobile devices always show them)
    #[arg(long = "display-mode", value_enum, default_value_t = DEFAULT_DISPLAY_MODE)]
    pub display_mode: DisplayMode,

    /// Show the buttons by default until the player changes the option ("user-defined" only)
    #[arg(long = "touch-ui-default", default_value_t = DEFAULT_TOUCH_UI_ON)]
    pub touch_ui_default: bool,

    /// Options-menu label for the bottom-placement toggle
    #[arg(long = "bottom-button-label", default_value = DEFAULT_BOTTOM_BUTTON_LABEL)]
    pub bottom_button_label: String,
}

/// Trace logging flags.
#[derive(Debug, Args, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Append JSON trace logs to $TOUCHUI_TRACE_LOG (default: temp dir)
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Disable trace logging even if --logs is set
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,
}

impl Default for TouchUiConfig {
    fn default() -> Self {
        Self {
            display_mode: DEFAULT_DISPLAY_MODE,
            touch_ui_default: DEFAULT_TOUCH_UI_ON,
            bottom_button_label: DEFAULT_BOTTOM_BUTTON_LABEL.to_string(),
        }
    }
}

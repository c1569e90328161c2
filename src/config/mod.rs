//! Static touch-UI configuration so hosts and the CLI resolve the same defaults.

mod cli;
mod params;

pub use cli::{
    DisplayMode, LogConfig, TouchUiConfig, DEFAULT_BOTTOM_BUTTON_LABEL, DEFAULT_DISPLAY_MODE,
    DEFAULT_TOUCH_UI_ON,
};

//! Settings-driven visibility and placement for on-screen touch buttons.
//!
//! A static display mode, the device class, and two persisted player preferences
//! resolve to one [`EffectiveUiState`]; committing either preference from the
//! options menu refreshes the active screen's buttons in place.

pub mod config;
pub mod device;
pub mod layout;
pub mod options;
pub mod policy;
pub mod scene;
pub mod settings_store;
mod telemetry;

pub use config::{DisplayMode, LogConfig, TouchUiConfig};
pub use device::DeviceClass;
pub use layout::{BaseLayoutProvider, ButtonKind, ButtonWidget, GatedLayout, ScreenLayoutPort};
pub use policy::{compute_visibility, is_configurable, EffectiveUiState, VisibilityPolicy};
pub use settings_store::{
    FileSettingsStore, MemorySettingsStore, OptionSymbol, OptionValue, Preferences,
    SettingsRecord, SettingsStore,
};
pub use telemetry::{init_tracing, session_span, tracing_log_path};

//! Visibility policy so the display mode, device class, and saved preferences
//! resolve to one button state, and commits reach the active screen immediately.

use anyhow::Result;

use crate::config::{DisplayMode, TouchUiConfig};
use crate::device::DeviceClass;
use crate::layout::{BaseLayoutProvider, ButtonKind, GatedLayout, ScreenLayoutPort};
use crate::settings_store::{OptionSymbol, OptionValue, Preferences, SettingsStore};

/// Derived button state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveUiState {
    pub visible: bool,
    pub bottom_layout: bool,
}

/// Mobile devices always show the buttons; otherwise the display mode decides,
/// deferring to the player's toggle only in `UserDefined`.
pub fn compute_visibility(mode: DisplayMode, device: DeviceClass, touch_ui_enabled: bool) -> bool {
    if device.is_mobile() {
        return true;
    }
    match mode {
        DisplayMode::Always => true,
        DisplayMode::UserDefined => touch_ui_enabled,
        DisplayMode::Never => false,
    }
}

/// Whether the options menu offers the visibility toggle and the placement choice.
pub fn is_configurable(mode: DisplayMode, device: DeviceClass) -> bool {
    mode == DisplayMode::UserDefined && !device.is_mobile()
}

pub struct VisibilityPolicy<S> {
    config: TouchUiConfig,
    device: DeviceClass,
    store: S,
}

impl<S: SettingsStore> VisibilityPolicy<S> {
    pub fn new(config: TouchUiConfig, device: DeviceClass, store: S) -> Self {
        tracing::debug!(
            display_mode = %config.display_mode,
            device = %device,
            configurable = is_configurable(config.display_mode, device),
            "touch UI policy ready"
        );
        Self {
            config,
            device,
            store,
        }
    }

    pub fn config(&self) -> &TouchUiConfig {
        &self.config
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::load(&self.store, self.config.touch_ui_default)
    }

    pub fn compute_visibility(&self) -> bool {
        compute_visibility(
            self.config.display_mode,
            self.device,
            self.preferences().touch_ui_enabled,
        )
    }

    pub fn is_configurable(&self) -> bool {
        is_configurable(self.config.display_mode, self.device)
    }

    pub fn effective_state(&self) -> EffectiveUiState {
        let prefs = self.preferences();
        EffectiveUiState {
            visible: compute_visibility(
                self.config.display_mode,
                self.device,
                prefs.touch_ui_enabled,
            ),
            bottom_layout: prefs.bottom_button_layout,
        }
    }

    /// Gate a screen's base metrics by the current state.
    pub fn layout<'a, P: BaseLayoutProvider + ?Sized>(&self, base: &'a P) -> GatedLayout<'a, P> {
        GatedLayout::new(base, self.effective_state())
    }

    /// Store a value committed from the options menu, then react to it.
    /// Returns whether the screen's buttons were refreshed.
    pub fn commit<L: ScreenLayoutPort + ?Sized>(
        &mut self,
        symbol: OptionSymbol,
        value: OptionValue,
        screen: &mut L,
    ) -> bool {
        tracing::debug!(symbol = %symbol, ?value, "option committed");
        self.store.set_value(symbol, value);
        self.on_preference_changed(symbol, screen)
    }

    pub fn on_preference_changed<L: ScreenLayoutPort + ?Sized>(
        &self,
        symbol: OptionSymbol,
        screen: &mut L,
    ) -> bool {
        if !symbol.drives_touch_buttons() {
            return false;
        }
        self.refresh_buttons(screen);
        true
    }

    /// Reassign visibility and row of every button the screen has, creating missing ones first.
    pub fn refresh_buttons<L: ScreenLayoutPort + ?Sized>(&self, screen: &mut L) -> EffectiveUiState {
        screen.ensure_buttons_exist();
        let state = self.effective_state();
        let y = GatedLayout::new(&*screen, state).button_y();
        let mut updated = 0usize;
        for kind in ButtonKind::ALL {
            if let Some(button) = screen.button_mut(kind) {
                button.visible = state.visible;
                button.y = y;
                updated += 1;
            }
        }
        tracing::debug!(
            visible = state.visible,
            bottom_layout = state.bottom_layout,
            y,
            updated,
            "touch buttons refreshed"
        );
        state
    }

    pub fn persist(&mut self) -> Result<()> {
        self.store.persist()
    }
}

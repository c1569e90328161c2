//! Options menu cursor and commit flow.

use crate::layout::ScreenLayoutPort;
use crate::policy::VisibilityPolicy;
use crate::settings_store::{OptionSymbol, OptionValue, SettingsStore, MAX_VOLUME};

use super::items::{options_list, OptionEntry};
use super::render::OptionsView;

pub const VOLUME_STEP: u8 = 20;

/// Value the menu shows for `symbol`, with first-run defaults applied.
pub fn option_value<S: SettingsStore>(policy: &VisibilityPolicy<S>, symbol: OptionSymbol) -> OptionValue {
    match symbol {
        OptionSymbol::TouchUi => OptionValue::Flag(policy.preferences().touch_ui_enabled),
        OptionSymbol::BottomButtonLayout => {
            OptionValue::Flag(policy.preferences().bottom_button_layout)
        }
        _ if symbol.is_volume() => OptionValue::Volume(policy.store().read_volume(symbol)),
        _ => OptionValue::Flag(policy.store().read_flag(symbol, false)),
    }
}

/// Value an "ok" press produces: flags flip, volumes step up and wrap past full to zero.
pub fn next_value(current: OptionValue) -> OptionValue {
    match current {
        OptionValue::Flag(flag) => OptionValue::Flag(!flag),
        OptionValue::Volume(volume) => {
            let next = volume.saturating_add(VOLUME_STEP);
            OptionValue::Volume(if next > MAX_VOLUME { 0 } else { next })
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionsMenuState {
    entries: Vec<OptionEntry>,
    selected: usize,
}

impl OptionsMenuState {
    pub fn new<S: SettingsStore>(policy: &VisibilityPolicy<S>) -> Self {
        Self {
            entries: options_list(
                policy.is_configurable(),
                &policy.config().bottom_button_label,
            ),
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn max_commands(&self) -> usize {
        self.entries.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&OptionEntry> {
        self.entries.get(self.selected)
    }

    pub fn move_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.entries.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn move_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    /// Move the cursor onto `symbol`. Returns false when the menu does not offer it.
    pub fn select_symbol(&mut self, symbol: OptionSymbol) -> bool {
        match self.entries.iter().position(|entry| entry.symbol == symbol) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    /// Commit the next value for the selected entry.
    pub fn activate<S, L>(
        &self,
        policy: &mut VisibilityPolicy<S>,
        screen: &mut L,
    ) -> Option<OptionValue>
    where
        S: SettingsStore,
        L: ScreenLayoutPort + ?Sized,
    {
        let symbol = self.selected_entry()?.symbol;
        let value = next_value(option_value(policy, symbol));
        policy.commit(symbol, value, screen);
        Some(value)
    }

    pub fn view<'a, S: SettingsStore>(&'a self, policy: &VisibilityPolicy<S>) -> OptionsView<'a> {
        OptionsView {
            entries: &self.entries,
            values: self
                .entries
                .iter()
                .map(|entry| option_value(policy, entry.symbol))
                .collect(),
            selected: self.selected,
        }
    }
}

//! Options entry descriptors built as a pure function of whether the touch UI is configurable.

use crate::settings_store::OptionSymbol;

/// Entries the host menu shows before any touch-UI adjustment.
pub const BASE_MAX_COMMANDS: usize = 7;

const HOST_GENERAL_OPTIONS: &[OptionSymbol] = &[
    OptionSymbol::AlwaysDash,
    OptionSymbol::CommandRemember,
    OptionSymbol::TouchUi,
];

const HOST_VOLUME_OPTIONS: &[OptionSymbol] = &[
    OptionSymbol::BgmVolume,
    OptionSymbol::BgsVolume,
    OptionSymbol::MeVolume,
    OptionSymbol::SeVolume,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub symbol: OptionSymbol,
}

impl OptionEntry {
    fn host(symbol: OptionSymbol) -> Self {
        Self {
            label: default_label(symbol).to_string(),
            symbol,
        }
    }
}

pub fn default_label(symbol: OptionSymbol) -> &'static str {
    match symbol {
        OptionSymbol::AlwaysDash => "Always Dash",
        OptionSymbol::CommandRemember => "Command Remember",
        OptionSymbol::TouchUi => "Touch UI",
        OptionSymbol::BottomButtonLayout => crate::config::DEFAULT_BOTTOM_BUTTON_LABEL,
        OptionSymbol::BgmVolume => "BGM Volume",
        OptionSymbol::BgsVolume => "BGS Volume",
        OptionSymbol::MeVolume => "ME Volume",
        OptionSymbol::SeVolume => "SE Volume",
    }
}

/// General options: the placement toggle is appended when configurable,
/// and the visibility toggle is dropped when not.
pub fn general_options(configurable: bool, bottom_button_label: &str) -> Vec<OptionEntry> {
    let mut entries: Vec<OptionEntry> = HOST_GENERAL_OPTIONS
        .iter()
        .copied()
        .filter(|symbol| configurable || *symbol != OptionSymbol::TouchUi)
        .map(OptionEntry::host)
        .collect();
    if configurable {
        entries.push(OptionEntry {
            label: bottom_button_label.to_string(),
            symbol: OptionSymbol::BottomButtonLayout,
        });
    }
    entries
}

pub fn volume_options() -> Vec<OptionEntry> {
    HOST_VOLUME_OPTIONS
        .iter()
        .copied()
        .map(OptionEntry::host)
        .collect()
}

pub fn options_list(configurable: bool, bottom_button_label: &str) -> Vec<OptionEntry> {
    let mut entries = general_options(configurable, bottom_button_label);
    entries.extend(volume_options());
    entries
}

/// Command count the menu reserves room for.
pub fn max_commands(configurable: bool) -> usize {
    if configurable {
        BASE_MAX_COMMANDS + 1
    } else {
        BASE_MAX_COMMANDS - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(entries: &[OptionEntry]) -> Vec<OptionSymbol> {
        entries.iter().map(|entry| entry.symbol).collect()
    }

    #[test]
    fn host_baseline_matches_base_command_count() {
        assert_eq!(
            HOST_GENERAL_OPTIONS.len() + HOST_VOLUME_OPTIONS.len(),
            BASE_MAX_COMMANDS
        );
    }

    #[test]
    fn configurable_menu_appends_placement_after_general_options() {
        let entries = general_options(true, "Buttons below");
        assert_eq!(
            symbols(&entries),
            vec![
                OptionSymbol::AlwaysDash,
                OptionSymbol::CommandRemember,
                OptionSymbol::TouchUi,
                OptionSymbol::BottomButtonLayout,
            ]
        );
        assert_eq!(entries[3].label, "Buttons below");
    }

    #[test]
    fn locked_menu_drops_visibility_toggle_and_has_no_placement() {
        let entries = options_list(false, "unused");
        assert!(!symbols(&entries).contains(&OptionSymbol::TouchUi));
        assert!(!symbols(&entries).contains(&OptionSymbol::BottomButtonLayout));
    }

    #[test]
    fn command_count_matches_built_list_in_both_branches() {
        for configurable in [false, true] {
            let entries = options_list(configurable, "Touch UI at bottom");
            assert_eq!(entries.len(), max_commands(configurable), "{configurable}");
        }
        assert_eq!(max_commands(true), 8);
        assert_eq!(max_commands(false), 6);
    }

    #[test]
    fn volume_options_follow_general_options() {
        let entries = options_list(true, "Touch UI at bottom");
        let tail = symbols(&entries[4..]);
        assert_eq!(tail, HOST_VOLUME_OPTIONS.to_vec());
    }
}

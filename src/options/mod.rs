//! Options menu wiring so the entry list, its rendering, and commits evolve together.

mod items;
mod render;
mod state;

pub use items::{
    default_label, general_options, max_commands, options_list, volume_options, OptionEntry,
    BASE_MAX_COMMANDS,
};
pub use render::{format_options_menu, OptionsView};
pub use state::{next_value, option_value, OptionsMenuState, VOLUME_STEP};

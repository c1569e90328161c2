//! touchui - drive the touch-button policy from the command line.
//!
//! Loads the persisted settings, applies `--toggle` commits through the options
//! menu exactly as a player would, saves, and prints the resulting button state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use touchui::config::{LogConfig, TouchUiConfig};
use touchui::options::{format_options_menu, OptionsMenuState};
use touchui::scene::{SceneKind, SceneScreen, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use touchui::settings_store::{default_config_path, FileSettingsStore};
use touchui::{init_tracing, session_span, DeviceClass, OptionSymbol, VisibilityPolicy};

const MENU_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ToggleTarget {
    /// Show or hide the touch buttons
    TouchUi,
    /// Move the buttons between the top and bottom edge
    BottomLayout,
}

impl ToggleTarget {
    fn symbol(self) -> OptionSymbol {
        match self {
            ToggleTarget::TouchUi => OptionSymbol::TouchUi,
            ToggleTarget::BottomLayout => OptionSymbol::BottomButtonLayout,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "touchui", about = "touchui: touch button visibility and placement", version)]
struct Cli {
    #[command(flatten)]
    touch_ui: TouchUiConfig,

    #[command(flatten)]
    log: LogConfig,

    /// Device class reported by the host
    #[arg(long = "device", value_enum, default_value_t = DeviceClass::Desktop)]
    device: DeviceClass,

    /// Screen whose buttons are refreshed
    #[arg(long = "screen", value_enum, default_value_t = SceneKind::Options)]
    screen: SceneKind,

    /// Screen height in pixels
    #[arg(
        long = "screen-height",
        default_value_t = DEFAULT_SCREEN_HEIGHT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    screen_height: i32,

    /// Settings file (default: $TOUCHUI_CONFIG_DIR/config.toml or the platform config dir)
    #[arg(long = "config-file")]
    config_file: Option<PathBuf>,

    /// Commit a toggle from the options menu (repeatable)
    #[arg(long = "toggle", value_enum)]
    toggle: Vec<ToggleTarget>,

    /// Print the options menu
    #[arg(long = "menu", default_value_t = false)]
    menu: bool,
}

fn open_store(config_file: Option<PathBuf>) -> Result<FileSettingsStore> {
    let path = match config_file {
        Some(path) => path,
        None => default_config_path().context("cannot resolve settings file path")?,
    };
    match FileSettingsStore::open(&path) {
        Ok(store) => Ok(store),
        Err(err) => {
            tracing::warn!("settings unreadable ({err:#}); starting from defaults");
            eprintln!("warning: {err:#}; starting from defaults");
            Ok(FileSettingsStore::fresh(path))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);
    let _session = session_span(&cli.touch_ui, cli.device).entered();

    let store = open_store(cli.config_file)?;
    let mut policy = VisibilityPolicy::new(cli.touch_ui, cli.device, store);
    let mut screen = SceneScreen::with_size(cli.screen, DEFAULT_SCREEN_WIDTH, cli.screen_height);
    let mut menu = OptionsMenuState::new(&policy);
    policy.refresh_buttons(&mut screen);

    let mut committed = false;
    for target in cli.toggle {
        if !menu.select_symbol(target.symbol()) {
            println!(
                "option {} is not available (display mode {}, {} device)",
                target.symbol(),
                policy.config().display_mode,
                policy.device()
            );
            continue;
        }
        menu.activate(&mut policy, &mut screen);
        committed = true;
    }
    if committed {
        policy.persist()?;
    }

    let state = policy.effective_state();
    let layout = policy.layout(&screen);
    println!("display mode: {}", policy.config().display_mode);
    println!("device: {}", policy.device());
    println!(
        "configurable: {}",
        if policy.is_configurable() { "yes" } else { "no" }
    );
    println!(
        "touch UI: {}",
        if state.visible { "visible" } else { "hidden" }
    );
    println!(
        "layout: {}",
        if state.bottom_layout { "bottom" } else { "top" }
    );
    println!(
        "button area: top={} bottom={} height={}",
        layout.button_area_top(),
        layout.button_area_bottom(),
        layout.button_area_height()
    );
    println!(
        "content area: top={} height={}",
        layout.main_area_top(),
        layout.main_area_height()
    );
    for button in screen.buttons() {
        println!(
            "button {}: {} x={} y={}",
            button.kind,
            if button.visible { "shown" } else { "hidden" },
            button.x,
            button.y
        );
    }

    if cli.menu {
        println!("{}", format_options_menu(&menu.view(&policy), MENU_WIDTH));
    }
    Ok(())
}

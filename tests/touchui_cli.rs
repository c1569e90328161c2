//! Integration tests that lock touchui CLI output and persistence behavior.

use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn touchui_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_touchui").expect("touchui test binary not built")
}

fn unique_config_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!("touchui-cli-{suffix}-{nanos}"))
}

fn run(config_dir: &PathBuf, args: &[&str]) -> String {
    let output = Command::new(touchui_bin())
        .env("TOUCHUI_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("run touchui");
    assert!(output.status.success(), "{}", combined_output(&output));
    combined_output(&output)
}

#[test]
fn touchui_help_lists_policy_flags() {
    let output = Command::new(touchui_bin())
        .arg("--help")
        .output()
        .expect("run touchui --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("--display-mode"));
    assert!(combined.contains("--touch-ui-default"));
    assert!(combined.contains("--bottom-button-label"));
    assert!(combined.contains("--toggle"));
}

#[test]
fn first_run_is_hidden_until_toggled_and_persists() {
    let dir = unique_config_dir("persist");
    let first = run(&dir, &[]);
    assert!(first.contains("touch UI: hidden"));
    assert!(first.contains("button area: top=0 bottom=0 height=0"));
    assert!(!dir.join("config.toml").exists());

    let toggled = run(&dir, &["--toggle", "touch-ui", "--toggle", "bottom-layout"]);
    assert!(toggled.contains("touch UI: visible"));
    assert!(toggled.contains("layout: bottom"));
    assert!(toggled.contains("button cancel: shown x=716 y=574"));

    let reloaded = run(&dir, &[]);
    assert!(reloaded.contains("touch UI: visible"));
    assert!(reloaded.contains("layout: bottom"));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn never_mode_rejects_toggle_and_hides_menu_entry() {
    let dir = unique_config_dir("never");
    let out = run(
        &dir,
        &["--display-mode", "never", "--toggle", "touch-ui", "--menu"],
    );
    assert!(out.contains("option touch_ui is not available"));
    assert!(out.contains("configurable: no"));
    assert!(out.contains("touch UI: hidden"));
    assert!(!out.contains("Touch UI"));
    assert!(!dir.join("config.toml").exists());
}

#[test]
fn mobile_device_always_shows_menu_screen_buttons() {
    let dir = unique_config_dir("mobile");
    let out = run(&dir, &["--device", "mobile", "--screen", "menu"]);
    assert!(out.contains("touch UI: visible"));
    assert!(out.contains("button cancel: shown"));
    assert!(out.contains("button page-up: shown x=4 y=2"));
    assert!(out.contains("button page-down: shown x=56 y=2"));
}

#[test]
fn menu_shows_configured_placement_label() {
    let dir = unique_config_dir("menu");
    let out = run(&dir, &["--menu", "--bottom-button-label", "Buttons below"]);
    assert!(out.contains("Options"));
    assert!(out.contains("Touch UI"));
    assert!(out.contains("Buttons below"));
    assert!(out.contains("BGM Volume"));
}

#[test]
fn non_positive_screen_height_is_rejected() {
    let dir = unique_config_dir("height");
    for height in ["--screen-height=0", "--screen-height=-2147483648"] {
        let output = Command::new(touchui_bin())
            .env("TOUCHUI_CONFIG_DIR", &dir)
            .arg(height)
            .output()
            .expect("run touchui");
        assert!(!output.status.success(), "{height} accepted");
        assert!(combined_output(&output).contains("--screen-height"));
    }
}

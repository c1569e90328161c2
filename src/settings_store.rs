//! Persisted settings record (`~/.config/touchui/config.toml`) and the store seam around it.
//!
//! The record is a flat table shared with the host. The touch-UI layer owns the
//! `touch_ui` and `bottom_button_layout` keys; every other key is carried through
//! untouched so saving an unmodified record writes back what was loaded.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "TOUCHUI_CONFIG_DIR";
const CONFIG_HEADER: &str = "# touchui settings record\n";

pub const MAX_VOLUME: u8 = 100;

/// Options-menu symbols, one per persisted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSymbol {
    AlwaysDash,
    CommandRemember,
    TouchUi,
    BottomButtonLayout,
    BgmVolume,
    BgsVolume,
    MeVolume,
    SeVolume,
}

impl OptionSymbol {
    pub const ALL: &'static [OptionSymbol] = &[
        OptionSymbol::AlwaysDash,
        OptionSymbol::CommandRemember,
        OptionSymbol::TouchUi,
        OptionSymbol::BottomButtonLayout,
        OptionSymbol::BgmVolume,
        OptionSymbol::BgsVolume,
        OptionSymbol::MeVolume,
        OptionSymbol::SeVolume,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OptionSymbol::AlwaysDash => "always_dash",
            OptionSymbol::CommandRemember => "command_remember",
            OptionSymbol::TouchUi => "touch_ui",
            OptionSymbol::BottomButtonLayout => "bottom_button_layout",
            OptionSymbol::BgmVolume => "bgm_volume",
            OptionSymbol::BgsVolume => "bgs_volume",
            OptionSymbol::MeVolume => "me_volume",
            OptionSymbol::SeVolume => "se_volume",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|symbol| symbol.key() == key)
    }

    #[inline]
    pub fn is_volume(self) -> bool {
        matches!(
            self,
            OptionSymbol::BgmVolume
                | OptionSymbol::BgsVolume
                | OptionSymbol::MeVolume
                | OptionSymbol::SeVolume
        )
    }

    /// Symbols whose commits change the on-screen buttons.
    #[inline]
    pub fn drives_touch_buttons(self) -> bool {
        matches!(self, OptionSymbol::TouchUi | OptionSymbol::BottomButtonLayout)
    }
}

impl std::fmt::Display for OptionSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Flag(bool),
    Volume(u8),
}

/// Flat settings record as persisted on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsRecord {
    table: toml::Table,
}

impl SettingsRecord {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("settings record is not a valid TOML table")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize settings record")
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Boolean stored under `key`, or `default` when absent or not a boolean.
    pub fn read_flag(&self, key: &str, default: bool) -> bool {
        match self.table.get(key) {
            Some(toml::Value::Boolean(value)) => *value,
            _ => default,
        }
    }

    /// Volume stored under `key`, rounded and clamped to `0..=100`; full volume when
    /// absent or not a number.
    pub fn read_volume(&self, key: &str) -> u8 {
        match self.table.get(key) {
            Some(toml::Value::Integer(value)) => {
                u8::try_from((*value).clamp(0, i64::from(MAX_VOLUME))).unwrap_or(MAX_VOLUME)
            }
            Some(toml::Value::Float(value)) if !value.is_nan() => {
                // Saturating cast after the clamp.
                value.round().clamp(0.0, f64::from(MAX_VOLUME)) as u8
            }
            _ => MAX_VOLUME,
        }
    }

    pub fn value(&self, symbol: OptionSymbol) -> Option<OptionValue> {
        let stored = self.table.get(symbol.key())?;
        if symbol.is_volume() {
            match stored {
                toml::Value::Integer(_) | toml::Value::Float(_) => {
                    Some(OptionValue::Volume(self.read_volume(symbol.key())))
                }
                _ => None,
            }
        } else {
            stored.as_bool().map(OptionValue::Flag)
        }
    }

    pub fn set_value(&mut self, symbol: OptionSymbol, value: OptionValue) {
        let stored = match value {
            OptionValue::Flag(flag) => toml::Value::Boolean(flag),
            OptionValue::Volume(volume) => toml::Value::Integer(i64::from(volume.min(MAX_VOLUME))),
        };
        self.table.insert(symbol.key().to_string(), stored);
    }
}

/// Narrow view of the host's settings storage.
pub trait SettingsStore {
    fn value(&self, symbol: OptionSymbol) -> Option<OptionValue>;

    fn set_value(&mut self, symbol: OptionSymbol, value: OptionValue);

    /// Write the current record to durable storage.
    fn persist(&mut self) -> Result<()>;

    fn read_flag(&self, symbol: OptionSymbol, default: bool) -> bool {
        match self.value(symbol) {
            Some(OptionValue::Flag(flag)) => flag,
            _ => default,
        }
    }

    fn read_volume(&self, symbol: OptionSymbol) -> u8 {
        match self.value(symbol) {
            Some(OptionValue::Volume(volume)) => volume,
            _ => MAX_VOLUME,
        }
    }
}

/// The two persisted preferences the touch-UI layer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub touch_ui_enabled: bool,
    pub bottom_button_layout: bool,
}

impl Preferences {
    /// Read preferences, applying first-run defaults for missing keys.
    pub fn load<S: SettingsStore + ?Sized>(store: &S, touch_ui_default: bool) -> Self {
        Self {
            touch_ui_enabled: store.read_flag(OptionSymbol::TouchUi, touch_ui_default),
            bottom_button_layout: store.read_flag(OptionSymbol::BottomButtonLayout, false),
        }
    }
}

/// Resolve the config directory path.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|dir| dir.join("touchui"))
}

/// Resolve the full settings file path.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Settings record backed by a TOML file.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    record: SettingsRecord,
}

impl FileSettingsStore {
    /// Load the record at `path`. A missing file is a first run and yields an empty record.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let record = match fs::read_to_string(&path) {
            Ok(contents) => SettingsRecord::parse(&contents)
                .with_context(|| format!("failed to parse {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SettingsRecord::default(),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        tracing::debug!(path = %path.display(), keys = record.table.len(), "settings loaded");
        Ok(Self { path, record })
    }

    pub fn open_default() -> Result<Self> {
        let path = default_config_path().context("cannot resolve settings file path")?;
        Self::open(path)
    }

    /// Empty record that will be written to `path` on the next persist.
    pub fn fresh(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            record: SettingsRecord::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }
}

impl SettingsStore for FileSettingsStore {
    fn value(&self, symbol: OptionSymbol) -> Option<OptionValue> {
        self.record.value(symbol)
    }

    fn set_value(&mut self, symbol: OptionSymbol, value: OptionValue) {
        self.record.set_value(symbol, value);
    }

    fn persist(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let body = format!("{CONFIG_HEADER}{}", self.record.to_toml_string()?);
        fs::write(&self.path, body)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// In-memory store for embedding hosts that persist elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    record: SettingsRecord,
    saved: Option<SettingsRecord>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: SettingsRecord) -> Self {
        Self {
            record,
            saved: None,
        }
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    /// Snapshot taken by the last `persist` call.
    pub fn saved(&self) -> Option<&SettingsRecord> {
        self.saved.as_ref()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn value(&self, symbol: OptionSymbol) -> Option<OptionValue> {
        self.record.value(symbol)
    }

    fn set_value(&mut self, symbol: OptionSymbol, value: OptionValue) {
        self.record.set_value(symbol, value);
    }

    fn persist(&mut self) -> Result<()> {
        self.saved = Some(self.record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        env::temp_dir().join(format!("touchui-store-{suffix}-{nanos}"))
    }

    #[test]
    fn parse_empty_record() {
        let record = SettingsRecord::parse("").expect("empty record");
        assert!(record.is_empty());
    }

    #[test]
    fn read_flag_defaults_when_absent_or_mistyped() {
        let record = SettingsRecord::parse("touch_ui = \"yes\"\nalways_dash = true\n")
            .expect("record");
        assert!(record.read_flag("always_dash", false));
        assert!(record.read_flag("touch_ui", true));
        assert!(!record.read_flag("touch_ui", false));
        assert!(!record.read_flag("bottom_button_layout", false));
    }

    #[test]
    fn read_volume_clamps_and_defaults_to_full() {
        let record =
            SettingsRecord::parse("bgm_volume = 140\nse_volume = -5\nme_volume = 40\n")
                .expect("record");
        assert_eq!(record.read_volume("bgm_volume"), 100);
        assert_eq!(record.read_volume("se_volume"), 0);
        assert_eq!(record.read_volume("me_volume"), 40);
        assert_eq!(record.read_volume("bgs_volume"), 100);
    }

    #[test]
    fn read_volume_rounds_hand_edited_floats() {
        let record = SettingsRecord::parse(
            "bgm_volume = 60.0
bgs_volume = 59.6
me_volume = 250.5
se_volume = -3.2
",
        )
        .expect("record");
        assert_eq!(record.read_volume("bgm_volume"), 60);
        assert_eq!(record.read_volume("bgs_volume"), 60);
        assert_eq!(record.read_volume("me_volume"), 100);
        assert_eq!(record.read_volume("se_volume"), 0);
        assert_eq!(
            record.value(OptionSymbol::BgmVolume),
            Some(OptionValue::Volume(60))
        );

        let nan = SettingsRecord::parse("bgm_volume = nan
").expect("record");
        assert_eq!(nan.read_volume("bgm_volume"), 100);
    }

    #[test]
    fn untouched_record_roundtrips_with_unknown_keys() {
        let content = r#"
always_dash = true
bgm_volume = 60
touch_ui = false
bottom_button_layout = true
host_extension = "kept"
window_tone = [0, 0, 0]
"#;
        let record = SettingsRecord::parse(content).expect("record");
        let serialized = record.to_toml_string().expect("serialize");
        let reparsed = SettingsRecord::parse(&serialized).expect("reparse");
        assert_eq!(record, reparsed);
        assert!(serialized.contains("host_extension = \"kept\""));
    }

    #[test]
    fn value_maps_symbols_to_typed_values() {
        let mut record = SettingsRecord::default();
        assert_eq!(record.value(OptionSymbol::TouchUi), None);
        record.set_value(OptionSymbol::TouchUi, OptionValue::Flag(true));
        record.set_value(OptionSymbol::SeVolume, OptionValue::Volume(80));
        assert_eq!(
            record.value(OptionSymbol::TouchUi),
            Some(OptionValue::Flag(true))
        );
        assert_eq!(
            record.value(OptionSymbol::SeVolume),
            Some(OptionValue::Volume(80))
        );
    }

    #[test]
    fn symbol_keys_roundtrip() {
        for symbol in OptionSymbol::ALL {
            assert_eq!(OptionSymbol::from_key(symbol.key()), Some(*symbol));
        }
        assert_eq!(OptionSymbol::from_key("touchUI"), None);
    }

    #[test]
    fn preferences_use_first_run_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(
            Preferences::load(&store, true),
            Preferences {
                touch_ui_enabled: true,
                bottom_button_layout: false,
            }
        );
        assert_eq!(Preferences::load(&store, false), Preferences::default());
    }

    #[test]
    fn preferences_prefer_stored_values_over_defaults() {
        let mut store = MemorySettingsStore::new();
        store.set_value(OptionSymbol::TouchUi, OptionValue::Flag(false));
        store.set_value(OptionSymbol::BottomButtonLayout, OptionValue::Flag(true));
        let prefs = Preferences::load(&store, true);
        assert!(!prefs.touch_ui_enabled);
        assert!(prefs.bottom_button_layout);
    }

    #[test]
    fn memory_store_snapshots_on_persist() {
        let mut store = MemorySettingsStore::new();
        store.set_value(OptionSymbol::TouchUi, OptionValue::Flag(true));
        assert!(store.saved().is_none());
        store.persist().expect("persist");
        store.set_value(OptionSymbol::TouchUi, OptionValue::Flag(false));
        let saved = store.saved().expect("snapshot");
        assert_eq!(saved.value(OptionSymbol::TouchUi), Some(OptionValue::Flag(true)));
    }

    #[test]
    fn file_store_missing_file_is_first_run() {
        let dir = unique_dir("missing");
        let store = FileSettingsStore::open(dir.join(CONFIG_FILE)).expect("open");
        assert!(store.record().is_empty());
    }

    #[test]
    fn file_store_rejects_malformed_record() {
        let dir = unique_dir("malformed");
        fs::create_dir_all(&dir).expect("create dir");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "touch_ui = = true").expect("write");
        let err = FileSettingsStore::open(&path).expect_err("malformed record");
        assert!(format!("{err:#}").contains("failed to parse"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn file_store_save_and_load_roundtrip() {
        let dir = unique_dir("roundtrip");
        let path = dir.join("nested").join(CONFIG_FILE);
        let mut store = FileSettingsStore::fresh(&path);
        store.set_value(OptionSymbol::TouchUi, OptionValue::Flag(true));
        store.set_value(OptionSymbol::BottomButtonLayout, OptionValue::Flag(true));
        store.set_value(OptionSymbol::BgmVolume, OptionValue::Volume(40));
        store.persist().expect("persist");

        let loaded = FileSettingsStore::open(&path).expect("reopen");
        assert_eq!(loaded.record(), store.record());
        assert_eq!(
            Preferences::load(&loaded, false),
            Preferences {
                touch_ui_enabled: true,
                bottom_button_layout: true,
            }
        );
        assert_eq!(loaded.read_volume(OptionSymbol::BgmVolume), 40);
        let _ = fs::remove_dir_all(dir);
    }
}

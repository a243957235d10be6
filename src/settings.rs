use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};
use std::time::Duration;

use crate::pagination::ItemsPerPage;
use crate::toast::{DEFAULT_MAX_TOASTS, DEFAULT_TOAST_DURATION};

pub const CURRENT_VERSION: u32 = 2;
pub const MAX_TOAST_DURATION_SECS: u64 = 60 * 60;
const SETTINGS_FILENAME: &str = "config.yaml";
const APP_NAME: &str = "rosterview";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub items_per_page: ItemsPerPage,

    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,

    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_toast_duration_secs() -> u64 {
    DEFAULT_TOAST_DURATION.as_secs()
}

fn default_max_toasts() -> usize {
    DEFAULT_MAX_TOASTS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            items_per_page: ItemsPerPage::default(),
            toast_duration_secs: default_toast_duration_secs(),
            max_toasts: default_max_toasts(),
        }
    }
}

impl Settings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs.clamp(1, MAX_TOAST_DURATION_SECS))
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_NAME).join(SETTINGS_FILENAME))
}

/// Load the global settings from the standard location, writing defaults
/// there on first run.
pub fn load_settings() {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory, using default settings");
        return;
    };
    load_settings_from(&path);
}

pub fn load_settings_from(path: &Path) {
    let settings = if path.exists() {
        read_settings(path)
    } else {
        info!("Settings file not found, creating with defaults at {path:?}");
        let settings = Settings::default();
        save_settings_to_file(&settings, path);
        settings
    };

    if let Ok(mut global) = SETTINGS.write() {
        *global = settings;
    }
}

/// Parse settings from `path`. Unreadable or malformed files fall back to
/// defaults; older versions are migrated and written back.
pub fn read_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read settings file {path:?}: {e}");
            return Settings::default();
        }
    };

    match serde_yaml::from_str::<Settings>(&content) {
        Ok(mut settings) => {
            debug!("Loaded settings from {path:?}");
            if settings.version < CURRENT_VERSION {
                migrate_settings(&mut settings);
                save_settings_to_file(&settings, path);
            }
            settings
        }
        Err(e) => {
            error!("Failed to parse settings file {path:?}: {e}");
            Settings::default()
        }
    }
}

fn migrate_settings(settings: &mut Settings) {
    info!(
        "Migrating settings from v{} to v{}",
        settings.version, CURRENT_VERSION
    );

    // v1 had no toast limit and allowed a zero duration.
    if settings.version < 2 {
        settings.max_toasts = settings.max_toasts.max(1);
        settings.toast_duration_secs = settings.toast_duration_secs.max(1);
    }

    settings.version = CURRENT_VERSION;
}

pub fn save_settings() {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory, cannot save settings");
        return;
    };

    if let Ok(settings) = SETTINGS.read() {
        save_settings_to_file(&settings, &path);
    }
}

pub fn save_settings_to_file(settings: &Settings, path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory {parent:?}: {e}");
                return;
            }
        }
    }

    let content = match serde_yaml::to_string(settings) {
        Ok(yaml) => format!("{SETTINGS_HEADER}{yaml}"),
        Err(e) => {
            error!("Failed to serialize settings: {e}");
            return;
        }
    };

    match fs::write(path, content) {
        Ok(()) => debug!("Saved settings to {path:?}"),
        Err(e) => error!("Failed to save settings to {path:?}: {e}"),
    }
}

const SETTINGS_HEADER: &str = "\
# rosterview settings
# items_per_page: one of 10, 20, 50
";

pub fn current() -> Settings {
    SETTINGS.read().map(|s| s.clone()).unwrap_or_default()
}

pub fn get_items_per_page() -> ItemsPerPage {
    SETTINGS
        .read()
        .map(|s| s.items_per_page)
        .unwrap_or_default()
}

pub fn set_items_per_page(items_per_page: ItemsPerPage) {
    if let Ok(mut settings) = SETTINGS.write() {
        settings.items_per_page = items_per_page;
    }
}

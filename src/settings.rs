//! Optional settings file, created with defaults on first run.
//!
//! Nothing here is required: a missing or unparseable file falls back to
//! defaults silently.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kernel::KernelConfig;

const SETTINGS_DIR: &str = ".hview";
const SETTINGS_FILE: &str = "setting.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Main loop poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notice stays on screen.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
    /// Grace period before the preview content handle is revoked.
    #[serde(default = "default_preview_release_ms")]
    pub preview_release_ms: u64,
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_notice_ttl_ms() -> u64 {
    5000
}

fn default_preview_release_ms() -> u64 {
    1000
}

fn default_mouse_capture() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_ttl_ms: default_notice_ttl_ms(),
            preview_release_ms: default_preview_release_ms(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl Settings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn kernel_config(&self) -> KernelConfig {
        KernelConfig {
            notice_ttl: Duration::from_millis(self.notice_ttl_ms),
            release_grace: Duration::from_millis(self.preview_release_ms),
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    home_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

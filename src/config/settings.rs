//! User settings for spotlight-tour
//!
//! Manages user preferences for the demo host: event-loop tick rate,
//! glide scroll speed and mouse capture.

use serde::{Deserialize, Serialize};

use super::paths::SpotlightPaths;
use crate::error::SpotlightError;

/// User settings for spotlight-tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Event-loop tick rate in milliseconds; the glide animation advances
    /// once per tick
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Cells the glide animation moves per tick, per axis
    #[serde(default = "default_scroll_cells_per_tick")]
    pub scroll_cells_per_tick: u16,

    /// Whether to capture mouse events (keyboard-only tours when false)
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_scroll_cells_per_tick() -> u16 {
    3
}

fn default_mouse_capture() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tick_rate_ms: default_tick_rate_ms(),
            scroll_cells_per_tick: default_scroll_cells_per_tick(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpotlightPaths) -> Result<Self, SpotlightError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpotlightError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpotlightError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpotlightPaths) -> Result<(), SpotlightError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpotlightError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SpotlightError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

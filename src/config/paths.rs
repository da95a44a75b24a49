//! Path management for spotlight-tour
//!
//! Provides XDG-compliant path resolution for configuration and tour decks.
//!
//! ## Path Resolution Order
//!
//! 1. `SPOTLIGHT_TOUR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spotlight-tour` or `~/.config/spotlight-tour`
//! 3. Windows: `%APPDATA%\spotlight-tour`

use std::path::PathBuf;

use crate::error::SpotlightError;

/// Manages all paths used by spotlight-tour
#[derive(Debug, Clone)]
pub struct SpotlightPaths {
    /// Base directory for all spotlight-tour data
    base_dir: PathBuf,
}

impl SpotlightPaths {
    /// Create a new SpotlightPaths instance
    ///
    /// Path resolution:
    /// 1. `SPOTLIGHT_TOUR_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/spotlight-tour` or `~/.config/spotlight-tour`
    /// 3. Windows: `%APPDATA%\spotlight-tour`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpotlightError> {
        let base_dir = if let Ok(custom) = std::env::var("SPOTLIGHT_TOUR_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpotlightPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spotlight-tour/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the directory for saved tour decks (~/.config/spotlight-tour/decks/)
    pub fn decks_dir(&self) -> PathBuf {
        self.base_dir.join("decks")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SpotlightError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpotlightError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.decks_dir())
            .map_err(|e| SpotlightError::Io(format!("Failed to create decks directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpotlightError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("spotlight-tour"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpotlightError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpotlightError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spotlight-tour"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpotlightPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.decks_dir(), temp_dir.path().join("decks"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("SPOTLIGHT_TOUR_DATA_DIR", custom_path);

        let paths = SpotlightPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("SPOTLIGHT_TOUR_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpotlightPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.decks_dir().exists());
    }
}

//! Settings persistence
//!
//! Loads [`AiConfig`] from a JSON file. An explicit `--config` path wins;
//! otherwise `ai.json` in the platform configuration directory is used when
//! it exists.
//!
//! # Error Handling
//!
//! Loading never fails: a missing, unreadable or invalid file is logged and
//! the defaults are used instead. Saving reports its error to the caller.

use anyhow::Context;
use chess_ai::AiConfig;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "ai.json";

/// `ai.json` in the user's configuration directory, if the platform has one
///
/// E.g. `~/.config/chessbot/ai.json` on Linux.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "chessbot", "chessbot")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Resolve and load settings, falling back to defaults
pub fn load_settings(explicit: Option<&Path>) -> AiConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
                return AiConfig::default();
            }
            None => {
                info!("[SETTINGS] No configuration directory. Using defaults.");
                return AiConfig::default();
            }
        },
    };

    match AiConfig::load_from_path(&path) {
        Ok(config) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            config
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            AiConfig::default()
        }
    }
}

/// Write settings to the explicit path or the default location
pub fn save_settings(config: &AiConfig, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_settings_path().context("no configuration directory on this platform")?,
    };

    config
        .save_to_path(&path)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chessbot_settings_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        //! Values from an explicit settings file override the defaults
        let path = scratch_file("explicit.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "depth": 5, "use_opening_book": false }"#).unwrap();

        let config = load_settings(Some(&path));
        let _ = fs::remove_file(&path);

        assert_eq!(config.depth, 5);
        assert!(!config.use_opening_book);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_settings(Some(&scratch_file("does_not_exist.json")));
        assert_eq!(config, AiConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        //! An out-of-range depth is rejected as a whole
        let path = scratch_file("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "depth": 12 }"#).unwrap();

        let config = load_settings(Some(&path));
        let _ = fs::remove_file(&path);

        assert_eq!(config, AiConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("saved.json");
        let config = AiConfig {
            depth: 2,
            seed: Some(3),
            ..AiConfig::default()
        };

        let written = save_settings(&config, Some(&path)).unwrap();
        let loaded = load_settings(Some(&written));
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}

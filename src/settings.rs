//! Runner settings
//!
//! Loaded from a JSON file when one is given; anything missing falls back to
//! the defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// How the bomb key is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BombTrigger {
    /// Bomb requested every tick the key is down
    #[default]
    Held,
    /// Bomb requested only on the tick the key goes down
    Pressed,
}

impl BombTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            BombTrigger::Held => "Held",
            BombTrigger::Pressed => "Pressed",
        }
    }

    /// Turn the raw key state into a bomb request
    pub fn request(&self, down: bool, was_down: bool) -> bool {
        match self {
            BombTrigger::Held => down,
            BombTrigger::Pressed => down && !was_down,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed
    pub seed: u64,
    /// Stop after this many ticks even if the run is still going
    pub max_ticks: u64,
    /// Let the autopilot fly the ship
    pub autopilot: bool,
    pub bomb_trigger: BombTrigger,
    /// Log a HUD line every N ticks (0 = never)
    pub snapshot_every: u64,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            max_ticks: 60 * 60 * 5, // five minutes at 60 Hz
            autopilot: true,
            bomb_trigger: BombTrigger::Held,
            snapshot_every: 600,
            tuning: Tuning::default(),
        }
    }
}

/// Failure reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A balance value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings: {e}"),
            Self::Parse(e) => write!(f, "invalid settings json: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning.{field}: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let settings =
            Settings::from_json(r#"{ "seed": 9, "bomb_trigger": "Pressed", "tuning": { "max_lives": 2 } }"#)
                .unwrap();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.bomb_trigger, BombTrigger::Pressed);
        assert_eq!(settings.tuning.max_lives, 2);
        assert_eq!(settings.tuning.bomb_duration, crate::consts::BOMB_DURATION);
        assert!(settings.autopilot);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ seed: nope }"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_tuning_is_rejected() {
        for json in [
            r#"{ "tuning": { "max_lives": 255 } }"#,
            r#"{ "tuning": { "max_lives": 0 } }"#,
            r#"{ "tuning": { "boss_max_health": 0 } }"#,
            r#"{ "tuning": { "bomb_duration": 0 } }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(SettingsError::Invalid { .. })),
                "{json}"
            );
        }
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let path = std::env::temp_dir().join(format!(
            "star-barrage-invalid-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "seed": 5, "tuning": { "max_lives": 0 } }"#).unwrap();
        let settings = Settings::load(Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.seed, Settings::default().seed);
        assert_eq!(settings.tuning.max_lives, crate::consts::MAX_LIVES);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("star-barrage-missing-settings.json");
        let settings = Settings::load(Some(&path));
        assert_eq!(settings.seed, Settings::default().seed);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "star-barrage-settings-{}.json",
            std::process::id()
        ));
        let settings = Settings {
            seed: 1234,
            autopilot: false,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.seed, 1234);
        assert!(!loaded.autopilot);
    }

    #[test]
    fn test_bomb_trigger() {
        assert!(BombTrigger::Held.request(true, true));
        assert!(BombTrigger::Pressed.request(true, false));
        assert!(!BombTrigger::Pressed.request(true, true));
        assert!(!BombTrigger::Pressed.request(false, false));
    }
}

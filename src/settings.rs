// Copyright 2025 Lars Brubaker
// License: MIT
//
// Editor settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LANE_WIDTH: f32 = 3.75;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lane width must be finite and positive, got {0}")]
    InvalidWidth(f32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width given to new lanelets, used when offsetting boundary points
    /// from the center click path.
    pub lane_width: f32,
    /// Height anchors are pinned to before they reach the boundaries.
    pub ground_y: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lane_width: DEFAULT_LANE_WIDTH,
            ground_y: 0.0,
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.lane_width.is_finite() || self.lane_width <= 0.0 {
            return Err(SettingsError::InvalidWidth(self.lane_width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let s = Settings::from_json_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.lane_width, 3.75);
    }

    #[test]
    fn partial_override() {
        let s = Settings::from_json_str(r#"{ "lane_width": 3.0 }"#).unwrap();
        assert_eq!(s.lane_width, 3.0);
        assert_eq!(s.ground_y, 0.0);
    }

    #[test]
    fn rejects_bad_width() {
        let err = Settings::from_json_str(r#"{ "lane_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidWidth(w) if w == -1.0));
        let err = Settings::from_json_str("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn round_trip() {
        let s = Settings {
            lane_width: 3.5,
            ground_y: 1.25,
        };
        let text = s.to_json_string().unwrap();
        assert_eq!(Settings::from_json_str(&text).unwrap(), s);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}

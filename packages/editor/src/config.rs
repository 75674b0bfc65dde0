use crate::store::EditorMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid zoom bounds: min {min}, max {max}")]
    InvalidZoomBounds { min: f64, max: f64 },

    #[error("Default zoom {zoom} outside {min}..={max}")]
    DefaultZoomOutOfRange { zoom: f64, min: f64, max: f64 },
}

/// Editor session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of undo levels (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,

    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,

    #[serde(default = "default_zoom")]
    pub default_zoom: f64,

    #[serde(default)]
    pub default_mode: EditorMode,
}

fn default_history_limit() -> usize {
    100
}

fn default_min_zoom() -> f64 {
    0.25
}

fn default_max_zoom() -> f64 {
    4.0
}

fn default_zoom() -> f64 {
    1.0
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidZoomBounds { min, max });
        }

        if !(min..=max).contains(&self.default_zoom) {
            return Err(ConfigError::DefaultZoomOutOfRange {
                zoom: self.default_zoom,
                min,
                max,
            });
        }

        Ok(())
    }

    /// Clamp a zoom value into the configured range.
    ///
    /// Never panics, even on bounds that fail `validate`: the lower bound
    /// wins when they are inverted and NaN bounds are ignored.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.min(self.max_zoom).max(self.min_zoom)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            default_zoom: default_zoom(),
            default_mode: EditorMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "historyLimit": 20,
            "minZoom": 0.5,
            "maxZoom": 2.0,
            "defaultMode": "preview"
        }"#;

        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.min_zoom, 0.5);
        assert_eq!(config.max_zoom, 2.0);
        assert_eq!(config.default_zoom, 1.0);
        assert_eq!(config.default_mode, EditorMode::Preview);
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.default_mode, EditorMode::Edit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let json = r#"{ "minZoom": 3.0, "maxZoom": 1.0 }"#;
        assert!(matches!(
            EditorConfig::from_json(json),
            Err(ConfigError::InvalidZoomBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_default_zoom_outside_bounds() {
        let json = r#"{ "maxZoom": 2.0, "defaultZoom": 3.0 }"#;
        assert!(matches!(
            EditorConfig::from_json(json),
            Err(ConfigError::DefaultZoomOutOfRange { .. })
        ));
    }

    #[test]
    fn test_clamp_zoom() {
        let config = EditorConfig::default();
        assert_eq!(config.clamp_zoom(10.0), 4.0);
        assert_eq!(config.clamp_zoom(0.01), 0.25);
        assert_eq!(config.clamp_zoom(1.5), 1.5);
    }

    #[test]
    fn test_clamp_zoom_with_unchecked_bounds() {
        let inverted = EditorConfig {
            min_zoom: 3.0,
            max_zoom: 1.0,
            ..EditorConfig::default()
        };
        assert_eq!(inverted.clamp_zoom(2.0), 3.0);

        let nan = EditorConfig {
            min_zoom: f64::NAN,
            max_zoom: f64::NAN,
            ..EditorConfig::default()
        };
        assert_eq!(nan.clamp_zoom(2.0), 2.0);
    }
}

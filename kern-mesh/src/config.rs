use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topology::Topology;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Kerning must be a finite number, got {0}")]
    InvalidKerning(f32),
}

/// Serialized kerning settings for one text element.
///
/// Missing fields fall back to [`KerningConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerningConfig {
    /// Extra spacing per character step, in pixels (negative tightens).
    pub kerning: f32,
    /// Tessellation the mesh builder emits.
    pub topology: Topology,
    /// Whether the kerning pass runs at all.
    pub enabled: bool,
}

impl Default for KerningConfig {
    fn default() -> Self {
        Self {
            kerning: 0.0,
            topology: Topology::TriangleList,
            enabled: true,
        }
    }
}

impl KerningConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded kerning config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.kerning.is_finite() {
            return Err(ConfigError::InvalidKerning(self.kerning));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = KerningConfig::default();
        assert_eq!(config.kerning, 0.0);
        assert_eq!(config.topology, Topology::TriangleList);
        assert!(config.enabled);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = KerningConfig::from_json(r#"{ "kerning": 2.5 }"#).unwrap();
        assert!((config.kerning - 2.5).abs() < f32::EPSILON);
        assert_eq!(config.topology, Topology::TriangleList);
        assert!(config.enabled);
    }

    #[test]
    fn test_full_json() {
        let config = KerningConfig::from_json(
            r#"{ "kerning": -1.0, "topology": "quad", "enabled": false }"#,
        )
        .unwrap();
        assert_eq!(config.topology, Topology::Quad);
        assert!(!config.enabled);
        assert!((config.kerning + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_json() {
        let err = KerningConfig::from_json(r#"{ "kerning": "wide" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = KerningConfig {
            kerning: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidKerning(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = KerningConfig {
            kerning: 3.0,
            topology: Topology::Quad,
            enabled: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(KerningConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "kerning": 4.0, "topology": "quad" }}"#).unwrap();
        let config = KerningConfig::load(file.path()).unwrap();
        assert_eq!(config.topology, Topology::Quad);
        assert!((config.kerning - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KerningConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

#![forbid(unsafe_code)]

//! Grid editor configuration.
//!
//! [`GridConfig`] carries the normalization scale and the minimum zone size
//! enforced during editing. It can be loaded from TOML or JSON when the
//! `grid-config` feature is enabled.
//!
//! ```toml
//! # zonegrid.toml
//! multiplier = 10000
//! min_size = 250
//! ```
//!
//! ```rust,ignore
//! let config = GridConfig::from_toml_file("zonegrid.toml")?;
//! let config = GridConfig::from_json_str(r#"{"min_size": 250}"#)?;
//! ```

#[cfg(feature = "grid-config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_MULTIPLIER;

/// Default minimum zone width/height in normalized units.
pub const DEFAULT_MIN_ZONE_SIZE: u32 = 1;

/// Tunable parameters for a zone grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Normalized coordinate range `[0, multiplier]` for both axes.
    pub multiplier: u32,
    /// Smallest width or height any zone may have after a split or drag.
    pub min_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            min_size: DEFAULT_MIN_ZONE_SIZE,
        }
    }
}

impl GridConfig {
    /// Config with the given scale and the default minimum size.
    #[must_use]
    pub fn with_multiplier(multiplier: u32) -> Self {
        Self {
            multiplier,
            ..Self::default()
        }
    }

    /// Replace the minimum zone size.
    #[must_use]
    pub fn min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "grid-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, GridConfigError> {
        let config: Self = toml::from_str(s).map_err(GridConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "grid-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GridConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GridConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "grid-config")]
    pub fn from_json_str(s: &str) -> Result<Self, GridConfigError> {
        let config: Self = serde_json::from_str(s).map_err(GridConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "grid-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GridConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GridConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        let mut errors = Vec::new();
        if self.multiplier == 0 {
            errors.push("multiplier must be > 0".to_string());
        }
        if self.min_size == 0 {
            errors.push("min_size must be > 0".to_string());
        }
        if self.min_size > self.multiplier {
            errors.push(format!(
                "min_size must be <= multiplier, got {} > {}",
                self.min_size, self.multiplier
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GridConfigError::Validation(errors))
        }
    }
}

/// Errors from loading or validating a [`GridConfig`].
#[derive(Debug)]
pub enum GridConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "grid-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "grid-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "grid-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "grid-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for GridConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "grid-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "grid-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.multiplier, 10_000);
        assert_eq!(config.min_size, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_min_size_is_rejected() {
        let err = GridConfig::default()
            .min_size(0)
            .validate()
            .expect_err("zero min size");
        assert!(err.to_string().contains("min_size must be > 0"));
    }

    #[test]
    fn min_size_larger_than_multiplier_is_rejected() {
        let err = GridConfig::with_multiplier(100)
            .min_size(101)
            .validate()
            .expect_err("oversized min size");
        let GridConfigError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GridConfig =
            serde_json::from_str(r#"{"min_size": 250}"#).expect("partial config parses");
        assert_eq!(config.multiplier, 10_000);
        assert_eq!(config.min_size, 250);
    }

    #[cfg(feature = "grid-config")]
    #[test]
    fn loads_toml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "multiplier = 1000\nmin_size = 50").expect("write config");
        let config = GridConfig::from_toml_file(file.path()).expect("config loads");
        assert_eq!(config, GridConfig::with_multiplier(1000).min_size(50));
    }

    #[cfg(feature = "grid-config")]
    #[test]
    fn json_loader_validates() {
        let err = GridConfig::from_json_str(r#"{"multiplier": 0}"#).expect_err("zero multiplier");
        assert!(matches!(err, GridConfigError::Validation(_)));
    }
}

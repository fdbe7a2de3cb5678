//! Engine configuration and input file loading.

use std::fs;
use std::path::{Path, PathBuf};

use knit_resize::ResizeTolerances;
use knit_shaping::ShapingLimits;
use knit_sleeve::SleeveLimits;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "knit.toml";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported file format: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thresholds for every calculator. Missing sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub shaping: ShapingLimits,
    pub resize: ResizeTolerances,
    pub sleeve: SleeveLimits,
}

impl EngineConfig {
    /// Load `explicit`, or `knit.toml` in `dir` if it exists, or the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return load_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            load_file(&default_path)
        } else {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

/// Deserialize a TOML, YAML or JSON file, chosen by extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    debug!("Loading {:?}", path);
    let content = fs::read_to_string(path)?;
    match extension.as_deref() {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knit_resize::ResizeRequest;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = EngineConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_default_file_in_directory_is_picked_up() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[shaping]\nmax_plausible_rows = 300\n\n[resize]\ndrift_cm = 1.5\n",
        )
        .unwrap();

        let config = EngineConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.shaping.max_plausible_rows, 300);
        assert_eq!(config.resize.drift_cm, 1.5);
        assert_eq!(config.resize.drift_inch, 0.8);
        assert_eq!(config.sleeve, SleeveLimits::default());
    }

    #[test]
    fn test_yaml_config_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("limits.yaml");
        fs::write(&path, "sleeve:\n  extension_rows: 24\n").unwrap();

        let config = EngineConfig::load(Some(&path), dir.path()).unwrap();
        assert_eq!(config.sleeve.extension_rows, 24);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = EngineConfig::load(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "x = 1").unwrap();
        let err = load_file::<EngineConfig>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_resize_request_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scarf.toml");
        fs::write(
            &path,
            r#"
template = "scarf"

[original_gauge]
stitches = 20
rows = 28
swatch_width = 10
swatch_height = 10

[new_gauge]
stitches = 18
rows = 24
swatch_width = 10
swatch_height = 10

[target]
width = 25
length = 160
"#,
        )
        .unwrap();

        let request: ResizeRequest = load_file(&path).unwrap();
        assert_eq!(request.template, "scarf");
        assert_eq!(request.target.get("width"), Some(&25.0));
        assert_eq!(request.new_gauge.stitches_per_swatch, Some(18.0));
    }
}

//! Gallery behavior configuration.
//!
//! Handles loading and validating an optional `config.toml` from the gallery
//! root. Config files are sparse — override just the values you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [camera]
//! quality = 100               # JPEG quality for capture and crop (0-100)
//! correct_orientation = true  # Rotate per EXIF orientation on capture
//! save_to_album = false       # Also save captures to the system album
//!
//! [paths]
//! style = "direct"            # or "native-resolve" (see below)
//! ```
//!
//! `paths.style` selects how the URI returned by the crop step is split into
//! a directory/filename pair: `"direct"` parses it as-is, `"native-resolve"`
//! resolves it through the host first (hosts whose crop step returns indirect
//! content-style URIs — stock Android being the one that matters).
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Options passed to the camera and crop steps.
    pub camera: CameraConfig,
    /// How acquired-image URIs are split into directory + filename.
    pub paths: PathsConfig,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.camera.quality > 100 {
            return Err(ConfigError::Validation(
                "camera.quality must be 0-100".into(),
            ));
        }
        Ok(())
    }
}

/// Capture and crop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// JPEG quality for the capture and crop steps (0 = worst, 100 = best).
    pub quality: u32,
    /// Ask the host to auto-correct orientation from sensor data.
    pub correct_orientation: bool,
    /// Also write captures to the device's shared photo album.
    pub save_to_album: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            quality: 100,
            correct_orientation: true,
            save_to_album: false,
        }
    }
}

/// URI splitting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Splitting strategy for crop-step URIs.
    pub style: PathStyle,
}

/// How the crop step's result URI maps to a movable directory/filename pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    /// Split the URI at its last `/` as-is.
    #[default]
    Direct,
    /// Resolve the URI through the host first; the directory comes from the
    /// resolved path, the filename from the URI with its `?query` stripped.
    NativeResolve,
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults if no `config.toml` exists. Rejects unknown keys
/// and validates the result.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# filmroll configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Capture / crop
# ---------------------------------------------------------------------------
[camera]
# JPEG quality for the capture and crop steps (0 = worst, 100 = best).
quality = 100

# Ask the host to auto-correct orientation from sensor data.
correct_orientation = true

# Also write captures to the device's shared photo album.
save_to_album = false

# ---------------------------------------------------------------------------
# Path handling
# ---------------------------------------------------------------------------
[paths]
# How the crop step's result URI is split into directory + filename:
#   "direct"         - split at the last '/' as-is (most hosts)
#   "native-resolve" - resolve through the host first; for hosts whose crop
#                      step returns indirect content-style URIs (Android)
style = "direct"
"##
}

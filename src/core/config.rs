//! Threshold configuration
//!
//! Supports loading tunable thresholds from a TOML file.
//! Configuration is looked up in:
//! - ./key_color.toml (current directory)
//! - <config dir>/key_color/config.toml (platform config directory)
//!
//! Missing files fall back to the built-in defaults, which are calibrated
//! against the fixtures in [`crate::testdb::fixtures`].

use crate::core::error::{ConfigError, Result};
use crate::core::evaluator::LuminanceBand;
use crate::environment::AppearanceMode;
use log::{debug, info};
use serde::{Deserialize, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for config directory
const APP_NAME: &str = "key_color";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config file name checked in the current directory
const LOCAL_CONFIG_FILE_NAME: &str = "key_color.toml";

/// Highest contrast ratio WCAG can produce (white on black)
const MAX_CONTRAST_RATIO: f32 = 21.0;

/// Get the standard configuration directory for the library.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Get the standard configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Ensure the configuration directory exists.
///
/// Creates the directory and all parent directories if they don't exist.
pub fn ensure_config_dir() -> Result<PathBuf> {
    create_config_dir(get_config_dir())
}

fn create_config_dir(config_dir: Option<PathBuf>) -> Result<PathBuf> {
    let config_dir = config_dir.ok_or(ConfigError::ConfigDirNotFound)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::WriteError(config_dir.clone(), e.to_string()))?;
    }

    Ok(config_dir)
}

/// Shortest decimal form of an f32, so saved files read
/// `0.04` rather than the widened `0.03999999910593033`.
fn shortest(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}

fn serialize_f32<S: Serializer>(value: &f32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(shortest(*value))
}

fn serialize_opt_f32<S: Serializer>(
    value: &Option<f32>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_some(&shortest(*value)),
        None => serializer.serialize_none(),
    }
}

// =============================================================================
// Thresholds
// =============================================================================

/// One set of acceptance bounds.
///
/// A section in the config file must give all four fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Colors with lower relative luminance read as black
    #[serde(serialize_with = "serialize_f32")]
    pub min_luminance: f32,
    /// Colors with higher relative luminance read as white
    #[serde(serialize_with = "serialize_f32")]
    pub max_luminance: f32,
    /// Colors with lower HSL saturation read as gray
    #[serde(serialize_with = "serialize_f32")]
    pub min_saturation: f32,
    /// Minimum WCAG contrast against the appearance mode's surface
    #[serde(serialize_with = "serialize_f32")]
    pub min_surface_contrast: f32,
}

impl Thresholds {
    /// Bounds applied when no accessibility mode is active
    pub fn normal() -> Self {
        Self {
            min_luminance: 0.04,
            max_luminance: 0.80,
            min_saturation: 0.25,
            min_surface_contrast: 1.6,
        }
    }

    /// Tighter bounds applied under high contrast or glare
    pub fn high_contrast() -> Self {
        Self {
            min_luminance: 0.07,
            max_luminance: 0.60,
            min_saturation: 0.40,
            min_surface_contrast: 3.0,
        }
    }

    /// Whether every bound of `self` is at least as strict as `other`'s
    pub fn is_at_least_as_strict_as(&self, other: &Thresholds) -> bool {
        self.min_luminance >= other.min_luminance
            && self.max_luminance <= other.max_luminance
            && self.min_saturation >= other.min_saturation
            && self.min_surface_contrast >= other.min_surface_contrast
    }

    fn validate(&self, section: &str) -> Result<()> {
        check_unit(section, "min_luminance", self.min_luminance)?;
        check_unit(section, "max_luminance", self.max_luminance)?;
        check_unit(section, "min_saturation", self.min_saturation)?;

        if self.min_luminance <= 0.0 {
            return Err(ConfigError::invalid(
                format!("{}.min_luminance", section),
                "must be above 0.0 so that black is rejected",
            ));
        }

        if self.max_luminance >= 1.0 {
            return Err(ConfigError::invalid(
                format!("{}.max_luminance", section),
                "must be below 1.0 so that white is rejected",
            ));
        }

        if self.min_luminance >= self.max_luminance {
            return Err(ConfigError::invalid(
                format!("{}.min_luminance", section),
                format!(
                    "must be below max_luminance ({} >= {})",
                    self.min_luminance, self.max_luminance
                ),
            ));
        }

        let contrast = self.min_surface_contrast;
        if !contrast.is_finite() || !(1.0..=MAX_CONTRAST_RATIO).contains(&contrast) {
            return Err(ConfigError::invalid(
                format!("{}.min_surface_contrast", section),
                format!("must be within 1.0-{} (got {})", MAX_CONTRAST_RATIO, contrast),
            ));
        }

        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::normal()
    }
}

/// Threshold sets by accessibility state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Used when high contrast is off
    pub normal: Thresholds,
    /// Used when high contrast is on or the display is under glare
    pub high_contrast: Thresholds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            normal: Thresholds::normal(),
            high_contrast: Thresholds::high_contrast(),
        }
    }
}

// =============================================================================
// Surfaces & Ambient
// =============================================================================

/// Relative luminance of the surface behind controls per appearance mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    #[serde(serialize_with = "serialize_f32")]
    pub light_luminance: f32,
    #[serde(serialize_with = "serialize_f32")]
    pub dark_luminance: f32,
}

impl SurfaceConfig {
    /// Surface luminance for the given mode
    pub fn luminance(&self, appearance: AppearanceMode) -> f32 {
        match appearance {
            AppearanceMode::Light => self.light_luminance,
            AppearanceMode::Dark => self.dark_luminance,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            light_luminance: 1.0,
            dark_luminance: 0.0,
        }
    }
}

/// Ambient light handling
///
/// A present `[ambient]` section without `glare_brightness` disables glare
/// handling; an absent section keeps the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientConfig {
    /// Brightness at or above which the high contrast thresholds apply.
    /// `None` ignores ambient brightness entirely.
    #[serde(
        serialize_with = "serialize_opt_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub glare_brightness: Option<f32>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            glare_brightness: Some(0.9),
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Acceptance bounds
    pub thresholds: ThresholdConfig,

    /// Surface luminance per appearance mode
    pub surfaces: SurfaceConfig,

    /// Ambient light handling
    pub ambient: AmbientConfig,
}

impl Config {
    /// Check every value for range and consistency.
    ///
    /// On success the high contrast set accepts a subset of what the normal
    /// set accepts, in both appearance modes.
    pub fn validate(&self) -> Result<()> {
        let normal = &self.thresholds.normal;
        let high_contrast = &self.thresholds.high_contrast;

        normal.validate("thresholds.normal")?;
        high_contrast.validate("thresholds.high_contrast")?;

        if !high_contrast.is_at_least_as_strict_as(normal) {
            return Err(ConfigError::invalid(
                "thresholds.high_contrast",
                "every bound must be at least as strict as thresholds.normal",
            ));
        }

        check_unit("surfaces", "light_luminance", self.surfaces.light_luminance)?;
        check_unit("surfaces", "dark_luminance", self.surfaces.dark_luminance)?;

        if let Some(glare) = self.ambient.glare_brightness {
            check_unit("ambient", "glare_brightness", glare)?;
        }

        for (section, thresholds) in [
            ("thresholds.normal", normal),
            ("thresholds.high_contrast", high_contrast),
        ] {
            for appearance in [AppearanceMode::Light, AppearanceMode::Dark] {
                let band = LuminanceBand::for_mode(thresholds, &self.surfaces, appearance);
                if band.is_empty() {
                    return Err(ConfigError::invalid(
                        section,
                        format!("no luminance passes in {} mode ({})", appearance, band),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Load configuration from a TOML file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;

        config.validate()?;
        debug!("Loaded key color configuration from {}", path.display());

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./key_color.toml (current directory)
    /// 2. Standard config location (<config dir>/key_color/config.toml)
    ///
    /// If no config file is found, returns default configuration.
    pub fn load_default() -> Result<Self> {
        let local = PathBuf::from(".").join(LOCAL_CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load(&local);
        }

        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        info!("No key color configuration found, using built-in thresholds");
        Ok(Self::default())
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::WriteError(path.as_ref().to_path_buf(), e.to_string()))?;

        Ok(())
    }

    /// Save configuration to the standard location, creating the directory.
    ///
    /// Returns the path written.
    pub fn save_default(&self) -> Result<PathBuf> {
        self.save_in(get_config_dir())
    }

    fn save_in(&self, config_dir: Option<PathBuf>) -> Result<PathBuf> {
        let config_path = create_config_dir(config_dir)?.join(CONFIG_FILE_NAME);
        self.save(&config_path)?;
        info!("Saved key color configuration to {}", config_path.display());
        Ok(config_path)
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        include_str!("../../config.example.toml").to_string()
    }
}

fn check_unit(section: &str, field: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            format!("{}.{}", section, field),
            format!("must be within 0.0-1.0 (got {})", value),
        ))
    }
}

//! Key Color Library
//!
//! Decides whether a color is appropriate as the accent ("key" or tint) color
//! of an enabled interactive control, and picks the first appropriate color
//! from a prioritized list of candidates, such as colors derived from a
//! wallpaper or a device's hardware finish.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`color`] - Normalized RGBA color value, HSL view, WCAG luminance
//! - [`environment`] - Appearance mode and accessibility context snapshots
//! - [`core`] - Evaluator, selector, threshold configuration and errors
//! - [`testdb`] - Calibrated fixtures and a seeded generator for testing
//!
//! # Example Usage
//!
//! ```rust
//! use key_color::{AppearanceMode, Color, EnvironmentContext, KeyColorEvaluator};
//!
//! let evaluator = KeyColorEvaluator::new();
//!
//! // Capture the context right before deciding; never reuse an old verdict.
//! let context = EnvironmentContext::new(AppearanceMode::Light).with_high_contrast(false);
//!
//! let wallpaper = Color::from_hex("#F2F2F7").unwrap();
//! let hardware = Color::from_hex("#FF3B30").unwrap();
//!
//! assert!(!evaluator.is_appropriate(&wallpaper, &context));
//! assert_eq!(
//!     evaluator.first_appropriate(&[wallpaper, hardware], &context),
//!     Some(hardware)
//! );
//! ```
//!
//! # Custom Thresholds
//!
//! ```rust,no_run
//! use key_color::{Config, KeyColorEvaluator};
//!
//! fn main() -> Result<(), key_color::ConfigError> {
//!     let config = Config::load_default()?;
//!     let evaluator = KeyColorEvaluator::with_config(config)?;
//!     # let _ = evaluator;
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! Verdicts are reported through the `log` facade: rejections at `debug`,
//! acceptances at `trace`. Install any logger to see them.

pub mod color;
pub mod core;
pub mod environment;
pub mod testdb;

pub use crate::color::{Color, Hsl};
pub use crate::core::{
    Assessment, Config, ConfigError, KeyColorEvaluator, LuminanceBand, Rejection, Thresholds,
};
pub use crate::environment::{
    AppearanceMode, EnvironmentContext, EnvironmentProvider, StaticEnvironment,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Whether `color` is appropriate as a key color, using the built-in thresholds.
///
/// Results change with `context`; do not store them.
pub fn is_key_color_appropriate(color: &Color, context: &EnvironmentContext) -> bool {
    KeyColorEvaluator::new().is_appropriate(color, context)
}

/// First key color appropriate under `context`, using the built-in thresholds.
pub fn first_key_color(colors: &[Color], context: &EnvironmentContext) -> Option<Color> {
    KeyColorEvaluator::new().first_appropriate(colors, context)
}

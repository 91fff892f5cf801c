//! Core functionality module
//!
//! This module contains the key color decision logic and its configuration.
//!
//! # Submodules
//!
//! - `config` - Threshold configuration loading, saving, and validation
//! - `error` - Error types and result aliases
//! - `evaluator` - Single color appropriateness evaluation
//! - `selector` - First appropriate color selection over ordered candidates

pub mod config;
pub mod error;
pub mod evaluator;
pub mod selector;

pub use config::{AmbientConfig, Config, SurfaceConfig, ThresholdConfig, Thresholds};
pub use error::{ConfigError, Result};
pub use evaluator::{Assessment, KeyColorEvaluator, LuminanceBand, Rejection};

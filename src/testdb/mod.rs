//! Test Database Module
//!
//! Benchmark data for calibrating and checking the key color thresholds
//! without a host UI.
//!
//! # Features
//!
//! - **Fixtures**: Named colors with the verdict the default thresholds must
//!   produce in light/dark mode, with and without high contrast
//! - **Generator**: Seeded random colors (well-formed and malformed),
//!   contexts and candidate lists for property sweeps
//!
//! # Quick Start
//!
//! ```rust
//! use key_color::testdb::{fixture, ColorGenerator};
//! use key_color::{EnvironmentContext, KeyColorEvaluator};
//!
//! let evaluator = KeyColorEvaluator::new();
//! let yellow = fixture("system_yellow").unwrap();
//! assert_eq!(
//!     evaluator.is_appropriate(&yellow.color(), &EnvironmentContext::dark()),
//!     yellow.dark
//! );
//!
//! let mut generator = ColorGenerator::new(42);
//! let candidates = generator.candidates();
//! let _ = evaluator.first_appropriate(&candidates, &generator.context());
//! ```

pub mod fixtures;
pub mod generator;

#[cfg(test)]
mod properties;

pub use fixtures::{benchmark_contexts, fixture, ColorFixture, BENCHMARK_PALETTE};
pub use generator::{ColorGenerator, GeneratorConfig, DEFAULT_SEED};

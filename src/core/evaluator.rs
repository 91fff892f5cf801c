//! Key color appropriateness evaluation
//!
//! A color is appropriate as a key (tint) color when it is neither near black
//! nor near white, carries enough saturation to read as an intentional accent,
//! and stands out from the surface of the prevailing appearance mode.
//!
//! # Decision
//!
//! 1. Pick a threshold set: `high_contrast` when the context has high
//!    contrast enabled or reports ambient brightness at or above the glare
//!    level, `normal` otherwise.
//! 2. Derive the [`LuminanceBand`] for the appearance mode. In light mode the
//!    accent has to be darker than the surface, in dark mode lighter, by at
//!    least `min_surface_contrast`.
//! 3. Reject luminance outside the band, then saturation below the floor.
//!
//! Channels are clamped before any of this, so every `Color` gets a verdict.

use crate::color::Color;
use crate::core::config::{Config, SurfaceConfig, Thresholds};
use crate::core::error::Result;
use crate::environment::{AppearanceMode, EnvironmentContext};
use log::{debug, trace};
use std::fmt;

/// Slack allowed below the saturation floor. HSL saturation recomputed from
/// f32 channels can land a few ulps under the value a color was built with.
const SATURATION_TOLERANCE: f32 = 1e-4;

// =============================================================================
// Luminance Band
// =============================================================================

/// Accepted relative luminance interval (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceBand {
    pub min: f32,
    pub max: f32,
}

impl LuminanceBand {
    /// Band for one threshold set against one appearance mode's surface.
    pub fn for_mode(
        thresholds: &Thresholds,
        surfaces: &SurfaceConfig,
        appearance: AppearanceMode,
    ) -> Self {
        let surface = surfaces.luminance(appearance);
        let contrast = thresholds.min_surface_contrast;

        match appearance {
            AppearanceMode::Light => Self {
                min: thresholds.min_luminance,
                max: thresholds
                    .max_luminance
                    .min((surface + 0.05) / contrast - 0.05),
            },
            AppearanceMode::Dark => Self {
                min: thresholds
                    .min_luminance
                    .max(contrast * (surface + 0.05) - 0.05),
                max: thresholds.max_luminance,
            },
        }
    }

    pub fn contains(&self, luminance: f32) -> bool {
        luminance >= self.min && luminance <= self.max
    }

    pub fn is_empty(&self) -> bool {
        // NaN bounds count as empty
        !(self.min <= self.max)
    }
}

impl fmt::Display for LuminanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}-{:.3}", self.min, self.max)
    }
}

// =============================================================================
// Assessment
// =============================================================================

/// Why a color was turned down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// Luminance below the band
    TooDark { luminance: f32, min: f32 },
    /// Luminance above the band
    TooLight { luminance: f32, max: f32 },
    /// Saturation below the floor
    Desaturated { saturation: f32, min: f32 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooDark { luminance, min } => {
                write!(f, "luminance {:.3} below {:.3}", luminance, min)
            }
            Rejection::TooLight { luminance, max } => {
                write!(f, "luminance {:.3} above {:.3}", luminance, max)
            }
            Rejection::Desaturated { saturation, min } => {
                write!(f, "saturation {:.3} below {:.3}", saturation, min)
            }
        }
    }
}

/// Verdict with the reason for a rejection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Assessment {
    Appropriate,
    Rejected(Rejection),
}

impl Assessment {
    pub fn is_appropriate(&self) -> bool {
        matches!(self, Assessment::Appropriate)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Assessment::Appropriate => None,
            Assessment::Rejected(rejection) => Some(*rejection),
        }
    }
}

// =============================================================================
// Evaluator
// =============================================================================

/// Decides whether colors are appropriate as key colors.
///
/// Holds only a validated, immutable [`Config`]; share it freely across
/// threads. Verdicts depend on the context passed in, so they must not be
/// cached across context changes.
#[derive(Debug, Clone, Default)]
pub struct KeyColorEvaluator {
    config: Config,
}

impl KeyColorEvaluator {
    /// Evaluator with the built-in thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with custom thresholds, validated first
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the context calls for the high contrast threshold set
    pub fn is_tightened(&self, context: &EnvironmentContext) -> bool {
        context.high_contrast || self.is_under_glare(context)
    }

    fn is_under_glare(&self, context: &EnvironmentContext) -> bool {
        match (self.config.ambient.glare_brightness, context.normalized_brightness()) {
            (Some(glare), Some(brightness)) => brightness >= glare,
            _ => false,
        }
    }

    /// Threshold set in effect for the context
    pub fn thresholds_for(&self, context: &EnvironmentContext) -> &Thresholds {
        if self.is_tightened(context) {
            &self.config.thresholds.high_contrast
        } else {
            &self.config.thresholds.normal
        }
    }

    /// Luminance band in effect for the context
    pub fn luminance_band(&self, context: &EnvironmentContext) -> LuminanceBand {
        LuminanceBand::for_mode(
            self.thresholds_for(context),
            &self.config.surfaces,
            context.appearance,
        )
    }

    /// Evaluate a color and report why it failed, if it did.
    pub fn assess(&self, color: &Color, context: &EnvironmentContext) -> Assessment {
        let color = color.normalized();
        let thresholds = self.thresholds_for(context);
        let band = self.luminance_band(context);

        if context.reduced_transparency && color.a < 1.0 {
            trace!("Evaluating translucent {} as opaque", color);
        }

        let luminance = color.relative_luminance();
        let saturation = color.saturation();

        let assessment = if luminance < band.min {
            Assessment::Rejected(Rejection::TooDark {
                luminance,
                min: band.min,
            })
        } else if luminance > band.max {
            Assessment::Rejected(Rejection::TooLight {
                luminance,
                max: band.max,
            })
        } else if saturation + SATURATION_TOLERANCE < thresholds.min_saturation {
            Assessment::Rejected(Rejection::Desaturated {
                saturation,
                min: thresholds.min_saturation,
            })
        } else {
            Assessment::Appropriate
        };

        match assessment.rejection() {
            Some(rejection) => debug!("{} rejected ({}): {}", color, context, rejection),
            None => trace!("{} accepted ({})", color, context),
        }

        assessment
    }

    /// Whether the color is appropriate as a key color under the context.
    pub fn is_appropriate(&self, color: &Color, context: &EnvironmentContext) -> bool {
        self.assess(color, context).is_appropriate()
    }
}

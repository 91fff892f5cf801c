//! Ambient display and accessibility conditions
//!
//! The evaluator never looks at the host platform itself. Instead the caller
//! captures an [`EnvironmentContext`] snapshot (usually through an
//! [`EnvironmentProvider`] implemented by the UI layer) immediately before
//! asking for a verdict, and hands that snapshot in.
//!
//! # Architecture
//!
//! - `AppearanceMode` - Light or dark surfaces
//! - `EnvironmentContext` - Immutable per-call snapshot
//! - `EnvironmentProvider` - Host-side seam that produces snapshots
//! - `StaticEnvironment` - Fixed provider for tests and headless hosts
//!
//! # Example Usage
//!
//! ```rust
//! use key_color::environment::{AppearanceMode, EnvironmentContext, StaticEnvironment};
//!
//! let host = StaticEnvironment::new(AppearanceMode::Dark).with_high_contrast(true);
//! let context = EnvironmentContext::capture(&host);
//!
//! assert!(context.appearance.is_dark());
//! assert!(context.high_contrast);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Appearance Mode
// =============================================================================

/// Appearance mode - dark or light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light surfaces, dark content
    #[default]
    Light,
    /// Dark surfaces, light content
    Dark,
}

impl AppearanceMode {
    /// Toggle between dark and light mode
    pub fn toggle(&self) -> Self {
        match self {
            AppearanceMode::Dark => AppearanceMode::Light,
            AppearanceMode::Light => AppearanceMode::Dark,
        }
    }

    /// Check if this is dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, AppearanceMode::Dark)
    }

    /// Check if this is light mode
    pub fn is_light(&self) -> bool {
        matches!(self, AppearanceMode::Light)
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppearanceMode::Dark => write!(f, "Dark"),
            AppearanceMode::Light => write!(f, "Light"),
        }
    }
}

// =============================================================================
// Environment Context
// =============================================================================

/// Snapshot of the conditions a key color verdict depends on.
///
/// Every combination of fields is legal and is interpreted literally. A
/// verdict is only valid for the snapshot it was computed with; do not keep
/// verdicts around once the host reports a change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentContext {
    /// Prevailing appearance mode
    pub appearance: AppearanceMode,

    /// High contrast accessibility mode
    pub high_contrast: bool,

    /// Reduced transparency accessibility mode
    pub reduced_transparency: bool,

    /// Ambient display brightness (0.0-1.0), if the host reports one
    pub ambient_brightness: Option<f32>,
}

impl EnvironmentContext {
    /// Context for the given appearance with no accessibility modes enabled
    pub fn new(appearance: AppearanceMode) -> Self {
        Self {
            appearance,
            ..Default::default()
        }
    }

    /// Plain light-mode context
    pub fn light() -> Self {
        Self::new(AppearanceMode::Light)
    }

    /// Plain dark-mode context
    pub fn dark() -> Self {
        Self::new(AppearanceMode::Dark)
    }

    /// Set the high contrast flag
    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Set the reduced transparency flag
    pub fn with_reduced_transparency(mut self, enabled: bool) -> Self {
        self.reduced_transparency = enabled;
        self
    }

    /// Set the ambient brightness (clamped to 0.0-1.0, NaN is dropped)
    pub fn with_ambient_brightness(mut self, brightness: Option<f32>) -> Self {
        self.ambient_brightness = normalize_brightness(brightness);
        self
    }

    /// Read every field from the provider exactly once.
    pub fn capture<P: EnvironmentProvider + ?Sized>(provider: &P) -> Self {
        Self {
            appearance: provider.appearance_mode(),
            high_contrast: provider.is_high_contrast_enabled(),
            reduced_transparency: provider.is_reduced_transparency_enabled(),
            ambient_brightness: normalize_brightness(provider.ambient_brightness()),
        }
    }

    /// Ambient brightness clamped to 0.0-1.0
    pub fn normalized_brightness(&self) -> Option<f32> {
        normalize_brightness(self.ambient_brightness)
    }
}

impl fmt::Display for EnvironmentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.appearance)?;
        if self.high_contrast {
            write!(f, ", high contrast")?;
        }
        if self.reduced_transparency {
            write!(f, ", reduced transparency")?;
        }
        if let Some(brightness) = self.normalized_brightness() {
            write!(f, ", ambient {:.2}", brightness)?;
        }
        Ok(())
    }
}

fn normalize_brightness(brightness: Option<f32>) -> Option<f32> {
    brightness
        .filter(|b| !b.is_nan())
        .map(|b| b.clamp(0.0, 1.0))
}

// =============================================================================
// Environment Provider
// =============================================================================

/// Source of ambient conditions, implemented by the host UI layer.
///
/// The evaluator does not call this trait; use
/// [`EnvironmentContext::capture`] once per decision and pass the snapshot.
pub trait EnvironmentProvider {
    /// Current appearance mode
    fn appearance_mode(&self) -> AppearanceMode;

    /// Whether a high contrast accessibility mode is active
    fn is_high_contrast_enabled(&self) -> bool;

    /// Whether reduced transparency is active
    fn is_reduced_transparency_enabled(&self) -> bool {
        false
    }

    /// Ambient display brightness (0.0-1.0), if known
    fn ambient_brightness(&self) -> Option<f32> {
        None
    }
}

/// Provider that always reports the same conditions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticEnvironment {
    context: EnvironmentContext,
}

impl StaticEnvironment {
    /// Create a provider for the given appearance mode
    pub fn new(appearance: AppearanceMode) -> Self {
        Self {
            context: EnvironmentContext::new(appearance),
        }
    }

    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.context.high_contrast = enabled;
        self
    }

    pub fn with_reduced_transparency(mut self, enabled: bool) -> Self {
        self.context.reduced_transparency = enabled;
        self
    }

    pub fn with_ambient_brightness(mut self, brightness: f32) -> Self {
        self.context.ambient_brightness = Some(brightness);
        self
    }
}

impl From<EnvironmentContext> for StaticEnvironment {
    fn from(context: EnvironmentContext) -> Self {
        Self { context }
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn appearance_mode(&self) -> AppearanceMode {
        self.context.appearance
    }

    fn is_high_contrast_enabled(&self) -> bool {
        self.context.high_contrast
    }

    fn is_reduced_transparency_enabled(&self) -> bool {
        self.context.reduced_transparency
    }

    fn ambient_brightness(&self) -> Option<f32> {
        self.context.ambient_brightness
    }
}

// =============================================================================
// Tests
// =============================================================================

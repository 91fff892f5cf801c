//! Color value type
//!
//! This module provides the normalized color representation consumed by the
//! key color evaluator:
//! - RGBA color representation with channels in the range 0.0-1.0
//! - Hex, 8-bit and HSL constructors
//! - An HSL view (hue, saturation, lightness) derived on demand
//! - WCAG relative luminance and contrast ratio
//!
//! # Example
//!
//! ```rust
//! use key_color::Color;
//!
//! let blue = Color::from_hex("#007AFF").unwrap();
//! let semi_transparent = Color::from_rgba(255, 0, 0, 0.5);
//!
//! assert!(blue.relative_luminance() < 0.5);
//! assert_eq!(semi_transparent.a, 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Color
// =============================================================================

/// RGBA color representation
///
/// Colors are stored as floating-point values in the range 0.0-1.0.
/// All constructors clamp their inputs; values written directly into the
/// public fields are clamped again by [`Color::normalized`] before any
/// evaluation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0-1.0)
    pub r: f32,
    /// Green component (0.0-1.0)
    pub g: f32,
    /// Blue component (0.0-1.0)
    pub b: f32,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Color {
    /// Pure white
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Pure black
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create a new color from RGBA values (0.0-1.0)
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Create a color from RGB values (0-255) with full opacity
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from RGBA values (0-255 for RGB, 0.0-1.0 for alpha)
    pub fn from_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            a: unit(a),
            ..Self::from_rgb(r, g, b)
        }
    }

    /// Create a color from a hex string
    ///
    /// Supports the following formats:
    /// - `#RGB` (short form)
    /// - `#RGBA` (short form with alpha)
    /// - `#RRGGBB` (standard)
    /// - `#RRGGBBAA` (with alpha)
    ///
    /// The `#` prefix is optional. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::from_rgba(
                nibble(0)?,
                nibble(1)?,
                nibble(2)?,
                nibble(3)? as f32 / 255.0,
            )),
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_rgba(
                byte(0)?,
                byte(2)?,
                byte(4)?,
                byte(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    /// Create an opaque color from hue, saturation and lightness.
    ///
    /// Hue is a fraction of a full turn and wraps, so `1.25` is the same hue
    /// as `0.25`. Saturation and lightness are clamped to 0.0-1.0.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hue = if hue.is_finite() { hue.rem_euclid(1.0) } else { 0.0 };
        let s = unit(saturation);
        let l = unit(lightness);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = hue * 6.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::new(r + m, g + m, b + m, 1.0)
    }

    /// Return a copy with every channel clamped to 0.0-1.0.
    ///
    /// NaN channels become 0.0.
    pub fn normalized(&self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// Create a new color with a different alpha value
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: unit(alpha),
            ..*self
        }
    }

    /// Convert to hex string (#RRGGBB)
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to hex string with alpha (#RRGGBBAA)
    pub fn to_hex_alpha(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, to_byte(self.a))
    }

    /// Convert to RGB tuple (0-255)
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// HSL view of this color (alpha is ignored)
    pub fn to_hsl(&self) -> Hsl {
        let c = self.normalized();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta <= f32::EPSILON {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let sector = if max == c.r {
            ((c.g - c.b) / delta).rem_euclid(6.0)
        } else if max == c.g {
            (c.b - c.r) / delta + 2.0
        } else {
            (c.r - c.g) / delta + 4.0
        };

        Hsl {
            hue: sector / 6.0,
            saturation: unit(saturation),
            lightness,
        }
    }

    /// HSL saturation (0.0-1.0)
    pub fn saturation(&self) -> f32 {
        self.to_hsl().saturation
    }

    /// Calculate the relative luminance of this color
    ///
    /// Uses the relative luminance formula from WCAG 2.x on linearized sRGB
    /// channels. Alpha is ignored; the color is treated as fully opaque.
    pub fn relative_luminance(&self) -> f32 {
        let c = self.normalized();
        0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
    }

    /// Calculate contrast ratio with another color (WCAG 2.0)
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        contrast_between(self.relative_luminance(), other.relative_luminance())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a < 1.0 {
            write!(f, "{}", self.to_hex_alpha())
        } else {
            write!(f, "{}", self.to_hex())
        }
    }
}

// =============================================================================
// HSL
// =============================================================================

/// Hue, saturation and lightness, each normalized to 0.0-1.0
///
/// Hue is a fraction of a full turn (0.0 = red, 1/3 = green, 2/3 = blue).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::from_hsl(hsl.hue, hsl.saturation, hsl.lightness)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// WCAG contrast ratio between two relative luminances (1.0-21.0)
pub fn contrast_between(l1: f32, l2: f32) -> f32 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Clamp to 0.0-1.0, mapping NaN to 0.0
fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_byte(value: f32) -> u8 {
    (unit(value) * 255.0).round() as u8
}

/// sRGB transfer function inverse
fn linearize(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

// =============================================================================
// Tests
// =============================================================================

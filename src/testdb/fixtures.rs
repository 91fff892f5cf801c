//! Calibrated benchmark colors
//!
//! Each fixture records the verdict the default thresholds must produce in
//! light and dark mode, with and without high contrast. The palette covers
//! familiar platform accent colors plus deliberately bad candidates (grays,
//! near-black, near-white) so threshold changes show up as fixture failures.

use crate::color::Color;
use crate::environment::{AppearanceMode, EnvironmentContext};

/// A named color with its expected verdicts under the default thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFixture {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
    pub light: bool,
    pub dark: bool,
    pub light_high_contrast: bool,
    pub dark_high_contrast: bool,
}

impl ColorFixture {
    const fn new(
        name: &'static str,
        rgb: (u8, u8, u8),
        verdicts: [bool; 4],
    ) -> Self {
        Self {
            name,
            rgb,
            light: verdicts[0],
            dark: verdicts[1],
            light_high_contrast: verdicts[2],
            dark_high_contrast: verdicts[3],
        }
    }

    pub fn color(&self) -> Color {
        let (r, g, b) = self.rgb;
        Color::from_rgb(r, g, b)
    }

    /// Expected verdict for an appearance, with `tightened` meaning the
    /// high contrast thresholds are in effect.
    pub fn expected(&self, appearance: AppearanceMode, tightened: bool) -> bool {
        match (appearance, tightened) {
            (AppearanceMode::Light, false) => self.light,
            (AppearanceMode::Dark, false) => self.dark,
            (AppearanceMode::Light, true) => self.light_high_contrast,
            (AppearanceMode::Dark, true) => self.dark_high_contrast,
        }
    }

    /// Expected verdict under a context, ignoring ambient brightness
    pub fn expected_for(&self, context: &EnvironmentContext) -> bool {
        self.expected(context.appearance, context.high_contrast)
    }
}

const ALWAYS: [bool; 4] = [true, true, true, true];
const NEVER: [bool; 4] = [false, false, false, false];

/// Benchmark palette, verdicts ordered light, dark, light HC, dark HC
pub const BENCHMARK_PALETTE: &[ColorFixture] = &[
    ColorFixture::new("system_blue", (0, 122, 255), ALWAYS),
    ColorFixture::new("system_red", (255, 59, 48), ALWAYS),
    ColorFixture::new("system_purple", (175, 82, 222), ALWAYS),
    ColorFixture::new("pure_red", (255, 0, 0), ALWAYS),
    // Too light for a white surface once high contrast asks for 3:1
    ColorFixture::new("system_orange", (255, 149, 0), [true, true, false, true]),
    ColorFixture::new("system_green", (52, 199, 89), [true, true, false, true]),
    // Only readable against dark surfaces
    ColorFixture::new("system_yellow", (255, 204, 0), [false, true, false, false]),
    ColorFixture::new("pure_green", (0, 255, 0), [false, true, false, false]),
    // Dark enough that a black surface swallows it under high contrast
    ColorFixture::new("pure_blue", (0, 0, 255), [true, true, true, false]),
    // Passes the normal saturation floor, not the high contrast one
    ColorFixture::new("steel_teal", (80, 140, 160), [true, true, false, false]),
    ColorFixture::new("slate_gray", (112, 128, 144), NEVER),
    ColorFixture::new("mid_gray", (128, 128, 128), NEVER),
    ColorFixture::new("navy", (0, 0, 128), NEVER),
    ColorFixture::new("indigo", (75, 0, 130), NEVER),
    ColorFixture::new("blush_white", (255, 245, 245), NEVER),
    ColorFixture::new("black", (0, 0, 0), NEVER),
    ColorFixture::new("white", (255, 255, 255), NEVER),
];

/// Look up a fixture by name
pub fn fixture(name: &str) -> Option<&'static ColorFixture> {
    BENCHMARK_PALETTE.iter().find(|f| f.name == name)
}

/// The four contexts every fixture records a verdict for
pub fn benchmark_contexts() -> [EnvironmentContext; 4] {
    [
        EnvironmentContext::light(),
        EnvironmentContext::dark(),
        EnvironmentContext::light().with_high_contrast(true),
        EnvironmentContext::dark().with_high_contrast(true),
    ]
}

//! Property sweeps over generated colors and contexts

use super::fixtures::fixture;
use super::generator::ColorGenerator;
use crate::color::Color;
use crate::core::config::Config;
use crate::core::evaluator::KeyColorEvaluator;
use crate::environment::{AppearanceMode, EnvironmentContext};

const ITERATIONS: usize = 5_000;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hues() -> impl Iterator<Item = f32> {
    (0..24).map(|i| i as f32 / 24.0)
}

#[test]
fn test_every_color_gets_a_verdict() {
    init_logging();
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::default();

    for _ in 0..ITERATIONS {
        let raw = generator.raw_color();
        let context = generator.context();
        assert_eq!(
            evaluator.is_appropriate(&raw, &context),
            evaluator.is_appropriate(&raw.normalized(), &context),
            "{:?}",
            raw
        );
    }
}

#[test]
fn test_high_contrast_only_narrows() {
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::new(11);

    for _ in 0..ITERATIONS {
        let color = generator.color();
        let context = generator.context();
        let strict = context.with_high_contrast(true);
        let relaxed = context.with_high_contrast(false);

        if evaluator.is_appropriate(&color, &strict) {
            assert!(
                evaluator.is_appropriate(&color, &relaxed),
                "{} passes under {} but not {}",
                color,
                strict,
                relaxed
            );
        }
    }
}

#[test]
fn test_glare_only_narrows() {
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::new(12);

    for _ in 0..ITERATIONS {
        let color = generator.color();
        let context = generator.context();
        let bright = context.with_ambient_brightness(Some(1.0));
        let unknown = context.with_ambient_brightness(None);

        if evaluator.is_appropriate(&color, &bright) {
            assert!(evaluator.is_appropriate(&color, &unknown));
        }
    }
}

#[test]
fn test_high_contrast_narrows_under_custom_config() {
    let mut config = Config::default();
    config.surfaces.light_luminance = 0.9;
    config.surfaces.dark_luminance = 0.02;
    config.thresholds.normal.min_saturation = 0.1;
    let evaluator = KeyColorEvaluator::with_config(config).unwrap();
    let mut generator = ColorGenerator::new(13);

    for _ in 0..ITERATIONS {
        let color = generator.color();
        let context = generator.context();
        if evaluator.is_appropriate(&color, &context.with_high_contrast(true)) {
            assert!(evaluator.is_appropriate(&color, &context.with_high_contrast(false)));
        }
    }
}

#[test]
fn test_below_saturation_floor_is_never_appropriate() {
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::new(21);

    for context in [
        EnvironmentContext::light(),
        EnvironmentContext::dark(),
        EnvironmentContext::light().with_high_contrast(true),
        EnvironmentContext::dark().with_high_contrast(true),
    ] {
        let floor = evaluator.thresholds_for(&context).min_saturation;
        for _ in 0..ITERATIONS / 4 {
            let color = generator.color_with_saturation(floor - 0.01);
            assert!(!evaluator.is_appropriate(&color, &context), "{}", color);
        }
    }
}

#[test]
fn test_in_band_colors_at_saturation_floor_pass() {
    let evaluator = KeyColorEvaluator::new();

    for context in [
        EnvironmentContext::light(),
        EnvironmentContext::dark(),
        EnvironmentContext::light().with_high_contrast(true),
        EnvironmentContext::dark().with_high_contrast(true),
    ] {
        let floor = evaluator.thresholds_for(&context).min_saturation;
        let band = evaluator.luminance_band(&context);
        let mut checked = 0;

        for degrees in 0..360 {
            for percent in 1..100 {
                let color = Color::from_hsl(degrees as f32 / 360.0, floor, percent as f32 / 100.0);
                if !band.contains(color.relative_luminance()) {
                    continue;
                }
                assert!(
                    evaluator.is_appropriate(&color, &context),
                    "{} (saturation {}) under {}",
                    color,
                    color.saturation(),
                    context
                );
                checked += 1;
            }
        }
        assert!(checked > 0, "{}", context);
    }
}

#[test]
fn test_dropping_saturation_below_floor_flips_verdict() {
    let evaluator = KeyColorEvaluator::new();
    let context = EnvironmentContext::dark();
    let floor = evaluator.thresholds_for(&context).min_saturation;

    let mut flipped = 0;
    for hue in hues() {
        for step in 1..20 {
            let lightness = step as f32 / 20.0;
            let vivid = Color::from_hsl(hue, 1.0, lightness);
            let dull = Color::from_hsl(hue, floor - 0.01, lightness);

            if evaluator.is_appropriate(&vivid, &context) {
                assert!(!evaluator.is_appropriate(&dull, &context), "{}", vivid);
                flipped += 1;
            }
        }
    }
    assert!(flipped > 0);
}

#[test]
fn test_black_and_white_rejected_for_generated_contexts() {
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::new(31);

    for _ in 0..ITERATIONS {
        let context = generator.context();
        assert!(!evaluator.is_appropriate(&Color::BLACK, &context));
        assert!(!evaluator.is_appropriate(&Color::WHITE, &context));
    }
}

#[test]
fn test_selector_matches_order_preserving_filter() {
    let evaluator = KeyColorEvaluator::new();
    let mut generator = ColorGenerator::new(41);

    for _ in 0..ITERATIONS {
        let candidates = generator.candidates();
        let context = generator.context();

        let expected = candidates
            .iter()
            .copied()
            .find(|color| evaluator.is_appropriate(color, &context));

        assert_eq!(evaluator.first_appropriate(&candidates, &context), expected);
        assert_eq!(
            evaluator.appropriate_colors(&candidates, &context).next(),
            expected
        );
        assert_eq!(
            evaluator
                .first_appropriate_index(&candidates, &context)
                .map(|i| candidates[i]),
            expected
        );
    }
}

#[test]
fn test_selector_skips_failing_head() {
    let evaluator = KeyColorEvaluator::new();
    let context = EnvironmentContext::light();
    let gray = fixture("mid_gray").map(|f| f.color()).unwrap();
    let red = fixture("system_red").map(|f| f.color()).unwrap();
    let blue = fixture("system_blue").map(|f| f.color()).unwrap();

    assert!(!evaluator.is_appropriate(&gray, &context));
    assert!(evaluator.is_appropriate(&red, &context));
    assert!(evaluator.is_appropriate(&blue, &context));
    assert_eq!(
        evaluator.first_appropriate(&[gray, red, blue], &context),
        Some(red)
    );
}

/// Tints a fully saturated hue toward white. Saturation stays at 1.0 and
/// luminance rises monotonically, so only the band's upper edge matters.
#[test]
fn test_upper_band_edge_has_no_hue_exceptions() {
    let evaluator = KeyColorEvaluator::new();

    for appearance in [AppearanceMode::Light, AppearanceMode::Dark] {
        for high_contrast in [false, true] {
            let context = EnvironmentContext::new(appearance).with_high_contrast(high_contrast);
            let band = evaluator.luminance_band(&context);

            for hue in hues() {
                let base = Color::from_hsl(hue, 1.0, 0.5);
                for step in 0..512 {
                    let t = step as f32 / 512.0;
                    let tint = Color::new(
                        base.r + (1.0 - base.r) * t,
                        base.g + (1.0 - base.g) * t,
                        base.b + (1.0 - base.b) * t,
                        1.0,
                    );
                    let luminance = tint.relative_luminance();
                    if luminance < band.min {
                        continue;
                    }
                    assert_eq!(
                        evaluator.is_appropriate(&tint, &context),
                        luminance <= band.max,
                        "{} (luminance {}) under {}, band {}",
                        tint,
                        luminance,
                        context,
                        band
                    );
                }
            }
        }
    }
}

/// Shades a fully saturated hue toward black; only the lower edge matters.
#[test]
fn test_lower_band_edge_has_no_hue_exceptions() {
    let evaluator = KeyColorEvaluator::new();

    for appearance in [AppearanceMode::Light, AppearanceMode::Dark] {
        for high_contrast in [false, true] {
            let context = EnvironmentContext::new(appearance).with_high_contrast(high_contrast);
            let band = evaluator.luminance_band(&context);

            for hue in hues() {
                let base = Color::from_hsl(hue, 1.0, 0.5);
                for step in 0..511 {
                    let k = 1.0 - step as f32 / 512.0;
                    let shade = Color::new(base.r * k, base.g * k, base.b * k, 1.0);
                    let luminance = shade.relative_luminance();
                    if luminance > band.max {
                        continue;
                    }
                    assert_eq!(
                        evaluator.is_appropriate(&shade, &context),
                        luminance >= band.min,
                        "{} (luminance {}) under {}, band {}",
                        shade,
                        luminance,
                        context,
                        band
                    );
                }
            }
        }
    }
}

#[test]
fn test_band_edges_are_sharp() {
    let evaluator = KeyColorEvaluator::new();
    let context = EnvironmentContext::dark();
    let band = evaluator.luminance_band(&context);

    // Pure red scaled until its luminance sits just either side of the floor.
    let red_at = |luminance: f32| {
        let linear = luminance / 0.2126;
        let encoded = if linear <= 0.0031308 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        };
        Color::new(encoded, 0.0, 0.0, 1.0)
    };

    assert!(evaluator.is_appropriate(&red_at(band.min + 0.002), &context));
    assert!(!evaluator.is_appropriate(&red_at(band.min - 0.002), &context));
}

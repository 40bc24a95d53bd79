//! Cross-module regression tests for chroma-model.
//!
//! Each test documents the class of bug it guards against.

use crate::color::{Hsl, Rgb};
use crate::palette::TintShade;

/// Channel values sampled by the grid tests; covers both ends of the range.
fn channel_samples(step: usize) -> impl Iterator<Item = u8> + Clone {
    (0..=255u8).step_by(step).chain(std::iter::once(255))
}

fn rgb_grid(step: usize) -> impl Iterator<Item = Rgb> {
    channel_samples(step).flat_map(move |r| {
        channel_samples(step).flat_map(move |g| channel_samples(step).map(move |b| Rgb::new(r, g, b)))
    })
}

// ========================================================================
// Hex <-> RGB is lossless
// ========================================================================

/// If this breaks, it means: hex formatting dropped zero padding or changed
/// case, or hex parsing mis-assigned a channel.
#[test]
fn test_hex_round_trip_grid() {
    for rgb in rgb_grid(5) {
        let hex = rgb.to_hex(true);
        assert_eq!(hex.len(), 7, "hex {hex} is not #rrggbb");
        assert_eq!(hex, hex.to_lowercase());

        let back = Rgb::from_hex(&hex).unwrap();
        assert_eq!(back, rgb, "round trip through {hex} changed the color");
        assert_eq!(back.to_hex(true), hex);
    }
}

// ========================================================================
// RGB -> HSL -> RGB stays close
// ========================================================================

/// If this breaks, it means: a hue sector, the saturation branch at
/// lightness 0.5, or the k(n) evaluation order changed.
///
/// Rounding hue to a degree and saturation/lightness to a percent, then
/// flooring on the way back, bounds the per-channel drift at 6.
#[test]
fn test_hsl_round_trip_stays_within_rounding_bound() {
    for rgb in rgb_grid(15) {
        let back = Hsl::from_rgb(rgb).to_rgb();
        for (a, b) in rgb.to_bytes().into_iter().zip(back.to_bytes()) {
            let error = (i32::from(a) - i32::from(b)).abs();
            assert!(
                error <= 6,
                "REGRESSION: {rgb:?} -> {:?} -> {back:?} drifted by {error}",
                Hsl::from_rgb(rgb)
            );
        }
    }
}

/// If this breaks, it means: primaries and secondaries no longer survive
/// the round trip exactly, which points at a sector boundary error.
#[test]
fn test_hsl_round_trip_exact_for_pure_hues() {
    let pure = [
        Rgb::new(255, 0, 0),
        Rgb::new(255, 255, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 255, 255),
        Rgb::new(0, 0, 255),
        Rgb::new(255, 0, 255),
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
    ];
    for rgb in pure {
        assert_eq!(Hsl::from_rgb(rgb).to_rgb(), rgb);
    }
}

/// If this breaks, it means: greys picked up a hue or saturation, so an
/// achromatic check compares the wrong values.
#[test]
fn test_grays_are_achromatic() {
    for v in channel_samples(1) {
        let hsl = Hsl::from_rgb(Rgb::new(v, v, v));
        assert_eq!(hsl.saturation, 0, "gray {v} got saturation");
        assert_eq!(hsl.hue, 0, "gray {v} got a hue");
    }
}

/// If this breaks, it means: tied maximum channels no longer land on the
/// sector boundary they share.
#[test]
fn test_tied_maximum_channels() {
    assert_eq!(Hsl::from_rgb(Rgb::new(200, 200, 50)).hue, 60);
    assert_eq!(Hsl::from_rgb(Rgb::new(50, 200, 200)).hue, 180);
    assert_eq!(Hsl::from_rgb(Rgb::new(200, 50, 200)).hue, 300);
}

// ========================================================================
// CSS strings
// ========================================================================

/// If this breaks, it means: `Display` output can no longer be fed back into
/// the parser, usually because a token split changed.
#[test]
fn test_css_display_parses_back() {
    for rgb in rgb_grid(17) {
        let text = rgb.to_string();
        assert_eq!(text.parse::<Rgb>().unwrap(), rgb, "failed on {text}");
    }

    for hue in (0..=360u16).step_by(7).chain([360]) {
        for saturation in (0..=100u8).step_by(9).chain([100]) {
            for lightness in (0..=100u8).step_by(11).chain([100]) {
                let hsl = Hsl::new(hue, saturation, lightness);
                let text = hsl.to_string();
                assert_eq!(text.parse::<Hsl>().unwrap(), hsl, "failed on {text}");
            }
        }
    }
}

/// The legacy `rgb(R,G%,B%)` form is output-only: `%` is not an rgb()
/// separator, so the parser rejects it.
#[test]
fn test_legacy_rgb_string_is_not_parseable() {
    let legacy = Rgb::new(1, 2, 3).to_legacy_string();
    assert!(legacy.parse::<Rgb>().is_err());
}

// ========================================================================
// Palettes
// ========================================================================

/// If this breaks, it means: tints or shades stopped moving monotonically,
/// or a shade wrapped around instead of stopping at black.
#[test]
fn test_palette_is_monotonic() {
    for base in rgb_grid(51) {
        let palette = TintShade::new(base).generate();
        assert_eq!(palette.tints.len(), 5);
        assert_eq!(palette.shades.len(), 5);

        let mut previous = base;
        for &tint in &palette.tints {
            assert!(tint.red >= previous.red && tint.green >= previous.green && tint.blue >= previous.blue);
            previous = tint;
        }
        assert_eq!(previous, Rgb::new(255, 255, 255), "last tint of {base:?} is not white");

        let mut previous = base;
        for &shade in &palette.shades {
            assert!(shade.red <= previous.red && shade.green <= previous.green && shade.blue <= previous.blue);
            previous = shade;
        }
    }
}

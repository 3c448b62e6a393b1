//! Strong-color palette used by restricted-random and chase-style modes.

use crate::color::Rgb;
use crate::rng::SplitMix64;

/// The fixed 8-entry strong-color palette
pub const STRONG_COLORS: [Rgb; 8] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 255, g: 0, b: 255 },
    Rgb { r: 0, g: 255, b: 255 },
    Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
    Rgb {
        r: 255,
        g: 128,
        b: 0,
    },
];

/// Pick a uniformly random palette entry
pub fn strong_color(rng: &mut SplitMix64) -> Rgb {
    STRONG_COLORS[rng.next_below(STRONG_COLORS.len())]
}

/// Pick a random color
///
/// When `restrict` is set the choice is uniform over the strong-color
/// palette, otherwise each channel is uniform in 0-255.
pub fn random_color(rng: &mut SplitMix64, restrict: bool) -> Rgb {
    if restrict {
        return strong_color(rng);
    }
    Rgb {
        r: rng.next_u8(),
        g: rng.next_u8(),
        b: rng.next_u8(),
    }
}

/// Advance a color to the next strong-palette entry (wrapping)
///
/// A color outside the palette maps to the first entry.
pub fn cycle_color(color: Rgb) -> Rgb {
    let Some(position) = STRONG_COLORS.iter().position(|&c| c == color) else {
        return STRONG_COLORS[0];
    };
    STRONG_COLORS[(position + 1) % STRONG_COLORS.len()]
}

//! Solid color and repeating pattern fills

use heapless::Vec;

use super::{EffectContext, SectionEffect};
use crate::color::{Rgb, cycle_color};

/// Maximum number of colors in a solid pattern
pub const MAX_PATTERN_COLORS: usize = 8;

const DEFAULT_SOLID_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Fills the whole section with one bound color
#[derive(Debug, Clone)]
pub struct SolidColorEffect {
    pub color: Rgb,
}

impl Default for SolidColorEffect {
    fn default() -> Self {
        Self {
            color: DEFAULT_SOLID_COLOR,
        }
    }
}

impl SolidColorEffect {
    /// Advance the bound color to the next strong-palette entry
    pub fn cycle(&mut self) {
        self.color = cycle_color(self.color);
    }
}

impl SectionEffect for SolidColorEffect {
    fn render(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        for led in leds {
            *led = self.color;
        }
    }
}

/// Repeats a color sequence cyclically across the section
#[derive(Debug, Clone)]
pub struct SolidPatternEffect {
    pub pattern: Vec<Rgb, MAX_PATTERN_COLORS>,
}

impl Default for SolidPatternEffect {
    fn default() -> Self {
        let mut pattern = Vec::new();
        for color in [RED, RED, GREEN, GREEN] {
            let _ = pattern.push(color);
        }
        Self { pattern }
    }
}

impl SolidPatternEffect {
    /// Advance every pattern entry to its next strong-palette color
    pub fn cycle(&mut self) {
        for color in &mut self.pattern {
            *color = cycle_color(*color);
        }
    }
}

impl SectionEffect for SolidPatternEffect {
    fn render(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        if self.pattern.is_empty() {
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            *led = self.pattern[i % self.pattern.len()];
        }
    }
}

//! Chase effects
//!
//! Both chase variants share one state value: the multi-color chase
//! walks the whole strong palette along the section, the single-color
//! variant moves one pixel and advances the palette on each wrap.

use super::{EffectContext, SectionEffect};
use crate::color::{BLACK, Rgb, STRONG_COLORS};

#[derive(Debug, Clone, Default)]
pub struct ChaseEffect {
    index: usize,
    color_index: usize,
}

impl ChaseEffect {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn color_index(&self) -> usize {
        self.color_index
    }

    /// Single lit pixel advancing through the section
    ///
    /// On each wrap back to index 0 the palette color advances.
    pub fn render_single_color(&mut self, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        leds.fill(BLACK);
        leds[self.index % len] = STRONG_COLORS[self.color_index % STRONG_COLORS.len()];

        self.index = (self.index + 1) % len;
        if self.index == 0 {
            self.color_index = (self.color_index + 1) % STRONG_COLORS.len();
        }
    }
}

impl SectionEffect for ChaseEffect {
    fn render(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        leds.fill(BLACK);
        for (i, color) in STRONG_COLORS.iter().enumerate() {
            leds[(self.index + i) % len] = *color;
        }
        self.index = (self.index + 1) % len;
    }
}

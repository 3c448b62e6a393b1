//! Rainbow cycling effect
//!
//! Walks the hue wheel across the section and shifts it by one position
//! per frame.

use super::{EffectContext, SectionEffect};
use crate::color::{Rgb, wheel};

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Wheel offset, advanced modulo 256 each frame
    step: u8,
}

impl RainbowEffect {
    pub const fn step(&self) -> u8 {
        self.step
    }
}

impl SectionEffect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            let pos = (i * 256 / len + self.step as usize) & 255;
            *led = wheel(pos as u8);
        }
        self.step = self.step.wrapping_add(1);
    }
}

//! Random recoloring effects

use super::{EffectContext, SectionEffect};
use crate::color::Rgb;

/// Recolors the whole section on a fixed frame interval
///
/// Always draws from the strong palette, independent of the
/// restricted-random setting.
#[derive(Debug, Clone)]
pub struct RandomAllEffect {
    timer: u32,
    interval: u32,
}

impl RandomAllEffect {
    /// `interval` is the number of frames between recolors
    pub const fn new(interval: u32) -> Self {
        Self {
            timer: 0,
            interval: if interval == 0 { 1 } else { interval },
        }
    }
}

impl SectionEffect for RandomAllEffect {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        self.timer += 1;
        if self.timer < self.interval {
            return;
        }
        self.timer = 0;

        for led in leds {
            *led = ctx.strong_color();
        }
    }
}

/// Recolors exactly one random pixel per frame
///
/// Previously recolored pixels keep their color; over time the section
/// fills with random colors.
#[derive(Debug, Clone, Default)]
pub struct RandomOneEffect {
    /// Pixel chosen on the most recent frame
    pub last_index: Option<usize>,
}

impl SectionEffect for RandomOneEffect {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let index = ctx.next_below(leds.len());
        leds[index] = ctx.random_color();
        self.last_index = Some(index);
    }
}

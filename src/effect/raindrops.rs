//! Decaying-twinkle effect bound to the raindrops mode
//!
//! One random pixel gets a fresh color each frame; every stored color
//! then decays toward black. The pre-decay value is what reaches the
//! frame buffer, so a fresh drop shows at full strength.

use super::{EffectContext, SectionEffect};
use crate::color::{BLACK, Rgb};

const DECAY_PER_FRAME: u8 = 10;

#[derive(Debug, Clone)]
pub struct RaindropsEffect<const CAP: usize> {
    lights: [Rgb; CAP],
}

impl<const CAP: usize> Default for RaindropsEffect<CAP> {
    fn default() -> Self {
        Self {
            lights: [BLACK; CAP],
        }
    }
}

impl<const CAP: usize> SectionEffect for RaindropsEffect<CAP> {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len().min(CAP);
        if len == 0 {
            return;
        }

        let index = ctx.next_below(len);
        self.lights[index] = ctx.random_color();

        for i in 0..len {
            leds[i] = self.lights[i];
            let light = &mut self.lights[i];
            light.r = light.r.saturating_sub(DECAY_PER_FRAME);
            light.g = light.g.saturating_sub(DECAY_PER_FRAME);
            light.b = light.b.saturating_sub(DECAY_PER_FRAME);
        }
    }
}

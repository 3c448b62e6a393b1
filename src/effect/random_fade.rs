//! Random-fade effect bound to the twinkle mode
//!
//! Every pixel drifts toward an individually assigned target color over
//! a fixed number of frames. A few pixels get fresh targets each frame,
//! so the section is always in slow motion.

use super::{EffectContext, SectionEffect};
use crate::color::{BLACK, Rgb, strong_color};
use crate::rng::SplitMix64;

/// Frames a pixel takes to reach a new target
const FADE_STEPS: u8 = 20;
/// Pixels considered for a new target each frame
const RETARGETS_PER_FRAME: usize = 3;

#[derive(Debug, Clone)]
pub struct RandomFadeEffect<const CAP: usize> {
    targets: [Rgb; CAP],
    steps: [u8; CAP],
}

impl<const CAP: usize> RandomFadeEffect<CAP> {
    /// Seed targets with strong-palette colors for `len` pixels
    pub fn new(len: usize, rng: &mut SplitMix64) -> Self {
        let mut targets = [BLACK; CAP];
        for target in targets.iter_mut().take(len.min(CAP)) {
            *target = strong_color(rng);
        }
        Self {
            targets,
            steps: [0; CAP],
        }
    }

    pub fn target(&self, index: usize) -> Option<Rgb> {
        self.targets.get(index).copied()
    }
}

/// One interpolation step toward the target
///
/// `num / den` is how far along the fade the pixel is. The result is
/// floored, which keeps every channel inside `[min(c, t), max(c, t)]`.
fn fade_channel(current: u8, target: u8, num: i32, den: i32) -> u8 {
    let c = i32::from(current);
    let t = i32::from(target);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        ((c * den + (t - c) * num).div_euclid(den)) as u8
    }
}

impl<const CAP: usize> SectionEffect for RandomFadeEffect<CAP> {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len().min(CAP);
        if len == 0 {
            return;
        }

        // A fully black section gets a random seed so the fade has
        // something to start from.
        if leds[..len].iter().all(|led| *led == BLACK) {
            for led in leds[..len].iter_mut() {
                *led = ctx.random_color();
            }
        }

        // Hand out fresh targets to idle pixels.
        for _ in 0..RETARGETS_PER_FRAME {
            let index = ctx.next_below(len);
            if self.steps[index] == 0 {
                self.targets[index] = ctx.random_color();
                self.steps[index] = FADE_STEPS;
            }
        }

        for i in 0..len {
            if self.steps[i] > 0 {
                let progress = i32::from(FADE_STEPS - self.steps[i]);
                let current = leds[i];
                let target = self.targets[i];
                leds[i] = Rgb {
                    r: fade_channel(current.r, target.r, progress, i32::from(FADE_STEPS)),
                    g: fade_channel(current.g, target.g, progress, i32::from(FADE_STEPS)),
                    b: fade_channel(current.b, target.b, progress, i32::from(FADE_STEPS)),
                };
                self.steps[i] -= 1;
            } else {
                leds[i] = self.targets[i];
            }
        }
    }
}

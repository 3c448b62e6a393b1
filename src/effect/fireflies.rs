//! Fireflies effect
//!
//! Individual pixels light up, fade in to full brightness, fade back
//! out and disappear. At most three fireflies are alive at once.

use heapless::Vec;

use super::{EffectContext, SectionEffect};
use crate::color::{BLACK, Rgb, scale_channels};

const MAX_ACTIVE_FIREFLIES: usize = 3;
const SPAWN_CHANCE_NUM: u32 = 1;
const SPAWN_CHANCE_DEN: u32 = 10;
const FADE_IN_STEP: u8 = 50;
const FADE_OUT_STEP: u8 = 30;

/// Lifecycle stage of a single firefly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireflyPhase {
    Off,
    FadeIn,
    FadeOut,
}

#[derive(Debug, Clone, Copy)]
pub struct Firefly {
    pub color: Rgb,
    pub phase: FireflyPhase,
    pub brightness: u8,
}

impl Firefly {
    const OFF: Self = Self {
        color: BLACK,
        phase: FireflyPhase::Off,
        brightness: 0,
    };
}

#[derive(Debug, Clone)]
pub struct FirefliesEffect<const CAP: usize> {
    lights: [Firefly; CAP],
    active: Vec<usize, MAX_ACTIVE_FIREFLIES>,
}

impl<const CAP: usize> Default for FirefliesEffect<CAP> {
    fn default() -> Self {
        Self {
            lights: [Firefly::OFF; CAP],
            active: Vec::new(),
        }
    }
}

impl<const CAP: usize> FirefliesEffect<CAP> {
    /// Indices of currently alive fireflies
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// State of the firefly at a section-relative pixel index
    pub fn light(&self, index: usize) -> Option<&Firefly> {
        self.lights.get(index)
    }
}

impl<const CAP: usize> SectionEffect for FirefliesEffect<CAP> {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len().min(CAP);
        if len == 0 {
            return;
        }

        // Advance every alive firefly; a firefly that just reached zero
        // still writes its (black) pixel this frame before removal.
        let mut i = 0;
        while i < self.active.len() {
            let index = self.active[i];
            let firefly = &mut self.lights[index];
            match firefly.phase {
                FireflyPhase::FadeIn => {
                    firefly.brightness = firefly.brightness.saturating_add(FADE_IN_STEP);
                    if firefly.brightness == 255 {
                        firefly.phase = FireflyPhase::FadeOut;
                    }
                }
                FireflyPhase::FadeOut => {
                    firefly.brightness = firefly.brightness.saturating_sub(FADE_OUT_STEP);
                    if firefly.brightness == 0 {
                        firefly.phase = FireflyPhase::Off;
                    }
                }
                FireflyPhase::Off => {}
            }

            if let Some(led) = leds.get_mut(index) {
                *led = scale_channels(firefly.color, firefly.brightness);
            }

            if firefly.phase == FireflyPhase::Off {
                self.active.remove(i);
            } else {
                i += 1;
            }
        }

        // Spawn a new firefly onto a currently-off pixel.
        if self.active.len() < MAX_ACTIVE_FIREFLIES
            && ctx.chance(SPAWN_CHANCE_NUM, SPAWN_CHANCE_DEN)
        {
            let index = ctx.next_below(len);
            if self.lights[index].phase == FireflyPhase::Off {
                self.lights[index] = Firefly {
                    color: ctx.random_color(),
                    phase: FireflyPhase::FadeIn,
                    brightness: 0,
                };
                let _ = self.active.push(index);
            }
        }
    }
}

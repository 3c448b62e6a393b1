//! Effect system with compile-time known per-mode state
//!
//! Every section carries a [`ModeState`] holding one state value per
//! animation mode. All variants are allocated up front, so switching
//! modes never discards the state a mode accumulated earlier.

mod chase;
mod drop_stack;
mod fireflies;
mod raindrops;
mod rainbow;
mod random;
mod random_fade;
mod solid;

pub use chase::ChaseEffect;
pub use drop_stack::DropStackEffect;
pub use fireflies::{Firefly, FirefliesEffect, FireflyPhase};
pub use raindrops::RaindropsEffect;
pub use rainbow::RainbowEffect;
pub use random::{RandomAllEffect, RandomOneEffect};
pub use random_fade::RandomFadeEffect;
pub use solid::{MAX_PATTERN_COLORS, SolidColorEffect, SolidPatternEffect};

use crate::color::{Rgb, random_color, strong_color};
use crate::mode::Mode;
use crate::rng::SplitMix64;

/// Randomness source handed to effects for one frame
///
/// Wraps the engine RNG together with the restricted-palette policy so
/// effects do not need to know about the configuration.
pub struct EffectContext<'a> {
    rng: &'a mut SplitMix64,
    restrict_random: bool,
}

impl<'a> EffectContext<'a> {
    pub fn new(rng: &'a mut SplitMix64, restrict_random: bool) -> Self {
        Self {
            rng,
            restrict_random,
        }
    }

    /// Random color honoring the restricted-palette setting
    pub fn random_color(&mut self) -> Rgb {
        random_color(self.rng, self.restrict_random)
    }

    /// Random strong-palette color, regardless of the restriction setting
    pub fn strong_color(&mut self) -> Rgb {
        strong_color(self.rng)
    }

    /// Uniform index in `0..bound`
    pub fn next_below(&mut self, bound: usize) -> usize {
        self.rng.next_below(bound)
    }

    /// Bernoulli trial with probability `num / den`
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        self.rng.chance(num, den)
    }
}

/// A frame-generation algorithm bound to a section
///
/// `render` advances the effect by exactly one frame and writes only
/// into the section's slice of the frame buffer. The slice persists
/// between frames; effects that rely on previous output read it back.
pub trait SectionEffect {
    fn render(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]);
}

/// Per-mode animation state for one section
///
/// `CAP` is the maximum number of LEDs a section may span; per-pixel
/// state is stored in fixed arrays of that size.
#[derive(Debug, Clone)]
pub struct ModeState<const CAP: usize> {
    pub random_one: RandomOneEffect,
    pub raindrops: RaindropsEffect<CAP>,
    pub fireflies: FirefliesEffect<CAP>,
    pub chase: ChaseEffect,
    pub rainbow: RainbowEffect,
    pub random_fade: RandomFadeEffect<CAP>,
    pub drop_stack: DropStackEffect,
    pub random_all: RandomAllEffect,
    pub solid_color: SolidColorEffect,
    pub solid_pattern: SolidPatternEffect,
}

impl<const CAP: usize> ModeState<CAP> {
    /// Allocate the full state bag for a section of `len` LEDs
    ///
    /// `recolor_interval` is the frame count between recolors of the
    /// random-all mode; `drop_colors` is the two-color stacking palette.
    pub fn new(
        len: usize,
        recolor_interval: u32,
        drop_colors: [Rgb; 2],
        rng: &mut SplitMix64,
    ) -> Self {
        Self {
            random_one: RandomOneEffect::default(),
            raindrops: RaindropsEffect::default(),
            fireflies: FirefliesEffect::default(),
            chase: ChaseEffect::default(),
            rainbow: RainbowEffect::default(),
            random_fade: RandomFadeEffect::new(len, rng),
            drop_stack: DropStackEffect::new(drop_colors),
            random_all: RandomAllEffect::new(recolor_interval),
            solid_color: SolidColorEffect::default(),
            solid_pattern: SolidPatternEffect::default(),
        }
    }

    /// Render one frame of the given mode into the section's slice
    ///
    /// `Off` is handled by the engine (it clears the whole buffer, not
    /// just the section) and `Manual` draws nothing, so both are no-ops
    /// here. `Twinkle` is bound to the random-fade algorithm and
    /// `Raindrops` to the decaying-twinkle algorithm.
    pub fn render(&mut self, mode: Mode, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        match mode {
            Mode::SolidColor => self.solid_color.render(ctx, leds),
            Mode::SolidPattern => self.solid_pattern.render(ctx, leds),
            Mode::Rainbow => self.rainbow.render(ctx, leds),
            Mode::SingleColorChase => self.chase.render_single_color(leds),
            Mode::Chase => self.chase.render(ctx, leds),
            Mode::RandomAll => self.random_all.render(ctx, leds),
            Mode::RandomOne => self.random_one.render(ctx, leds),
            Mode::Raindrops => self.raindrops.render(ctx, leds),
            Mode::Twinkle => self.random_fade.render(ctx, leds),
            Mode::Fireflies => self.fireflies.render(ctx, leds),
            Mode::DropAndStack => self.drop_stack.render(ctx, leds),
            Mode::Off | Mode::Manual => {}
        }
    }
}

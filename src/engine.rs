//! Engine context object
//!
//! Owns the frame buffer, the section registry, the selection menu and
//! the RNG. One `render` call produces one frame: either the highlight
//! overlay (while selecting) or one step of every section's effect.

use embassy_time::Duration;

use crate::bounds::bounded;
use crate::color::{BLACK, Rgb};
use crate::effect::EffectContext;
use crate::input::{ButtonId, DEFAULT_SETTLE_INTERVAL};
use crate::menu::SelectionMenu;
use crate::mode::Mode;
use crate::rng::SplitMix64;
use crate::section::{SectionLayoutError, SectionRegistry};

/// Frames between recolors of the random-all mode span this much time.
const RECOLOR_PERIOD_MS: u64 = 200;

const DEFAULT_DROP_STACK_COLORS: [Rgb; 2] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
];

const DEFAULT_HIGHLIGHT: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Static engine configuration, set once at startup
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Matrix width in LEDs
    pub width: usize,
    /// Matrix height in LEDs
    pub height: usize,
    /// Global brightness factor in `[0.0, 1.0]`
    pub brightness: f32,
    /// Delay between frames
    pub frame_delay: Duration,
    /// Number of equal sections the strip is partitioned into
    pub section_count: usize,
    /// Initial mode of every section
    pub initial_mode: Mode,
    /// Restrict random colors to the strong palette
    pub restrict_random: bool,
    /// Two-color palette of the drop-and-stack mode
    pub drop_stack_colors: [Rgb; 2],
    /// Overlay color of the selected section
    pub highlight_color: Rgb,
    /// Settle interval between repeated button triggers
    pub settle_interval: Duration,
    /// Seed of the animation RNG
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 8,
            brightness: 0.05,
            frame_delay: Duration::from_millis(10),
            section_count: 4,
            initial_mode: Mode::Off,
            restrict_random: true,
            drop_stack_colors: DEFAULT_DROP_STACK_COLORS,
            highlight_color: DEFAULT_HIGHLIGHT,
            settle_interval: DEFAULT_SETTLE_INTERVAL,
            rng_seed: 0x5eed_1ed5,
        }
    }
}

impl EngineConfig {
    pub const fn num_leds(&self) -> usize {
        self.width * self.height
    }

    /// Frame count between random-all recolors: `ceil(200ms / delay)`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn recolor_interval(&self) -> u32 {
        let delay_ms = self.frame_delay.as_millis();
        if delay_ms == 0 {
            return 1;
        }
        RECOLOR_PERIOD_MS.div_ceil(delay_ms) as u32
    }
}

/// Error constructing the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The matrix holds more LEDs than the frame buffer capacity
    TooManyLeds { num_leds: usize, capacity: usize },
    /// The section layout is invalid
    Layout(SectionLayoutError),
}

impl From<SectionLayoutError> for EngineError {
    fn from(err: SectionLayoutError) -> Self {
        Self::Layout(err)
    }
}

/// The engine: frame buffer, sections, menu and RNG in one context
///
/// `MAX_LEDS` bounds the frame buffer (and the per-section state
/// arrays), `MAX_SECTIONS` bounds the registry. All state lives inside
/// this object; there are no globals.
#[derive(Debug)]
pub struct LightEngine<const MAX_LEDS: usize, const MAX_SECTIONS: usize> {
    frame: [Rgb; MAX_LEDS],
    num_leds: usize,
    registry: SectionRegistry<MAX_LEDS, MAX_SECTIONS>,
    menu: SelectionMenu,
    rng: SplitMix64,
    restrict_random: bool,
    highlight_color: Rgb,
}

impl<const MAX_LEDS: usize, const MAX_SECTIONS: usize> LightEngine<MAX_LEDS, MAX_SECTIONS> {
    /// Build the engine from a validated configuration
    ///
    /// Fails fast on an invalid section layout or an oversized matrix;
    /// nothing is checked again in the render loop.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let num_leds = config.num_leds();
        if num_leds > MAX_LEDS {
            return Err(EngineError::TooManyLeds {
                num_leds,
                capacity: MAX_LEDS,
            });
        }

        let mut rng = SplitMix64::new(config.rng_seed);
        let registry = SectionRegistry::equal_partition(
            num_leds,
            config.section_count,
            config.initial_mode,
            config.recolor_interval(),
            config.drop_stack_colors,
            &mut rng,
        )?;

        Ok(Self {
            frame: [BLACK; MAX_LEDS],
            num_leds,
            registry,
            menu: SelectionMenu::new(),
            rng,
            restrict_random: config.restrict_random,
            highlight_color: config.highlight_color,
        })
    }

    /// Produce one frame
    ///
    /// While selecting, the highlight overlay replaces all effects.
    /// Otherwise every section's effect advances by one step. The
    /// returned slice is the unscaled frame; the renderer applies the
    /// global brightness.
    pub fn render(&mut self) -> &[Rgb] {
        let frame = &mut self.frame[..self.num_leds];

        if self.menu.selecting() {
            self.menu
                .paint_highlight(&self.registry, frame, self.highlight_color);
        } else {
            for section in self.registry.iter_mut() {
                if section.mode == Mode::Off {
                    // Off clears the whole buffer, not just its own
                    // section; later sections repaint their slice.
                    frame.fill(BLACK);
                    continue;
                }
                let mut ctx = EffectContext::new(&mut self.rng, self.restrict_random);
                let leds = bounded(&mut *frame, section.bounds);
                section.state.render(section.mode, &mut ctx, leds);
            }
        }

        &self.frame[..self.num_leds]
    }

    /// Dispatch a debounced button press to the menu
    pub fn handle_button(&mut self, button: ButtonId) {
        self.menu
            .handle_button(button, &mut self.registry, &mut self.frame[..self.num_leds]);
    }

    /// Current frame buffer contents (unscaled)
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.num_leds]
    }

    pub fn registry(&self) -> &SectionRegistry<MAX_LEDS, MAX_SECTIONS> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SectionRegistry<MAX_LEDS, MAX_SECTIONS> {
        &mut self.registry
    }

    pub fn menu(&self) -> &SelectionMenu {
        &self.menu
    }
}

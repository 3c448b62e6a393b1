//! Drop-and-stack effect
//!
//! A pixel falls from the top of the section and stacks at the bottom;
//! each completed pass shortens the next fall by one. When the section
//! is fully stacked, the palette advances and a new pass begins on the
//! previous color as background.

use super::{EffectContext, SectionEffect};
use crate::color::Rgb;

#[derive(Debug, Clone)]
pub struct DropStackEffect {
    /// Two alternating stack colors
    colors: [Rgb; 2],
    /// Index of the currently falling color
    pub color_index: usize,
    /// Rows stacked in the current pass, derived for state reporting
    pub filled_rows: usize,
    /// Current falling position; `None` starts a fresh pass
    position: Option<usize>,
    /// Distance the current drop may fall, shrinks by one per landing
    run_length: usize,
}

impl DropStackEffect {
    pub const fn new(colors: [Rgb; 2]) -> Self {
        Self {
            colors,
            color_index: 0,
            filled_rows: 0,
            position: None,
            run_length: 0,
        }
    }

    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    fn background(&self) -> Rgb {
        if self.color_index > 0 {
            self.colors[self.color_index - 1]
        } else {
            self.colors[self.colors.len() - 1]
        }
    }
}

impl SectionEffect for DropStackEffect {
    fn render(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        // The landing check below compares against the run length as it
        // was at frame entry, even though landing decrements it.
        let run = self.run_length;
        let drop_color = self.colors[self.color_index % self.colors.len()];
        let background = self.background();

        let Some(position) = self.position else {
            // Fresh pass: paint the whole section in the previous stack
            // color and start a drop from the top.
            leds.fill(background);
            self.position = Some(len - 1);
            self.run_length = len;
            self.filled_rows = 0;
            return;
        };

        // Erase the trail behind the drop, then paint the drop itself.
        if position + 1 < len {
            leds[position + 1] = background;
        }
        if let Some(led) = leds.get_mut(position) {
            *led = drop_color;
        }

        if len.checked_sub(run) == Some(position) {
            // Landed on the floor of this pass.
            self.position = Some(len - 1);
            self.run_length = run.saturating_sub(1);
            self.filled_rows += 1;

            if run == 1 {
                self.color_index = (self.color_index + 1) % self.colors.len();
                self.position = None;
            }
        } else {
            self.position = Some(position.saturating_sub(1));
        }
    }
}

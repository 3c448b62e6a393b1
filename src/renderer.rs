//! Output stage
//!
//! Applies the global brightness to a rendered frame and hands it to
//! the hardware driver. The scaled copy lives in its own buffer so the
//! engine's frame buffer keeps full-range colors between frames.

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, apply_brightness};

pub struct Renderer<O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    scaled: [Rgb; MAX_LEDS],
    brightness: f32,
}

impl<O: OutputDriver, const MAX_LEDS: usize> Renderer<O, MAX_LEDS> {
    /// Create a renderer with a global brightness factor in `[0.0, 1.0]`
    pub fn new(output: O, brightness: f32) -> Self {
        Self {
            output,
            scaled: [BLACK; MAX_LEDS],
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Scale the frame and flush it to the driver in one write
    pub fn render(&mut self, frame: &[Rgb]) {
        let len = frame.len().min(MAX_LEDS);
        for (scaled, led) in self.scaled[..len].iter_mut().zip(frame) {
            *scaled = apply_brightness(*led, self.brightness);
        }
        self.output.write(&self.scaled[..len]);
    }

    /// Access the underlying driver
    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

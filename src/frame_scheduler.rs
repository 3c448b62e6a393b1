//! Frame scheduling and timing.
//!
//! Portable frame pacing without async/await or platform-specific
//! timers. The caller reads the clock, calls `tick`, and performs the
//! platform sleep for the returned duration.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::engine::LightEngine;
use crate::input::{ButtonInputs, InputController, StatusOutputs};
use crate::renderer::Renderer;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait before the next tick.
    pub sleep_duration: Duration,
    /// Whether a frame was actually produced by this tick.
    pub rendered: bool,
}

/// Fixed-delay frame scheduler.
///
/// Each due tick polls input, runs the engine (effects or the highlight
/// overlay) and flushes the renderer. A late frame fires immediately
/// and timing restarts from that moment; there is no catch-up backlog
/// and no frame coalescing.
pub struct FrameScheduler<O, I, S, const MAX_LEDS: usize, const MAX_SECTIONS: usize>
where
    O: OutputDriver,
    I: ButtonInputs,
    S: StatusOutputs,
{
    engine: LightEngine<MAX_LEDS, MAX_SECTIONS>,
    renderer: Renderer<O, MAX_LEDS>,
    input: InputController<I, S>,
    frame_delay: Duration,
    last_frame: Option<Instant>,
}

impl<O, I, S, const MAX_LEDS: usize, const MAX_SECTIONS: usize>
    FrameScheduler<O, I, S, MAX_LEDS, MAX_SECTIONS>
where
    O: OutputDriver,
    I: ButtonInputs,
    S: StatusOutputs,
{
    pub fn new(
        engine: LightEngine<MAX_LEDS, MAX_SECTIONS>,
        renderer: Renderer<O, MAX_LEDS>,
        input: InputController<I, S>,
        frame_delay: Duration,
    ) -> Self {
        Self {
            engine,
            renderer,
            input,
            frame_delay,
            last_frame: None,
        }
    }

    /// Process one tick of the main loop.
    ///
    /// A tick before the frame delay has elapsed does nothing and
    /// returns the remaining sleep. A due tick polls input, renders and
    /// records `now` as the new frame timestamp.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if let Some(last) = self.last_frame {
            if let Some(elapsed) = now.checked_duration_since(last) {
                if elapsed < self.frame_delay {
                    return FrameResult {
                        next_deadline: last + self.frame_delay,
                        sleep_duration: self.frame_delay - elapsed,
                        rendered: false,
                    };
                }
            }
        }

        self.input.poll(now, &mut self.engine);
        let frame = self.engine.render();
        self.renderer.render(frame);
        self.last_frame = Some(now);

        FrameResult {
            next_deadline: now + self.frame_delay,
            sleep_duration: self.frame_delay,
            rendered: true,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &LightEngine<MAX_LEDS, MAX_SECTIONS> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut LightEngine<MAX_LEDS, MAX_SECTIONS> {
        &mut self.engine
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<O, MAX_LEDS> {
        &self.renderer
    }
}

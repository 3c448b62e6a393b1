//! Button input polling and status outputs
//!
//! Four buttons are polled once per frame tick. Each button has its own
//! settle gate: a held button re-fires only after the settle interval
//! has elapsed, so the frame loop never blocks on input handling.

use embassy_time::{Duration, Instant};

use crate::engine::LightEngine;

/// Default settle interval between repeated triggers of one button
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_millis(250);

/// The four menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    /// Toggles section-selection state
    Select,
    /// Next section while selecting, otherwise cycles the section color
    Cycle,
    /// Advances the selected section's mode
    Mode,
    /// Advances the manual pixel cursor
    Pixel,
}

impl ButtonId {
    pub const ALL: [Self; 4] = [Self::Select, Self::Cycle, Self::Mode, Self::Pixel];

    pub const fn index(self) -> usize {
        match self {
            Self::Select => 0,
            Self::Cycle => 1,
            Self::Mode => 2,
            Self::Pixel => 3,
        }
    }
}

/// Digital input source for the four buttons
///
/// The physical inputs are active-low with pull-ups; implementations
/// translate the level so `is_pressed` returns `true` while held.
pub trait ButtonInputs {
    fn is_pressed(&self, button: ButtonId) -> bool;
}

/// Digital output sink for the four status indicators
///
/// Each indicator mirrors the raw held state of its button.
pub trait StatusOutputs {
    fn set(&mut self, button: ButtonId, on: bool);
}

/// Non-blocking per-button settle gate
#[derive(Debug, Clone, Copy, Default)]
struct SettleGate {
    last_fire: Option<Instant>,
}

impl SettleGate {
    /// Returns whether the action may fire now, recording the trigger
    fn try_fire(&mut self, now: Instant, settle: Duration) -> bool {
        if let Some(last) = self.last_fire {
            if now.checked_duration_since(last).is_some_and(|d| d < settle) {
                return false;
            }
        }
        self.last_fire = Some(now);
        true
    }
}

/// Polls buttons, drives status outputs, dispatches menu actions
pub struct InputController<I: ButtonInputs, S: StatusOutputs> {
    inputs: I,
    outputs: S,
    settle: Duration,
    gates: [SettleGate; 4],
}

impl<I: ButtonInputs, S: StatusOutputs> InputController<I, S> {
    pub fn new(inputs: I, outputs: S, settle: Duration) -> Self {
        Self {
            inputs,
            outputs,
            settle,
            gates: [SettleGate::default(); 4],
        }
    }

    /// Poll all buttons once
    ///
    /// Status outputs follow the raw held state every poll; actions are
    /// dispatched through the settle gates.
    pub fn poll<const MAX_LEDS: usize, const MAX_SECTIONS: usize>(
        &mut self,
        now: Instant,
        engine: &mut LightEngine<MAX_LEDS, MAX_SECTIONS>,
    ) {
        for button in ButtonId::ALL {
            let pressed = self.inputs.is_pressed(button);
            self.outputs.set(button, pressed);

            if pressed && self.gates[button.index()].try_fire(now, self.settle) {
                engine.handle_button(button);
            }
        }
    }
}

#![no_std]

pub mod bounds;
pub mod color;
pub mod effect;
pub mod engine;
pub mod frame_scheduler;
pub mod input;
pub mod menu;
pub mod mode;
pub mod renderer;
pub mod rng;
pub mod section;

pub use bounds::SectionBounds;
pub use effect::{EffectContext, ModeState, SectionEffect};
pub use engine::{EngineConfig, EngineError, LightEngine};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{ButtonId, ButtonInputs, DEFAULT_SETTLE_INTERVAL, InputController, StatusOutputs};
pub use menu::SelectionMenu;
pub use mode::{MODE_CYCLE, Mode};
pub use renderer::Renderer;
pub use rng::SplitMix64;
pub use section::{Section, SectionLayoutError, SectionRegistry};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait; one `write` per frame is
/// the flush.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

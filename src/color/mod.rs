mod palette;
mod utils;

pub use palette::{STRONG_COLORS, cycle_color, random_color, strong_color};
use smart_leds::RGB8;
pub use utils::{apply_brightness, rgb_from_u32, scale_channels, wheel};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

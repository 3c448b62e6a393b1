use crate::color::Rgb;

/// Scale a color by a brightness factor in `[0.0, 1.0]`
///
/// Each channel is truncated to `floor(channel * factor)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply_brightness(color: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: (f32::from(color.r) * factor) as u8,
        g: (f32::from(color.g) * factor) as u8,
        b: (f32::from(color.b) * factor) as u8,
    }
}

/// Scale a color by an 8-bit brightness (0 = black, 255 = unchanged)
pub const fn scale_channels(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: ((color.r as u16 * brightness as u16) / 255) as u8,
        g: ((color.g as u16 * brightness as u16) / 255) as u8,
        b: ((color.b as u16 * brightness as u16) / 255) as u8,
    }
}

/// Map a position on a 0-255 circle to a hue-wheel color
///
/// Three 85-wide bands form a continuous cycle; the only discontinuity
/// is at the wrap from 255 back to 0.
pub const fn wheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let p = pos - 85;
        Rgb {
            r: 255 - p * 3,
            g: 0,
            b: p * 3,
        }
    } else {
        let p = pos - 170;
        Rgb {
            r: 0,
            g: p * 3,
            b: 255 - p * 3,
        }
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

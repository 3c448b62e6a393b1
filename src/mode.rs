//! Animation modes and the fixed cycling order.
//!
//! The mode list is closed: unknown discriminants are rejected at
//! configuration time and can never reach the render loop.

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_SOLID_COLOR: &str = "solid_color";
const MODE_NAME_SOLID_PATTERN: &str = "solid_pattern";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_SINGLE_COLOR_CHASE: &str = "single_color_chase";
const MODE_NAME_RANDOM_ALL: &str = "random_all";
const MODE_NAME_RANDOM_ONE: &str = "random_one";
const MODE_NAME_RAINDROPS: &str = "raindrops";
const MODE_NAME_TWINKLE: &str = "twinkle";
const MODE_NAME_FIREFLIES: &str = "fireflies";
const MODE_NAME_DROP_AND_STACK: &str = "drop_and_stack";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_MANUAL: &str = "manual";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_SOLID_COLOR: u8 = 1;
const MODE_ID_SOLID_PATTERN: u8 = 2;
const MODE_ID_RAINBOW: u8 = 3;
const MODE_ID_SINGLE_COLOR_CHASE: u8 = 4;
const MODE_ID_RANDOM_ALL: u8 = 5;
const MODE_ID_RANDOM_ONE: u8 = 6;
const MODE_ID_RAINDROPS: u8 = 7;
const MODE_ID_TWINKLE: u8 = 8;
const MODE_ID_FIREFLIES: u8 = 9;
const MODE_ID_DROP_AND_STACK: u8 = 10;
const MODE_ID_CHASE: u8 = 11;

/// Animation mode bound to a section
///
/// `Manual` is a tag reserved for direct pixel addressing. It is not part
/// of [`MODE_CYCLE`], so no section ever reaches it through the menu; the
/// variant exists only so the pixel-cursor button has a mode to test for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Off = MODE_ID_OFF,
    SolidColor = MODE_ID_SOLID_COLOR,
    SolidPattern = MODE_ID_SOLID_PATTERN,
    Rainbow = MODE_ID_RAINBOW,
    SingleColorChase = MODE_ID_SINGLE_COLOR_CHASE,
    RandomAll = MODE_ID_RANDOM_ALL,
    RandomOne = MODE_ID_RANDOM_ONE,
    Raindrops = MODE_ID_RAINDROPS,
    Twinkle = MODE_ID_TWINKLE,
    Fireflies = MODE_ID_FIREFLIES,
    DropAndStack = MODE_ID_DROP_AND_STACK,
    Chase = MODE_ID_CHASE,
    Manual = 12,
}

/// Cycling order of the selectable modes
///
/// The order is significant: the mode button walks this list.
pub const MODE_CYCLE: [Mode; 12] = [
    Mode::Off,
    Mode::SolidColor,
    Mode::SolidPattern,
    Mode::Rainbow,
    Mode::SingleColorChase,
    Mode::RandomAll,
    Mode::RandomOne,
    Mode::Raindrops,
    Mode::Twinkle,
    Mode::Fireflies,
    Mode::DropAndStack,
    Mode::Chase,
];

impl Mode {
    /// Parse a configured mode id
    ///
    /// Only cycling modes are accepted; `Manual` cannot be configured.
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_SOLID_COLOR => Self::SolidColor,
            MODE_ID_SOLID_PATTERN => Self::SolidPattern,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_SINGLE_COLOR_CHASE => Self::SingleColorChase,
            MODE_ID_RANDOM_ALL => Self::RandomAll,
            MODE_ID_RANDOM_ONE => Self::RandomOne,
            MODE_ID_RAINDROPS => Self::Raindrops,
            MODE_ID_TWINKLE => Self::Twinkle,
            MODE_ID_FIREFLIES => Self::Fireflies,
            MODE_ID_DROP_AND_STACK => Self::DropAndStack,
            MODE_ID_CHASE => Self::Chase,
            _ => return None,
        })
    }

    /// Next mode in the cycling order (wrapping)
    ///
    /// A mode outside the cycle restarts at the first entry.
    pub fn next(self) -> Self {
        let Some(position) = MODE_CYCLE.iter().position(|&m| m == self) else {
            return MODE_CYCLE[0];
        };
        MODE_CYCLE[(position + 1) % MODE_CYCLE.len()]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::SolidColor => MODE_NAME_SOLID_COLOR,
            Self::SolidPattern => MODE_NAME_SOLID_PATTERN,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::SingleColorChase => MODE_NAME_SINGLE_COLOR_CHASE,
            Self::RandomAll => MODE_NAME_RANDOM_ALL,
            Self::RandomOne => MODE_NAME_RANDOM_ONE,
            Self::Raindrops => MODE_NAME_RAINDROPS,
            Self::Twinkle => MODE_NAME_TWINKLE,
            Self::Fireflies => MODE_NAME_FIREFLIES,
            Self::DropAndStack => MODE_NAME_DROP_AND_STACK,
            Self::Chase => MODE_NAME_CHASE,
            Self::Manual => MODE_NAME_MANUAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_SOLID_COLOR => Some(Self::SolidColor),
            MODE_NAME_SOLID_PATTERN => Some(Self::SolidPattern),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_SINGLE_COLOR_CHASE => Some(Self::SingleColorChase),
            MODE_NAME_RANDOM_ALL => Some(Self::RandomAll),
            MODE_NAME_RANDOM_ONE => Some(Self::RandomOne),
            MODE_NAME_RAINDROPS => Some(Self::Raindrops),
            MODE_NAME_TWINKLE => Some(Self::Twinkle),
            MODE_NAME_FIREFLIES => Some(Self::Fireflies),
            MODE_NAME_DROP_AND_STACK => Some(Self::DropAndStack),
            MODE_NAME_CHASE => Some(Self::Chase),
            _ => None,
        }
    }
}

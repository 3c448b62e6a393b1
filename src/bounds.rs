use crate::Rgb;

/// Half-open index range of a section within the LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

impl SectionBounds {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the number of LEDs in the section
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Check if an absolute LED index falls inside the section
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Get a slice of the LEDs within the bounds
pub(crate) fn bounded(leds: &mut [Rgb], bounds: SectionBounds) -> &mut [Rgb] {
    &mut leds[bounds.start..bounds.end]
}

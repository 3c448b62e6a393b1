//! Sections and the section registry
//!
//! A section is a contiguous slice of the LED strip with its own mode
//! and animation state. The registry partitions the full index space;
//! the partition is validated once at construction and never resized.

use heapless::Vec;

use crate::bounds::SectionBounds;
use crate::color::Rgb;
use crate::effect::ModeState;
use crate::mode::Mode;
use crate::rng::SplitMix64;

/// Error validating a section layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayoutError {
    /// No sections were given
    Empty,
    /// A section has a zero length
    EmptySection { index: usize },
    /// A section spans more LEDs than the per-section state capacity
    SectionTooLong { index: usize },
    /// Sections overlap or leave a gap
    NotContiguous { index: usize },
    /// The partition does not start at zero or end at the strip length
    NotCovering,
    /// More sections than the registry can hold
    CapacityExceeded,
}

/// A contiguous LED range with its own mode and per-mode state
#[derive(Debug, Clone)]
pub struct Section<const CAP: usize> {
    pub bounds: SectionBounds,
    pub mode: Mode,
    pub state: ModeState<CAP>,
}

impl<const CAP: usize> Section<CAP> {
    pub const fn len(&self) -> usize {
        self.bounds.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

/// Ordered collection of sections partitioning the strip
#[derive(Debug, Clone)]
pub struct SectionRegistry<const CAP: usize, const MAX_SECTIONS: usize> {
    sections: Vec<Section<CAP>, MAX_SECTIONS>,
}

impl<const CAP: usize, const MAX_SECTIONS: usize> SectionRegistry<CAP, MAX_SECTIONS> {
    /// Build a registry from explicit bounds
    ///
    /// The bounds must be ascending, contiguous, and cover exactly
    /// `0..num_leds`. Every section starts in the given mode with a
    /// freshly allocated state bag.
    pub fn from_bounds(
        bounds: &[SectionBounds],
        num_leds: usize,
        mode: Mode,
        recolor_interval: u32,
        drop_colors: [Rgb; 2],
        rng: &mut SplitMix64,
    ) -> Result<Self, SectionLayoutError> {
        if bounds.is_empty() {
            return Err(SectionLayoutError::Empty);
        }
        if bounds.len() > MAX_SECTIONS {
            return Err(SectionLayoutError::CapacityExceeded);
        }

        let mut expected_start = 0;
        for (index, b) in bounds.iter().enumerate() {
            if b.is_empty() {
                return Err(SectionLayoutError::EmptySection { index });
            }
            if b.len() > CAP {
                return Err(SectionLayoutError::SectionTooLong { index });
            }
            if b.start != expected_start {
                return Err(SectionLayoutError::NotContiguous { index });
            }
            expected_start = b.end;
        }
        if expected_start != num_leds {
            return Err(SectionLayoutError::NotCovering);
        }

        let mut sections = Vec::new();
        for b in bounds {
            let section = Section {
                bounds: *b,
                mode,
                state: ModeState::new(b.len(), recolor_interval, drop_colors, rng),
            };
            if sections.push(section).is_err() {
                return Err(SectionLayoutError::CapacityExceeded);
            }
        }
        Ok(Self { sections })
    }

    /// Build a registry of `count` equal sections over `num_leds` LEDs
    ///
    /// The last section absorbs the remainder when the strip length is
    /// not divisible by the section count.
    pub fn equal_partition(
        num_leds: usize,
        count: usize,
        mode: Mode,
        recolor_interval: u32,
        drop_colors: [Rgb; 2],
        rng: &mut SplitMix64,
    ) -> Result<Self, SectionLayoutError> {
        if count == 0 {
            return Err(SectionLayoutError::Empty);
        }
        if count > MAX_SECTIONS {
            return Err(SectionLayoutError::CapacityExceeded);
        }
        let size = num_leds / count;

        let mut bounds: Vec<SectionBounds, MAX_SECTIONS> = Vec::new();
        for i in 0..count {
            let start = i * size;
            let end = if i == count - 1 { num_leds } else { start + size };
            let _ = bounds.push(SectionBounds::new(start, end));
        }
        Self::from_bounds(&bounds, num_leds, mode, recolor_interval, drop_colors, rng)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section<CAP>> {
        self.sections.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Section<CAP>> {
        self.sections.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<CAP>> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Section<CAP>> {
        self.sections.iter_mut()
    }
}

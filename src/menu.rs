//! Selection menu state machine
//!
//! Two states: Normal (effects run, buttons tune the selected section)
//! and Selecting (a highlight overlay marks the selected section and
//! the cycle button moves the selection).

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};
use crate::input::ButtonId;
use crate::mode::Mode;
use crate::section::SectionRegistry;

#[derive(Debug, Clone, Default)]
pub struct SelectionMenu {
    selecting: bool,
    selected_section: usize,
    /// Pixel cursor for the manual mode; inert while `Manual` stays out
    /// of the mode cycle, kept for forward compatibility.
    selected_pixel: usize,
}

impl SelectionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn selecting(&self) -> bool {
        self.selecting
    }

    pub const fn selected_section(&self) -> usize {
        self.selected_section
    }

    pub const fn selected_pixel(&self) -> usize {
        self.selected_pixel
    }

    /// Execute the action bound to a button
    ///
    /// Mutates the registry (selection, mode, mode parameters) and may
    /// clear the frame buffer so stale pixels do not survive a state
    /// change.
    pub fn handle_button<const CAP: usize, const MAX_SECTIONS: usize>(
        &mut self,
        button: ButtonId,
        registry: &mut SectionRegistry<CAP, MAX_SECTIONS>,
        frame: &mut [Rgb],
    ) {
        match button {
            ButtonId::Select => {
                self.selecting = !self.selecting;
                frame.fill(BLACK);
            }
            ButtonId::Cycle => {
                if self.selecting {
                    self.cycle_section_selection(registry.len());
                } else {
                    self.cycle_section_color(registry);
                }
            }
            ButtonId::Mode => {
                if !self.selecting {
                    self.cycle_section_mode(registry, frame);
                }
            }
            ButtonId::Pixel => {
                self.advance_pixel_cursor(registry);
            }
        }
    }

    /// Paint the highlight overlay: selected section in the highlight
    /// color, everything else black
    pub fn paint_highlight<const CAP: usize, const MAX_SECTIONS: usize>(
        &self,
        registry: &SectionRegistry<CAP, MAX_SECTIONS>,
        frame: &mut [Rgb],
        highlight: Rgb,
    ) {
        frame.fill(BLACK);
        let Some(section) = registry.get(self.selected_section) else {
            return;
        };
        for index in section.bounds.start..section.bounds.end {
            if let Some(led) = frame.get_mut(index) {
                *led = highlight;
            }
        }
    }

    fn cycle_section_selection(&mut self, section_count: usize) {
        if section_count == 0 {
            return;
        }
        self.selected_section = (self.selected_section + 1) % section_count;
        #[cfg(feature = "esp32-log")]
        println!("section {} selected", self.selected_section);
    }

    fn cycle_section_color<const CAP: usize, const MAX_SECTIONS: usize>(
        &mut self,
        registry: &mut SectionRegistry<CAP, MAX_SECTIONS>,
    ) {
        let Some(section) = registry.get_mut(self.selected_section) else {
            return;
        };
        match section.mode {
            Mode::SolidColor => section.state.solid_color.cycle(),
            Mode::SolidPattern => section.state.solid_pattern.cycle(),
            _ => {}
        }
    }

    fn cycle_section_mode<const CAP: usize, const MAX_SECTIONS: usize>(
        &mut self,
        registry: &mut SectionRegistry<CAP, MAX_SECTIONS>,
        frame: &mut [Rgb],
    ) {
        let Some(section) = registry.get_mut(self.selected_section) else {
            return;
        };
        section.mode = section.mode.next();
        frame.fill(BLACK);
        #[cfg(feature = "esp32-log")]
        println!(
            "section {} mode set to {}",
            self.selected_section,
            section.mode.as_str()
        );
    }

    fn advance_pixel_cursor<const CAP: usize, const MAX_SECTIONS: usize>(
        &mut self,
        registry: &SectionRegistry<CAP, MAX_SECTIONS>,
    ) {
        let Some(section) = registry.get(self.selected_section) else {
            return;
        };
        if section.mode == Mode::Manual && !section.is_empty() {
            self.selected_pixel = (self.selected_pixel + 1) % section.len();
        }
    }
}

//! Renderer-side face cache
//!
//! Holds the assignment currently on screen and applies new ones strictly
//! in tick order, pushing only the cells that changed.

use heapless::String;
use rollover_core::{AnimationIntent, DisplayTime, SlotAssignment, SlotIndex};

use crate::backend::{DisplayError, FaceBackend};
use crate::slide::SlideAnimation;

/// Length of the `HH:MM` text
pub const TEXT_LEN: usize = 5;

/// One computed face state, numbered in tick order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceUpdate {
    /// Tick sequence number, increasing by one per computation
    pub sequence: u32,
    /// Display time the assignment was computed for
    pub time: DisplayTime,
    /// Digits per layer and slot
    pub assignment: SlotAssignment,
    /// Whether to slide
    pub intent: AnimationIntent,
}

/// Errors applying an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// Update is not newer than the one already shown
    Stale {
        /// Sequence of the rejected update
        sequence: u32,
        /// Sequence currently shown
        last: u32,
    },
    /// Backend failed
    Display(DisplayError),
}

impl From<DisplayError> for FaceError {
    fn from(error: DisplayError) -> Self {
        FaceError::Display(error)
    }
}

/// Summary of an applied update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// Number of cells pushed to the backend
    pub cells_changed: u8,
    /// Whether a slide was started
    pub animated: bool,
}

/// Face state as last pushed to a backend
#[derive(Debug, Clone)]
pub struct Face {
    /// Assignment currently shown
    assignment: SlotAssignment,
    /// Sequence of the last applied update
    last_sequence: Option<u32>,
    /// Slide started on animated updates
    slide: SlideAnimation,
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}

impl Face {
    /// Create a face with the one-minute slide
    pub fn new() -> Self {
        Self::with_slide(SlideAnimation::minute())
    }

    /// Create a face with a custom slide
    pub fn with_slide(slide: SlideAnimation) -> Self {
        Self {
            assignment: SlotAssignment::blank(),
            last_sequence: None,
            slide,
        }
    }

    /// Apply an update to a backend
    ///
    /// Updates older than (or equal to) the last applied one are rejected so
    /// a late computation never overwrites a newer tick. On backend failure
    /// the cache keeps the previous state and the same update may be retried.
    pub fn apply<B: FaceBackend>(
        &mut self,
        update: &FaceUpdate,
        backend: &mut B,
    ) -> Result<Applied, FaceError> {
        if let Some(last) = self.last_sequence {
            if update.sequence <= last {
                return Err(FaceError::Stale {
                    sequence: update.sequence,
                    last,
                });
            }
        }

        let mut cells_changed = 0u8;
        if self.last_sequence.is_none() {
            // Backend content is unknown before the first update
            for (layer, slot, value) in update.assignment.cells() {
                backend.set_glyph(layer, slot, value)?;
                cells_changed += 1;
            }
        } else {
            for (layer, slot, value) in update.assignment.changed_cells(&self.assignment) {
                backend.set_glyph(layer, slot, value)?;
                cells_changed += 1;
            }
        }

        let animated = update.intent.is_animated();
        if animated {
            backend.start_slide(&self.slide)?;
        } else {
            backend.reset_slide()?;
        }
        backend.flush()?;

        self.assignment = update.assignment;
        self.last_sequence = Some(update.sequence);

        Ok(Applied {
            cells_changed,
            animated,
        })
    }

    /// Assignment currently shown
    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    /// Sequence of the last applied update
    pub fn last_sequence(&self) -> Option<u32> {
        self.last_sequence
    }

    /// Slide used for animated updates
    pub fn slide(&self) -> &SlideAnimation {
        &self.slide
    }

    /// `HH:MM` text visible once the current slide completes
    ///
    /// A suppressed leading digit shows as a space, e.g. `" 1:00"`.
    pub fn settled_text(&self) -> String<TEXT_LEN> {
        let settled = self.assignment.settled();
        let mut text = String::new();
        for slot in SlotIndex::ALL {
            if slot == SlotIndex::TensOfMinutes {
                let _ = text.push(':');
            }
            let _ = text.push(settled[slot.index()].as_char());
        }
        text
    }
}

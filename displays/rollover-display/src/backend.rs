//! Face backend trait
//!
//! Defines the interface for anything that can show the three digit
//! layers: a local framebuffer, a display controller on another MCU, or a
//! test recorder.

use rollover_core::{DigitValue, Layer, SlotIndex};

use crate::slide::SlideAnimation;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Buffer overflow
    BufferOverflow,
}

/// Face backend trait
///
/// Glyph lookup, layer positioning and slide timing are the backend's
/// business; callers only say which digit goes where and when to slide.
pub trait FaceBackend {
    /// Show `value` in a slot of a layer
    fn set_glyph(&mut self, layer: Layer, slot: SlotIndex, value: DigitValue)
        -> Result<(), DisplayError>;

    /// Move the moving layer back to its start frame and begin `slide`
    fn start_slide(&mut self, slide: &SlideAnimation) -> Result<(), DisplayError>;

    /// Put the moving layer at its start frame without animating
    fn reset_slide(&mut self) -> Result<(), DisplayError>;

    /// Flush buffered changes to the display
    fn flush(&mut self) -> Result<(), DisplayError>;
}

//! Linear slide of the moving layer
//!
//! The slide spans a whole minute so the digits creep upward and arrive
//! exactly when the next tick replaces them. Positions are computed in
//! integer math from the elapsed time.

use crate::layout::{MOVING_END_Y, MOVING_START_Y};

/// Duration of the face slide in milliseconds
pub const SLIDE_DURATION_MS: u32 = 60 * 1000;

/// A fixed-duration linear move of the moving layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlideAnimation {
    /// Moving layer y at the start
    from_y: i32,
    /// Moving layer y at the end
    to_y: i32,
    /// Total duration
    duration_ms: u32,
}

impl Default for SlideAnimation {
    fn default() -> Self {
        Self::minute()
    }
}

impl SlideAnimation {
    /// Create a slide between two moving layer positions
    pub const fn new(from_y: i32, to_y: i32, duration_ms: u32) -> Self {
        Self {
            from_y,
            to_y,
            duration_ms,
        }
    }

    /// The face's one-minute slide from the start to the end frame
    pub const fn minute() -> Self {
        Self::new(MOVING_START_Y, MOVING_END_Y, SLIDE_DURATION_MS)
    }

    /// Start position
    pub const fn from_y(&self) -> i32 {
        self.from_y
    }

    /// End position
    pub const fn to_y(&self) -> i32 {
        self.to_y
    }

    /// Duration in milliseconds
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Completion in thousandths, clamped to `0..=1000`
    pub fn progress_permille(&self, elapsed_ms: u32) -> u16 {
        if self.duration_ms == 0 {
            return 1000;
        }
        let elapsed = elapsed_ms.min(self.duration_ms) as u64;
        (elapsed * 1000 / self.duration_ms as u64) as u16
    }

    /// Moving layer y after `elapsed_ms`
    ///
    /// Holds the end position once the slide has finished.
    pub fn offset_at(&self, elapsed_ms: u32) -> i32 {
        if self.is_finished(elapsed_ms) {
            return self.to_y;
        }
        let travel = (self.to_y - self.from_y) as i64;
        let moved = travel * elapsed_ms as i64 / self.duration_ms as i64;
        self.from_y + moved as i32
    }

    /// Check if the slide has reached its end
    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

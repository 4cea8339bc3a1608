//! Tick driver
//!
//! Turns raw wall-clock readings into numbered [`FaceUpdate`]s. The first
//! reading after start-up (or after [`ClockFace::restart`]) is the initial
//! one and shows without a slide.

use rollover_core::{compute_assignment, resolve, HourFormat, TimeError};

use crate::face::FaceUpdate;

/// Tick driver for one face
#[derive(Debug, Clone)]
pub struct ClockFace {
    /// Locale hour style
    format: HourFormat,
    /// Sequence number of the next update
    next_sequence: u32,
    /// Whether the initial update has been produced
    started: bool,
}

impl ClockFace {
    /// Create a driver for the given hour style
    pub const fn new(format: HourFormat) -> Self {
        Self {
            format,
            next_sequence: 0,
            started: false,
        }
    }

    /// Current hour style
    pub fn format(&self) -> HourFormat {
        self.format
    }

    /// Change the hour style (takes effect on the next update)
    pub fn set_format(&mut self, format: HourFormat) {
        self.format = format;
    }

    /// Make the next update an initial one again
    pub fn restart(&mut self) {
        self.started = false;
    }

    /// Check if the next update will be the initial one
    pub fn is_initial(&self) -> bool {
        !self.started
    }

    /// Compute the face update for a raw 24-hour reading
    ///
    /// Rejected readings do not consume a sequence number or the initial flag.
    /// A successful update always consumes the initial flag, so if the
    /// initial update could not be shown, call [`ClockFace::restart`] before
    /// retrying.
    pub fn update(&mut self, raw_hour: u8, raw_minute: u8) -> Result<FaceUpdate, TimeError> {
        let time = resolve(raw_hour, raw_minute, self.format)?;
        let (assignment, intent) = compute_assignment(time, self.format, !self.started);

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.started = true;

        Ok(FaceUpdate {
            sequence,
            time,
            assignment,
            intent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollover_core::{AnimationIntent, SlotIndex};

    #[test]
    fn test_first_update_is_initial() {
        let mut clock = ClockFace::new(HourFormat::TwelveHour);
        assert!(clock.is_initial());

        let first = clock.update(8, 15).unwrap();
        assert_eq!(first.sequence, 0);
        assert_eq!(first.intent, AnimationIntent::Appear);

        let second = clock.update(8, 16).unwrap();
        assert_eq!(second.sequence, 1);
        assert_eq!(second.intent, AnimationIntent::Slide);
    }

    #[test]
    fn test_invalid_reading_consumes_nothing() {
        let mut clock = ClockFace::new(HourFormat::TwelveHour);

        assert_eq!(clock.update(25, 0), Err(TimeError::HourOutOfRange(25)));
        assert!(clock.is_initial());

        let update = clock.update(0, 0).unwrap();
        assert_eq!(update.sequence, 0);
        assert_eq!(update.time.hours(), 12);
    }

    #[test]
    fn test_restart_shows_without_slide() {
        let mut clock = ClockFace::new(HourFormat::TwelveHour);
        clock.update(8, 15).unwrap();
        clock.restart();

        let update = clock.update(8, 20).unwrap();
        assert_eq!(update.intent, AnimationIntent::Appear);
        assert_eq!(update.sequence, 1);
    }

    #[test]
    fn test_format_change() {
        let mut clock = ClockFace::new(HourFormat::TwelveHour);
        assert_eq!(clock.update(13, 0).unwrap().time.hours(), 1);

        clock.set_format(HourFormat::TwentyFourHour);
        let update = clock.update(13, 1).unwrap();
        assert_eq!(update.time.hours(), 13);
        assert!(!update.assignment.is_in_flux(SlotIndex::TensOfHours));
    }
}

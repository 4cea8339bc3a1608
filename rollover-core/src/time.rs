//! Wall-clock to display-time resolution
//!
//! The clock source delivers a raw 24-hour reading; the face shows it in
//! the locale's 12- or 24-hour style.

use core::fmt;

use crate::digit::{Digit, DIGIT_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes per hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// Hours per day
pub const HOURS_PER_DAY: u8 = 24;

/// Hour display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourFormat {
    /// `1..=12`, midnight and noon both show as 12
    #[default]
    TwelveHour,
    /// `0..=23`
    TwentyFourHour,
}

impl HourFormat {
    /// Format from the platform's "use 24-hour time" flag
    pub const fn from_24h_flag(use_24_hour: bool) -> Self {
        if use_24_hour {
            HourFormat::TwentyFourHour
        } else {
            HourFormat::TwelveHour
        }
    }

    /// Check if this is the 24-hour style
    pub const fn is_24_hour(self) -> bool {
        matches!(self, HourFormat::TwentyFourHour)
    }

    /// Smallest displayable hour
    pub const fn min_hour(self) -> u8 {
        match self {
            HourFormat::TwelveHour => 1,
            HourFormat::TwentyFourHour => 0,
        }
    }

    /// Largest displayable hour
    pub const fn max_hour(self) -> u8 {
        match self {
            HourFormat::TwelveHour => 12,
            HourFormat::TwentyFourHour => 23,
        }
    }

    /// Map any hour count onto the display range
    ///
    /// Wraps past midnight, so `display_hour(24)` is 0 (24-hour) or 12
    /// (12-hour) and `display_hour(13)` is 1 in 12-hour style.
    pub const fn display_hour(self, hour: u8) -> u8 {
        match self {
            HourFormat::TwentyFourHour => hour % HOURS_PER_DAY,
            HourFormat::TwelveHour => {
                let h12 = hour % 12;
                if h12 == 0 {
                    12
                } else {
                    h12
                }
            }
        }
    }
}

impl From<bool> for HourFormat {
    fn from(use_24_hour: bool) -> Self {
        HourFormat::from_24h_flag(use_24_hour)
    }
}

/// Out-of-range time input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside the accepted range
    HourOutOfRange(u8),
    /// Minute outside `0..=59`
    MinuteOutOfRange(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::HourOutOfRange(hour) => write!(f, "hour {hour} out of range"),
            TimeError::MinuteOutOfRange(minute) => write!(f, "minute {minute} out of range"),
        }
    }
}

/// Hours and minutes as shown on the face
///
/// Always within the display range of the format it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayTime {
    hours: u8,
    minutes: u8,
}

impl DisplayTime {
    /// Build from an already resolved display value
    ///
    /// `hours` must be within the display range of `format`.
    pub fn new(hours: u8, minutes: u8, format: HourFormat) -> Result<Self, TimeError> {
        if hours < format.min_hour() || hours > format.max_hour() {
            return Err(TimeError::HourOutOfRange(hours));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange(minutes));
        }
        Ok(Self { hours, minutes })
    }

    /// Displayed hour
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Displayed minute
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The display value one minute later
    ///
    /// The hour only advances when the minutes wrap to zero.
    pub const fn next_minute(&self, format: HourFormat) -> Self {
        let minutes = (self.minutes + 1) % MINUTES_PER_HOUR;
        let hours = if minutes == 0 {
            format.display_hour(self.hours + 1)
        } else {
            format.display_hour(self.hours)
        };
        Self { hours, minutes }
    }

    /// Digits per slot: tens/ones of hours, tens/ones of minutes
    pub const fn digits(&self) -> [Digit; DIGIT_COUNT] {
        let (tens_hours, ones_hours) = Digit::split(self.hours);
        let (tens_minutes, ones_minutes) = Digit::split(self.minutes);
        [tens_hours, ones_hours, tens_minutes, ones_minutes]
    }
}

/// Resolve a raw 24-hour wall-clock reading into a display value
///
/// Out-of-range readings are rejected rather than wrapped.
pub fn resolve(raw_hour: u8, raw_minute: u8, format: HourFormat) -> Result<DisplayTime, TimeError> {
    if raw_hour >= HOURS_PER_DAY {
        return Err(TimeError::HourOutOfRange(raw_hour));
    }
    if raw_minute >= MINUTES_PER_HOUR {
        return Err(TimeError::MinuteOutOfRange(raw_minute));
    }

    Ok(DisplayTime {
        hours: format.display_hour(raw_hour),
        minutes: raw_minute,
    })
}

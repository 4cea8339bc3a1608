//! Digit and slot types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit slots on the face (`HH:MM`)
pub const DIGIT_COUNT: usize = 4;

/// A single decimal digit, `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero
    pub const ZERO: Digit = Digit(0);

    /// Create a digit, or `None` if `value > 9`
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Split a two-digit value into (tens, ones)
    ///
    /// Values above 99 keep only their last two digits.
    pub const fn split(value: u8) -> (Digit, Digit) {
        let value = value % 100;
        (Digit(value / 10), Digit(value % 10))
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the digit zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Content of one layer cell: a digit glyph or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitValue {
    /// No glyph shown
    #[default]
    Blank,
    /// A digit glyph
    Digit(Digit),
}

impl DigitValue {
    /// A digit that is hidden when it would be a leading zero
    pub const fn leading(digit: Digit) -> Self {
        if digit.is_zero() {
            DigitValue::Blank
        } else {
            DigitValue::Digit(digit)
        }
    }

    /// Check if no glyph is shown
    pub const fn is_blank(self) -> bool {
        matches!(self, DigitValue::Blank)
    }

    /// The digit, if any
    pub const fn digit(self) -> Option<Digit> {
        match self {
            DigitValue::Blank => None,
            DigitValue::Digit(digit) => Some(digit),
        }
    }

    /// ASCII character for text output (`' '` when blank)
    pub const fn as_char(self) -> char {
        match self {
            DigitValue::Blank => ' ',
            DigitValue::Digit(digit) => (b'0' + digit.0) as char,
        }
    }
}

impl From<Digit> for DigitValue {
    fn from(digit: Digit) -> Self {
        DigitValue::Digit(digit)
    }
}

/// Digit position on the face, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlotIndex {
    /// Tens of hours (leading digit, may be absent)
    TensOfHours = 0,
    /// Ones of hours
    OnesOfHours = 1,
    /// Tens of minutes
    TensOfMinutes = 2,
    /// Ones of minutes
    OnesOfMinutes = 3,
}

impl SlotIndex {
    /// All slots, left to right
    pub const ALL: [SlotIndex; DIGIT_COUNT] = [
        SlotIndex::TensOfHours,
        SlotIndex::OnesOfHours,
        SlotIndex::TensOfMinutes,
        SlotIndex::OnesOfMinutes,
    ];

    /// Ordinal position (0 = leftmost)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot at an ordinal position
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SlotIndex::TensOfHours),
            1 => Some(SlotIndex::OnesOfHours),
            2 => Some(SlotIndex::TensOfMinutes),
            3 => Some(SlotIndex::OnesOfMinutes),
            _ => None,
        }
    }

    /// Check if this is the leading (suppressible) slot
    pub const fn is_leading(self) -> bool {
        matches!(self, SlotIndex::TensOfHours)
    }
}

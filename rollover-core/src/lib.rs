//! Board-agnostic core logic for the Rollover clock face
//!
//! This crate contains everything that decides *what* the face shows,
//! independent of how it is painted:
//!
//! - Digit and slot types for the four `HH:MM` positions
//! - Wall-clock to display-time resolution (12/24-hour)
//! - The three-layer slot assignment (static, outgoing, incoming)
//! - The transition engine that computes which digits roll on a tick
//!
//! # Layers
//!
//! ```text
//!            ┌────┬────┬─┬────┬────┐
//!  outgoing  │    │  9 │ │  5 │  9 │   slides up and out
//!            ├────┼────┼─┼────┼────┤
//!  static    │    │    │:│    │    │   digits that do not change
//!            ├────┼────┼─┼────┼────┤
//!  incoming  │  1 │  0 │ │  0 │  0 │   slides up into place
//!            └────┴────┴─┴────┴────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod assignment;
pub mod digit;
pub mod engine;
pub mod time;

pub use assignment::{Layer, SlotAssignment, SlotCells};
pub use digit::{Digit, DigitValue, SlotIndex, DIGIT_COUNT};
pub use engine::{compute_assignment, AnimationIntent};
pub use time::{resolve, DisplayTime, HourFormat, TimeError};

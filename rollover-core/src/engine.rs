//! Digit-transition engine
//!
//! Decides, for one tick, which digits stay on the static layer and which
//! roll from the outgoing to the incoming layer. The engine is a pure
//! function of its inputs; it keeps no state between ticks.
//!
//! # Cascade
//!
//! Slots are visited right to left with a running carry. Ones-of-minutes
//! always rolls. Each slower slot rolls only when the faster slot to its
//! right rolls *and* wraps to zero:
//!
//! ```text
//!   12:59 -> 1:00     09:59 -> 10:00     10:05 -> 10:06
//!   [1][2]:[5][9]     [ ][9]:[5][9]      [1][0]:[0][5]
//!    ^  ^   ^  ^       ^  ^   ^  ^                   ^
//!    roll all four     roll all four     only the last slot
//! ```
//!
//! The leading tens-of-hours slot additionally rolls whenever the hour
//! changes and its own digit changes with it, which covers the 12-hour
//! wrap where the leading `1` disappears without a carry.

use crate::assignment::{SlotAssignment, SlotCells};
use crate::digit::{Digit, DigitValue, SlotIndex};
use crate::time::{DisplayTime, HourFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the renderer should slide the moving layer for this assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnimationIntent {
    /// Show the assignment immediately (start-up)
    Appear,
    /// Play the slide
    Slide,
}

impl AnimationIntent {
    /// Intent for a computation, given whether it is the start-up one
    pub const fn for_tick(is_initial: bool) -> Self {
        if is_initial {
            AnimationIntent::Appear
        } else {
            AnimationIntent::Slide
        }
    }

    /// Check if a slide should play
    pub const fn is_animated(self) -> bool {
        matches!(self, AnimationIntent::Slide)
    }
}

/// Compute the layer assignment for `current` and whether to animate it
///
/// `is_initial` marks the start-up computation: the assignment is fully
/// populated but no slide is requested.
pub fn compute_assignment(
    current: DisplayTime,
    format: HourFormat,
    is_initial: bool,
) -> (SlotAssignment, AnimationIntent) {
    let from = current.digits();
    let to = current.next_minute(format).digits();

    let mut assignment = SlotAssignment::blank();
    for slot in SlotIndex::ALL {
        let value = cell_value(slot, from[slot.index()]);
        assignment.set_slot(slot, SlotCells::fixed(value));
    }

    // Ones-of-minutes changes on every tick
    let mut carry = true;

    for slot in SlotIndex::ALL.into_iter().rev() {
        let i = slot.index();
        // Reaching the leading slot means the hour rolled
        let leading_changes = slot.is_leading() && from[i] != to[i];

        if !(carry || leading_changes) {
            break;
        }

        assignment.set_slot(
            slot,
            SlotCells::rolling(cell_value(slot, from[i]), cell_value(slot, to[i])),
        );

        carry = to[i].is_zero();
    }

    (assignment, AnimationIntent::for_tick(is_initial))
}

/// What a digit looks like in its slot (leading zero hidden)
fn cell_value(slot: SlotIndex, digit: Digit) -> DigitValue {
    if slot.is_leading() {
        DigitValue::leading(digit)
    } else {
        DigitValue::Digit(digit)
    }
}

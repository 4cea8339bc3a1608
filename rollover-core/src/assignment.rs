//! Three-layer slot assignment
//!
//! A [`SlotAssignment`] is the complete picture for one tick: for every
//! layer and every slot, the digit (or blank) to show. It replaces the
//! previous assignment wholesale.

use crate::digit::{DigitValue, SlotIndex, DIGIT_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of layers
pub const LAYER_COUNT: usize = 3;

/// Visual layer of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layer {
    /// Digits that stay put this tick
    Static = 0,
    /// Digits sliding out ("pushee")
    Outgoing = 1,
    /// Digits sliding in ("pusher")
    Incoming = 2,
}

impl Layer {
    /// All layers
    pub const ALL: [Layer; LAYER_COUNT] = [Layer::Static, Layer::Outgoing, Layer::Incoming];

    /// Check if this layer moves during a slide
    pub const fn is_moving(self) -> bool {
        !matches!(self, Layer::Static)
    }
}

/// The three cells of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotCells {
    /// Static layer cell
    pub stationary: DigitValue,
    /// Outgoing layer cell
    pub outgoing: DigitValue,
    /// Incoming layer cell
    pub incoming: DigitValue,
}

impl SlotCells {
    /// A slot that does not change: value on the static layer only
    pub const fn fixed(value: DigitValue) -> Self {
        Self {
            stationary: value,
            outgoing: DigitValue::Blank,
            incoming: DigitValue::Blank,
        }
    }

    /// A slot in flux: nothing static, `from` slides out, `to` slides in
    pub const fn rolling(from: DigitValue, to: DigitValue) -> Self {
        Self {
            stationary: DigitValue::Blank,
            outgoing: from,
            incoming: to,
        }
    }

    /// Cell on a given layer
    pub const fn get(&self, layer: Layer) -> DigitValue {
        match layer {
            Layer::Static => self.stationary,
            Layer::Outgoing => self.outgoing,
            Layer::Incoming => self.incoming,
        }
    }

    /// Value shown once the slide has finished
    pub const fn settled(&self) -> DigitValue {
        if self.is_moving() {
            self.incoming
        } else {
            self.stationary
        }
    }

    /// Check if either moving layer holds a glyph
    pub const fn is_moving(&self) -> bool {
        !self.outgoing.is_blank() || !self.incoming.is_blank()
    }
}

/// `Layer x SlotIndex -> DigitValue` mapping for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotAssignment {
    /// Cells indexed by `[layer][slot]`
    cells: [[DigitValue; DIGIT_COUNT]; LAYER_COUNT],
}

impl SlotAssignment {
    /// An assignment with every cell blank
    pub const fn blank() -> Self {
        Self {
            cells: [[DigitValue::Blank; DIGIT_COUNT]; LAYER_COUNT],
        }
    }

    /// Cell at a layer and slot
    pub const fn get(&self, layer: Layer, slot: SlotIndex) -> DigitValue {
        self.cells[layer as usize][slot as usize]
    }

    /// Set a single cell
    pub fn set(&mut self, layer: Layer, slot: SlotIndex, value: DigitValue) {
        self.cells[layer as usize][slot as usize] = value;
    }

    /// Set all three cells of a slot
    pub fn set_slot(&mut self, slot: SlotIndex, cells: SlotCells) {
        self.set(Layer::Static, slot, cells.stationary);
        self.set(Layer::Outgoing, slot, cells.outgoing);
        self.set(Layer::Incoming, slot, cells.incoming);
    }

    /// All three cells of a slot
    pub const fn slot(&self, slot: SlotIndex) -> SlotCells {
        SlotCells {
            stationary: self.get(Layer::Static, slot),
            outgoing: self.get(Layer::Outgoing, slot),
            incoming: self.get(Layer::Incoming, slot),
        }
    }

    /// The four cells of a layer, left to right
    pub const fn layer(&self, layer: Layer) -> &[DigitValue; DIGIT_COUNT] {
        &self.cells[layer as usize]
    }

    /// Check if a slot rolls this tick
    pub const fn is_in_flux(&self, slot: SlotIndex) -> bool {
        self.slot(slot).is_moving()
    }

    /// Slots that roll this tick, left to right
    pub fn in_flux(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        SlotIndex::ALL
            .into_iter()
            .filter(move |slot| self.is_in_flux(*slot))
    }

    /// Check if any moving layer holds a glyph
    pub fn has_motion(&self) -> bool {
        self.in_flux().next().is_some()
    }

    /// Values shown once the slide has finished, left to right
    pub fn settled(&self) -> [DigitValue; DIGIT_COUNT] {
        SlotIndex::ALL.map(|slot| self.slot(slot).settled())
    }

    /// Cells whose value differs from `previous`
    pub fn changed_cells<'a>(
        &'a self,
        previous: &'a SlotAssignment,
    ) -> impl Iterator<Item = (Layer, SlotIndex, DigitValue)> + 'a {
        Layer::ALL.into_iter().flat_map(move |layer| {
            SlotIndex::ALL.into_iter().filter_map(move |slot| {
                let value = self.get(layer, slot);
                (value != previous.get(layer, slot)).then_some((layer, slot, value))
            })
        })
    }

    /// Every cell, layer by layer
    pub fn cells(&self) -> impl Iterator<Item = (Layer, SlotIndex, DigitValue)> + '_ {
        Layer::ALL.into_iter().flat_map(move |layer| {
            SlotIndex::ALL
                .into_iter()
                .map(move |slot| (layer, slot, self.get(layer, slot)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;

    fn d(value: u8) -> DigitValue {
        DigitValue::Digit(Digit::new(value).unwrap())
    }

    #[test]
    fn test_blank_default() {
        let assignment = SlotAssignment::default();
        assert_eq!(assignment, SlotAssignment::blank());
        assert!(assignment.cells().all(|(_, _, value)| value.is_blank()));
        assert!(!assignment.has_motion());
    }

    #[test]
    fn test_set_slot() {
        let mut assignment = SlotAssignment::blank();
        assignment.set_slot(SlotIndex::OnesOfMinutes, SlotCells::rolling(d(4), d(5)));
        assignment.set_slot(SlotIndex::TensOfMinutes, SlotCells::fixed(d(3)));

        assert_eq!(assignment.get(Layer::Outgoing, SlotIndex::OnesOfMinutes), d(4));
        assert_eq!(assignment.get(Layer::Incoming, SlotIndex::OnesOfMinutes), d(5));
        assert!(assignment.get(Layer::Static, SlotIndex::OnesOfMinutes).is_blank());
        assert_eq!(assignment.layer(Layer::Static)[2], d(3));
        assert!(assignment.is_in_flux(SlotIndex::OnesOfMinutes));
        assert!(!assignment.is_in_flux(SlotIndex::TensOfMinutes));
    }

    #[test]
    fn test_in_flux_order() {
        let mut assignment = SlotAssignment::blank();
        assignment.set_slot(SlotIndex::OnesOfMinutes, SlotCells::rolling(d(9), d(0)));
        assignment.set_slot(SlotIndex::TensOfMinutes, SlotCells::rolling(d(2), d(3)));

        let mut flux = assignment.in_flux();
        assert_eq!(flux.next(), Some(SlotIndex::TensOfMinutes));
        assert_eq!(flux.next(), Some(SlotIndex::OnesOfMinutes));
        assert_eq!(flux.next(), None);
    }

    #[test]
    fn test_settled() {
        let mut assignment = SlotAssignment::blank();
        assignment.set_slot(SlotIndex::OnesOfHours, SlotCells::fixed(d(7)));
        assignment.set_slot(SlotIndex::TensOfMinutes, SlotCells::fixed(d(4)));
        assignment.set_slot(SlotIndex::OnesOfMinutes, SlotCells::rolling(d(1), d(2)));

        assert_eq!(assignment.settled(), [DigitValue::Blank, d(7), d(4), d(2)]);
    }

    #[test]
    fn test_changed_cells() {
        let mut previous = SlotAssignment::blank();
        previous.set_slot(SlotIndex::OnesOfMinutes, SlotCells::rolling(d(1), d(2)));

        let mut next = previous;
        next.set_slot(SlotIndex::OnesOfMinutes, SlotCells::rolling(d(2), d(3)));

        let mut changed = next.changed_cells(&previous);
        assert_eq!(
            changed.next(),
            Some((Layer::Outgoing, SlotIndex::OnesOfMinutes, d(2)))
        );
        assert_eq!(
            changed.next(),
            Some((Layer::Incoming, SlotIndex::OnesOfMinutes, d(3)))
        );
        assert_eq!(changed.next(), None);
        assert_eq!(next.changed_cells(&next).count(), 0);
    }

    #[test]
    fn test_layer_is_moving() {
        assert!(!Layer::Static.is_moving());
        assert!(Layer::Outgoing.is_moving());
        assert!(Layer::Incoming.is_moving());
    }
}

//! Face geometry
//!
//! Pixel layout of the 144x168 face. Digits sit in a horizontal band; the
//! static layer is fixed in that band while the moving layer (outgoing on
//! top, incoming one digit-height plus spacing below) slides upward.
//!
//! ```text
//!  y=20  ┌──────────────┐  moving layer end (outgoing gone above band)
//!        │   outgoing   │
//!  y=65  ├══════════════┤  digit band / moving layer start
//!        │    static    │
//!  y=103 ├══════════════┤
//!  y=110 │   incoming   │
//!        └──────────────┘
//! ```

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use rollover_core::{Layer, SlotIndex, DIGIT_COUNT};

/// Face width in pixels
pub const FACE_WIDTH: u32 = 144;

/// Face height in pixels
pub const FACE_HEIGHT: u32 = 168;

/// Top of the digit band
pub const DIGIT_Y: i32 = 65;

/// Digit cell width
pub const DIGIT_W: u32 = 30;

/// Digit cell height
pub const DIGIT_H: u32 = 38;

/// Vertical gap between the outgoing and incoming rows
pub const CONTAINER_SPACING: i32 = 7;

/// Left edge of each digit slot
pub const SLOT_X: [i32; DIGIT_COUNT] = [4, 36, 78, 110];

/// Colon cell
pub const COLON: Rectangle = Rectangle::new(Point::new(68, 72), Size::new(8, 25));

/// Offset of the incoming row inside the moving layer
pub const INCOMING_OFFSET_Y: i32 = DIGIT_H as i32 + CONTAINER_SPACING;

/// Moving layer position before a slide
pub const MOVING_START_Y: i32 = DIGIT_Y;

/// Moving layer position after a slide
pub const MOVING_END_Y: i32 = DIGIT_Y - DIGIT_H as i32 - CONTAINER_SPACING;

/// Top of a layer's digit row, given the moving layer position
pub const fn layer_y(layer: Layer, moving_y: i32) -> i32 {
    match layer {
        Layer::Static => DIGIT_Y,
        Layer::Outgoing => moving_y,
        Layer::Incoming => moving_y + INCOMING_OFFSET_Y,
    }
}

/// Digit cell of a slot on a layer
pub const fn slot_rect(layer: Layer, slot: SlotIndex, moving_y: i32) -> Rectangle {
    Rectangle::new(
        Point::new(SLOT_X[slot.index()], layer_y(layer, moving_y)),
        Size::new(DIGIT_W, DIGIT_H),
    )
}

/// The whole face
pub const fn face_bounds() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(FACE_WIDTH, FACE_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_layer_travel() {
        assert_eq!(MOVING_START_Y, 65);
        assert_eq!(MOVING_END_Y, 20);
        // At the end of a slide the incoming row sits in the digit band
        assert_eq!(layer_y(Layer::Incoming, MOVING_END_Y), DIGIT_Y);
        // At the start the outgoing row does
        assert_eq!(layer_y(Layer::Outgoing, MOVING_START_Y), DIGIT_Y);
    }

    #[test]
    fn test_slots_fit_face() {
        for slot in SlotIndex::ALL {
            let rect = slot_rect(Layer::Static, slot, MOVING_START_Y);
            let bottom_right = rect.bottom_right().unwrap();
            assert!(bottom_right.x < FACE_WIDTH as i32);
            assert!(bottom_right.y < FACE_HEIGHT as i32);
        }
    }

    #[test]
    fn test_colon_between_hours_and_minutes() {
        let hours = slot_rect(Layer::Static, SlotIndex::OnesOfHours, MOVING_START_Y);
        let minutes = slot_rect(Layer::Static, SlotIndex::TensOfMinutes, MOVING_START_Y);
        assert!(COLON.top_left.x >= hours.top_left.x + DIGIT_W as i32);
        assert!(COLON.top_left.x + COLON.size.width as i32 <= minutes.top_left.x);
    }
}

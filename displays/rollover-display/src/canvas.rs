//! Framebuffer backend
//!
//! Renders the face onto any monochrome `embedded-graphics` draw target.
//! Digits are drawn as seven-segment glyphs filling the 30x38 cell; blank
//! cells draw nothing, so the layers can overlap freely.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::transform::Transform;
use rollover_core::{DigitValue, Layer, SlotAssignment, SlotIndex};

use crate::backend::{DisplayError, FaceBackend};
use crate::layout::{self, COLON, MOVING_START_Y};
use crate::slide::SlideAnimation;

/// Segment stroke thickness
const STROKE: u32 = 4;

/// Lit segments per digit, bit 0 = a ... bit 6 = g
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Segment rectangles relative to the cell origin, in a..g order
const SEGMENT_RECTS: [Rectangle; 7] = [
    Rectangle::new(Point::new(4, 0), Size::new(22, STROKE)),
    Rectangle::new(Point::new(26, 4), Size::new(STROKE, 15)),
    Rectangle::new(Point::new(26, 19), Size::new(STROKE, 15)),
    Rectangle::new(Point::new(4, 34), Size::new(22, STROKE)),
    Rectangle::new(Point::new(0, 19), Size::new(STROKE, 15)),
    Rectangle::new(Point::new(0, 4), Size::new(STROKE, 15)),
    Rectangle::new(Point::new(4, 17), Size::new(22, STROKE)),
];

/// Colon dot size
const DOT: Size = Size::new(8, 8);

/// Face backend drawing into an `embedded-graphics` target
///
/// Glyph and slide calls only update the backend's state; pixels change on
/// [`CanvasBackend::draw`] (and on `flush`, which draws the start frame of
/// the current slide). A caller driving a real panel keeps calling `draw`
/// with the time since the last update to move the layer.
pub struct CanvasBackend<D> {
    target: D,
    cells: SlotAssignment,
    slide: Option<SlideAnimation>,
}

impl<D> CanvasBackend<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self {
            target,
            cells: SlotAssignment::blank(),
            slide: None,
        }
    }

    /// The wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// The wrapped target, mutably (for flushing a panel driver)
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Glyphs currently set
    pub fn cells(&self) -> &SlotAssignment {
        &self.cells
    }

    /// Slide in progress, if any
    pub fn slide(&self) -> Option<&SlideAnimation> {
        self.slide.as_ref()
    }

    /// Moving layer position `elapsed_ms` after the last update
    pub fn moving_y(&self, elapsed_ms: u32) -> i32 {
        match &self.slide {
            Some(slide) => slide.offset_at(elapsed_ms),
            None => MOVING_START_Y,
        }
    }

    /// Redraw the whole face `elapsed_ms` after the last update
    pub fn draw(&mut self, elapsed_ms: u32) -> Result<(), D::Error> {
        let moving_y = self.moving_y(elapsed_ms);

        self.target.clear(BinaryColor::Off)?;
        self.draw_colon()?;

        for layer in Layer::ALL {
            for slot in SlotIndex::ALL {
                let origin = layout::slot_rect(layer, slot, moving_y).top_left;
                self.draw_glyph(origin, self.cells.get(layer, slot))?;
            }
        }

        Ok(())
    }

    fn draw_colon(&mut self) -> Result<(), D::Error> {
        let top = Rectangle::new(COLON.top_left, DOT);
        let bottom_y = COLON.top_left.y + (COLON.size.height - DOT.height) as i32;
        let bottom = Rectangle::new(Point::new(COLON.top_left.x, bottom_y), DOT);
        self.fill(&top)?;
        self.fill(&bottom)
    }

    fn draw_glyph(&mut self, origin: Point, value: DigitValue) -> Result<(), D::Error> {
        let Some(digit) = value.digit() else {
            return Ok(());
        };
        let mask = SEGMENTS[digit.value() as usize];
        for (bit, segment) in SEGMENT_RECTS.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                self.fill(&segment.translate(origin))?;
            }
        }
        Ok(())
    }

    /// Fill the visible part of `area`
    fn fill(&mut self, area: &Rectangle) -> Result<(), D::Error> {
        let visible = area.intersection(&self.target.bounding_box());
        if visible.is_zero_sized() {
            return Ok(());
        }
        self.target.fill_solid(&visible, BinaryColor::On)
    }
}

impl<D> FaceBackend for CanvasBackend<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn set_glyph(
        &mut self,
        layer: Layer,
        slot: SlotIndex,
        value: DigitValue,
    ) -> Result<(), DisplayError> {
        self.cells.set(layer, slot, value);
        Ok(())
    }

    fn start_slide(&mut self, slide: &SlideAnimation) -> Result<(), DisplayError> {
        self.slide = Some(*slide);
        Ok(())
    }

    fn reset_slide(&mut self) -> Result<(), DisplayError> {
        self.slide = None;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.draw(0).map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{Face, FaceUpdate};
    use crate::layout::{DIGIT_Y, FACE_HEIGHT, FACE_WIDTH, MOVING_END_Y, SLOT_X};
    use embedded_graphics::geometry::OriginDimensions;
    use embedded_graphics::primitives::PointsIter;
    use embedded_graphics::Pixel;
    use rollover_core::{compute_assignment, resolve, HourFormat};

    const W: usize = FACE_WIDTH as usize;
    const H: usize = FACE_HEIGHT as usize;

    struct Frame {
        pixels: [[bool; W]; H],
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: [[false; W]; H],
            }
        }

        fn lit_in(&self, area: Rectangle) -> usize {
            area.points()
                .filter(|p| p.x >= 0 && p.y >= 0 && (p.x as usize) < W && (p.y as usize) < H)
                .filter(|p| self.pixels[p.y as usize][p.x as usize])
                .count()
        }

        fn lit(&self) -> usize {
            self.pixels.iter().flatten().filter(|&&on| on).count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(FACE_WIDTH, FACE_HEIGHT)
        }
    }

    impl DrawTarget for Frame {
        type Color = BinaryColor;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as usize) < W && (point.y as usize) < H
                {
                    self.pixels[point.y as usize][point.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn update(sequence: u32, hour: u8, minute: u8, initial: bool) -> FaceUpdate {
        let format = HourFormat::TwelveHour;
        let time = resolve(hour, minute, format).unwrap();
        let (assignment, intent) = compute_assignment(time, format, initial);
        FaceUpdate {
            sequence,
            time,
            assignment,
            intent,
        }
    }

    fn band(slot: SlotIndex, y: i32) -> Rectangle {
        Rectangle::new(
            Point::new(SLOT_X[slot.index()], y),
            Size::new(layout::DIGIT_W, layout::DIGIT_H),
        )
    }

    // Segments b and c
    const ONE_PIXELS: usize = 2 * 4 * 15;
    // Segments a, d and g plus b and e
    const TWO_PIXELS: usize = 3 * 22 * 4 + 2 * 4 * 15;
    const COLON_PIXELS: usize = 2 * 8 * 8;

    #[test]
    fn test_blank_face_shows_colon_only() {
        let mut canvas = CanvasBackend::new(Frame::new());
        canvas.draw(0).unwrap();
        assert_eq!(canvas.target().lit(), COLON_PIXELS);
        assert_eq!(canvas.target().lit_in(COLON), COLON_PIXELS);
    }

    #[test]
    fn test_initial_face_renders_digits() {
        let mut canvas = CanvasBackend::new(Frame::new());
        let mut face = Face::new();

        // 1:11 shows three ones and a blank leading slot, with the next
        // minute's 2 waiting below the band
        face.apply(&update(0, 1, 11, true), &mut canvas).unwrap();

        let target = canvas.target();
        assert_eq!(target.lit_in(band(SlotIndex::TensOfHours, DIGIT_Y)), 0);
        assert_eq!(target.lit_in(band(SlotIndex::OnesOfHours, DIGIT_Y)), ONE_PIXELS);
        assert_eq!(target.lit_in(band(SlotIndex::OnesOfMinutes, DIGIT_Y)), ONE_PIXELS);
        assert_eq!(target.lit(), 3 * ONE_PIXELS + TWO_PIXELS + COLON_PIXELS);
    }

    #[test]
    fn test_slide_moves_incoming_into_band() {
        let mut canvas = CanvasBackend::new(Frame::new());
        let mut face = Face::new();

        // At 1:11 only the ones of minutes rolls, from 1 to 2
        face.apply(&update(0, 1, 11, false), &mut canvas).unwrap();
        assert!(canvas.slide().is_some());
        let slot = SlotIndex::OnesOfMinutes;

        // Start frame: outgoing "1" sits in the band
        canvas.draw(0).unwrap();
        assert_eq!(canvas.target().lit_in(band(slot, DIGIT_Y)), ONE_PIXELS);

        // End frame: outgoing has moved above, incoming fills the band
        canvas.draw(60_000).unwrap();
        assert_eq!(canvas.moving_y(60_000), MOVING_END_Y);
        assert_eq!(canvas.target().lit_in(band(slot, MOVING_END_Y)), ONE_PIXELS);
        assert_eq!(canvas.target().lit_in(band(slot, DIGIT_Y)), TWO_PIXELS);
    }

    #[test]
    fn test_initial_update_resets_slide() {
        let mut canvas = CanvasBackend::new(Frame::new());
        let mut face = Face::new();

        face.apply(&update(0, 1, 10, false), &mut canvas).unwrap();
        assert!(canvas.slide().is_some());

        face.apply(&update(1, 1, 10, true), &mut canvas).unwrap();
        assert!(canvas.slide().is_none());
        assert_eq!(canvas.moving_y(30_000), MOVING_START_Y);
    }

    struct Unplugged;

    impl OriginDimensions for Unplugged {
        fn size(&self) -> Size {
            Size::new(FACE_WIDTH, FACE_HEIGHT)
        }
    }

    impl DrawTarget for Unplugged {
        type Color = BinaryColor;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    #[test]
    fn test_target_failure_reported_on_flush() {
        let mut canvas = CanvasBackend::new(Unplugged);
        let mut face = Face::new();

        // Cells are only buffered; the target is touched on flush
        assert!(canvas
            .set_glyph(Layer::Static, SlotIndex::OnesOfMinutes, DigitValue::Blank)
            .is_ok());
        assert_eq!(canvas.flush(), Err(DisplayError::Communication));

        let result = face.apply(&update(0, 1, 11, true), &mut canvas);
        assert_eq!(
            result,
            Err(crate::face::FaceError::Display(DisplayError::Communication))
        );
        assert_eq!(face.last_sequence(), None);
    }

    #[test]
    fn test_glyphs_stay_inside_cell() {
        for (bit, segment) in SEGMENT_RECTS.iter().enumerate() {
            let bottom_right = segment.bottom_right().unwrap();
            assert!(bottom_right.x < layout::DIGIT_W as i32, "segment {bit}");
            assert!(bottom_right.y < layout::DIGIT_H as i32, "segment {bit}");
        }
    }
}

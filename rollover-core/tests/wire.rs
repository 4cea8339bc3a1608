//! Compact wire form of assignments handed to a remote renderer

#![cfg(feature = "serde")]

use rollover_core::{compute_assignment, resolve, AnimationIntent, Digit, HourFormat, SlotAssignment};

#[test]
fn assignment_fits_a_small_frame() {
    let format = HourFormat::TwelveHour;
    let time = resolve(12, 59, format).unwrap();
    let (assignment, intent) = compute_assignment(time, format, false);

    let mut buf = [0u8; 64];
    let used = postcard::to_slice(&(assignment, intent), &mut buf).unwrap().len();
    // 12 cells, each a variant tag plus at most one digit byte, plus the intent
    assert!(used <= 25, "encoded {used} bytes");

    let (decoded, decoded_intent): (SlotAssignment, AnimationIntent) =
        postcard::from_bytes(&buf[..used]).unwrap();
    assert_eq!(decoded, assignment);
    assert_eq!(decoded_intent, AnimationIntent::Slide);
}

#[test]
fn out_of_range_digit_is_rejected() {
    // A bare digit byte of 12
    let result: Result<Digit, _> = postcard::from_bytes(&[12]);
    assert!(result.is_err());
}

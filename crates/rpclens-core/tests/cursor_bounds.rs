//! ByteCursor bounds behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpclens_core::cursor::ByteCursor;

#[test]
fn advance_within_bounds() {
    let buf = [1u8, 2, 3, 4];
    let mut c = ByteCursor::new(&buf);
    c.advance(3).unwrap();
    assert_eq!(c.remaining(), 1);
    assert_eq!(c.consumed(), 3);
    assert_eq!(c.peek(), Some(4));
}

#[test]
fn advance_past_end_is_rejected_and_cursor_unchanged() {
    let buf = [1u8, 2];
    let mut c = ByteCursor::new(&buf);
    assert!(c.advance(3).is_err());
    assert_eq!(c.remaining(), 2);
    assert_eq!(c.consumed(), 0);
}

#[test]
fn advance_to_exact_end() {
    let buf = [9u8; 5];
    let mut c = ByteCursor::new(&buf);
    c.advance(5).unwrap();
    assert!(c.is_empty());
    assert_eq!(c.take_u8(), None);
    assert_eq!(c.peek(), None);
}

#[test]
fn take_u8_consumes_one_byte() {
    let buf = [0x40u8, 0x8b];
    let mut c = ByteCursor::new(&buf);
    assert_eq!(c.take_u8(), Some(0x40));
    assert_eq!(c.remaining(), 1);
    assert_eq!(c.rest(), &[0x8b]);
}

#[test]
fn consume_all_empties_but_keeps_consumed_count() {
    let buf = [0u8; 7];
    let mut c = ByteCursor::new(&buf);
    c.advance(2).unwrap();
    c.consume_all();
    assert!(c.is_empty());
    assert_eq!(c.consumed(), 7);
}

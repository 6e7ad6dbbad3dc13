use super::*;

#[test]
fn test_span_len_and_empty() {
    let span = Span::new(3, 9);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert!(Span::point(4).is_empty());
}

#[test]
fn test_try_from_range_overflow() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..big),
        Err(SpanError::EndTooLarge(big))
    );
    assert_eq!(Span::try_from_range(2..7), Ok(Span::new(2, 7)));
}

#[test]
fn test_saturating_from_range_clamps() {
    let big = u32::MAX as usize + 10;
    assert_eq!(
        Span::saturating_from_range(1..big),
        Span::new(1, u32::MAX)
    );
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(1, 4).to_string(), "1..4");
    assert_eq!(Span::new(1, 4).to_range(), 1..4);
}

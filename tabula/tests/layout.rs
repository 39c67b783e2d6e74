use tabula::Rect;

#[test]
fn test_shrink_moves_origin_and_narrows() {
    let rect = Rect::new(2, 3, 10, 6).shrink(1, 2, 1, 2);
    assert_eq!(rect, Rect::new(4, 4, 6, 4));
}

#[test]
fn test_shrink_saturates_to_empty() {
    let rect = Rect::new(0, 0, 3, 2).shrink(2, 2, 2, 2);
    assert!(rect.is_empty());
}

#[test]
fn test_inner_is_one_cell_border() {
    assert_eq!(Rect::new(0, 0, 10, 5).inner(), Rect::new(1, 1, 8, 3));
}

#[test]
fn test_contains_edges() {
    let rect = Rect::new(2, 2, 4, 3);
    assert!(rect.contains(2, 2));
    assert!(rect.contains(5, 4));
    assert!(!rect.contains(6, 2));
    assert!(!rect.contains(2, 5));
    assert!(!rect.contains(1, 2));
}

#[test]
fn test_empty_rect_contains_nothing() {
    let rect = Rect::new(3, 3, 0, 5);
    assert!(!rect.contains(3, 3));
}

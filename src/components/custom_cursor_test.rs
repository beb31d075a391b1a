use super::*;

#[test]
fn centered_transform_offsets_by_half_size() {
    assert_eq!(
        centered_transform(Point::new(100.0, 50.0), DOT_SIZE_PX),
        "translate3d(96px, 46px, 0)"
    );
    assert_eq!(
        centered_transform(Point::new(100.0, 50.0), RING_SIZE_PX),
        "translate3d(80px, 30px, 0)"
    );
}

#[test]
fn dot_style_fills_with_cursor_color() {
    let style = dot_style(Point::new(4.0, 4.0), "#2d2d2d");
    assert_eq!(style, "background-color: #2d2d2d; transform: translate3d(0px, 0px, 0);");
}

#[test]
fn ring_style_outlines_with_cursor_color() {
    let style = ring_style(Point::new(20.0, 20.0), "#f5f5f5");
    assert_eq!(style, "border-color: #f5f5f5; transform: translate3d(0px, 0px, 0);");
}

#[test]
fn fractional_positions_are_preserved() {
    assert_eq!(
        centered_transform(Point::new(10.5, 7.25), DOT_SIZE_PX),
        "translate3d(6.5px, 3.25px, 0)"
    );
}

use super::*;
use crate::foundation::core::Direction;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn approx_pt(a: Point, b: Point) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}

fn glyph(s: &str) -> Node {
    Node::text(s, "mono", 48.0, (0.5, 0.6), Color::WHITE)
}

#[test]
fn group_bounds_follow_children() {
    let mut a = glyph("1");
    let mut b = glyph("2");
    a.move_to(Point::new(-1.0, 0.0));
    b.move_to(Point::new(1.0, 0.0));
    let mut g = Node::group(vec![a, b]);
    assert_eq!(g.bounds(), Rect::new(-1.25, -0.3, 1.25, 0.3));

    g.shift(Vec2::new(0.0, 2.0));
    assert!(approx_pt(g.center(), Point::new(0.0, 2.0)));
    assert!(approx_pt(g.children()[0].center(), Point::new(-1.0, 2.0)));
}

#[test]
fn scaling_about_a_point_moves_and_resizes_leaves() {
    let mut g = glyph("7");
    g.move_to(Point::new(2.0, 0.0));
    g.scale_about(2.0, Point::ORIGIN);
    assert!(approx_pt(g.center(), Point::new(4.0, 0.0)));
    assert!(approx(g.bounds().width(), 1.0));
    match &g.kind {
        NodeKind::Text { font_size, .. } => assert_eq!(*font_size, 96.0),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn opacity_is_clamped_and_reported_per_group() {
    let mut g = Node::group(vec![glyph("a"), glyph("b")]);
    g.set_opacity(3.0);
    assert_eq!(g.opacity(), 1.0);
    g.set_opacity(0.25);
    assert!(g.leaves().iter().all(|l| l.style.fill_opacity == 0.25));
    assert_eq!(g.opacity(), 0.25);
}

#[test]
fn outline_shapes_keep_zero_fill_until_told_otherwise() {
    let mut r = Node::rounded_rectangle(1.0, 1.0, 0.1, Style::outline(Color::WHITE, 2.0));
    assert_eq!(r.style.fill_opacity, 0.0);
    r.set_color(Color::RED);
    assert_eq!(r.style.stroke_color, Color::RED);
    assert_eq!(r.style.fill_opacity, 0.0);
}

#[test]
fn align_and_next_to_use_edges() {
    let anchor = glyph("x");
    let mut other = glyph("y");
    other.move_to(Point::new(5.0, 3.0));
    other.align_to(anchor.bounds(), Direction::Left);
    assert!(approx(other.bounds().x0, anchor.bounds().x0));
    assert!(approx(other.center().y, 3.0));

    other.next_to(anchor.bounds(), Direction::Down, 0.5);
    assert!(approx(other.bounds().y1, anchor.bounds().y0 - 0.5));
    assert!(approx(other.center().x, anchor.center().x));
}

#[test]
fn clones_are_independent() {
    let original = Node::group(vec![glyph("a")]);
    let mut copy = original.clone();
    copy.set_color(Color::GREEN);
    assert_eq!(original.leaves()[0].style.fill_color, Color::WHITE);
    assert_eq!(copy.leaves()[0].style.fill_color, Color::GREEN);
}

#[test]
fn empty_group_sits_at_origin() {
    let g = Node::group(Vec::new());
    assert_eq!(g.bounds(), Rect::ZERO);
    assert_eq!(g.opacity(), 0.0);
}

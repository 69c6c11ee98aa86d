use super::*;
use crate::{
    foundation::core::Point,
    visual::node::{Node, Style},
    visual::op::Placement,
};

fn glyph(s: &str) -> Node {
    Node::text(s, "mono", 48.0, (0.4, 0.5), Color::WHITE)
}

fn outline() -> Node {
    Node::rounded_rectangle(0.6, 0.6, 0.1, Style::outline(Color::WHITE, 2.0))
}

fn grid_2x3() -> Grid<Node> {
    let mut g = Grid::new(vec![
        vec![glyph("0"), glyph("1"), glyph("2")],
        vec![glyph("3"), glyph("4"), glyph("5")],
    ])
    .unwrap();
    g.layout(0.8, 1.3, Direction::Center);
    g
}

fn wrapped(mode: Decomposition) -> WrappedGrid<Node> {
    WrappedGrid::new(&grid_2x3(), mode, Enclosures::Template(outline())).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn enclosures_are_centered_on_their_items() {
    let g = wrapped(Decomposition::Entries);
    assert_eq!(g.len(), 6);
    for cell in g.cells() {
        let (a, b) = (cell.item.center(), cell.enclosure.center());
        assert!(approx(a.x, b.x) && approx(a.y, b.y));
    }
}

#[test]
fn explicit_enclosure_count_must_match() {
    let err = WrappedGrid::new(
        &grid_2x3(),
        Decomposition::Rows,
        Enclosures::Each(vec![outline(), outline(), outline()]),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ExprError::ShapeMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn source_grid_is_not_mutated() {
    let source = grid_2x3();
    let before = source.clone();
    let mut g = WrappedGrid::new(&source, Decomposition::Columns, Enclosures::Template(outline()))
        .unwrap();
    g.set_color(Broadcast::all(Color::RED), None).unwrap();
    g.apply_to_container(&Op::Shift(crate::foundation::core::Vec2::new(3.0, 0.0)));
    assert_eq!(source, before);
}

#[test]
fn enclosure_fill_stays_zero_after_color_and_opacity() {
    let mut g = wrapped(Decomposition::Entries);
    g.set_color(Broadcast::all(Color::YELLOW), None).unwrap();
    g.set_opacity(Broadcast::enclosures(0.75), Some(&[1, 2][..])).unwrap();
    for e in g.enclosures() {
        assert_eq!(e.style.fill_opacity, 0.0);
        assert_eq!(e.style.stroke_color, Color::YELLOW);
    }
    assert_eq!(g.get(1).unwrap().1.opacity(), 0.75);
    assert_eq!(g.get(1).unwrap().0.opacity(), 1.0);
    assert_eq!(g.get(0).unwrap().1.opacity(), 1.0);
}

#[test]
fn split_values_reach_their_own_collection() {
    let mut g = wrapped(Decomposition::Rows);
    g.set_color(
        Broadcast::items(Color::BLUE).with_enclosures(Color::RED),
        Some(&[1][..]),
    )
    .unwrap();
    let (item, encl) = g.get(1).unwrap();
    assert!(item.leaves().iter().all(|l| l.style.fill_color == Color::BLUE));
    assert_eq!(encl.style.stroke_color, Color::RED);
    let (item0, _) = g.get(0).unwrap();
    assert!(item0.leaves().iter().all(|l| l.style.fill_color == Color::WHITE));
}

#[test]
fn focus_dims_the_complement() {
    let mut g = wrapped(Decomposition::Entries);
    g.set_focus(&[0, 3], 0.1).unwrap();
    for (i, (item, encl)) in (0..g.len()).map(|i| (i, g.get(i).unwrap())) {
        let want = if i == 0 || i == 3 { 1.0 } else { 0.1 };
        assert_eq!(item.opacity(), want, "item {i}");
        assert_eq!(encl.opacity(), want, "enclosure {i}");
    }
}

#[test]
fn out_of_range_index_fails_without_partial_edits() {
    let mut g = wrapped(Decomposition::Entries);
    let before = g.clone();
    let err = g
        .set_color(Broadcast::all(Color::RED), Some(&[0, 6][..]))
        .unwrap_err();
    assert!(matches!(err, ExprError::IndexOutOfRange { index: 6, len: 6 }));
    assert_eq!(g, before);
    assert!(g.set_focus(&[9], 0.1).is_err());
    assert_eq!(g, before);
}

#[test]
fn mismatched_value_kind_is_rejected() {
    let mut g = wrapped(Decomposition::Entries);
    let err = g
        .apply(OpKind::Scale, Broadcast::all(Value::from(Color::RED)), None)
        .unwrap_err();
    assert!(matches!(err, ExprError::ArgumentMismatch { .. }));
}

#[test]
fn empty_selection_touches_nothing() {
    let mut g = wrapped(Decomposition::Entries);
    let before = g.clone();
    g.set_opacity(Broadcast::all(0.0), Some(&[][..])).unwrap();
    assert_eq!(g, before);
}

#[test]
fn copy_is_independent() {
    let original = wrapped(Decomposition::Entries);
    let mut copy = original.copy();
    copy.set_color(Broadcast::all(Color::GREEN), None).unwrap();
    copy.apply_to_container(&Op::Scale(2.0));
    assert!(original.items().all(|i| i.style.fill_color == Color::WHITE));
    assert_ne!(copy.bounds(), original.bounds());

    let mut original = original;
    original.set_opacity(Broadcast::all(0.3), None).unwrap();
    assert!(copy.items().all(|i| i.opacity() == 1.0));
}

#[test]
fn per_cell_scale_keeps_pairs_concentric() {
    let mut g = wrapped(Decomposition::Entries);
    let before = g.get(4).unwrap().0.bounds();
    g.set_scale(Broadcast::all(2.0), Some(&[4][..])).unwrap();
    let (item, encl) = g.get(4).unwrap();
    assert!(approx(item.bounds().width(), before.width() * 2.0));
    assert!(approx(item.center().x, encl.center().x));
}

#[test]
fn align_rows_lines_up_left_edges() {
    let mut g = wrapped(Decomposition::Rows);
    g.set_scale(Broadcast::all(0.5), Some(&[1][..])).unwrap();
    let x0 = g.get(0).unwrap().0.bounds().x0;
    assert!(!approx(g.get(1).unwrap().0.bounds().x0, x0));

    g.align(Decomposition::Rows).unwrap();
    assert!(g.items().all(|i| approx(i.bounds().x0, x0)));
    let e0 = g.get(0).unwrap().1.bounds().x0;
    assert!(g.enclosures().all(|e| approx(e.bounds().x0, e0)));
}

#[test]
fn align_columns_lines_up_top_edges() {
    let mut g = wrapped(Decomposition::Columns);
    assert_eq!(g.len(), 3);
    g.set_scale(Broadcast::all(0.5), Some(&[1][..])).unwrap();
    let y1 = g.get(0).unwrap().0.bounds().y1;
    assert!(!approx(g.get(1).unwrap().0.bounds().y1, y1));
    let x_before: Vec<f64> = g.items().map(|i| i.center().x).collect();

    g.align(Decomposition::Columns).unwrap();
    assert!(g.items().all(|i| approx(i.bounds().y1, y1)));
    let e1 = g.get(0).unwrap().1.bounds().y1;
    assert!(g.enclosures().all(|e| approx(e.bounds().y1, e1)));

    let x_after: Vec<f64> = g.items().map(|i| i.center().x).collect();
    assert!(x_before.iter().zip(&x_after).all(|(a, b)| approx(*a, *b)));
}

#[test]
fn align_entries_is_row_aware() {
    let mut g = wrapped(Decomposition::Entries);
    g.set_scale(Broadcast::all(1.5), Some(&[1, 5][..])).unwrap();
    g.align(Decomposition::Entries).unwrap();

    for r in 0..2 {
        let y0 = g.get(r * 3).unwrap().0.bounds().y0;
        for j in 0..3 {
            assert!(approx(g.get(r * 3 + j).unwrap().0.bounds().y0, y0));
        }
    }
    let x0 = g.get(0).unwrap().0.bounds().x0;
    assert!(approx(g.get(3).unwrap().0.bounds().x0, x0));
}

#[test]
fn align_entries_needs_entry_cells() {
    let mut g = wrapped(Decomposition::Rows);
    assert!(matches!(
        g.align(Decomposition::Entries),
        Err(ExprError::ShapeMismatch { .. })
    ));
}

#[test]
fn animate_is_lazy_and_ordered() {
    let g = wrapped(Decomposition::Entries);
    let before = g.clone();
    let directives = g
        .animate(
            Broadcast::items(Transition::Wiggle).with_enclosures(Transition::FadeIn),
            Some(&[5, 2][..]),
        )
        .unwrap();
    assert_eq!(g, before);

    let order: Vec<_> = directives.iter().map(|d| (d.index, d.role)).collect();
    assert_eq!(
        order,
        vec![
            (2, Role::Item),
            (2, Role::Enclosure),
            (5, Role::Item),
            (5, Role::Enclosure)
        ]
    );
    assert!(directives.iter().all(|d| d.target.is_none()));
}

#[test]
fn animate_with_state_function_records_target() {
    let g = wrapped(Decomposition::Columns);
    let directives = g
        .animate(
            Broadcast::items(Transition::apply(|v: &Node| {
                let mut v = v.clone();
                v.set_color(Color::GOLD);
                v
            })),
            None,
        )
        .unwrap();
    assert_eq!(directives.len(), 3);
    let target = directives[0].target.as_ref().unwrap();
    assert!(target.leaves().iter().all(|l| l.style.fill_color == Color::GOLD));
    assert!(g.items().all(|i| i.leaves()[0].style.fill_color == Color::WHITE));
}

#[test]
fn container_ops_move_the_grid_as_one() {
    let mut g = wrapped(Decomposition::Entries);
    let offsets: Vec<_> = g.items().map(|i| i.center() - g.bounds().center()).collect();

    g.apply_to_container(&Op::MoveTo(Point::new(4.0, -2.0)));
    let c = g.bounds().center();
    assert!(approx(c.x, 4.0) && approx(c.y, -2.0));
    for (item, off) in g.items().zip(&offsets) {
        let now = item.center() - c;
        assert!(approx(now.x, off.x) && approx(now.y, off.y));
    }

    let target = Rect::new(-10.0, 0.0, -9.0, 1.0);
    g.apply_to_container(&Op::AlignTo(Placement::new(target, Direction::Left)));
    assert!(approx(g.bounds().x0, -10.0));
}

#[test]
fn container_style_ops_keep_enclosures_unfilled() {
    let mut g = wrapped(Decomposition::Entries);
    g.apply_to_container(&Op::Opacity(0.5));
    assert!(g.enclosures().all(|e| e.style.fill_opacity == 0.0));
    assert!(g.items().all(|i| i.opacity() == 0.5));
}

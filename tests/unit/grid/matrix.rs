use super::*;
use crate::{foundation::color::Color, visual::node::Node};

fn glyph(s: &str) -> Node {
    Node::text(s, "mono", 48.0, (0.4, 0.5), Color::WHITE)
}

fn grid_2x3() -> Grid<Node> {
    Grid::new(vec![
        vec![glyph("0"), glyph("1"), glyph("2")],
        vec![glyph("3"), glyph("4"), glyph("5")],
    ])
    .unwrap()
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Grid::new(vec![vec![glyph("a"), glyph("b")], vec![glyph("c")]]).unwrap_err();
    assert!(matches!(
        err,
        ExprError::ShapeMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn cell_counts_follow_decomposition() {
    let g = grid_2x3();
    assert_eq!(g.shape(), (2, 3));
    assert_eq!(g.cell_count(Decomposition::Rows), 2);
    assert_eq!(g.cell_count(Decomposition::Columns), 3);
    assert_eq!(g.cell_count(Decomposition::Entries), 6);
    assert_eq!(g.decompose(Decomposition::Rows).len(), 2);
    assert_eq!(g.decompose(Decomposition::Columns).len(), 3);
    assert_eq!(g.decompose(Decomposition::Entries).len(), 6);
}

#[test]
fn columns_collect_entries_top_to_bottom() {
    let g = grid_2x3();
    let cols = g.decompose(Decomposition::Columns);
    let second: Vec<_> = cols[1].children().iter().map(|n| n.content()).collect();
    assert_eq!(second, vec![Some("1"), Some("4")]);
}

#[test]
fn layout_spaces_entries_and_centers_grid() {
    let mut g = grid_2x3();
    g.layout(1.0, 2.0, Direction::Center);
    let c = g.bounds().center();
    assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9);

    let a = g.entry(0, 0).unwrap().center();
    let b = g.entry(0, 1).unwrap().center();
    let d = g.entry(1, 0).unwrap().center();
    assert!((b.x - a.x - 2.0).abs() < 1e-9);
    assert!((a.y - d.y - 1.0).abs() < 1e-9);
    assert!(g.entry(2, 0).is_none());
}

#[test]
fn decomposition_names_parse() {
    assert_eq!("rows".parse::<Decomposition>().unwrap(), Decomposition::Rows);
    assert_eq!("column".parse::<Decomposition>().unwrap(), Decomposition::Columns);
    assert!("diagonals".parse::<Decomposition>().is_err());
    assert_eq!(Decomposition::default(), Decomposition::Entries);
}

use super::*;
use crate::{foundation::color::Color, visual::node::Node};

fn leaf(s: &str) -> Part<Node> {
    Part::leaf(Node::text(s, "mono", 48.0, (0.4, 0.5), Color::WHITE))
}

fn content(p: &Part<Node>) -> Option<&str> {
    p.as_leaf().and_then(Node::content)
}

#[test]
fn insertion_order_is_kept() {
    let parts = Parts::new()
        .with("x", leaf("1"))
        .with("verb", leaf("+"))
        .with("y", leaf("2"));
    assert_eq!(parts.names().collect::<Vec<_>>(), vec!["x", "verb", "y"]);
}

#[test]
fn reinsert_replaces_in_place() {
    let mut parts = Parts::new().with("x", leaf("1")).with("y", leaf("2"));
    let old = parts.insert("x", leaf("9"));
    assert_eq!(old.as_ref().and_then(content), Some("1"));
    assert_eq!(parts.names().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(content(parts.get("x").unwrap()), Some("9"));
}

#[test]
fn merge_overwrites_and_appends() {
    let mut parts = Parts::new().with("x", leaf("1")).with("y", leaf("2"));
    parts.merge(Parts::new().with("equals", leaf("=")).with("x", leaf("7")));
    assert_eq!(parts.names().collect::<Vec<_>>(), vec!["x", "y", "equals"]);
    assert_eq!(content(parts.get("x").unwrap()), Some("7"));
}

#[test]
fn require_names_the_missing_part() {
    let parts: Parts<Node> = Parts::new();
    assert!(matches!(parts.require("verb"), Err(ExprError::UnknownPart(n)) if n == "verb"));
}

#[test]
fn select_resolves_against_parts() {
    let parts = Parts::new().with("x", leaf("1")).with("y", leaf("2"));
    assert_eq!(Select::all().resolve(&parts).unwrap(), vec!["x", "y"]);
    assert_eq!(Select::parts(["y"]).resolve(&parts).unwrap(), vec!["y"]);
    assert!(Select::parts(["y", "z"]).resolve(&parts).is_err());

    let s = Select::parts(["x"]).indices([0, 2]);
    assert_eq!(s.cell_indices(), Some(&[0, 2][..]));
}

#[test]
fn collect_from_pairs() {
    let parts: Parts<Node> = vec![("a", leaf("1")), ("b", leaf("2")), ("a", leaf("3"))]
        .into_iter()
        .collect();
    assert_eq!(parts.len(), 2);
    assert_eq!(content(parts.get("a").unwrap()), Some("3"));
}

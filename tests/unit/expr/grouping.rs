use super::*;
use crate::{
    expr::parts::Part,
    foundation::{color::Color, error::ExprError},
    visual::node::Node,
};

fn parts() -> Parts<Node> {
    Parts::new()
        .with("x", Part::leaf(Node::text("1", "mono", 48.0, (0.4, 0.5), Color::WHITE)))
        .with("verb", Part::leaf(Node::text("+", "mono", 48.0, (0.4, 0.5), Color::WHITE)))
        .with("y", Part::leaf(Node::text("2", "mono", 48.0, (0.4, 0.5), Color::WHITE)))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_grouper_lays_parts_left_to_right() {
    let g = default_grouper::<Node>().group(&parts()).unwrap();
    let kids = g.children();
    assert_eq!(kids.len(), 3);
    for pair in kids.windows(2) {
        let gap = pair[1].bounds().x0 - pair[0].bounds().x1;
        assert!(approx(gap, DEFAULT_GROUP_BUFF));
    }
}

#[test]
fn grouper_with_stacks_downward() {
    let g = grouper_with::<Node>(Direction::Down, 0.1).group(&parts()).unwrap();
    let kids = g.children();
    assert!(kids[0].center().y > kids[1].center().y);
    assert!(approx(kids[0].center().x, kids[2].center().x));
}

#[test]
fn grouping_leaves_parts_untouched() {
    let p = parts();
    let before = p.clone();
    let _ = default_grouper::<Node>().group(&p).unwrap();
    assert_eq!(p, before);
}

#[test]
fn vgroup_and_arranged_pick_named_parts() {
    let p = parts();
    let g = vgroup(&p, &["y", "x"]).unwrap();
    assert_eq!(g.children()[0].content(), Some("2"));
    assert_eq!(g.children().len(), 2);

    let g = arranged(&p, &["verb"], Direction::Right, 0.5).unwrap();
    assert_eq!(g.children().len(), 1);

    assert!(matches!(vgroup(&p, &["z"]), Err(ExprError::UnknownPart(_))));
}

#[test]
fn custom_grouper_is_called_with_current_parts() {
    let g: Grouper<Node> = grouper(|p: &Parts<Node>| vgroup(p, &["verb"]));
    assert_eq!(g.group(&parts()).unwrap().children().len(), 1);
    assert!(!g.places_parts());
}

#[test]
fn layout_groupers_place_parts() {
    assert!(default_grouper::<Node>().places_parts());
    assert!(grouper_with::<Node>(Direction::Down, 0.1).clone().places_parts());
}

use crate::{
    foundation::core::{Direction, union},
    visual::Visual,
};

/// Lay `items` out one after another along `direction`, `buff` apart, then
/// move the whole run back onto the center the items had before.
pub fn arrange<V: Visual>(items: &mut [V], direction: Direction, buff: f64) {
    if items.is_empty() {
        return;
    }
    let before = union(items.iter().map(Visual::bounds)).center();

    for i in 1..items.len() {
        let prev = items[i - 1].bounds();
        items[i].next_to(prev, direction, buff);
    }

    let by = before - union(items.iter().map(Visual::bounds)).center();
    for item in items.iter_mut() {
        item.shift(by);
    }
}

/// Arrange clones of `items` and return them as one group.
pub fn arranged_group<V: Visual>(items: &[V], direction: Direction, buff: f64) -> V {
    let mut items = items.to_vec();
    arrange(&mut items, direction, buff);
    V::group(items)
}

#[cfg(test)]
#[path = "../../tests/unit/visual/layout.rs"]
mod tests;

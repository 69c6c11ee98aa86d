use std::{fmt, rc::Rc};

use crate::{
    expr::parts::Parts,
    foundation::{core::Direction, error::ExprResult},
    visual::{Visual, layout::arranged_group},
};

/// Gap between parts in the default left-to-right layout.
pub const DEFAULT_GROUP_BUFF: f64 = 0.4;

type GroupFn<V> = Rc<dyn Fn(&Parts<V>) -> ExprResult<V>>;

/// Pure function from the current parts to one combined visual.
///
/// A placing grouper returns exactly one child per part, in part order, and
/// that child is where the part belongs. An expression view moves its parts
/// onto those children so a part's own geometry matches what is shown.
pub struct Grouper<V> {
    f: GroupFn<V>,
    places_parts: bool,
}

impl<V> Grouper<V> {
    /// Grouper that only combines; parts stay where they are.
    pub fn new(f: impl Fn(&Parts<V>) -> ExprResult<V> + 'static) -> Self {
        Self {
            f: Rc::new(f),
            places_parts: false,
        }
    }

    /// Grouper whose children (one per part, in order) place the parts.
    pub fn placing(f: impl Fn(&Parts<V>) -> ExprResult<V> + 'static) -> Self {
        Self {
            f: Rc::new(f),
            places_parts: true,
        }
    }

    pub fn group(&self, parts: &Parts<V>) -> ExprResult<V> {
        (self.f)(parts)
    }

    pub fn places_parts(&self) -> bool {
        self.places_parts
    }
}

impl<V> Clone for Grouper<V> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            places_parts: self.places_parts,
        }
    }
}

impl<V> fmt::Debug for Grouper<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouper")
            .field("places_parts", &self.places_parts)
            .finish_non_exhaustive()
    }
}

pub fn grouper<V>(f: impl Fn(&Parts<V>) -> ExprResult<V> + 'static) -> Grouper<V> {
    Grouper::new(f)
}

/// All parts, in order, laid out along `direction`.
pub fn grouper_with<V: Visual + 'static>(direction: Direction, buff: f64) -> Grouper<V> {
    Grouper::placing(move |parts: &Parts<V>| {
        Ok(arranged_group(&parts.visuals(), direction, buff))
    })
}

/// All parts left to right, [`DEFAULT_GROUP_BUFF`] apart.
pub fn default_grouper<V: Visual + 'static>() -> Grouper<V> {
    grouper_with(Direction::Right, DEFAULT_GROUP_BUFF)
}

/// The named parts grouped as-is, in the order given.
pub fn vgroup<V: Visual>(parts: &Parts<V>, names: &[&str]) -> ExprResult<V> {
    let visuals = names
        .iter()
        .map(|n| parts.require(n).map(|p| p.to_visual()))
        .collect::<ExprResult<Vec<_>>>()?;
    Ok(V::group(visuals))
}

/// The named parts laid out along `direction`, `buff` apart.
pub fn arranged<V: Visual>(
    parts: &Parts<V>,
    names: &[&str],
    direction: Direction,
    buff: f64,
) -> ExprResult<V> {
    let visuals = names
        .iter()
        .map(|n| parts.require(n).map(|p| p.to_visual()))
        .collect::<ExprResult<Vec<_>>>()?;
    Ok(arranged_group(&visuals, direction, buff))
}

#[cfg(test)]
#[path = "../../tests/unit/expr/grouping.rs"]
mod tests;

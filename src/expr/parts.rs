use crate::{
    foundation::{
        core::{Rect, Vec2},
        error::{ExprError, ExprResult},
    },
    grid::wrapped::WrappedGrid,
    visual::{Visual, op::Op},
};

/// A named element of an expression: a wrapped grid or a plain visual.
#[derive(Clone, Debug, PartialEq)]
pub enum Part<V> {
    Grid(WrappedGrid<V>),
    Leaf(V),
}

impl<V: Visual> Part<V> {
    pub fn grid(grid: WrappedGrid<V>) -> Self {
        Self::Grid(grid)
    }

    pub fn leaf(visual: V) -> Self {
        Self::Leaf(visual)
    }

    /// The part as a single visual: a grid's container or the leaf itself.
    pub fn to_visual(&self) -> V {
        match self {
            Self::Grid(g) => g.container(),
            Self::Leaf(v) => v.clone(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Self::Grid(g) => g.bounds(),
            Self::Leaf(v) => v.bounds(),
        }
    }

    /// Move the whole part; a grid moves items and enclosures together.
    pub fn shift(&mut self, by: Vec2) {
        match self {
            Self::Grid(g) => {
                g.apply_to_container(&Op::Shift(by));
            }
            Self::Leaf(v) => v.shift(by),
        }
    }

    pub fn as_grid(&self) -> Option<&WrappedGrid<V>> {
        match self {
            Self::Grid(g) => Some(g),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_grid_mut(&mut self) -> Option<&mut WrappedGrid<V>> {
        match self {
            Self::Grid(g) => Some(g),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Grid(_) => None,
            Self::Leaf(v) => Some(v),
        }
    }
}

impl<V> From<WrappedGrid<V>> for Part<V> {
    fn from(g: WrappedGrid<V>) -> Self {
        Self::Grid(g)
    }
}

/// Insertion-ordered mapping from part name to part.
///
/// Re-inserting an existing name replaces the part in place; new names go
/// to the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Parts<V> {
    entries: Vec<(String, Part<V>)>,
}

impl<V> Default for Parts<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Parts<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Parts::insert`].
    pub fn with(mut self, name: impl Into<String>, part: impl Into<Part<V>>) -> Self {
        self.insert(name, part);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, part: impl Into<Part<V>>) -> Option<Part<V>> {
        let name = name.into();
        let part = part.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, part)),
            None => {
                self.entries.push((name, part));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Part<V>> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Insert every entry of `other`, in its order.
    pub fn merge(&mut self, other: Parts<V>) {
        for (name, part) in other.entries {
            self.insert(name, part);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Part<V>> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Part<V>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    pub fn require(&self, name: &str) -> ExprResult<&Part<V>> {
        self.get(name).ok_or_else(|| ExprError::unknown_part(name))
    }

    pub fn require_mut(&mut self, name: &str) -> ExprResult<&mut Part<V>> {
        self.get_mut(name)
            .ok_or_else(|| ExprError::unknown_part(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Part<V>)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Part<V>)> {
        self.entries.iter_mut().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Visual> Parts<V> {
    /// Every part as a single visual, in order.
    pub fn visuals(&self) -> Vec<V> {
        self.entries.iter().map(|(_, p)| p.to_visual()).collect()
    }
}

impl<V, S: Into<String>, P: Into<Part<V>>> FromIterator<(S, P)> for Parts<V> {
    fn from_iter<I: IntoIterator<Item = (S, P)>>(iter: I) -> Self {
        let mut parts = Self::new();
        for (name, part) in iter {
            parts.insert(name, part);
        }
        parts
    }
}

impl<V> IntoIterator for Parts<V> {
    type Item = (String, Part<V>);
    type IntoIter = std::vec::IntoIter<(String, Part<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Which parts (and which cells inside grid parts) an operation reaches.
/// Unset fields mean "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Select {
    parts: Option<Vec<String>>,
    indices: Option<Vec<usize>>,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn parts<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: Some(names.into_iter().map(Into::into).collect()),
            indices: None,
        }
    }

    pub fn indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices = Some(indices.into_iter().collect());
        self
    }

    pub fn part_names(&self) -> Option<&[String]> {
        self.parts.as_deref()
    }

    pub fn cell_indices(&self) -> Option<&[usize]> {
        self.indices.as_deref()
    }

    /// Selected names, checked against `parts`; every name when unset.
    pub fn resolve<V>(&self, parts: &Parts<V>) -> ExprResult<Vec<String>> {
        match &self.parts {
            None => Ok(parts.names().map(str::to_owned).collect()),
            Some(names) => {
                for name in names {
                    parts.require(name)?;
                }
                Ok(names.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/parts.rs"]
mod tests;

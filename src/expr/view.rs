use std::fmt;

use crate::{
    expr::{
        grouping::{Grouper, default_grouper},
        parts::{Part, Parts, Select},
    },
    foundation::{color::Color, error::ExprResult},
    grid::broadcast::Broadcast,
    visual::{
        Visual,
        op::{OpKind, Value},
    },
};

/// A named collection of expression parts with a cached grouped view.
///
/// Every mutating call recomputes the grouped view from the grouper before it
/// returns, and a failing call leaves both the parts and the view untouched.
/// With a layout grouper the parts are moved to where the grouped view shows
/// them, so a part's own geometry matches what is on screen.
/// `copy()` shares the grouper (it is immutable) and deep-copies the rest.
#[derive(Clone)]
pub struct ExpressionView<V> {
    parts: Parts<V>,
    grouper: Grouper<V>,
    grouped: V,
    order: Vec<String>,
}

impl<V: Visual + 'static> ExpressionView<V> {
    /// View with the default left-to-right grouping.
    pub fn new(parts: Parts<V>) -> ExprResult<Self> {
        Self::with_grouper(parts, default_grouper())
    }

    pub fn with_grouper(parts: Parts<V>, grouper: Grouper<V>) -> ExprResult<Self> {
        let (parts, grouped) = settle(&grouper, parts)?;
        Ok(Self {
            parts,
            grouper,
            grouped,
            order: Vec::new(),
        })
    }

    pub fn parts(&self) -> &Parts<V> {
        &self.parts
    }

    pub fn part(&self, name: &str) -> ExprResult<&Part<V>> {
        self.parts.require(name)
    }

    pub fn grouped_view(&self) -> &V {
        &self.grouped
    }

    /// The installed grouper, e.g. to restore it after a temporary one.
    pub fn grouper(&self) -> Grouper<V> {
        self.grouper.clone()
    }

    /// Order remembered by [`ExpressionView::set_order`].
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn commit(&mut self, parts: Parts<V>) -> ExprResult<&mut Self> {
        let (parts, grouped) = settle(&self.grouper, parts)?;
        self.parts = parts;
        self.grouped = grouped;
        Ok(self)
    }

    pub fn regroup(&mut self) -> ExprResult<&mut Self> {
        self.commit(self.parts.clone())
    }

    /// Merge `new_parts` in (existing names are replaced in place) and regroup.
    #[tracing::instrument(skip_all, fields(names = ?new_parts.names().collect::<Vec<_>>()))]
    pub fn update(&mut self, new_parts: Parts<V>) -> ExprResult<&mut Self> {
        let mut parts = self.parts.clone();
        parts.merge(new_parts);
        self.commit(parts)
    }

    /// Remember `order` for a later argument-less [`ExpressionView::reorder`].
    pub fn set_order<I, S>(&mut self, order: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Rebuild the parts in `order` (or the remembered order), dropping every
    /// part the order does not name, then regroup. With neither an explicit
    /// nor a remembered order the current order is kept.
    #[tracing::instrument(skip(self))]
    pub fn reorder(&mut self, order: Option<&[&str]>) -> ExprResult<&mut Self> {
        let order: Vec<String> = match order {
            Some(o) => o.iter().map(|s| (*s).to_owned()).collect(),
            None if !self.order.is_empty() => self.order.clone(),
            None => self.parts.names().map(str::to_owned).collect(),
        };
        for name in &order {
            self.parts.require(name)?;
        }

        let mut rest = self.parts.clone();
        let mut next = Parts::new();
        for name in order {
            if let Some(part) = rest.remove(&name) {
                next.insert(name, part);
            }
        }
        tracing::debug!(dropped = rest.len(), "reordered parts");
        self.commit(next)
    }

    /// Install `grouper` and regroup with it.
    #[tracing::instrument(skip_all)]
    pub fn set_grouper(&mut self, grouper: Grouper<V>) -> ExprResult<&mut Self> {
        let (parts, grouped) = settle(&grouper, self.parts.clone())?;
        self.grouper = grouper;
        self.parts = parts;
        self.grouped = grouped;
        Ok(self)
    }

    /// Apply `kind` to the selected parts.
    ///
    /// Leaves take the `all` value (else `items`). Grid parts take color,
    /// stroke and opacity cell by cell, honoring the selection's indices; any
    /// other kind goes to the grid's container as a whole and needs an `all`
    /// or `items` value (an enclosures-only value is skipped with a warning).
    #[tracing::instrument(skip(self, values))]
    pub fn apply(
        &mut self,
        kind: OpKind,
        values: Broadcast<Value>,
        select: &Select,
    ) -> ExprResult<&mut Self> {
        let names = select.resolve(&self.parts)?;
        let whole = values.clone().try_map(|v| kind.bind(v))?.single();

        let mut parts = self.parts.clone();
        for name in &names {
            match parts.require_mut(name)? {
                Part::Leaf(v) => {
                    if let Some(op) = &whole {
                        v.apply(op);
                    }
                }
                Part::Grid(g) => match kind {
                    OpKind::Color | OpKind::Stroke | OpKind::Opacity => {
                        g.apply(kind, values.clone(), select.cell_indices())?;
                    }
                    _ => match &whole {
                        Some(op) => {
                            g.apply_to_container(op);
                        }
                        None => tracing::warn!(
                            %kind,
                            part = %name,
                            "grid-wide operation needs an `all` or `items` value; skipped"
                        ),
                    },
                },
            }
        }
        self.commit(parts)
    }

    /// [`ExpressionView::apply`] with the operation given by method name.
    pub fn apply_named(
        &mut self,
        name: &str,
        values: Broadcast<Value>,
        select: &Select,
    ) -> ExprResult<&mut Self> {
        let kind = name.parse::<OpKind>()?;
        self.apply(kind, values, select)
    }

    pub fn set_color(&mut self, values: Broadcast<Color>, select: &Select) -> ExprResult<&mut Self> {
        self.apply(OpKind::Color, values.map(Value::from), select)
    }

    pub fn set_opacity(&mut self, values: Broadcast<f64>, select: &Select) -> ExprResult<&mut Self> {
        self.apply(OpKind::Opacity, values.map(Value::from), select)
    }

    /// Scale each selected part as a whole.
    pub fn set_scale(&mut self, values: Broadcast<f64>, select: &Select) -> ExprResult<&mut Self> {
        self.apply(OpKind::Scale, values.map(Value::from), select)
    }

    /// Replace each selected part with `f(part)`, then regroup.
    #[tracing::instrument(skip(self, f))]
    pub fn transform(
        &mut self,
        select: &Select,
        mut f: impl FnMut(Part<V>) -> ExprResult<Part<V>>,
    ) -> ExprResult<&mut Self> {
        let names = select.resolve(&self.parts)?;
        let mut next = Parts::new();
        for (name, part) in self.parts.clone() {
            let part = if names.contains(&name) { f(part)? } else { part };
            next.insert(name, part);
        }
        self.commit(next)
    }

    /// Edit one part in place through `f`, then regroup.
    pub fn modify(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Part<V>) -> ExprResult<()>,
    ) -> ExprResult<&mut Self> {
        let mut parts = self.parts.clone();
        f(parts.require_mut(name)?)?;
        self.commit(parts)
    }
}

/// Group `parts`; a placing grouper also moves each part onto its child.
fn settle<V: Visual>(grouper: &Grouper<V>, mut parts: Parts<V>) -> ExprResult<(Parts<V>, V)> {
    let grouped = grouper.group(&parts)?;
    if !grouper.places_parts() {
        return Ok((parts, grouped));
    }
    let children = grouped.children();
    if children.len() != parts.len() {
        tracing::warn!(
            children = children.len(),
            parts = parts.len(),
            "placing grouper returned a child count that does not match the parts; left in place"
        );
        return Ok((parts, grouped));
    }
    for ((_, part), child) in parts.iter_mut().zip(children) {
        let by = child.center() - part.bounds().center();
        part.shift(by);
    }
    let grouped = grouper.group(&parts)?;
    Ok((parts, grouped))
}

impl<V: fmt::Debug> fmt::Debug for ExpressionView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionView")
            .field("parts", &self.parts)
            .field("grouped", &self.grouped)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/view.rs"]
mod tests;

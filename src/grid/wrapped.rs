use crate::{
    foundation::{
        color::Color,
        core::{Direction, Rect, align_delta, next_to_delta, union},
        error::{ExprError, ExprResult},
    },
    grid::{
        animate::{Directive, Role, Transition},
        broadcast::Broadcast,
        matrix::{Decomposition, Grid},
    },
    visual::{
        Visual,
        op::{Op, OpKind, Stroke, Value},
    },
};

/// One addressable cell: its content and the outline drawn around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<V> {
    pub item: V,
    pub enclosure: V,
}

/// Enclosure source for [`WrappedGrid::new`].
#[derive(Clone, Debug)]
pub enum Enclosures<V> {
    /// Cloned once per cell.
    Template(V),
    /// Exactly one per cell, used as given.
    Each(Vec<V>),
}

/// A grid split into cells, each paired with its own enclosure.
///
/// Items and enclosures are stored as index-aligned pairs, so index `i`
/// always names the same (item, enclosure) pair. Enclosures are outlines:
/// every bulk edit that reaches one resets its fill opacity to zero.
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedGrid<V> {
    cells: Vec<Cell<V>>,
    mode: Decomposition,
    shape: (usize, usize),
}

impl<V: Visual> WrappedGrid<V> {
    /// Wrap a copy of `grid`; the caller's grid is not touched.
    #[tracing::instrument(skip(grid, enclosures), fields(shape = ?grid.shape()))]
    pub fn new(
        grid: &Grid<V>,
        mode: Decomposition,
        enclosures: Enclosures<V>,
    ) -> ExprResult<Self> {
        let n = grid.cell_count(mode);
        let enclosures = match enclosures {
            Enclosures::Template(t) => vec![t; n],
            Enclosures::Each(list) => {
                if list.len() != n {
                    return Err(ExprError::shape_mismatch(n, list.len()));
                }
                list
            }
        };

        let cells = grid
            .decompose(mode)
            .into_iter()
            .zip(enclosures)
            .map(|(item, mut enclosure)| {
                enclosure.move_to(item.center());
                Cell { item, enclosure }
            })
            .collect::<Vec<_>>();
        tracing::debug!(cells = cells.len(), "wrapped grid");

        Ok(Self {
            cells,
            mode,
            shape: grid.shape(),
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn mode(&self) -> Decomposition {
        self.mode
    }

    /// `(rows, columns)` of the source grid.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn cells(&self) -> &[Cell<V>] {
        &self.cells
    }

    /// The `(item, enclosure)` pair at `index`.
    pub fn get(&self, index: usize) -> Option<(&V, &V)> {
        self.cells.get(index).map(|c| (&c.item, &c.enclosure))
    }

    pub fn cell(&self, index: usize) -> ExprResult<&Cell<V>> {
        self.cells
            .get(index)
            .ok_or_else(|| ExprError::index_out_of_range(index, self.cells.len()))
    }

    pub fn items(&self) -> impl Iterator<Item = &V> {
        self.cells.iter().map(|c| &c.item)
    }

    pub fn enclosures(&self) -> impl Iterator<Item = &V> {
        self.cells.iter().map(|c| &c.enclosure)
    }

    pub fn bounds(&self) -> Rect {
        union(
            self.cells
                .iter()
                .flat_map(|c| [c.item.bounds(), c.enclosure.bounds()]),
        )
    }

    /// Snapshot of the whole grid as one visual: a group of (enclosure, item) pairs.
    pub fn container(&self) -> V {
        V::group(
            self.cells
                .iter()
                .map(|c| V::group(vec![c.enclosure.clone(), c.item.clone()]))
                .collect(),
        )
    }

    /// Deep copy; shares nothing with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Ascending cell indices picked by `indices` (`None` picks every cell).
    fn selection(&self, indices: Option<&[usize]>) -> ExprResult<Vec<usize>> {
        let n = self.cells.len();
        let Some(indices) = indices else {
            return Ok((0..n).collect());
        };
        let mut picked = vec![false; n];
        for &i in indices {
            if i >= n {
                return Err(ExprError::index_out_of_range(i, n));
            }
            picked[i] = true;
        }
        Ok((0..n).filter(|&i| picked[i]).collect())
    }

    /// Apply `kind` to the selected cells, item and/or enclosure per `values`.
    #[tracing::instrument(skip(self, values), fields(cells = self.cells.len()))]
    pub fn apply(
        &mut self,
        kind: OpKind,
        values: Broadcast<Value>,
        indices: Option<&[usize]>,
    ) -> ExprResult<&mut Self> {
        if values.is_conflicting() {
            tracing::warn!(%kind, "`all` set together with a per-collection value; `all` wins");
        }
        let selected = self.selection(indices)?;
        let ops = values.try_map(|v| kind.bind(v))?.resolve();

        for i in selected {
            let cell = &mut self.cells[i];
            if let Some(op) = &ops.enclosures {
                cell.enclosure.apply(op);
                cell.enclosure.set_fill_opacity(0.0);
            }
            if let Some(op) = &ops.items {
                cell.item.apply(op);
            }
        }
        Ok(self)
    }

    pub fn set_color(
        &mut self,
        values: Broadcast<Color>,
        indices: Option<&[usize]>,
    ) -> ExprResult<&mut Self> {
        self.apply(OpKind::Color, values.map(Value::from), indices)
    }

    pub fn set_stroke(
        &mut self,
        values: Broadcast<Stroke>,
        indices: Option<&[usize]>,
    ) -> ExprResult<&mut Self> {
        self.apply(OpKind::Stroke, values.map(Value::from), indices)
    }

    pub fn set_opacity(
        &mut self,
        values: Broadcast<f64>,
        indices: Option<&[usize]>,
    ) -> ExprResult<&mut Self> {
        self.apply(OpKind::Opacity, values.map(Value::from), indices)
    }

    /// Scale each selected cell member about its own center.
    pub fn set_scale(
        &mut self,
        values: Broadcast<f64>,
        indices: Option<&[usize]>,
    ) -> ExprResult<&mut Self> {
        self.apply(OpKind::Scale, values.map(Value::from), indices)
    }

    /// Full opacity on `indices`, `defocus` on every other cell.
    #[tracing::instrument(skip(self))]
    pub fn set_focus(&mut self, indices: &[usize], defocus: f64) -> ExprResult<&mut Self> {
        let focused = self.selection(Some(indices))?;
        let rest = (0..self.cells.len())
            .filter(|i| !focused.contains(i))
            .collect::<Vec<_>>();

        self.set_opacity(Broadcast::all(defocus), Some(&rest))?;
        self.set_opacity(Broadcast::all(1.0), Some(&focused))
    }

    /// Line cells up against cell 0.
    ///
    /// `Rows` aligns every cell's left edge, `Columns` every cell's top edge.
    /// `Entries` treats the cells as a row-major 2D grid: each entry is
    /// bottom-aligned with the first entry of its row, and the first column is
    /// left-aligned with entry 0. It needs an entries-decomposed grid.
    #[tracing::instrument(skip(self))]
    pub fn align(&mut self, along: Decomposition) -> ExprResult<&mut Self> {
        let Some(first) = self.cells.first() else {
            return Ok(self);
        };
        let (item0, encl0) = (first.item.bounds(), first.enclosure.bounds());

        match along {
            Decomposition::Rows | Decomposition::Columns => {
                let dir = if along == Decomposition::Rows {
                    Direction::Left
                } else {
                    Direction::Up
                };
                for cell in &mut self.cells[1..] {
                    cell.enclosure.align_to(encl0, dir);
                    cell.item.align_to(item0, dir);
                }
            }
            Decomposition::Entries => {
                let (rows, cols) = self.shape;
                if rows * cols != self.cells.len() {
                    return Err(ExprError::shape_mismatch(rows * cols, self.cells.len()));
                }
                for r in 0..rows {
                    let head = r * cols;
                    let item_head = self.cells[head].item.bounds();
                    let encl_head = self.cells[head].enclosure.bounds();
                    for cell in &mut self.cells[head..head + cols] {
                        cell.enclosure.align_to(encl_head, Direction::Down);
                        cell.item.align_to(item_head, Direction::Down);
                    }
                    let cell = &mut self.cells[head];
                    cell.enclosure.align_to(encl0, Direction::Left);
                    cell.item.align_to(item0, Direction::Left);
                }
            }
        }
        Ok(self)
    }

    /// Build directives for the selected cells without touching the grid.
    /// Per cell the item directive comes before the enclosure directive.
    #[tracing::instrument(skip(self, transitions), fields(cells = self.cells.len()))]
    pub fn animate(
        &self,
        transitions: Broadcast<Transition<V>>,
        indices: Option<&[usize]>,
    ) -> ExprResult<Vec<Directive<V>>> {
        let selected = self.selection(indices)?;
        let transitions = transitions.resolve();

        let mut out = Vec::with_capacity(selected.len() * 2);
        for i in selected {
            let cell = &self.cells[i];
            if let Some(t) = &transitions.items {
                out.push(t.directive(i, Role::Item, &cell.item));
            }
            if let Some(t) = &transitions.enclosures {
                out.push(t.directive(i, Role::Enclosure, &cell.enclosure));
            }
        }
        tracing::debug!(directives = out.len(), "built cell animations");
        Ok(out)
    }

    /// Apply `op` to the grid as a single body.
    ///
    /// Geometry ops move every member by one shared delta (or scale about the
    /// grid center), so the layout is kept. Style ops reach every member, with
    /// the enclosure fill rule intact.
    pub fn apply_to_container(&mut self, op: &Op) -> &mut Self {
        let bounds = self.bounds();
        let by = match op {
            Op::Scale(factor) => {
                let about = bounds.center();
                for cell in &mut self.cells {
                    cell.item.scale_about(*factor, about);
                    cell.enclosure.scale_about(*factor, about);
                }
                return self;
            }
            Op::MoveTo(p) => *p - bounds.center(),
            Op::Shift(v) => *v,
            Op::AlignTo(p) => align_delta(bounds, p.target, p.direction),
            Op::NextTo(p) => next_to_delta(bounds, p.target, p.direction, p.buff),
            Op::Color(_) | Op::Stroke(_) | Op::Opacity(_) | Op::FillOpacity(_) => {
                for cell in &mut self.cells {
                    cell.item.apply(op);
                    cell.enclosure.apply(op);
                    cell.enclosure.set_fill_opacity(0.0);
                }
                return self;
            }
        };
        for cell in &mut self.cells {
            cell.item.shift(by);
            cell.enclosure.shift(by);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/wrapped.rs"]
mod tests;

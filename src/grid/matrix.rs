use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        core::{Direction, Point, Rect, critical_point, union},
        error::{ExprError, ExprResult},
    },
    visual::Visual,
};

/// How a grid is split into cells.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Decomposition {
    Rows,
    Columns,
    #[default]
    Entries,
}

impl Decomposition {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
            Self::Entries => "entries",
        }
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Decomposition {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        match s.trim() {
            "rows" | "row" => Ok(Self::Rows),
            "columns" | "column" => Ok(Self::Columns),
            "entries" | "entry" => Ok(Self::Entries),
            other => Err(ExprError::config(format!(
                "unknown decomposition '{other}' (expected rows, columns or entries)"
            ))),
        }
    }
}

/// Rectangular grid of entry visuals, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<V> {
    entries: Vec<V>,
    rows: usize,
    cols: usize,
}

impl<V: Visual> Grid<V> {
    pub fn new(rows: Vec<Vec<V>>) -> ExprResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(ExprError::shape_mismatch(cols, bad.len()));
        }
        // rows with no columns hold no cells in any decomposition
        let n_rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Self {
            entries: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols,
        })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn entries(&self) -> &[V] {
        &self.entries
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<&V> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.entries.get(row * self.cols + col)
    }

    pub fn bounds(&self) -> Rect {
        union(self.entries.iter().map(Visual::bounds))
    }

    /// Put entry (i, j)'s `corner` on `(j * h_buff, -i * v_buff)`, then center
    /// the grid on the origin.
    pub fn layout(&mut self, v_buff: f64, h_buff: f64, corner: Direction) {
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            let (i, j) = (idx / self.cols, idx % self.cols);
            let slot = Point::new(j as f64 * h_buff, -(i as f64) * v_buff);
            let by = slot - critical_point(entry.bounds(), corner);
            entry.shift(by);
        }
        let by = Point::ORIGIN - self.bounds().center();
        for entry in &mut self.entries {
            entry.shift(by);
        }
    }

    pub fn cell_count(&self, mode: Decomposition) -> usize {
        match mode {
            Decomposition::Rows => self.rows,
            Decomposition::Columns => self.cols,
            Decomposition::Entries => self.entries.len(),
        }
    }

    /// Split into cells: one group per row, one group per column, or each entry.
    pub fn decompose(&self, mode: Decomposition) -> Vec<V> {
        match mode {
            Decomposition::Rows => self
                .entries
                .chunks(self.cols.max(1))
                .map(|row| V::group(row.to_vec()))
                .collect(),
            Decomposition::Columns => (0..self.cols)
                .map(|j| {
                    V::group(
                        self.entries
                            .iter()
                            .skip(j)
                            .step_by(self.cols)
                            .cloned()
                            .collect(),
                    )
                })
                .collect(),
            Decomposition::Entries => self.entries.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/matrix.rs"]
mod tests;

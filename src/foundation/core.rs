use std::str::FromStr;

use crate::foundation::error::{ExprError, ExprResult};

pub use kurbo::{Point, Rect, Vec2};

/// Nine-way anchor on a bounding box. y grows upward, so `Up` is the `y1` edge.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit components in `{-1, 0, 1}` per axis.
    pub fn unit(self) -> (i8, i8) {
        match self {
            Self::Center => (0, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, 1),
            Self::UpRight => (1, 1),
            Self::DownLeft => (-1, -1),
            Self::DownRight => (1, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Center => Self::Center,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        let (x, y) = self.unit();
        Vec2::new(f64::from(x), f64::from(y))
    }
}

impl FromStr for Direction {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "origin" => Ok(Self::Center),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up_left" | "ul" => Ok(Self::UpLeft),
            "up_right" | "ur" => Ok(Self::UpRight),
            "down_left" | "dl" => Ok(Self::DownLeft),
            "down_right" | "dr" => Ok(Self::DownRight),
            other => Err(ExprError::config(format!("unknown direction '{other}'"))),
        }
    }
}

/// Point of `rect` picked per axis by `dir` (min, center or max).
pub fn critical_point(rect: Rect, dir: Direction) -> Point {
    fn pick(lo: f64, hi: f64, d: i8) -> f64 {
        match d {
            -1 => lo,
            1 => hi,
            _ => (lo + hi) / 2.0,
        }
    }
    let (dx, dy) = dir.unit();
    Point::new(pick(rect.x0, rect.x1, dx), pick(rect.y0, rect.y1, dy))
}

/// Shift that lines up `rect`'s `dir` edge with `target`'s. Axes where `dir`
/// is zero are left alone, so `Center` is a no-op.
pub fn align_delta(rect: Rect, target: Rect, dir: Direction) -> Vec2 {
    let (dx, dy) = dir.unit();
    let from = critical_point(rect, dir);
    let to = critical_point(target, dir);
    Vec2::new(
        if dx == 0 { 0.0 } else { to.x - from.x },
        if dy == 0 { 0.0 } else { to.y - from.y },
    )
}

/// Shift that places `rect` beside `target` on the `dir` side with a `buff` gap.
pub fn next_to_delta(rect: Rect, target: Rect, dir: Direction, buff: f64) -> Vec2 {
    let anchor = critical_point(target, dir) + dir.as_vec2() * buff;
    anchor - critical_point(rect, dir.opposite())
}

/// Smallest rectangle covering all of `rects`; `Rect::ZERO` when empty.
pub fn union(rects: impl IntoIterator<Item = Rect>) -> Rect {
    rects
        .into_iter()
        .reduce(|acc, r| acc.union(r))
        .unwrap_or(Rect::ZERO)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

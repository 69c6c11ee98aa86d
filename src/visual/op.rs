use std::{fmt, str::FromStr};

use crate::foundation::{
    color::Color,
    core::{Direction, Point, Rect, Vec2},
    error::{ExprError, ExprResult},
};

/// Gap used by `next_to` when the caller does not pick one.
pub const DEFAULT_BUFF: f64 = 0.25;

/// The closed set of operations the bulk APIs can broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Color,
    Stroke,
    Opacity,
    FillOpacity,
    Scale,
    MoveTo,
    Shift,
    AlignTo,
    NextTo,
}

impl OpKind {
    pub const ALL: [Self; 9] = [
        Self::Color,
        Self::Stroke,
        Self::Opacity,
        Self::FillOpacity,
        Self::Scale,
        Self::MoveTo,
        Self::Shift,
        Self::AlignTo,
        Self::NextTo,
    ];

    /// Method name this kind answers to in choreography scripts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "set_color",
            Self::Stroke => "set_stroke",
            Self::Opacity => "set_opacity",
            Self::FillOpacity => "set_fill_opacity",
            Self::Scale => "scale",
            Self::MoveTo => "move_to",
            Self::Shift => "shift",
            Self::AlignTo => "align_to",
            Self::NextTo => "next_to",
        }
    }

    /// Bind a loosely typed value to this operation.
    pub fn bind(self, value: Value) -> ExprResult<Op> {
        let op = match (self, value) {
            (Self::Color, Value::Color(c)) => Op::Color(c),
            (Self::Stroke, Value::Stroke(s)) => Op::Stroke(s),
            (Self::Stroke, Value::Color(c)) => Op::Stroke(Stroke::color(c)),
            (Self::Opacity, Value::Number(o)) => Op::Opacity(o),
            (Self::FillOpacity, Value::Number(o)) => Op::FillOpacity(o),
            (Self::Scale, Value::Number(f)) => Op::Scale(f),
            (Self::MoveTo, Value::Point(p)) => Op::MoveTo(p),
            (Self::Shift, Value::Vector(v)) => Op::Shift(v),
            (Self::AlignTo, Value::Placement(p)) => Op::AlignTo(p),
            (Self::NextTo, Value::Placement(p)) => Op::NextTo(p),
            (kind, _) => return Err(ExprError::argument_mismatch(kind.name(), kind.expects())),
        };
        Ok(op)
    }

    fn expects(self) -> &'static str {
        match self {
            Self::Color => "a color",
            Self::Stroke => "a stroke or a color",
            Self::Opacity | Self::FillOpacity => "an opacity",
            Self::Scale => "a scale factor",
            Self::MoveTo => "a point",
            Self::Shift => "a vector",
            Self::AlignTo | Self::NextTo => "a placement",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpKind {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ExprError::unknown_attribute(s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: Option<f64>,
}

impl Stroke {
    pub fn color(color: Color) -> Self {
        Self { color, width: None }
    }

    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width: Some(width),
        }
    }
}

/// Where to put a visual relative to a target box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub target: Rect,
    pub direction: Direction,
    pub buff: f64,
}

impl Placement {
    pub fn new(target: Rect, direction: Direction) -> Self {
        Self {
            target,
            direction,
            buff: DEFAULT_BUFF,
        }
    }

    pub fn buff(mut self, buff: f64) -> Self {
        self.buff = buff;
        self
    }
}

/// Untyped argument for an [`OpKind`]; checked by [`OpKind::bind`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Number(f64),
    Color(Color),
    Stroke(Stroke),
    Point(Point),
    Vector(Vec2),
    Placement(Placement),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Stroke> for Value {
    fn from(v: Stroke) -> Self {
        Self::Stroke(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Self::Point(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Self::Vector(v)
    }
}

impl From<Placement> for Value {
    fn from(v: Placement) -> Self {
        Self::Placement(v)
    }
}

/// A fully bound operation, ready to dispatch through [`crate::Visual::apply`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Color(Color),
    Stroke(Stroke),
    Opacity(f64),
    FillOpacity(f64),
    Scale(f64),
    MoveTo(Point),
    Shift(Vec2),
    AlignTo(Placement),
    NextTo(Placement),
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Color(_) => OpKind::Color,
            Self::Stroke(_) => OpKind::Stroke,
            Self::Opacity(_) => OpKind::Opacity,
            Self::FillOpacity(_) => OpKind::FillOpacity,
            Self::Scale(_) => OpKind::Scale,
            Self::MoveTo(_) => OpKind::MoveTo,
            Self::Shift(_) => OpKind::Shift,
            Self::AlignTo(_) => OpKind::AlignTo,
            Self::NextTo(_) => OpKind::NextTo,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/op.rs"]
mod tests;

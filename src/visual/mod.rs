//! Visual object boundary.
//!
//! The engine never draws anything itself. It talks to visuals through the
//! [`Visual`] capability trait: positioning, scaling and the handful of style
//! setters the bulk operations need. [`node::Node`] is the retained
//! implementation shipped with the crate; a renderer can provide its own.

pub mod layout;
pub mod node;
pub mod op;

use std::fmt;

use crate::foundation::{
    color::Color,
    core::{Direction, Point, Rect, Vec2, align_delta, next_to_delta},
};
use op::Op;

/// Capabilities the composition engine requires from a visual object.
///
/// `Clone` must be a deep copy: a clone shares no mutable state with its source.
pub trait Visual: Clone + fmt::Debug {
    /// Axis-aligned bounds in scene units (y up).
    fn bounds(&self) -> Rect;

    fn shift(&mut self, by: Vec2);

    fn scale_about(&mut self, factor: f64, about: Point);

    /// Sets stroke and fill color.
    fn set_color(&mut self, color: Color);

    fn set_stroke(&mut self, color: Color, width: Option<f64>);

    /// Sets stroke and fill opacity.
    fn set_opacity(&mut self, opacity: f64);

    fn set_fill_opacity(&mut self, opacity: f64);

    /// Sub-objects, empty for leaves.
    fn children(&self) -> &[Self];

    /// Combine `children` into a single visual that moves and restyles as one.
    fn group(children: Vec<Self>) -> Self;

    fn center(&self) -> Point {
        self.bounds().center()
    }

    fn move_to(&mut self, point: Point) {
        let by = point - self.center();
        self.shift(by);
    }

    /// Scale about the visual's own center.
    fn scale(&mut self, factor: f64) {
        let about = self.center();
        self.scale_about(factor, about);
    }

    fn align_to(&mut self, target: Rect, direction: Direction) {
        let by = align_delta(self.bounds(), target, direction);
        self.shift(by);
    }

    fn next_to(&mut self, target: Rect, direction: Direction, buff: f64) {
        let by = next_to_delta(self.bounds(), target, direction, buff);
        self.shift(by);
    }

    /// Dispatch a bound operation to the matching capability.
    fn apply(&mut self, op: &Op) {
        match op {
            Op::Color(c) => self.set_color(*c),
            Op::Stroke(s) => self.set_stroke(s.color, s.width),
            Op::Opacity(o) => self.set_opacity(*o),
            Op::FillOpacity(o) => self.set_fill_opacity(*o),
            Op::Scale(f) => self.scale(*f),
            Op::MoveTo(p) => self.move_to(*p),
            Op::Shift(v) => self.shift(*v),
            Op::AlignTo(p) => self.align_to(p.target, p.direction),
            Op::NextTo(p) => self.next_to(p.target, p.direction, p.buff),
        }
    }
}

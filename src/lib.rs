//! jxpr composes array-programming expressions out of matrix terms and glyphs
//! for explainer animations.
//!
//! An expression such as `x + y → x_plus_y` is a set of named parts: wrapped
//! grids (a matrix split into cells, each cell paired with an outline) and
//! plain glyphs. The crate keeps the parts, a grouped view over them, and the
//! bulk styling that keeps items and their enclosures in sync.
//!
//! # Layers
//!
//! 1. **Visual boundary**: the [`Visual`] trait plus the retained [`Node`]
//!    implementation. Operations are a closed set ([`Op`], [`OpKind`]).
//! 2. **Grid**: [`Grid`] decomposed into a [`WrappedGrid`] by rows, columns or
//!    entries. Bulk calls take a [`Broadcast`] of one value for both
//!    collections or one per collection.
//! 3. **Expression**: [`ExpressionView`] over ordered [`Parts`], regrouped by
//!    a pure [`Grouper`] after every mutation.
//! 4. **Library**: [`Defaults`], [`Library`] and [`TermLoader`] turn TOML
//!    term tables into ready-made parts through a [`VisualFactory`].
//!
//! Nothing here renders or plays animations. [`WrappedGrid::animate`] returns
//! [`Directive`]s for the caller's animation runtime.
#![forbid(unsafe_code)]

mod expr;
mod foundation;
mod grid;
mod library;
mod visual;

pub use expr::grouping::{
    DEFAULT_GROUP_BUFF, Grouper, arranged, default_grouper, grouper, grouper_with, vgroup,
};
pub use expr::parts::{Part, Parts, Select};
pub use expr::view::ExpressionView;
pub use foundation::color::Color;
pub use foundation::core::{
    Direction, Point, Rect, Vec2, align_delta, critical_point, next_to_delta, union,
};
pub use foundation::error::{ExprError, ExprResult};
pub use grid::animate::{Directive, Role, StateFn, Transition};
pub use grid::broadcast::{Broadcast, Resolved};
pub use grid::matrix::{Decomposition, Grid};
pub use grid::wrapped::{Cell, Enclosures, WrappedGrid};
pub use library::config::{
    Defaults, EnclosureDefaults, EnclosureSizes, Fonts, GlyphDefaults, GlyphStyle, GridStyle,
    GroupingDefaults, MatrixDefaults, Metrics, Palette, Size,
};
pub use library::factory::{NodeFactory, VisualFactory};
pub use library::loader::{DEFAULT_TERM_NAMES, EXPRESSION_ORDER, TermLoader, default_filter};
pub use library::terms::{Entries, Library, Scalar, TermSet};
pub use visual::Visual;
pub use visual::layout::{arrange, arranged_group};
pub use visual::node::{Node, NodeKind, Style};
pub use visual::op::{DEFAULT_BUFF, Op, OpKind, Placement, Stroke, Value};

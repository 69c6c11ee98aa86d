use std::{fmt, rc::Rc};

use crate::{foundation::color::Color, visual::Visual};

/// Caller-supplied state function: maps a visual to the state it should animate into.
pub type StateFn<V> = Rc<dyn Fn(&V) -> V>;

/// Which member of a cell a directive targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Item,
    Enclosure,
}

/// Named transition understood by the animation runtime, or a state function.
#[derive(Clone)]
pub enum Transition<V> {
    FadeIn,
    FadeOut,
    Create,
    Write,
    Indicate { scale_factor: f64 },
    Wiggle,
    Circumscribe,
    FadeToColor(Color),
    Apply(StateFn<V>),
}

impl<V> Transition<V> {
    pub fn apply(f: impl Fn(&V) -> V + 'static) -> Self {
        Self::Apply(Rc::new(f))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FadeIn => "fade_in",
            Self::FadeOut => "fade_out",
            Self::Create => "create",
            Self::Write => "write",
            Self::Indicate { .. } => "indicate",
            Self::Wiggle => "wiggle",
            Self::Circumscribe => "circumscribe",
            Self::FadeToColor(_) => "fade_to_color",
            Self::Apply(_) => "apply",
        }
    }
}

impl<V: Visual> Transition<V> {
    /// Build the directive for one visual. Only the snapshot is touched; the
    /// source visual is left as is.
    pub fn directive(&self, index: usize, role: Role, subject: &V) -> Directive<V> {
        let target = match self {
            Self::Apply(f) => Some(f(subject)),
            Self::FadeToColor(color) => {
                let mut t = subject.clone();
                t.set_color(*color);
                Some(t)
            }
            _ => None,
        };
        Directive {
            index,
            role,
            transition: self.clone(),
            subject: subject.clone(),
            target,
        }
    }
}

impl<V> fmt::Debug for Transition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indicate { scale_factor } => f
                .debug_struct("Indicate")
                .field("scale_factor", scale_factor)
                .finish(),
            Self::FadeToColor(c) => f.debug_tuple("FadeToColor").field(c).finish(),
            Self::Apply(_) => f.write_str("Apply(..)"),
            other => f.write_str(other.name()),
        }
    }
}

/// One not-yet-played animation over a single cell member.
#[derive(Clone, Debug)]
pub struct Directive<V> {
    pub index: usize,
    pub role: Role,
    pub transition: Transition<V>,
    /// Snapshot of the visual when the directive was built.
    pub subject: V,
    /// End state, for transitions that define one.
    pub target: Option<V>,
}

/// Convenience result type used across jxpr.
pub type ExprResult<T> = Result<T, ExprError>;

/// Error taxonomy for expression construction and bulk styling.
///
/// All of these are authoring-time errors raised by malformed choreography
/// calls. None are retried; each names the offending part, index or attribute.
#[derive(thiserror::Error, Debug)]
pub enum ExprError {
    /// Enclosure count or grid row length does not match the cell count.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A part name that is not present in the expression.
    #[error("unknown part: '{0}'")]
    UnknownPart(String),

    /// An operation name outside the supported set, or one a part cannot carry.
    #[error("unknown attribute: '{0}'")]
    UnknownAttribute(String),

    /// A value of the wrong kind bound to an operation.
    #[error("argument mismatch: '{attribute}' expects {expected}")]
    ArgumentMismatch {
        attribute: String,
        expected: &'static str,
    },

    /// A cell index outside `[0, len)`.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid or incomplete library / defaults data.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExprError {
    /// Build a [`ExprError::ShapeMismatch`] value.
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Build a [`ExprError::UnknownPart`] value.
    pub fn unknown_part(name: impl Into<String>) -> Self {
        Self::UnknownPart(name.into())
    }

    /// Build a [`ExprError::UnknownAttribute`] value.
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }

    /// Build a [`ExprError::ArgumentMismatch`] value.
    pub fn argument_mismatch(attribute: impl Into<String>, expected: &'static str) -> Self {
        Self::ArgumentMismatch {
            attribute: attribute.into(),
            expected,
        }
    }

    /// Build a [`ExprError::IndexOutOfRange`] value.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Build a [`ExprError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

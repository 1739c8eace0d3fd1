/// Convenience result type used across reel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a programming error from the caller's point of view: the animation core is
/// pure, so retrying the same call yields the same failure.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Degenerate, unsorted or too-short breakpoint sequence.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Non-positive or non-finite spring damping ratio, stiffness or mass.
    #[error("invalid spring parameters: {0}")]
    InvalidSpringParameters(String),

    /// Invalid user-provided timeline or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a scene for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::InvalidDomain`] value.
    pub fn invalid_domain(msg: impl Into<String>) -> Self {
        Self::InvalidDomain(msg.into())
    }

    /// Build a [`ReelError::InvalidSpringParameters`] value.
    pub fn invalid_spring(msg: impl Into<String>) -> Self {
        Self::InvalidSpringParameters(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Error types for inspection operations.
//!
//! Inspection has a single failure mode: the top-level input is neither
//! sequence-producing nor a plain keyed structure, so there is nothing
//! to traverse. Nested non-coercible values are not errors; they simply
//! become leaves. Callers should treat this error as a contract
//! violation at the call site, not a transient condition.

use thiserror::Error;

/// Structured error types for inspection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InspectError {
    /// The top-level input cannot be viewed as a sequence of children.
    ///
    /// The message identifies the offending value by its display
    /// rendering.
    #[error("{value} isn't and can't be iterable")]
    NotCoercible { value: String },
}

impl InspectError {
    /// Check if this error signals an invalid top-level input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, InspectError::NotCoercible { .. })
    }
}

// Conversion from InspectError to the main Error type
impl From<InspectError> for crate::Error {
    fn from(err: InspectError) -> Self {
        crate::Error::Inspect(err)
    }
}

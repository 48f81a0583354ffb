//!
//! Tagstat: frequency statistics over the shape of dynamic data.
//! This library classifies heterogeneous values by a string "tag" (a
//! type-like label) and counts tag occurrences across the elements
//! reachable from a container, either one level deep or recursively up
//! to a depth limit.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A closed sum type over the
//!   representational categories of dynamic data: primitives, dates,
//!   functions, sequences, keyed structures, class instances, and
//!   explicitly labeled values.
//! * **Tags**: String labels resolved per value with a fixed priority:
//!   explicit label, then class name, then a canonical category name
//!   such as `"Number"` or `"Array"`.
//! * **Coercion**: The single decision point splitting values into
//!   branches (decomposed into children) and leaves (tagged directly).
//! * **Inspection (`inspect_shallow`, `inspect_deep`)**: A bounded
//!   depth-first walk emitting one tag per leaf, grouped into a
//!   tag-to-count mapping.
//!
//! ## Example
//!
//! ```
//! use tagstat::{Object, Value, inspect_shallow};
//!
//! let mut particle = Object::new();
//! particle.set("x", 10).set("y", 20).set("exists", true);
//!
//! let counts = inspect_shallow(&Value::from(particle)).unwrap();
//! assert_eq!(counts.get("Number"), Some(&2));
//! assert_eq!(counts.get("Boolean"), Some(&1));
//! ```

mod coerce;
pub mod errors;
mod inspect;
pub mod value;
mod walk;

pub use errors::InspectError;
pub use inspect::{
    DEFAULT_MAX_DEPTH, Inspector, TagCounts, get_tag, inspect_deep, inspect_deep_bounded,
    inspect_shallow,
};
pub use value::{Function, Instance, Map, Object, Set, Value};

/// Crate version, exposed for diagnostics and compatibility checks.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the tagstat library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the tagstat library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured inspection errors from the errors module
    #[error(transparent)]
    Inspect(errors::InspectError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Inspect(_) => "inspect",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error signals an invalid top-level input.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::Inspect(inspect_err) => inspect_err.is_input_error(),
            _ => false,
        }
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}

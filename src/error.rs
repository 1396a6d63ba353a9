//! Error types for labeled dictionaries and the values they hold.
//!
//! Every failure surfaced by this crate belongs to one of a few categories.
//! The category is the enum variant; the payload is a human readable message.
//!
//! ## Error Categories
//!
//! - **Constraint violations**: duplicate labels, a value variant rejected by an item policy
//! - **Length mismatches**: label counts that disagree with the number of keys or rows
//! - **Attribute errors**: an equality facet asks for metadata the value does not expose
//! - **Type errors**: a key or value of the wrong kind for a container's policy
//! - **Key errors**: selecting keys that are not present
//!
//! ## Examples
//!
//! ```rust
//! use fancy_collections::{labeled_dict, Error, Series};
//!
//! let mut dict = labeled_dict! {
//!     "a" => Series::from_values([1, 2]),
//!     "b" => Series::from_values([3]),
//! };
//!
//! let err = dict.set_columns(["x", "y", "z"]).unwrap_err();
//! assert!(matches!(err, Error::LengthMismatch(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors that can occur when building, mutating or comparing
/// labeled containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A uniqueness or item restriction was violated.
    #[error("{0}")]
    ConstraintViolation(String),

    /// Two counts that must agree did not.
    #[error("{0}")]
    LengthMismatch(String),

    /// Requested metadata is not exposed by the compared value.
    #[error("{0}")]
    Attribute(String),

    /// A key or value is of a kind the container does not accept.
    #[error("{0}")]
    Type(String),

    /// One or more keys are missing.
    #[error("{0}")]
    Key(String),
}

impl Error {
    /// Creates the error for a label sequence that contains duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::Error;
    ///
    /// let err = Error::duplicates("columns");
    /// assert_eq!(err.to_string(), "columns must not have duplicates.");
    /// ```
    pub fn duplicates(what: &str) -> Self {
        Error::ConstraintViolation(format!("{} must not have duplicates.", what))
    }

    /// Creates a length mismatch error reporting both counts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::Error;
    ///
    /// let err = Error::length_mismatch("columns", 3, 2);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "columns has 3 elements, but 2 values was passed."
    /// );
    /// ```
    pub fn length_mismatch(what: &str, expected: usize, found: usize) -> Self {
        Error::LengthMismatch(format!(
            "{} has {} elements, but {} values was passed.",
            what, expected, found
        ))
    }

    /// Creates a constraint violation with a custom message.
    pub fn constraint<T: fmt::Display>(msg: T) -> Self {
        Error::ConstraintViolation(msg.to_string())
    }

    /// Creates an attribute error for missing metadata.
    pub fn attribute<T: fmt::Display>(msg: T) -> Self {
        Error::Attribute(msg.to_string())
    }

    /// Creates a type error, typically raised by an item policy.
    pub fn type_error<T: fmt::Display>(msg: T) -> Self {
        Error::Type(msg.to_string())
    }

    /// Creates a key error listing the missing keys.
    pub fn missing_keys<T: fmt::Display>(keys: &[T]) -> Self {
        let listed = keys
            .iter()
            .map(|k| format!("'{}'", k))
            .collect::<Vec<_>>()
            .join(", ");
        Error::Key(format!("[{}] does not exist", listed))
    }

    /// Returns the message carried by this error, without its category.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::ConstraintViolation(m)
            | Error::LengthMismatch(m)
            | Error::Attribute(m)
            | Error::Type(m)
            | Error::Key(m) => m,
        }
    }

    /// Re-wraps the error with a contextual prefix, keeping its category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::Error;
    ///
    /// let err = Error::type_error("key 3 is not a string").with_context("Cannot set new columns");
    /// assert!(matches!(err, Error::Type(_)));
    /// assert_eq!(err.to_string(), "Cannot set new columns, because key 3 is not a string");
    /// ```
    #[must_use]
    pub fn with_context(self, context: &str) -> Self {
        let msg = format!("{}, because {}", context, self.message());
        match self {
            Error::ConstraintViolation(_) => Error::ConstraintViolation(msg),
            Error::LengthMismatch(_) => Error::LengthMismatch(msg),
            Error::Attribute(_) => Error::Attribute(msg),
            Error::Type(_) => Error::Type(msg),
            Error::Key(_) => Error::Key(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_category() {
        let err = Error::duplicates("columns").with_context("Cannot set new columns");
        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(
            err.message(),
            "Cannot set new columns, because columns must not have duplicates."
        );
    }

    #[test]
    fn test_missing_keys_message() {
        let err = Error::missing_keys(&["x", "y"]);
        assert_eq!(err.to_string(), "['x', 'y'] does not exist");
    }

    #[test]
    fn test_every_category_survives_context() {
        let errors = [
            Error::constraint("c"),
            Error::length_mismatch("keys", 1, 2),
            Error::attribute("a"),
            Error::type_error("t"),
            Error::missing_keys(&["k"]),
        ];
        for err in errors {
            let wrapped = err.clone().with_context("ctx");
            assert_eq!(std::mem::discriminant(&wrapped), std::mem::discriminant(&err));
            assert!(wrapped.message().starts_with("ctx, because "));
        }
    }
}

//! Fluent, type-indexed field assertions.
//!
//! [`field`] binds a field name to a value and returns the asserter for the
//! value's type. Each asserter only offers the checks that make sense for
//! its type; every check either hands the asserter back for chaining or
//! returns the first [`AssertionError`] it hits.
//!
//! Absent values are modelled with `Option`. Presence is checked by
//! `not_null` (and by the checks that imply it, such as `not_blank`); the
//! other checks let an absent value through.
//!
//! ```
//! use pure_asserts::asserts::field;
//!
//! # fn main() -> Result<(), pure_asserts::errors::AssertionError> {
//! field("name", "Alice").not_blank()?.max_length(20)?;
//! field("score", 7).min(0)?.max(10)?;
//! # Ok(())
//! # }
//! ```

mod collection;
mod numeric;
mod string;
mod temporal;
mod uuids;

pub use collection::{CollectionAsserter, Container};
pub use numeric::{Number, NumberAsserter};
pub use string::StringAsserter;
pub use temporal::{Temporal, TemporalAsserter};
pub use uuids::UuidAsserter;

use crate::errors::{AssertResult, AssertionError};

/// A value that can be bound to a field for assertions.
pub trait Assertable {
    /// The asserter exposing the checks for this type.
    type Asserter;

    /// Binds the value to `field`.
    fn into_asserter(self, field: String) -> Self::Asserter;
}

/// Starts an assertion chain on a named value.
///
/// The returned asserter depends on the value's type: strings get length and
/// pattern checks, numbers get bounds, instants and dates get ordering
/// checks, UUIDs get nil and version checks, slices get size checks.
pub fn field<V: Assertable>(field: impl Into<String>, value: V) -> V::Asserter {
    value.into_asserter(field.into())
}

/// Ensures `value` is present and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`] when `value` is `None`.
pub fn not_null<T>(field: &str, value: Option<T>) -> AssertResult<T> {
    match value {
        Some(value) => Ok(value),
        None => reject(AssertionError::null_value(field)),
    }
}

/// Ensures a string is present and not blank.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`] when the string is
/// absent, empty, or whitespace only.
pub fn not_blank<'a>(field: &str, value: impl Into<Option<&'a str>>) -> AssertResult<&'a str> {
    match value.into() {
        None => reject(AssertionError::null_value(field)),
        Some(s) if s.trim().is_empty() => reject(AssertionError::blank_value(field)),
        Some(s) => Ok(s),
    }
}

/// Ensures a container (slice, vector, set, map, or an `Option` of one) is
/// present and holds at least one element.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`] when the container is
/// absent or empty.
pub fn not_empty<C: Container + ?Sized>(field: &str, value: &C) -> AssertResult<()> {
    match value.size() {
        None => reject(AssertionError::null_value(field)),
        Some(0) => reject(AssertionError::empty_value(field)),
        Some(_) => Ok(()),
    }
}

/// Single exit point for failed checks.
pub(crate) fn reject<T>(error: AssertionError) -> AssertResult<T> {
    tracing::debug!(
        field = error.field(),
        kind = %error.kind(),
        "{}",
        error.message()
    );
    Err(error)
}

//! One-call `require_*` helpers.
//!
//! Each helper runs a single check through [`crate::asserts`] and hands the
//! value back unchanged. New code should chain checks with
//! [`asserts::field`](crate::asserts::field) instead.

#![allow(deprecated)]

use crate::asserts::{self, Container, Number};
use crate::errors::{AssertResult, AssertionError};
use chrono::NaiveDate;
use std::fmt::Display;

/// Ensures `value` is present and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`] when absent.
#[deprecated(note = "use `asserts::not_null` or `asserts::field(..).not_null()`")]
pub fn require_non_null<T>(value: Option<T>, field: &str) -> AssertResult<T> {
    asserts::not_null(field, value)
}

/// Ensures a string is present and not blank, and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`].
#[deprecated(note = "use `asserts::field(..).not_blank()`")]
pub fn require_non_blank<'a>(
    value: impl Into<Option<&'a str>>,
    field: &str,
) -> AssertResult<&'a str> {
    asserts::not_blank(field, value)
}

/// Ensures a container is present and not empty, and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`].
#[deprecated(note = "use `asserts::not_empty` or `asserts::field(..).not_empty()`")]
pub fn require_non_empty<C: Container>(value: C, field: &str) -> AssertResult<C> {
    asserts::not_empty(field, &value)?;
    Ok(value)
}

/// Ensures a number is strictly positive and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::NumberValueTooLow`].
#[deprecated(note = "use `asserts::field(..).strictly_positive()`")]
pub fn require_positive<T: Number>(value: T, field: &str) -> AssertResult<T> {
    asserts::field(field, value).strictly_positive()?;
    Ok(value)
}

/// Ensures `condition` holds for `value` and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::RequiredValue`] carrying `reason` when the
/// condition fails.
#[deprecated(note = "use the typed checks of `asserts::field`")]
pub fn require_valid<T, F>(value: T, field: &str, condition: F, reason: &str) -> AssertResult<T>
where
    T: Display,
    F: FnOnce(&T) -> bool,
{
    if condition(&value) {
        return Ok(value);
    }
    asserts::reject(AssertionError::required_invalid(
        field,
        Some(&value as &dyn Display),
        reason,
    ))
}

/// Ensures a date of birth lies in the past and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::NotBeforeTime`] for field `dateOfBirth`.
#[deprecated(note = "use `asserts::field(\"dateOfBirth\", ..).in_past()`")]
pub fn require_valid_date_of_birth(date: NaiveDate) -> AssertResult<NaiveDate> {
    asserts::field("dateOfBirth", date).in_past()?;
    Ok(date)
}

/// Ensures `url` is an absolute `http`/`https` URL and returns it.
///
/// # Errors
///
/// Returns [`AssertionError::MissingMandatoryValue`] for field `url`.
#[cfg(feature = "url")]
#[deprecated(note = "use `asserts::field(\"url\", ..).url()`")]
pub fn require_valid_url(url: &str) -> AssertResult<&str> {
    asserts::field("url", url).url()?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use chrono::{Days, Local};

    #[test]
    fn test_require_non_null() {
        assert_eq!(require_non_null(Some("test"), "field").unwrap(), "test");
        assert!(require_non_null(None::<&str>, "field").is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("test", "field").unwrap(), "test");
        assert!(require_non_blank("", "field").is_err());
        assert!(require_non_blank("  ", "field").is_err());
        assert!(require_non_blank(None::<&str>, "field").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        let list = vec!["a"];
        assert_eq!(require_non_empty(&list, "list").unwrap(), &list);
        assert!(require_non_empty(Vec::<String>::new(), "list").is_err());
        assert!(require_non_empty(None::<Vec<String>>, "list").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(10, "val").unwrap(), 10);
        assert_eq!(require_positive(10_i64, "val").unwrap(), 10);
        assert!(require_positive(0, "val").is_err());
        assert!(require_positive(-1, "val").is_err());
    }

    #[test]
    fn test_require_valid() {
        assert_eq!(require_valid(4_i32, "even", |v| *v % 2 == 0, "must be even").unwrap(), 4);

        let err = require_valid(3_i32, "even", |v| *v % 2 == 0, "must be even").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
        assert_eq!(
            err.message(),
            "The required value 'even' is invalid: must be even. Invalid value: 3"
        );
    }

    #[test]
    fn test_require_valid_date_of_birth() {
        let today = Local::now().date_naive();
        let past = today.checked_sub_days(Days::new(20 * 365)).unwrap();
        assert_eq!(require_valid_date_of_birth(past).unwrap(), past);

        let future = today.checked_add_days(Days::new(1)).unwrap();
        let err = require_valid_date_of_birth(future).unwrap_err();
        assert_eq!(err.field(), "dateOfBirth");
        assert_eq!(err.kind(), ErrorKind::NotBeforeTime);
    }

    #[cfg(feature = "url")]
    #[test]
    fn test_require_valid_url() {
        let url = "https://example.com";
        assert_eq!(require_valid_url(url).unwrap(), url);

        let err = require_valid_url("invalid-url").unwrap_err();
        assert_eq!(err.field(), "url");
    }
}

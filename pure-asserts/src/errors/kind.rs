//! Failure categories reported by assertion errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of assertion failure categories.
///
/// Several distinct failures share a kind: a nil UUID, a UUID version
/// mismatch and a generic invalid value all report
/// [`ErrorKind::MissingMandatoryValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A mandatory value is missing, null, blank, or empty.
    MissingMandatoryValue,
    /// A time value is not after the expected time.
    NotAfterTime,
    /// A time value is not before the expected time.
    NotBeforeTime,
    /// A collection contains a null element.
    NullElementInCollection,
    /// A numeric value is too high.
    NumberValueTooHigh,
    /// A numeric value is too low.
    NumberValueTooLow,
    /// A string is longer than allowed.
    StringTooLong,
    /// A string is shorter than required.
    StringTooShort,
    /// A collection has too many elements.
    TooManyElements,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::MissingMandatoryValue,
        Self::NotAfterTime,
        Self::NotBeforeTime,
        Self::NullElementInCollection,
        Self::NumberValueTooHigh,
        Self::NumberValueTooLow,
        Self::StringTooLong,
        Self::StringTooShort,
        Self::TooManyElements,
    ];

    /// Returns the stable code used for display and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingMandatoryValue => "MISSING_MANDATORY_VALUE",
            Self::NotAfterTime => "NOT_AFTER_TIME",
            Self::NotBeforeTime => "NOT_BEFORE_TIME",
            Self::NullElementInCollection => "NULL_ELEMENT_IN_COLLECTION",
            Self::NumberValueTooHigh => "NUMBER_VALUE_TOO_HIGH",
            Self::NumberValueTooLow => "NUMBER_VALUE_TOO_LOW",
            Self::StringTooLong => "STRING_TOO_LONG",
            Self::StringTooShort => "STRING_TOO_SHORT",
            Self::TooManyElements => "TOO_MANY_ELEMENTS",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Staged builders for errors that need several values.
//!
//! Each builder is a chain of stage types. A step consumes its stage and
//! returns the next one, and only the final step returns an
//! [`AssertionError`], so a caller can neither skip an input nor supply the
//! inputs out of order.
//!
//! ```
//! use pure_asserts::errors::{AssertionError, ErrorKind};
//!
//! let err = AssertionError::number_too_high()
//!     .field("score")
//!     .max(10)
//!     .value(15);
//!
//! assert_eq!(err.kind(), ErrorKind::NumberValueTooHigh);
//! assert_eq!(err.message(), "Value of field \"score\" must be at most 10 but was 15");
//! ```

use super::AssertionError;
use std::fmt::Display;

impl AssertionError {
    /// Starts a "must be strictly after" error.
    #[must_use]
    pub const fn strictly_not_after() -> TimeComparisonBuilder {
        TimeComparisonBuilder::new(Direction::After, true)
    }

    /// Starts a "must be after" error.
    #[must_use]
    pub const fn not_after() -> TimeComparisonBuilder {
        TimeComparisonBuilder::new(Direction::After, false)
    }

    /// Starts a "must be strictly before" error.
    #[must_use]
    pub const fn strictly_not_before() -> TimeComparisonBuilder {
        TimeComparisonBuilder::new(Direction::Before, true)
    }

    /// Starts a "must be before" error.
    #[must_use]
    pub const fn not_before() -> TimeComparisonBuilder {
        TimeComparisonBuilder::new(Direction::Before, false)
    }

    /// Starts a [`AssertionError::NumberValueTooHigh`].
    #[must_use]
    pub const fn number_too_high() -> NumberTooHighBuilder {
        NumberTooHighBuilder(())
    }

    /// Starts a [`AssertionError::NumberValueTooLow`].
    #[must_use]
    pub const fn number_too_low() -> NumberTooLowBuilder {
        NumberTooLowBuilder(())
    }

    /// Starts a [`AssertionError::StringTooLong`].
    #[must_use]
    pub const fn string_too_long() -> StringTooLongBuilder {
        StringTooLongBuilder(())
    }

    /// Starts a [`AssertionError::StringTooShort`].
    #[must_use]
    pub const fn string_too_short() -> StringTooShortBuilder {
        StringTooShortBuilder(())
    }

    /// Starts a [`AssertionError::TooManyElements`].
    #[must_use]
    pub const fn too_many_elements() -> TooManyElementsBuilder {
        TooManyElementsBuilder(())
    }

    /// Starts a [`AssertionError::UuidVersionMismatch`].
    #[must_use]
    pub const fn uuid_version_mismatch() -> UuidVersionMismatchBuilder {
        UuidVersionMismatchBuilder(())
    }
}

// ============================================================================
// TIME COMPARISON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    After,
    Before,
}

/// Comparison hint for a time error; next step is [`value`](Self::value).
#[derive(Debug, Clone, Copy)]
pub struct TimeComparisonBuilder {
    direction: Direction,
    strict: bool,
}

impl TimeComparisonBuilder {
    const fn new(direction: Direction, strict: bool) -> Self {
        Self { direction, strict }
    }

    fn hint(self) -> &'static str {
        match (self.direction, self.strict) {
            (Direction::After, true) => "must be strictly after",
            (Direction::After, false) => "must be after",
            (Direction::Before, true) => "must be strictly before",
            (Direction::Before, false) => "must be before",
        }
    }

    /// Sets the checked value.
    #[must_use]
    pub fn value<T: Display>(self, value: T) -> TimeComparisonValue<T> {
        TimeComparisonValue { hint: self, value }
    }
}

/// Time error with its value set; next step is [`field`](Self::field).
#[derive(Debug)]
pub struct TimeComparisonValue<T> {
    hint: TimeComparisonBuilder,
    value: T,
}

impl<T: Display> TimeComparisonValue<T> {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> TimeComparisonField<T> {
        TimeComparisonField {
            hint: self.hint,
            value: self.value,
            field: field.into(),
        }
    }
}

/// Time error with value and field set; [`other`](Self::other) finishes it.
#[derive(Debug)]
pub struct TimeComparisonField<T> {
    hint: TimeComparisonBuilder,
    value: T,
    field: String,
}

impl<T: Display> TimeComparisonField<T> {
    /// Sets the bound and returns the error.
    #[must_use]
    pub fn other(self, other: T) -> AssertionError {
        let value = self.value.to_string();
        let other = other.to_string();
        let message = format!(
            "Time {value} in \"{}\" {} {other} but wasn't",
            self.field,
            self.hint.hint()
        );
        let strict = self.hint.strict;

        match self.hint.direction {
            Direction::After => AssertionError::NotAfterTime {
                field: self.field,
                message,
                value,
                other,
                strict,
            },
            Direction::Before => AssertionError::NotBeforeTime {
                field: self.field,
                message,
                value,
                other,
                strict,
            },
        }
    }
}

// ============================================================================
// NUMBER BOUNDS
// ============================================================================

/// Entry stage of a too-high error; next step is [`field`](Self::field).
#[derive(Debug)]
pub struct NumberTooHighBuilder(());

impl NumberTooHighBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> NumberTooHighField {
        NumberTooHighField {
            field: field.into(),
        }
    }
}

/// Too-high error with its field set; next step is [`max`](Self::max).
#[derive(Debug)]
pub struct NumberTooHighField {
    field: String,
}

impl NumberTooHighField {
    /// Sets the maximum allowed value.
    #[must_use]
    pub fn max(self, max: impl Display) -> NumberTooHighMax {
        NumberTooHighMax {
            field: self.field,
            max: max.to_string(),
        }
    }
}

/// Too-high error with field and bound set; [`value`](Self::value) finishes it.
#[derive(Debug)]
pub struct NumberTooHighMax {
    field: String,
    max: String,
}

impl NumberTooHighMax {
    /// Sets the checked value and returns the error.
    #[must_use]
    pub fn value(self, value: impl Display) -> AssertionError {
        let value = value.to_string();
        let message = format!(
            "Value of field \"{}\" must be at most {} but was {value}",
            self.field, self.max
        );
        AssertionError::NumberValueTooHigh {
            field: self.field,
            message,
            max: self.max,
            value,
        }
    }
}

/// Entry stage of a too-low error; next step is [`field`](Self::field).
#[derive(Debug)]
pub struct NumberTooLowBuilder(());

impl NumberTooLowBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> NumberTooLowField {
        NumberTooLowField {
            field: field.into(),
        }
    }
}

/// Too-low error with its field set; next step is [`min`](Self::min).
#[derive(Debug)]
pub struct NumberTooLowField {
    field: String,
}

impl NumberTooLowField {
    /// Sets the minimum allowed value.
    #[must_use]
    pub fn min(self, min: impl Display) -> NumberTooLowMin {
        NumberTooLowMin {
            field: self.field,
            min: min.to_string(),
        }
    }
}

/// Too-low error with field and bound set; [`value`](Self::value) finishes it.
#[derive(Debug)]
pub struct NumberTooLowMin {
    field: String,
    min: String,
}

impl NumberTooLowMin {
    /// Sets the checked value and returns the error.
    #[must_use]
    pub fn value(self, value: impl Display) -> AssertionError {
        let value = value.to_string();
        let message = format!(
            "Value of field \"{}\" must be at least {} but was {value}",
            self.field, self.min
        );
        AssertionError::NumberValueTooLow {
            field: self.field,
            message,
            min: self.min,
            value,
        }
    }
}

// ============================================================================
// STRING LENGTH
// ============================================================================

/// Entry stage of a too-long error.
#[derive(Debug)]
pub struct StringTooLongBuilder(());

impl StringTooLongBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> StringTooLongField {
        StringTooLongField {
            field: field.into(),
        }
    }
}

/// Too-long error with its field set.
#[derive(Debug)]
pub struct StringTooLongField {
    field: String,
}

impl StringTooLongField {
    /// Sets the checked string.
    #[must_use]
    pub fn value(self, value: &str) -> StringTooLongValue<'_> {
        StringTooLongValue {
            field: self.field,
            value,
        }
    }
}

/// Too-long error with field and value set.
#[derive(Debug)]
pub struct StringTooLongValue<'a> {
    field: String,
    value: &'a str,
}

impl StringTooLongValue<'_> {
    /// Sets the maximum length and returns the error.
    #[must_use]
    pub fn max_length(self, max_length: usize) -> AssertionError {
        let current_length = self.value.chars().count();
        let message = format!(
            "The value \"{}\" in field \"{}\" must be at most {max_length} long but was {current_length}",
            self.value, self.field
        );
        AssertionError::StringTooLong {
            field: self.field,
            message,
            max_length,
            current_length,
        }
    }
}

/// Entry stage of a too-short error.
#[derive(Debug)]
pub struct StringTooShortBuilder(());

impl StringTooShortBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> StringTooShortField {
        StringTooShortField {
            field: field.into(),
        }
    }
}

/// Too-short error with its field set.
#[derive(Debug)]
pub struct StringTooShortField {
    field: String,
}

impl StringTooShortField {
    /// Sets the checked string.
    #[must_use]
    pub fn value(self, value: &str) -> StringTooShortValue<'_> {
        StringTooShortValue {
            field: self.field,
            value,
        }
    }
}

/// Too-short error with field and value set.
#[derive(Debug)]
pub struct StringTooShortValue<'a> {
    field: String,
    value: &'a str,
}

impl StringTooShortValue<'_> {
    /// Sets the minimum length and returns the error.
    #[must_use]
    pub fn min_length(self, min_length: usize) -> AssertionError {
        let current_length = self.value.chars().count();
        let message = format!(
            "The value \"{}\" in field \"{}\" must be at least {min_length} long but was only {current_length}",
            self.value, self.field
        );
        AssertionError::StringTooShort {
            field: self.field,
            message,
            min_length,
            current_length,
        }
    }
}

// ============================================================================
// COLLECTION SIZE
// ============================================================================

/// Entry stage of a too-many-elements error.
#[derive(Debug)]
pub struct TooManyElementsBuilder(());

impl TooManyElementsBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> TooManyElementsField {
        TooManyElementsField {
            field: field.into(),
        }
    }
}

/// Too-many-elements error with its field set.
#[derive(Debug)]
pub struct TooManyElementsField {
    field: String,
}

impl TooManyElementsField {
    /// Sets the maximum size.
    #[must_use]
    pub fn max_size(self, max_size: usize) -> TooManyElementsMax {
        TooManyElementsMax {
            field: self.field,
            max_size,
        }
    }
}

/// Too-many-elements error with field and bound set.
#[derive(Debug)]
pub struct TooManyElementsMax {
    field: String,
    max_size: usize,
}

impl TooManyElementsMax {
    /// Sets the actual size and returns the error.
    #[must_use]
    pub fn size(self, size: usize) -> AssertionError {
        let message = format!(
            "Size of collection \"{}\" must be at most {} but was {size}",
            self.field, self.max_size
        );
        AssertionError::TooManyElements {
            field: self.field,
            message,
            max_size: self.max_size,
            current_size: size,
        }
    }
}

// ============================================================================
// UUID VERSION
// ============================================================================

/// Entry stage of a UUID version mismatch.
#[derive(Debug)]
pub struct UuidVersionMismatchBuilder(());

impl UuidVersionMismatchBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn field(self, field: impl Into<String>) -> UuidVersionMismatchField {
        UuidVersionMismatchField {
            field: field.into(),
        }
    }
}

/// UUID version mismatch with its field set.
#[derive(Debug)]
pub struct UuidVersionMismatchField {
    field: String,
}

impl UuidVersionMismatchField {
    /// Sets the required version.
    #[must_use]
    pub fn expected_version(self, expected_version: usize) -> UuidVersionMismatchExpected {
        UuidVersionMismatchExpected {
            field: self.field,
            expected_version,
        }
    }
}

/// UUID version mismatch with field and expected version set.
#[derive(Debug)]
pub struct UuidVersionMismatchExpected {
    field: String,
    expected_version: usize,
}

impl UuidVersionMismatchExpected {
    /// Sets the version found and returns the error.
    #[must_use]
    pub fn actual_version(self, actual_version: usize) -> AssertionError {
        let message = format!(
            "UUID version mismatch for field '{}'. Expected: {}, Actual: {actual_version}",
            self.field, self.expected_version
        );
        AssertionError::UuidVersionMismatch {
            field: self.field,
            message,
            expected_version: self.expected_version,
            actual_version,
        }
    }
}

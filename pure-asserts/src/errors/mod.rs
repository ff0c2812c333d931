//! Error types for the pure-asserts library.
//!
//! Every failed check produces an [`AssertionError`]. Each variant covers one
//! failure scenario and carries exactly the values that scenario needs; the
//! message is rendered when the error is built and never changes afterwards.
//!
//! Errors that need several values (time comparisons, bounds, sizes) are
//! assembled through the staged builders in [`builders`].

pub mod builders;
mod kind;

pub use builders::{
    NumberTooHighBuilder, NumberTooLowBuilder, StringTooLongBuilder, StringTooShortBuilder,
    TimeComparisonBuilder, TooManyElementsBuilder, UuidVersionMismatchBuilder,
};
pub use kind::ErrorKind;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Result alias for assertion checks.
pub type AssertResult<T> = Result<T, AssertionError>;

/// Why a mandatory value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// The value was absent.
    Null,
    /// The value was empty or whitespace only.
    Blank,
    /// The container had no elements.
    Empty,
}

impl MissingReason {
    /// Returns the tag rendered in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Blank => "blank",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed assertion on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// A mandatory value was null, blank, empty, or rejected with a custom message.
    #[error("{message}")]
    MissingMandatoryValue {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The reason tag, `None` when the message was supplied by the caller.
        reason: Option<MissingReason>,
    },

    /// A time value was not after its bound.
    #[error("{message}")]
    NotAfterTime {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The checked value.
        value: String,
        /// The bound it was compared against.
        other: String,
        /// Whether equality was rejected too.
        strict: bool,
    },

    /// A time value was not before its bound.
    #[error("{message}")]
    NotBeforeTime {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The checked value.
        value: String,
        /// The bound it was compared against.
        other: String,
        /// Whether equality was rejected too.
        strict: bool,
    },

    /// A collection contained an absent element.
    #[error("{message}")]
    NullElementInCollection {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
    },

    /// A number was above its maximum.
    #[error("{message}")]
    NumberValueTooHigh {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The maximum allowed value.
        max: String,
        /// The checked value.
        value: String,
    },

    /// A number was below its minimum.
    #[error("{message}")]
    NumberValueTooLow {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The minimum allowed value.
        min: String,
        /// The checked value.
        value: String,
    },

    /// A string was longer than allowed.
    #[error("{message}")]
    StringTooLong {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The maximum length.
        max_length: usize,
        /// The length of the checked value.
        current_length: usize,
    },

    /// A string was shorter than required.
    #[error("{message}")]
    StringTooShort {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The minimum length.
        min_length: usize,
        /// The length of the checked value.
        current_length: usize,
    },

    /// A collection had more elements than allowed.
    #[error("{message}")]
    TooManyElements {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The maximum size.
        max_size: usize,
        /// The size of the checked collection.
        current_size: usize,
    },

    /// A UUID was the nil UUID.
    #[error("{message}")]
    UuidIsNil {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
    },

    /// A UUID had an unexpected version.
    #[error("{message}")]
    UuidVersionMismatch {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The required version.
        expected_version: usize,
        /// The version found.
        actual_version: usize,
    },

    /// A required value was null, empty, negative, or otherwise invalid.
    #[error("{message}")]
    RequiredValue {
        /// The field name.
        field: String,
        /// The rendered message.
        message: String,
        /// The rejected value, when there was one.
        invalid_value: Option<String>,
    },
}

impl AssertionError {
    /// Creates an error for an absent value.
    #[must_use]
    pub fn null_value(field: impl Into<String>) -> Self {
        Self::missing(field, MissingReason::Null)
    }

    /// Creates an error for an empty or whitespace-only value.
    #[must_use]
    pub fn blank_value(field: impl Into<String>) -> Self {
        Self::missing(field, MissingReason::Blank)
    }

    /// Creates an error for an empty container.
    #[must_use]
    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::missing(field, MissingReason::Empty)
    }

    /// Creates a missing-value error carrying a caller-supplied message.
    #[must_use]
    pub fn bad_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingMandatoryValue {
            field: field.into(),
            message: message.into(),
            reason: None,
        }
    }

    fn missing(field: impl Into<String>, reason: MissingReason) -> Self {
        let field = field.into();
        let message = format!("The field \"{field}\" is mandatory and wasn't set ({reason})");
        Self::MissingMandatoryValue {
            field,
            message,
            reason: Some(reason),
        }
    }

    /// Creates an error for a collection holding an absent element.
    #[must_use]
    pub fn null_element(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("The field \"{field}\" contains a null element");
        Self::NullElementInCollection { field, message }
    }

    /// Creates an error for a nil UUID.
    #[must_use]
    pub fn uuid_is_nil(field: impl Into<String>) -> Self {
        let field = field.into();
        let message =
            format!("UUID for field '{field}' is nil (00000000-0000-0000-0000-000000000000)");
        Self::UuidIsNil { field, message }
    }

    /// Creates a required-value error for an absent value.
    #[must_use]
    pub fn required_null(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("The required value '{field}' cannot be null.");
        Self::RequiredValue {
            field,
            message,
            invalid_value: None,
        }
    }

    /// Creates a required-value error for an empty value.
    #[must_use]
    pub fn required_empty(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("The required value '{field}' cannot be empty.");
        Self::RequiredValue {
            field,
            message,
            invalid_value: Some(String::new()),
        }
    }

    /// Creates a required-value error for a negative number.
    #[must_use]
    pub fn required_negative(field: impl Into<String>, value: impl fmt::Display) -> Self {
        let field = field.into();
        let value = value.to_string();
        let message =
            format!("The required value '{field}' cannot be negative. Invalid value: {value}");
        Self::RequiredValue {
            field,
            message,
            invalid_value: Some(value),
        }
    }

    /// Creates a required-value error for a value rejected for `reason`.
    #[must_use]
    pub fn required_invalid(
        field: impl Into<String>,
        value: Option<&dyn fmt::Display>,
        reason: impl fmt::Display,
    ) -> Self {
        let field = field.into();
        let invalid_value = value.map(ToString::to_string);
        let shown = invalid_value.as_deref().unwrap_or("null");
        let message =
            format!("The required value '{field}' is invalid: {reason}. Invalid value: {shown}");
        Self::RequiredValue {
            field,
            message,
            invalid_value,
        }
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMandatoryValue { .. }
            | Self::UuidIsNil { .. }
            | Self::UuidVersionMismatch { .. }
            | Self::RequiredValue { .. } => ErrorKind::MissingMandatoryValue,
            Self::NotAfterTime { .. } => ErrorKind::NotAfterTime,
            Self::NotBeforeTime { .. } => ErrorKind::NotBeforeTime,
            Self::NullElementInCollection { .. } => ErrorKind::NullElementInCollection,
            Self::NumberValueTooHigh { .. } => ErrorKind::NumberValueTooHigh,
            Self::NumberValueTooLow { .. } => ErrorKind::NumberValueTooLow,
            Self::StringTooLong { .. } => ErrorKind::StringTooLong,
            Self::StringTooShort { .. } => ErrorKind::StringTooShort,
            Self::TooManyElements { .. } => ErrorKind::TooManyElements,
        }
    }

    /// Returns the name of the field that failed.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingMandatoryValue { field, .. }
            | Self::NotAfterTime { field, .. }
            | Self::NotBeforeTime { field, .. }
            | Self::NullElementInCollection { field, .. }
            | Self::NumberValueTooHigh { field, .. }
            | Self::NumberValueTooLow { field, .. }
            | Self::StringTooLong { field, .. }
            | Self::StringTooShort { field, .. }
            | Self::TooManyElements { field, .. }
            | Self::UuidIsNil { field, .. }
            | Self::UuidVersionMismatch { field, .. }
            | Self::RequiredValue { field, .. } => field,
        }
    }

    /// Returns the rendered, human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingMandatoryValue { message, .. }
            | Self::NotAfterTime { message, .. }
            | Self::NotBeforeTime { message, .. }
            | Self::NullElementInCollection { message, .. }
            | Self::NumberValueTooHigh { message, .. }
            | Self::NumberValueTooLow { message, .. }
            | Self::StringTooLong { message, .. }
            | Self::StringTooShort { message, .. }
            | Self::TooManyElements { message, .. }
            | Self::UuidIsNil { message, .. }
            | Self::UuidVersionMismatch { message, .. }
            | Self::RequiredValue { message, .. } => message,
        }
    }

    /// Returns the machine-readable parameters for this failure.
    ///
    /// The key set is fixed per kind; kinds without extra context return an
    /// empty map.
    #[must_use]
    pub fn parameters(&self) -> HashMap<String, String> {
        let pairs: Vec<(&str, String)> = match self {
            Self::NumberValueTooHigh { max, value, .. } => {
                vec![("max", max.clone()), ("value", value.clone())]
            }
            Self::NumberValueTooLow { min, value, .. } => {
                vec![("min", min.clone()), ("value", value.clone())]
            }
            Self::StringTooLong {
                max_length,
                current_length,
                ..
            } => vec![
                ("maxLength", max_length.to_string()),
                ("currentLength", current_length.to_string()),
            ],
            Self::StringTooShort {
                min_length,
                current_length,
                ..
            } => vec![
                ("minLength", min_length.to_string()),
                ("currentLength", current_length.to_string()),
            ],
            Self::TooManyElements {
                max_size,
                current_size,
                ..
            } => vec![
                ("maxSize", max_size.to_string()),
                ("currentSize", current_size.to_string()),
            ],
            _ => Vec::new(),
        };

        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("kind".to_string(), serde_json::json!(self.kind()));
        map.insert("field".to_string(), serde_json::json!(self.field()));
        map.insert("message".to_string(), serde_json::json!(self.message()));
        map.insert("parameters".to_string(), serde_json::json!(self.parameters()));
        map
    }
}

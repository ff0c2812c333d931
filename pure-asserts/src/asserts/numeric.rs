//! Bound checks shared by every numeric type.

use super::{reject, Assertable};
use crate::errors::{AssertResult, AssertionError};
use std::fmt;

/// A numeric type that can be range-checked.
///
/// Implemented for the common integer and float types and, with the
/// `decimal` feature, for [`rust_decimal::Decimal`].
pub trait Number: Copy + PartialOrd + fmt::Display {
    /// The additive identity, used by `positive` and `strictly_positive`.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_number! {
    i16 => 0,
    i32 => 0,
    i64 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
}

#[cfg(feature = "decimal")]
impl Number for rust_decimal::Decimal {
    const ZERO: Self = rust_decimal::Decimal::ZERO;
}

impl<T: Number> Assertable for T {
    type Asserter = NumberAsserter<T>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        NumberAsserter::new(field, Some(self))
    }
}

impl<T: Number> Assertable for Option<T> {
    type Asserter = NumberAsserter<T>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        NumberAsserter::new(field, self)
    }
}

/// Asserter for numbers.
///
/// Bound checks let an absent value through; use
/// [`not_null`](Self::not_null) to require one.
///
/// Every bound check fails only on an ordered comparison, so a float `NaN`
/// passes all of them.
#[derive(Debug, Clone)]
pub struct NumberAsserter<T> {
    field: String,
    value: Option<T>,
}

impl<T: Number> NumberAsserter<T> {
    fn new(field: String, value: Option<T>) -> Self {
        Self { field, value }
    }

    /// Returns the bound value.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Ensures the value is present.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::MissingMandatoryValue`] when absent.
    pub fn not_null(self) -> AssertResult<Self> {
        if self.value.is_none() {
            return reject(AssertionError::null_value(self.field));
        }
        Ok(self)
    }

    /// Ensures the value is zero or more.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooLow`] with `min = 0`.
    pub fn positive(self) -> AssertResult<Self> {
        self.min(T::ZERO)
    }

    /// Ensures the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooLow`] with `min = 0`.
    pub fn strictly_positive(self) -> AssertResult<Self> {
        self.over(T::ZERO)
    }

    /// Ensures the value is at least `min`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooLow`] when `value < min`.
    pub fn min(self, min: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value < min => self.too_low(min, value),
            _ => Ok(self),
        }
    }

    /// Ensures the value is at most `max`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooHigh`] when `value > max`.
    pub fn max(self, max: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value > max => self.too_high(max, value),
            _ => Ok(self),
        }
    }

    /// Ensures the value is strictly greater than `floor`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooLow`] when `value <= floor`.
    pub fn over(self, floor: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value <= floor => self.too_low(floor, value),
            _ => Ok(self),
        }
    }

    /// Ensures the value is strictly less than `ceiling`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NumberValueTooHigh`] when `value >= ceiling`.
    pub fn under(self, ceiling: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value >= ceiling => self.too_high(ceiling, value),
            _ => Ok(self),
        }
    }

    fn too_low(self, min: T, value: T) -> AssertResult<Self> {
        reject(
            AssertionError::number_too_low()
                .field(self.field)
                .min(min)
                .value(value),
        )
    }

    fn too_high(self, max: T, value: T) -> AssertResult<Self> {
        reject(
            AssertionError::number_too_high()
                .field(self.field)
                .max(max)
                .value(value),
        )
    }
}

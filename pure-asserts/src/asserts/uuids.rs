//! UUID checks.

use super::{reject, Assertable};
use crate::errors::{AssertResult, AssertionError};
use uuid::Uuid;

impl Assertable for Uuid {
    type Asserter = UuidAsserter;

    fn into_asserter(self, field: String) -> Self::Asserter {
        UuidAsserter::new(field, Some(self))
    }
}

impl Assertable for &Uuid {
    type Asserter = UuidAsserter;

    fn into_asserter(self, field: String) -> Self::Asserter {
        UuidAsserter::new(field, Some(*self))
    }
}

impl Assertable for Option<Uuid> {
    type Asserter = UuidAsserter;

    fn into_asserter(self, field: String) -> Self::Asserter {
        UuidAsserter::new(field, self)
    }
}

/// Asserter for UUIDs.
#[derive(Debug, Clone)]
pub struct UuidAsserter {
    field: String,
    value: Option<Uuid>,
}

impl UuidAsserter {
    fn new(field: String, value: Option<Uuid>) -> Self {
        Self { field, value }
    }

    /// Returns the bound value.
    #[must_use]
    pub fn value(&self) -> Option<Uuid> {
        self.value
    }

    /// Ensures the UUID is present.
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

    /// Ensures the UUID is present and not the nil UUID.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::UuidIsNil`] for the nil UUID and
    /// [`AssertionError::MissingMandatoryValue`] when absent.
    pub fn is_not_nil(self) -> AssertResult<Self> {
        match self.value {
            None => reject(AssertionError::null_value(self.field)),
            Some(value) if value.is_nil() => reject(AssertionError::uuid_is_nil(self.field)),
            Some(_) => Ok(self),
        }
    }

    /// Ensures the UUID has version `version`.
    ///
    /// The nil UUID has version 0.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::UuidVersionMismatch`].
    pub fn is_version(self, version: usize) -> AssertResult<Self> {
        match self.value {
            Some(value) if value.get_version_num() != version => reject(
                AssertionError::uuid_version_mismatch()
                    .field(self.field)
                    .expected_version(version)
                    .actual_version(value.get_version_num()),
            ),
            _ => Ok(self),
        }
    }
}

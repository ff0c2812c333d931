//! # Pure Asserts
//!
//! Fluent, typed validation of named values.
//!
//! Pure Asserts provides:
//!
//! - **Typed asserters**: [`asserts::field`] picks the checks that fit the value's type
//! - **Structured errors**: every failure is an [`AssertionError`] carrying a
//!   category, the field name, a readable message and named parameters
//! - **Staged error builders**: errors with several parameters are assembled
//!   step by step so no parameter can be forgotten
//! - **One-call helpers**: the deprecated [`validation`] module keeps the
//!   older `require_*` entry points working
//!
//! ## Quick Start
//!
//! ```rust
//! use pure_asserts::prelude::*;
//!
//! # fn main() -> AssertResult<()> {
//! field("name", "Alice").not_blank()?.max_length(50)?;
//! field("age", 42).positive()?.max(150)?;
//!
//! let err = field("score", 15).max(10).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NumberValueTooHigh);
//! assert_eq!(err.parameters()["max"], "10");
//! # Ok(())
//! # }
//! ```
//!
//! Failures are reported through `tracing` at `debug` level.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]

pub mod asserts;
pub mod errors;
pub mod validation;

pub use errors::{AssertResult, AssertionError, ErrorKind, MissingReason};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asserts::{
        field, not_blank, not_empty, not_null, Assertable, CollectionAsserter, NumberAsserter,
        StringAsserter, TemporalAsserter, UuidAsserter,
    };
    pub use crate::errors::{AssertResult, AssertionError, ErrorKind, MissingReason};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let err = field("name", "").not_blank().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
        assert_eq!(err.field(), "name");

        let err = field("score", 15).max(10).unwrap_err();
        assert_eq!(err.to_string(), err.message());
    }
}

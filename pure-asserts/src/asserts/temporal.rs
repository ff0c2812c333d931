//! Ordering checks for instants and dates.

use super::{reject, Assertable};
use crate::errors::{AssertResult, AssertionError};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

/// A point in time that can be compared with "now".
pub trait Temporal: Copy + PartialOrd {
    /// Returns the current point in time.
    fn now() -> Self;

    /// Renders the value as ISO-8601 for error messages.
    fn to_iso_string(&self) -> String;
}

/// Instants render as `2024-01-01T00:00:00Z`, with fractional seconds only
/// when present.
impl Temporal for DateTime<Utc> {
    fn now() -> Self {
        Utc::now()
    }

    fn to_iso_string(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

/// Dates compare against the local calendar day.
impl Temporal for NaiveDate {
    fn now() -> Self {
        Local::now().date_naive()
    }

    fn to_iso_string(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl Assertable for DateTime<Utc> {
    type Asserter = TemporalAsserter<Self>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        TemporalAsserter::new(field, Some(self))
    }
}

impl Assertable for Option<DateTime<Utc>> {
    type Asserter = TemporalAsserter<DateTime<Utc>>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        TemporalAsserter::new(field, self)
    }
}

impl Assertable for NaiveDate {
    type Asserter = TemporalAsserter<Self>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        TemporalAsserter::new(field, Some(self))
    }
}

impl Assertable for Option<NaiveDate> {
    type Asserter = TemporalAsserter<NaiveDate>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        TemporalAsserter::new(field, self)
    }
}

/// Asserter for instants and dates.
///
/// Ordering checks let an absent value through; use
/// [`not_null`](Self::not_null) to require one.
#[derive(Debug, Clone)]
pub struct TemporalAsserter<T> {
    field: String,
    value: Option<T>,
}

impl<T: Temporal> TemporalAsserter<T> {
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

    /// Ensures the value is strictly before now.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotBeforeTime`].
    pub fn in_past(self) -> AssertResult<Self> {
        self.before(T::now())
    }

    /// Ensures the value is strictly after now.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotAfterTime`].
    pub fn in_future(self) -> AssertResult<Self> {
        self.after(T::now())
    }

    /// Ensures the value is strictly after `other`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotAfterTime`] when `value <= other`.
    pub fn after(self, other: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value <= other => reject(
                AssertionError::strictly_not_after()
                    .value(value.to_iso_string())
                    .field(self.field)
                    .other(other.to_iso_string()),
            ),
            _ => Ok(self),
        }
    }

    /// Ensures the value is after or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotAfterTime`] when `value < other`.
    pub fn after_or_at(self, other: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value < other => reject(
                AssertionError::not_after()
                    .value(value.to_iso_string())
                    .field(self.field)
                    .other(other.to_iso_string()),
            ),
            _ => Ok(self),
        }
    }

    /// Ensures the value is strictly before `other`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotBeforeTime`] when `value >= other`.
    pub fn before(self, other: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value >= other => reject(
                AssertionError::strictly_not_before()
                    .value(value.to_iso_string())
                    .field(self.field)
                    .other(other.to_iso_string()),
            ),
            _ => Ok(self),
        }
    }

    /// Ensures the value is before or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NotBeforeTime`] when `value > other`.
    pub fn before_or_at(self, other: T) -> AssertResult<Self> {
        match self.value {
            Some(value) if value > other => reject(
                AssertionError::not_before()
                    .value(value.to_iso_string())
                    .field(self.field)
                    .other(other.to_iso_string()),
            ),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::asserts::field;
    use crate::errors::{AssertionError, ErrorKind};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_in_past() {
        let past = Utc::now() - Duration::seconds(10);
        assert!(field("date", past).in_past().is_ok());

        let future = Utc::now() + Duration::seconds(10);
        let err = field("date", future).in_past().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotBeforeTime);
    }

    #[test]
    fn test_in_future() {
        let future = Utc::now() + Duration::seconds(60);
        assert!(field("date", future).in_future().is_ok());

        let past = Utc::now() - Duration::seconds(60);
        let err = field("date", past).in_future().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAfterTime);
    }

    #[test]
    fn test_after() {
        let now = Utc::now();
        assert!(field("date", now + Duration::seconds(10)).after(now).is_ok());

        let err = field("date", now - Duration::seconds(10)).after(now).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAfterTime);
        assert!(err.message().contains("must be strictly after"));

        assert!(field("date", now).after(now).is_err());
        assert!(field("date", now).after_or_at(now).is_ok());
    }

    #[test]
    fn test_before() {
        let now = Utc::now();
        assert!(field("date", now - Duration::seconds(10)).before(now).is_ok());

        let err = field("date", now + Duration::seconds(10)).before(now).unwrap_err();
        assert!(matches!(err, AssertionError::NotBeforeTime { strict: true, .. }));

        assert!(field("date", now).before(now).is_err());
        assert!(field("date", now).before_or_at(now).is_ok());

        let err = field("date", now + Duration::seconds(1))
            .before_or_at(now)
            .unwrap_err();
        assert!(err.message().contains("must be before"));
    }

    #[test]
    fn test_dates() {
        let birthday = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let later = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        assert!(field("dateOfBirth", birthday).in_past().is_ok());
        assert!(field("dateOfBirth", birthday).before(later).is_ok());
        assert!(field("dateOfBirth", later).before(birthday).is_err());
    }

    #[test]
    fn test_absent_instant() {
        let now = Utc::now();
        assert!(field("date", None::<chrono::DateTime<Utc>>).after(now).is_ok());
        assert!(field("date", None::<chrono::DateTime<Utc>>).not_null().is_err());
    }

    #[test]
    fn test_message_renders_iso_8601() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 30, 12, 30, 0).unwrap();

        let err = field("startsAt", end).before(start).unwrap_err();
        assert_eq!(
            err.message(),
            "Time 2024-06-30T12:30:00Z in \"startsAt\" must be strictly before 2024-01-01T00:00:00Z but wasn't"
        );

        let precise = start + Duration::milliseconds(250);
        let err = field("startsAt", start).after_or_at(precise).unwrap_err();
        assert!(err.message().contains("2024-01-01T00:00:00.250Z"));

        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let err = field("day", day).after(day).unwrap_err();
        assert!(err.message().starts_with("Time 2024-03-05 in"));
    }
}

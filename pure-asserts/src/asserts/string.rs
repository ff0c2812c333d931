//! String checks.
//!
//! Lengths are measured in Unicode scalar values (`chars`), not bytes.

use super::{reject, Assertable};
use crate::errors::{AssertResult, AssertionError};
use regex::Regex;

impl<'a> Assertable for &'a str {
    type Asserter = StringAsserter<'a>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        StringAsserter::new(field, Some(self))
    }
}

impl<'a> Assertable for &'a String {
    type Asserter = StringAsserter<'a>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        StringAsserter::new(field, Some(self.as_str()))
    }
}

impl<'a> Assertable for Option<&'a str> {
    type Asserter = StringAsserter<'a>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        StringAsserter::new(field, self)
    }
}

impl<'a> Assertable for Option<&'a String> {
    type Asserter = StringAsserter<'a>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        StringAsserter::new(field, self.map(String::as_str))
    }
}

/// Asserter for string values.
#[derive(Debug, Clone)]
pub struct StringAsserter<'a> {
    field: String,
    value: Option<&'a str>,
}

impl<'a> StringAsserter<'a> {
    fn new(field: String, value: Option<&'a str>) -> Self {
        Self { field, value }
    }

    /// Returns the bound value.
    #[must_use]
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Ensures the string is present.
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

    /// Ensures the string is present and contains a non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::MissingMandatoryValue`] tagged `null` when
    /// absent and `blank` when empty or whitespace only.
    pub fn not_blank(self) -> AssertResult<Self> {
        match self.value {
            None => reject(AssertionError::null_value(self.field)),
            Some(value) if value.trim().is_empty() => {
                reject(AssertionError::blank_value(self.field))
            }
            Some(_) => Ok(self),
        }
    }

    /// Ensures the string has at least `min_length` characters.
    ///
    /// An absent string passes only when `min_length` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::StringTooShort`], or
    /// [`AssertionError::MissingMandatoryValue`] for an absent string.
    pub fn min_length(self, min_length: usize) -> AssertResult<Self> {
        let Some(value) = self.value else {
            if min_length == 0 {
                return Ok(self);
            }
            return reject(AssertionError::null_value(self.field));
        };

        if value.chars().count() < min_length {
            return reject(
                AssertionError::string_too_short()
                    .field(self.field)
                    .value(value)
                    .min_length(min_length),
            );
        }
        Ok(self)
    }

    /// Ensures the string has at most `max_length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::StringTooLong`].
    pub fn max_length(self, max_length: usize) -> AssertResult<Self> {
        match self.value {
            Some(value) if value.chars().count() > max_length => reject(
                AssertionError::string_too_long()
                    .field(self.field)
                    .value(value)
                    .max_length(max_length),
            ),
            _ => Ok(self),
        }
    }

    /// Ensures the whole string matches `pattern`.
    ///
    /// `pattern` is anchored at both ends before matching, so lazy
    /// quantifiers and alternations are tried against the entire value.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::MissingMandatoryValue`] carrying `message`
    /// when the string does not match, or tagged `null` when absent.
    pub fn matches(self, pattern: &Regex, message: impl Into<String>) -> AssertResult<Self> {
        let Some(value) = self.value else {
            return reject(AssertionError::null_value(self.field));
        };

        let whole_match = Regex::new(&format!(r"\A(?:{})\z", pattern.as_str()))
            .is_ok_and(|anchored| anchored.is_match(value));
        if !whole_match {
            return reject(AssertionError::bad_value(self.field, message));
        }
        Ok(self)
    }

    /// Ensures the string is an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::MissingMandatoryValue`] when absent or not
    /// a valid URL.
    #[cfg(feature = "url")]
    pub fn url(self) -> AssertResult<Self> {
        let Some(value) = self.value else {
            return reject(AssertionError::null_value(self.field));
        };

        let valid = url::Url::parse(value)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
        if !valid {
            let message = format!(
                "The field \"{}\" must be a valid URL but was \"{value}\"",
                self.field
            );
            return reject(AssertionError::bad_value(self.field, message));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::asserts::field;
    use crate::errors::{AssertionError, ErrorKind, MissingReason};
    use regex::Regex;

    #[test]
    fn test_not_null() {
        assert!(field("name", "Alice").not_null().is_ok());
        assert!(field("name", None::<&str>).not_null().is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(field("name", "Bob").not_blank().is_ok());

        let err = field("name", "").not_blank().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
        assert_eq!(err.field(), "name");
        assert!(err.message().contains("blank"));

        assert!(field("name", " ").not_blank().is_err());
        assert!(matches!(
            field("name", None::<&str>).not_blank(),
            Err(AssertionError::MissingMandatoryValue {
                reason: Some(MissingReason::Null),
                ..
            })
        ));
    }

    #[test]
    fn test_min_length() {
        assert!(field("name", "ABC").min_length(2).is_ok());

        let err = field("name", "A").min_length(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StringTooShort);
        assert_eq!(err.parameters()["minLength"], "2");
        assert_eq!(err.parameters()["currentLength"], "1");
    }

    #[test]
    fn test_min_length_absent() {
        assert!(field("name", None::<&str>).min_length(0).is_ok());

        let err = field("name", None::<&str>).min_length(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
    }

    #[test]
    fn test_max_length() {
        assert!(field("name", "AB").max_length(3).is_ok());
        assert!(field("name", None::<&str>).max_length(3).is_ok());

        let err = field("name", "ABCD").max_length(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StringTooLong);
        assert_eq!(err.parameters()["currentLength"], "4");
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(field("name", "ééé").max_length(3).is_ok());
    }

    #[test]
    fn test_owned_string() {
        let name = String::from("Charlie");
        let asserter = field("name", &name).not_blank().unwrap();
        assert_eq!(asserter.value(), Some("Charlie"));
    }

    #[test]
    fn test_matches() {
        let digits = Regex::new(r"\d+").unwrap();
        assert!(field("age", "123").matches(&digits, "Must be digits only.").is_ok());

        let err = field("age", "abc")
            .matches(&digits, "Must be digits only.")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
        assert_eq!(err.message(), "Must be digits only.");

        assert!(field("age", "12a").matches(&digits, "Must be digits only.").is_err());
        assert!(field("age", "a12").matches(&digits, "Must be digits only.").is_err());
        assert!(field("age", None::<&str>).matches(&digits, "Must be digits only.").is_err());
    }

    #[test]
    fn test_matches_whole_value_with_lazy_and_alternation() {
        let lazy = Regex::new(r"\d+?").unwrap();
        assert!(field("code", "123").matches(&lazy, "digits").is_ok());

        let alternation = Regex::new("a|ab").unwrap();
        assert!(field("code", "ab").matches(&alternation, "alt").is_ok());
        assert!(field("code", "a").matches(&alternation, "alt").is_ok());
        assert!(field("code", "abc").matches(&alternation, "alt").is_err());

        let anchored = Regex::new(r"^\d+$").unwrap();
        assert!(field("code", "42").matches(&anchored, "digits").is_ok());
    }

    #[cfg(feature = "url")]
    #[test]
    fn test_url() {
        assert!(field("url", "https://example.com").url().is_ok());
        assert!(field("url", "http://localhost:8080/path").url().is_ok());

        let err = field("url", "invalid-url").url().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatoryValue);
        assert!(field("url", "mailto:someone@example.com").url().is_err());
    }

    #[test]
    fn test_chain() {
        let result = field("name", "Alice")
            .not_blank()
            .and_then(|a| a.min_length(2))
            .and_then(|a| a.max_length(10));
        assert!(result.is_ok());
    }
}

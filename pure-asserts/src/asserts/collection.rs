//! Size and element checks for borrowed collections.

use super::{reject, Assertable};
use crate::errors::{AssertResult, AssertionError};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Anything with an element count, possibly absent.
///
/// Used by [`not_empty`](super::not_empty) so that slices, vectors, sets and
/// maps share one emptiness check.
pub trait Container {
    /// Returns the number of elements, or `None` when the container itself
    /// is absent.
    fn size(&self) -> Option<usize>;
}

impl<T> Container for [T] {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Container for [T; N] {
    fn size(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Container for Vec<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Container for VecDeque<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Container for HashSet<T, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Container for BTreeSet<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<C: Container> Container for Option<C> {
    fn size(&self) -> Option<usize> {
        self.as_ref().and_then(Container::size)
    }
}

impl<C: Container + ?Sized> Container for &C {
    fn size(&self) -> Option<usize> {
        (**self).size()
    }
}

macro_rules! impl_collection_assertable {
    ($(<$($gen:ident),*> $ty:ty),* $(,)?) => {
        $(
            impl<'a, $($gen),*> Assertable for &'a $ty {
                type Asserter = CollectionAsserter<Self>;

                fn into_asserter(self, field: String) -> Self::Asserter {
                    CollectionAsserter::new(field, Some(self))
                }
            }

            impl<'a, $($gen),*> Assertable for Option<&'a $ty> {
                type Asserter = CollectionAsserter<&'a $ty>;

                fn into_asserter(self, field: String) -> Self::Asserter {
                    CollectionAsserter::new(field, self)
                }
            }
        )*
    };
}

impl_collection_assertable! {
    <T> [T],
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T, S> HashSet<T, S>,
    <T> BTreeSet<T>,
    <K, V, S> HashMap<K, V, S>,
    <K, V> BTreeMap<K, V>,
}

impl<'a, T, const N: usize> Assertable for &'a [T; N] {
    type Asserter = CollectionAsserter<Self>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        CollectionAsserter::new(field, Some(self))
    }
}

impl<'a, T, const N: usize> Assertable for Option<&'a [T; N]> {
    type Asserter = CollectionAsserter<&'a [T; N]>;

    fn into_asserter(self, field: String) -> Self::Asserter {
        CollectionAsserter::new(field, self)
    }
}

/// Asserter for borrowed collections: slices, arrays, vectors, deques, sets
/// and maps.
///
/// [`no_null_element`](CollectionAsserter::no_null_element) is only
/// available when the collection yields `Option`s.
#[derive(Debug, Clone)]
pub struct CollectionAsserter<C> {
    field: String,
    value: Option<C>,
}

impl<C: Container + Copy> CollectionAsserter<C> {
    fn new(field: String, value: Option<C>) -> Self {
        Self { field, value }
    }

    /// Returns the bound collection.
    #[must_use]
    pub fn value(&self) -> Option<C> {
        self.value
    }

    /// Ensures the collection is present.
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

    /// Ensures the collection is present and has at least one element.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::MissingMandatoryValue`] tagged `null` or
    /// `empty`.
    pub fn not_empty(self) -> AssertResult<Self> {
        match self.value.size() {
            None => reject(AssertionError::null_value(self.field)),
            Some(0) => reject(AssertionError::empty_value(self.field)),
            Some(_) => Ok(self),
        }
    }

    /// Ensures the collection has at most `max_size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::TooManyElements`].
    pub fn max_size(self, max_size: usize) -> AssertResult<Self> {
        match self.value.size() {
            Some(size) if size > max_size => reject(
                AssertionError::too_many_elements()
                    .field(self.field)
                    .max_size(max_size)
                    .size(size),
            ),
            _ => Ok(self),
        }
    }

    /// Ensures no element is `None`. An empty collection passes.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::NullElementInCollection`].
    pub fn no_null_element<'a, T: 'a>(self) -> AssertResult<Self>
    where
        C: IntoIterator<Item = &'a Option<T>>,
    {
        if self
            .value
            .is_some_and(|items| items.into_iter().any(Option::is_none))
        {
            return reject(AssertionError::null_element(self.field));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::asserts::field;
    use crate::errors::{AssertionError, ErrorKind, MissingReason};
    use std::collections::{BTreeMap, HashSet, VecDeque};

    #[test]
    fn test_max_size() {
        let list = vec!["a", "b"];
        assert!(field("list", &list).max_size(3).is_ok());
        assert!(field("list", &list).max_size(2).is_ok());

        let list = vec!["a", "b", "c", "d"];
        let err = field("list", &list).max_size(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyElements);
        assert_eq!(err.parameters()["maxSize"], "2");
        assert_eq!(err.parameters()["currentSize"], "4");
    }

    #[test]
    fn test_no_null_element() {
        let list = vec![Some("a"), Some("b")];
        assert!(field("list", &list).no_null_element().is_ok());

        let list = vec![Some("a"), None];
        let err = field("list", &list).no_null_element().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullElementInCollection);
        assert_eq!(err.message(), "The field \"list\" contains a null element");

        let empty: Vec<Option<i32>> = Vec::new();
        assert!(field("list", &empty).no_null_element().is_ok());
    }

    #[test]
    fn test_array_not_empty() {
        let arr = ["a", "b"];
        assert!(field("arr", &arr).not_empty().is_ok());

        let arr: [&str; 0] = [];
        let err = field("arr", &arr).not_empty().unwrap_err();
        assert!(matches!(
            err,
            AssertionError::MissingMandatoryValue {
                reason: Some(MissingReason::Empty),
                ..
            }
        ));
    }

    #[test]
    fn test_array_checks() {
        assert!(field("arr", &["a", "b"]).max_size(2).is_ok());
        assert!(field("arr", &["a", "b", "c"]).max_size(2).is_err());
        assert!(field("arr", &[Some("a"), None]).no_null_element().is_err());
    }

    #[test]
    fn test_absent_collection() {
        let absent: Option<&[i32]> = None;
        assert!(field("list", absent).max_size(1).is_ok());
        assert!(field("list", absent).not_null().is_err());

        let err = field("list", absent).not_empty().unwrap_err();
        assert!(err.message().contains("(null)"));
    }

    #[test]
    fn test_slice() {
        let data = [1, 2, 3];
        let asserter = field("data", &data[..]).not_empty().unwrap();
        assert_eq!(asserter.value(), Some(&data[..]));
    }

    #[test]
    fn test_hash_set() {
        let tags: HashSet<&str> = ["rust", "asserts"].into_iter().collect();
        assert!(field("tags", &tags).max_size(3).is_ok());
        assert!(field("tags", &tags).not_empty().is_ok());

        let err = field("tags", &tags).max_size(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyElements);
        assert_eq!(err.parameters()["currentSize"], "2");

        assert!(field("tags", &HashSet::<String>::new()).not_empty().is_err());
        assert!(field("tags", None::<&HashSet<String>>).not_null().is_err());
    }

    #[test]
    fn test_vec_deque() {
        let queue: VecDeque<Option<u32>> = VecDeque::from([Some(1), Some(2)]);
        assert!(field("q", &queue).no_null_element().is_ok());

        let queue: VecDeque<Option<u32>> = VecDeque::from([Some(1), None]);
        let err = field("q", &queue).no_null_element().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullElementInCollection);
        assert!(field("q", &queue).max_size(1).is_err());
    }

    #[test]
    fn test_map_size() {
        let mut scores = BTreeMap::new();
        scores.insert("alice", 3);
        scores.insert("bob", 5);
        assert!(field("scores", &scores).not_empty().is_ok());
        assert!(field("scores", &scores).max_size(1).is_err());
    }
}

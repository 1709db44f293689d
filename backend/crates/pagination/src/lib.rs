//! Fixed-size page numbering and slicing primitives.
//!
//! Listing endpoints expose ordered result sets in pages of
//! [`DEFAULT_PAGE_SIZE`] items selected by a 1-based [`PageNumber`]. Slicing
//! is total: a page outside the available range, a page number below one, or
//! an offset that would overflow `usize` all produce an empty page instead of
//! an error. Callers decide whether an empty page is a failure.
//!
//! # Examples
//!
//! ```
//! use pagination::{DEFAULT_PAGE_SIZE, PageNumber, paginate};
//!
//! let ids: Vec<u32> = (1..=12).collect();
//! assert_eq!(paginate(PageNumber::new(2), &ids, DEFAULT_PAGE_SIZE), &[11, 12]);
//! assert!(paginate(PageNumber::new(3), &ids, DEFAULT_PAGE_SIZE).is_empty());
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of items held by one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Build a page size, rejecting zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageSize;
    ///
    /// assert!(PageSize::new(0).is_none());
    /// assert_eq!(PageSize::new(25).map(PageSize::get), Some(25));
    /// ```
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Return the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// Page size used by every paginated listing.
pub const DEFAULT_PAGE_SIZE: PageSize = PageSize(NonZeroUsize::MIN.saturating_add(9));

/// 1-based page selector.
///
/// Values below one are representable so that raw client input can flow
/// through unchanged; they always select an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(i64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw page number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw page number.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Interpret an optional query-string value leniently.
    ///
    /// Missing or non-integer values fall back to [`PageNumber::FIRST`];
    /// integers, including zero and negatives, are kept as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageNumber;
    ///
    /// assert_eq!(PageNumber::from_query_value(None), PageNumber::FIRST);
    /// assert_eq!(PageNumber::from_query_value(Some("abc")), PageNumber::FIRST);
    /// assert_eq!(PageNumber::from_query_value(Some("3")).get(), 3);
    /// ```
    #[must_use]
    pub fn from_query_value(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .unwrap_or(Self::FIRST)
    }

    /// Half-open item range covered by this page, or `None` when the page
    /// cannot contain anything.
    fn bounds(self, page_size: PageSize) -> Option<(usize, usize)> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        let start = index.checked_mul(page_size.get())?;
        Some((start, start.saturating_add(page_size.get())))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when parsing a page number from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageNumberError {
    /// The value was not an integer.
    #[error("page number must be an integer, got {value:?}")]
    NotAnInteger {
        /// Rejected input.
        value: String,
    },
}

impl FromStr for PageNumber {
    type Err = PageNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PageNumberError::NotAnInteger {
                value: s.to_owned(),
            })
    }
}

/// Borrow the items that fall on `page`.
///
/// Returns an empty slice for out-of-range pages and page numbers below one.
#[must_use]
pub fn paginate<T>(page: PageNumber, items: &[T], page_size: PageSize) -> &[T] {
    page.bounds(page_size)
        .and_then(|(start, end)| items.get(start..end.min(items.len())))
        .unwrap_or_default()
}

/// Consume `items` and keep only those that fall on `page`.
///
/// Behaves like [`paginate`] without cloning the retained items.
///
/// # Examples
///
/// ```
/// use pagination::{DEFAULT_PAGE_SIZE, PageNumber, into_page};
///
/// let words = vec!["a".to_owned(), "b".to_owned()];
/// assert_eq!(into_page(PageNumber::FIRST, words, DEFAULT_PAGE_SIZE).len(), 2);
/// ```
#[must_use]
pub fn into_page<T>(page: PageNumber, items: Vec<T>, page_size: PageSize) -> Vec<T> {
    match page.bounds(page_size) {
        Some((start, _)) => items
            .into_iter()
            .skip(start)
            .take(page_size.get())
            .collect(),
        None => Vec::new(),
    }
}

/// Number of non-empty pages needed to hold `total` items.
#[must_use]
pub const fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page slicing edge cases.
    use super::*;
    use rstest::rstest;

    fn numbered(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    #[rstest]
    #[case(PageNumber::new(1), 0..10)]
    #[case(PageNumber::new(2), 10..20)]
    #[case(PageNumber::new(3), 20..25)]
    fn pages_cover_expected_ranges(#[case] page: PageNumber, #[case] range: std::ops::Range<usize>) {
        let items = numbered(25);
        let expected = items.get(range).expect("range within items");
        assert_eq!(paginate(page, &items, DEFAULT_PAGE_SIZE), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    #[case(4)]
    #[case(i64::MAX)]
    fn invalid_or_distant_pages_are_empty(#[case] raw: i64) {
        let items = numbered(25);
        assert!(paginate(PageNumber::new(raw), &items, DEFAULT_PAGE_SIZE).is_empty());
        assert!(into_page(PageNumber::new(raw), items, DEFAULT_PAGE_SIZE).is_empty());
    }

    #[rstest]
    fn first_page_of_empty_sequence_is_empty() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(PageNumber::FIRST, &items, DEFAULT_PAGE_SIZE).is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(30, 3)]
    fn page_count_rounds_up(#[case] total: usize, #[case] expected: usize) {
        assert_eq!(page_count(total, DEFAULT_PAGE_SIZE), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(10)]
    #[case(23)]
    fn page_after_last_is_empty(#[case] total: u32) {
        let items = numbered(total);
        let count = page_count(items.len(), DEFAULT_PAGE_SIZE);
        let next = PageNumber::new(i64::try_from(count).expect("small count") + 1);
        assert!(paginate(next, &items, DEFAULT_PAGE_SIZE).is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(20)]
    #[case(37)]
    fn pages_partition_the_sequence(#[case] total: u32) {
        let items = numbered(total);
        let count = page_count(items.len(), DEFAULT_PAGE_SIZE);
        let rebuilt: Vec<u32> = (1..=count)
            .flat_map(|page| {
                let number = PageNumber::new(i64::try_from(page).expect("small page"));
                paginate(number, &items, DEFAULT_PAGE_SIZE).to_vec()
            })
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[rstest]
    fn owned_and_borrowed_pages_agree() {
        let items = numbered(17);
        let page = PageNumber::new(2);
        let borrowed = paginate(page, &items, DEFAULT_PAGE_SIZE).to_vec();
        assert_eq!(into_page(page, items, DEFAULT_PAGE_SIZE), borrowed);
    }

    #[rstest]
    fn custom_page_size_is_respected() {
        let items = numbered(5);
        let size = PageSize::new(2).expect("non-zero size");
        assert_eq!(paginate(PageNumber::new(3), &items, size), &[5]);
    }

    #[rstest]
    #[case(Some("2"), 2)]
    #[case(Some(" 4 "), 4)]
    #[case(Some("0"), 0)]
    #[case(Some("-3"), -3)]
    #[case(Some("two"), 1)]
    #[case(Some(""), 1)]
    #[case(None, 1)]
    fn query_values_parse_leniently(#[case] raw: Option<&str>, #[case] expected: i64) {
        assert_eq!(PageNumber::from_query_value(raw).get(), expected);
    }

    #[rstest]
    fn from_str_reports_rejected_value() {
        let err = "x1".parse::<PageNumber>().expect_err("non-integer");
        assert_eq!(
            err,
            PageNumberError::NotAnInteger {
                value: "x1".to_owned()
            }
        );
    }

    #[rstest]
    fn page_number_serialises_transparently() {
        let json = serde_json::to_string(&PageNumber::new(7)).expect("serialise");
        assert_eq!(json, "7");
        let parsed: PageNumber = serde_json::from_str("3").expect("deserialise");
        assert_eq!(parsed, PageNumber::new(3));
    }
}

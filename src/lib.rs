//! Sorting engine of the film-rental tool.
//!
//! Two interchangeable algorithms sit behind one entry point: a stable merge sort and a bingo
//! sort that places whole groups of equal keys per pass. Both are driven by the same `is_less`
//! predicate built in [`comparator`], so switching the [`Algorithm`] never changes the ordering
//! semantics, only stability and cost.
//!
//! ```ignore
//! use rental_sort::{sorted_by_key, Algorithm};
//!
//! let words = ["bb", "a", "ccc"];
//! let by_len = sorted_by_key(&words, |w| w.len(), false, Algorithm::MergeSort);
//! assert_eq!(by_len, ["a", "bb", "ccc"]);
//! ```

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T]) -> Vec<T>
            where
                T: PartialOrd + Clone,
            {
                sort(v)
            }

            #[inline]
            fn sort_by_key<T, K, F>(v: &[T], key: F, reverse: bool) -> Vec<T>
            where
                T: Clone,
                K: PartialOrd,
                F: FnMut(&T) -> K,
            {
                sort_by_key(v, key, reverse)
            }

            #[inline]
            fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
            where
                T: Clone,
                F: FnMut(&T, &T) -> bool,
            {
                sort_by(v, is_less)
            }
        }
    };
}

pub mod algorithm;
pub mod comparator;
pub mod report;
pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, ParseAlgorithmError};

/// Sorts `v` by its natural order into a new `Vec`, descending if `reverse` is set.
pub fn sorted<T>(v: &[T], reverse: bool, algorithm: Algorithm) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    sorted_by(v, comparator::natural::<T>(reverse), algorithm)
}

/// Sorts `v` by the key `key` extracts into a new `Vec`, descending if `reverse` is set.
///
/// `key` is called many times per element and must return the same key every time. The input
/// is left untouched. Only [`Algorithm::MergeSort`] keeps elements with equal keys in input
/// order.
pub fn sorted_by_key<T, K, F>(v: &[T], key: F, reverse: bool, algorithm: Algorithm) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sorted_by(v, comparator::by_key::<T, K, F>(key, reverse), algorithm)
}

/// Sorts `v` into a new `Vec` in which no element is less than one placed before it.
///
/// `is_less` must be a strict weak ordering. Merge sort always terminates with some permutation
/// of `v` if it isn't, bingo sort may panic instead.
pub fn sorted_by<T, F>(v: &[T], is_less: F, algorithm: Algorithm) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    tracing::trace!(len = v.len(), %algorithm, "sorting");

    match algorithm {
        Algorithm::MergeSort => stable::merge_sort::sort_by(v, is_less),
        Algorithm::BingoSort => unstable::bingo_sort::sort_by(v, is_less),
    }
}

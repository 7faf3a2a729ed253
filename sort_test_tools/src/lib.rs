/// Common interface of every sort implementation exercised by the shared test-suite and the
/// benchmarks.
///
/// Implementations return a freshly sorted `Vec` and must leave the input untouched.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: PartialOrd + Clone;

    fn sort_by_key<T, K, F>(v: &[T], key: F, reverse: bool) -> Vec<T>
    where
        T: Clone,
        K: PartialOrd,
        F: FnMut(&T) -> K;

    fn sort_by<T, F>(v: &[T], is_less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;

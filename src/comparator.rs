//! Construction of the `is_less` predicate shared by every algorithm.
//!
//! `is_less(a, b)` means "`a` must appear before `b`". Equal keys are never less than each
//! other in either direction, which is what lets merge sort stay stable when reversed.

/// `key(a) < key(b)`, or `key(b) < key(a)` if `reverse` is set.
pub fn by_key<T, K, F>(mut key: F, reverse: bool) -> impl FnMut(&T, &T) -> bool
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    move |a, b| {
        let (key_a, key_b) = (key(a), key(b));
        if reverse {
            key_b < key_a
        } else {
            key_a < key_b
        }
    }
}

/// [`by_key`] with the identity key, without cloning the elements.
pub fn natural<T: PartialOrd>(reverse: bool) -> impl FnMut(&T, &T) -> bool {
    move |a, b| if reverse { b < a } else { a < b }
}

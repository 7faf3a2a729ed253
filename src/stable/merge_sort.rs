//! Top-down merge sort.
//!
//! The input is cloned once, after that elements are only moved. Each recursion level splits
//! at `len / 2` and merges the sorted halves into a fresh `Vec`, preferring the left half on
//! ties, which keeps the sort stable.

use crate::comparator;

sort_impl!("merge_sort_stable");

pub fn sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    merge_sort(v.to_vec(), &mut comparator::natural::<T>(false))
}

pub fn sort_by_key<T, K, F>(v: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    merge_sort(v.to_vec(), &mut comparator::by_key::<T, K, F>(key, reverse))
}

pub fn sort_by<T, F>(v: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    merge_sort(v.to_vec(), &mut is_less)
}

fn merge_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v;
    }

    let right = v.split_off(v.len() / 2);

    let left = merge_sort(v, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Only a strictly smaller right head may overtake the left one.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one of them still has elements, already in order.
    merged.extend(left);
    merged.extend(right);

    merged
}

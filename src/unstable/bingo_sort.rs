//! Bingo sort, a selection sort that moves a whole group of equal elements per pass.
//!
//! Every pass places the group of elements equal to the minimum found by the previous pass,
//! and finds the minimum of the remaining elements while doing so. Cost is one scan per
//! distinct key, which beats merge sort when there are only a handful of distinct keys.
//! Swapping elements into place gives up stability.

use crate::comparator;

sort_impl!("bingo_sort_unstable");

pub fn sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    let mut sorted = v.to_vec();
    bingo_sort(&mut sorted, &mut comparator::natural::<T>(false));
    sorted
}

pub fn sort_by_key<T, K, F>(v: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut sorted = v.to_vec();
    bingo_sort(&mut sorted, &mut comparator::by_key::<T, K, F>(key, reverse));
    sorted
}

pub fn sort_by<T, F>(v: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut sorted = v.to_vec();
    bingo_sort(&mut sorted, &mut is_less);
    sorted
}

fn bingo_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Elements are tracked by index, `min` always points at the smallest element seen so far
    // that is not part of an already placed group.
    let mut min = 0;
    for j in 1..len {
        if is_less(&v[j], &v[min]) {
            min = j;
        }
    }

    // v[..i] is sorted and holds the smallest i elements.
    let mut i = skip_group(v, 0, min, is_less);
    let mut stalled = false;

    while i < len {
        let pass_start = i;
        let mut prev_min = min;
        min = i;

        for j in (i + 1)..len {
            if !is_less(&v[j], &v[min]) {
                continue;
            }

            // Nothing remaining is less than the previous minimum, so `v[j]` is either equal to
            // it or a candidate for the next group.
            if is_less(&v[prev_min], &v[j]) {
                min = j;
            } else {
                v.swap(i, j);
                if min == i {
                    min = j;
                }
                if prev_min == j {
                    prev_min = i;
                }
                i += 1;
            }
        }

        i = skip_group(v, i, min, is_less);

        // With a strict weak ordering a pass that places nothing is always followed by one that
        // places the group of its minimum.
        if i == pass_start {
            if stalled {
                panic_on_ord_violation();
            }
            stalled = true;
        } else {
            stalled = false;
        }
    }
}

/// Advances `i` past the elements equal to `v[min]`, `v[min]` must be <= all of `v[i..]`.
fn skip_group<T, F>(v: &[T], mut i: usize, min: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while i < v.len() && !is_less(&v[min], &v[i]) {
        i += 1;
    }

    i
}

#[cold]
#[inline(never)]
fn panic_on_ord_violation() -> ! {
    panic!("user-provided comparison function does not correctly implement a strict weak ordering")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios() {
        assert_eq!(sort(&[3, 1, 2]), [1, 2, 3]);
        assert_eq!(sort_by_key(&[3, 1, 2], |x| *x, true), [3, 2, 1]);
        assert_eq!(sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(sort(&[7]), [7]);
        assert_eq!(sort(&[5, 1, 5, 2, 5]), [1, 2, 5, 5, 5]);
    }

    #[test]
    fn scattered_minima() {
        // The minimum is neither first nor contiguous, so the first pass places nothing and the
        // next one has to pull all three 1s forward.
        assert_eq!(sort(&[2, 1, 3, 1, 2, 1]), [1, 1, 1, 2, 2, 3]);
        assert_eq!(sort(&[9, 9, 0, 9, 0]), [0, 0, 9, 9, 9]);
    }

    #[test]
    fn one_scan_per_group() {
        let input = [3, 1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2];
        let mut comparisons = 0;

        let sorted = sort_by(&input, |a, b| {
            comparisons += 1;
            a < b
        });

        assert_eq!(sorted, [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
        // Three distinct keys, each pass does at most two comparisons per remaining element.
        assert!(comparisons <= 3 * 2 * input.len() + input.len());
    }

    #[test]
    #[should_panic(expected = "strict weak ordering")]
    fn everything_less_panics() {
        sort_by(&[1, 2, 3, 4], |_, _| true);
    }

    #[test]
    fn nothing_less_keeps_input() {
        assert_eq!(sort_by(&[3, 1, 2], |_, _| false), [3, 1, 2]);
    }
}

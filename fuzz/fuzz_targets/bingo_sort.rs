#![no_main]

use libfuzzer_sys::fuzz_target;

use rental_sort::unstable::bingo_sort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut expected = data.to_vec();
    expected.sort();

    assert_eq!(test_sort::sort(data), expected);

    expected.reverse();
    assert_eq!(test_sort::sort_by_key(data, |x| *x, true), expected);
});

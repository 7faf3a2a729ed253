#![no_main]

use libfuzzer_sys::fuzz_target;

use rental_sort::stable::merge_sort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut expected = data.to_vec();
    expected.sort();

    assert_eq!(test_sort::sort(data), expected);

    // Sorting on the upper bits only leaves ties, which must keep their input order.
    let mut expected = data.to_vec();
    expected.sort_by_key(|x| x >> 4);

    assert_eq!(test_sort::sort_by_key(data, |x| x >> 4, false), expected);
});

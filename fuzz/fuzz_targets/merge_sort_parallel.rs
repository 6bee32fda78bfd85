#![no_main]

use libfuzzer_sys::fuzz_target;

use merge_bench::stable::merge_sort_parallel as test_sort;

fuzz_target!(|data: &[u8]| {
    let original = merge_bench_fuzz::u8_as_i32(data);
    let mut v = original.clone();
    test_sort::sort(&mut v);
    merge_bench_fuzz::check_sorted(&original, &v);
});

use sort_test_tools::{instantiate_sort_tests, Sort};

use merge_bench::stable::merge_sort_parallel;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "merge_sort_parallel_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy + Send,
    {
        merge_sort_parallel::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy + Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
    {
        merge_sort_parallel::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(SortImpl);

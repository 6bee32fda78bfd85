pub mod merge_sort;
pub mod merge_sort_parallel;

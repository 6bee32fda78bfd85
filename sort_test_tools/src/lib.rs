use std::cmp::Ordering;

/// A sort under test. Elements are plain `Copy` data, and the comparison may be called from
/// several threads at once.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy + Send,
        F: Fn(&T, &T) -> Ordering + Sync;
}

pub mod patterns;

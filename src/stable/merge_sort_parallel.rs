//! Fork-join variant of `merge_sort`. Same split points and merge, the two halves of every large
//! enough range are sorted concurrently with `rayon::join`.
use std::cmp::Ordering;

use crate::error::SortError;
use crate::stable::merge_sort::{
    check_sort_args, merge_runs, merge_sort_range, split_lens, Scratch,
};

/// Ranges shorter than this are sorted sequentially, spawning work for them costs more than it
/// saves.
pub const MIN_PARALLEL_LEN: usize = 4096;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy + Send,
{
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut scratch = Scratch::for_slice(v);
    let (left, right) = scratch.split_mut();
    par_sort_range(v, left, right, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Parallel counterpart of [`crate::stable::merge_sort::sort_range`], with the same
/// preconditions and result. The output is identical to the sequential sort, including the order
/// of equal elements.
#[inline]
pub fn sort_range<T>(
    v: &mut [T],
    low: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
) -> Result<(), SortError>
where
    T: Ord + Copy + Send,
{
    sort_range_by(v, low, high, left, right, |a, b| a.cmp(b))
}

pub fn sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
    compare: F,
) -> Result<(), SortError>
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if !check_sort_args(v.len(), low, high, left.len(), right.len())? {
        return Ok(());
    }

    par_sort_range(&mut v[low..=high], left, right, &|a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });

    Ok(())
}

// The left half is sorted inside `left` and the right half inside `right`, afterwards both are
// free again for the final merge. Below the top level every sub-sort owns one scratch slice as
// long as its range and splits it the same way.
fn par_sort_range<T, F>(v: &mut [T], left: &mut [T], right: &mut [T], is_less: &F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = v.len();
    let (left_len, right_len) = split_lens(len);
    let left = &mut left[..left_len];
    let right = &mut right[..right_len];

    if len < MIN_PARALLEL_LEN {
        merge_sort_range(v, 0, len - 1, left, right, &mut |a, b| is_less(a, b));
        return;
    }

    {
        let (v_left, v_right) = v.split_at_mut(left_len);
        rayon::join(
            || par_sort_owned(v_left, left, is_less),
            || par_sort_owned(v_right, right, is_less),
        );
    }

    merge_runs(v, 0, left_len - 1, len - 1, left, right, &mut |a, b| {
        is_less(a, b)
    });
}

fn par_sort_owned<T, F>(v: &mut [T], scratch: &mut [T], is_less: &F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 {
        return;
    }

    let (left_len, _) = split_lens(v.len());
    let (left, right) = scratch.split_at_mut(left_len);
    par_sort_range(v, left, right, is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sequential_above_threshold() {
        let len = MIN_PARALLEL_LEN * 3 + 17;
        let input: Vec<(u16, u32)> = (0..len as u32)
            .map(|i| (((i * 7919) % 31) as u16, i))
            .collect();

        let mut sequential = input.clone();
        crate::stable::merge_sort::sort_by(&mut sequential, |a, b| a.0.cmp(&b.0));

        let mut parallel = input;
        sort_by(&mut parallel, |a, b| a.0.cmp(&b.0));

        assert_eq!(sequential, parallel);
    }
}

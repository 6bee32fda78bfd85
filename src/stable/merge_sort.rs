//! Top-down merge sort with caller supplied scratch buffers. Branchy merge, no small-sort.
use std::cmp::Ordering;
use std::collections::TryReserveError;

use crate::error::{ScratchSide, SortError};

/// Sorts the whole slice, allocating scratch buffers once.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mut scratch = Scratch::for_slice(v);
    let (left, right) = scratch.split_mut();
    merge_sort_range(v, 0, len - 1, left, right, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts `v[low..=high]` in place, ascending.
///
/// `left` must hold at least `ceil(n / 2)` and `right` at least `floor(n / 2)` elements, where
/// `n = high - low + 1`. Both buffers are reused by every level of the recursion, their contents
/// after the call are unspecified. An empty (`low > high`) or single element range is a no-op.
///
/// Arguments are validated once before anything is written, on error `v` is untouched.
#[inline]
pub fn sort_range<T>(
    v: &mut [T],
    low: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
) -> Result<(), SortError>
where
    T: Ord + Copy,
{
    sort_range_by(v, low, high, left, right, |a, b| a.cmp(b))
}

pub fn sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
    mut compare: F,
) -> Result<(), SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if !check_sort_args(v.len(), low, high, left.len(), right.len())? {
        return Ok(());
    }

    merge_sort_range(v, low, high, left, right, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    Ok(())
}

/// Merges the sorted runs `v[low..=mid]` and `v[mid + 1..=high]`.
///
/// On equal elements the one from the left run is written first, which is what makes the sort
/// stable.
#[inline]
pub fn merge<T>(
    v: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
) -> Result<(), SortError>
where
    T: Ord + Copy,
{
    merge_by(v, low, mid, high, left, right, |a, b| a.cmp(b))
}

pub fn merge_by<T, F>(
    v: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
    mut compare: F,
) -> Result<(), SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if high >= v.len() || low > high {
        return Err(SortError::RangeOutOfBounds {
            low,
            high,
            len: v.len(),
        });
    }

    if mid < low || mid > high {
        return Err(SortError::SplitOutOfRange { low, mid, high });
    }

    check_scratch(ScratchSide::Left, mid - low + 1, left.len())?;
    check_scratch(ScratchSide::Right, high - mid, right.len())?;

    merge_runs(v, low, mid, high, left, right, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Scratch
////////////////////////////////////////////////////////////////////////////////

/// Owned pair of scratch buffers, sized for sorting a sequence of a given length.
///
/// The left buffer holds `ceil(len / 2)` elements and the right one `floor(len / 2)`, so the pair
/// never needs more than `len` elements in total.
#[derive(Clone, Debug)]
pub struct Scratch<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T: Copy> Scratch<T> {
    /// Sizes the buffers for `v`. Every slot holds a copy of `v[0]`, the merge overwrites a slot
    /// before it ever reads it.
    pub fn for_slice(v: &[T]) -> Self {
        let (left_len, right_len) = split_lens(v.len());

        match v.first() {
            Some(&first) => Self {
                left: vec![first; left_len],
                right: vec![first; right_len],
            },
            None => Self {
                left: Vec::new(),
                right: Vec::new(),
            },
        }
    }

    /// Sizes the buffers for a sequence of `len` elements, reporting allocation failure instead
    /// of aborting.
    pub fn try_with_fill(len: usize, fill: T) -> Result<Self, TryReserveError> {
        let (left_len, right_len) = split_lens(len);

        let mut left = Vec::new();
        left.try_reserve_exact(left_len)?;
        left.resize(left_len, fill);

        let mut right = Vec::new();
        right.try_reserve_exact(right_len)?;
        right.resize(right_len, fill);

        Ok(Self { left, right })
    }

    /// The longest sequence these buffers can sort.
    pub fn capacity_len(&self) -> usize {
        // A len of 2k + 1 needs k + 1 on the left and k on the right.
        std::cmp::min(self.left.len() * 2, self.right.len() * 2 + 1)
    }

    pub fn split_mut(&mut self) -> (&mut [T], &mut [T]) {
        (self.left.as_mut_slice(), self.right.as_mut_slice())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Lengths of the left and right run for a range of `len` elements. The split point is
/// `low + (high - low) / 2`, which puts the odd element on the left.
#[inline]
pub(crate) fn split_lens(len: usize) -> (usize, usize) {
    let left_len = len - (len / 2);
    (left_len, len / 2)
}

/// Returns `Ok(false)` if the range has nothing to sort.
pub(crate) fn check_sort_args(
    len: usize,
    low: usize,
    high: usize,
    left_len: usize,
    right_len: usize,
) -> Result<bool, SortError> {
    if low >= high {
        return Ok(false);
    }

    if high >= len {
        return Err(SortError::RangeOutOfBounds { low, high, len });
    }

    let (required_left, required_right) = split_lens(high - low + 1);
    check_scratch(ScratchSide::Left, required_left, left_len)?;
    check_scratch(ScratchSide::Right, required_right, right_len)?;

    Ok(true)
}

fn check_scratch(side: ScratchSide, required: usize, actual: usize) -> Result<(), SortError> {
    if actual < required {
        return Err(SortError::ScratchTooSmall {
            side,
            required,
            actual,
        });
    }

    Ok(())
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort_range<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if low < high {
        let mid = low + (high - low) / 2;

        merge_sort_range(v, low, mid, left, right, is_less);
        merge_sort_range(v, mid + 1, high, left, right, is_less);

        merge_runs(v, low, mid, high, left, right, is_less);
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_runs<T, F>(
    v: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    left: &mut [T],
    right: &mut [T],
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let left_len = mid - low + 1;
    let right_len = high - mid;

    let left = &mut left[..left_len];
    let right = &mut right[..right_len];
    left.copy_from_slice(&v[low..=mid]);
    right.copy_from_slice(&v[(mid + 1)..=high]);

    let mut i = 0;
    let mut j = 0;
    let mut k = low;

    while i < left_len && j < right_len {
        // Only take from the right if it is strictly smaller, ties go left.
        if is_less(&right[j], &left[i]) {
            v[k] = right[j];
            j += 1;
        } else {
            v[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty.
    let left_rest = left_len - i;
    v[k..(k + left_rest)].copy_from_slice(&left[i..]);
    k += left_rest;

    let right_rest = right_len - j;
    v[k..(k + right_rest)].copy_from_slice(&right[j..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_interleaved_runs() {
        let mut v = [1, 4, 7, 2, 3, 9];
        let mut left = [0; 3];
        let mut right = [0; 3];

        merge(&mut v, 0, 2, 5, &mut left, &mut right).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn merge_takes_left_on_ties() {
        let mut v = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let mut left = [(0, ' '); 2];
        let mut right = [(0, ' '); 2];

        merge_by(&mut v, 0, 1, 3, &mut left, &mut right, |a, b| a.0.cmp(&b.0)).unwrap();
        assert_eq!(v, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
    }

    #[test]
    fn merge_sub_range_leaves_rest_alone() {
        let mut v = [9, 5, 6, 1, 2, 0];
        let mut left = [0; 2];
        let mut right = [0; 2];

        merge(&mut v, 1, 2, 4, &mut left, &mut right).unwrap();
        assert_eq!(v, [9, 1, 2, 5, 6, 0]);
    }

    #[test]
    fn merge_empty_right_run() {
        let mut v = [3, 4, 5];
        let mut left = [0; 3];

        merge(&mut v, 0, 2, 2, &mut left, &mut []).unwrap();
        assert_eq!(v, [3, 4, 5]);
    }

    #[test]
    fn merge_rejects_bad_split() {
        let mut v = [1, 2, 3, 4];
        let mut left = [0; 4];
        let mut right = [0; 4];

        assert_eq!(
            merge(&mut v, 2, 1, 3, &mut left, &mut right),
            Err(SortError::SplitOutOfRange {
                low: 2,
                mid: 1,
                high: 3
            })
        );
    }

    #[test]
    fn merge_rejects_small_scratch() {
        let mut v = [1, 3, 2, 4];
        let mut left = [0; 1];
        let mut right = [0; 2];

        assert_eq!(
            merge(&mut v, 0, 1, 3, &mut left, &mut right),
            Err(SortError::ScratchTooSmall {
                side: ScratchSide::Left,
                required: 2,
                actual: 1
            })
        );
        assert_eq!(v, [1, 3, 2, 4]);
    }

    #[test]
    fn split_lens_cover_range() {
        for len in 0..50 {
            let (l, r) = split_lens(len);
            assert_eq!(l + r, len);
            assert!(l >= r && l - r <= 1);
        }
    }

    #[test]
    fn scratch_sizes() {
        let scratch = Scratch::try_with_fill(7, 0i32).unwrap();
        assert_eq!(scratch.left.len(), 4);
        assert_eq!(scratch.right.len(), 3);
        assert_eq!(scratch.capacity_len(), 7);

        let scratch = Scratch::for_slice(&[5, 4, 3, 2, 1]);
        assert_eq!(scratch.left, [5, 5, 5]);
        assert_eq!(scratch.right, [5, 5]);
        assert_eq!(scratch.capacity_len(), 5);

        let scratch = Scratch::<u8>::for_slice(&[]);
        assert_eq!(scratch.capacity_len(), 0);
    }
}

//! Owner of the benchmark buffers.
//!
//! The sort itself never assumes global storage, an embedding host that needs to read the sorted
//! values across a module boundary gets them from a [`SortArena`] it owns, via [`SortArena::offset`].

use crate::error::ArenaError;
use crate::stable::{merge_sort, merge_sort_parallel};

use crate::stable::merge_sort::Scratch;

/// A sequence of `i32` plus the scratch buffers to sort it, allocated once.
#[derive(Debug)]
pub struct SortArena {
    values: Vec<i32>,
    scratch: Scratch<i32>,
}

impl SortArena {
    /// Allocates an arena of `len` elements, filled in descending order.
    pub fn with_len(len: usize) -> Result<Self, ArenaError> {
        if i32::try_from(len).is_err() {
            return Err(ArenaError::TooLarge { len });
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|source| ArenaError::Allocation { len, source })?;
        values.resize(len, 0);

        let scratch =
            Scratch::try_with_fill(len, 0).map_err(|source| ArenaError::Allocation { len, source })?;

        tracing::debug!(len, "allocated sort arena");

        let mut arena = Self { values, scratch };
        arena.fill_descending();
        Ok(arena)
    }

    /// Resets the values to `len, len - 1, ..., 1`.
    pub fn fill_descending(&mut self) {
        let len = self.values.len() as i32;
        for (i, value) in self.values.iter_mut().enumerate() {
            *value = len - i as i32;
        }
    }

    pub fn sort(&mut self) -> Result<(), ArenaError> {
        let Some(high) = self.values.len().checked_sub(1) else {
            return Ok(());
        };

        let (left, right) = self.scratch.split_mut();
        merge_sort::sort_range(&mut self.values, 0, high, left, right)?;
        Ok(())
    }

    pub fn sort_parallel(&mut self) -> Result<(), ArenaError> {
        let Some(high) = self.values.len().checked_sub(1) else {
            return Ok(());
        };

        let (left, right) = self.scratch.split_mut();
        merge_sort_parallel::sort_range(&mut self.values, 0, high, left, right)?;
        Ok(())
    }

    /// Initializes and sorts in one call, the way the embedding host drives it.
    pub fn run(&mut self) -> Result<(), ArenaError> {
        self.fill_descending();
        self.sort()?;
        tracing::debug!(len = self.values.len(), "arena sorted");
        Ok(())
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Address of the first value, for hosts that read the sequence out of linear memory.
    pub fn offset(&self) -> usize {
        self.values.as_ptr() as usize
    }
}

#[cfg(target_arch = "wasm32")]
pub mod exports {
    //! Entry points for a JS host. The arena is created on first use and lives for the rest of
    //! the instance.

    use std::sync::Mutex;

    use super::SortArena;
    use crate::config::HOST_SORT_LEN;

    static ARENA: Mutex<Option<SortArena>> = Mutex::new(None);

    fn with_arena<R>(f: impl FnOnce(&mut SortArena) -> R) -> Option<R> {
        let mut guard = ARENA.lock().ok()?;
        if guard.is_none() {
            *guard = Some(SortArena::with_len(HOST_SORT_LEN).ok()?);
        }
        guard.as_mut().map(f)
    }

    /// Fills and sorts the arena. Returns 0 on success and -1 on failure.
    #[no_mangle]
    pub extern "C" fn sort() -> i32 {
        match with_arena(|arena| arena.run()) {
            Some(Ok(())) => 0,
            _ => -1,
        }
    }

    /// Offset of the arena values in linear memory, 0 if the arena could not be created.
    #[export_name = "getOffset"]
    pub extern "C" fn get_offset() -> u64 {
        with_arena(|arena| arena.offset() as u64).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_descending() {
        let arena = SortArena::with_len(5).unwrap();
        assert_eq!(arena.values(), [5, 4, 3, 2, 1]);
        assert_eq!(arena.len(), 5);
        assert!(!arena.is_sorted());
    }

    #[test]
    fn run_sorts() {
        let mut arena = SortArena::with_len(1_001).unwrap();
        arena.run().unwrap();

        assert!(arena.is_sorted());
        assert_eq!(arena.values()[0], 1);
        assert_eq!(arena.values()[1_000], 1_001);
    }

    #[test]
    fn sort_is_repeatable() {
        let mut arena = SortArena::with_len(64).unwrap();
        for _ in 0..3 {
            arena.fill_descending();
            arena.sort().unwrap();
            assert_eq!(arena.values(), (1..=64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn parallel_matches() {
        let mut arena = SortArena::with_len(20_000).unwrap();
        arena.sort_parallel().unwrap();
        assert_eq!(arena.values(), (1..=20_000).collect::<Vec<_>>());
    }

    #[test]
    fn empty_and_single() {
        let mut arena = SortArena::with_len(0).unwrap();
        assert!(arena.is_empty());
        arena.run().unwrap();
        arena.sort_parallel().unwrap();

        let mut arena = SortArena::with_len(1).unwrap();
        arena.run().unwrap();
        assert_eq!(arena.values(), [1]);
    }

    #[test]
    fn offset_points_at_values() {
        let arena = SortArena::with_len(3).unwrap();
        assert_eq!(arena.offset(), arena.values().as_ptr() as usize);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_len_outside_i32() {
        let len = i32::MAX as usize + 1;
        assert!(matches!(
            SortArena::with_len(len),
            Err(ArenaError::TooLarge { len: l }) if l == len
        ));
    }
}

use std::collections::TryReserveError;
use std::fmt;

/// Which of the two scratch buffers failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScratchSide {
    Left,
    Right,
}

impl fmt::Display for ScratchSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScratchSide::Left => f.write_str("left"),
            ScratchSide::Right => f.write_str("right"),
        }
    }
}

/// Precondition violations detected by the merge sort entry points.
///
/// All of these are reported before the sequence is written to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("range [{low}, {high}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },

    #[error("split point {mid} is outside of the merge range [{low}, {high}]")]
    SplitOutOfRange { low: usize, mid: usize, high: usize },

    #[error("{side} scratch buffer holds {actual} elements, but {required} are required")]
    ScratchTooSmall {
        side: ScratchSide,
        required: usize,
        actual: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("arena length {len} does not fit the i32 value range")]
    TooLarge { len: usize },

    #[error("failed to allocate an arena of {len} elements")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error(transparent)]
    Sort(#[from] SortError),
}

//! In-place stable merge sort and a trial-division prime scanner, plus the plumbing to benchmark
//! them: wall-clock measurement, an arena that owns the benchmark buffers and a CLI.

pub mod error;
pub mod host;
pub mod measure;
pub mod primes;
pub mod stable;

pub mod cli;
pub mod config;
pub mod logging;

pub use error::{ArenaError, ScratchSide, SortError};

//! Benchmark settings. Every value can come from the command line or from the environment, the
//! defaults are the sizes the benchmark has always been run with.

use clap::Args;

use crate::primes::MAX_PRIME_COUNT;

/// Elements sorted by the native benchmark.
pub const NATIVE_SORT_LEN: usize = 10_000_000;

/// Elements sorted by the arena behind the wasm exports.
pub const HOST_SORT_LEN: usize = 100_000_000;

/// Primes collected by the prime benchmark.
pub const PRIME_COUNT: u32 = 1_000_000;

/// Environment variable holding the log filter, e.g. `MERGE_BENCH_LOG=merge_bench=debug`.
pub const LOG_ENV: &str = "MERGE_BENCH_LOG";

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Number of elements, the input is len, len - 1, ..., 1
    #[arg(long, env = "MERGE_BENCH_LEN", default_value_t = NATIVE_SORT_LEN)]
    pub len: usize,

    /// How often to refill and sort, the median is reported
    #[arg(long, env = "MERGE_BENCH_RUNS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Sort the two halves of large ranges concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Check the result is sorted after every run
    #[arg(long)]
    pub verify: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            len: NATIVE_SORT_LEN,
            runs: 1,
            parallel: false,
            verify: false,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PrimeConfig {
    /// Number of primes to collect, at most the number of primes below 2^32
    #[arg(long, env = "MERGE_BENCH_PRIME_COUNT", default_value_t = PRIME_COUNT, value_parser = clap::value_parser!(u32).range(..=MAX_PRIME_COUNT as i64))]
    pub count: u32,

    /// How often to repeat the scan, the median is reported
    #[arg(long, env = "MERGE_BENCH_RUNS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,
}

impl Default for PrimeConfig {
    fn default() -> Self {
        Self {
            count: PRIME_COUNT,
            runs: 1,
        }
    }
}

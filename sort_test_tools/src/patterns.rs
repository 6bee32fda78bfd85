//! Inputs for testing and benchmarking sorts, all `i32`.
//!
//! Every random pattern draws from a generator seeded once per process, so a failing run can be
//! repeated by passing the printed seed back in via `OVERRIDE_SEED`.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// `len, len - 1, ..., 1`, the input of the sort benchmark.
pub fn countdown(len: usize) -> Vec<i32> {
    (1..=len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = std::cmp::max(len / saw_count.max(1), 1);
    let directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in v.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    v
}

/// Pairs every value with its occurrence count so far, `[6, 5, 6]` becomes
/// `[(6, 1), (5, 1), (6, 2)]`. Sorting by the first item only must keep the second items of
/// equal keys ascending if the sort is stable.
pub fn tag_occurrences(values: &[i32]) -> Vec<(i32, u32)> {
    let mut counts = std::collections::HashMap::new();

    values
        .iter()
        .map(|&val| {
            let count = counts.entry(val).or_insert(0u32);
            *count += 1;
            (val, *count)
        })
        .collect()
}

/// By default all random patterns of a process share one seed. Benchmarks that want fresh values
/// per call should call this first.
pub fn use_random_seed_each_time() {
    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) && env::var("OVERRIDE_SEED").is_err() {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(&seed).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

//! This module implements functionality for measuring the wall-clock duration of some task and
//! summarizing repeated measurements.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();
    test_fn();
    start.elapsed()
}

/// Same as [`measure_duration`] for fallible tasks, the error is returned without a duration.
#[inline(never)]
pub fn try_measure_duration<E>(test_fn: impl FnOnce() -> Result<(), E>) -> Result<Duration, E> {
    let start = Instant::now();
    test_fn()?;
    Ok(start.elapsed())
}

/// Statistics over several measurements of the same task.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub samples: usize,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    /// `max / min`, 1.0 means all runs took the same time.
    pub spread: f64,
}

impl Summary {
    /// Sorts `durations` and analyzes them. Returns `None` if there are no samples.
    pub fn from_samples(durations: &mut [Duration]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        durations.sort_unstable();

        let min = durations[0];
        let max = durations[durations.len() - 1];
        let median = durations[durations.len() / 2];

        let spread = if min.is_zero() {
            1.0
        } else {
            max.as_secs_f64() / min.as_secs_f64()
        };

        Some(Self {
            samples: durations.len(),
            median,
            min,
            max,
            spread,
        })
    }
}

/// Formats seconds the way the benchmark has always printed them, six fractional digits.
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.6}", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_something() {
        let duration = measure_duration(|| std::thread::sleep(Duration::from_millis(2)));
        assert!(duration >= Duration::from_millis(2));
    }

    #[test]
    fn fallible_measure_forwards_error() {
        let result = try_measure_duration(|| Err::<(), _>("nope"));
        assert_eq!(result, Err("nope"));

        assert!(try_measure_duration(|| Ok::<(), ()>(())).is_ok());
    }

    #[test]
    fn summary_of_samples() {
        let mut samples = [
            Duration::from_millis(30),
            Duration::from_millis(10),
            Duration::from_millis(20),
        ];

        let summary = Summary::from_samples(&mut samples).unwrap();
        assert_eq!(summary.samples, 3);
        assert_eq!(summary.min, Duration::from_millis(10));
        assert_eq!(summary.median, Duration::from_millis(20));
        assert_eq!(summary.max, Duration::from_millis(30));
        assert!((summary.spread - 3.0).abs() < 1e-9);
    }

    #[test]
    fn summary_single_and_empty() {
        assert!(Summary::from_samples(&mut []).is_none());

        let summary = Summary::from_samples(&mut [Duration::ZERO]).unwrap();
        assert_eq!(summary.median, Duration::ZERO);
        assert_eq!(summary.spread, 1.0);
    }

    #[test]
    fn seconds_format() {
        assert_eq!(format_seconds(Duration::from_millis(1500)), "1.500000");
        assert_eq!(format_seconds(Duration::ZERO), "0.000000");
    }
}

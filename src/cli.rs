//! Command line driver for the benchmarks.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{ensure, Context};
use clap::{Parser, Subcommand};

use crate::config::{PrimeConfig, SortConfig};
use crate::host::SortArena;
use crate::measure::{self, Summary};
use crate::primes;

#[derive(Parser, Debug)]
#[command(name = "merge_bench")]
#[command(version)]
#[command(about = "Merge sort and prime scan micro-benchmarks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort a descending sequence and print the elapsed seconds
    Sort(SortConfig),

    /// Collect the first N primes and print the elapsed seconds
    Primes(PrimeConfig),
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let summary = match cli.command {
        Command::Sort(config) => bench_sort(&config)?,
        Command::Primes(config) => bench_primes(&config)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", measure::format_seconds(summary.median))?;
    stdout.flush()?;

    Ok(())
}

/// Times only the sort, the refill between runs is not measured.
pub fn bench_sort(config: &SortConfig) -> anyhow::Result<Summary> {
    let mut arena = SortArena::with_len(config.len)
        .with_context(|| format!("setting up a sort of {} elements", config.len))?;

    let mut durations = Vec::with_capacity(config.runs as usize);
    for run in 0..config.runs {
        if run != 0 {
            arena.fill_descending();
        }

        let duration = if config.parallel {
            measure::try_measure_duration(|| arena.sort_parallel())?
        } else {
            measure::try_measure_duration(|| arena.sort())?
        };
        tracing::debug!(run, seconds = duration.as_secs_f64(), "sort finished");

        if config.verify {
            ensure!(arena.is_sorted(), "run {run} left the sequence unsorted");
        }

        durations.push(duration);
    }

    summarize("sort", config.len, &mut durations)
}

pub fn bench_primes(config: &PrimeConfig) -> anyhow::Result<Summary> {
    let mut durations = Vec::with_capacity(config.runs as usize);
    let mut largest = None;

    for run in 0..config.runs {
        let duration = measure::measure_duration(|| {
            let found = primes::first_primes(config.count as usize);
            largest = found.last().copied();
        });
        tracing::debug!(run, seconds = duration.as_secs_f64(), "prime scan finished");

        durations.push(duration);
    }

    tracing::debug!(count = config.count, ?largest, "largest prime found");

    summarize("primes", config.count as usize, &mut durations)
}

fn summarize(name: &str, len: usize, durations: &mut [Duration]) -> anyhow::Result<Summary> {
    let summary = Summary::from_samples(durations).context("no runs were measured")?;

    tracing::info!(
        bench = name,
        len,
        runs = summary.samples,
        median = summary.median.as_secs_f64(),
        min = summary.min.as_secs_f64(),
        max = summary.max.as_secs_f64(),
        spread = summary.spread,
        "benchmark done"
    );

    Ok(summary)
}

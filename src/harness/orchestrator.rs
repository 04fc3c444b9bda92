/*!
 * Run Orchestration
 *
 * Wires a resolved configuration into one benchmark run: creates the
 * primitive, arms the stop alarm for timed runs, launches every worker and
 * tears the primitive down once all of them have joined.
 */

use super::launcher::run_concurrently;
use super::ledger::Ledger;
use super::stop::StopToken;
use super::worker::run_worker;
use crate::core::config::{RunConfig, RunMode};
use crate::core::errors::BenchResult;
use crate::core::sync::Discipline;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// Raw results of a run, read only after every worker has joined
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub discipline: &'static str,
    pub config: RunConfig,
    /// Shared start timestamp, taken just before the first worker launches
    pub start: Instant,
    /// Launcher wall time from first spawn to last join
    pub elapsed: Duration,
    pub ledger: Ledger,
}

/// Execute one run of discipline `D`
pub fn run<D: Discipline<Ledger>>(config: &RunConfig) -> BenchResult<RunOutcome> {
    let discipline = D::new(Ledger::for_config(config))?;
    let stop = StopToken::new();

    info!(
        discipline = D::NAME,
        threads = config.threads,
        writers = config.writers,
        readers = config.readers(),
        mode = ?config.mode,
        "starting run"
    );

    let (start, elapsed) = thread::scope(|scope| -> BenchResult<_> {
        let alarm = match config.mode {
            RunMode::Timed { duration } => Some(stop.arm(scope, duration)?),
            RunMode::Fixed { .. } => None,
        };

        let start = Instant::now();
        let launched = run_concurrently(config.threads, |index| {
            run_worker(&discipline, &stop, config, index)
        });

        if let Some(alarm) = alarm {
            alarm.disarm(&stop);
        }
        Ok((start, launched?))
    })?;

    let ledger = discipline.into_ledger();

    info!(
        discipline = D::NAME,
        elapsed_us = elapsed.as_micros() as u64,
        write_calls = ledger.counts.write_calls,
        read_calls = ledger.counts.read_calls,
        violations = ledger.counts.violations,
        "run complete"
    );

    Ok(RunOutcome {
        discipline: D::NAME,
        config: *config,
        start,
        elapsed,
        ledger,
    })
}

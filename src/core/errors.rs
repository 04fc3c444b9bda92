/*!
 * Error Types
 * Centralized error handling with thiserror and miette diagnostics
 */

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Result type used throughout the harness
pub type BenchResult<T> = Result<T, BenchError>;

/// Failures raised while starting or joining worker threads
#[derive(Error, Debug, Diagnostic)]
pub enum LaunchError {
    #[error("Failed to spawn worker thread {index}: {source}")]
    #[diagnostic(
        code(launch::spawn_failed),
        help("The OS refused to create another thread. Lower the thread count or raise process limits.")
    )]
    Spawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("Failed to spawn the stop alarm: {0}")]
    #[diagnostic(
        code(launch::alarm_failed),
        help("Timed runs need one extra thread for the alarm.")
    )]
    AlarmSpawn(#[source] io::Error),

    #[error("Worker thread {index} panicked")]
    #[diagnostic(code(launch::worker_panicked))]
    WorkerPanicked { index: usize },
}

/// Unified harness error type
///
/// Every variant is fatal to the run. Monotonicity violations observed by
/// readers are deliberately absent: they are reported, not raised.
#[derive(Error, Debug, Diagnostic)]
pub enum BenchError {
    #[error("threadcount must be > 0 (got {0})")]
    #[diagnostic(
        code(config::invalid_thread_count),
        help("Pass a positive integer, e.g. `rculocks 8`.")
    )]
    InvalidThreadCount(i64),

    #[error("writer count {writers} exceeds threadcount {threads}")]
    #[diagnostic(
        code(config::invalid_writer_count),
        help("LOCK_WRITERS must be between 0 and the thread count.")
    )]
    InvalidWriterCount { writers: usize, threads: usize },

    #[error("invalid value {value:?} for {key}")]
    #[diagnostic(code(config::invalid_override))]
    InvalidOverride { key: &'static str, value: String },

    #[error("LOCK_ITERATIONS and LOCK_RUN_SECS cannot both be set")]
    #[diagnostic(
        code(config::conflicting_modes),
        help("Pick either a fixed-iteration run or a timed run.")
    )]
    ConflictingModes,

    #[error("unable to allocate lock: {0}")]
    #[diagnostic(code(sync::allocation_failed))]
    Allocation(String),

    #[error("Failed to run the test: {0}")]
    #[diagnostic(transparent)]
    Launch(#[from] LaunchError),
}

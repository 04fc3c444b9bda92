/*!
 * Run Configuration
 *
 * Resolves thread count, writer split and run mode from the command line
 * value plus environment overrides. Lookup of the environment is injected so
 * resolution can be exercised without touching the process environment.
 */

use super::errors::{BenchError, BenchResult};
use serde::Serialize;
use std::time::Duration;

/// Writer count override (default: half the threads)
pub const WRITERS_ENV: &str = "LOCK_WRITERS";
/// Forces a fixed-iteration run with the given per-thread count
pub const ITERATIONS_ENV: &str = "LOCK_ITERATIONS";
/// Forces a timed run lasting the given number of seconds
pub const RUN_SECS_ENV: &str = "LOCK_RUN_SECS";

/// Calls per block in fixed-iteration runs
pub const CALLS_PER_BLOCK: u64 = 100;
/// Blocks per thread in fixed-iteration runs
pub const CALL_BLOCKS_PER_THREAD: u64 = 100;
/// Default per-thread iteration count for fixed-iteration runs
pub const DEFAULT_ITERATIONS: u64 = CALLS_PER_BLOCK * CALL_BLOCKS_PER_THREAD;
/// Default alarm interval for timed runs
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_secs(5);

/// How long each thread keeps operating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunMode {
    /// Every thread performs exactly `iterations` operations
    Fixed { iterations: u64 },
    /// Threads loop until the stop alarm fires after `duration`
    Timed {
        #[serde(serialize_with = "serialize_secs")]
        duration: Duration,
    },
}

impl RunMode {
    pub const fn fixed_default() -> Self {
        Self::Fixed {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub const fn timed_default() -> Self {
        Self::Timed {
            duration: DEFAULT_RUN_DURATION,
        }
    }

    #[inline]
    pub const fn is_timed(&self) -> bool {
        matches!(self, Self::Timed { .. })
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub threads: usize,
    pub writers: usize,
    pub mode: RunMode,
}

impl RunConfig {
    /// Build a configuration, validating the writer split
    pub fn new(threads: usize, writers: usize, mode: RunMode) -> BenchResult<Self> {
        if threads == 0 {
            return Err(BenchError::InvalidThreadCount(0));
        }
        if writers > threads {
            return Err(BenchError::InvalidWriterCount { writers, threads });
        }
        Ok(Self {
            threads,
            writers,
            mode,
        })
    }

    /// Resolve from the raw command-line thread count and environment
    ///
    /// `default_mode` applies when neither `LOCK_ITERATIONS` nor
    /// `LOCK_RUN_SECS` is present.
    pub fn resolve<F>(threadcount: i64, default_mode: RunMode, lookup: F) -> BenchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if threadcount < 1 {
            return Err(BenchError::InvalidThreadCount(threadcount));
        }
        let threads = usize::try_from(threadcount)
            .map_err(|_| BenchError::InvalidThreadCount(threadcount))?;

        let writers = match lookup(WRITERS_ENV) {
            Some(raw) => parse_override::<usize>(WRITERS_ENV, &raw)?,
            None => threads / 2,
        };

        let iterations = lookup(ITERATIONS_ENV)
            .map(|raw| parse_positive(ITERATIONS_ENV, &raw))
            .transpose()?;
        let seconds = lookup(RUN_SECS_ENV)
            .map(|raw| parse_positive(RUN_SECS_ENV, &raw))
            .transpose()?;

        let mode = match (iterations, seconds) {
            (Some(_), Some(_)) => return Err(BenchError::ConflictingModes),
            (Some(iterations), None) => RunMode::Fixed { iterations },
            (None, Some(secs)) => RunMode::Timed {
                duration: Duration::from_secs(secs),
            },
            (None, None) => default_mode,
        };

        Self::new(threads, writers, mode)
    }

    /// Resolve against the real process environment
    pub fn from_env(threadcount: i64, default_mode: RunMode) -> BenchResult<Self> {
        Self::resolve(threadcount, default_mode, |key| std::env::var(key).ok())
    }

    #[inline]
    pub const fn readers(&self) -> usize {
        self.threads - self.writers
    }
}

fn parse_override<T: std::str::FromStr>(key: &'static str, raw: &str) -> BenchResult<T> {
    raw.trim().parse().map_err(|_| BenchError::InvalidOverride {
        key,
        value: raw.to_string(),
    })
}

fn parse_positive(key: &'static str, raw: &str) -> BenchResult<u64> {
    match parse_override::<u64>(key, raw)? {
        0 => Err(BenchError::InvalidOverride {
            key,
            value: raw.to_string(),
        }),
        n => Ok(n),
    }
}

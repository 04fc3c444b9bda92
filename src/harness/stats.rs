/*!
 * Statistics Aggregation
 *
 * Turns a run's raw call counts and timestamps into per-role averages and
 * renders them in the verbose, terse or JSON formats.
 */

use super::orchestrator::RunOutcome;
use crate::core::config::{RunConfig, RunMode};
use crate::core::types::Role;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Output format for a finished report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two labeled lines, one per role
    #[default]
    Verbose,
    /// A single line with the write and read averages
    Terse,
    /// The whole report as one JSON object
    Json,
}

/// Aggregated figures for one role
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleStats {
    pub threads: usize,
    /// Lock and unlock calls, two per iteration
    pub calls: u64,
    pub elapsed_us: u64,
    /// Average microseconds per lock or unlock call
    pub avg_us: f64,
}

impl RoleStats {
    /// Stats for a role with no configured threads
    pub const fn idle() -> Self {
        Self {
            threads: 0,
            calls: 0,
            elapsed_us: 0,
            avg_us: 0.0,
        }
    }

    /// Compute averages without ever dividing by zero
    ///
    /// A role with no threads reports zero elapsed time and a zero average,
    /// as does a role whose elapsed time is unknown or whose threads never
    /// completed an iteration.
    pub fn compute(threads: usize, calls: u64, elapsed: Option<Duration>) -> Self {
        if threads == 0 {
            return Self::idle();
        }

        let elapsed_us = elapsed.map_or(0, |d| d.as_micros() as u64);
        let avg_us = if calls == 0 {
            0.0
        } else {
            elapsed_us as f64 / calls as f64
        };

        Self {
            threads,
            calls,
            elapsed_us,
            avg_us,
        }
    }
}

/// Final, comparable result of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub discipline: &'static str,
    pub mode: RunMode,
    pub threads: usize,
    pub write: RoleStats,
    pub read: RoleStats,
    pub violations: u64,
    /// Launcher wall time from first spawn to last join
    pub wall_us: u64,
}

impl Report {
    /// Aggregate a finished run
    ///
    /// Fixed-iteration runs charge both roles the launcher's wall time.
    /// Timed runs charge each role the time from the shared start to that
    /// role's own quiescence stamp.
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        let config = &outcome.config;

        let role_stats = |role: Role| {
            let threads = role_threads(config, role);
            let elapsed = match config.mode {
                RunMode::Fixed { .. } => Some(outcome.elapsed),
                RunMode::Timed { .. } => outcome
                    .ledger
                    .quiescence
                    .quiesced_at(role)
                    .map(|end| end.saturating_duration_since(outcome.start)),
            };
            RoleStats::compute(threads, outcome.ledger.counts.calls(role), elapsed)
        };

        Self {
            discipline: outcome.discipline,
            mode: config.mode,
            threads: config.threads,
            write: role_stats(Role::Writer),
            read: role_stats(Role::Reader),
            violations: outcome.ledger.counts.violations,
            wall_us: outcome.elapsed.as_micros() as u64,
        }
    }

    #[inline]
    pub fn role(&self, role: Role) -> &RoleStats {
        match role {
            Role::Writer => &self.write,
            Role::Reader => &self.read,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Verbose => Ok(self.to_string()),
            OutputFormat::Terse => Ok(format!("{:.6} {:.6}", self.write.avg_us, self.read.avg_us)),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in [Role::Writer, Role::Reader].into_iter().enumerate() {
            let stats = self.role(role);
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "total {} lock/unlock calls {} in {} us, average {:.6}us per call",
                role.label(),
                stats.calls,
                stats.elapsed_us,
                stats.avg_us
            )?;
        }
        if self.violations > 0 {
            write!(f, "\nshared value went backwards {} times", self.violations)?;
        }
        Ok(())
    }
}

/// Banner printed before a verbose run
pub fn banner(discipline: &str, config: &RunConfig) -> String {
    format!(
        "Running {} test with {} writers and {} readers",
        discipline,
        config.writers,
        config.readers()
    )
}

fn role_threads(config: &RunConfig, role: Role) -> usize {
    match role {
        Role::Writer => config.writers,
        Role::Reader => config.readers(),
    }
}

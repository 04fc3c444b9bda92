/*!
 * Worker Loops
 *
 * Per-role operation sequences, generic over the discipline under test.
 *
 * # Hot path
 *
 * Operation counts accumulate in thread-local variables and are merged into
 * the shared ledger exactly once, at thread exit. The measured cost per
 * iteration is therefore the primitive's, not the harness's bookkeeping.
 */

use super::ledger::Ledger;
use super::role::assign_role;
use super::stop::StopToken;
use crate::core::config::{RunConfig, RunMode};
use crate::core::sync::{Discipline, ReadSection, WriteSection};
use crate::core::types::Role;
use std::time::Instant;
use tracing::{debug, warn};

/// Decides whether a worker performs another iteration
#[derive(Debug)]
pub enum Pacer<'a> {
    /// A fixed number of iterations remain
    Fixed { remaining: u64 },
    /// Keep going until the stop token trips
    Timed { stop: &'a StopToken },
}

impl<'a> Pacer<'a> {
    pub fn new(mode: RunMode, stop: &'a StopToken) -> Self {
        match mode {
            RunMode::Fixed { iterations } => Self::Fixed {
                remaining: iterations,
            },
            RunMode::Timed { .. } => Self::Timed { stop },
        }
    }

    #[inline(always)]
    pub fn next(&mut self) -> bool {
        match self {
            Self::Fixed { remaining } => {
                if *remaining == 0 {
                    return false;
                }
                *remaining -= 1;
                true
            }
            Self::Timed { stop } => !stop.is_stopped(),
        }
    }
}

/// What a reader thread observed over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderTally {
    pub calls: u64,
    pub violations: u64,
    /// Last value seen, 0 if nothing was ever published
    pub last_seen: u64,
}

/// Publish `previous + 1` (or 1) each iteration, reclaiming the old version
///
/// Reclamation happens after the write section is released. Under RCU that
/// means waiting out a grace period; freeing any earlier would pull the
/// value out from under a reader that loaded it before the publish.
pub fn writer_loop<D: Discipline<Ledger>>(discipline: &D, mut pacer: Pacer<'_>) -> u64 {
    let mut calls: u64 = 0;

    while pacer.next() {
        let mut next = Box::new(0u64);
        let retired = {
            let mut section = discipline.write_lock();
            *next = section.current().map_or(1, |value| value + 1);
            section.publish(next)
        };
        if let Some(old) = retired {
            discipline.synchronize(old);
        }
        calls += 2; // lock and unlock
    }

    calls
}

/// Observe the shared value each iteration and check it never decreases
pub fn reader_loop<D: Discipline<Ledger>>(discipline: &D, mut pacer: Pacer<'_>) -> ReaderTally {
    let mut tally = ReaderTally::default();

    while pacer.next() {
        let observed = discipline.read_lock().current().unwrap_or(0);
        if tally.last_seen != 0 && tally.last_seen > observed {
            warn!(
                last = tally.last_seen,
                observed, "shared value went backwards"
            );
            tally.violations += 1;
        }
        tally.last_seen = observed;
        tally.calls += 2; // lock and unlock
    }

    tally
}

/// Entry point for thread `index`: pick a role, loop, then settle up
pub fn run_worker<D: Discipline<Ledger>>(
    discipline: &D,
    stop: &StopToken,
    config: &RunConfig,
    index: usize,
) {
    let pacer = Pacer::new(config.mode, stop);

    match assign_role(index, config.threads, config.writers) {
        Role::Writer => {
            let calls = writer_loop(discipline, pacer);
            settle(discipline, index, Role::Writer, calls, 0);
        }
        Role::Reader => {
            let tally = reader_loop(discipline, pacer);
            settle(discipline, index, Role::Reader, tally.calls, tally.violations);
        }
    }
}

/// Merge local counts into the ledger under the discipline's write lock
///
/// This lock/unlock pair is not itself counted.
fn settle<D: Discipline<Ledger>>(
    discipline: &D,
    index: usize,
    role: Role,
    calls: u64,
    violations: u64,
) {
    let last = {
        let mut section = discipline.write_lock();
        let ledger = section.ledger();
        ledger.counts.add(role, calls);
        ledger.counts.violations += violations;
        ledger.quiescence.retire(role, Instant::now())
    };

    debug!(thread = index, %role, calls, last, "worker finished");
}

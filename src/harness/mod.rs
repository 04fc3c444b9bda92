/*!
 * Benchmark Harness
 *
 * Drives a fixed pool of reader and writer threads against one discipline
 * and reduces what they did to per-operation latencies.
 *
 * # Flow
 *
 * 1. `orchestrator::run` creates the primitive with a zeroed `Ledger`
 * 2. `launcher::run_concurrently` starts one thread per slot
 * 3. Each thread takes a role (`role`), loops (`worker`), then merges its
 *    counts and retires from the `quiescence` tracker under the write lock
 * 4. After every thread joins, `stats::Report` turns counts and timestamps
 *    into averages
 */

pub mod launcher;
pub mod ledger;
pub mod orchestrator;
pub mod quiescence;
pub mod role;
pub mod stats;
pub mod stop;
pub mod worker;

pub use launcher::run_concurrently;
pub use ledger::{Ledger, RoleCounts};
pub use orchestrator::{run, RunOutcome};
pub use quiescence::QuiescenceTracker;
pub use role::{assign_role, partition};
pub use stats::{banner, OutputFormat, Report, RoleStats};
pub use stop::{Alarm, StopToken};
pub use worker::{reader_loop, run_worker, writer_loop, Pacer, ReaderTally};

use crate::core::config::RunConfig;
use crate::core::errors::BenchResult;
use crate::core::sync::Discipline;

/// Run discipline `D` once and aggregate the result
pub fn benchmark<D: Discipline<Ledger>>(config: &RunConfig) -> BenchResult<Report> {
    let outcome = run::<D>(config)?;
    Ok(Report::from_outcome(&outcome))
}

/*!
 * Lock Performance Harness
 *
 * Measures throughput and per-call latency of two concurrency-control
 * disciplines (RCU and a reader/writer lock) guarding one shared value.
 */

pub mod cli;
pub mod core;
pub mod harness;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{BenchError, BenchResult, LaunchError};
pub use crate::core::sync::{Discipline, RcuLock, ReadSection, RwCell, WriteSection};
pub use crate::core::{RunConfig, RunMode};
pub use harness::{benchmark, Ledger, OutputFormat, Report};
pub use monitoring::init_tracing;

/*!
 * rwlocks - reader/writer lock throughput benchmark
 *
 * Usage: rwlocks [--terse] <threadcount>
 */

use lockperf::core::types::DisciplineKind;

fn main() -> miette::Result<()> {
    lockperf::cli::run(DisciplineKind::RwLock)
}

/*!
 * rculocks - RCU read/write throughput benchmark
 *
 * Usage: rculocks [--terse] <threadcount>
 */

use lockperf::core::types::DisciplineKind;

fn main() -> miette::Result<()> {
    lockperf::cli::run(DisciplineKind::Rcu)
}

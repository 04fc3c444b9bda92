/*!
 * Property Tests
 * Role partition, stats arithmetic and fixed-run call counts
 */

use lockperf::core::types::Role;
use lockperf::harness::{partition, run, RoleStats};
use lockperf::{Ledger, RcuLock, RunConfig, RunMode, RwCell};
use proptest::prelude::*;
use std::time::Duration;

proptest! {
    #[test]
    fn prop_partition_is_exhaustive(threads in 1usize..128, writer_pct in 0usize..=100) {
        let writers = threads * writer_pct / 100;
        let roles: Vec<Role> = partition(threads, writers).collect();

        prop_assert_eq!(roles.len(), threads);
        prop_assert_eq!(roles.iter().filter(|r| **r == Role::Writer).count(), writers);
        prop_assert_eq!(roles.iter().filter(|r| **r == Role::Reader).count(), threads - writers);

        // Writers occupy exactly the tail of the index space
        let first_writer = roles.iter().position(|r| *r == Role::Writer).unwrap_or(threads);
        prop_assert!(roles[first_writer..].iter().all(|r| *r == Role::Writer));
    }

    #[test]
    fn prop_idle_role_never_divides(calls in 0u64..1_000_000, micros in 0u64..10_000_000) {
        let stats = RoleStats::compute(0, calls, Some(Duration::from_micros(micros)));
        prop_assert_eq!(stats, RoleStats::idle());
    }

    #[test]
    fn prop_average_times_calls_is_elapsed(
        threads in 1usize..64,
        pairs in 1u64..1_000_000,
        micros in 0u64..10_000_000,
    ) {
        let calls = pairs * 2;
        let stats = RoleStats::compute(threads, calls, Some(Duration::from_micros(micros)));

        prop_assert_eq!(stats.elapsed_us, micros);
        let rebuilt = stats.avg_us * calls as f64;
        prop_assert!((rebuilt - micros as f64).abs() <= 1e-6 * (micros as f64).max(1.0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_fixed_runs_count_two_per_iteration(
        threads in 1usize..5,
        writer_pct in 0usize..=100,
        iterations in 1u64..200,
    ) {
        let writers = threads * writer_pct / 100;
        let config = RunConfig::new(threads, writers, RunMode::Fixed { iterations }).unwrap();
        let expected_write = 2 * iterations * writers as u64;
        let expected_read = 2 * iterations * (threads - writers) as u64;

        let rw = run::<RwCell<Ledger>>(&config).unwrap().ledger.counts;
        prop_assert_eq!(rw.write_calls, expected_write);
        prop_assert_eq!(rw.read_calls, expected_read);
        prop_assert_eq!(rw.violations, 0);

        let rcu = run::<RcuLock<Ledger>>(&config).unwrap().ledger.counts;
        prop_assert_eq!(rcu, rw);
    }
}

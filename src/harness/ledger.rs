/*!
 * Run Ledger
 * Bookkeeping shared by every worker, stored inside the discipline under test
 */

use super::quiescence::QuiescenceTracker;
use crate::core::config::RunConfig;
use crate::core::types::Role;
use serde::Serialize;

/// Process-wide operation totals
///
/// Each loop iteration counts as two calls: one lock and one unlock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub write_calls: u64,
    pub read_calls: u64,
    /// Times a reader saw the shared value go backwards
    pub violations: u64,
}

impl RoleCounts {
    #[inline]
    pub fn add(&mut self, role: Role, calls: u64) {
        match role {
            Role::Writer => self.write_calls += calls,
            Role::Reader => self.read_calls += calls,
        }
    }

    #[inline]
    pub fn calls(&self, role: Role) -> u64 {
        match role {
            Role::Writer => self.write_calls,
            Role::Reader => self.read_calls,
        }
    }
}

/// Everything workers merge into at thread exit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub counts: RoleCounts,
    pub quiescence: QuiescenceTracker,
}

impl Ledger {
    /// Zeroed ledger expecting the configured number of each role
    pub fn for_config(config: &RunConfig) -> Self {
        Self {
            counts: RoleCounts::default(),
            quiescence: QuiescenceTracker::new(config.writers, config.readers()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RunMode;

    #[test]
    fn test_counts_by_role() {
        let mut counts = RoleCounts::default();
        counts.add(Role::Writer, 4);
        counts.add(Role::Reader, 6);
        counts.add(Role::Writer, 2);

        assert_eq!(counts.calls(Role::Writer), 6);
        assert_eq!(counts.calls(Role::Reader), 6);
        assert_eq!(counts.violations, 0);
    }

    #[test]
    fn test_ledger_expects_configured_threads() {
        let config = RunConfig::new(5, 2, RunMode::fixed_default()).unwrap();
        let ledger = Ledger::for_config(&config);
        assert_eq!(ledger.quiescence.live(Role::Writer), 2);
        assert_eq!(ledger.quiescence.live(Role::Reader), 3);
        assert_eq!(ledger.counts, RoleCounts::default());
    }
}

/*!
 * Core Types
 * Shared vocabulary for roles and disciplines
 */

use serde::Serialize;
use std::fmt;

/// Role a benchmark thread plays for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Publishes a new version of the shared value every iteration
    Writer,
    /// Observes the shared value every iteration
    Reader,
}

impl Role {
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Writer => "write",
            Role::Reader => "read",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which concurrency-control discipline a binary benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineKind {
    /// Read-copy-update: readers never block, writers wait out a grace period
    Rcu,
    /// Conventional reader/writer lock
    RwLock,
}

impl DisciplineKind {
    /// Name used in banners and reports
    pub const fn name(self) -> &'static str {
        match self {
            DisciplineKind::Rcu => "rculock",
            DisciplineKind::RwLock => "rwlock",
        }
    }
}

impl fmt::Display for DisciplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

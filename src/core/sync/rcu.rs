/*!
 * Read-Copy-Update (RCU) Lock
 * Zero-contention reads, serialized writers, grace-period reclamation
 */

use super::spinwait::SpinWait;
use super::traits::{Discipline, ReadSection, WriteSection};
use crate::core::errors::BenchResult;
use arc_swap::{ArcSwapOption, Guard};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// RCU-protected `u64` with a writer-side ledger
///
/// # Performance
///
/// - **Reads**: Zero-contention, an atomic pointer load (~1-2ns)
/// - **Writes**: Allocate-publish-wait; the wait covers every reader that
///   could still see the retired version
///
/// # Grace periods
///
/// A retired snapshot is only dropped after every reader section that may
/// have loaded it has ended. Readers register with the slot on `load`, and
/// a swap converts those registrations into real reference counts, so the
/// grace period is over once the retired `Arc` has no other holder.
pub struct RcuLock<L> {
    slot: ArcSwapOption<u64>,
    writer: Mutex<L>,
    grace: SpinWait,
}

/// Write-side section: holds the writer mutex
pub struct RcuWriteGuard<'a, L> {
    slot: &'a ArcSwapOption<u64>,
    ledger: MutexGuard<'a, L>,
}

/// Read-side section: a registered snapshot of the slot
pub struct RcuReadGuard {
    snapshot: Guard<Option<Arc<u64>>>,
}

impl<L> RcuLock<L> {
    /// Create with nothing published
    pub fn with_ledger(ledger: L) -> Self {
        Self {
            slot: ArcSwapOption::empty(),
            writer: Mutex::new(ledger),
            grace: SpinWait::grace_period(),
        }
    }

    /// Wait until no reader holds `retired`, then free it
    ///
    /// Returns how many times the reader count was polled.
    pub fn synchronize_rcu(&self, retired: Arc<u64>) -> u64 {
        let polls = self.grace.wait_until(|| Arc::strong_count(&retired) == 1);
        drop(retired);
        polls
    }
}

impl<'a, L> WriteSection<L> for RcuWriteGuard<'a, L> {
    type Retired = Arc<u64>;

    #[inline]
    fn current(&self) -> Option<u64> {
        self.slot.load().as_deref().copied()
    }

    #[inline]
    fn publish(&mut self, next: Box<u64>) -> Option<Arc<u64>> {
        self.slot.swap(Some(Arc::from(next)))
    }

    #[inline]
    fn ledger(&mut self) -> &mut L {
        &mut self.ledger
    }
}

impl ReadSection for RcuReadGuard {
    #[inline(always)]
    fn current(&self) -> Option<u64> {
        self.snapshot.as_deref().copied()
    }
}

impl<L: Send> Discipline<L> for RcuLock<L> {
    const NAME: &'static str = "rculock";

    type Retired = Arc<u64>;
    type Write<'a> = RcuWriteGuard<'a, L> where Self: 'a;
    type Read<'a> = RcuReadGuard where Self: 'a;

    fn new(ledger: L) -> BenchResult<Self> {
        Ok(Self::with_ledger(ledger))
    }

    #[inline]
    fn write_lock(&self) -> RcuWriteGuard<'_, L> {
        RcuWriteGuard {
            slot: &self.slot,
            ledger: self.writer.lock(),
        }
    }

    #[inline(always)]
    fn read_lock(&self) -> RcuReadGuard {
        RcuReadGuard {
            snapshot: self.slot.load(),
        }
    }

    #[inline]
    fn synchronize(&self, retired: Arc<u64>) {
        self.synchronize_rcu(retired);
    }

    fn into_ledger(self) -> L {
        self.slot.store(None);
        self.writer.into_inner()
    }
}

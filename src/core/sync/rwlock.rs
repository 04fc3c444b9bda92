/*!
 * Reader/Writer Lock Cell
 * Conventional shared/exclusive locking around a heap-allocated `u64`
 */

use super::traits::{Discipline, ReadSection, WriteSection};
use crate::core::errors::BenchResult;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything behind the lock: the published value and the ledger
struct Slot<L> {
    value: Option<Box<u64>>,
    ledger: L,
}

/// `u64` protected by a reader/writer lock
///
/// # Performance
///
/// - **Reads**: Shared lock; readers block only against an active writer
/// - **Writes**: Exclusive lock; the replaced value is freed right after
///   unlock since no reader can hold a reference past its own section
pub struct RwCell<L> {
    inner: RwLock<Slot<L>>,
}

/// Exclusive section
pub struct RwWriteGuard<'a, L>(RwLockWriteGuard<'a, Slot<L>>);

/// Shared section
pub struct RwReadGuard<'a, L>(RwLockReadGuard<'a, Slot<L>>);

impl<L> RwCell<L> {
    /// Create with nothing published
    pub fn with_ledger(ledger: L) -> Self {
        Self {
            inner: RwLock::new(Slot {
                value: None,
                ledger,
            }),
        }
    }
}

impl<'a, L> WriteSection<L> for RwWriteGuard<'a, L> {
    type Retired = Box<u64>;

    #[inline]
    fn current(&self) -> Option<u64> {
        self.0.value.as_deref().copied()
    }

    #[inline]
    fn publish(&mut self, next: Box<u64>) -> Option<Box<u64>> {
        self.0.value.replace(next)
    }

    #[inline]
    fn ledger(&mut self) -> &mut L {
        &mut self.0.ledger
    }
}

impl<'a, L> ReadSection for RwReadGuard<'a, L> {
    #[inline(always)]
    fn current(&self) -> Option<u64> {
        self.0.value.as_deref().copied()
    }
}

impl<L: Send + Sync> Discipline<L> for RwCell<L> {
    const NAME: &'static str = "rwlock";

    type Retired = Box<u64>;
    type Write<'a> = RwWriteGuard<'a, L> where Self: 'a;
    type Read<'a> = RwReadGuard<'a, L> where Self: 'a;

    fn new(ledger: L) -> BenchResult<Self> {
        Ok(Self::with_ledger(ledger))
    }

    #[inline]
    fn write_lock(&self) -> RwWriteGuard<'_, L> {
        RwWriteGuard(self.inner.write())
    }

    #[inline]
    fn read_lock(&self) -> RwReadGuard<'_, L> {
        RwReadGuard(self.inner.read())
    }

    /// Readers never outlive their section, so the old value goes at once
    #[inline]
    fn synchronize(&self, retired: Box<u64>) {
        drop(retired);
    }

    fn into_ledger(self) -> L {
        self.inner.into_inner().ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_unpublished() {
        let cell = RwCell::with_ledger(());
        assert_eq!(cell.read_lock().current(), None);
    }

    #[test]
    fn test_publish_swaps_value() {
        let cell = RwCell::with_ledger(());
        assert!(cell.write_lock().publish(Box::new(3)).is_none());

        let old = cell.write_lock().publish(Box::new(4)).unwrap();
        assert_eq!(*old, 3);
        cell.synchronize(old);

        assert_eq!(cell.read_lock().current(), Some(4));
    }

    #[test]
    fn test_readers_share_the_lock() {
        let cell = RwCell::with_ledger(());
        cell.write_lock().publish(Box::new(1));

        let first = cell.read_lock();
        let second = cell.read_lock();
        assert_eq!(first.current(), second.current());
    }

    #[test]
    fn test_concurrent_writers_serialize() {
        let cell = Arc::new(RwCell::with_ledger(0u64));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cell = cell.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        let old = {
                            let mut section = cell.write_lock();
                            let next = section.current().map_or(1, |v| v + 1);
                            *section.ledger() += 2;
                            section.publish(Box::new(next))
                        };
                        if let Some(old) = old {
                            cell.synchronize(old);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cell.read_lock().current(), Some(4_000));
        let cell = Arc::try_unwrap(cell).ok().unwrap();
        assert_eq!(cell.into_ledger(), 8_000);
    }
}

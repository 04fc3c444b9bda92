/*!
 * Synchronization Primitives Under Test
 *
 * Two disciplines protecting a single shared `u64`, behind one capability
 * interface so the harness can drive either without duplicating its loops:
 * - RCU: readers never block, writers publish atomically and wait out a
 *   grace period before freeing the previous version
 * - Reader/writer lock: readers share, writers exclude everyone
 *
 * # Architecture
 *
 * Each primitive also owns a caller-supplied ledger, reachable only from a
 * write-side section. Bookkeeping is therefore guarded by the very lock
 * being measured rather than by a private lock of its own.
 */

mod rcu;
mod rwlock;
mod spinwait;
mod traits;

pub use rcu::{RcuLock, RcuReadGuard, RcuWriteGuard};
pub use rwlock::{RwCell, RwReadGuard, RwWriteGuard};
pub use spinwait::SpinWait;
pub use traits::{Discipline, ReadSection, WriteSection};

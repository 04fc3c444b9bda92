/*!
 * Discipline Traits
 *
 * The capability surface both benchmarked primitives expose to the harness.
 * Lock/unlock pairs are RAII sections: acquiring returns a guard, dropping
 * the guard releases it.
 */

use crate::core::errors::BenchResult;

/// Exclusive write-side critical section
///
/// Writers are mutually exclusive with each other under every discipline.
/// The bookkeeping ledger `L` lives behind the same lock, so callers that
/// need to update it take a write section rather than a separate lock.
pub trait WriteSection<L> {
    /// A version taken out of publication, waiting to be reclaimed
    type Retired;

    /// Dereference the currently published value
    fn current(&self) -> Option<u64>;

    /// Publish `next`, returning the version it replaced
    fn publish(&mut self, next: Box<u64>) -> Option<Self::Retired>;

    /// Bookkeeping protected by this section
    fn ledger(&mut self) -> &mut L;
}

/// Read-side critical section
pub trait ReadSection {
    /// Dereference the currently published value
    fn current(&self) -> Option<u64>;
}

/// A concurrency-control discipline protecting one shared `u64`
///
/// Implementations own both the published value and a ledger `L` of
/// harness bookkeeping. The harness never adds a lock of its own: all
/// shared state is reached through the sections below.
pub trait Discipline<L>: Send + Sync + Sized {
    /// Name shown in banners and reports
    const NAME: &'static str;

    type Retired: Send;

    type Write<'a>: WriteSection<L, Retired = Self::Retired>
    where
        Self: 'a;

    type Read<'a>: ReadSection
    where
        Self: 'a;

    /// Create the primitive with nothing published yet
    fn new(ledger: L) -> BenchResult<Self>;

    /// Enter the write-side critical section
    fn write_lock(&self) -> Self::Write<'_>;

    /// Enter the read-side critical section
    fn read_lock(&self) -> Self::Read<'_>;

    /// Reclaim a retired version once no reader can still observe it
    ///
    /// Must be called outside any critical section.
    fn synchronize(&self, retired: Self::Retired);

    /// Tear down after every thread has joined, freeing the final version
    fn into_ledger(self) -> L;
}

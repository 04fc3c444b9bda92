/*!
 * Role Assignment
 * Fixed partition of thread indices into writers and readers
 */

use crate::core::types::Role;

/// Role for the thread at 0-based `index`
///
/// The last `writers` indices write, everything before them reads. The split
/// is deterministic so reader:writer ratios repeat exactly across runs and
/// the quiescence tracker knows up front how many threads of each role exist.
#[inline]
pub fn assign_role(index: usize, threads: usize, writers: usize) -> Role {
    debug_assert!(index < threads, "thread index {index} out of range {threads}");
    if index >= threads.saturating_sub(writers) {
        Role::Writer
    } else {
        Role::Reader
    }
}

/// Roles for every thread of a run, in index order
pub fn partition(threads: usize, writers: usize) -> impl Iterator<Item = Role> {
    (0..threads).map(move |index| assign_role(index, threads, writers))
}

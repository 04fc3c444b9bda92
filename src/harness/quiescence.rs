/*!
 * Quiescence Tracking
 *
 * Records the instant the last thread of each role leaves its loop. The
 * tracker itself is plain data: callers mutate it only from a write-side
 * section of the discipline under test, which is what makes the
 * check-and-decrement below race free.
 */

use crate::core::types::Role;
use std::time::Instant;
use tracing::warn;

/// Live thread counts and per-role quiescence stamps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuiescenceTracker {
    live_writers: usize,
    live_readers: usize,
    writers_quiesced: Option<Instant>,
    readers_quiesced: Option<Instant>,
}

impl QuiescenceTracker {
    pub fn new(writers: usize, readers: usize) -> Self {
        Self {
            live_writers: writers,
            live_readers: readers,
            writers_quiesced: None,
            readers_quiesced: None,
        }
    }

    /// Record that one thread of `role` has exited its loop
    ///
    /// Returns true when this was the last live thread of the role, in which
    /// case the role's quiescence stamp is set to `now`. A role's stamp is
    /// written at most once because its live count reaches zero only once.
    pub fn retire(&mut self, role: Role, now: Instant) -> bool {
        let (live, stamp) = match role {
            Role::Writer => (&mut self.live_writers, &mut self.writers_quiesced),
            Role::Reader => (&mut self.live_readers, &mut self.readers_quiesced),
        };

        match live.checked_sub(1) {
            Some(0) => {
                *live = 0;
                *stamp = Some(now);
                true
            }
            Some(remaining) => {
                *live = remaining;
                false
            }
            None => {
                warn!(%role, "retire called with no live threads left");
                false
            }
        }
    }

    #[inline]
    pub fn live(&self, role: Role) -> usize {
        match role {
            Role::Writer => self.live_writers,
            Role::Reader => self.live_readers,
        }
    }

    /// When the last thread of `role` finished, if it has
    #[inline]
    pub fn quiesced_at(&self, role: Role) -> Option<Instant> {
        match role {
            Role::Writer => self.writers_quiesced,
            Role::Reader => self.readers_quiesced,
        }
    }
}

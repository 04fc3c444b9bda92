/*!
 * Cooperative Cancellation
 *
 * A process-wide stop flag polled by every worker at each loop boundary,
 * plus a one-shot alarm thread that trips it after a fixed interval.
 */

use crate::core::errors::LaunchError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Shared stop flag, tripped at most once per run
#[derive(Debug, Default)]
pub struct StopToken {
    stopped: AtomicBool,
}

impl StopToken {
    pub const fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
        }
    }

    /// Has the run been asked to stop
    #[inline(always)]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Ask every worker to stop
    ///
    /// Returns true for the caller that actually flipped the flag.
    #[inline]
    pub fn trip(&self) -> bool {
        !self.stopped.swap(true, Ordering::AcqRel)
    }

    /// Spawn an alarm on `scope` that trips this token after `after`
    pub fn arm<'scope, 'env>(
        &'env self,
        scope: &'scope Scope<'scope, 'env>,
        after: Duration,
    ) -> Result<Alarm<'scope>, LaunchError> {
        let deadline = Instant::now() + after;
        let handle = thread::Builder::new()
            .name("lockperf-alarm".into())
            .spawn_scoped(scope, move || self.ring_at(deadline))
            .map_err(LaunchError::AlarmSpawn)?;
        Ok(Alarm { handle })
    }

    fn ring_at(&self, deadline: Instant) {
        loop {
            if self.is_stopped() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                if self.trip() {
                    debug!("stop alarm fired");
                }
                return;
            }
            thread::park_timeout(deadline - now);
        }
    }
}

/// Handle to a pending alarm
pub struct Alarm<'scope> {
    handle: ScopedJoinHandle<'scope, ()>,
}

impl Alarm<'_> {
    /// Trip the token now and let the alarm thread exit early
    pub fn disarm(self, token: &StopToken) {
        token.trip();
        self.handle.thread().unpark();
    }
}

/*!
 * Thread Launcher
 * Run N copies of a worker concurrently and report wall time
 */

use crate::core::errors::LaunchError;
use std::thread;
use std::time::{Duration, Instant};

/// Run `worker(index)` on `threads` OS threads and wait for all of them
///
/// Workers borrow from the caller's stack, so shared run state is passed by
/// reference and read back once this returns. Elapsed time covers spawning
/// the first thread through joining the last.
pub fn run_concurrently<F>(threads: usize, worker: F) -> Result<Duration, LaunchError>
where
    F: Fn(usize) + Sync,
{
    let worker = &worker;
    let start = Instant::now();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        let mut failure = None;

        for index in 0..threads {
            let spawned = thread::Builder::new()
                .name(format!("lockperf-{index}"))
                .spawn_scoped(scope, move || worker(index));
            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(source) => {
                    failure = Some(LaunchError::Spawn { index, source });
                    break;
                }
            }
        }

        for (index, handle) in handles {
            if handle.join().is_err() && failure.is_none() {
                failure = Some(LaunchError::WorkerPanicked { index });
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(start.elapsed()),
        }
    })
}

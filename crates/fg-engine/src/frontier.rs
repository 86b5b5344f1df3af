//! Frontier depth tracking and cooperative termination.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// The monotonic growth frontier and the shared stop flag.
///
/// `max_d` and the stop flag are read with relaxed atomics on the walker
/// fast path and written only inside the engine's commit critical section
/// (the stop flag additionally by [`StopHandle::request_stop`]).  The one
/// race tolerated by design: a worker may take a few extra steps after a
/// stop has been requested before it notices the flag.
pub struct Frontier {
    max_d: AtomicU32,
    bound: u32,
    stop:  Arc<AtomicBool>,
}

impl Frontier {
    pub fn new(initial: u32, bound: u32) -> Self {
        Self {
            max_d: AtomicU32::new(initial),
            bound,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current frontier depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.max_d.load(Ordering::Relaxed)
    }

    /// The depth at which the run terminates.
    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Has termination been requested or reached?
    #[inline]
    pub fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Account for a committed point at `depth`.  Must be called with the
    /// commit lock held.
    ///
    /// A commit at the frontier advances it by one; reaching the bound
    /// clamps the depth there and sets the stop flag.  Monotonic and
    /// idempotent — calls past the bound are no-ops.
    pub(crate) fn advance(&self, depth: u32) {
        let mut d = self.max_d.load(Ordering::Relaxed);
        if depth >= d {
            d += 1;
        }
        if d >= self.bound {
            d = self.bound;
            self.stop.store(true, Ordering::Relaxed);
        }
        self.max_d.store(d, Ordering::Relaxed);
    }

    /// Handle for requesting a stop from outside the engine.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// Rearm for a new run.  Requires that no workers are live.
    pub(crate) fn reset(&self, initial: u32) {
        self.max_d.store(initial, Ordering::Relaxed);
        self.stop.store(false, Ordering::Relaxed);
    }
}

/// Cloneable handle to the engine's stop flag, e.g. for a UI stop button.
///
/// Setting it is sticky for the rest of the run; in-flight walkers notice
/// at their next step check and unwind without committing.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

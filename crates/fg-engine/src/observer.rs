//! Round observer trait for rendering and progress reporting.

use fg_core::Point;

use crate::grid::Grid;

/// Per-round progress snapshot passed to [`GrowthObserver::progress`].
#[derive(Copy, Clone, Debug)]
pub struct Progress {
    /// Current frontier depth.
    pub max_d: u32,
    /// Depth at which the run terminates.
    pub bound: u32,
    /// Committed points so far.
    pub points: usize,
    /// Wall-clock seconds since the run started.
    pub elapsed_secs: f64,
}

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] once per round,
/// after all worker threads have joined — so both hooks see a quiescent
/// grid and point list.
///
/// All methods have default no-op implementations.
pub trait GrowthObserver {
    /// Called once at the start of every run, before the first round.
    /// Observers reused across runs reset per-run state here.
    fn run_started(&mut self) {}

    /// Redraw hook.  `points` is the full commit-ordered point list.
    fn render(&mut self, _grid: &Grid, _points: &[Point]) {}

    /// Progress hook.
    fn progress(&mut self, _progress: &Progress) {}
}

/// A [`GrowthObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl GrowthObserver for NoopObserver {}

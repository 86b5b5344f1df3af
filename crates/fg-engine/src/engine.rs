//! The `Engine` struct and its round-based driver loop.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use fg_core::{ColorIndex, GrowthConfig, Point, WalkerRng};

use crate::error::EngineResult;
use crate::frontier::{Frontier, StopHandle};
use crate::grid::Grid;
use crate::model::{GrowthModel, Model};
use crate::observer::{GrowthObserver, Progress};
use crate::step::{StepSet, Walker};

/// In animate mode a worker leaves the round once this much wall time has
/// passed since the round began, handing control back for a redraw.
const ROUND_BUDGET: Duration = Duration::from_secs(1);

/// Final state of a completed run.
#[derive(Copy, Clone, Debug)]
pub struct RunSummary {
    pub max_d:        u32,
    pub bound:        u32,
    pub points:       usize,
    pub rounds:       u64,
    pub elapsed_secs: f64,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The growth engine: shared grid, point list, frontier, and the round
/// driver.
///
/// All cross-thread mutation funnels through [`commit`][Self::commit], a
/// single critical section under the point-list mutex; everything else a
/// worker touches is thread-local (its walker and RNG) or a relaxed atomic
/// read.  Create via [`Engine::new`], which validates the configuration —
/// a constructed engine cannot fail at runtime.
pub struct Engine {
    config:   GrowthConfig,
    grid:     Grid,
    model:    Model,
    steps:    StepSet,
    frontier: Frontier,
    points:   Mutex<Vec<Point>>,
}

impl Engine {
    /// Validate `config` and set up an engine ready to run.
    pub fn new(config: GrowthConfig) -> EngineResult<Self> {
        config.validate()?;
        let grid = Grid::new(&config);
        let model = Model::new(config.model);
        let initial = model.seed(&grid);
        let frontier = Frontier::new(initial, model.bound(&grid));
        Ok(Self {
            steps: StepSet::new(config.three_d, config.diagonal),
            config,
            grid,
            model,
            frontier,
            points: Mutex::new(Vec::new()),
        })
    }

    // ── Public accessors ──────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current frontier depth.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.frontier.depth()
    }

    /// Depth at which the run terminates.
    #[inline]
    pub fn bound(&self) -> u32 {
        self.frontier.bound()
    }

    /// Snapshot of the committed points, in commit order.
    pub fn points(&self) -> Vec<Point> {
        self.points
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn point_count(&self) -> usize {
        self.points
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Handle for requesting a stop from another thread (UI stop button,
    /// signal handler, test timeout).
    pub fn stop_handle(&self) -> StopHandle {
        self.frontier.stop_handle()
    }

    // ── Round driver ──────────────────────────────────────────────────────

    /// Run rounds until the frontier reaches its bound or a stop is
    /// requested.  May be called again on the same engine; each call is a
    /// fresh run (empty grid and point list, re-seeded RNGs).
    ///
    /// `observer.render` and `observer.progress` fire once per round, after
    /// the round's threads have joined.
    pub fn run<O: GrowthObserver>(&mut self, observer: &mut O) -> EngineResult<RunSummary> {
        self.reset();
        observer.run_started();
        let started = Instant::now();

        // One private generator per worker thread, seeded by the policy;
        // streams persist across rounds like the original's per-thread GSL
        // generators.
        let mut rngs: Vec<WalkerRng> = (0..self.config.threads)
            .map(|i| {
                WalkerRng::for_thread(
                    self.config.rng_algorithm,
                    self.config.seed_policy,
                    self.config.seed,
                    i,
                )
            })
            .collect();

        let mut rounds = 0u64;
        loop {
            let round_start = Instant::now();
            let engine = &*self;
            thread::scope(|s| {
                for rng in rngs.iter_mut() {
                    s.spawn(move || engine.worker(rng, round_start));
                }
            });
            rounds += 1;

            {
                let points = self.points.lock().unwrap_or_else(PoisonError::into_inner);
                observer.render(&self.grid, &points);
                observer.progress(&Progress {
                    max_d:        self.frontier.depth(),
                    bound:        self.frontier.bound(),
                    points:       points.len(),
                    elapsed_secs: started.elapsed().as_secs_f64(),
                });
            }

            if self.frontier.stopped() {
                break;
            }
        }

        Ok(RunSummary {
            max_d:        self.frontier.depth(),
            bound:        self.frontier.bound(),
            points:       self.point_count(),
            rounds,
            elapsed_secs: started.elapsed().as_secs_f64(),
        })
    }

    /// Clear all run state: grid, point list, frontier, stop flag.
    fn reset(&mut self) {
        self.grid.clear();
        let initial = self.model.seed(&self.grid);
        self.frontier.reset(initial);
        self.points
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // ── Worker loop ───────────────────────────────────────────────────────

    /// One worker thread's share of a round: repeatedly walk a fresh walker
    /// until it attaches, checking the stop flag before every step.
    fn worker(&self, rng: &mut WalkerRng, round_start: Instant) {
        loop {
            let mut walker = self.model.spawn(&self.grid, self.frontier.depth(), rng);
            while !self.frontier.stopped() {
                let attach =
                    self.model
                        .try_attach(&self.grid, &walker, self.frontier.depth(), rng);
                if let Some(color) = attach {
                    if self.commit(&walker, color) {
                        break;
                    }
                    // Lost the cell to another thread; keep walking.
                }
                walker.step(&self.steps, rng);
                self.model
                    .boundary(&mut walker, &self.grid, self.frontier.depth(), rng);
            }
            if self.config.animate && round_start.elapsed() >= ROUND_BUDGET {
                break;
            }
            if self.frontier.stopped() {
                break;
            }
        }
    }

    /// The single shared-mutation path: under one lock, re-check the cell,
    /// write it, append the point, and advance the frontier.  Returns false
    /// if another thread committed the cell first.
    fn commit(&self, walker: &Walker, color: ColorIndex) -> bool {
        let mut points = self.points.lock().unwrap_or_else(PoisonError::into_inner);
        if self.grid.get(walker.x, walker.y, walker.z) != 0 {
            return false;
        }
        self.grid.set(walker.x, walker.y, walker.z, color.0);
        points.push(Point::new(walker.x, walker.y, walker.z, color));
        self.frontier.advance(self.model.depth(&self.grid, walker));
        true
    }
}

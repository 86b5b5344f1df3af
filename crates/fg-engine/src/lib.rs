//! `fg-engine` — the concurrent growth engine of `rust_fg`.
//!
//! # Round loop
//!
//! ```text
//! Engine::run:
//!   reset grid / point list / frontier / stop flag; seed one RNG per thread
//!   loop (one iteration = one round):
//!     ① spawn `threads` OS threads, each running the walker loop:
//!          spawn walker at the frontier → try_attach / step / boundary
//!          until a commit succeeds or the stop flag is set
//!          (animate mode: a thread leaves the round ~1 s after it began)
//!     ② join all threads
//!     ③ observer.render(grid, points)   — safe, workers are joined
//!     ④ observer.progress(&Progress)
//!     until the stop flag is set
//! ```
//!
//! A commit is one critical section under a single mutex: re-check the cell
//! is empty, write the color, append to the point list, advance the
//! frontier.  Workers read the stop flag and frontier depth with relaxed
//! atomics on the fast path; both are only written inside that critical
//! section (plus the external stop request).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fg_core::GrowthConfig;
//! use fg_engine::{Engine, NoopObserver};
//!
//! let mut engine = Engine::new(GrowthConfig::default())?;
//! let summary = engine.run(&mut NoopObserver)?;
//! println!("grew {} points to depth {}", summary.points, summary.max_d);
//! ```

pub mod engine;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod model;
pub mod observer;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{Engine, RunSummary};
pub use error::{EngineError, EngineResult};
pub use frontier::{Frontier, StopHandle};
pub use grid::Grid;
pub use model::{Forest, GrowthModel, Model, Neuron, Tree};
pub use observer::{GrowthObserver, NoopObserver, Progress};
pub use step::{StepSet, Walker};

//! Run configuration.
//!
//! # Grid geometry
//!
//! 2D runs use a `width × height` grid: x is the lateral axis, y the
//! vertical growth axis, and `length` is ignored.  3D runs use
//! `length × width × height`: x and y are lateral, z grows.  Cells with any
//! coordinate at 0 or at `extent - 1` are permanent walls, so the usable
//! interior of an axis of extent `n` is `n - 2` cells.
//!
//! A `GrowthConfig` is validated once, before the engine is constructed;
//! the engine itself never sees a malformed configuration.

use crate::{FgError, FgResult, rng::RngAlgorithm};

/// Upper bound on total grid cells.  Keeps the flat cell store within one
/// sane allocation and all index arithmetic inside `u32`.
pub const MAX_CELLS: u64 = 1 << 31;

// ── Model selector ────────────────────────────────────────────────────────────

/// Which growth pattern to run.  Chosen once per run and held constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelKind {
    /// Single-color tree growing upward from a seed cell on the floor.
    #[default]
    Tree,
    /// Multiple trees rooted anywhere on the floor, each keeping the color
    /// it was born with.
    Forest,
    /// Radial growth outward from a seed cell at the grid center.
    Neuron,
}

// ── Seed policy ───────────────────────────────────────────────────────────────

/// How per-thread generator seeds are derived at run start.
///
/// `Clock` and `Fixed` add the thread index to the base seed so parallel
/// threads never share a stream.  `Default` leaves every thread on the
/// generator's built-in default seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedPolicy {
    /// The generator's built-in default seed, identical for all threads.
    Default,
    /// Wall-clock nanoseconds plus the thread index.
    #[default]
    Clock,
    /// `seed` from the configuration plus the thread index.  Reproducible.
    Fixed,
}

// ── GrowthConfig ──────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the engine constructor.  All fields have defaults matching the original
/// benchmark, so a partial (or empty) JSON object is a valid configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthConfig {
    /// Lateral grid extent (x in 2D, y in 3D).
    pub width: u32,

    /// Second lateral extent (x in 3D).  Ignored in 2D.
    pub length: u32,

    /// Growth-axis extent (y in 2D, z in 3D).
    pub height: u32,

    /// Worker threads per round.  Must be nonzero.
    pub threads: u32,

    /// Allow diagonal walker steps (8 step vectors in 2D, 26 in 3D).
    pub diagonal: bool,

    /// Grow in three dimensions.
    pub three_d: bool,

    /// Break each round after ~1 s of wall time so a renderer can redraw
    /// mid-growth.  When false, a round runs until the structure is done.
    pub animate: bool,

    /// Growth pattern.
    pub model: ModelKind,

    /// How per-thread generator seeds are derived.
    pub seed_policy: SeedPolicy,

    /// Base seed for [`SeedPolicy::Fixed`].
    pub seed: u64,

    /// Generator algorithm, passed through to [`WalkerRng`][crate::WalkerRng]
    /// and never interpreted by the engine.
    pub rng_algorithm: RngAlgorithm,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            width:         320,
            length:        320,
            height:        200,
            threads:       default_threads(),
            diagonal:      false,
            three_d:       false,
            animate:       true,
            model:         ModelKind::Tree,
            seed_policy:   SeedPolicy::Clock,
            seed:          7007,
            rng_algorithm: RngAlgorithm::Small,
        }
    }
}

/// One thread per logical core, matching the original benchmark's default.
fn default_threads() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

impl GrowthConfig {
    /// Check the configuration for values the engine cannot run with.
    ///
    /// Rejects zero threads and any active grid axis too small to hold a
    /// wall on each side plus at least one interior cell.  The neuron model
    /// additionally needs a nonzero growth radius.
    pub fn validate(&self) -> FgResult<()> {
        if self.threads == 0 {
            return Err(FgError::Config("threads must be nonzero".into()));
        }
        let min_extent = self.active_extents().into_iter().min().unwrap_or(0);
        if min_extent < 3 {
            return Err(FgError::Config(format!(
                "grid axes must be at least 3 cells, got {min_extent}"
            )));
        }
        if self.model == ModelKind::Neuron && min_extent / 2 < 2 {
            return Err(FgError::Config(
                "grid too small for neuron growth (all axes must be >= 4)".into(),
            ));
        }
        let cells = self.cell_count();
        if cells > MAX_CELLS {
            return Err(FgError::Config(format!(
                "grid of {cells} cells exceeds the {MAX_CELLS}-cell limit"
            )));
        }
        Ok(())
    }

    /// Total cells the grid will allocate.  Computed in `u64` so oversized
    /// extents are reported by [`validate`][Self::validate] instead of
    /// wrapping.
    pub fn cell_count(&self) -> u64 {
        self.active_extents().into_iter().map(u64::from).product()
    }

    /// The grid extents actually used by the active geometry.
    ///
    /// `[width, height]` in 2D, `[length, width, height]` in 3D.
    pub fn active_extents(&self) -> Vec<u32> {
        if self.three_d {
            vec![self.length, self.width, self.height]
        } else {
            vec![self.width, self.height]
        }
    }
}

//! Per-model spawn, boundary, and attachment rules.
//!
//! Each growth pattern (tree, forest, neuron) is one [`GrowthModel`]
//! implementation handling both 2D and 3D.  The [`Model`] enum picks the
//! implementation once at engine construction and delegates; nothing is
//! dispatched per step.
//!
//! # Axis roles
//!
//! Tree and forest have a *growth* axis (y in 2D, z in 3D) and *wrap* axes
//! (the lateral ones): leaving the grid along the growth axis discards the
//! walker, leaving laterally wraps it toroidally.  Neuron growth is radial
//! and has no wrap axis — any exit discards the walker.

use fg_core::{ColorIndex, ModelKind, WalkerRng};

use crate::grid::Grid;
use crate::step::Walker;

// ── GrowthModel ───────────────────────────────────────────────────────────────

/// The per-model rule set consumed by the engine's walker loop.
///
/// All methods are `&self` and the implementations are stateless; mutable
/// state lives in the grid, the frontier, and the walker itself.
pub trait GrowthModel {
    /// Write the seed cell(s) into an empty grid and return the initial
    /// frontier depth.
    fn seed(&self, grid: &Grid) -> u32;

    /// Produce a fresh walker at the current frontier.
    fn spawn(&self, grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker;

    /// Re-legalise a walker after a step: wrap it on a wrap axis, or replace
    /// it with a fresh spawn if it left along the growth axis.
    fn boundary(&self, walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng);

    /// The color to commit if the walker may attach at its current cell,
    /// `None` if it may not.  Does not mutate the grid.
    fn try_attach(
        &self,
        grid:   &Grid,
        walker: &Walker,
        max_d:  u32,
        rng:    &mut WalkerRng,
    ) -> Option<ColorIndex>;

    /// Frontier depth of a committed walker (row/plane index, or 1 + radial
    /// distance from the center for neuron growth).
    fn depth(&self, grid: &Grid, walker: &Walker) -> u32;

    /// The model's upper bound on the frontier depth.
    fn bound(&self, grid: &Grid) -> u32;
}

// ── Tree ──────────────────────────────────────────────────────────────────────

/// Single-color growth upward from one seed cell on the floor row/plane.
pub struct Tree;

impl GrowthModel for Tree {
    fn seed(&self, grid: &Grid) -> u32 {
        if grid.three_d() {
            grid.set((grid.length() / 2) as i32, (grid.width() / 2) as i32, 0, ColorIndex::GROWTH.0);
        } else {
            grid.set((grid.width() / 2) as i32, 0, 0, ColorIndex::GROWTH.0);
        }
        1
    }

    fn spawn(&self, grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker {
        planar_spawn(grid, max_d, rng)
    }

    fn boundary(&self, walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng) {
        planar_boundary(walker, grid, max_d, rng);
    }

    fn try_attach(
        &self,
        grid:   &Grid,
        walker: &Walker,
        max_d:  u32,
        _rng:   &mut WalkerRng,
    ) -> Option<ColorIndex> {
        let past_frontier = planar_depth(grid, walker) > max_d as i32;
        if past_frontier || grid.is_wall(walker.x, walker.y, walker.z) {
            return None;
        }
        grid.neighbors_occupied(walker.x, walker.y, walker.z)
            .then_some(ColorIndex::GROWTH)
    }

    fn depth(&self, grid: &Grid, walker: &Walker) -> u32 {
        planar_depth(grid, walker) as u32
    }

    fn bound(&self, grid: &Grid) -> u32 {
        grid.height() - 1
    }
}

// ── Forest ────────────────────────────────────────────────────────────────────

/// Many trees rooted anywhere on the floor row/plane.
///
/// The floor is special: any cell there may attach with no occupied
/// neighbor, receiving a fresh random color.  Everywhere else a walker
/// inherits the color of the first occupied neighbor found, so each tree's
/// color propagates through its branches.
pub struct Forest;

impl GrowthModel for Forest {
    /// No seed cell — the floor row/plane itself acts as the seed.
    fn seed(&self, _grid: &Grid) -> u32 {
        1
    }

    fn spawn(&self, grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker {
        planar_spawn(grid, max_d, rng)
    }

    fn boundary(&self, walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng) {
        planar_boundary(walker, grid, max_d, rng);
    }

    fn try_attach(
        &self,
        grid:   &Grid,
        walker: &Walker,
        max_d:  u32,
        rng:    &mut WalkerRng,
    ) -> Option<ColorIndex> {
        let depth = planar_depth(grid, walker);
        if depth > max_d as i32 || forest_wall(grid, walker) {
            return None;
        }
        if depth == 0 {
            // Floor cells root a new tree with a fresh color.
            return Some(ColorIndex(1 + rng.uniform_int(15) as u8));
        }
        grid.first_neighbor_color(walker.x, walker.y, walker.z)
            .map(ColorIndex)
    }

    fn depth(&self, grid: &Grid, walker: &Walker) -> u32 {
        planar_depth(grid, walker) as u32
    }

    fn bound(&self, grid: &Grid) -> u32 {
        grid.height() - 1
    }
}

/// Forest walls: the boundary shell minus the floor row/plane.
fn forest_wall(grid: &Grid, w: &Walker) -> bool {
    if grid.three_d() {
        w.x == 0 || w.x as u32 == grid.length() - 1
            || w.y == 0 || w.y as u32 == grid.width() - 1
            || w.z as u32 == grid.height() - 1
    } else {
        w.x == 0 || w.x as u32 == grid.width() - 1
            || w.y as u32 == grid.height() - 1
    }
}

// ── Neuron ────────────────────────────────────────────────────────────────────

/// Radial single-color growth from a seed cell at the grid center.
///
/// Walkers spawn directly on the circle/sphere of radius `max_d` around the
/// center rather than walking out from it.  The 3D polar angle uses the
/// arcsine transform, giving a uniform distribution on the sphere (earlier
/// versions of the original sampled the angle uniformly, clustering spawns
/// at the poles).
pub struct Neuron;

impl GrowthModel for Neuron {
    fn seed(&self, grid: &Grid) -> u32 {
        let (cx, cy, cz) = center(grid);
        grid.set(cx, cy, cz, ColorIndex::GROWTH.0);
        2
    }

    fn spawn(&self, grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker {
        let r = max_d as f64;
        if grid.three_d() {
            let azimuth = 2.0 * std::f64::consts::PI * rng.uniform();
            let (s1, c1) = azimuth.sin_cos();
            let s2 = 2.0 * rng.uniform() - 1.0;
            let c2 = (1.0 - s2 * s2).sqrt();
            Walker::new(
                ((grid.length() / 2) as f64 + r * c1 * c2) as i32,
                ((grid.width() / 2) as f64 + r * s1 * c2) as i32,
                ((grid.height() / 2) as f64 + r * s2) as i32,
            )
        } else {
            let angle = 2.0 * std::f64::consts::PI * rng.uniform();
            Walker::new(
                ((grid.width() / 2) as f64 + r * angle.cos()) as i32,
                ((grid.height() / 2) as f64 + r * angle.sin()) as i32,
                0,
            )
        }
    }

    /// No wrap axis: any exit discards the walker.
    fn boundary(&self, walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng) {
        if !grid.contains(walker.x, walker.y, walker.z) {
            *walker = self.spawn(grid, max_d, rng);
        }
    }

    fn try_attach(
        &self,
        grid:   &Grid,
        walker: &Walker,
        _max_d: u32,
        _rng:   &mut WalkerRng,
    ) -> Option<ColorIndex> {
        if grid.is_wall(walker.x, walker.y, walker.z) {
            return None;
        }
        grid.neighbors_occupied(walker.x, walker.y, walker.z)
            .then_some(ColorIndex::GROWTH)
    }

    fn depth(&self, grid: &Grid, walker: &Walker) -> u32 {
        let (cx, cy, cz) = center(grid);
        let dx = (walker.x - cx) as f64;
        let dy = (walker.y - cy) as f64;
        let r2 = dx * dx + dy * dy;
        if grid.three_d() {
            let dz = (walker.z - cz) as f64;
            (1.0 + (r2 + dz * dz).sqrt()) as u32
        } else {
            (1.0 + r2.sqrt().round()) as u32
        }
    }

    fn bound(&self, grid: &Grid) -> u32 {
        let min = if grid.three_d() {
            grid.length().min(grid.width()).min(grid.height())
        } else {
            grid.width().min(grid.height())
        };
        min / 2 - 1
    }
}

fn center(grid: &Grid) -> (i32, i32, i32) {
    if grid.three_d() {
        (
            (grid.length() / 2) as i32,
            (grid.width() / 2) as i32,
            (grid.height() / 2) as i32,
        )
    } else {
        ((grid.width() / 2) as i32, (grid.height() / 2) as i32, 0)
    }
}

// ── Shared tree/forest geometry ───────────────────────────────────────────────

/// Uniform lateral position at the current frontier depth.
fn planar_spawn(grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker {
    if grid.three_d() {
        Walker::new(
            rng.uniform_int(grid.length()) as i32,
            rng.uniform_int(grid.width()) as i32,
            max_d as i32,
        )
    } else {
        Walker::new(rng.uniform_int(grid.width()) as i32, max_d as i32, 0)
    }
}

/// Growth-axis exit → respawn; lateral exit → toroidal wrap.
fn planar_boundary(walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng) {
    let growth = planar_depth(grid, walker);
    if growth < 0 || growth >= grid.height() as i32 {
        *walker = planar_spawn(grid, max_d, rng);
        return;
    }
    if grid.three_d() {
        walker.x = wrap(walker.x, grid.length());
        walker.y = wrap(walker.y, grid.width());
    } else {
        walker.x = wrap(walker.x, grid.width());
    }
}

/// Growth-axis coordinate: y in 2D, z in 3D.
#[inline]
fn planar_depth(grid: &Grid, walker: &Walker) -> i32 {
    if grid.three_d() { walker.z } else { walker.y }
}

/// One-cell toroidal wrap.  Steps are unit moves, so a walker can only ever
/// be one cell outside.
#[inline]
fn wrap(v: i32, extent: u32) -> i32 {
    if v < 0 {
        extent as i32 - 1
    } else if v >= extent as i32 {
        0
    } else {
        v
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// The model selected for a run; matched once at construction, then every
/// call delegates directly.
pub enum Model {
    Tree(Tree),
    Forest(Forest),
    Neuron(Neuron),
}

impl Model {
    pub fn new(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Tree   => Model::Tree(Tree),
            ModelKind::Forest => Model::Forest(Forest),
            ModelKind::Neuron => Model::Neuron(Neuron),
        }
    }

    #[inline]
    fn inner(&self) -> &dyn GrowthModel {
        match self {
            Model::Tree(m)   => m,
            Model::Forest(m) => m,
            Model::Neuron(m) => m,
        }
    }
}

impl GrowthModel for Model {
    fn seed(&self, grid: &Grid) -> u32 {
        self.inner().seed(grid)
    }

    fn spawn(&self, grid: &Grid, max_d: u32, rng: &mut WalkerRng) -> Walker {
        self.inner().spawn(grid, max_d, rng)
    }

    fn boundary(&self, walker: &mut Walker, grid: &Grid, max_d: u32, rng: &mut WalkerRng) {
        self.inner().boundary(walker, grid, max_d, rng);
    }

    fn try_attach(
        &self,
        grid:   &Grid,
        walker: &Walker,
        max_d:  u32,
        rng:    &mut WalkerRng,
    ) -> Option<ColorIndex> {
        self.inner().try_attach(grid, walker, max_d, rng)
    }

    fn depth(&self, grid: &Grid, walker: &Walker) -> u32 {
        self.inner().depth(grid, walker)
    }

    fn bound(&self, grid: &Grid) -> u32 {
        self.inner().bound(grid)
    }
}

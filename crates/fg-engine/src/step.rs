//! Walkers and the fixed step-vector sets.

use fg_core::WalkerRng;

// Step tables.  Each entry is a unit move in (x, y, z); the active table is
// chosen once per run from the dimension and diagonal flags.

const STEPS_2D: [[i32; 3]; 4] = [
    [0, 1, 0],
    [0, -1, 0],
    [1, 0, 0],
    [-1, 0, 0],
];

const STEPS_2D_DIAGONAL: [[i32; 3]; 8] = [
    [1, 1, 0],
    [1, 0, 0],
    [1, -1, 0],
    [0, -1, 0],
    [-1, -1, 0],
    [-1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
];

const STEPS_3D: [[i32; 3]; 6] = [
    [0, 0, 1],
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, -1],
];

/// All 26 nonzero offsets in {−1, 0, 1}³.
const STEPS_3D_DIAGONAL: [[i32; 3]; 26] = [
    [1, 1, 1],    [1, 0, 1],    [1, -1, 1],
    [0, 1, 1],    [0, 0, 1],    [0, -1, 1],
    [-1, 1, 1],   [-1, 0, 1],   [-1, -1, 1],
    [1, 1, 0],    [1, 0, 0],    [1, -1, 0],
    [0, 1, 0],    [0, -1, 0],
    [-1, 1, 0],   [-1, 0, 0],   [-1, -1, 0],
    [1, 1, -1],   [1, 0, -1],   [1, -1, -1],
    [0, 1, -1],   [0, 0, -1],   [0, -1, -1],
    [-1, 1, -1],  [-1, 0, -1],  [-1, -1, -1],
];

// ── StepSet ───────────────────────────────────────────────────────────────────

/// The active set of unit step vectors: 4 (2D), 8 (2D diagonal), 6 (3D), or
/// 26 (3D diagonal).  A step is drawn uniformly from the set.
#[derive(Copy, Clone, Debug)]
pub struct StepSet {
    steps: &'static [[i32; 3]],
}

impl StepSet {
    pub fn new(three_d: bool, diagonal: bool) -> Self {
        let steps: &'static [[i32; 3]] = match (three_d, diagonal) {
            (false, false) => &STEPS_2D,
            (false, true)  => &STEPS_2D_DIAGONAL,
            (true, false)  => &STEPS_3D,
            (true, true)   => &STEPS_3D_DIAGONAL,
        };
        Self { steps }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Draw a step uniformly from the set.
    #[inline]
    pub fn pick(&self, rng: &mut WalkerRng) -> [i32; 3] {
        self.steps[rng.uniform_int(self.steps.len() as u32) as usize]
    }
}

// ── Walker ────────────────────────────────────────────────────────────────────

/// A thread-local candidate point performing a random walk.
///
/// Never shared between threads and never persisted; it either becomes a
/// committed [`Point`][fg_core::Point] or is discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Walker {
    pub x: i32,
    pub y: i32,
    /// Always 0 in 2D runs.
    pub z: i32,
}

impl Walker {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move one step drawn uniformly from `steps`.
    #[inline]
    pub fn step(&mut self, steps: &StepSet, rng: &mut WalkerRng) {
        let [dx, dy, dz] = steps.pick(rng);
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

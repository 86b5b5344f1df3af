//! The shared cell grid ("medium") that the structure grows in.
//!
//! # Storage
//!
//! One flat array of cell states, `0` = empty, `1..=15` = the color the cell
//! was committed with.  2D grids are `width × height` (index `y·width + x`);
//! 3D grids are `length × width × height` (index `z·area + y·length + x`,
//! `area = width·length`).
//!
//! Cells are `AtomicU8` so worker threads can read occupancy without
//! synchronisation while the engine serialises all writes through its commit
//! lock.  A cell transitions `0 → nonzero` at most once and never back, so a
//! stale read is always a conservative "empty".
//!
//! # Walls
//!
//! Cells with any coordinate at 0 or `extent − 1` on an active axis are
//! permanently unattachable.  Attachment tests reject walls first, which
//! makes every neighbor read in the interior safe without bounds checks.

use std::sync::atomic::{AtomicU8, Ordering};

use fg_core::GrowthConfig;

/// Flat cell-state store plus the derived geometry constants.
pub struct Grid {
    width:   u32,
    length:  u32,
    height:  u32,
    /// Cells per growth plane in 3D (`width · length`); unused in 2D.
    area:    u32,
    three_d: bool,
    cells:   Vec<AtomicU8>,
}

impl Grid {
    /// Allocate an all-empty grid sized from `config`.
    ///
    /// The cell count is computed in `u64`; configurations past
    /// [`MAX_CELLS`][fg_core::config::MAX_CELLS] are rejected by
    /// `GrowthConfig::validate` before the engine gets here.
    pub fn new(config: &GrowthConfig) -> Self {
        let (width, length, height) = (config.width, config.length, config.height);
        let total = config.cell_count() as usize;
        let mut cells = Vec::with_capacity(total);
        cells.resize_with(total, || AtomicU8::new(0));
        Self {
            width,
            length,
            height,
            area: width * length,
            three_d: config.three_d,
            cells,
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn three_d(&self) -> bool {
        self.three_d
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(self.contains(x, y, z), "({x}, {y}, {z}) out of bounds");
        if self.three_d {
            (z as u32 * self.area + y as u32 * self.length + x as u32) as usize
        } else {
            (y as u32 * self.width + x as u32) as usize
        }
    }

    /// Is the coordinate inside the grid (walls included)?
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        if self.three_d {
            x >= 0 && (x as u32) < self.length
                && y >= 0 && (y as u32) < self.width
                && z >= 0 && (z as u32) < self.height
        } else {
            x >= 0 && (x as u32) < self.width
                && y >= 0 && (y as u32) < self.height
                && z == 0
        }
    }

    /// Is the coordinate on the permanently unattachable boundary shell?
    pub fn is_wall(&self, x: i32, y: i32, z: i32) -> bool {
        if self.three_d {
            x == 0 || x as u32 == self.length - 1
                || y == 0 || y as u32 == self.width - 1
                || z == 0 || z as u32 == self.height - 1
        } else {
            x == 0 || x as u32 == self.width - 1
                || y == 0 || y as u32 == self.height - 1
        }
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Read a cell state.  `0` = empty, otherwise the committed color.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> u8 {
        self.cells[self.index(x, y, z)].load(Ordering::Relaxed)
    }

    /// Write a cell state.  Callers must serialise writes (the engine does
    /// this through its commit lock); the grid performs no locking itself.
    #[inline]
    pub fn set(&self, x: i32, y: i32, z: i32, color: u8) {
        self.cells[self.index(x, y, z)].store(color, Ordering::Relaxed);
    }

    /// Is any of the 4 (2D) / 6 (3D) axis-adjacent cells occupied?
    ///
    /// This defines "touching the structure".  Diagonal neighbors never
    /// count, even when diagonal movement is enabled.  The coordinate must
    /// not be on a wall.
    #[inline]
    pub fn neighbors_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.first_neighbor_color(x, y, z).is_some()
    }

    /// Color of the first occupied axis neighbor, scanning in the fixed
    /// order +x, −x, +y, −y, +z, −z.  `None` if all are empty.
    pub fn first_neighbor_color(&self, x: i32, y: i32, z: i32) -> Option<u8> {
        debug_assert!(!self.is_wall(x, y, z), "neighbor scan on a wall cell");
        let i = self.index(x, y, z);
        let step_y = if self.three_d { self.length } else { self.width } as usize;
        let candidates = [
            self.cells[i + 1].load(Ordering::Relaxed),
            self.cells[i - 1].load(Ordering::Relaxed),
            self.cells[i + step_y].load(Ordering::Relaxed),
            self.cells[i - step_y].load(Ordering::Relaxed),
        ];
        for c in candidates {
            if c != 0 {
                return Some(c);
            }
        }
        if self.three_d {
            let up = self.cells[i + self.area as usize].load(Ordering::Relaxed);
            if up != 0 {
                return Some(up);
            }
            let down = self.cells[i - self.area as usize].load(Ordering::Relaxed);
            if down != 0 {
                return Some(down);
            }
        }
        None
    }

    /// Number of nonzero cells.  O(cells); intended for tests and summaries,
    /// not the hot path.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.load(Ordering::Relaxed) != 0)
            .count()
    }

    /// Reset every cell to empty.  Requires exclusive access, so this can
    /// only happen between runs.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell.get_mut() = 0;
        }
    }
}

//! Committed points and the color palette.

use std::fmt;

/// RGB palette indexed by [`ColorIndex`], taken from the original benchmark.
///
/// Entry 0 is the empty-cell color and never appears in a committed point.
pub const COLOR_TABLE: [[f32; 3]; 16] = [
    [0.00, 0.00, 0.00],
    [1.00, 0.00, 0.00],
    [0.00, 1.00, 0.00],
    [0.00, 0.00, 1.00],
    [0.50, 0.50, 0.00],
    [0.50, 0.00, 0.50],
    [0.00, 0.50, 0.50],
    [0.50, 0.25, 0.25],
    [0.25, 0.50, 0.25],
    [0.25, 0.25, 0.50],
    [0.75, 0.25, 0.00],
    [0.75, 0.00, 0.25],
    [0.25, 0.75, 0.00],
    [0.00, 0.75, 0.25],
    [0.25, 0.00, 0.75],
    [0.00, 0.25, 0.75],
];

/// A cell color, `1..=15` for committed points (`0` means empty).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorIndex(pub u8);

impl ColorIndex {
    /// The single color used by tree and neuron growth.
    pub const GROWTH: ColorIndex = ColorIndex(2);

    /// RGB triple for rendering.
    #[inline]
    pub fn rgb(self) -> [f32; 3] {
        COLOR_TABLE[self.0 as usize & 15]
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed grid point, recorded in commit order.
///
/// `z` is always 0 in 2D runs.  The point list is append-only for the
/// lifetime of a run and cleared when a new run starts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x:     i32,
    pub y:     i32,
    pub z:     i32,
    pub color: ColorIndex,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32, color: ColorIndex) -> Self {
        Self { x, y, z, color }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) c{}", self.x, self.y, self.z, self.color)
    }
}

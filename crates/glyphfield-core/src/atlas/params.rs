/// Geometry of a packed glyph atlas: a grid of `num_chars` fixed-size
/// character cells, one byte per sample, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    /// Samples per cell, (x, y).
    pub char_size: (i32, i32),
    /// Cells in the grid, (x, y).
    pub num_chars: (i32, i32),
}

impl GridDims {
    /// Bytes per bitmap scanline: all cells of one row side by side.
    #[inline]
    pub fn line_width(&self) -> i32 {
        self.char_size.0 * self.num_chars.0
    }

    /// Exact byte length a bitmap stream must have for this grid.
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        (self.line_width() as u64) * (self.char_size.1 as u64) * (self.num_chars.1 as u64)
    }

    /// Byte length of one character row's strip (`num_chars.0` cells).
    #[inline]
    pub fn strip_bytes(&self) -> usize {
        (self.line_width() as usize) * (self.char_size.1 as usize)
    }
}

/// Parameters of one field computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldParams {
    /// Distance saturation value; doubles as the nearest-transition
    /// search radius. Must be >= 1.
    pub clamp: i32,
    /// Sampling stride over source samples. Must be >= 1.
    pub scale: i32,
    /// Extra sampled margin past each cell's bounds, (x, y). Non-negative.
    pub padding: (i32, i32),
}

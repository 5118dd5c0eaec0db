use std::io::{Read, Seek, SeekFrom, Write};

use crate::atlas::params::GridDims;
use crate::error::Result;

/// Copy the `w*h` bytes of cell `(i, j)` from a packed grid to `output`,
/// preserving row-major order within the cell.
///
/// Seeks to the cell's top-left sample, then alternates reading `w` bytes
/// and skipping `line_width - w` to stay inside the same cell column.
///
/// Requirements:
/// - `0 <= i < num_chars.0` and `0 <= j < num_chars.1`. Not checked here;
///   an out-of-range index seeks to an unrelated grid location. Callers
///   gate with [`crate::validate::validate_cell_index`].
/// - The source must hold the full grid; a short source surfaces as the
///   `read_exact` error.
pub fn extract_cell<R, W>(input: &mut R, output: &mut W, grid: &GridDims, i: i32, j: i32) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let (w, h) = grid.char_size;
    let line_width = grid.line_width() as i64;

    let origin = line_width * (h as i64) * (j as i64) + (w as i64) * (i as i64);
    input.seek(SeekFrom::Start(origin as u64))?;

    let mut row = vec![0u8; w as usize];
    for _ in 0..h {
        input.read_exact(&mut row)?;
        output.write_all(&row)?;
        input.seek(SeekFrom::Current(line_width - (w as i64)))?;
    }

    Ok(())
}

use std::io::{Read, Write};
use std::ops::Range;

use crate::atlas::params::{FieldParams, GridDims};
use crate::error::Result;
use crate::sdf::offsets::OffsetTable;
use crate::sdf::pixel::Pixel;
use crate::sdf::quantize::quantize;
use crate::validate;

/// One character row's pixels: all `num_chars.0` cells side by side,
/// `height` scanlines of `line_width` bytes.
struct RowStrip {
    data: Vec<u8>,
    line_width: i32,
    height: i32,
}

impl RowStrip {
    /// Classify the sample at `(x, y)`. Coordinates outside the valid
    /// ranges read as background.
    #[inline]
    fn classify(&self, x: i32, y: i32, x_range: &Range<i32>) -> Pixel {
        if self.in_bounds(x, y, x_range) {
            self.at(x, y)
        } else {
            Pixel::Background
        }
    }

    /// Direct sample read; `(x, y)` must be in bounds.
    #[inline]
    fn at(&self, x: i32, y: i32) -> Pixel {
        Pixel::from_byte(self.data[(y * self.line_width + x) as usize])
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32, x_range: &Range<i32>) -> bool {
        x_range.contains(&x) && y >= 0 && y < self.height
    }
}

/// Signed distance at `(x, y)` to the nearest opposite-class sample.
///
/// The query sample itself may sit outside the valid ranges (padding);
/// it then counts as background. Candidate neighbors must lie inside the
/// ranges; offsets landing outside are skipped, not matched. When the
/// whole search radius is uniform the field saturates at `radius`.
fn signed_distance(
    strip: &RowStrip,
    x_range: &Range<i32>,
    table: &OffsetTable,
    x: i32,
    y: i32,
) -> f64 {
    let own = strip.classify(x, y, x_range);
    let sign = own.sign();

    for &(dx, dy) in table.pairs() {
        let nx = x + dx;
        let ny = y + dy;

        if !strip.in_bounds(nx, ny, x_range) {
            continue;
        }
        if strip.at(nx, ny) != own {
            return sign * (((dx * dx + dy * dy) as f64).sqrt());
        }
    }

    sign * (table.radius() as f64)
}

/// Stepped sample count over the half-open padded span `[-pad, span+pad)`
/// with stride `scale`.
#[inline]
pub fn samples_per_span(span: i32, pad: i32, scale: i32) -> usize {
    let total = span + 2 * pad;
    if total <= 0 {
        0
    } else {
        ((total + scale - 1) / scale) as usize
    }
}

/// Exact output length of [`calculate_field`] for the given geometry.
pub fn output_len(grid: &GridDims, params: &FieldParams) -> usize {
    let rows = samples_per_span(grid.char_size.1, params.padding.1, params.scale);
    let cols = samples_per_span(grid.char_size.0, params.padding.0, params.scale);
    (grid.num_chars.1 as usize) * rows * (grid.num_chars.0 as usize) * cols
}

/// Compute the signed distance field for a packed glyph bitmap.
///
/// Consumes `grid.total_bytes()` bitmap bytes from `input`, one character
/// row at a time, and writes one quantized byte per output sample to
/// `output`: row-major over (stepped y, cell index, stepped x) within a
/// character row, rows concatenated. Per-line progress markers go to
/// `progress`; pass `io::sink()` to silence them.
///
/// Memory held is one row strip plus the offset table; nothing else
/// survives across character rows. Output is a pure function of the
/// input bytes and parameters.
///
/// A short `input` fails the strip read and propagates as an I/O error.
pub fn calculate_field<R, W, P>(
    input: &mut R,
    output: &mut W,
    progress: &mut P,
    grid: &GridDims,
    params: &FieldParams,
) -> Result<()>
where
    R: Read,
    W: Write,
    P: Write,
{
    validate::validate_grid(grid)?;
    validate::validate_field(params)?;

    let table = OffsetTable::build(params.clamp);

    let (w, h) = grid.char_size;
    let (num_x, num_y) = grid.num_chars;
    let (pad_x, pad_y) = params.padding;
    let scale = params.scale as usize;
    let line_width = grid.line_width();

    for j in 0..num_y {
        write!(progress, "Char line {}: ", j)?;

        let mut data = vec![0u8; grid.strip_bytes()];
        input.read_exact(&mut data)?;
        let strip = RowStrip {
            data,
            line_width,
            height: h,
        };

        for y in (-pad_y..h + pad_y).step_by(scale) {
            write!(progress, ".")?;
            progress.flush()?;

            for i in 0..num_x {
                let x_start = w * i;
                let x_range = x_start..x_start + w;

                for x in (x_start - pad_x..x_start + w + pad_x).step_by(scale) {
                    let d = signed_distance(&strip, &x_range, &table, x, y);
                    output.write_all(&[quantize(d, params.clamp)])?;
                }
            }
        }

        writeln!(progress)?;
    }

    Ok(())
}

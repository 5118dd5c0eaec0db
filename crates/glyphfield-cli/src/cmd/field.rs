use clap::Args;
use std::io::{BufReader, BufWriter, Write};

use glyphfield_core::checksum::HashingWriter;
use glyphfield_core::sdf::field::{calculate_field, output_len};
use glyphfield_core::{FieldParams, GridDims};

#[derive(Args)]
pub struct FieldArgs {
    /// Cell width in samples
    pub char_size_x: i32,

    /// Cell height in samples
    pub char_size_y: i32,

    /// Cells per grid row
    pub num_chars_x: i32,

    /// Grid rows
    pub num_chars_y: i32,

    /// Distance clamp; also the nearest-transition search radius
    pub clamp: i32,

    /// Sampling stride over source samples
    pub scale: i32,

    /// Extra sampled margin past each cell, x
    pub padding_x: i32,

    /// Extra sampled margin past each cell, y
    pub padding_y: i32,

    /// Suppress per-line progress markers on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: FieldArgs) -> anyhow::Result<()> {
    let grid = GridDims {
        char_size: (args.char_size_x, args.char_size_y),
        num_chars: (args.num_chars_x, args.num_chars_y),
    };
    let params = FieldParams {
        clamp: args.clamp,
        scale: args.scale,
        padding: (args.padding_x, args.padding_y),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = BufReader::new(stdin.lock());
    let mut output = HashingWriter::new(BufWriter::new(stdout.lock()));

    let mut progress: Box<dyn Write> = if args.quiet {
        Box::new(std::io::sink())
    } else {
        Box::new(std::io::stderr())
    };

    calculate_field(&mut input, &mut output, &mut progress, &grid, &params)?;
    output.flush()?;

    eprintln!(
        "field ok: cells={}x{} cell_size={}x{} in_bytes={} out_bytes={} expected_out={} clamp={} scale={} padding={}x{} fingerprint={}",
        grid.num_chars.0,
        grid.num_chars.1,
        grid.char_size.0,
        grid.char_size.1,
        grid.total_bytes(),
        output.bytes_written(),
        output_len(&grid, &params),
        params.clamp,
        params.scale,
        params.padding.0,
        params.padding.1,
        output.fingerprint_hex16()
    );

    Ok(())
}

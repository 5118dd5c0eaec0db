use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::BufReader;

use glyphfield_core::atlas::cell::extract_cell;
use glyphfield_core::{validate, GridDims};

#[derive(Args)]
pub struct ExtractArgs {
    /// Input bitmap path
    #[arg(long)]
    pub r#in: String,

    /// Output cell path
    #[arg(long)]
    pub out: String,

    /// Cell width in samples
    #[arg(long)]
    pub char_size_x: i32,

    /// Cell height in samples
    #[arg(long)]
    pub char_size_y: i32,

    /// Cells per grid row
    #[arg(long)]
    pub num_chars_x: i32,

    /// Grid rows
    #[arg(long)]
    pub num_chars_y: i32,

    /// Cell column index
    #[arg(long)]
    pub cell_x: i32,

    /// Cell row index
    #[arg(long)]
    pub cell_y: i32,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let grid = GridDims {
        char_size: (args.char_size_x, args.char_size_y),
        num_chars: (args.num_chars_x, args.num_chars_y),
    };

    // The extractor seeks blindly; reject bad geometry and indices here.
    validate::validate_grid(&grid)?;
    validate::validate_cell_index(&grid, args.cell_x, args.cell_y)?;

    let actual = std::fs::metadata(&args.r#in)
        .with_context(|| format!("stat {}", args.r#in))?
        .len();
    if actual != grid.total_bytes() {
        anyhow::bail!(
            "bitmap size mismatch: {} holds {} bytes, grid needs {}",
            args.r#in,
            actual,
            grid.total_bytes()
        );
    }

    let file = File::open(&args.r#in).with_context(|| format!("open {}", args.r#in))?;
    let mut input = BufReader::new(file);

    let mut cell: Vec<u8> =
        Vec::with_capacity((grid.char_size.0 as usize) * (grid.char_size.1 as usize));
    extract_cell(&mut input, &mut cell, &grid, args.cell_x, args.cell_y)?;

    std::fs::write(&args.out, &cell).with_context(|| format!("write cell: {}", args.out))?;

    eprintln!(
        "extract ok: cell=({}, {}) size={}x{} out={} ({} bytes)",
        args.cell_x,
        args.cell_y,
        grid.char_size.0,
        grid.char_size.1,
        args.out,
        cell.len()
    );

    Ok(())
}

use clap::Args;

use glyphfield_core::{validate, GridDims};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input bitmap file to analyze as raw bytes
    #[arg(long)]
    pub r#in: String,

    /// Show the top N most frequent bytes
    #[arg(long, default_value_t = 8)]
    pub top: usize,

    /// Expected cell width; give all four geometry flags to check sizes
    #[arg(long)]
    pub char_size_x: Option<i32>,

    /// Expected cell height
    #[arg(long)]
    pub char_size_y: Option<i32>,

    /// Expected cells per grid row
    #[arg(long)]
    pub num_chars_x: Option<i32>,

    /// Expected grid rows
    #[arg(long)]
    pub num_chars_y: Option<i32>,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in)?;
    let n = bytes.len() as u64;

    let mut h = [0u64; 256];
    for &b in &bytes {
        h[b as usize] += 1;
    }

    let background = h[0];
    let foreground = n - background;
    let non_binary: u64 = h[2..].iter().sum();
    let distinct = h.iter().filter(|&&c| c > 0).count();
    let coverage = if n == 0 {
        0.0
    } else {
        (foreground as f64) * 100.0 / (n as f64)
    };

    eprintln!("--- analyze ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("bytes           = {}", n);
    eprintln!("distinct_bytes  = {}/256", distinct);
    eprintln!("background      = {}", background);
    eprintln!("foreground      = {}", foreground);
    eprintln!("non_binary      = {}", non_binary);
    eprintln!("ink_coverage    = {:.3}%", coverage);
    eprintln!("crc32           = 0x{:08x}", crc32(&bytes));

    if non_binary > 0 {
        eprintln!("WARNING: {} bytes are neither 0 nor 1", non_binary);
    }

    if let Some(grid) = geometry(&args)? {
        validate::validate_grid(&grid)?;
        let expected = grid.total_bytes();
        let verdict = if expected == n { "ok" } else { "MISMATCH" };
        eprintln!("--- geometry ---");
        eprintln!("expected_bytes  = {}", expected);
        eprintln!("size_check      = {}", verdict);
        if expected != n {
            anyhow::bail!(
                "bitmap size mismatch: {} bytes on disk, geometry needs {}",
                n,
                expected
            );
        }
    }

    let mut rows: Vec<(u8, u64)> = (0u8..=255u8)
        .map(|b| (b, h[b as usize]))
        .filter(|&(_b, c)| c > 0)
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let topn = args.top.min(rows.len());
    eprintln!("--- top {} bytes ---", topn);
    for (i, (b, c)) in rows.iter().take(topn).enumerate() {
        let pct = if n == 0 { 0.0 } else { (*c as f64) * 100.0 / (n as f64) };
        eprintln!("#{:>2} byte=0x{:02X} count={} ({:.3}%)", i + 1, b, c, pct);
    }

    Ok(())
}

/// All four geometry flags, or none of them.
fn geometry(args: &AnalyzeArgs) -> anyhow::Result<Option<GridDims>> {
    match (
        args.char_size_x,
        args.char_size_y,
        args.num_chars_x,
        args.num_chars_y,
    ) {
        (Some(csx), Some(csy), Some(ncx), Some(ncy)) => Ok(Some(GridDims {
            char_size: (csx, csy),
            num_chars: (ncx, ncy),
        })),
        (None, None, None, None) => Ok(None),
        _ => anyhow::bail!("geometry check needs all four of --char-size-x/y and --num-chars-x/y"),
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

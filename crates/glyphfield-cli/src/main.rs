// crates/glyphfield-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glyphfield-cli")]
#[command(about = "Glyph atlas SDF texture tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an SDF byte stream from a packed glyph bitmap (stdin -> stdout)
    Field(cmd::field::FieldArgs),

    /// Extract one character cell from a packed bitmap file
    Extract(cmd::extract::ExtractArgs),

    /// Analyze a raw bitmap file (binary histogram, coverage, crc)
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Field(args) => cmd::field::run(args),
        Commands::Extract(args) => cmd::extract::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    }
}

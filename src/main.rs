//! surface-area CLI: generate per-pixel surface-area rasters from DEMs.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use surface_area::io::{default_output_name, process_directory, process_file, GdalAdapter};

#[derive(Parser)]
#[command(name = "surface-area")]
#[command(
    author,
    version,
    about = "Generate a raster of pixel-by-pixel surface area from a digital elevation model"
)]
struct Cli {
    /// Path to a raster, or a directory of rasters with --directory
    in_path: PathBuf,

    /// Output path (single-file mode; defaults to <stem>_sa.<ext> beside the input)
    #[arg(short, long)]
    out_path: Option<PathBuf>,

    /// Process every raster in the input directory
    #[arg(short = 'd', long = "directory")]
    is_directory: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let adapter = GdalAdapter;

    if cli.is_directory {
        if cli.out_path.is_some() {
            bail!("--out-path cannot be combined with --directory; outputs go to <dir>/surface_area/");
        }
        let summary = process_directory(&adapter, &cli.in_path)
            .with_context(|| format!("batch run failed for {}", cli.in_path.display()))?;
        println!(
            "{} processed, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );
    } else {
        let out_path = match cli.out_path {
            Some(p) => p,
            None => {
                let name = default_output_name(&cli.in_path)?;
                cli.in_path.with_file_name(name)
            }
        };
        process_file(&adapter, &cli.in_path, &out_path)
            .with_context(|| format!("could not process {}", cli.in_path.display()))?;
        println!("Wrote {}", out_path.display());
    }

    Ok(())
}

// main.rs - Batch converter from maze SVG drawings to blocked-neighbor files

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use maze_core::{GridDims, GridScale, DEFAULT_BLOCK_SIZE, DEFAULT_OFFSET};
use maze_svg_converter::{run_batch, ConverterConfig, OutputFormat, DEFAULT_OUTPUT_DIR};

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the maze .svg files
    pub svg_dir: PathBuf,

    /// Width of the mazes in the directory, in blocks
    #[arg(allow_negative_numbers = true)]
    pub width: i32,

    /// Height of the mazes in the directory, in blocks
    #[arg(allow_negative_numbers = true)]
    pub height: i32,

    /// Where parsed files are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Pixel size of one maze block
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: i32,

    /// Pixel offset of the maze's top-left corner
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: i32,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value = "0")]
    pub jobs: usize,

    /// Fail drawings whose lines are not on block boundaries instead of rounding them
    #[arg(long)]
    pub strict_alignment: bool,
}

impl Args {
    fn into_config(self) -> Result<ConverterConfig> {
        let dims = GridDims::new(self.width, self.height).context("Invalid maze size")?;
        let scale = GridScale::new(self.block_size, self.offset)
            .context("Invalid block size")?
            .with_strict_alignment(self.strict_alignment);

        Ok(ConverterConfig::new(self.svg_dir, dims)
            .with_output_dir(self.output_dir)
            .with_scale(scale)
            .with_format(self.format)
            .with_jobs(self.jobs))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Starting with {args:?}");

    let config = args.into_config()?;
    let report = run_batch(&config).with_context(|| {
        format!("Failed to convert mazes in {}", config.source_dir.display())
    })?;

    if !report.failures.is_empty() {
        warn!(
            "{} of {} files could not be converted",
            report.failures.len(),
            report.found
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positional_arguments() {
        let args = Args::try_parse_from(["maze-svg-converter", "Mazes", "50", "47"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.source_dir, PathBuf::from("Mazes"));
        assert_eq!(config.dims, GridDims::new(50, 47).unwrap());
        assert_eq!(config.output_dir, PathBuf::from("Parsed"));
        assert_eq!(config.scale, GridScale::default());
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "maze-svg-converter",
            "in",
            "4",
            "3",
            "--format",
            "json",
            "--block-size",
            "10",
            "--offset",
            "0",
            "--strict-alignment",
            "-j",
            "3",
            "-o",
            "out",
        ])
        .unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.scale.block_size(), 10);
        assert!(config.scale.strict_alignment());
        assert_eq!(config.jobs, 3);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Args::try_parse_from(["maze-svg-converter", "Mazes", "fifty", "47"]).is_err());
        assert!(Args::try_parse_from(["maze-svg-converter", "Mazes", "50"]).is_err());

        let args = Args::try_parse_from(["maze-svg-converter", "Mazes", "0", "47"]).unwrap();
        assert!(args.into_config().is_err());

        let args =
            Args::try_parse_from(["maze-svg-converter", "Mazes", "5", "5", "--block-size", "0"])
                .unwrap();
        assert!(args.into_config().is_err());
    }
}

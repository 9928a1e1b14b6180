// batch.rs - Converts every maze drawing in a directory, one output file per drawing

use std::fs;
use std::path::{Path, PathBuf};

use maze_core::MazeInfo;
use rayon::prelude::*;

use crate::config::ConverterConfig;
use crate::error_handling::{ConvertError, Result};
use crate::svg_reader::read_line_segments;

const SVG_EXTENSION: &str = "svg";

/// Outcome of one batch run. A failed file never stops the others.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub found: usize,
    /// Output files written, in input order
    pub converted: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.converted.len()
    }
}

/// `.svg` files (any case) directly inside `dir`, sorted by path
pub fn discover_mazes(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::SourceDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut mazes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SVG_EXTENSION));
        if is_svg && path.is_file() {
            mazes.push(path);
        }
    }
    mazes.sort();
    Ok(mazes)
}

/// Where the parsed form of `source` is written
pub fn output_path(source: &Path, config: &ConverterConfig) -> PathBuf {
    // push rather than with_extension, so "maze.v2" keeps its inner dot
    let mut name = source
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(config.format.extension());
    config.output_dir.join(name)
}

/// Parse one drawing without writing anything
pub fn load_maze_file(path: &Path, config: &ConverterConfig) -> Result<MazeInfo> {
    let svg = fs::read_to_string(path)?;
    let segments = read_line_segments(&svg)?;
    Ok(MazeInfo::from_segments(segments, config.dims, &config.scale)?)
}

/// Parse one drawing and write its encoded form; returns the output path
pub fn convert_file(path: &Path, config: &ConverterConfig) -> Result<PathBuf> {
    let info = load_maze_file(path, config)?;
    let encoded = config.format.encode(&info)?;

    let destination = output_path(path, config);
    fs::write(&destination, encoded)?;
    log::debug!(
        "Converted {} -> {} (entrance {}, exit {})",
        path.display(),
        destination.display(),
        info.entrance(),
        info.exit()
    );
    Ok(destination)
}

pub fn run_batch(config: &ConverterConfig) -> Result<BatchReport> {
    let mazes = discover_mazes(&config.source_dir)?;
    if mazes.is_empty() {
        log::info!(
            "No .{SVG_EXTENSION} files found in {}",
            config.source_dir.display()
        );
        return Ok(BatchReport::default());
    }

    fs::create_dir_all(&config.output_dir)?;
    log::info!(
        "Found {} .{SVG_EXTENSION} files in {}, saving to {}",
        mazes.len(),
        config.source_dir.display(),
        config.output_dir.display()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    let results: Vec<(PathBuf, Result<PathBuf>)> = pool.install(|| {
        mazes
            .par_iter()
            .map(|path| (path.clone(), convert_file(path, config)))
            .collect()
    });

    let mut report = BatchReport {
        found: mazes.len(),
        ..BatchReport::default()
    };
    for (path, result) in results {
        match result {
            Ok(destination) => report.converted.push(destination),
            Err(e) => {
                let name = path.file_name().unwrap_or(path.as_os_str());
                log::error!("Error caught while converting {}: {}", name.to_string_lossy(), e);
                report.failures.push((path, e));
            }
        }
    }

    log::info!(
        "Done. {} / {} files successfully parsed.",
        report.success_count(),
        report.found
    );
    Ok(report)
}

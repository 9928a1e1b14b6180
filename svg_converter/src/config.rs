// config.rs - Settings for a batch conversion run

use std::path::PathBuf;

use maze_core::{GridDims, GridScale};

use crate::codec::OutputFormat;

/// Directory parsed mazes are written to unless told otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "Parsed";

#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory scanned for `.svg` drawings
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dims: GridDims,
    pub scale: GridScale,
    pub format: OutputFormat,
    /// Worker threads; 0 lets rayon decide
    pub jobs: usize,
}

impl ConverterConfig {
    pub fn new(source_dir: impl Into<PathBuf>, dims: GridDims) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dims,
            scale: GridScale::default(),
            format: OutputFormat::default(),
            jobs: 0,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_scale(mut self, scale: GridScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }
}

// lib.rs - Library exports for maze-svg-converter
// Reads maze drawings, runs them through maze_core and writes the parsed form

pub mod batch;
pub mod codec;
pub mod config;
pub mod error_handling;
pub mod svg_reader;

// Re-export commonly used types
pub use batch::{convert_file, discover_mazes, load_maze_file, run_batch, BatchReport};
pub use codec::{decode_csv, encode_csv, encode_json, OutputFormat, ParsedMaze};
pub use config::{ConverterConfig, DEFAULT_OUTPUT_DIR};
pub use error_handling::{ConvertError, Result};
pub use svg_reader::read_line_segments;

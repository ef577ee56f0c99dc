//! Book-folding pattern generation.
//!
//! Turns a decoded image into a pattern of vertical segments: binarize,
//! trim to the dark region, extract dark runs per sampled column, render
//! them into a pattern raster and rescale it for print export.

pub mod binarize;
pub mod config;
pub mod export;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod segments;
pub mod trim;
pub mod types;

// Re-exports for convenience
pub use binarize::{binarize, resize_source};
pub use config::{ExportConfig, ExportUnit, Parameters, PatternConfig, SourceConfig};
pub use export::export_scale;
pub use io::{DEFAULT_OUTPUT_FILE, load_image, save_png};
pub use pipeline::{GeneratedPattern, generate};
pub use render::{HelperLine, Pattern, PatternStats, render, render_empty};
pub use segments::extract;
pub use trim::trim;
pub use types::{BinaryBuffer, BoundingBox, Column, PixelBuffer, Segment};

/// Errors that can occur while generating or exporting a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Cannot scale an empty raster")]
    EmptyRaster,

    #[error("Invalid value for {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;

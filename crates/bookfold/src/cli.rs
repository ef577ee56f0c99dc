//! Command-line arguments, each overridable from a `BOOKFOLD_*` environment variable.

use std::path::PathBuf;

use clap::Parser;
use pattern_engine::{
    DEFAULT_OUTPUT_FILE, ExportConfig, ExportUnit, Parameters, PatternConfig, SourceConfig,
};

#[derive(Debug, Parser)]
#[command(name = "bookfold", about = "Turn an image into a book-folding pattern")]
pub struct Cli {
    /// Source image (PNG, JPEG, GIF, BMP, ...)
    pub input: PathBuf,

    /// Where to write the exported PNG
    #[arg(short, long, env = "BOOKFOLD_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Scale the source by this percentage before processing (10-500)
    #[arg(long, env = "BOOKFOLD_RESIZE", default_value_t = 100)]
    pub resize: u32,

    /// Channel mean above which a pixel is white (0-255)
    #[arg(long, env = "BOOKFOLD_THRESHOLD", default_value_t = 128)]
    pub threshold: u8,

    /// Treat fully transparent pixels as black instead of white
    #[arg(long, env = "BOOKFOLD_TRANSPARENT_IS_BLACK")]
    pub transparent_is_black: bool,

    /// Sample one column out of every N (1-100)
    #[arg(long, env = "BOOKFOLD_STRIPES_SPACING", default_value_t = 8)]
    pub stripes_spacing: u32,

    /// Segment stroke width in pixels (1-10)
    #[arg(long, env = "BOOKFOLD_LINE_THICKNESS", default_value_t = 2)]
    pub line_thickness: u32,

    /// Horizontal stretch of the pattern (1-10)
    #[arg(long, env = "BOOKFOLD_HORIZONTAL_SPACING", default_value_t = 1)]
    pub horizontal_spacing: u32,

    /// Margin around the pattern in pixels (0-100)
    #[arg(long, env = "BOOKFOLD_PADDING", default_value_t = 10)]
    pub padding: u32,

    /// Do not draw helper guide lines
    #[arg(long, env = "BOOKFOLD_NO_HELPER_LINES")]
    pub no_helper_lines: bool,

    /// Export height (1-10000); keeps the rendered size when omitted
    #[arg(long, env = "BOOKFOLD_EXPORT_HEIGHT")]
    pub export_height: Option<f64>,

    /// Unit of --export-height: px or cm
    #[arg(long, env = "BOOKFOLD_EXPORT_UNIT", default_value = "px")]
    pub export_unit: ExportUnit,

    /// Print resolution for centimeter exports (1-1000)
    #[arg(long, env = "BOOKFOLD_EXPORT_DPI", default_value_t = 300.0)]
    pub export_dpi: f64,
}

impl Cli {
    /// Collect the generation parameters.
    pub fn parameters(&self) -> Parameters {
        Parameters {
            source: SourceConfig {
                resize_percent: self.resize,
                threshold: self.threshold,
                transparent_is_white: !self.transparent_is_black,
            },
            pattern: PatternConfig {
                stripes_spacing: self.stripes_spacing,
                line_thickness: self.line_thickness,
                horizontal_spacing: self.horizontal_spacing,
                padding: self.padding,
                helper_lines: !self.no_helper_lines,
            },
            export: ExportConfig {
                target_height: self.export_height,
                unit: self.export_unit,
                dpi: self.export_dpi,
            },
        }
    }
}

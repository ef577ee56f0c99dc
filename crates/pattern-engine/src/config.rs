//! Pattern parameters: defaults, builders and range validation.

use serde::{Deserialize, Serialize};

use crate::{PatternError, Result};

/// How the source image is prepared before segment extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Scale applied to the decoded image, in percent.
    pub resize_percent: u32,

    /// Pixels whose channel mean is above this become white.
    pub threshold: u8,

    /// Fully transparent pixels count as white (light) instead of black.
    pub transparent_is_white: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            resize_percent: 100,
            threshold: 128,
            transparent_is_white: true,
        }
    }
}

/// Layout of the rendered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Sample one column out of every `stripes_spacing`.
    pub stripes_spacing: u32,

    /// Stroke width of each segment, in pixels.
    pub line_thickness: u32,

    /// Horizontal stretch applied to column positions.
    pub horizontal_spacing: u32,

    /// White margin around the pattern.
    pub padding: u32,

    /// Draw a guide line per sampled column.
    pub helper_lines: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            stripes_spacing: 8,
            line_thickness: 2,
            horizontal_spacing: 1,
            padding: 10,
            helper_lines: true,
        }
    }
}

impl PatternConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set column sampling stride.
    pub fn with_stripes_spacing(mut self, val: u32) -> Self {
        self.stripes_spacing = val;
        self
    }

    /// Builder: set stroke width.
    pub fn with_line_thickness(mut self, val: u32) -> Self {
        self.line_thickness = val;
        self
    }

    /// Builder: set horizontal stretch.
    pub fn with_horizontal_spacing(mut self, val: u32) -> Self {
        self.horizontal_spacing = val;
        self
    }

    /// Builder: set margin.
    pub fn with_padding(mut self, val: u32) -> Self {
        self.padding = val;
        self
    }

    /// Builder: toggle helper lines.
    pub fn with_helper_lines(mut self, val: bool) -> Self {
        self.helper_lines = val;
        self
    }
}

/// Unit of [`ExportConfig::target_height`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportUnit {
    #[default]
    #[serde(alias = "px")]
    Pixel,
    #[serde(alias = "cm")]
    Centimeter,
}

impl std::str::FromStr for ExportUnit {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" | "pixel" => Ok(Self::Pixel),
            "cm" | "centimeter" => Ok(Self::Centimeter),
            other => Err(PatternError::Validation {
                field: "export_unit",
                message: format!("must be 'px' or 'cm', got '{other}'"),
            }),
        }
    }
}

/// Physical size of the exported raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Height of the export, or `None` to keep the rendered size.
    pub target_height: Option<f64>,
    pub unit: ExportUnit,
    /// Resolution used to convert centimeters to pixels.
    pub dpi: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            target_height: None,
            unit: ExportUnit::Pixel,
            dpi: 300.0,
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: export at `height` pixels.
    pub fn with_height_px(mut self, height: f64) -> Self {
        self.target_height = Some(height);
        self.unit = ExportUnit::Pixel;
        self
    }

    /// Builder: export at `height` centimeters printed at `dpi`.
    pub fn with_height_cm(mut self, height: f64, dpi: f64) -> Self {
        self.target_height = Some(height);
        self.unit = ExportUnit::Centimeter;
        self.dpi = dpi;
        self
    }
}

/// All parameters of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub source: SourceConfig,
    pub pattern: PatternConfig,
    pub export: ExportConfig,
}

impl Parameters {
    /// Check every field against its accepted range.
    ///
    /// Stops at the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_range("resize", self.source.resize_percent, 10, 500)?;
        validate_range("stripes_spacing", self.pattern.stripes_spacing, 1, 100)?;
        validate_range("line_thickness", self.pattern.line_thickness, 1, 10)?;
        validate_range("horizontal_spacing", self.pattern.horizontal_spacing, 1, 10)?;
        validate_range("padding", self.pattern.padding, 0, 100)?;
        if let Some(height) = self.export.target_height {
            validate_float_range("export_height", height, 1.0, 10_000.0)?;
        }
        validate_float_range("export_dpi", self.export.dpi, 1.0, 1000.0)?;
        Ok(())
    }
}

fn validate_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(PatternError::Validation {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

fn validate_float_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(PatternError::Validation {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

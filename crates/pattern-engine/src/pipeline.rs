//! End-to-end generation: source buffer to rendered pattern.

use image::RgbaImage;
use tracing::{debug, info};

use crate::Result;
use crate::binarize::{binarize, resize_source};
use crate::config::{ExportConfig, Parameters};
use crate::export::export_scale;
use crate::render::{Pattern, PatternStats, render, render_empty};
use crate::segments::extract;
use crate::trim::trim;
use crate::types::{BinaryBuffer, BoundingBox, PixelBuffer};

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedPattern {
    /// The black-and-white source, for preview.
    pub binary: BinaryBuffer,
    /// Dark region of `binary`, `None` when it has no dark pixel.
    pub bbox: Option<BoundingBox>,
    pub pattern: Pattern,
}

impl GeneratedPattern {
    pub fn stats(&self) -> PatternStats {
        self.pattern.stats
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pattern.image
    }

    /// Rescale the rendered pattern for saving.
    pub fn export(&self, config: &ExportConfig) -> Result<RgbaImage> {
        export_scale(self.pattern.image.clone(), config)
    }
}

/// Run resize, binarize, trim, extract and render on `source`.
///
/// An image without dark pixels yields an empty pattern (padding only,
/// zero lines and segments) instead of an error.
pub fn generate(source: PixelBuffer, params: &Parameters) -> Result<GeneratedPattern> {
    let source = resize_source(source, params.source.resize_percent)?;
    let binary = binarize(
        source,
        params.source.threshold,
        params.source.transparent_is_white,
    );

    let Some(bbox) = trim(&binary) else {
        info!("Source has no dark pixels, generating an empty pattern");
        return Ok(GeneratedPattern {
            binary,
            bbox: None,
            pattern: render_empty(&params.pattern),
        });
    };

    let columns = extract(&binary, &bbox, params.pattern.stripes_spacing)?;
    let pattern = render(&columns, &bbox, &params.pattern)?;
    debug!(
        line_count = pattern.stats.line_count,
        segments_count = pattern.stats.segments_count,
        "Pattern generated"
    );

    Ok(GeneratedPattern {
        binary,
        bbox: Some(bbox),
        pattern,
    })
}

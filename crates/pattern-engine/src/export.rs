//! Export scaling: rescale a rendered pattern to a physical print size.
//!
//! Heights are rounded to the nearest pixel (half away from zero). The width
//! follows from the rounded height so the output aspect ratio matches the
//! pixels actually produced.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::config::{ExportConfig, ExportUnit};
use crate::{PatternError, Result};

const CM_PER_INCH: f64 = 2.54;

/// Rescale `img` according to `config`.
///
/// Without a target height the image is returned unchanged. Otherwise the
/// result is a white raster of the target size with `img` resampled
/// (bilinear) over it.
pub fn export_scale(img: RgbaImage, config: &ExportConfig) -> Result<RgbaImage> {
    let Some(target) = config.target_height else {
        debug!("No export height set, keeping rendered size");
        return Ok(img);
    };

    let (orig_w, orig_h) = img.dimensions();
    if orig_w == 0 || orig_h == 0 {
        return Err(PatternError::EmptyRaster);
    }

    let new_height = target_height_px(target, config)?;
    let new_width = to_pixels(f64::from(orig_w) * f64::from(new_height) / f64::from(orig_h))?;

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        unit = ?config.unit,
        dpi = config.dpi,
        "Scaling pattern for export"
    );

    let mut canvas = RgbaImage::from_pixel(new_width, new_height, Rgba([255, 255, 255, 255]));
    if (new_width, new_height) == (orig_w, orig_h) {
        imageops::overlay(&mut canvas, &img, 0, 0);
    } else {
        let resized = imageops::resize(&img, new_width, new_height, FilterType::Triangle);
        imageops::overlay(&mut canvas, &resized, 0, 0);
    }
    Ok(canvas)
}

/// Target height in whole pixels.
pub fn target_height_px(target: f64, config: &ExportConfig) -> Result<u32> {
    if !target.is_finite() || target <= 0.0 {
        return Err(PatternError::InvalidConfiguration(format!(
            "export height must be positive, got {target}"
        )));
    }
    let pixels = match config.unit {
        ExportUnit::Pixel => target,
        ExportUnit::Centimeter => {
            if !config.dpi.is_finite() || config.dpi <= 0.0 {
                return Err(PatternError::InvalidConfiguration(format!(
                    "export dpi must be positive, got {}",
                    config.dpi
                )));
            }
            target / CM_PER_INCH * config.dpi
        }
    };
    to_pixels(pixels)
}

fn to_pixels(value: f64) -> Result<u32> {
    let rounded = value.round().max(1.0);
    if rounded > f64::from(u32::MAX) {
        return Err(PatternError::InvalidConfiguration(format!(
            "export size {value} is too large"
        )));
    }
    Ok(rounded as u32)
}

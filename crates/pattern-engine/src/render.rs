//! Pattern rendering: lay sampled columns and their segments out on a raster.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::config::PatternConfig;
use crate::types::{BoundingBox, Column};
use crate::{PatternError, Result};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const ACCENT: Rgba<u8> = Rgba([255, 0, 0, 255]);
const NEUTRAL: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Guide line drawn behind a sampled column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperLine {
    /// Every tenth column.
    Accent,
    /// Remaining even columns.
    Neutral,
    /// Odd columns: nothing visible.
    Hidden,
}

impl HelperLine {
    /// Style of the guide for the `index`-th rendered column.
    pub fn for_column(index: usize) -> Self {
        if index % 10 == 0 {
            Self::Accent
        } else if index % 2 == 0 {
            Self::Neutral
        } else {
            Self::Hidden
        }
    }

    pub fn color(self) -> Option<Rgba<u8>> {
        match self {
            Self::Accent => Some(ACCENT),
            Self::Neutral => Some(NEUTRAL),
            Self::Hidden => None,
        }
    }
}

/// Counts shown next to a rendered pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternStats {
    /// Sampled columns, including those without segments.
    pub line_count: usize,
    /// Segments drawn across all columns.
    pub segments_count: usize,
}

impl PatternStats {
    /// Pages needed when each line takes a sheet (two page sides).
    pub fn line_pages(&self) -> usize {
        self.line_count * 2
    }

    /// Pages needed when each segment takes a sheet (two page sides).
    pub fn segment_pages(&self) -> usize {
        self.segments_count * 2
    }
}

/// A rendered pattern and its statistics.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub image: RgbaImage,
    pub stats: PatternStats,
}

/// Render sampled columns into a white raster.
///
/// Column `x` lands at `(x - bbox.x) * horizontal_spacing + padding`. Segment
/// strokes cover rows `start - bbox.y + padding` through
/// `end - bbox.y + padding` inclusive.
pub fn render(columns: &[Column], bbox: &BoundingBox, config: &PatternConfig) -> Result<Pattern> {
    check_config(config)?;

    let width = dimension(
        u64::from(bbox.width) * u64::from(config.horizontal_spacing)
            + 2 * u64::from(config.padding),
    )?;
    let height = dimension(u64::from(bbox.height) + 2 * u64::from(config.padding))?;
    debug!(width, height, columns = columns.len(), "Rendering pattern");

    let mut img = RgbaImage::from_pixel(width, height, WHITE);
    let mut stats = PatternStats::default();

    for (i, column) in columns.iter().enumerate() {
        if column.x < bbox.x || column.x >= bbox.right() {
            return Err(PatternError::InvariantViolation(format!(
                "column {} outside bounding box {bbox:?}",
                column.x
            )));
        }
        let offset = i64::from(column.x - bbox.x);
        let render_x = offset * i64::from(config.horizontal_spacing) + i64::from(config.padding);

        if config.helper_lines {
            if let Some(color) = HelperLine::for_column(i).color() {
                draw_vertical(&mut img, render_x, 1, 0, height, color);
            }
        }

        let half = i64::from(config.line_thickness / 2);
        for seg in &column.segments {
            if seg.start > seg.end || seg.start < bbox.y || seg.end >= bbox.bottom() {
                return Err(PatternError::InvariantViolation(format!(
                    "segment {seg:?} in column {} outside bounding box {bbox:?}",
                    column.x
                )));
            }
            let top = seg.start - bbox.y + config.padding;
            // +1 so the stroke covers the inclusive end row
            let bottom = seg.end - bbox.y + config.padding + 1;
            draw_vertical(
                &mut img,
                render_x - half,
                config.line_thickness,
                top,
                bottom,
                BLACK,
            );
            stats.segments_count += 1;
        }

        stats.line_count += 1;
    }

    debug!(
        line_count = stats.line_count,
        segments_count = stats.segments_count,
        "Pattern rendered"
    );
    Ok(Pattern { image: img, stats })
}

/// The pattern of an image with no dark pixel: padding only, no columns.
pub fn render_empty(config: &PatternConfig) -> Pattern {
    let side = config.padding.saturating_mul(2);
    debug!(side, "Rendering empty pattern");
    Pattern {
        image: RgbaImage::from_pixel(side, side, WHITE),
        stats: PatternStats::default(),
    }
}

fn check_config(config: &PatternConfig) -> Result<()> {
    if config.line_thickness == 0 {
        return Err(PatternError::InvalidConfiguration(
            "line thickness must be at least 1".into(),
        ));
    }
    if config.horizontal_spacing == 0 {
        return Err(PatternError::InvalidConfiguration(
            "horizontal spacing must be at least 1".into(),
        ));
    }
    Ok(())
}

fn dimension(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        PatternError::InvalidConfiguration(format!("pattern dimension {value} is too large"))
    })
}

/// Fill columns `left..left + width`, rows `top..bottom`, clipped to the image.
fn draw_vertical(img: &mut RgbaImage, left: i64, width: u32, top: u32, bottom: u32, color: Rgba<u8>) {
    if bottom <= top || width == 0 {
        return;
    }
    let rows = bottom - top;
    let (Ok(left), Ok(top)) = (i32::try_from(left), i32::try_from(top)) else {
        return;
    };
    let rect = Rect::at(left, top).of_size(width, rows);
    draw_filled_rect_mut(img, rect, color);
}

//! Column-wise run-length extraction of dark segments.

use tracing::debug;

use crate::types::{BinaryBuffer, BoundingBox, Column, Segment};
use crate::{PatternError, Result};

/// Extract the dark runs of every sampled column inside `bbox`.
///
/// Columns start at `bbox.x` and advance by `stripes_spacing`. Each sampled
/// column is returned, even when it holds no segment, so the result length
/// is the pattern's line count.
pub fn extract(
    binary: &BinaryBuffer,
    bbox: &BoundingBox,
    stripes_spacing: u32,
) -> Result<Vec<Column>> {
    if stripes_spacing == 0 {
        return Err(PatternError::InvalidConfiguration(
            "stripes spacing must be at least 1".into(),
        ));
    }
    let (width, height) = binary.dimensions();
    if !bbox.fits_within(width, height) {
        return Err(PatternError::InvariantViolation(format!(
            "bounding box {bbox:?} does not fit a {width}x{height} buffer"
        )));
    }

    let columns: Vec<Column> = (bbox.x..bbox.right())
        .step_by(stripes_spacing as usize)
        .map(|x| Column {
            x,
            segments: column_runs(binary, x, bbox.y, bbox.bottom()),
        })
        .collect();

    debug!(
        columns = columns.len(),
        segments = columns.iter().map(|c| c.segments.len()).sum::<usize>(),
        stripes_spacing,
        "Extracted segments"
    );
    Ok(columns)
}

/// Maximal dark runs of column `x` over rows `top..bottom`.
fn column_runs(binary: &BinaryBuffer, x: u32, top: u32, bottom: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut open: Option<u32> = None;

    for y in top..bottom {
        match (binary.is_dark(x, y), open) {
            (true, None) => open = Some(y),
            (false, Some(start)) => {
                segments.push(Segment { start, end: y - 1 });
                open = None;
            }
            _ => {}
        }
    }
    // A run still open reaches the bottom edge
    if let Some(start) = open {
        segments.push(Segment {
            start,
            end: bottom - 1,
        });
    }

    segments
}

//! Bounding box of the dark region.

use tracing::debug;

use crate::types::{BinaryBuffer, BoundingBox};

/// Find the minimal box enclosing every dark pixel.
///
/// Returns `None` when the buffer has no dark pixel at all; callers must
/// treat that as an empty pattern rather than a box.
pub fn trim(binary: &BinaryBuffer) -> Option<BoundingBox> {
    let (width, height) = binary.dimensions();
    let (mut min_x, mut min_y) = (width, height);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, px) in binary.as_image().enumerate_pixels() {
        if px[0] == 0 {
            found = true;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if !found {
        debug!(width, height, "No dark pixels, nothing to trim to");
        return None;
    }

    let bbox = BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    };
    debug!(?bbox, "Trimmed to dark region");
    Some(bbox)
}

//! Loading source images and saving exported patterns.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::Result;
use crate::types::PixelBuffer;

/// File name offered for a saved pattern.
pub const DEFAULT_OUTPUT_FILE: &str = "book-folding-pattern.png";

/// Decode an image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?.into_rgba8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
    Ok(img)
}

/// Encode `img` as PNG at `path`.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Saved pattern");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternError;
    use image::Rgba;

    #[test]
    fn test_png_round_trip() {
        let mut img = RgbaImage::from_pixel(6, 4, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 3, Rgba([0, 0, 0, 255]));

        let path = std::env::temp_dir().join(format!("pattern-engine-io-{}.png", std::process::id()));
        save_png(&img, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_image(Path::new("/nonexistent/pattern-engine/source.png")).unwrap_err();
        assert!(matches!(err, PatternError::Image(_)));
    }
}

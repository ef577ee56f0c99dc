//! Source preparation: percentage resize and black-and-white conversion.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::types::{BinaryBuffer, PixelBuffer};
use crate::{PatternError, Result};

const BLACK: u8 = 0;
const WHITE: u8 = 255;

/// Convert an RGBA buffer to strict black and white.
///
/// Fully transparent pixels become white when `transparent_is_white` is set,
/// black otherwise. Every other pixel becomes white when the mean of its
/// color channels is strictly greater than `threshold`.
pub fn binarize(mut img: PixelBuffer, threshold: u8, transparent_is_white: bool) -> BinaryBuffer {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, transparent_is_white, "Binarizing source");

    // (r + g + b) / 3 > t  <=>  r + g + b > 3t, exact in integers
    let limit = u16::from(threshold) * 3;
    for px in img.pixels_mut() {
        let value = if px[3] == 0 {
            if transparent_is_white { WHITE } else { BLACK }
        } else {
            let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
            if sum > limit { WHITE } else { BLACK }
        };
        px[0] = value;
        px[1] = value;
        px[2] = value;
    }

    BinaryBuffer::new_unchecked(img)
}

/// Scale the source by `percent` before binarization.
///
/// Target dimensions are floored, so a 5×3 image at 50% becomes 2×1.
/// Returns the input unchanged at 100%.
pub fn resize_source(img: PixelBuffer, percent: u32) -> Result<PixelBuffer> {
    if percent == 0 {
        return Err(PatternError::InvalidConfiguration(
            "resize percentage must be at least 1".into(),
        ));
    }
    if percent == 100 {
        debug!("Resize at 100%, skipping");
        return Ok(img);
    }

    let (orig_w, orig_h) = img.dimensions();
    let new_width = scaled_floor(orig_w, percent);
    let new_height = scaled_floor(orig_h, percent);

    debug!(orig_w, orig_h, new_width, new_height, percent, "Resizing source image");

    if new_width == 0 || new_height == 0 {
        return Ok(RgbaImage::from_pixel(
            new_width,
            new_height,
            Rgba([WHITE, WHITE, WHITE, 0]),
        ));
    }

    Ok(imageops::resize(&img, new_width, new_height, FilterType::Triangle))
}

fn scaled_floor(len: u32, percent: u32) -> u32 {
    let scaled = u64::from(len) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gradient with varying alpha so every branch is exercised.
    fn create_gradient_image(width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let val = ((x + y) * 255 / (width + height - 2)) as u8;
                let alpha = if (x + y) % 5 == 0 { 0 } else { 255 };
                img.put_pixel(x, y, Rgba([val, val.wrapping_mul(3), 255 - val, alpha]));
            }
        }
        img
    }

    fn value(binary: &BinaryBuffer, x: u32, y: u32) -> u8 {
        binary.as_image().get_pixel(x, y)[0]
    }

    #[test]
    fn test_output_is_binary() {
        for threshold in [0u8, 1, 64, 128, 200, 254, 255] {
            for transparent_is_white in [true, false] {
                let result = binarize(create_gradient_image(9, 7), threshold, transparent_is_white);
                for (x, y, px) in result.as_image().enumerate_pixels() {
                    assert!(
                        (px[0] == 0 || px[0] == 255) && px[0] == px[1] && px[1] == px[2],
                        "Pixel ({x}, {y}) = {:?} is not black or white",
                        px.0
                    );
                }
            }
        }
    }

    #[test]
    fn test_preserves_dimensions() {
        let result = binarize(create_gradient_image(10, 5), 128, true);
        assert_eq!(result.dimensions(), (10, 5));
    }

    #[test]
    fn test_idempotent() {
        for transparent_is_white in [true, false] {
            let once = binarize(create_gradient_image(8, 8), 100, transparent_is_white);
            let twice = binarize(once.clone().into_image(), 100, transparent_is_white);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut img = RgbaImage::new(4, 1);
        img.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
        img.put_pixel(1, 0, Rgba([129, 128, 128, 255]));
        img.put_pixel(2, 0, Rgba([127, 128, 128, 255]));
        img.put_pixel(3, 0, Rgba([255, 255, 255, 255]));

        let result = binarize(img, 128, true);

        // Mean exactly at the threshold stays black
        assert_eq!(value(&result, 0, 0), 0);
        // 385 / 3 = 128.33 > 128
        assert_eq!(value(&result, 1, 0), 255);
        assert_eq!(value(&result, 2, 0), 0);
        assert_eq!(value(&result, 3, 0), 255);
    }

    #[test]
    fn test_mean_uses_real_division() {
        // 0 + 0 + 2 = 2, mean 0.67 > 0 -> white
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 2, 255]));
        assert_eq!(value(&binarize(img, 0, true), 0, 0), 255);

        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        assert_eq!(value(&binarize(img, 0, true), 0, 0), 0);
    }

    #[test]
    fn test_threshold_255_is_all_black() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let result = binarize(img, 255, true);
        assert!(result.as_image().pixels().all(|px| px[0] == 0));
    }

    #[test]
    fn test_transparent_policy() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let white = binarize(img.clone(), 128, true);
        let black = binarize(img, 128, false);
        assert!(white.as_image().pixels().all(|px| px[0] == 255));
        assert!(black.as_image().pixels().all(|px| px[0] == 0));
    }

    #[test]
    fn test_partially_transparent_uses_color() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([10, 10, 10, 1]));
        assert_eq!(value(&binarize(img, 128, true), 0, 0), 0);
    }

    #[test]
    fn test_resize_floors_dimensions() {
        let img = RgbaImage::new(5, 3);
        let result = resize_source(img, 50).unwrap();
        assert_eq!(result.dimensions(), (2, 1));
    }

    #[test]
    fn test_resize_upscale() {
        let img = RgbaImage::new(40, 30);
        let result = resize_source(img, 250).unwrap();
        assert_eq!(result.dimensions(), (100, 75));
    }

    #[test]
    fn test_resize_identity_at_100() {
        let img = create_gradient_image(6, 4);
        let result = resize_source(img.clone(), 100).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_resize_to_zero_is_empty() {
        let img = RgbaImage::new(5, 5);
        let result = resize_source(img, 10).unwrap();
        assert_eq!(result.dimensions(), (0, 0));
    }

    #[test]
    fn test_resize_zero_percent_rejected() {
        let err = resize_source(RgbaImage::new(4, 4), 0).unwrap_err();
        assert!(matches!(err, PatternError::InvalidConfiguration(_)));
    }
}

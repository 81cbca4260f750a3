use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::PipelineError;

/// Result of fitting an image to the width threshold.
#[derive(Debug)]
pub enum FitOutcome {
    /// Source width is already under the threshold; the caller reuses the
    /// original bytes untouched.
    Passthrough,
    /// Downsampled to the threshold width and re-encoded as JPEG.
    Resized(Vec<u8>),
}

/// Downsample an image to `max_width` if it is at least that wide,
/// preserving the aspect ratio.
///
/// Resampling is nearest-neighbor and the height rounds down. Sub-threshold
/// images are not re-encoded at all.
pub fn fit_to_width(raw: &[u8], max_width: u32) -> Result<FitOutcome, PipelineError> {
    let img = image::load_from_memory(raw).map_err(|e| PipelineError::Decode(e.to_string()))?;

    // Keep the original bytes if the image is already smaller
    if img.width() < max_width {
        return Ok(FitOutcome::Passthrough);
    }

    let scale = max_width as f64 / img.width() as f64;
    let new_height = (img.height() as f64 * scale) as u32;

    let resized = img.resize_exact(max_width, new_height, FilterType::Nearest);

    // JPEG cannot carry an alpha channel
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| PipelineError::Encode(e.to_string()))?;

    Ok(FitOutcome::Resized(buf.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_small_image_passes_through() {
        let png = png_bytes(100, 80);
        match fit_to_width(&png, 2000).unwrap() {
            FitOutcome::Passthrough => {}
            other => panic!("expected passthrough, got {other:?}"),
        }
    }

    #[test]
    fn test_wide_image_is_resized() {
        let png = png_bytes(400, 200);
        let FitOutcome::Resized(jpeg) = fit_to_width(&png, 200).unwrap() else {
            panic!("expected resize");
        };

        // JPEG magic number
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let out = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).unwrap();
        assert_eq!(out.width(), 200);
        assert_eq!(out.height(), 100);
    }

    #[test]
    fn test_width_at_threshold_is_resized() {
        let png = png_bytes(200, 100);
        assert!(matches!(
            fit_to_width(&png, 200).unwrap(),
            FitOutcome::Resized(_)
        ));
    }

    #[test]
    fn test_height_rounds_down() {
        // 150/301 * 100 = 49.83..., truncated to 49
        let png = png_bytes(301, 100);
        let FitOutcome::Resized(jpeg) = fit_to_width(&png, 150).unwrap() else {
            panic!("expected resize");
        };

        let out = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(out.width(), 150);
        assert_eq!(out.height(), 49);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            300,
            150,
            image::Rgba([10, 20, 30, 128]),
        ));
        let mut buf = Cursor::new(Vec::new());
        rgba.write_to(&mut buf, ImageFormat::Png).unwrap();

        let FitOutcome::Resized(jpeg) = fit_to_width(buf.get_ref(), 150).unwrap() else {
            panic!("expected resize");
        };
        let out = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(out.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        let err = fit_to_width(b"definitely not an image", 2000).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }
}

use super::{render_background, CANVAS_SIZE, QR_OFFSET, QR_SIZE};
use crate::error::ImagingError;
use common::model::endpoint::OverlayColor;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgba, RgbImage, RgbaImage};
use std::path::Path;

/// Builds the final card: backdrop, flat `overlay` tint blended over it, then the QR
/// code scaled to `QR_SIZE` and pasted in the middle.
///
/// The QR raster is opaque, so pasting it with its own alpha as mask overwrites the
/// covered square. The result is flattened back to RGB.
pub fn compose(
    qr: &GrayImage,
    overlay: OverlayColor,
    background_path: &Path,
) -> Result<RgbImage, ImagingError> {
    if qr.width() == 0 || qr.height() == 0 {
        return Err(ImagingError::Compose("QR raster is empty".to_string()));
    }

    let background = render_background(background_path);
    let mut canvas = DynamicImage::ImageRgb8(background).to_rgba8();

    let tint = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba(overlay.rgba()));
    imageops::overlay(&mut canvas, &tint, 0, 0);

    let qr = imageops::resize(qr, QR_SIZE, QR_SIZE, FilterType::Lanczos3);
    let qr = DynamicImage::ImageLuma8(qr).to_rgba8();
    imageops::overlay(&mut canvas, &qr, i64::from(QR_OFFSET), i64::from(QR_OFFSET));

    Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
}

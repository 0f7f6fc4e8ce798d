use super::CANVAS_SIZE;
use image::imageops::FilterType;
use image::{ImageResult, Rgb, RgbImage};
use log::{debug, error};
use std::path::Path;

/// Returns an opaque `CANVAS_SIZE` square backdrop.
///
/// The artwork at `path` is stretched to the canvas with Lanczos3. If it is missing or
/// cannot be decoded the failure is logged and a blue gradient is drawn instead, so this
/// never fails.
pub fn render_background(path: &Path) -> RgbImage {
    match load_background(path) {
        Ok(background) => {
            debug!("Loaded background image from {}", path.display());
            background
        }
        Err(e) => {
            error!(
                "Error loading background image {}: {}, using gradient",
                path.display(),
                e
            );
            gradient_background()
        }
    }
}

/// Whether the artwork at `path` can be loaded. Checked once at startup so a missing
/// asset is reported before the first card is rendered.
pub fn background_is_usable(path: &Path) -> bool {
    load_background(path).is_ok()
}

fn load_background(path: &Path) -> ImageResult<RgbImage> {
    let image = image::open(path)?;
    Ok(image
        .resize_exact(CANVAS_SIZE, CANVAS_SIZE, FilterType::Lanczos3)
        .to_rgb8())
}

/// Vertical sky-blue gradient: the red channel climbs from 135 to 184 top to bottom.
pub fn gradient_background() -> RgbImage {
    RgbImage::from_fn(CANVAS_SIZE, CANVAS_SIZE, |_, y| {
        Rgb([(135 + y * 50 / CANVAS_SIZE) as u8, 206, 235])
    })
}

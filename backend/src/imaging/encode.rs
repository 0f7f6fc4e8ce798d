use crate::error::ImagingError;
use image::RgbImage;
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};

/// Serializes an RGB raster to 8-bit RGB PNG bytes, entirely in memory.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ImagingError> {
    let (w, h) = image.dimensions();
    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut encoder = PngEncoder::new(&mut bytes, w, h);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }
    Ok(bytes)
}

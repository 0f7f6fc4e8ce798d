use crate::error::ImagingError;
use image::{GrayImage, Luma};
use log::debug;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

const PREFERRED_VERSION: Version = Version::Normal(1);
const EC_LEVEL: EcLevel = EcLevel::L;
/// Pixels per module.
const BOX_SIZE: u32 = 10;

/// Encodes `url` as a black-on-white QR raster with a 4-module quiet zone.
///
/// Version 1 is tried first; data that does not fit grows the symbol to the smallest
/// version that holds it at level L. Data too long for any version is an error.
pub fn encode_qr(url: &str) -> Result<GrayImage, ImagingError> {
    let code = match QrCode::with_version(url.as_bytes(), PREFERRED_VERSION, EC_LEVEL) {
        Ok(code) => code,
        Err(QrError::DataTooLong) => {
            let code = QrCode::with_error_correction_level(url.as_bytes(), EC_LEVEL)?;
            debug!(
                "URL of {} bytes does not fit version 1, using {:?}",
                url.len(),
                code.version()
            );
            code
        }
        Err(e) => return Err(e.into()),
    };

    Ok(code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(BOX_SIZE, BOX_SIZE)
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .build())
}

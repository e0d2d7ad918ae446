use std::io::Cursor;

use image::ImageReader;

use crate::error::{Error, Result};

pub const NO_FILE_MESSAGE: &str = "No image file provided.";
pub const EMPTY_IMAGE_MESSAGE: &str = "No image data received.";
pub const INVALID_IMAGE_MESSAGE: &str = "Uploaded file is not a valid image.";

/// A decoded-and-verified upload, ready to forward to the AI service.
#[derive(Debug, Clone)]
pub struct ValidatedImage {
    pub bytes: bytes::Bytes,
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Checks that `data` is a non-empty, fully decodable raster image.
pub fn validate_image(data: bytes::Bytes) -> Result<ValidatedImage> {
    if data.is_empty() {
        return Err(Error::InvalidImage(EMPTY_IMAGE_MESSAGE.to_string()));
    }

    let reader = ImageReader::new(Cursor::new(data.as_ref()))
        .with_guessed_format()
        .map_err(|_| Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string()))?;
    let format = reader
        .format()
        .ok_or_else(|| Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string()))?;
    let decoded = reader.decode().map_err(|e| {
        tracing::debug!(error = %e, "Image decoding failed");
        Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string())
    })?;

    Ok(ValidatedImage {
        bytes: data,
        mime_type: format.to_mime_type(),
        width: decoded.width(),
        height: decoded.height(),
    })
}

#[cfg(test)]
pub(crate) fn sample_png() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 30, 30]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

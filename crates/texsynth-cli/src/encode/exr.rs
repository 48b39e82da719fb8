//! OpenEXR writer for extended-range images.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba32FImage};
use texsynth_backend_texture::TextureBuffer;

use super::{hash_bytes, EncodeError};

/// Write slice 0 of a buffer as 32-bit float RGBA, top row first.
///
/// Values are stored unclamped.
pub fn write_rgba_f32_to_vec_with_hash(
    buffer: &TextureBuffer,
) -> Result<(Vec<u8>, String), EncodeError> {
    let image = Rgba32FImage::from_raw(buffer.width, buffer.height, buffer.to_rgba_f32())
        .ok_or_else(|| {
            EncodeError::InvalidDimensions(format!(
                "{}x{} does not match {} samples",
                buffer.width,
                buffer.height,
                buffer.len()
            ))
        })?;

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba32F(image).write_to(&mut cursor, ImageFormat::OpenExr)?;
    let data = cursor.into_inner();
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use texsynth_backend_texture::Color;

    #[test]
    fn test_exr_keeps_extended_range() {
        let mut buffer = TextureBuffer::new(2, 2, Color::gray(0.5));
        buffer.set(0, 1, Color::rgba(6.0, -0.5, 0.25, 1.0));

        let (data, _) = write_rgba_f32_to_vec_with_hash(&buffer).unwrap();
        let decoded = image::load_from_memory_with_format(&data, ImageFormat::OpenExr)
            .unwrap()
            .into_rgba32f();

        // Row y = 1 is the top row of the file.
        assert_eq!(decoded.get_pixel(0, 0).0, [6.0, -0.5, 0.25, 1.0]);
        assert_eq!(decoded.get_pixel(1, 1).0, [0.5, 0.5, 0.5, 1.0]);
    }
}

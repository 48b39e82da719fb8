//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same buffer always encodes to the
//! same bytes.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use texsynth_backend_texture::TextureBuffer;

use super::{hash_bytes, EncodeError};

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write slice 0 of a buffer as 8-bit RGBA, top row first.
///
/// Values outside [0, 1] are clamped.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &TextureBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), EncodeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            buffer.width, buffer.height
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // No timestamps or other variable chunks are written.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;

    Ok(())
}

/// Write to a `Vec<u8>` and return the BLAKE3 hash of the file bytes.
pub fn write_rgba_to_vec_with_hash(
    buffer: &TextureBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), EncodeError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

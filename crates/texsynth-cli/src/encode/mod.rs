//! Encoders for generated buffers.
//!
//! The format follows from the buffer and the requested dynamic range:
//! standard-range images become 8-bit PNG, extended-range images become
//! 32-bit float OpenEXR, and volumes become a raw float volume file.

pub mod exr;
pub mod png;
pub mod volume;

use std::fs;
use std::path::Path;

use thiserror::Error;

use texsynth_backend_texture::TextureBuffer;
use texsynth_spec::DynamicRange;

/// Errors from encoding or writing output files.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] ::png::EncodingError),

    #[error("EXR encoding error: {0}")]
    Exr(#[from] image::ImageError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 8-bit RGBA PNG.
    Png,
    /// 32-bit float RGBA OpenEXR.
    Exr,
    /// Raw little-endian float volume (`TSV1`).
    Volume,
}

impl OutputFormat {
    /// Pick the format for a buffer.
    ///
    /// Volumes are always written as volume files, even with a single slice.
    pub fn select(buffer: &TextureBuffer, dynamic_range: DynamicRange) -> Self {
        if buffer.is_volume() {
            OutputFormat::Volume
        } else {
            match dynamic_range {
                DynamicRange::Ldr => OutputFormat::Png,
                DynamicRange::Hdr => OutputFormat::Exr,
            }
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Exr => "exr",
            OutputFormat::Volume => "tsv",
        }
    }
}

/// An encoded file held in memory.
#[derive(Debug, Clone)]
pub struct EncodedTexture {
    pub format: OutputFormat,
    pub data: Vec<u8>,
    /// BLAKE3 hash of `data`.
    pub hash: String,
}

pub(crate) fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode a buffer in the format implied by `dynamic_range`.
pub fn encode(
    buffer: &TextureBuffer,
    dynamic_range: DynamicRange,
) -> Result<EncodedTexture, EncodeError> {
    let format = OutputFormat::select(buffer, dynamic_range);
    let (data, hash) = match format {
        OutputFormat::Png => png::write_rgba_to_vec_with_hash(buffer, &png::PngConfig::default())?,
        OutputFormat::Exr => exr::write_rgba_f32_to_vec_with_hash(buffer)?,
        OutputFormat::Volume => volume::write_volume_to_vec_with_hash(buffer)?,
    };
    log::debug!(
        "encoded {:?}: {} bytes, hash {}",
        format,
        data.len(),
        &hash[..16]
    );
    Ok(EncodedTexture { format, data, hash })
}

/// Write an encoded texture, creating parent directories.
pub fn write_file(encoded: &EncodedTexture, path: &Path) -> Result<(), EncodeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &encoded.data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use texsynth_backend_texture::Color;

    #[test]
    fn test_format_selection() {
        let image = TextureBuffer::new(4, 4, Color::black());
        let volume = TextureBuffer::new_volume(4, 4, 2, Color::black());

        assert_eq!(OutputFormat::select(&image, DynamicRange::Ldr), OutputFormat::Png);
        assert_eq!(OutputFormat::select(&image, DynamicRange::Hdr), OutputFormat::Exr);
        assert_eq!(OutputFormat::select(&volume, DynamicRange::Ldr), OutputFormat::Volume);
        assert_eq!(OutputFormat::select(&volume, DynamicRange::Hdr), OutputFormat::Volume);
    }

    #[test]
    fn test_encode_hash_matches_bytes() {
        let buffer = TextureBuffer::new(3, 3, Color::gray(0.3));
        let encoded = encode(&buffer, DynamicRange::Ldr).unwrap();
        assert_eq!(encoded.format, OutputFormat::Png);
        assert_eq!(encoded.hash, hash_bytes(&encoded.data));
        assert_eq!(&encoded.data[1..4], b"PNG");
    }

    #[test]
    fn test_single_slice_noise_volume_encodes_as_volume() {
        use texsynth_backend_texture::generate_noise;
        use texsynth_spec::{NoiseKind, NoiseSpec};

        let spec = NoiseSpec::new_3d(NoiseKind::Perlin, 4, 4, 1).with_seed(1);
        let buffer = generate_noise(&spec).unwrap();
        for range in [DynamicRange::Ldr, DynamicRange::Hdr] {
            let encoded = encode(&buffer, range).unwrap();
            assert_eq!(encoded.format, OutputFormat::Volume);
            assert_eq!(&encoded.data[..4], b"TSV1");
            assert_eq!(encoded.data.len(), 16 + 4 * 4 * 4 * 4);
        }
    }
}

//! Raw float volume writer.
//!
//! Layout (little-endian):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `TSV1` |
//! | 4 | 4 | width (u32) |
//! | 8 | 4 | height (u32) |
//! | 12 | 4 | depth (u32) |
//! | 16 | 16 per voxel | RGBA as f32, `x` fastest, then `y`, then `z` |

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use texsynth_backend_texture::TextureBuffer;

use super::{hash_bytes, EncodeError};

/// File magic.
pub const VOLUME_MAGIC: &[u8; 4] = b"TSV1";

/// Header size in bytes.
pub const VOLUME_HEADER_SIZE: usize = 16;

/// Write the volume header and voxels in buffer index order.
pub fn write_volume<W: Write>(buffer: &TextureBuffer, w: &mut W) -> io::Result<()> {
    w.write_all(VOLUME_MAGIC)?;
    w.write_u32::<LittleEndian>(buffer.width)?;
    w.write_u32::<LittleEndian>(buffer.height)?;
    w.write_u32::<LittleEndian>(buffer.depth)?;
    for color in &buffer.data {
        for c in color.to_rgba_f32() {
            w.write_f32::<LittleEndian>(c)?;
        }
    }
    Ok(())
}

/// Write to a `Vec<u8>` and return the BLAKE3 hash of the bytes.
pub fn write_volume_to_vec_with_hash(
    buffer: &TextureBuffer,
) -> Result<(Vec<u8>, String), EncodeError> {
    let mut data = Vec::with_capacity(VOLUME_HEADER_SIZE + buffer.len() * 16);
    write_volume(buffer, &mut data)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::ReadBytesExt;
    use std::io::Read;
    use texsynth_backend_texture::Color;

    #[test]
    fn test_volume_layout() {
        let mut buffer = TextureBuffer::new_volume(2, 1, 2, Color::black());
        buffer.set3(1, 0, 1, Color::rgba(0.25, 2.0, -1.0, 0.5));

        let (data, _) = write_volume_to_vec_with_hash(&buffer).unwrap();
        assert_eq!(data.len(), VOLUME_HEADER_SIZE + 4 * 16);

        let mut r = data.as_slice();
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic).unwrap();
        assert_eq!(&magic, VOLUME_MAGIC);
        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 2);
        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 1);
        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 2);

        // Skip the first three voxels.
        let mut skipped = [0u8; 48];
        r.read_exact(&mut skipped).unwrap();
        let last: Vec<f32> = (0..4)
            .map(|_| r.read_f32::<LittleEndian>().unwrap())
            .collect();
        assert_eq!(last, vec![0.25, 2.0, -1.0, 0.5]);
    }
}

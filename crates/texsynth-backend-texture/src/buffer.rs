//! Texture buffer shared by both samplers.

use texsynth_spec::Dimensionality;

use crate::color::Color;

/// A 2D or 3D grid of RGBA samples.
///
/// Storage is row-major with `x` fastest, then `y`, then `z`. Row `y = 0` is
/// the bottom row of the image; encoders that write top-down use
/// [`TextureBuffer::rows_top_down`]. A 2D buffer has `depth == 1`; a volume
/// may also have a single slice and still reports [`Dimensionality::D3`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Depth in slices (1 for a 2D texture).
    pub depth: u32,
    /// Image or volume.
    pub dimensionality: Dimensionality,
    /// Pixel data (RGBA, `x + y * width + z * width * height`).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new 2D texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self::with_extent(width, height, 1, Dimensionality::D2, fill)
    }

    /// Create a new 3D texture buffer filled with a color.
    ///
    /// Callers are expected to have checked that the sample count fits in
    /// `usize`; validation rejects sizes that do not.
    pub fn new_volume(width: u32, height: u32, depth: u32, fill: Color) -> Self {
        Self::with_extent(width, height, depth, Dimensionality::D3, fill)
    }

    fn with_extent(
        width: u32,
        height: u32,
        depth: u32,
        dimensionality: Dimensionality,
        fill: Color,
    ) -> Self {
        let size = width as usize * height as usize * depth as usize;
        Self {
            width,
            height,
            depth,
            dimensionality,
            data: vec![fill; size],
        }
    }

    /// Whether this buffer is a volume, regardless of its slice count.
    pub fn is_volume(&self) -> bool {
        self.dimensionality == Dimensionality::D3
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        x as usize + y as usize * w + z as usize * w * h
    }

    /// Get a pixel at the given coordinates of a 2D buffer (slice 0).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.get3(x, y, 0)
    }

    /// Set a pixel at the given coordinates of a 2D buffer (slice 0).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.set3(x, y, 0, color);
    }

    /// Get a voxel.
    #[inline]
    pub fn get3(&self, x: u32, y: u32, z: u32) -> Color {
        self.data[self.index(x, y, z)]
    }

    /// Set a voxel.
    #[inline]
    pub fn set3(&mut self, x: u32, y: u32, z: u32, color: Color) {
        let idx = self.index(x, y, z);
        self.data[idx] = color;
    }

    /// Rows of slice 0 from the top of the image to the bottom.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Color]> + '_ {
        let row_len = self.width as usize;
        let plane = row_len * self.height as usize;
        self.data[..plane].chunks_exact(row_len.max(1)).rev()
    }

    /// Convert slice 0 to 8-bit RGBA bytes in top-down row order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for row in self.rows_top_down() {
            for color in row {
                bytes.extend_from_slice(&color.to_rgba8());
            }
        }
        bytes
    }

    /// Convert slice 0 to 32-bit float RGBA in top-down row order.
    pub fn to_rgba_f32(&self) -> Vec<f32> {
        let mut floats = Vec::with_capacity(self.data.len() * 4);
        for row in self.rows_top_down() {
            for color in row {
                floats.extend_from_slice(&color.to_rgba_f32());
            }
        }
        floats
    }

    /// BLAKE3 hash over the dimensions, the dimensionality and the exact
    /// sample bits.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        hasher.update(&self.depth.to_le_bytes());
        hasher.update(&[u8::from(self.is_volume())]);
        for color in &self.data {
            for c in color.to_array() {
                hasher.update(&c.to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

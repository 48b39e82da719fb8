//! Noise field recipe types.
//!
//! `texture.noise_v1` describes a multi-channel scalar field sampled from
//! coherent (Perlin, Simplex) or uncorrelated random noise, either as a 2D
//! image or a 3D volume.

use serde::{Deserialize, Serialize};

/// Highest supported channel count (RGBA).
pub const MAX_CHANNELS: u8 = 4;

/// Parameters for the `texture.noise_v1` recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseSpec {
    /// Noise function.
    #[serde(default)]
    pub noise: NoiseKind,
    /// `[width, height]` for an image or `[width, height, depth]` for a volume.
    pub size: NoiseSize,
    /// Number of generated channels (1 = R, 2 = RG, 3 = RGB, 4 = RGBA).
    #[serde(default = "default_channels")]
    pub channels: u8,
    /// Per-channel frequency scale.
    #[serde(default = "default_scale")]
    pub scale: [f64; 4],
    /// Per-channel coordinate offset, in pixels.
    #[serde(default)]
    pub offset: [f64; 4],
    /// Seamless tiling (2D only).
    #[serde(default)]
    pub wrap: bool,
    /// Seed for the random generator and gradient tables. Drawn at random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

pub(crate) fn default_channels() -> u8 {
    MAX_CHANNELS
}

pub(crate) fn default_scale() -> [f64; 4] {
    [5.0; 4]
}

impl NoiseSpec {
    /// Creates a 2D spec with default channels, scale and offset.
    pub fn new_2d(noise: NoiseKind, width: u32, height: u32) -> Self {
        Self::with_size(noise, NoiseSize::Planar([width, height]))
    }

    /// Creates a 3D spec with default channels, scale and offset.
    pub fn new_3d(noise: NoiseKind, width: u32, height: u32, depth: u32) -> Self {
        Self::with_size(noise, NoiseSize::Volume([width, height, depth]))
    }

    fn with_size(noise: NoiseKind, size: NoiseSize) -> Self {
        Self {
            noise,
            size,
            channels: default_channels(),
            scale: default_scale(),
            offset: [0.0; 4],
            wrap: false,
            seed: None,
        }
    }

    /// Sets the channel count.
    pub fn with_channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the same scale on every channel.
    pub fn with_uniform_scale(mut self, scale: f64) -> Self {
        self.scale = [scale; 4];
        self
    }

    /// Sets the per-channel offsets.
    pub fn with_offset(mut self, offset: [f64; 4]) -> Self {
        self.offset = offset;
        self
    }

    /// Enables or disables seamless wrapping.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Image or volume.
    pub fn dimensionality(&self) -> Dimensionality {
        self.size.dimensionality()
    }
}

/// Noise function selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Independent uniform samples in [0, 1).
    Random,
    /// Classic gradient noise.
    #[default]
    Perlin,
    /// Simplex gradient noise.
    Simplex,
}

impl NoiseKind {
    /// All supported kinds.
    pub fn all() -> &'static [NoiseKind] {
        &[NoiseKind::Random, NoiseKind::Perlin, NoiseKind::Simplex]
    }

    /// Snake-case name as used in spec files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::Random => "random",
            NoiseKind::Perlin => "perlin",
            NoiseKind::Simplex => "simplex",
        }
    }
}

impl std::str::FromStr for NoiseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoiseKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown noise kind: {}", s))
    }
}

/// Output dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensionality {
    /// 2D image.
    D2,
    /// 3D volume.
    D3,
}

/// Field extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoiseSize {
    /// `[width, height]`.
    Planar([u32; 2]),
    /// `[width, height, depth]`.
    Volume([u32; 3]),
}

impl NoiseSize {
    /// Image or volume.
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            NoiseSize::Planar(_) => Dimensionality::D2,
            NoiseSize::Volume(_) => Dimensionality::D3,
        }
    }

    /// `(width, height, depth)`, with depth 1 for images.
    pub fn extent(&self) -> (u32, u32, u32) {
        match *self {
            NoiseSize::Planar([w, h]) => (w, h, 1),
            NoiseSize::Volume([w, h, d]) => (w, h, d),
        }
    }

    /// Total sample count, or `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        let (w, h, d) = self.extent();
        (w as usize)
            .checked_mul(h as usize)
            .and_then(|n| n.checked_mul(d as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_two_entries_is_planar() {
        let json = r#"{ "size": [64, 32] }"#;
        let spec: NoiseSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.size, NoiseSize::Planar([64, 32]));
        assert_eq!(spec.dimensionality(), Dimensionality::D2);
        assert_eq!(spec.size.extent(), (64, 32, 1));
    }

    #[test]
    fn test_size_three_entries_is_volume() {
        let json = r#"{ "noise": "simplex", "size": [8, 4, 2] }"#;
        let spec: NoiseSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.size, NoiseSize::Volume([8, 4, 2]));
        assert_eq!(spec.dimensionality(), Dimensionality::D3);
        assert_eq!(spec.size.sample_count(), Some(64));
    }

    #[test]
    fn test_defaults() {
        let spec: NoiseSpec = serde_json::from_str(r#"{ "size": [4, 4] }"#).unwrap();

        assert_eq!(spec.noise, NoiseKind::Perlin);
        assert_eq!(spec.channels, 4);
        assert_eq!(spec.scale, [5.0; 4]);
        assert_eq!(spec.offset, [0.0; 4]);
        assert!(!spec.wrap);
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn test_unknown_noise_kind_rejected() {
        let json = r#"{ "noise": "worley", "size": [4, 4] }"#;
        assert!(serde_json::from_str::<NoiseSpec>(json).is_err());
        assert!("worley".parse::<NoiseKind>().is_err());
        assert_eq!("simplex".parse::<NoiseKind>(), Ok(NoiseKind::Simplex));
    }

    #[test]
    fn test_seed_omitted_when_absent() {
        let spec = NoiseSpec::new_2d(NoiseKind::Random, 2, 2);
        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get("seed").is_none());

        let value = serde_json::to_value(spec.with_seed(7)).unwrap();
        assert_eq!(value["seed"], 7);
    }

    #[test]
    fn test_sample_count_overflow() {
        let size = NoiseSize::Volume([u32::MAX, u32::MAX, u32::MAX]);
        assert_eq!(size.sample_count(), None);
    }
}

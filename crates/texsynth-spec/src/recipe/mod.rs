//! Recipe types for the texture generators.
//!
//! Each recipe kind corresponds to one generation path in the backend.
//! Gradient and noise paths are mutually exclusive.

pub mod gradient;
pub mod noise;

pub use gradient::{Anchor, ColorSpace, GradientAxis, GradientSpec, PositionMode};
pub use noise::{Dimensionality, NoiseKind, NoiseSize, NoiseSpec, MAX_CHANNELS};

use serde::{Deserialize, Serialize};

/// A generation recipe: kind tag plus parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Recipe {
    /// `texture.gradient_v1` - Anchor gradient ramp.
    #[serde(rename = "texture.gradient_v1")]
    Gradient(GradientSpec),
    /// `texture.noise_v1` - Noise image or volume.
    #[serde(rename = "texture.noise_v1")]
    Noise(NoiseSpec),
}

impl Recipe {
    /// Returns the recipe kind as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            Recipe::Gradient(_) => "texture.gradient_v1",
            Recipe::Noise(_) => "texture.noise_v1",
        }
    }
}

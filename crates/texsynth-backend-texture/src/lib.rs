//! texsynth Texture Synthesis Backend
//!
//! This crate turns a validated gradient or noise recipe into a fully
//! populated [`TextureBuffer`]. It performs no I/O; encoding the buffer to an
//! image or volume file is the caller's job.
//!
//! # Features
//!
//! - **Color spaces**: RGB, HSV and HCL conversion with hue-aware interpolation
//! - **Gradients**: unsorted anchors, percent or pixel positions, horizontal or
//!   vertical axis
//! - **Noise**: Perlin, Simplex and uncorrelated random fields in 2D or 3D,
//!   with seamless tiling for 2D
//!
//! # Example
//!
//! ```
//! use texsynth_backend_texture::generate::generate_gradient;
//! use texsynth_spec::GradientSpec;
//!
//! let spec = GradientSpec::new(4, 1)
//!     .with_anchor(0.0, [1.0, 0.0, 0.0, 1.0])
//!     .with_anchor(1.0, [0.0, 0.0, 1.0, 1.0]);
//!
//! let buffer = generate_gradient(&spec).unwrap();
//! assert_eq!(buffer.get(3, 0).b, 1.0);
//! ```
//!
//! # Determinism
//!
//! - Same spec + same seed = bit-identical buffer
//! - PCG32 RNG is used for all random operations
//! - Generation is single-threaded and visits samples in index order

pub mod buffer;
pub mod color;
pub mod color_space;
pub mod generate;
pub mod noise;
pub mod rng;

pub use buffer::TextureBuffer;
pub use color::Color;
pub use generate::{generate, generate_gradient, generate_noise, GenerateError};

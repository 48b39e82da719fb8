//! texsynth Spec Library
//!
//! This crate provides types, validation, and hashing for texsynth specs.
//! Specs are JSON documents that describe a single procedural texture: either
//! an anchor gradient ramp or a noise image/volume.
//!
//! # Example
//!
//! ```
//! use texsynth_spec::{GradientSpec, Recipe, TextureSpec};
//! use texsynth_spec::validation::validate_spec;
//! use texsynth_spec::hash::canonical_spec_hash;
//!
//! let gradient = GradientSpec::new(256, 4)
//!     .with_anchor(0.0, [1.0, 0.0, 0.0, 1.0])
//!     .with_anchor(1.0, [0.0, 0.0, 1.0, 1.0]);
//! let spec = TextureSpec::new("red-to-blue", Recipe::Gradient(gradient));
//!
//! assert!(validate_spec(&spec).is_ok());
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`recipe`]: Gradient and noise parameter types
//! - [`spec`]: Top-level spec document
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing

pub mod error;
pub mod hash;
pub mod recipe;
pub mod spec;
pub mod validation;

pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::canonical_spec_hash;
pub use recipe::{
    Anchor, ColorSpace, Dimensionality, GradientAxis, GradientSpec, NoiseKind, NoiseSize,
    NoiseSpec, PositionMode, Recipe, MAX_CHANNELS,
};
pub use spec::{DynamicRange, TextureSpec, SPEC_VERSION};
pub use validation::{
    is_valid_asset_id, parse_and_validate, validate_gradient, validate_noise, validate_spec,
};

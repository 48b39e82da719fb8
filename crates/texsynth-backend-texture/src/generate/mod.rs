//! Main entry point for texture generation.
//!
//! Two mutually exclusive paths fill a [`TextureBuffer`]: the anchor gradient
//! sampler and the noise field sampler. Both are pure and synchronous; every
//! failure is an [`GenerateError::InvalidSpec`] raised before any sampling.

mod gradient;
mod noise;

use thiserror::Error;

use texsynth_spec::{Recipe, ValidationError, ValidationResult};

use crate::buffer::TextureBuffer;

pub use gradient::{generate_gradient, GradientRamp};
pub use noise::{generate_noise, wrap_embedding, NoiseSampler};

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The parameters violate one or more preconditions.
    #[error("invalid spec: {}", join_errors(.0))]
    InvalidSpec(Vec<ValidationError>),
}

impl GenerateError {
    /// The violated preconditions.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            GenerateError::InvalidSpec(errors) => errors,
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fails with every recorded error; warnings are logged and dropped.
pub(crate) fn check(result: ValidationResult) -> Result<(), GenerateError> {
    for warning in &result.warnings {
        log::debug!("{}", warning);
    }
    if result.is_ok() {
        Ok(())
    } else {
        Err(GenerateError::InvalidSpec(result.errors))
    }
}

/// Generate the texture described by a recipe.
pub fn generate(recipe: &Recipe) -> Result<TextureBuffer, GenerateError> {
    match recipe {
        Recipe::Gradient(spec) => generate_gradient(spec),
        Recipe::Noise(spec) => generate_noise(spec),
    }
}

//! Template command implementation.
//!
//! Prints a starter spec for one of the recipe kinds.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::process::ExitCode;

use texsynth_spec::{
    ColorSpace, GradientSpec, NoiseKind, NoiseSpec, Recipe, TextureSpec,
};

/// Recipe kinds that have a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// `texture.gradient_v1`
    Gradient,
    /// `texture.noise_v1`
    Noise,
}

/// Build the starter spec for a kind.
pub fn template_spec(kind: TemplateKind) -> TextureSpec {
    match kind {
        TemplateKind::Gradient => TextureSpec::new(
            "gradient-ramp",
            Recipe::Gradient(
                GradientSpec::new(256, 4)
                    .with_color_space(ColorSpace::Hsv)
                    .with_anchor(0.0, [1.0, 0.5, 0.0, 1.0])
                    .with_anchor(1.0, [0.2, 0.0, 0.6, 1.0]),
            ),
        ),
        TemplateKind::Noise => TextureSpec::new(
            "noise-texture",
            Recipe::Noise(NoiseSpec::new_2d(NoiseKind::Perlin, 512, 512).with_seed(42)),
        ),
    }
}

/// Run the template command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(kind: TemplateKind) -> Result<ExitCode> {
    let json = template_spec(kind)
        .to_json_pretty()
        .context("Failed to serialize template")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

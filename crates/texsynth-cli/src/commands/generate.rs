//! Generate command implementation
//!
//! Loads a spec, runs the matching sampler and writes the encoded file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use texsynth_backend_texture::generate;
use texsynth_backend_texture::rng::resolve_seed;
use texsynth_spec::{canonical_spec_hash, Recipe, ValidationError, ValidationWarning};

use super::reporting;
use super::validate::{validate_file, Validation};
use crate::encode::{self, OutputFormat};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub asset_id: String,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// `(width, height, depth)`.
    pub extent: (u32, u32, u32),
    /// Seed used by a noise recipe.
    pub seed: Option<u32>,
    /// Hash of the spec as generated, with the seed filled in.
    pub spec_hash: String,
    /// Hash of the written file.
    pub file_hash: String,
    pub warnings: Vec<ValidationWarning>,
}

/// Outcome of a generate run.
#[derive(Debug)]
pub enum Generation {
    Generated(GenerateSummary),
    Invalid(Vec<ValidationError>),
}

/// Generate the texture for a spec file and write it.
///
/// `output` defaults to `<asset_id>.<ext>` in the current directory. `seed`
/// overrides the spec's noise seed; a noise spec with neither gets a random
/// seed, reported in the summary.
pub fn generate_file(
    spec_path: &Path,
    output: Option<&Path>,
    seed: Option<u32>,
) -> Result<Generation> {
    let load = match validate_file(spec_path)? {
        Validation::Valid { load, .. } => load,
        Validation::Invalid(errors) => return Ok(Generation::Invalid(errors)),
    };
    let mut spec = load.spec;

    let used_seed = match &mut spec.recipe {
        Recipe::Noise(noise) => {
            let resolved = resolve_seed(seed.or(noise.seed));
            noise.seed = Some(resolved);
            Some(resolved)
        }
        Recipe::Gradient(_) => {
            if seed.is_some() {
                log::warn!("--seed has no effect on gradient recipes");
            }
            None
        }
    };
    let spec_hash = canonical_spec_hash(&spec).context("Failed to hash spec")?;

    let buffer = match generate(&spec.recipe) {
        Ok(buffer) => buffer,
        Err(e) => return Ok(Generation::Invalid(e.errors().to_vec())),
    };

    let encoded = encode::encode(&buffer, spec.dynamic_range)
        .with_context(|| format!("Failed to encode {}", spec.asset_id))?;
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.{}", spec.asset_id, encoded.format.extension())),
    };
    encode::write_file(&encoded, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::info!(
        "wrote {} ({} bytes)",
        output_path.display(),
        encoded.data.len()
    );

    Ok(Generation::Generated(GenerateSummary {
        asset_id: spec.asset_id,
        output_path,
        format: encoded.format,
        extent: (buffer.width, buffer.height, buffer.depth),
        seed: used_seed,
        spec_hash,
        file_hash: encoded.hash,
        warnings: load.warnings,
    }))
}

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON spec file
/// * `output` - Output file path (default: `<asset_id>.<ext>`)
/// * `seed` - Noise seed override
///
/// # Returns
/// Exit code: 0 on success, 1 if the spec is invalid
pub fn run(spec_path: &str, output: Option<&str>, seed: Option<u32>) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Generating:".cyan().bold(), spec_path);

    match generate_file(Path::new(spec_path), output.map(Path::new), seed)? {
        Generation::Generated(summary) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            reporting::print_warnings(&summary.warnings);

            let (w, h, d) = summary.extent;
            println!("{} {}", "Asset:".dimmed(), summary.asset_id);
            if d > 1 {
                println!("{} {}x{}x{}", "Size:".dimmed(), w, h, d);
            } else {
                println!("{} {}x{}", "Size:".dimmed(), w, h);
            }
            if let Some(seed) = summary.seed {
                println!("{} {}", "Seed:".dimmed(), seed);
            }
            println!("{} {}", "Spec hash:".dimmed(), &summary.spec_hash[..16]);
            println!(
                "{} {} ({})",
                "Output:".dimmed(),
                summary.output_path.display(),
                summary.format.extension()
            );
            println!("{} {}", "File hash:".dimmed(), &summary.file_hash[..16]);
            println!(
                "\n{} Generated in {}ms",
                "SUCCESS".green().bold(),
                duration_ms
            );
            Ok(ExitCode::SUCCESS)
        }
        Generation::Invalid(errors) => {
            reporting::print_errors(&errors);
            println!(
                "\n{} Spec has {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            Ok(ExitCode::from(1))
        }
    }
}

//! Validate command implementation
//!
//! Validates a spec file without generating anything.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use texsynth_spec::{canonical_spec_hash, SpecError, ValidationError, ValidationWarning};

use super::reporting::{self, JsonMessage};
use crate::input::{load_spec, InputError, LoadResult};

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    pub errors: Vec<JsonMessage>,
    pub warnings: Vec<JsonMessage>,
}

/// Outcome of validating one file.
#[derive(Debug)]
pub enum Validation {
    Valid {
        load: LoadResult,
        spec_hash: String,
    },
    Invalid(Vec<ValidationError>),
}

/// Load and validate a spec file.
///
/// Invalid specs are reported as [`Validation::Invalid`]; unreadable files and
/// malformed JSON are errors.
pub fn validate_file(spec_path: &Path) -> Result<Validation> {
    match load_spec(spec_path) {
        Ok(load) => {
            let spec_hash =
                canonical_spec_hash(&load.spec).context("Failed to hash spec")?;
            Ok(Validation::Valid { load, spec_hash })
        }
        Err(InputError::Spec(SpecError::ValidationFailed(errors))) => {
            Ok(Validation::Invalid(errors))
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to load spec file: {}", spec_path.display())),
    }
}

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON spec file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    match validate_file(Path::new(spec_path))? {
        Validation::Valid { load, spec_hash } => {
            println!(
                "{} {} ({})",
                "Asset:".dimmed(),
                load.spec.asset_id,
                load.spec.recipe.kind()
            );
            println!("{} {}", "Spec hash:".dimmed(), &spec_hash[..16]);
            reporting::print_warnings(&load.warnings);
            println!("\n{} Spec is valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Validation::Invalid(errors) => {
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

fn run_json(spec_path: &str) -> Result<ExitCode> {
    let output = match validate_file(Path::new(spec_path)) {
        Ok(Validation::Valid { load, spec_hash }) => ValidateOutput {
            success: true,
            asset_id: Some(load.spec.asset_id.clone()),
            recipe_kind: Some(load.spec.recipe.kind().to_string()),
            spec_hash: Some(spec_hash),
            errors: Vec::new(),
            warnings: to_json_warnings(&load.warnings),
        },
        Ok(Validation::Invalid(errors)) => ValidateOutput {
            success: false,
            asset_id: None,
            recipe_kind: None,
            spec_hash: None,
            errors: errors.iter().map(JsonMessage::from).collect(),
            warnings: Vec::new(),
        },
        Err(e) => ValidateOutput {
            success: false,
            asset_id: None,
            recipe_kind: None,
            spec_hash: None,
            errors: vec![JsonMessage {
                code: "INPUT".to_string(),
                message: format!("{:#}", e),
                path: None,
            }],
            warnings: Vec::new(),
        },
    };

    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize validation output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn to_json_warnings(warnings: &[ValidationWarning]) -> Vec<JsonMessage> {
    warnings.iter().map(JsonMessage::from).collect()
}

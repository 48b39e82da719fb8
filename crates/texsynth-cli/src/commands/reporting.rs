//! Console output shared by the commands.

use colored::Colorize;
use serde::Serialize;

use texsynth_spec::{ValidationError, ValidationWarning};

/// Print validation errors to the console.
pub(crate) fn print_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        return;
    }
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

/// Print validation warnings to the console.
pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in warnings {
        let path_info = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            path_info.dimmed(),
            warning.message
        );
    }
}

/// A coded message in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationError> for JsonMessage {
    fn from(e: &ValidationError) -> Self {
        Self {
            code: e.code.to_string(),
            message: e.message.clone(),
            path: e.path.clone(),
        }
    }
}

impl From<&ValidationWarning> for JsonMessage {
    fn from(w: &ValidationWarning) -> Self {
        Self {
            code: w.code.to_string(),
            message: w.message.clone(),
            path: w.path.clone(),
        }
    }
}

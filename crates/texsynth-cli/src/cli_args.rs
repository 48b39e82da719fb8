//! CLI argument definitions for the texsynth command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use texsynth_cli::commands::template::TemplateKind;

/// texsynth - Procedural Texture Synthesis
#[derive(Parser)]
#[command(name = "texsynth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a texture from a spec file
    Generate {
        /// Path to the JSON spec file
        #[arg(short, long)]
        spec: String,

        /// Output file path (default: <asset_id>.<ext>)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for noise recipes (overrides the spec's seed)
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Validate a spec file without generating
    Validate {
        /// Path to the JSON spec file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print a starter spec
    Template {
        /// Recipe kind
        #[arg(value_enum)]
        kind: TemplateKind,
    },
}

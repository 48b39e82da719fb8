//! CLI command implementations

pub mod generate;
pub mod template;
pub mod validate;

mod reporting;

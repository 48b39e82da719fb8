//! texsynth CLI library.
//!
//! Spec loading, output encoding and the command implementations behind the
//! `texsynth` binary.

pub mod commands;
pub mod encode;
pub mod input;
pub mod logging;

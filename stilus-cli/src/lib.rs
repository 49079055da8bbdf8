//! stilus CLI library
//!
//! Command implementations, input resolution and report formatting for the
//! `stilus` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

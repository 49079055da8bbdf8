//! High-level analysis API
//!
//! Wraps locale resolution, input decoding and both detectors behind one
//! [`StyleAnalyzer`] so callers such as the CLI never touch the engines
//! directly.

mod analyzer;
mod config;
mod input;
mod output;


pub use analyzer::StyleAnalyzer;
pub use config::{Analyses, Config, ConfigBuilder};
pub use input::Input;
pub use output::{Report, ReportMetadata, TextStats};

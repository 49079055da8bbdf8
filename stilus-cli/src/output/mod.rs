//! Output formatting module

use anyhow::Result;
use stilus_core::Report;

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the report of one input file
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// "2/5 (40.0%)"
pub(crate) fn ratio(count: usize, total: usize, percentage: f64) -> String {
    format!("{count}/{total} ({percentage:.1}%)")
}

//! Markdown output formatter

use std::io::Write;

use anyhow::Result;
use stilus_core::Report;

use super::{ratio, OutputFormatter};

/// Markdown formatter - one section with tables per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    file_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            file_count: 0,
        }
    }
}

/// Keep table cells on one row
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.file_count += 1;
        let stats = &report.metadata.stats;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Locale**: {}", report.locale)?;
        writeln!(self.writer, "- **Sentences**: {}", stats.sentences)?;
        writeln!(self.writer, "- **Words**: {}", stats.words)?;
        writeln!(self.writer)?;

        if let Some(summary) = &report.transition_words {
            writeln!(self.writer, "### Transition words")?;
            writeln!(self.writer)?;
            if !summary.sentence_results.is_empty() {
                writeln!(self.writer, "| Sentence | Words |")?;
                writeln!(self.writer, "|----------|-------|")?;
                for result in &summary.sentence_results {
                    writeln!(
                        self.writer,
                        "| {} | {} |",
                        cell(&result.sentence),
                        cell(&result.transition_words.join(", "))
                    )?;
                }
                writeln!(self.writer)?;
            }
            writeln!(
                self.writer,
                "*Sentences with transition words: {}*",
                ratio(
                    summary.transition_word_sentences,
                    summary.total_sentences,
                    summary.percentage()
                )
            )?;
            writeln!(self.writer)?;
        }

        if let Some(summary) = &report.passive_voice {
            writeln!(self.writer, "### Passive voice")?;
            writeln!(self.writer)?;
            for (index, sentence) in summary.passives.iter().enumerate() {
                writeln!(self.writer, "{}. {}", index + 1, sentence)?;
            }
            if !summary.passives.is_empty() {
                writeln!(self.writer)?;
            }
            writeln!(
                self.writer,
                "*Passive sentences: {}*",
                ratio(
                    summary.passive_sentences,
                    summary.total_sentences,
                    summary.percentage()
                )
            )?;
            writeln!(self.writer)?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Files analyzed: {}*", self.file_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Plain text output formatter

use std::io::Write;

use anyhow::Result;
use stilus_core::transitions::MatchKind;
use stilus_core::Report;

use super::{ratio, OutputFormatter};

/// Plain text formatter - a short summary block per file
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        let stats = &report.metadata.stats;
        writeln!(self.writer, "{source}")?;
        writeln!(
            self.writer,
            "  locale: {}, sentences: {}, words: {}",
            report.locale, stats.sentences, stats.words
        )?;

        if let Some(summary) = &report.transition_words {
            writeln!(
                self.writer,
                "  transition words: {}",
                ratio(
                    summary.transition_word_sentences,
                    summary.total_sentences,
                    summary.percentage()
                )
            )?;
            for result in &summary.sentence_results {
                let marker = match result.kind {
                    MatchKind::TwoPart => result.transition_words.join(" … "),
                    MatchKind::Single => result.transition_words.join(", "),
                };
                writeln!(self.writer, "    [{marker}] {}", result.sentence)?;
            }
        }

        if let Some(summary) = &report.passive_voice {
            writeln!(
                self.writer,
                "  passive voice: {}",
                ratio(
                    summary.passive_sentences,
                    summary.total_sentences,
                    summary.percentage()
                )
            )?;
            for sentence in &summary.passives {
                writeln!(self.writer, "    {sentence}")?;
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

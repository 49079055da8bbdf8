//! Text utilities consumed by the detection engine
//!
//! Segmentation, quote normalization and word-boundary construction. All
//! functions are pure and deterministic.

mod quotes;
mod sentences;
mod words;

pub use quotes::normalize_single_quotes;
pub use sentences::get_sentences;
pub use words::{add_word_boundary, is_word_boundary, words};

pub(crate) use words::{boundary_class, word_spans};

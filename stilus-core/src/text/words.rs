//! Word boundaries and word extraction
//!
//! Matching uses an explicit boundary class rather than `\b` so that
//! multi-word markers ("sin embargo") and markers next to guillemets, curly
//! quotes or inverted punctuation ("¿Sin embargo") behave like single words.

/// Punctuation that separates words, in addition to whitespace
///
/// Includes the typographic double quotes and dashes the sentence splitter
/// also recognizes.
const BOUNDARY_PUNCTUATION: &str =
    ".,'()\"+-;!?:/»«‹›<>¿¡…[]\u{201C}\u{201D}\u{201E}\u{2014}\u{2013}";

/// Whether `ch` separates two words
pub fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || BOUNDARY_PUNCTUATION.contains(ch)
}

/// Regex character class matching one boundary character
pub(crate) fn boundary_class() -> String {
    let mut class = String::from(r"[\s");
    for ch in BOUNDARY_PUNCTUATION.chars() {
        class.push_str(&regex::escape(&ch.to_string()));
    }
    class.push(']');
    class
}

/// Wrap `word` in a pattern that only matches it as a whole word
///
/// The returned fragment is not anchored and carries no flags; callers add
/// `(?i)` for case-insensitive matching.
pub fn add_word_boundary(word: &str) -> String {
    let boundary = boundary_class();
    format!(
        "(?:^|{boundary}){}(?:$|{boundary})",
        regex::escape(word)
    )
}

/// Split a fragment into its words, dropping boundary characters
pub fn words(text: &str) -> Vec<&str> {
    word_spans(text).into_iter().map(|(_, word)| word).collect()
}

/// Words together with their byte offset in `text`
pub(crate) fn word_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (offset, ch) in text.char_indices() {
        match (is_word_boundary(ch), start) {
            (true, Some(begin)) => {
                spans.push((begin, &text[begin..offset]));
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, &text[begin..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn bounded(word: &str) -> Regex {
        Regex::new(&format!("(?i){}", add_word_boundary(word))).unwrap()
    }

    #[test]
    fn test_whole_word_only() {
        let re = bounded("or");
        assert!(re.is_match("either you go, or you stay"));
        assert!(!re.is_match("the door is open"));
        assert!(!re.is_match("order matters"));
    }

    #[test]
    fn test_start_and_end_of_text() {
        let re = bounded("firstly");
        assert!(re.is_match("Firstly"));
        assert!(re.is_match("firstly, we begin"));
        assert!(re.is_match("and firstly"));
    }

    #[test]
    fn test_multi_word_and_special_characters() {
        assert!(bounded("sin embargo").is_match("¿Sin embargo, quién vino?"));
        assert!(bounded("e.g.").is_match("some words, e.g. these"));
        assert!(!bounded("e.g.").is_match("some words, eXgX these"));
    }

    #[test]
    fn test_words_strips_punctuation() {
        assert_eq!(
            words("fue un sentido monumental y grandilocuente."),
            vec!["fue", "un", "sentido", "monumental", "y", "grandilocuente"]
        );
        assert_eq!(words("«¡Hola!», dijo."), vec!["Hola", "dijo"]);
        assert!(words("  ...  ").is_empty());
        assert_eq!(
            words("\u{201C}Sin embargo\u{201D}, dijo\u{2014}luego"),
            vec!["Sin", "embargo", "dijo", "luego"]
        );
    }

    #[test]
    fn test_typographic_quotes_and_dashes_are_boundaries() {
        let re = bounded("however");
        assert!(re.is_match("\u{201C}However, we left.\u{201D}"));
        assert!(re.is_match("It works\u{2014}however, slowly."));
        assert!(re.is_match("pages 3\u{2013}however"));
        assert!(re.is_match("\u{201E}however\u{201C}"));
        assert!(!re.is_match("\u{201C}Howevers\u{201D}"));
    }

    #[test]
    fn test_word_spans_offsets() {
        let text = "¿Fue él?";
        let spans = word_spans(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], ("¿".len(), "Fue"));
        assert_eq!(&text[spans[1].0..], "él?");
    }
}

//! Sentence segmentation
//!
//! A deterministic, rule-based splitter. Every line break ends a sentence;
//! inside a line a run of terminators ends a sentence when it is followed
//! by whitespace and something that can open a sentence.

/// Characters that can end a sentence
const TERMINATORS: [char; 4] = ['.', '!', '?', '…'];

/// Characters absorbed into the sentence after a terminator (`"Stop!" he said`)
const CLOSERS: [char; 7] = ['"', '\'', ')', ']', '»', '\u{201D}', '\u{2019}'];

/// Characters that may open a sentence besides uppercase letters and digits
const OPENERS: [char; 9] = ['"', '\'', '(', '[', '«', '¿', '¡', '\u{201C}', '\u{2018}'];

/// Words that end in a dot without ending the sentence (compared lowercase, final dot removed)
const ABBREVIATIONS: &[&str] = &[
    "dr", "dra", "mr", "mrs", "ms", "prof", "sr", "sra", "srta", "st", "jr", "vs", "e.g", "i.e",
    "ud", "uds", "vd", "vds", "p.ej", "pág", "núm", "av", "approx",
];

/// Split text into trimmed, non-empty sentences
///
/// The same input always yields the same sequence.
pub fn get_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        split_line(line, &mut sentences);
    }
    sentences
}

fn split_line(line: &str, sentences: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        if !TERMINATORS.contains(&ch) {
            i += 1;
            continue;
        }

        let mut run_end = i + 1;
        while run_end < chars.len()
            && (TERMINATORS.contains(&chars[run_end].1) || CLOSERS.contains(&chars[run_end].1))
        {
            run_end += 1;
        }
        let end = chars.get(run_end).map_or(line.len(), |&(offset, _)| offset);

        let single_dot = ch == '.' && run_end == i + 1;
        let abbreviated = single_dot && ends_with_abbreviation(&line[start..pos]);

        if !abbreviated && opens_new_sentence(&chars[run_end..]) {
            push_sentence(&line[start..end], sentences);
            start = end;
        }
        i = run_end;
    }

    push_sentence(&line[start..], sentences);
}

/// Whether the text after a terminator run starts a new sentence
fn opens_new_sentence(rest: &[(usize, char)]) -> bool {
    let Some(&(_, first)) = rest.first() else {
        return true;
    };
    if !first.is_whitespace() {
        return false;
    }
    match rest.iter().map(|&(_, ch)| ch).find(|ch| !ch.is_whitespace()) {
        None => true,
        Some(next) => next.is_uppercase() || next.is_ascii_digit() || OPENERS.contains(&next),
    }
}

fn ends_with_abbreviation(before_dot: &str) -> bool {
    let Some(last) = before_dot.split_whitespace().last() else {
        return false;
    };
    let word = last
        .trim_start_matches(|ch: char| !ch.is_alphanumeric())
        .to_lowercase();
    let mut letters = word.chars();
    let single_letter = matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic());
    single_letter || ABBREVIATIONS.contains(&word.as_str())
}

fn push_sentence(candidate: &str, sentences: &mut Vec<String>) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            get_sentences("Hello world. This is a test. Another sentence."),
            vec!["Hello world.", "This is a test.", "Another sentence."]
        );
    }

    #[test]
    fn test_semicolon_does_not_split() {
        assert_eq!(
            get_sentences("Firstly, we begin; secondly, we end."),
            vec!["Firstly, we begin; secondly, we end."]
        );
    }

    #[test]
    fn test_newlines_split() {
        assert_eq!(
            get_sentences("A heading\n\nThe body starts here. It ends here"),
            vec!["A heading", "The body starts here.", "It ends here"]
        );
    }

    #[test]
    fn test_abbreviations_and_initials() {
        assert_eq!(
            get_sentences("Dr. Smith met J. Doe at noon. They talked."),
            vec!["Dr. Smith met J. Doe at noon.", "They talked."]
        );
        assert_eq!(
            get_sentences("La Sra. García llegó tarde. Nadie lo notó."),
            vec!["La Sra. García llegó tarde.", "Nadie lo notó."]
        );
    }

    #[test]
    fn test_lowercase_after_terminator_does_not_split() {
        assert_eq!(
            get_sentences("Wait... then he left."),
            vec!["Wait... then he left."]
        );
        assert_eq!(get_sentences("Version 2.5 is out."), vec!["Version 2.5 is out."]);
    }

    #[test]
    fn test_spanish_inverted_punctuation() {
        assert_eq!(
            get_sentences("El libro fue escrito por mi amiga. ¿Lo has leído? ¡Claro!"),
            vec!["El libro fue escrito por mi amiga.", "¿Lo has leído?", "¡Claro!"]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            get_sentences("She said \"Stop!\" Then she left."),
            vec!["She said \"Stop!\"", "Then she left."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(get_sentences("").is_empty());
        assert!(get_sentences("   \n\t\n").is_empty());
    }
}

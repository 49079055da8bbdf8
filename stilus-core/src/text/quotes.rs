//! Quote normalization

/// Single-quote variants that are folded into the ASCII apostrophe
const SINGLE_QUOTE_VARIANTS: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201B}', '`'];

/// Map every single-quote variant to `'`
///
/// Idempotent: normalizing an already normalized string is a no-op.
pub fn normalize_single_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if SINGLE_QUOTE_VARIANTS.contains(&ch) {
                '\''
            } else {
                ch
            }
        })
        .collect()
}

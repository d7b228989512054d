/// Tokens separated by whitespace runs, with the ASCII information
/// separators U+001C..=U+001F also treated as whitespace.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|token| !token.is_empty()).count()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when any keyword occurs in `lowered`, ignoring case.
pub fn mentions_any(lowered: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowered.contains(keyword.to_lowercase().as_str()))
}

//! Text content of shapes and table cells.
//!
//! A [`TextFrame`] holds paragraphs, a [`Paragraph`] holds runs, and every
//! level carries a [`Font`] with the character properties set at that level.

pub mod font;
pub mod frame;

pub use font::Font;
pub use frame::{Paragraph, Run, TextFrame};

/// First `limit` characters of `text`, with `...` appended when cut.
pub(crate) fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Shortened text for one-line summaries: at most `limit` characters, of
/// which the last three are `...` when the text had to be cut.
pub(crate) fn abbreviate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let keep = limit.saturating_sub(3);
    let end = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 50), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_abbreviate() {
        let text = "This is a long piece of text that overflows";
        assert_eq!(abbreviate(text, 30), "This is a long piece of tex...");
        assert_eq!(abbreviate(text, 30).chars().count(), 30);
        assert_eq!(abbreviate("exactly", 7), "exactly");
    }
}

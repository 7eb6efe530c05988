//! Paragraph splitting
//!
//! Text is auto-paragraphed first: block-level tags and blank lines become
//! paragraph boundaries and every resulting chunk is wrapped in `<p>`.
//! Paragraphs are then read back out of the `<p>` wrappers.

use super::normalize::strip_shortcodes;
use super::tokenizer::word_count;
use crate::models::Paragraph;
use regex::Regex;
use std::sync::OnceLock;

static BLOCK_TAG: OnceLock<Regex> = OnceLock::new();
static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH: OnceLock<Regex> = OnceLock::new();

fn block_tag() -> &'static Regex {
    BLOCK_TAG.get_or_init(|| {
        Regex::new(
            r"(?i)</?(?:p|div|h[1-6]|ul|ol|li|dl|dt|dd|blockquote|pre|table|thead|tbody|tr|td|th|section|article|aside|header|footer|nav|figure|figcaption|address|hr)(?:\s[^>]*)?/?>",
        )
        .expect("valid regex")
    })
}

fn blank_line() -> &'static Regex {
    BLANK_LINE.get_or_init(|| Regex::new(r"\n[ \t\r]*\n").expect("valid regex"))
}

fn paragraph() -> &'static Regex {
    PARAGRAPH.get_or_init(|| Regex::new(r"(?is)<p>(.*?)</p>").expect("valid regex"))
}

/// Wrap every block of text in `<p>` tags
///
/// Existing block-level tags and blank lines delimit the blocks; inline
/// markup inside a block is kept.
pub fn autop(text: &str) -> String {
    let separated = block_tag().replace_all(text, "\n\n");
    blank_line()
        .split(&separated)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| format!("<p>{}</p>", chunk))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Paragraph texts, without word counting
///
/// Falls back to the whole text as a single paragraph when nothing matches.
pub fn match_paragraphs(text: &str) -> Vec<String> {
    let wrapped = autop(&strip_shortcodes(text));
    let found: Vec<String> = paragraph()
        .captures_iter(&wrapped)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();

    if found.is_empty() && !text.trim().is_empty() {
        return vec![text.to_string()];
    }
    found
}

/// Paragraphs with their word counts; paragraphs without words are dropped
pub fn paragraphs(text: &str) -> Vec<Paragraph> {
    match_paragraphs(text)
        .into_iter()
        .map(|text| Paragraph {
            word_count: word_count(&text),
            text,
        })
        .filter(|p| p.word_count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_paragraph_tags() {
        let found = paragraphs("<p>First one here.</p><p class=\"lead\">Second <em>para</em>.</p>");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "First one here.");
        assert_eq!(found[0].word_count, 3);
        assert_eq!(found[1].text, "Second <em>para</em>.");
        assert_eq!(found[1].word_count, 2);
    }

    #[test]
    fn test_blank_lines_become_paragraphs() {
        let found = paragraphs("Plain text first.\n\nThen a second block\nspanning lines.");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].word_count, 6);
    }

    #[test]
    fn test_block_tags_split() {
        let found = paragraphs("<h2>Heading</h2>Loose text<div>In a div</div>");
        let texts: Vec<&str> = found.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Heading", "Loose text", "In a div"]);
    }

    #[test]
    fn test_empty_paragraphs_excluded() {
        let found = paragraphs("<p>&nbsp;</p><p>Words here</p><p></p>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word_count, 2);
    }

    #[test]
    fn test_shortcodes_removed() {
        let found = paragraphs("[gallery ids=\"1,2\"]\n\nCaptioned text");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Captioned text");
    }

    #[test]
    fn test_empty_text() {
        assert!(paragraphs("").is_empty());
        assert!(match_paragraphs("").is_empty());
    }

    #[test]
    fn test_autop_wraps() {
        assert_eq!(autop("a\n\nb"), "<p>a</p>\n<p>b</p>");
    }
}

//! Markup stripping and text normalization
//!
//! Pipeline order matters: `<style>`/`<script>` blocks go first so their
//! contents never reach the tokenizer, then the remaining tags, comments
//! and entities, then whitespace and quote glyphs. Removed markup is
//! replaced by a space so that stripping can never splice two fragments
//! into a new tag, which keeps `normalize` idempotent.

use regex::Regex;
use std::sync::OnceLock;

static STYLE_BLOCK: OnceLock<Regex> = OnceLock::new();
static SCRIPT_BLOCK: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();
static COMMENT: OnceLock<Regex> = OnceLock::new();
static ENTITY: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static SHORTCODE_START: OnceLock<Regex> = OnceLock::new();
static SHORTCODE_END: OnceLock<Regex> = OnceLock::new();
static CONNECTOR: OnceLock<Regex> = OnceLock::new();
static STANDALONE_NUMBER: OnceLock<Regex> = OnceLock::new();

fn style_block() -> &'static Regex {
    STYLE_BLOCK.get_or_init(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"))
}

fn script_block() -> &'static Regex {
    SCRIPT_BLOCK
        .get_or_init(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"))
}

fn tag() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"(?i)</?[a-z][^>]*?>").expect("valid regex"))
}

fn comment() -> &'static Regex {
    COMMENT.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"))
}

fn entity() -> &'static Regex {
    ENTITY.get_or_init(|| Regex::new(r"&\S+?;").expect("valid regex"))
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

// Shortcode names: anything but markup, brackets, slashes, control chars and `=`
fn shortcode_start() -> &'static Regex {
    SHORTCODE_START.get_or_init(|| {
        Regex::new(r"\[[^<>&/\[\]\x00-\x20=]+?( [^\]]+?)?\]").expect("valid regex")
    })
}

fn shortcode_end() -> &'static Regex {
    SHORTCODE_END
        .get_or_init(|| Regex::new(r"\[/[^<>&/\[\]\x00-\x20=]+?\]").expect("valid regex"))
}

fn connector() -> &'static Regex {
    CONNECTOR.get_or_init(|| Regex::new(r"--|\x{2014}").expect("valid regex"))
}

fn standalone_number() -> &'static Regex {
    STANDALONE_NUMBER.get_or_init(|| Regex::new(r"\b[0-9]+\b").expect("valid regex"))
}

/// Remove `<style>` and `<script>` blocks including their contents
pub fn strip_style_and_script(text: &str) -> String {
    let text = style_block().replace_all(text, " ");
    script_block().replace_all(&text, " ").into_owned()
}

/// Replace every HTML tag with a space
pub fn strip_tags(text: &str) -> String {
    tag().replace_all(text, " ").into_owned()
}

/// Remove HTML comments
pub fn strip_comments(text: &str) -> String {
    comment().replace_all(text, " ").into_owned()
}

/// Drop HTML entities; `&nbsp;` and friends become plain spaces
pub fn strip_entities(text: &str) -> String {
    entity().replace_all(text, " ").into_owned()
}

/// Collapse runs of whitespace to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    whitespace().replace_all(text, " ").trim().to_string()
}

/// Map curly, low-9 and backtick quote glyphs onto ASCII quotes
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '`' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{301D}' | '\u{301E}' | '\u{301F}' | '\u{201F}'
            | '\u{201E}' => '"',
            other => other,
        })
        .collect()
}

/// Remove `[shortcode attrs]` openers and `[/shortcode]` closers, keeping enclosed text
pub fn strip_shortcodes(text: &str) -> String {
    let text = shortcode_start().replace_all(text, "");
    shortcode_end().replace_all(&text, "").into_owned()
}

/// Replace `--` and em dashes used as connectors with spaces
pub fn strip_connectors(text: &str) -> String {
    connector().replace_all(text, " ").into_owned()
}

/// Remove tokens made only of digits
pub fn strip_numbers(text: &str) -> String {
    let stripped = standalone_number().replace_all(text, "");
    if stripped == "." {
        String::new()
    } else {
        stripped.into_owned()
    }
}

/// Full normalization: markup, comments and entities out, whitespace and quotes normalized
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = strip_style_and_script(text);
    let text = strip_tags(&text);
    let text = strip_comments(&text);
    let text = strip_entities(&text);
    let text = collapse_whitespace(&text);
    normalize_quotes(&text)
}

/// Tag removal only, for callers that need entities and comments untouched
pub fn clean_tags_only(text: &str) -> String {
    collapse_whitespace(&strip_tags(text))
}

/// Strip style, script, comments and entities but keep the markup itself
pub fn clean_html(text: &str) -> String {
    let text = strip_style_and_script(text);
    let text = strip_comments(&text);
    let text = strip_entities(&text);
    normalize_quotes(&collapse_whitespace(&text))
}

use html2text::render::text_renderer::TrivialDecorator;
use regex::Regex;
use std::sync::LazyLock;

const WORDS_PER_MINUTE: usize = 200;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Render HTML as a single line of plain text
pub fn plain_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let rendered =
        html2text::from_read_with_decorator(html.as_bytes(), usize::MAX, TrivialDecorator::new());
    WHITESPACE
        .replace_all(&rendered, " ")
        .trim()
        .to_string()
}

/// Cut text to at most `max_chars` characters, appending "..." when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", text[..byte_index].trim_end()),
        None => text.to_string(),
    }
}

/// "N min read" at 200 words per minute, never less than one minute
pub fn read_time(html: &str) -> String {
    let words = plain_text(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

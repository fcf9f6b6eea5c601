//! Rewrites Markdown backtick code spans into the chat client's `<code>` tags.

use regex::Regex;
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("code block pattern should compile"));

static CODE_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)`(.*?)`").expect("inline code pattern should compile"));

/// Converts backtick-delimited spans in `text` to `<code>` display markup.
///
/// Triple-backtick spans are converted first so that the inline pass never
/// fires on the delimiters of an already-converted block. Both passes are
/// non-greedy and match across newlines. Unbalanced backticks are left
/// best-effort; this is deliberately not a Markdown parser.
pub fn format_code_spans(text: &str) -> String {
    let blocks = CODE_BLOCK.replace_all(text, "<code>$1</code>");
    CODE_INLINE.replace_all(&blocks, "<code>$1</code>").into_owned()
}

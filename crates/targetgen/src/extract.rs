//! Literal extraction from chromedriver source.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `type_as_string == "<literal>"` and captures the literal.
static TYPE_AS_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"type_as_string\s+==\s+"([^"]+)""#).expect("type_as_string pattern is valid")
});

/// View fetched bytes as text. Invalid UTF-8 is replaced; the literals we
/// look for are ASCII.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Collect every compared literal in order of appearance.
///
/// Duplicates are kept. No match yields an empty list, not an error.
pub fn extract_target_types(text: &str) -> Vec<String> {
    TYPE_AS_STRING
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

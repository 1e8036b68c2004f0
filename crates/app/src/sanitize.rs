//! Form input sanitising.

use std::sync::LazyLock;

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "constant pattern, exercised by the unit tests below"
)]
static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>?").expect("valid tag pattern"));

#[expect(
    clippy::expect_used,
    reason = "constant pattern, exercised by the unit tests below"
)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Clean a single-line text field: markup is stripped, runs of whitespace (including line
/// breaks and tabs) collapse to one space, and the ends are trimmed.
pub fn text_field(input: &str) -> String {
    let without_tags = TAGS.replace_all(input, "");

    WHITESPACE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Like [`text_field`], mapping an empty result to `None`.
pub fn optional_text_field(input: Option<&str>) -> Option<String> {
    input.map(text_field).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        assert_eq!(
            text_field("<b>Half</b> price <script>alert(1)</script>"),
            "Half price alert(1)"
        );
    }

    #[test]
    fn collapses_whitespace_and_line_breaks() {
        assert_eq!(text_field("  Summer\r\n\tsale   now "), "Summer sale now");
    }

    #[test]
    fn unterminated_tag_is_removed() {
        assert_eq!(text_field("Deal <img src=x"), "Deal");
    }

    #[test]
    fn blank_optional_input_becomes_none() {
        assert_eq!(optional_text_field(Some(" <br> ")), None);
        assert_eq!(optional_text_field(None), None);
        assert_eq!(
            optional_text_field(Some(" Deal ")),
            Some("Deal".to_string())
        );
    }
}

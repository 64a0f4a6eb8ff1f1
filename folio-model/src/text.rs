//! Plain-text helpers for content fields.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("valid tag regex"));

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("valid entity regex")
});

/// Reduce a rich-text fragment to the text a reader would see.
///
/// Tags and comments are dropped, character references decoded. Whitespace is
/// left as written. Unknown named entities pass through untouched.
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG.replace_all(html, "");
    ENTITY
        .replace_all(&stripped, |caps: &Captures<'_>| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "mdash" => "—",
        "ndash" => "–",
        "hellip" => "…",
        "middot" => "·",
        _ => return None,
    };
    Some(decoded.to_string())
}

/// Borrow a text field only when it has visible content.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_comments() {
        assert_eq!(
            html_to_text("<p>Fast <strong>TUI</strong><!-- draft --> for Git</p>"),
            "Fast TUI for Git"
        );
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            html_to_text("R&amp;D &lt;3 &#8212; &#x41;&nbsp;b"),
            "R&D <3 — A\u{a0}b"
        );
    }

    #[test]
    fn leaves_unknown_entities_alone() {
        assert_eq!(html_to_text("&bogus; &#xFFFFFF;"), "&bogus; &#xFFFFFF;");
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("x".into())), Some("x"));
    }
}

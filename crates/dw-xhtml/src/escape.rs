//! Text escaping and identifier encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters percent-encoded by [`encode_url`]: everything except
/// alphanumerics and the URL-safe punctuation set.
const URL_UNSAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Escape markup-significant characters (`&`, `<`, `>`, `"`) as entities.
///
/// Escaping is applied exactly once per call; callers must not re-escape
/// already escaped output.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encode a string for use in a URL, leaving alphanumerics and
/// URL punctuation (`;/?:@&=+$,-_.!~*'()#`) untouched.
#[must_use]
pub fn encode_url(text: &str) -> String {
    utf8_percent_encode(text, URL_UNSAFE).to_string()
}

/// Whether `text` is a syntactically valid fragment identifier: a letter
/// followed by letters, digits, `-`, `_`, `:` or `.`.
#[must_use]
pub fn is_id(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        }
        _ => false,
    }
}

/// Encode an anchor name into a valid fragment identifier.
///
/// The name is trimmed, spaces become underscores, identifier characters
/// are kept and everything else is dropped. A leading `a` is inserted when
/// the result would not start with a letter, so the output always passes
/// [`is_id`] (for non-degenerate input; an all-dropped name yields `a`).
#[must_use]
pub fn encode_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphabetic() {
            id.push(c);
        } else if c.is_ascii_digit() || matches!(c, '-' | '_' | ':' | '.') {
            if id.is_empty() {
                id.push('a');
            }
            id.push(c);
        } else if c == ' ' {
            if id.is_empty() {
                id.push('a');
            }
            id.push('_');
        }
    }
    if id.is_empty() {
        id.push('a');
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"a < b && c > "d""#),
            "a &lt; b &amp;&amp; c &gt; &quot;d&quot;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn test_escape_html_applied_once() {
        // Escaping the raw string once must not be re-escaped by a second
        // render path: a single pass over "<" yields "&lt;", never "&amp;lt;".
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_encode_url_keeps_safe_punctuation() {
        assert_eq!(
            encode_url("http://example.com/a?b=c&d=e#frag"),
            "http://example.com/a?b=c&d=e#frag"
        );
    }

    #[test]
    fn test_encode_url_encodes_spaces_and_non_ascii() {
        assert_eq!(encode_url("a b"), "a%20b");
        assert_eq!(encode_url("naïve"), "na%C3%AFve");
    }

    #[test]
    fn test_is_id() {
        assert!(is_id("valid-id"));
        assert!(is_id("a1:b.c_d"));
        assert!(!is_id(""));
        assert!(!is_id("1leading-digit"));
        assert!(!is_id("has space"));
        assert!(!is_id("-dash"));
    }

    #[test]
    fn test_encode_id() {
        assert_eq!(encode_id("Anchor Name"), "Anchor_Name");
        assert_eq!(encode_id("  trimmed  "), "trimmed");
        assert_eq!(encode_id("1.2 Numbers"), "a1.2_Numbers");
        assert_eq!(encode_id("héllo"), "hllo");
        assert_eq!(encode_id(""), "a");
    }

    #[test]
    fn test_encode_id_output_is_valid() {
        for name in ["Anchor Name", "1.2 Numbers", "", "héllo", "!!!"] {
            assert!(is_id(&encode_id(name)), "invalid id for {name:?}");
        }
    }
}

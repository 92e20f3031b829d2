//! Post-processing applied to raw-mode output.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn hyperlink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"HYPERLINK\s+['"]([^\s'"]+)['"]"#).expect("hyperlink pattern is valid")
    })
}

/// Replace `HYPERLINK "url"` field instructions with the bare URL.
pub fn unwrap_hyperlinks(content: &str) -> Cow<'_, str> {
    hyperlink_regex().replace_all(content, "$1")
}

/// Remove non-breaking spaces.
pub fn strip_nbsp(content: &str) -> Cow<'_, str> {
    if content.contains('\u{a0}') {
        Cow::Owned(content.replace('\u{a0}', ""))
    } else {
        Cow::Borrowed(content)
    }
}

/// Full raw-mode cleanup: hyperlink unwrapping, then NBSP removal.
pub fn clean_raw_markup(content: &str) -> String {
    let unwrapped = unwrap_hyperlinks(content);
    strip_nbsp(&unwrapped).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_hyperlink() {
        assert_eq!(
            unwrap_hyperlinks(r#"see HYPERLINK "http://example.com" here"#),
            "see http://example.com here"
        );
        assert_eq!(
            unwrap_hyperlinks("HYPERLINK  'https://a.b/c?d=1'"),
            "https://a.b/c?d=1"
        );
    }

    #[test]
    fn test_unwrap_multiple_hyperlinks() {
        let input = r#"HYPERLINK "http://a.com" and HYPERLINK "http://b.com""#;
        assert_eq!(unwrap_hyperlinks(input), "http://a.com and http://b.com");
    }

    #[test]
    fn test_hyperlink_without_quotes_is_kept() {
        let input = "HYPERLINK http://a.com";
        assert_eq!(unwrap_hyperlinks(input), input);
    }

    #[test]
    fn test_strip_nbsp() {
        assert_eq!(strip_nbsp("a\u{a0}b\u{a0}"), "ab");
        assert!(matches!(strip_nbsp("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_clean_raw_markup() {
        let input = "<p>HYPERLINK \"http://x.com\"\u{a0}</p>";
        assert_eq!(clean_raw_markup(input), "<p>http://x.com</p>");
    }
}

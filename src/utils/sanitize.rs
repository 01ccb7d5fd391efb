//! Form input sanitization.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex matching HTML/XML tags, including unterminated ones at the
/// end of the input.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>?").unwrap());

/// Trims surrounding whitespace and strips markup tags from form input.
///
/// Applied to both credential fields before they are sent upstream. The forum
/// performs its own validation; this only keeps obvious markup out of the
/// exchange and out of any error report that echoes the input.
pub fn sanitize(input: &str) -> String {
    TAG_REGEX.replace_all(input.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  alice  "), "alice");
        assert_eq!(sanitize("\tbob\n"), "bob");
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(sanitize("<b>alice</b>"), "alice");
        assert_eq!(sanitize("al<script>alert(1)</script>ice"), "alalert(1)ice");
    }

    #[test]
    fn test_strips_unterminated_tag() {
        assert_eq!(sanitize("alice <img src=x"), "alice");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(sanitize("alice"), "alice");
        assert_eq!(sanitize(""), "");
    }
}

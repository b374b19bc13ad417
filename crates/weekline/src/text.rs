//! String helpers shared by request-building and display code.
//!
//! Percent-encoding uses a curated allow-list rather than a generic
//! query set: everything a URL query would tolerate except the
//! characters that carry structure in our request strings
//! (`: ? & = @ + / '`).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that survive [`url_encoded`] unescaped: alphanumerics plus
/// the URL-query-allowed set with `:?&=@+/'` removed.
const QUERY_STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b';')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string under the strict query allow-list.
///
/// Reserved query characters (`:?&=@+/'`) are escaped so the result can
/// be embedded in a query value without introducing structure.
pub fn url_encoded(input: &str) -> String {
    utf8_percent_encode(input, QUERY_STRICT).to_string()
}

/// Substring containment with optional case sensitivity.
///
/// The case-insensitive path folds both sides with Unicode lowercasing.
pub fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Whether the trimmed input parses as a finite number.
pub fn is_number(input: &str) -> bool {
    input
        .trim()
        .parse::<f64>()
        .map_or(false, |n| n.is_finite())
}

/// Whether the trimmed input parses as a finite number strictly
/// greater than zero.
pub fn is_positive_number(input: &str) -> bool {
    input
        .trim()
        .parse::<f64>()
        .map_or(false, |n| n.is_finite() && n > 0.0)
}

/// Truncate to `length` characters with a `"..."` marker.
/// Strings at or under the limit pass through unchanged.
pub fn truncate(input: &str, length: usize) -> String {
    truncate_with(input, length, "...")
}

/// Truncate to `length` characters, appending `trailing` only when the
/// input was actually cut. Counts characters, not bytes.
pub fn truncate_with(input: &str, length: usize, trailing: &str) -> String {
    if input.chars().count() > length {
        let mut out: String = input.chars().take(length).collect();
        out.push_str(trailing);
        out
    } else {
        input.to_string()
    }
}

/// Base64-encode the UTF-8 bytes of a string with the standard alphabet.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encoded_passes_allowed_characters() {
        assert_eq!(url_encoded("abc-XYZ_123.~"), "abc-XYZ_123.~");
        assert_eq!(url_encoded("a!$()*,;z"), "a!$()*,;z");
    }

    #[test]
    fn test_url_encoded_escapes_reserved_query_characters() {
        assert_eq!(url_encoded("a=b&c"), "a%3Db%26c");
        assert_eq!(url_encoded("user@host:8080/path?q"), "user%40host%3A8080%2Fpath%3Fq");
        assert_eq!(url_encoded("it's +plus"), "it%27s%20%2Bplus");
    }

    #[test]
    fn test_url_encoded_escapes_non_ascii() {
        assert_eq!(url_encoded("café"), "caf%C3%A9");
    }

    #[test]
    fn test_contains_case_sensitive() {
        assert!(contains("Weekline utilities", "line", true));
        assert!(!contains("Weekline utilities", "UTIL", true));
    }

    #[test]
    fn test_contains_case_insensitive() {
        assert!(contains("Weekline utilities", "UTIL", false));
        assert!(contains("STRASSE", "strasse", false));
        assert!(!contains("Weekline", "month", false));
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("42"));
        assert!(is_number("-3.5"));
        assert!(is_number("  1e3  "));
        assert!(!is_number("abc"));
        assert!(!is_number(""));
        assert!(!is_number("NaN"));
        assert!(!is_number("inf"));
    }

    #[test]
    fn test_is_positive_number() {
        assert!(is_positive_number("0.01"));
        assert!(is_positive_number(" 7 "));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("-1"));
        assert!(!is_positive_number("abc"));
    }

    #[test]
    fn test_truncate_cuts_and_marks() {
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate_with("hello world", 5, "…"), "hello…");
    }

    #[test]
    fn test_truncate_passes_short_input_through() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hi", 5), "hi");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_base64_encode() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_encode(""), "");
        assert_eq!(base64_encode("weekline"), "d2Vla2xpbmU=");
    }
}

//! Whole-string predicates.

use regex::Regex;
use std::sync::OnceLock;

/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character is a letter or digit.
pub fn is_letter(ch: char) -> bool {
    ch.is_alphanumeric()
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is punctuation (not a letter or whitespace).
pub fn is_punctuation(ch: char) -> bool {
    !is_letter(ch) && !is_whitespace(ch)
}

/// True when every character satisfies `predicate`. Vacuously true for `""`.
///
/// # Examples
///
/// ```
/// use weft_util::strings::{all_chars, is_punctuation};
///
/// assert!(all_chars("!?.", is_punctuation));
/// assert!(!all_chars("!a", is_punctuation));
/// ```
pub fn all_chars(s: &str, predicate: CharPredicate) -> bool {
    s.chars().all(predicate)
}

/// The string is made up only of the given characters.
///
/// # Examples
///
/// ```
/// use weft_util::strings::contains_only;
///
/// assert!(contains_only("aabba", &['a', 'b']));
/// assert!(!contains_only("abc", &['a', 'b']));
/// ```
pub fn contains_only(s: &str, chars: &[char]) -> bool {
    s.chars().all(|ch| chars.contains(&ch))
}

/// Decimal digits `0-9` only, as accepted by [`digit_at`](super::digit_at).
pub fn is_digits(s: &str) -> bool {
    all_chars(s, |ch| ch.to_digit(10).is_some())
}

pub fn is_letters(s: &str) -> bool {
    all_chars(s, char::is_alphabetic)
}

pub fn is_letters_or_digits(s: &str) -> bool {
    all_chars(s, is_letter)
}

/// Empty or whitespace only.
///
/// # Examples
///
/// ```
/// use weft_util::strings::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\r\n"));
/// assert!(!is_blank(" x "));
/// ```
pub fn is_blank(s: &str) -> bool {
    all_chars(s, is_whitespace)
}

/// `None` for blank strings, the string otherwise.
pub fn null_if_blank(s: &str) -> Option<&str> {
    if is_blank(s) {
        None
    } else {
        Some(s)
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
        )
        .unwrap()
    })
}

fn mime_type_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r##"(?i)^(?:application|audio|font|image|message|model|multipart|text|video|x-[a-z0-9!#$&^_.+-]+)/[a-z0-9][a-z0-9!#$&^_.+-]*(?:\s*;\s*[a-z0-9!#$&^_.+-]+=(?:[a-z0-9!#$&^_.+-]+|"[^"]*"))*$"##,
        )
        .unwrap()
    })
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:https?|ftp)://(?:[^\s:@/]+(?::[^\s@/]*)?@)?(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*|\[[0-9a-f:.]+\])(?::\d{1,5})?(?:[/?#]\S*)?$",
        )
        .unwrap()
    })
}

/// # Examples
///
/// ```
/// use weft_util::strings::is_email_address;
///
/// assert!(is_email_address("jane.doe+news@example.co.uk"));
/// assert!(!is_email_address("jane.doe@localhost"));
/// assert!(!is_email_address("not an address"));
/// ```
pub fn is_email_address(s: &str) -> bool {
    email_regex().is_match(s)
}

/// `type/subtype`, optionally followed by `; key=value` parameters.
pub fn is_mime_type(s: &str) -> bool {
    mime_type_regex().is_match(s)
}

/// Absolute `http`, `https` or `ftp` URL.
pub fn is_url(s: &str) -> bool {
    url_regex().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_predicates() {
        assert!(is_letter('a'));
        assert!(is_letter('日'));
        assert!(is_letter('9'));
        assert!(!is_letter(' '));
        assert!(is_whitespace('\u{00A0}'));
        assert!(is_punctuation('!'));
        assert!(!is_punctuation('\t'));
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0123456789"));
        assert!(is_digits(""));
        assert!(!is_digits("12a"));
        assert!(!is_digits("1 2"));
        assert!(!is_digits("½"));
        assert!(!is_digits("²"));
        assert!(!is_digits("Ⅻ"));
    }

    #[test]
    fn test_is_letters() {
        assert!(is_letters("abcÆøå"));
        assert!(!is_letters("abc1"));
        assert!(is_letters_or_digits("abc123"));
        assert!(!is_letters_or_digits("abc-123"));
    }

    #[test]
    fn test_null_if_blank() {
        assert_eq!(null_if_blank("  "), None);
        assert_eq!(null_if_blank(""), None);
        assert_eq!(null_if_blank(" a "), Some(" a "));
    }

    #[test]
    fn test_is_mime_type() {
        assert!(is_mime_type("text/plain"));
        assert!(is_mime_type("application/vnd.ms-excel"));
        assert!(is_mime_type("text/html; charset=utf-8"));
        assert!(!is_mime_type("text"));
        assert!(!is_mime_type("bogus/plain"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://user:pw@example.com:8443/path?q=1#frag"));
        assert!(is_url("ftp://files.example.org/pub/"));
        assert!(!is_url("example.com"));
        assert!(!is_url("mailto:someone@example.com"));
        assert!(!is_url("http://exa mple.com"));
    }
}

//! Splitting text into words and key/value pairs.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Invalid pair separator pattern: {0}")]
    InvalidSeparator(#[from] regex::Error),
    #[error("No key/value pair found in: {0}")]
    MalformedPair(String),
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Words of `s`: maximal runs of letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use weft_util::strings::words;
///
/// assert_eq!(words("Hello, world! It's 9_am."), vec!["Hello", "world", "It", "s", "9_am"]);
/// ```
pub fn words(s: &str) -> Vec<&str> {
    s.split(|ch: char| !is_word_char(ch))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Splits on runs of whitespace, keeping empty leading and trailing fields.
///
/// # Examples
///
/// ```
/// use weft_util::strings::split_whitespace_runs;
///
/// assert_eq!(split_whitespace_runs("a  b\tc"), vec!["a", "b", "c"]);
/// assert_eq!(split_whitespace_runs(" a "), vec!["", "a", ""]);
/// ```
pub fn split_whitespace_runs(s: &str) -> Vec<&str> {
    whitespace_regex().split(s).collect()
}

/// Parses delimited `key<sep>value` pairs.
///
/// `pair_separator` is a regular expression; blank pairs are skipped. Keys
/// and values are trimmed and keep their input order.
///
/// # Examples
///
/// ```
/// use weft_util::strings::parse_dictionary;
///
/// let map = parse_dictionary("Server=db1; Database = sales;", ";", '=').unwrap();
/// assert_eq!(map.get("Server").map(String::as_str), Some("db1"));
/// assert_eq!(map.get("Database").map(String::as_str), Some("sales"));
/// assert_eq!(map.len(), 2);
/// ```
pub fn parse_dictionary(
    input: &str,
    pair_separator: &str,
    key_value_separator: char,
) -> Result<IndexMap<String, String>, DictionaryError> {
    let separator = Regex::new(pair_separator)?;
    let mut map = IndexMap::new();

    for pair in separator.split(input).filter(|pair| !pair.trim().is_empty()) {
        let (key, value) = pair
            .split_once(key_value_separator)
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| DictionaryError::MalformedPair(pair.to_string()))?;

        if map.insert(key.to_string(), value.to_string()).is_some() {
            return Err(DictionaryError::DuplicateKey(key.to_string()));
        }
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_unicode() {
        assert_eq!(words("naïve café—déjà vu"), vec!["naïve", "café", "déjà", "vu"]);
        assert!(words(" ,;. ").is_empty());
    }

    #[test]
    fn test_split_whitespace_runs_empty() {
        assert_eq!(split_whitespace_runs(""), vec![""]);
    }

    #[test]
    fn test_parse_dictionary_regex_separator() {
        let map = parse_dictionary("a=1 & b=2&&c=", r"&+", '=').unwrap();
        let pairs: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "")]);
    }

    #[test]
    fn test_parse_dictionary_value_keeps_separator() {
        let map = parse_dictionary("expr=a=b", ";", '=').unwrap();
        assert_eq!(map["expr"], "a=b");
    }

    #[test]
    fn test_parse_dictionary_errors() {
        assert!(matches!(
            parse_dictionary("a=1;oops", ";", '='),
            Err(DictionaryError::MalformedPair(pair)) if pair == "oops"
        ));
        assert!(matches!(
            parse_dictionary("=1", ";", '='),
            Err(DictionaryError::MalformedPair(_))
        ));
        assert!(matches!(
            parse_dictionary("a=1;a=2", ";", '='),
            Err(DictionaryError::DuplicateKey(key)) if key == "a"
        ));
        assert!(matches!(
            parse_dictionary("a=1", "(", '='),
            Err(DictionaryError::InvalidSeparator(_))
        ));
    }
}

//! Slicing, searching and joining helpers.
//!
//! Lengths and indexes count characters, not bytes.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("Input is blank")]
    Blank,
    #[error("Index {0} is out of range")]
    OutOfRange(usize),
    #[error("The value at index {index} is '{found}' which is not a digit")]
    NotDigit { index: usize, found: char },
}

/// Byte offset of the `n`th character, or the end of the string.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(at, _)| at)
}

/// The first `n` characters.
///
/// # Examples
///
/// ```
/// use weft_util::strings::left;
///
/// assert_eq!(left("Boston, MA", 6), "Boston");
/// assert_eq!(left("MA", 6), "MA");
/// ```
pub fn left(s: &str, n: usize) -> &str {
    &s[..byte_offset(s, n)]
}

/// The last `n` characters.
///
/// # Examples
///
/// ```
/// use weft_util::strings::right;
///
/// assert_eq!(right("Boston, MA", 2), "MA");
/// assert_eq!(right("MA", 6), "MA");
/// ```
pub fn right(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    &s[byte_offset(s, len.saturating_sub(n))..]
}

/// Shortens `s` to at most `limit` characters, ending in `trailing` when cut.
///
/// When `trailing` itself does not fit, the text is cut without it.
///
/// # Examples
///
/// ```
/// use weft_util::strings::truncate;
///
/// assert_eq!(truncate("abcdefghijklmnopqrst", 10, "..."), "abcdefg...");
/// assert_eq!(truncate("short", 10, "..."), "short");
/// ```
pub fn truncate(s: &str, limit: usize, trailing: &str) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let trailing_len = trailing.chars().count();
    if trailing_len >= limit {
        return left(s, limit).to_string();
    }
    let mut out = left(s, limit - trailing_len).to_string();
    out.push_str(trailing);
    out
}

/// The part of `s` after the first `search` char, or all of `s` if absent.
///
/// # Examples
///
/// ```
/// use weft_util::strings::from_index_of;
///
/// assert_eq!(from_index_of("$123,456.78", '.', false), "78");
/// assert_eq!(from_index_of("$123,456.78", '.', true), ".78");
/// assert_eq!(from_index_of("$123", '.', false), "$123");
/// ```
pub fn from_index_of(s: &str, search: char, include_search: bool) -> &str {
    match s.find(search) {
        Some(at) if include_search => &s[at..],
        Some(at) => &s[at + search.len_utf8()..],
        None => s,
    }
}

/// The part of `s` before the first `search` char, or all of `s` if absent.
///
/// # Examples
///
/// ```
/// use weft_util::strings::until_index_of;
///
/// assert_eq!(until_index_of("Sentence one. Sentence two.", '.', true), "Sentence one.");
/// assert_eq!(until_index_of("Boston, MA", ',', false), "Boston");
/// ```
pub fn until_index_of(s: &str, search: char, include_search: bool) -> &str {
    match s.find(search) {
        Some(at) if include_search => &s[..at + search.len_utf8()],
        Some(at) => &s[..at],
        None => s,
    }
}

/// Character indexes of every occurrence of `needle`, overlaps included.
///
/// # Examples
///
/// ```
/// use weft_util::strings::indexes_of;
///
/// assert_eq!(indexes_of("banana", "ana"), vec![1, 3]);
/// assert_eq!(indexes_of("banana", "x"), Vec::<usize>::new());
/// ```
pub fn indexes_of(s: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    s.char_indices()
        .enumerate()
        .filter(|(_, (at, _))| s[*at..].starts_with(needle))
        .map(|(index, _)| index)
        .collect()
}

/// The decimal digit at character `index`.
///
/// # Examples
///
/// ```
/// use weft_util::strings::digit_at;
///
/// assert_eq!(digit_at("122240861", 6), Ok(8));
/// assert!(digit_at("12a", 2).is_err());
/// ```
pub fn digit_at(s: &str, index: usize) -> Result<u32, DigitError> {
    if s.trim().is_empty() {
        return Err(DigitError::Blank);
    }
    let found = s.chars().nth(index).ok_or(DigitError::OutOfRange(index))?;
    found
        .to_digit(10)
        .ok_or(DigitError::NotDigit { index, found })
}

/// Prefixes every line of `s` with `indent` repeated `count` times.
///
/// # Examples
///
/// ```
/// use weft_util::strings::indent;
///
/// assert_eq!(indent("a\nb\n", 2, " "), "  a\n  b\n");
/// ```
pub fn indent(s: &str, count: usize, indent: &str) -> String {
    let prefix = indent.repeat(count);
    let mut out = String::with_capacity(s.len() + prefix.len());
    for line in s.split_inclusive('\n') {
        out.push_str(&prefix);
        out.push_str(line);
    }
    out
}

/// Joins with `delimiter`, using `last_delimiter` before the final item.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use weft_util::strings::join_with_last;
///
/// let items = ["Apples", "Eggs", "Bread", "Milk"];
/// assert_eq!(
///     join_with_last(&items, ", ", ", and ").as_deref(),
///     Some("Apples, Eggs, Bread, and Milk")
/// );
/// assert_eq!(join_with_last(&["Milk"], ", ", " and ").as_deref(), Some("Milk"));
/// ```
pub fn join_with_last<S: AsRef<str>>(
    items: &[S],
    delimiter: &str,
    last_delimiter: &str,
) -> Option<String> {
    let (last, init) = items.split_last()?;
    if init.is_empty() {
        return Some(last.as_ref().to_string());
    }
    let mut out = init
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(delimiter);
    out.push_str(last_delimiter);
    out.push_str(last.as_ref());
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_right_multibyte() {
        assert_eq!(left("ÆØÅabc", 2), "ÆØ");
        assert_eq!(right("abcÆØÅ", 2), "ØÅ");
        assert_eq!(left("", 3), "");
        assert_eq!(right("abc", 0), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdefghij", 10, "..."), "abcdefghij");
        assert_eq!(truncate("abcdefghijk", 10, "..."), "abcdefg...");
        assert_eq!(truncate("abcdefghijk", 2, "..."), "ab");
        assert_eq!(truncate("abcdefghijk", 5, ""), "abcde");
    }

    #[test]
    fn test_index_of_helpers() {
        assert_eq!(from_index_of("a.b.c", '.', false), "b.c");
        assert_eq!(until_index_of("a.b.c", '.', false), "a");
        assert_eq!(until_index_of(".abc", '.', false), "");
        assert_eq!(until_index_of("abc", '.', true), "abc");
        assert_eq!(from_index_of("key→value", '→', false), "value");
    }

    #[test]
    fn test_indexes_of() {
        assert_eq!(indexes_of("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(indexes_of("ÅbÅb", "b"), vec![1, 3]);
        assert_eq!(indexes_of("abc", ""), Vec::<usize>::new());
    }

    #[test]
    fn test_digit_at_errors() {
        assert_eq!(digit_at("  ", 0), Err(DigitError::Blank));
        assert_eq!(digit_at("123", 3), Err(DigitError::OutOfRange(3)));
        assert_eq!(
            digit_at("12x", 2),
            Err(DigitError::NotDigit { index: 2, found: 'x' })
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 1, "\t"), "\ta\n\tb");
        assert_eq!(indent("", 4, " "), "");
        assert_eq!(indent("a\n", 2, "-"), "--a\n");
        assert_eq!(indent("a\n\nb", 1, ">"), ">a\n>\n>b");
    }

    #[test]
    fn test_join_with_last() {
        let empty: [&str; 0] = [];
        assert_eq!(join_with_last(&empty, ", ", " and "), None);
        assert_eq!(
            join_with_last(&["a".to_string(), "b".to_string()], ", ", " or ").as_deref(),
            Some("a or b")
        );
    }
}

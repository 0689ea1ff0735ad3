//! Identifier case conversion.
//!
//! Letter case comes from the Unicode properties behind
//! [`char::is_uppercase`] and [`char::is_lowercase`]; no locale rules apply.

use serde::{Deserialize, Serialize};

/// What [`to_camel_case`] does with the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirstChar {
    #[default]
    Lower,
    Upper,
    Unchanged,
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '_'
}

/// Converts an identifier or phrase to snake case.
///
/// Runs of capitals are kept together as acronyms.
///
/// # Examples
///
/// ```
/// use weft_util::strings::to_snake_case;
///
/// assert_eq!(to_snake_case("TransactionID"), "Transaction_ID");
/// assert_eq!(to_snake_case("FirstName"), "First_Name");
/// assert_eq!(to_snake_case("CPRNumber"), "CPR_Number");
/// assert_eq!(to_snake_case("ReferenceIDNumber"), "Reference_ID_Number");
/// ```
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input
        .chars()
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .collect();

    // A non-lowercase char starts a word when it follows a non-capital (or
    // the end of an acronym) and the next char is not a capital.
    let mut split = Vec::with_capacity(chars.len() + chars.len() / 4);
    for (i, &ch) in chars.iter().enumerate() {
        let starts_word = i > 0
            && !ch.is_lowercase()
            && chars.get(i + 1).is_some_and(|next| !next.is_uppercase())
            && (!chars[i - 1].is_uppercase() || (i >= 2 && chars[i - 2].is_uppercase()));
        if starts_word {
            split.push('_');
        }
        split.push(ch);
    }

    // An acronym after a lowercase letter gets its own word.
    let mut out = String::with_capacity(split.len() + 4);
    for (i, &ch) in split.iter().enumerate() {
        out.push(ch);
        let acronym_follows = ch.is_lowercase()
            && split.get(i + 1).is_some_and(|c| c.is_uppercase())
            && split.get(i + 2).is_some_and(|c| c.is_uppercase());
        if acronym_follows {
            out.push('_');
        }
    }

    collapse_underscores(&out)
}

fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous = None;
    for ch in s.chars() {
        if ch == '_' && previous == Some('_') {
            continue;
        }
        out.push(ch);
        previous = Some(ch);
    }
    out
}

/// [`to_snake_case`] with dashes.
///
/// # Examples
///
/// ```
/// use weft_util::strings::to_dash_case;
///
/// assert_eq!(to_dash_case("mDNSResponder"), "m-DNS-Responder");
/// ```
pub fn to_dash_case(input: &str) -> String {
    to_snake_case(input).replace('_', "-")
}

/// Converts a phrase or identifier to camel case.
///
/// Whitespace, dashes and underscores before a word character are dropped
/// and that character is capitalised. A lowercase letter after `:` is also
/// capitalised.
///
/// # Examples
///
/// ```
/// use weft_util::strings::{to_camel_case, FirstChar};
///
/// assert_eq!(to_camel_case("first name", FirstChar::Lower), "firstName");
/// assert_eq!(to_camel_case("customer_id", FirstChar::Upper), "CustomerId");
/// assert_eq!(to_camel_case("HTTP request", FirstChar::Lower), "httpRequest");
/// ```
pub fn to_camel_case(input: &str, first: FirstChar) -> String {
    // Acronyms fold to title case.
    let mut folded = Vec::with_capacity(input.len());
    let mut previous_upper = false;
    for ch in input.chars() {
        let upper = ch.is_uppercase();
        if upper && previous_upper {
            folded.extend(ch.to_lowercase());
        } else {
            folded.push(ch);
        }
        previous_upper = upper;
    }

    let mut joined = String::with_capacity(folded.len());
    let mut i = 0;
    while i < folded.len() {
        let ch = folded[i];
        if is_separator(ch) {
            let run_end = folded[i..]
                .iter()
                .position(|c| !is_separator(*c))
                .map_or(folded.len(), |offset| i + offset);
            match folded.get(run_end) {
                Some(next) if next.is_alphanumeric() => {
                    joined.extend(next.to_uppercase());
                    i = run_end + 1;
                }
                _ => {
                    joined.extend(&folded[i..run_end]);
                    i = run_end;
                }
            }
            continue;
        }
        if ch.is_lowercase() && i > 0 && folded[i - 1] == ':' {
            joined.extend(ch.to_uppercase());
        } else {
            joined.push(ch);
        }
        i += 1;
    }

    let mut chars = joined.chars();
    match (first, chars.next()) {
        (FirstChar::Lower, Some(head)) => head.to_lowercase().chain(chars).collect(),
        (FirstChar::Upper, Some(head)) => head.to_uppercase().chain(chars).collect(),
        _ => joined,
    }
}

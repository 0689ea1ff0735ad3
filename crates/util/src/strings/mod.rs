//! String utilities.
//!
//! Line wrapping, predicates, slicing, case conversion and simple parsing.

mod case;
mod parse;
mod predicates;
mod slice;
mod wrap;

pub use case::{to_camel_case, to_dash_case, to_snake_case, FirstChar};
pub use parse::{parse_dictionary, split_whitespace_runs, words, DictionaryError};
pub use predicates::{
    all_chars, contains_only, is_blank, is_digits, is_email_address, is_letter, is_letters,
    is_letters_or_digits, is_mime_type, is_punctuation, is_url, is_whitespace, null_if_blank,
    CharPredicate,
};
pub use slice::{
    digit_at, from_index_of, indent, indexes_of, join_with_last, left, right, truncate,
    until_index_of, DigitError,
};
pub use wrap::{
    wrap, wrap_with, BreakSet, Reflow, Step, WrapCursor, WrapError, WrapMethod, WrapOptions,
    DEFAULT_BREAKER, DEFAULT_LINE_WIDTH,
};

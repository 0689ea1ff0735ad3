//! Greedy single-pass line wrapping.
//!
//! The engine walks the input once, measuring each segment up to and
//! including the next breaking character, and emits a breaker whenever the
//! segment would fill the current line. Words wider than a whole line (or
//! any overflowing word under [`WrapMethod::HardBreakAlways`]) are split
//! mid-word and marked with the hard breaker.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Line terminator inserted at soft breaks by default.
pub const DEFAULT_BREAKER: &str = "\r\n";

/// Default maximum line width of [`WrapOptions`].
pub const DEFAULT_LINE_WIDTH: usize = 50;

const DEFAULT_BREAK_CHARS: [char; 4] = [' ', '-', '\r', '\n'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("max line width must be greater than zero (got {max_line_width})")]
    InvalidConfiguration { max_line_width: usize },
}

/// When to split a word in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapMethod {
    /// Split every word that overflows the current line.
    HardBreakAlways,
    /// Split only words that cannot fit on any line; move the rest down.
    #[default]
    HardBreakWhenNecessary,
}

/// Set of characters at which a line may end.
///
/// Lookups for ASCII go through a table; other characters are kept in a
/// short list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BreakSet {
    ascii: [bool; 128],
    extra: Vec<char>,
}

impl BreakSet {
    /// A set with no breaking characters. Every line is hard broken.
    pub fn empty() -> Self {
        Self {
            ascii: [false; 128],
            extra: Vec::new(),
        }
    }

    /// Returns the set with `ch` added.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_util::strings::BreakSet;
    ///
    /// let set = BreakSet::default().with('/');
    /// assert!(set.contains('/'));
    /// assert!(set.contains(' '));
    /// assert!(!set.contains('_'));
    /// ```
    pub fn with(mut self, ch: char) -> Self {
        self.insert(ch);
        self
    }

    pub fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii[ch as usize] = true;
        } else if !self.extra.contains(&ch) {
            self.extra.push(ch);
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.extra.contains(&ch)
        }
    }

    /// Iterates the members, ASCII first in code point order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ascii
            .iter()
            .enumerate()
            .filter(|(_, member)| **member)
            .map(|(code, _)| code as u8 as char)
            .chain(self.extra.iter().copied())
    }

    /// Index of the first member at or after `from`.
    fn find_from(&self, chars: &[char], from: usize) -> Option<usize> {
        chars[from..]
            .iter()
            .position(|ch| self.contains(*ch))
            .map(|offset| from + offset)
    }
}

impl Default for BreakSet {
    fn default() -> Self {
        DEFAULT_BREAK_CHARS.into_iter().collect()
    }
}

impl FromIterator<char> for BreakSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}

impl From<&str> for BreakSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<String> for BreakSet {
    fn from(chars: String) -> Self {
        chars.chars().collect()
    }
}

impl From<BreakSet> for String {
    fn from(set: BreakSet) -> Self {
        set.chars().collect()
    }
}

/// Options for [`wrap_with`].
///
/// Deserializes from camelCase keys; missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use weft_util::strings::{WrapMethod, WrapOptions};
///
/// let options: WrapOptions =
///     serde_json::from_str(r#"{"maxLineWidth": 12, "method": "hardBreakAlways"}"#).unwrap();
/// assert_eq!(options.max_line_width, 12);
/// assert_eq!(options.method, WrapMethod::HardBreakAlways);
/// assert_eq!(options.breaker, "\r\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapOptions {
    /// Maximum width of each line, in characters. Must be non-zero.
    pub max_line_width: usize,
    pub method: WrapMethod,
    /// Inserted at every line boundary the engine creates.
    pub breaker: String,
    /// Inserted where a word is split mid-word, before the breaker.
    pub hard_breaker: String,
    pub break_set: BreakSet,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_LINE_WIDTH,
            method: WrapMethod::default(),
            breaker: DEFAULT_BREAKER.to_string(),
            hard_breaker: String::new(),
            break_set: BreakSet::default(),
        }
    }
}

impl WrapOptions {
    pub fn new(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            ..Self::default()
        }
    }

    pub fn method(mut self, method: WrapMethod) -> Self {
        self.method = method;
        self
    }

    pub fn breaker(mut self, breaker: impl Into<String>) -> Self {
        self.breaker = breaker.into();
        self
    }

    pub fn hard_breaker(mut self, hard_breaker: impl Into<String>) -> Self {
        self.hard_breaker = hard_breaker.into();
        self
    }

    pub fn break_set(mut self, break_set: BreakSet) -> Self {
        self.break_set = break_set;
        self
    }

    /// Checks that the options can drive the engine.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.max_line_width == 0 {
            debug!("rejecting wrap options with zero max line width");
            return Err(WrapError::InvalidConfiguration {
                max_line_width: self.max_line_width,
            });
        }
        Ok(())
    }
}

/// Position of the engine within the input and the current output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrapCursor {
    /// Index of the next unconsumed input character.
    pub string_position: usize,
    /// Columns used on the current output line since the last line boundary.
    pub line_position: usize,
}

/// Outcome of a single [`Reflow::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// Step-wise wrapping engine.
///
/// Most callers want [`wrap`] or [`wrap_with`]; `Reflow` exposes the cursor
/// between steps.
///
/// # Examples
///
/// ```
/// use weft_util::strings::{Reflow, Step, WrapOptions};
///
/// let options = WrapOptions::new(10).breaker("|");
/// let mut reflow = Reflow::new("The quick brown fox", &options).unwrap();
///
/// assert_eq!(reflow.step(), Step::Continue);
/// assert_eq!(reflow.output(), "The ");
/// assert_eq!(reflow.cursor().line_position, 4);
///
/// assert_eq!(reflow.run(), "The |quick |brown fox");
/// ```
#[derive(Debug, Clone)]
pub struct Reflow<'a> {
    chars: Vec<char>,
    options: &'a WrapOptions,
    hard_breaker_width: usize,
    cursor: WrapCursor,
    output: String,
    done: bool,
}

impl<'a> Reflow<'a> {
    /// Input no longer than the line width starts out finished, with the
    /// input as its output.
    pub fn new(input: &str, options: &'a WrapOptions) -> Result<Self, WrapError> {
        options.validate()?;
        let chars: Vec<char> = input.chars().collect();
        let mut reflow = Self {
            hard_breaker_width: options.hard_breaker.chars().count(),
            cursor: WrapCursor::default(),
            output: String::with_capacity(input.len()),
            done: false,
            chars,
            options,
        };

        if reflow.chars.len() <= options.max_line_width {
            reflow.output.push_str(input);
            reflow.cursor.string_position = reflow.chars.len();
            reflow.done = true;
        }
        Ok(reflow)
    }

    pub fn cursor(&self) -> WrapCursor {
        self.cursor
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Processes the segment ending at the next breaking character.
    ///
    /// A step that only emits a breaker leaves `string_position` in place;
    /// the step after it always consumes input.
    ///
    /// A segment ending in `\r` or `\n` closes the current line itself: the
    /// terminator takes no column, no breaker is added in front of the next
    /// line, and `line_position` restarts at 0. Already wrapped text therefore
    /// wraps to itself.
    pub fn step(&mut self) -> Step {
        if self.done {
            return Step::Done;
        }

        let len = self.chars.len();
        let width = self.options.max_line_width;
        let start = self.cursor.string_position;

        if start >= len {
            self.done = true;
            return Step::Done;
        }

        let (end, terminator) = match self.options.break_set.find_from(&self.chars, start) {
            Some(index) => (index, Some(self.chars[index])),
            None if len - start > width => (start + width, None),
            None => {
                self.push_chars(start, len - start);
                self.done = true;
                return Step::Done;
            }
        };

        // The breaking character belongs to the segment it ends.
        let word_size = end - start + 1;
        // Line terminators end the line and take no column.
        let ends_line = matches!(terminator, Some('\r' | '\n'));
        let measured = if ends_line { word_size - 1 } else { word_size };
        let line_before = self.cursor.line_position;

        let overflows = if ends_line {
            line_before + measured > width
        } else {
            line_before + measured >= width
        };

        if !overflows {
            self.push_chars(start, word_size);
            self.cursor.line_position = if ends_line { 0 } else { line_before + measured };
            return Step::Continue;
        }

        let forced = self.options.method == WrapMethod::HardBreakAlways || measured > width;

        if forced {
            let room = width
                .saturating_sub(line_before)
                .saturating_sub(self.hard_breaker_width);

            if room > 0 {
                trace!("hard break at {start} after {room} chars");
                self.push_chars(start, room.min(word_size));
                self.output.push_str(&self.options.hard_breaker);
            } else if line_before == 0 {
                // The hard breaker alone fills the line; split without it.
                self.push_chars(start, word_size.min(width));
            }
        } else if line_before == 0 {
            // Exactly fills an empty line. Moving it down would not help.
            self.push_chars(start, word_size);
            self.cursor.line_position = measured;
            return Step::Continue;
        }

        self.output.push_str(&self.options.breaker);
        self.cursor.line_position = 0;
        Step::Continue
    }

    /// Runs the engine to completion and returns the wrapped text.
    pub fn run(mut self) -> String {
        while self.step() == Step::Continue {}
        self.output
    }

    fn push_chars(&mut self, start: usize, count: usize) {
        self.output.extend(&self.chars[start..start + count]);
        self.cursor.string_position = start + count;
    }
}

/// Wrap text to `max_line_width` using the default [`WrapOptions`].
///
/// # Examples
///
/// ```
/// use weft_util::strings::wrap;
///
/// assert_eq!(wrap("The quick brown fox", 10).unwrap(), "The \r\nquick \r\nbrown fox");
/// assert_eq!(wrap("abc", 10).unwrap(), "abc");
/// assert!(wrap("abc", 0).is_err());
/// ```
pub fn wrap(input: &str, max_line_width: usize) -> Result<String, WrapError> {
    wrap_with(input, &WrapOptions::new(max_line_width))
}

/// Wrap text according to `options`.
///
/// Input no longer than the line width is returned unchanged.
///
/// # Examples
///
/// ```
/// use weft_util::strings::{wrap_with, WrapOptions};
///
/// let options = WrapOptions::new(10).breaker("|").hard_breaker("-");
/// assert_eq!(
///     wrap_with("Supercalifragilisticexpialidocious", &options).unwrap(),
///     "Supercali-|fragilist-|icexpiali-|docious"
/// );
/// ```
pub fn wrap_with(input: &str, options: &WrapOptions) -> Result<String, WrapError> {
    Ok(Reflow::new(input, options)?.run())
}

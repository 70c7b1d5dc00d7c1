//! Content-length strategies.
//!
//! Layout never assumes that a string's length is its character count. It asks
//! a [`ContentLength`] strategy for the *visible* length instead, so content
//! can carry characters that take no room on screen, such as ANSI styling
//! escapes.
//!
//! | Strategy | Counts |
//! |----------|--------|
//! | [`PlainLength`] | every character |
//! | [`AnsiLength`] | characters outside ANSI escape sequences |
//! | [`DisplayWidth`] | terminal columns (CJK = 2), ANSI escapes ignored |
//!
//! Any `Fn(&str) -> usize` is a strategy too:
//!
//! ```rust
//! use boxtable::ContentLength;
//!
//! let ignore_stars = |text: &str| text.chars().filter(|c| *c != '*').count();
//! assert_eq!(ignore_stars.visible_length("**bold**"), 4);
//! ```

use console::{measure_text_width, strip_ansi_codes};

/// Computes how many columns of a string are visible.
pub trait ContentLength {
    fn visible_length(&self, text: &str) -> usize;
}

impl<F> ContentLength for F
where
    F: Fn(&str) -> usize,
{
    fn visible_length(&self, text: &str) -> usize {
        self(text)
    }
}

/// Treats every character as visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainLength;

impl ContentLength for PlainLength {
    fn visible_length(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Ignores ANSI escape sequences; every other character counts as one.
///
/// ```rust
/// use boxtable::{AnsiLength, ContentLength};
///
/// assert_eq!(AnsiLength.visible_length("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(AnsiLength.visible_length("plain"), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiLength;

impl ContentLength for AnsiLength {
    fn visible_length(&self, text: &str) -> usize {
        strip_ansi_codes(text).chars().count()
    }
}

/// Terminal display width: ignores ANSI escapes and counts wide characters
/// as two columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayWidth;

impl ContentLength for DisplayWidth {
    fn visible_length(&self, text: &str) -> usize {
        measure_text_width(text)
    }
}

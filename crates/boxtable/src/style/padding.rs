//! Per-side cell padding.

use serde::{Deserialize, Serialize};

/// Fill character used when a side does not set its own.
pub const DEFAULT_FILL: char = ' ';

/// Space around a cell's content: a count and a fill character per side.
///
/// Fill characters are optional; an unset fill resolves to [`DEFAULT_FILL`].
///
/// # Example
///
/// ```rust
/// use boxtable::Padding;
///
/// let padding = Padding::uniform(1, 0).right_fill('.');
/// assert_eq!(padding.left, 1);
/// assert_eq!(padding.right_char(), '.');
/// assert_eq!(padding.left_char(), ' ');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_fill: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fill: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_fill: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_fill: Option<char>,
}

impl Padding {
    /// No padding on any side.
    pub const NONE: Padding = Padding::new(0, 0, 0, 0);

    /// One column of space on the left and on the right.
    pub const DEFAULT: Padding = Padding::uniform(1, 0);

    /// Padding with explicit counts for every side and default fills.
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Padding {
            left,
            top,
            right,
            bottom,
            left_fill: None,
            top_fill: None,
            right_fill: None,
            bottom_fill: None,
        }
    }

    /// Same count on left and right, and on top and bottom.
    pub const fn uniform(left_right: usize, top_bottom: usize) -> Self {
        Padding::new(left_right, top_bottom, left_right, top_bottom)
    }

    /// Like [`uniform`](Self::uniform), filling every side with `fill`.
    pub const fn uniform_with(left_right: usize, top_bottom: usize, fill: char) -> Self {
        Padding::uniform(left_right, top_bottom).fill(fill)
    }

    /// Sets the fill character of all four sides.
    pub const fn fill(mut self, fill: char) -> Self {
        self.left_fill = Some(fill);
        self.top_fill = Some(fill);
        self.right_fill = Some(fill);
        self.bottom_fill = Some(fill);
        self
    }

    pub const fn left_fill(mut self, fill: char) -> Self {
        self.left_fill = Some(fill);
        self
    }

    pub const fn top_fill(mut self, fill: char) -> Self {
        self.top_fill = Some(fill);
        self
    }

    pub const fn right_fill(mut self, fill: char) -> Self {
        self.right_fill = Some(fill);
        self
    }

    pub const fn bottom_fill(mut self, fill: char) -> Self {
        self.bottom_fill = Some(fill);
        self
    }

    pub fn left_char(&self) -> char {
        self.left_fill.unwrap_or(DEFAULT_FILL)
    }

    pub fn top_char(&self) -> char {
        self.top_fill.unwrap_or(DEFAULT_FILL)
    }

    pub fn right_char(&self) -> char {
        self.right_fill.unwrap_or(DEFAULT_FILL)
    }

    pub fn bottom_char(&self) -> char {
        self.bottom_fill.unwrap_or(DEFAULT_FILL)
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

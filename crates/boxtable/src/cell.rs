//! Table cells and their rendering into fixed-width lines.

use std::fmt::Display;
use std::iter::repeat_n;

use crate::error::{Result, TableError};
use crate::measure::ContentLength;
use crate::style::{Padding, Theme};
use crate::wrap::wrap;

/// What a cell needs from its row and table to render.
///
/// Rows build one of these on the fly, so cells never hold a reference back
/// to their owners.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub measure: &'a dyn ContentLength,
    /// Padding set on the enclosing row, if any.
    pub row_padding: Option<&'a Padding>,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, measure: &'a dyn ContentLength) -> Self {
        RenderContext {
            theme,
            measure,
            row_padding: None,
        }
    }

    pub fn with_row_padding(mut self, padding: Option<&'a Padding>) -> Self {
        self.row_padding = padding;
        self
    }

    /// Resolves padding: the cell's own, else the row's, else the theme's.
    pub fn padding_for(&self, cell: Option<&'a Padding>) -> &'a Padding {
        cell.or(self.row_padding).unwrap_or(&self.theme.padding)
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("theme", self.theme)
            .field("row_padding", &self.row_padding)
            .finish_non_exhaustive()
    }
}

/// A single cell: content plus an optional fixed width and padding.
///
/// # Example
///
/// ```rust
/// use boxtable::{Cell, PlainLength, RenderContext, Theme};
///
/// let cell = Cell::new("hi");
/// let ctx = RenderContext::new(&Theme::SINGLE_LINE, &PlainLength);
/// assert_eq!(cell.render(&ctx, 4, None).unwrap(), vec!["│hi  "]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    content: String,
    width: Option<usize>,
    padding: Option<Padding>,
}

impl Cell {
    /// Creates an auto-width cell holding `content`.
    pub fn new(content: impl Display) -> Self {
        Cell {
            content: content.to_string(),
            width: None,
            padding: None,
        }
    }

    /// Replaces the content.
    pub fn content(mut self, content: impl Display) -> Self {
        self.content = content.to_string();
        self
    }

    /// Fixes the cell's width instead of sharing the row's leftover space.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the row and theme padding for this cell.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_padding(&self) -> Option<&Padding> {
        self.padding.as_ref()
    }

    pub fn set_content(&mut self, content: impl Display) {
        self.content = content.to_string();
    }

    /// `None` makes the cell dynamic again.
    pub fn set_width(&mut self, width: Option<usize>) {
        self.width = width;
    }

    pub fn set_padding(&mut self, padding: Option<Padding>) {
        self.padding = padding;
    }

    /// Renders the cell into lines `width` visible columns wide, each
    /// prefixed with the theme's vertical glyph.
    ///
    /// Lines are: top padding, wrapped content, then bottom padding. With a
    /// `height`, at least `height` bottom lines are emitted, which stretches
    /// the cell to match taller cells of its row; callers keep as many lines
    /// as they need.
    ///
    /// # Errors
    ///
    /// [`TableError::CellTooNarrow`] when left and right padding leave no
    /// room for content.
    pub fn render(
        &self,
        ctx: &RenderContext<'_>,
        width: usize,
        height: Option<usize>,
    ) -> Result<Vec<String>> {
        let padding = ctx.padding_for(self.padding.as_ref());
        if padding.horizontal() >= width {
            return Err(TableError::CellTooNarrow {
                width,
                left: padding.left,
                right: padding.right,
            });
        }

        let vertical = ctx.theme.vertical_str();
        let mut lines = Vec::new();

        let top: String = repeat_n(padding.top_char(), width).collect();
        lines.extend(repeat_n(format!("{}{}", vertical, top), padding.top));

        for line in self.content_lines(ctx.measure, padding, width) {
            lines.push(format!("{}{}", vertical, line));
        }

        let bottom_height = padding.bottom.max(height.unwrap_or(0));
        let bottom: String = repeat_n(padding.bottom_char(), width).collect();
        lines.extend(repeat_n(format!("{}{}", vertical, bottom), bottom_height));

        Ok(lines)
    }

    /// Wrapped content with left/right padding, filled out to `width`.
    fn content_lines(
        &self,
        measure: &dyn ContentLength,
        padding: &Padding,
        width: usize,
    ) -> Vec<String> {
        let inner = width - padding.horizontal();
        let filler = if padding.right > 0 {
            padding.right_char()
        } else {
            ' '
        };

        wrap(&self.content, inner, measure)
            .into_iter()
            .map(|line| {
                let mut padded: String = repeat_n(padding.left_char(), padding.left).collect();
                padded.push_str(&line);
                padded.extend(repeat_n(padding.right_char(), padding.right));
                let visible = measure.visible_length(&padded);
                padded.extend(repeat_n(filler, width.saturating_sub(visible)));
                padded
            })
            .collect()
    }
}

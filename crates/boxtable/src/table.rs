//! Tables and whole-table rendering.
//!
//! A table renders row by row. Every row gets its own column widths from
//! [`allocate_widths`], a top border stitched against the previous row's
//! columns, and its cell lines. One bottom border closes the last row.
//!
//! ```rust
//! use boxtable::{Cell, Row, Table, Theme};
//!
//! let table = Table::new()
//!     .width(8)
//!     .row(Row::from_contents(["ab", "cd"]))
//!     .row(Row::new().cell(Cell::new("wide")));
//!
//! assert_eq!(
//!     table.render().unwrap(),
//!     vec![
//!         "┌────┬────┐",
//!         "│ab  │cd  │",
//!         "├────┴───┐",
//!         "│wide    │",
//!         "└────────┘",
//!     ]
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::border::{bottom_border, top_border};
use crate::cell::RenderContext;
use crate::error::Result;
use crate::layout::allocate_widths;
use crate::measure::{ContentLength, PlainLength};
use crate::row::Row;
use crate::style::Theme;

/// Table width used when none is set.
pub const DEFAULT_WIDTH: usize = 100;

/// A bordered table: rows, a total width, a theme and a content-length
/// strategy.
///
/// The width is the sum of every row's column widths; border glyphs come on
/// top of it.
#[derive(Clone)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
    theme: Theme,
    measure: Arc<dyn ContentLength + Send + Sync>,
}

impl Table {
    /// An empty table, [`DEFAULT_WIDTH`] wide, with the single-line theme
    /// and plain content lengths.
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            width: DEFAULT_WIDTH,
            theme: Theme::default(),
            measure: Arc::new(PlainLength),
        }
    }

    /// Appends a row.
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Sets the total width shared by the columns of each row.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the strategy measuring visible content length.
    ///
    /// ```rust
    /// use boxtable::{AnsiLength, Row, Table, Theme};
    ///
    /// let table = Table::new()
    ///     .width(5)
    ///     .theme(Theme::NO_LINE)
    ///     .content_length(AnsiLength)
    ///     .row(Row::from_contents(["\x1b[32mok\x1b[0m"]));
    ///
    /// assert_eq!(table.render().unwrap(), vec!["\x1b[32mok\x1b[0m   "]);
    /// ```
    pub fn content_length<M>(mut self, measure: M) -> Self
    where
        M: ContentLength + Send + Sync + 'static,
    {
        self.measure = Arc::new(measure);
        self
    }

    /// Appends a row in place and returns it for further changes.
    pub fn push_row(&mut self, row: Row) -> &mut Row {
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn get_width(&self) -> usize {
        self.width
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders the table into display lines, without line separators.
    ///
    /// Blank border lines (all glyphs omitted) are left out. Rendering does
    /// not change the table, so repeated calls give the same lines.
    ///
    /// # Errors
    ///
    /// Any [`TableError`](crate::TableError) raised while allocating widths,
    /// rendering cells or stitching borders. No lines are returned then.
    pub fn render(&self) -> Result<Vec<String>> {
        debug!(
            rows = self.rows.len(),
            width = self.width,
            "rendering table"
        );

        let ctx = RenderContext::new(&self.theme, self.measure.as_ref());
        let mut lines = Vec::new();
        let mut previous: Option<Vec<usize>> = None;

        for (index, row) in self.rows.iter().enumerate() {
            let widths = allocate_widths(self.width, &row.explicit_widths())?;

            let top = top_border(&widths, previous.as_deref(), &self.theme)?;
            push_border(&mut lines, top);

            let row_lines = row.render(&ctx, &widths)?;
            trace!(
                row = index,
                widths = ?widths,
                height = row_lines.len(),
                "rendered row"
            );
            lines.extend(row_lines);
            previous = Some(widths);
        }

        if let Some(widths) = previous {
            push_border(&mut lines, bottom_border(&widths, &self.theme));
        }

        Ok(lines)
    }

    /// Renders the table and joins the lines with `\n`.
    pub fn render_to_string(&self) -> Result<String> {
        Ok(self.render()?.join("\n"))
    }
}

fn push_border(lines: &mut Vec<String>, border: String) {
    if border.trim().is_empty() {
        debug!("skipping blank border line");
    } else {
        lines.push(border);
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows)
            .field("width", &self.width)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

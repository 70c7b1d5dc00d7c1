//! Table rows.

use std::fmt::Display;

use crate::cell::{Cell, RenderContext};
use crate::error::Result;
use crate::style::Padding;

/// An ordered list of cells, rendered side by side.
///
/// # Example
///
/// ```rust
/// use boxtable::{Cell, Padding, Row};
///
/// let row = Row::new()
///     .padding(Padding::DEFAULT)
///     .cell(Cell::new("id").width(4))
///     .cell(Cell::new("description"));
/// assert_eq!(row.cells().len(), 2);
///
/// let row = Row::from_contents(["a", "b", "c"]);
/// assert_eq!(row.cells()[2].get_content(), "c");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    padding: Option<Padding>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// A row of auto-width cells, one per item.
    pub fn from_contents<T, I>(contents: I) -> Self
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        Row {
            cells: contents.into_iter().map(Cell::new).collect(),
            padding: None,
        }
    }

    /// Appends a cell.
    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Padding for cells of this row that do not set their own.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Appends a cell in place and returns it for further changes.
    pub fn push_cell(&mut self, cell: Cell) -> &mut Cell {
        self.cells.push(cell);
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    pub fn set_padding(&mut self, padding: Option<Padding>) {
        self.padding = padding;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn get_padding(&self) -> Option<&Padding> {
        self.padding.as_ref()
    }

    /// Explicit width of every cell, `None` for dynamic cells.
    pub(crate) fn explicit_widths(&self) -> Vec<Option<usize>> {
        self.cells.iter().map(Cell::get_width).collect()
    }

    /// Renders the row's cells side by side with the given column widths.
    ///
    /// Cells are rendered once to find the tallest, then again stretched to
    /// that height. Each output line joins the cells' lines and closes with
    /// the theme's vertical glyph.
    pub fn render(&self, ctx: &RenderContext<'_>, widths: &[usize]) -> Result<Vec<String>> {
        let ctx = ctx.with_row_padding(self.padding.as_ref());

        let mut height = 0;
        for (cell, &width) in self.cells.iter().zip(widths) {
            height = height.max(cell.render(&ctx, width, None)?.len());
        }

        let columns = self
            .cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| cell.render(&ctx, width, Some(height)))
            .collect::<Result<Vec<_>>>()?;

        let vertical = ctx.theme.vertical_str();
        let lines = (0..height)
            .map(|i| {
                let mut line: String = columns.iter().map(|col| col[i].as_str()).collect();
                line.push_str(&vertical);
                line
            })
            .collect();

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::PlainLength;
    use crate::style::Theme;
    use crate::TableError;

    #[test]
    fn builder() {
        let row = Row::new().cell(Cell::new("a")).cell(Cell::new("b").width(2));
        assert_eq!(row.explicit_widths(), vec![None, Some(2)]);
        assert!(row.get_padding().is_none());
    }

    #[test]
    fn push_cell_returns_new_cell() {
        let mut row = Row::new();
        row.push_cell(Cell::new("x")).set_width(Some(3));
        assert_eq!(row.cells()[0].get_width(), Some(3));
    }

    #[test]
    fn render_single_cell() {
        let theme = Theme::SINGLE_LINE;
        let ctx = RenderContext::new(&theme, &PlainLength);
        let lines = Row::from_contents(["hi"]).render(&ctx, &[7]).unwrap();
        assert_eq!(lines, vec!["│hi     │"]);
    }

    #[test]
    fn render_equalizes_heights() {
        let theme = Theme::SINGLE_LINE;
        let ctx = RenderContext::new(&theme, &PlainLength);
        let row = Row::from_contents(["a b c", "x"]);
        let lines = row.render(&ctx, &[1, 2]).unwrap();
        assert_eq!(lines, vec!["│a│x │", "│b│  │", "│c│  │"]);
    }

    #[test]
    fn row_padding_applies_to_cells() {
        let theme = Theme::NO_LINE;
        let ctx = RenderContext::new(&theme, &PlainLength);
        let row = Row::from_contents(["a", "b"]).padding(Padding::new(1, 0, 0, 0).left_fill('.'));
        assert_eq!(row.render(&ctx, &[3, 3]).unwrap(), vec![".a .b "]);
    }

    #[test]
    fn render_propagates_cell_error() {
        let theme = Theme::SINGLE_PADDED_LINE;
        let ctx = RenderContext::new(&theme, &PlainLength);
        let err = Row::from_contents(["a", "b"]).render(&ctx, &[4, 1]).unwrap_err();
        assert!(matches!(err, TableError::CellTooNarrow { width: 1, .. }));
    }
}

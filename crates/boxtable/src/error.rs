//! Error types for table layout and rendering.

use thiserror::Error;

/// Errors that can occur while loading a theme or rendering a table.
///
/// Rendering errors abort the whole render: no partial output is produced.
#[derive(Debug, Error)]
pub enum TableError {
    /// The allocated column widths of a row do not add up to the table width.
    ///
    /// Raised when fixed widths exceed the table width, and for rows without cells.
    #[error("row width does not match table width: expected {expected} but got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// A cell's horizontal padding leaves no room for content.
    #[error("cell of width {width} is too narrow for padding (left {left}, right {right})")]
    CellTooNarrow {
        width: usize,
        left: usize,
        right: usize,
    },

    /// Border reconciliation hit a glyph it does not know how to join.
    #[error("do not know how to replace '{glyph}' at border offset {offset}")]
    UnrecognizedJunction { glyph: char, offset: usize },

    /// A theme file could not be read.
    #[error("failed to read theme: {0}")]
    ThemeIo(#[from] std::io::Error),

    /// A theme document is not valid YAML for a theme.
    #[error("invalid theme definition: {0}")]
    ThemeParse(#[from] serde_yaml::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

//! # Boxtable - Box-Drawing Text Tables
//!
//! `boxtable` lays out rows of cells into a bordered grid of plain-text
//! lines. Column widths are allocated from a fixed table width, content is
//! word-wrapped and padded into its cell, and borders are stitched between
//! rows even when consecutive rows split the table into different columns.
//!
//! ## Core Concepts
//!
//! - [`Table`]: rows plus a total width, a [`Theme`] and a content-length strategy
//! - [`Row`] / [`Cell`]: the grid model, built with chained calls
//! - [`Theme`]: border glyphs (any of which can be omitted) and default [`Padding`]
//! - [`ContentLength`]: how many columns of a string are visible, so styled
//!   content ([`AnsiLength`]) lays out like plain content
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::{Cell, Row, Table, Theme};
//!
//! let table = Table::new()
//!     .width(12)
//!     .theme(Theme::SINGLE_PADDED_LINE)
//!     .row(Row::from_contents(["name", "qty"]))
//!     .row(Row::new().cell(Cell::new("apples").width(8)).cell(Cell::new("3")));
//!
//! for line in table.render().unwrap() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Width Allocation
//!
//! Cells with an explicit width keep it; the rest share what is left
//! evenly, and the remainder of that division goes to the last column:
//!
//! ```rust
//! use boxtable::allocate_widths;
//!
//! assert_eq!(allocate_widths(11, &[None, Some(3), None]).unwrap(), vec![4, 3, 4]);
//! ```
//!
//! ## Styled Content
//!
//! ```rust
//! use boxtable::{AnsiLength, Row, Table};
//!
//! let table = Table::new()
//!     .width(6)
//!     .content_length(AnsiLength)
//!     .row(Row::from_contents(["\x1b[31merror\x1b[0m"]));
//!
//! let lines = table.render().unwrap();
//! assert_eq!(lines[1], "│\x1b[31merror\x1b[0m │");
//! ```
//!
//! ## Diagnostics
//!
//! Rendering emits `tracing` events (`debug` per table, `trace` per row).
//! Install any subscriber to see them; none is installed by this crate.

mod border;
mod cell;
mod error;
mod layout;
mod measure;
mod row;
pub mod style;
mod table;
mod wrap;

// Error type
pub use error::{Result, TableError};

// Model and rendering
pub use cell::{Cell, RenderContext};
pub use row::Row;
pub use table::{Table, DEFAULT_WIDTH};

// Styling
pub use style::{Padding, Theme, DEFAULT_FILL};

// Content length strategies
pub use measure::{AnsiLength, ContentLength, DisplayWidth, PlainLength};

// Layout building blocks
pub use border::{bottom_border, top_border};
pub use layout::allocate_widths;
pub use wrap::wrap;

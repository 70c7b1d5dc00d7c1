//! Horizontal border synthesis.
//!
//! Borders are built from a row's column widths. A row's top border also has
//! to show where the previous row's columns ended, since consecutive rows
//! may split the table differently:
//!
//! ```text
//! │aaaa│bbbb│
//! ├──┬─┴────┤
//! │cc│dddddd│
//! ```
//!
//! Empty glyph slots of the theme are skipped: they take no room and are
//! never written into a border.

use crate::error::{Result, TableError};
use crate::style::Theme;

/// Draws a horizontal line over `widths`, joining columns with `joint`.
fn line(
    widths: &[usize],
    left: Option<char>,
    joint: Option<char>,
    right: Option<char>,
    theme: &Theme,
) -> Vec<char> {
    let mut out = Vec::new();
    for (i, &width) in widths.iter().enumerate() {
        let edge = if i == 0 { left } else { joint };
        out.extend(edge);
        if let Some(horizontal) = theme.horizontal {
            out.extend(std::iter::repeat_n(horizontal, width));
        }
    }
    out.extend(right);
    out
}

/// Bottom border for a row with the given column widths.
///
/// ```rust
/// use boxtable::{bottom_border, Theme};
///
/// assert_eq!(bottom_border(&[2, 3], &Theme::SINGLE_LINE), "└──┴───┘");
/// assert_eq!(bottom_border(&[2, 3], &Theme::NO_LINE), "");
/// ```
pub fn bottom_border(widths: &[usize], theme: &Theme) -> String {
    line(
        widths,
        theme.bottom_left,
        theme.bottom_intersect,
        theme.bottom_right,
        theme,
    )
    .into_iter()
    .collect()
}

/// Top border for a row, reconciled with the previous row's column edges.
///
/// Without a previous row this is a plain top edge. With one, the left
/// corner becomes a left junction, and every column edge of the previous
/// row turns the glyph under it into the matching junction:
///
/// | under the edge | becomes |
/// |----------------|---------|
/// | top intersect  | cross |
/// | horizontal     | bottom intersect |
/// | top-right      | right intersect |
///
/// Edges falling past the end of the border are ignored. Corner and
/// intersect glyphs the theme omits take no column, so edges shift left
/// accordingly.
///
/// # Errors
///
/// [`TableError::UnrecognizedJunction`] if an edge lands on any other glyph.
///
/// # Example
///
/// ```rust
/// use boxtable::{top_border, Theme};
///
/// let theme = Theme::SINGLE_LINE;
/// assert_eq!(top_border(&[2, 3], None, &theme).unwrap(), "┌──┬───┐");
/// assert_eq!(top_border(&[2, 3], Some(&[2, 3]), &theme).unwrap(), "├──┼───┤");
/// assert_eq!(top_border(&[2, 3], Some(&[4, 1]), &theme).unwrap(), "├──┬─┴─┤");
/// ```
pub fn top_border(widths: &[usize], previous: Option<&[usize]>, theme: &Theme) -> Result<String> {
    let mut border = line(
        widths,
        theme.top_left,
        theme.top_intersect,
        theme.top_right,
        theme,
    );

    if let Some(previous) = previous {
        // Omitted glyphs take no column.
        let lead = usize::from(theme.top_left.is_some());
        let joint = usize::from(theme.top_intersect.is_some());
        let drawn = theme.horizontal.is_some();

        if lead == 1 {
            if let (Some(first), Some(left)) = (border.first_mut(), theme.left_intersect) {
                *first = left;
            }
        }

        let mut offset = lead;
        for &width in previous {
            if drawn {
                offset += width;
            }
            if let Some(&current) = border.get(offset) {
                let replacement = junction(current, theme).ok_or(
                    TableError::UnrecognizedJunction {
                        glyph: current,
                        offset,
                    },
                )?;
                if let Some(glyph) = replacement {
                    border[offset] = glyph;
                }
            }
            offset += joint;
        }
    }

    Ok(border.into_iter().collect())
}

/// The glyph replacing `current` where a previous column edge meets it.
///
/// The outer `None` flags an unknown glyph; the inner `None` means the
/// theme has no glyph for the junction and `current` stays.
fn junction(current: char, theme: &Theme) -> Option<Option<char>> {
    let is = |slot: Option<char>| slot == Some(current);
    if is(theme.top_intersect) {
        Some(theme.cross)
    } else if is(theme.horizontal) {
        Some(theme.bottom_intersect)
    } else if is(theme.top_right) {
        Some(theme.right_intersect)
    } else {
        None
    }
}

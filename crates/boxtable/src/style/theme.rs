//! Border glyph sets.
//!
//! A [`Theme`] names the eleven glyphs a table border is drawn with, plus the
//! padding cells fall back to when neither the cell nor its row sets one.
//!
//! Each glyph slot is optional. An empty slot is omitted from the output
//! entirely: it takes no width and is never replaced by a space. This is how
//! [`Theme::NO_LINE`] renders bare content without any border.
//!
//! # Predefined Themes
//!
//! | Theme | Sample |
//! |-------|--------|
//! | [`Theme::SINGLE_LINE`] | `┌─┬─┐` |
//! | [`Theme::SINGLE_PADDED_LINE`] | `┌─┬─┐` with one column of padding |
//! | [`Theme::DOUBLE_LINE`] | `╔═╦═╗` |
//! | [`Theme::HEAVY`] | `┏━┳━┓` |
//! | [`Theme::ROUNDED`] | `╭─┬─╮` |
//! | [`Theme::ASCII`] | `+-+-+` |
//! | [`Theme::NO_LINE`] | nothing |
//!
//! # From YAML
//!
//! ```rust
//! use boxtable::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! horizontal: "="
//! vertical: "!"
//! top_left: "#"
//! top_right: "#"
//! padding:
//!   left: 1
//!   right: 1
//! "##).unwrap();
//!
//! assert_eq!(theme.horizontal, Some('='));
//! assert_eq!(theme.cross, None);
//! assert_eq!(theme.padding.left, 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::padding::Padding;
use crate::error::Result;

/// Border glyphs and default padding for a table.
///
/// `None` in any glyph slot means "omit this glyph".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Four-way junction: `┼`
    pub cross: Option<char>,
    /// Horizontal line: `─`
    pub horizontal: Option<char>,
    /// Vertical line: `│`
    pub vertical: Option<char>,
    pub top_left: Option<char>,
    /// Junction on the top edge: `┬`
    pub top_intersect: Option<char>,
    pub top_right: Option<char>,
    /// Junction on the left edge: `├`
    pub left_intersect: Option<char>,
    /// Junction on the right edge: `┤`
    pub right_intersect: Option<char>,
    pub bottom_left: Option<char>,
    /// Junction on the bottom edge: `┴`
    pub bottom_intersect: Option<char>,
    pub bottom_right: Option<char>,
    /// Padding used by rows and cells that do not set their own.
    #[serde(default)]
    pub padding: Padding,
}

impl Theme {
    pub const DOUBLE_LINE: Theme = Theme::from_glyphs(
        ['╬', '═', '║', '╔', '╦', '╗', '╠', '╣', '╚', '╩', '╝'],
        Padding::NONE,
    );

    pub const SINGLE_LINE: Theme = Theme::from_glyphs(
        ['┼', '─', '│', '┌', '┬', '┐', '├', '┤', '└', '┴', '┘'],
        Padding::NONE,
    );

    pub const SINGLE_PADDED_LINE: Theme = Theme::from_glyphs(
        ['┼', '─', '│', '┌', '┬', '┐', '├', '┤', '└', '┴', '┘'],
        Padding::DEFAULT,
    );

    pub const HEAVY: Theme = Theme::from_glyphs(
        ['╋', '━', '┃', '┏', '┳', '┓', '┣', '┫', '┗', '┻', '┛'],
        Padding::NONE,
    );

    pub const ROUNDED: Theme = Theme::from_glyphs(
        ['┼', '─', '│', '╭', '┬', '╮', '├', '┤', '╰', '┴', '╯'],
        Padding::NONE,
    );

    pub const ASCII: Theme = Theme::from_glyphs(
        ['+', '-', '|', '+', '+', '+', '+', '+', '+', '+', '+'],
        Padding::NONE,
    );

    /// No borders at all: only padded content is rendered.
    pub const NO_LINE: Theme = Theme {
        cross: None,
        horizontal: None,
        vertical: None,
        top_left: None,
        top_intersect: None,
        top_right: None,
        left_intersect: None,
        right_intersect: None,
        bottom_left: None,
        bottom_intersect: None,
        bottom_right: None,
        padding: Padding::NONE,
    };

    /// Builds a theme from glyphs in the order cross, horizontal, vertical,
    /// top-left, top-intersect, top-right, left-intersect, right-intersect,
    /// bottom-left, bottom-intersect, bottom-right.
    pub const fn from_glyphs(glyphs: [char; 11], padding: Padding) -> Self {
        let [i, h, v, tl, ti, tr, li, ri, bl, bi, br] = glyphs;
        Theme {
            cross: Some(i),
            horizontal: Some(h),
            vertical: Some(v),
            top_left: Some(tl),
            top_intersect: Some(ti),
            top_right: Some(tr),
            left_intersect: Some(li),
            right_intersect: Some(ri),
            bottom_left: Some(bl),
            bottom_intersect: Some(bi),
            bottom_right: Some(br),
            padding,
        }
    }

    /// A theme that draws every border position with the same glyph.
    pub const fn uniform(glyph: char) -> Self {
        Theme::from_glyphs([glyph; 11], Padding::NONE)
    }

    /// Loads a theme from a YAML document.
    ///
    /// Missing glyph keys are left empty, so a document only needs the glyphs
    /// it actually wants drawn.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Replaces the default padding.
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub const fn with_cross(mut self, glyph: Option<char>) -> Self {
        self.cross = glyph;
        self
    }

    pub const fn with_horizontal(mut self, glyph: Option<char>) -> Self {
        self.horizontal = glyph;
        self
    }

    pub const fn with_vertical(mut self, glyph: Option<char>) -> Self {
        self.vertical = glyph;
        self
    }

    /// Sets the four corner glyphs: top-left, top-right, bottom-left, bottom-right.
    pub const fn with_corners(mut self, corners: [Option<char>; 4]) -> Self {
        let [tl, tr, bl, br] = corners;
        self.top_left = tl;
        self.top_right = tr;
        self.bottom_left = bl;
        self.bottom_right = br;
        self
    }

    /// Sets the four edge junctions: top, left, right, bottom.
    pub const fn with_intersects(mut self, intersects: [Option<char>; 4]) -> Self {
        let [top, left, right, bottom] = intersects;
        self.top_intersect = top;
        self.left_intersect = left;
        self.right_intersect = right;
        self.bottom_intersect = bottom;
        self
    }

    /// The left-edge glyph every cell line starts with, or `""` when omitted.
    pub(crate) fn vertical_str(&self) -> String {
        self.vertical.map(String::from).unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::SINGLE_LINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_line() {
        assert_eq!(Theme::default(), Theme::SINGLE_LINE);
        assert_eq!(Theme::default().padding, Padding::NONE);
    }

    #[test]
    fn glyph_order() {
        let theme = Theme::DOUBLE_LINE;
        assert_eq!(theme.cross, Some('╬'));
        assert_eq!(theme.horizontal, Some('═'));
        assert_eq!(theme.vertical, Some('║'));
        assert_eq!(theme.top_left, Some('╔'));
        assert_eq!(theme.top_intersect, Some('╦'));
        assert_eq!(theme.top_right, Some('╗'));
        assert_eq!(theme.left_intersect, Some('╠'));
        assert_eq!(theme.right_intersect, Some('╣'));
        assert_eq!(theme.bottom_left, Some('╚'));
        assert_eq!(theme.bottom_intersect, Some('╩'));
        assert_eq!(theme.bottom_right, Some('╝'));
    }

    #[test]
    fn padded_line_differs_only_in_padding() {
        assert_eq!(
            Theme::SINGLE_PADDED_LINE,
            Theme::SINGLE_LINE.with_padding(Padding::DEFAULT)
        );
    }

    #[test]
    fn uniform() {
        let theme = Theme::uniform('*');
        assert_eq!(theme.cross, Some('*'));
        assert_eq!(theme.bottom_right, Some('*'));
        assert_eq!(theme.vertical_str(), "*");
    }

    #[test]
    fn no_line_vertical_is_empty() {
        assert_eq!(Theme::NO_LINE.vertical_str(), "");
    }

    #[test]
    fn builder_setters() {
        let theme = Theme::NO_LINE
            .with_horizontal(Some('-'))
            .with_corners([Some('/'), Some('\\'), Some('\\'), Some('/')])
            .with_intersects([Some('v'), None, None, Some('^')]);
        assert_eq!(theme.horizontal, Some('-'));
        assert_eq!(theme.top_right, Some('\\'));
        assert_eq!(theme.top_intersect, Some('v'));
        assert_eq!(theme.left_intersect, None);
        assert_eq!(theme.bottom_intersect, Some('^'));
        assert_eq!(theme.vertical, None);
    }

    #[test]
    fn from_yaml_missing_glyphs_are_omitted() {
        let theme = Theme::from_yaml("horizontal: '~'\nvertical: null").unwrap();
        assert_eq!(theme.horizontal, Some('~'));
        assert_eq!(theme.vertical, None);
        assert_eq!(theme.top_left, None);
        assert_eq!(theme.padding, Padding::NONE);
    }

    #[test]
    fn from_yaml_rejects_multi_char_glyph() {
        let result = Theme::from_yaml("horizontal: '--'");
        assert!(matches!(result, Err(crate::TableError::ThemeParse(_))));
    }

    #[test]
    fn yaml_roundtrip_of_predefined_theme() {
        let yaml = serde_yaml::to_string(&Theme::SINGLE_PADDED_LINE).unwrap();
        let theme = Theme::from_yaml(&yaml).unwrap();
        assert_eq!(theme, Theme::SINGLE_PADDED_LINE);
    }
}

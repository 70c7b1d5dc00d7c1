//! Word wrapping measured through a content-length strategy.
//!
//! Explicit newlines always start a new line. Within a line, text breaks at
//! spaces when it can; a single word wider than the limit is broken
//! mid-word. Widths are visible lengths, so invisible characters never push
//! a word onto the next line.

use crate::measure::ContentLength;

/// Wraps `text` so that every line's visible length fits within `width`.
///
/// Always returns at least one line. A `width` of zero is treated as one.
/// A line that already fits is returned untouched, spacing included.
///
/// # Example
///
/// ```rust
/// use boxtable::{wrap, PlainLength};
///
/// let lines = wrap("hello world foo bar", 11, &PlainLength);
/// assert_eq!(lines, vec!["hello world", "foo bar"]);
///
/// let lines = wrap("a\nb", 10, &PlainLength);
/// assert_eq!(lines, vec!["a", "b"]);
/// ```
pub fn wrap(text: &str, width: usize, measure: &dyn ContentLength) -> Vec<String> {
    let width = width.max(1);
    text.split('\n')
        .flat_map(|segment| wrap_segment(segment, width, measure))
        .collect()
}

fn wrap_segment(segment: &str, width: usize, measure: &dyn ContentLength) -> Vec<String> {
    if measure.visible_length(segment) <= width {
        return vec![segment.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in segment.split(' ').filter(|w| !w.is_empty()) {
        if !current.is_empty() {
            let candidate = format!("{} {}", current, word);
            if measure.visible_length(&candidate) <= width {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if measure.visible_length(word) <= width {
            current = word.to_string();
        } else {
            let mut pieces = break_word(word, width, measure);
            // The tail may still share its line with the next word.
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest run of characters after an escape introducer still treated as
/// part of the sequence.
const MAX_ESCAPE_LEN: usize = 64;

/// Splits a word into pieces no wider than `width`.
///
/// Each piece is the longest prefix that fits, and holds at least one
/// character so a glyph wider than `width` cannot stall the split.
fn break_word(word: &str, width: usize, measure: &dyn ContentLength) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let cut = fitting_prefix(rest, width, measure);
        pieces.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    pieces
}

/// Byte length of the longest prefix of `text` that fits within `width`.
///
/// The scan stops at the first prefix past `width` that does not end inside
/// an escape sequence, so a piece costs measurements in proportion to its
/// own length rather than the whole word.
fn fitting_prefix(text: &str, width: usize, measure: &dyn ContentLength) -> usize {
    let mut cut = 0;
    let mut escape: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        escape = match escape {
            _ if ch == '\x1b' => Some(0),
            Some(_) if ch.is_ascii_alphabetic() || matches!(ch, '~' | '\x07') => None,
            Some(len) if len < MAX_ESCAPE_LEN => Some(len + 1),
            _ => None,
        };

        let end = idx + ch.len_utf8();
        if cut == 0 || measure.visible_length(&text[..end]) <= width {
            cut = end;
        } else if escape.is_none() {
            break;
        }
    }

    cut
}

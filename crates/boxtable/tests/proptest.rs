//! Property-based tests for layout and rendering using proptest.

use boxtable::{
    allocate_widths, wrap, AnsiLength, Cell, ContentLength, Padding, PlainLength, RenderContext,
    Row, Table, TableError, Theme,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A table width plus explicit widths whose fixed part fits inside it.
fn fitting_columns() -> impl Strategy<Value = (usize, Vec<Option<usize>>)> {
    (1usize..200, prop::collection::vec(any::<bool>(), 1..12)).prop_flat_map(|(total, kinds)| {
        let fixed_count = kinds.iter().filter(|fixed| **fixed).count().max(1);
        let cap = total / fixed_count;
        let widths: Vec<BoxedStrategy<Option<usize>>> = kinds
            .into_iter()
            .map(|fixed| {
                if fixed {
                    (0..=cap).prop_map(Some).boxed()
                } else {
                    Just(None).boxed()
                }
            })
            .collect();
        (Just(total), widths)
    })
}

fn plain_content() -> impl Strategy<Value = String> {
    "[a-z ]{0,40}(\n[a-z ]{0,20})?"
}

/// Words of at most four visible characters, some wrapped in color escapes.
fn styled_content() -> impl Strategy<Value = String> {
    styled_words("[a-z]{1,4}", 10)
}

/// Styled words long enough to be split across lines in narrow cells.
fn long_styled_content() -> impl Strategy<Value = String> {
    styled_words("[a-z]{1,12}", 6)
}

fn styled_words(word: &'static str, max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec((word, any::<bool>()), 0..max_words).prop_map(|words| {
        words
            .into_iter()
            .map(|(word, styled)| {
                if styled {
                    format!("\x1b[32m{}\x1b[0m", word)
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![
        Just(Theme::SINGLE_LINE),
        Just(Theme::DOUBLE_LINE),
        Just(Theme::ASCII),
        Just(Theme::NO_LINE),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (
        10usize..60,
        theme_strategy(),
        prop::collection::vec(prop::collection::vec("[a-z ]{0,20}", 1..5), 1..6),
    )
        .prop_map(|(width, theme, rows)| {
            rows.into_iter().fold(Table::new().width(width).theme(theme), |table, row| {
                table.row(Row::from_contents(row))
            })
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Allocated widths always add up to the table width.
    #[test]
    fn widths_sum_to_table_width((total, explicit) in fitting_columns()) {
        let widths = allocate_widths(total, &explicit).unwrap();
        prop_assert_eq!(widths.len(), explicit.len());
        prop_assert_eq!(widths.iter().sum::<usize>(), total);
    }

    /// Fixed columns keep their width, except the last one which may absorb the remainder.
    #[test]
    fn fixed_widths_are_kept((total, explicit) in fitting_columns()) {
        let widths = allocate_widths(total, &explicit).unwrap();
        let last = explicit.len() - 1;
        for (i, (width, wanted)) in widths.iter().zip(&explicit).enumerate() {
            if let (Some(wanted), true) = (wanted, i != last) {
                prop_assert_eq!(width, wanted);
            }
        }
    }

    /// The division remainder lands on the last column only.
    #[test]
    fn remainder_goes_to_last_column(total in 0usize..500, columns in 1usize..20) {
        let explicit = vec![None; columns];
        let widths = allocate_widths(total, &explicit).unwrap();
        let base = total / columns;
        for width in &widths[..columns - 1] {
            prop_assert_eq!(*width, base);
        }
        prop_assert_eq!(widths[columns - 1], base + total % columns);
    }

    /// Fixed widths beyond the table width are rejected.
    #[test]
    fn overspecified_rows_fail(total in 0usize..100, extra in 1usize..50, dynamic in 0usize..4) {
        let mut explicit = vec![Some(total + extra)];
        explicit.extend(std::iter::repeat(None).take(dynamic));
        let is_mismatch = matches!(
            allocate_widths(total, &explicit),
            Err(TableError::WidthMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Every plain cell line is exactly as wide as the cell.
    #[test]
    fn plain_cell_lines_fill_width(
        content in plain_content(),
        width in 1usize..30,
        left in 0usize..3,
        right in 0usize..3,
    ) {
        prop_assume!(left + right < width);
        let theme = Theme::NO_LINE;
        let ctx = RenderContext::new(&theme, &PlainLength);
        let cell = Cell::new(&content).padding(Padding::new(left, 1, right, 1));
        for line in cell.render(&ctx, width, None).unwrap() {
            prop_assert_eq!(PlainLength.visible_length(&line), width);
        }
    }

    /// Every styled cell line is exactly as wide as the cell, escapes aside.
    #[test]
    fn styled_cell_lines_fill_width(
        content in styled_content(),
        width in 6usize..30,
        left in 0usize..2,
        right in 0usize..2,
    ) {
        let theme = Theme::NO_LINE;
        let ctx = RenderContext::new(&theme, &AnsiLength);
        let cell = Cell::new(&content).padding(Padding::new(left, 0, right, 0));
        for line in cell.render(&ctx, width, None).unwrap() {
            prop_assert_eq!(AnsiLength.visible_length(&line), width);
        }
    }

    /// Styled words wider than the cell are split without changing its width.
    #[test]
    fn styled_long_words_fill_width(content in long_styled_content(), width in 1usize..10) {
        let theme = Theme::NO_LINE;
        let ctx = RenderContext::new(&theme, &AnsiLength);
        let cell = Cell::new(&content).padding(Padding::NONE);
        for line in cell.render(&ctx, width, None).unwrap() {
            prop_assert_eq!(AnsiLength.visible_length(&line), width);
        }
    }

    /// Escape-aware length is shorter exactly when escapes are present.
    #[test]
    fn ansi_length_drops_escapes(content in styled_content()) {
        let raw = content.chars().count();
        let visible = AnsiLength.visible_length(&content);
        if content.contains('\x1b') {
            prop_assert!(visible < raw);
        } else {
            prop_assert_eq!(visible, raw);
        }
    }

    /// Each explicit line starts its own group of wrapped lines.
    #[test]
    fn explicit_newlines_split_groups(first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let content = format!("{}\n{}", first, second);
        let lines = wrap(&content, 10, &PlainLength);
        prop_assert!(lines.len() >= 2);
        prop_assert_eq!(&lines[0], &first);
        prop_assert_eq!(lines.last().unwrap(), &second);
    }

    /// Rendering twice gives the same lines.
    #[test]
    fn render_is_idempotent(table in table_strategy()) {
        let first = table.render().unwrap();
        let second = table.render().unwrap();
        prop_assert_eq!(first, second);
    }

    /// Borderless tables contain only content lines, without glyphs.
    #[test]
    fn borderless_tables_have_no_borders(table in table_strategy()) {
        let table = table.theme(Theme::NO_LINE);
        let width = table.get_width();
        for line in table.render().unwrap() {
            prop_assert_eq!(line.chars().count(), width);
        }
    }
}

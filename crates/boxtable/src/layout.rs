//! Column-width allocation.
//!
//! Cells with an explicit width keep it. The width left over is split evenly
//! between the remaining (dynamic) cells, and whatever the even split cannot
//! place goes to the last column of the row, dynamic or not.

use crate::error::{Result, TableError};

/// Allocates a width to every column so the widths sum to `total`.
///
/// `explicit` holds one entry per column: `Some(width)` for fixed columns,
/// `None` for dynamic ones.
///
/// # Errors
///
/// [`TableError::WidthMismatch`] when the fixed widths exceed `total`, or
/// when the row has no columns to hold the width.
///
/// # Example
///
/// ```rust
/// use boxtable::allocate_widths;
///
/// assert_eq!(allocate_widths(10, &[None, None, None]).unwrap(), vec![3, 3, 4]);
/// assert_eq!(allocate_widths(10, &[None, Some(2)]).unwrap(), vec![8, 2]);
/// assert!(allocate_widths(10, &[Some(6), Some(6)]).is_err());
/// ```
pub fn allocate_widths(total: usize, explicit: &[Option<usize>]) -> Result<Vec<usize>> {
    let fixed: usize = explicit.iter().flatten().sum();
    let remaining = total.checked_sub(fixed).ok_or(TableError::WidthMismatch {
        expected: total,
        actual: fixed,
    })?;

    let dynamic = explicit.iter().filter(|w| w.is_none()).count();
    let (base, leftover) = if dynamic == 0 {
        (0, remaining)
    } else {
        (remaining / dynamic, remaining % dynamic)
    };

    let mut widths: Vec<usize> = explicit.iter().map(|w| w.unwrap_or(base)).collect();
    if let Some(last) = widths.last_mut() {
        *last += leftover;
    }

    let actual: usize = widths.iter().sum();
    if actual != total {
        return Err(TableError::WidthMismatch {
            expected: total,
            actual,
        });
    }

    Ok(widths)
}

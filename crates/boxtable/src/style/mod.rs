//! Border themes and padding descriptors.
//!
//! Both are plain immutable values. Tables hold a [`Theme`] by value, and
//! cells resolve their [`Padding`] at render time through the chain
//! cell, then row, then theme.

mod padding;
mod theme;

pub use padding::{Padding, DEFAULT_FILL};
pub use theme::Theme;

//! Square matrix type and row-major index arithmetic
//!
//! A [`Matrix`] is an owned, contiguous, row-major buffer of `u32` values whose
//! width and height are both equal to its [`Order`]. Element `(row, col)` lives
//! at flat offset `row * order + col`.

mod core;
mod display;
mod layout;

pub use self::core::Matrix;
pub use display::{render_column, render_element, render_row};
pub use layout::Order;

//! Text rendering of matrices
//!
//! The whole-matrix form is the `Display` impl: one line per row, values
//! separated by single spaces, every row newline-terminated.

use super::core::Matrix;
use crate::error::Result;
use std::fmt::{self, Write};

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write_row(f, row)?;
        }
        Ok(())
    }
}

fn write_row<W: Write>(out: &mut W, row: &[u32]) -> fmt::Result {
    for (x, value) in row.iter().enumerate() {
        if x > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{value}")?;
    }
    out.write_char('\n')
}

/// Render a single row as one space-separated, newline-terminated line.
pub fn render_row(matrix: &Matrix, row: usize) -> Result<String> {
    let values = matrix.row(row)?;
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_row(&mut out, values);
    Ok(out)
}

/// Render a single column, one value per line.
pub fn render_column(matrix: &Matrix, col: usize) -> Result<String> {
    matrix.check_col(col)?;
    let layout = matrix.layout();
    let data = matrix.as_slice();
    let mut out = String::new();
    for y in 0..layout.get() {
        let _ = writeln!(out, "{}", data[layout.offset(y, col)]);
    }
    Ok(out)
}

/// Render the value at `(row, col)` followed by a newline.
pub fn render_element(matrix: &Matrix, row: usize, col: usize) -> Result<String> {
    let value = matrix.get(row, col)?;
    Ok(format!("{value}\n"))
}

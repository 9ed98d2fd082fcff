//! Character grids from raw text
//!
//! One line becomes one row and one character becomes one cell. Ragged input
//! is padded on the right with the text fill value so rows stay equal length.

use ndarray::Array2;

use crate::io::configuration::TEXT_FILL;
use crate::io::error::Result;
use crate::io::reader::split_lines;
use crate::spatial::matrix::Matrix;

/// Build a `Matrix<char>` from text
///
/// Trailing empty lines are dropped; empty lines between rows are kept as
/// rows of fill.
///
/// # Errors
///
/// Returns `PuzzleError::Shape` if the padded rows cannot form an array
pub fn build_char_matrix(text: &str) -> Result<Matrix<char>> {
    let mut rows: Vec<Vec<char>> = split_lines(text).map(|line| line.chars().collect()).collect();
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let height = rows.len();

    let cells: Vec<char> = rows
        .into_iter()
        .flat_map(|mut row| {
            row.resize(width, TEXT_FILL);
            row
        })
        .collect();

    let cells = Array2::from_shape_vec((height, width), cells)?;
    Ok(Matrix::from_array(cells, TEXT_FILL))
}

//! Padding calculation and reallocation for growing a matrix
//!
//! Growth never resizes rows in place. The padding needed on each edge is
//! worked out first, then a larger array is allocated once and the old block
//! is copied into it at the padded offset.

use ndarray::{Array2, s};

use crate::spatial::coord::MatrixCoord;
use crate::spatial::direction::Direction;

/// Padding required on each edge of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtensionInfo {
    /// Columns to prepend
    pub pad_left: usize,
    /// Columns to append
    pub pad_right: usize,
    /// Rows to prepend
    pub pad_top: usize,
    /// Rows to append
    pub pad_bottom: usize,
    /// Whether any padding is required at all
    pub needs_extension: bool,
}

impl ExtensionInfo {
    /// Padding of `steps` on every edge
    pub const fn uniform(steps: usize) -> Self {
        Self {
            pad_left: steps,
            pad_right: steps,
            pad_top: steps,
            pad_bottom: steps,
            needs_extension: steps > 0,
        }
    }

    /// Padding of `steps` on the single edge faced by `direction`
    pub const fn edge(direction: Direction, steps: usize) -> Self {
        let mut info = Self {
            pad_left: 0,
            pad_right: 0,
            pad_top: 0,
            pad_bottom: 0,
            needs_extension: steps > 0,
        };
        match direction {
            Direction::Up => info.pad_top = steps,
            Direction::Right => info.pad_right = steps,
            Direction::Down => info.pad_bottom = steps,
            Direction::Left => info.pad_left = steps,
        }
        info
    }

    /// How far existing cells move right and down once the padding is applied
    pub const fn origin_shift(&self) -> (i32, i32) {
        (self.pad_left as i32, self.pad_top as i32)
    }
}

/// Calculate the padding that makes `target` a valid index
///
/// `dims` is the current `(rows, cols)` shape. Each edge is checked on its
/// own, so a single target can require growth along both axes.
pub fn calculate_extension(dims: (usize, usize), target: MatrixCoord) -> ExtensionInfo {
    let rows = dims.0 as i64;
    let cols = dims.1 as i64;
    let x = i64::from(target.x);
    let y = i64::from(target.y);

    let pad_left = (-x).max(0) as usize;
    let pad_right = (x - (cols - 1)).max(0) as usize;
    let pad_top = (-y).max(0) as usize;
    let pad_bottom = (y - (rows - 1)).max(0) as usize;

    let needs_extension = pad_left + pad_right + pad_top + pad_bottom > 0;

    ExtensionInfo {
        pad_left,
        pad_right,
        pad_top,
        pad_bottom,
        needs_extension,
    }
}

/// Extend a 2D array with padding
///
/// Returns a clone of the original array if no extension is needed,
/// otherwise a new array with the old cells at the padded offset and every
/// new cell set to `padding_value`.
pub fn extend_array_2d<T: Clone>(
    array: &Array2<T>,
    info: &ExtensionInfo,
    padding_value: T,
) -> Array2<T> {
    if !info.needs_extension {
        return array.clone();
    }

    let (old_rows, old_cols) = array.dim();
    let new_shape = (
        old_rows + info.pad_top + info.pad_bottom,
        old_cols + info.pad_left + info.pad_right,
    );

    let mut new_array = Array2::from_elem(new_shape, padding_value);
    new_array
        .slice_mut(s![
            info.pad_top..info.pad_top + old_rows,
            info.pad_left..info.pad_left + old_cols
        ])
        .assign(array);

    new_array
}

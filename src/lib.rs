//! Cursor-driven growable grid and the text puzzles built on it
//!
//! The core is [`spatial::Matrix`], a dense two-dimensional container with a
//! movable, facing cursor that can grow the grid on demand. The puzzle
//! solvers parse small text inputs into matrices and walk them.

#![deny(unsafe_code)]

/// File loading, command-line interface and error handling
pub mod io;
/// Puzzle solvers built on the matrix
pub mod puzzles;
/// Coordinates, directions and the growable matrix
pub mod spatial;

pub use io::error::{PuzzleError, Result};

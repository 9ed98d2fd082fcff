//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and cursor facing
//! - Grid growth planning and reallocation
//! - The cursor-driven matrix and its text builder

/// Building character grids from raw text
pub mod builder;
/// Integer cell coordinates
pub mod coord;
/// Cursor facing and turning
pub mod direction;
/// Grid extension utilities
pub mod extension;
/// Growable matrix with a movable cursor
pub mod matrix;

pub use coord::MatrixCoord;
pub use direction::Direction;
pub use matrix::{Matrix, MoveOutcome, MovePolicy, PrintOptions, ScanExtent};

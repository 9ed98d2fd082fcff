//! Integer cell coordinates used to address a matrix
//!
//! Coordinates are plain values: `x` is the column and `y` is the row, with
//! row 0 at the top. Either axis may be negative, which is how callers ask an
//! extending move to grow the grid upward or leftward.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{PuzzleError, invalid_parameter};

/// A cell position as a column/row pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl MatrixCoord {
    /// The top-left cell
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate from a column and a row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Stable textual identity in the form `x,y`
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Manhattan distance to another coordinate, saturating at `u32::MAX`
    pub const fn manhattan_distance_to(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Coordinate shifted by a column/row delta
    ///
    /// Each axis saturates at the bounds of `i32`.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for MatrixCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for MatrixCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl FromStr for MatrixCoord {
    type Err = PuzzleError;

    /// Parses `x,y`, tolerating surrounding whitespace on either part
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(invalid_parameter("coordinate", &s, &"expected the form x,y"));
        };

        let parse_axis = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| invalid_parameter("coordinate", &s, &e))
        };

        Ok(Self::new(parse_axis(x)?, parse_axis(y)?))
    }
}

//! Facing direction of a matrix cursor

/// One of the four orthogonal facings
///
/// Row 0 is the top of the grid, so facing `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards row 0
    #[default]
    Up,
    /// Towards the last column
    Right,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
}

impl Direction {
    /// All facings in clockwise order starting from `Up`
    pub const CLOCKWISE: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Column/row delta of a single step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Facing after a quarter turn clockwise
    pub const fn turned_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Facing after a quarter turn counter-clockwise
    pub const fn turned_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Facing after a half turn
    pub const fn reversed(self) -> Self {
        self.turned_right().turned_right()
    }
}

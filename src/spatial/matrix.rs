//! Growable matrix with a persistent cursor
//!
//! A `Matrix` owns a dense `(rows, cols)` array plus a cursor made of a
//! position and a facing. Callers steer the cursor with absolute or relative
//! moves, read and write the cell under it, and ask for adjacency lists or
//! transformed copies.
//!
//! Every move takes a [`MovePolicy`]. A bounded move refuses to leave the
//! current grid, while an extending move grows the grid with the default
//! value until the destination exists. Growth on the left or top edge shifts
//! existing cells, and `start_coord` follows the cell that used to be `(0,0)`.

use std::fmt;

use log::debug;
use ndarray::{Array2, s};

use crate::io::configuration::{CURSOR_MARKER, ORIGIN_MARKER};
use crate::spatial::coord::MatrixCoord;
use crate::spatial::direction::Direction;
use crate::spatial::extension::{ExtensionInfo, calculate_extension, extend_array_2d};

/// Offsets visited for the 8-neighborhood, rows outer and columns inner
const ADJACENT_DELTAS: [i32; 3] = [-1, 0, 1];

/// What a move does when the destination lies outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Leave the grid and cursor untouched and report the failure
    #[default]
    Bounded,
    /// Grow the grid until the destination exists
    Extending,
}

/// Result of a cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cursor now rests on this coordinate
    Moved(MatrixCoord),
    /// A bounded move targeted this coordinate, which is outside the grid
    OutOfRange(MatrixCoord),
}

impl MoveOutcome {
    /// Whether the cursor moved
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    /// The coordinate the cursor moved to, if it moved
    pub const fn coord(&self) -> Option<MatrixCoord> {
        match self {
            Self::Moved(coord) => Some(*coord),
            Self::OutOfRange(_) => None,
        }
    }
}

/// Region visited by [`Matrix::find_addresses`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanExtent {
    /// `height` x `height` square, visited with extending moves
    ///
    /// A grid taller than it is wide grows to a square during the scan, and
    /// columns at or beyond `height` are never visited on a wide grid.
    #[default]
    SquareByHeight,
    /// Every cell of the current grid, visited with bounded moves
    Full,
}

/// Corner a derived grid's cursor starts on
#[derive(Debug, Clone, Copy)]
enum Corner {
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Rendering switches for [`Matrix::print`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintOptions {
    /// Overlay the cursor cell with the cursor marker
    pub mark_cursor: bool,
    /// Overlay the tracked origin cell with the origin marker
    pub mark_origin: bool,
    /// Follow every cell with a single space
    pub spacing: bool,
}

/// Two-dimensional grid addressed by [`MatrixCoord`]
///
/// Equality compares shape and cells only; cursor, facing and origin are
/// ignored.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    cells: Array2<T>,
    default_value: T,
    direction: Direction,
    current_coord: MatrixCoord,
    start_coord: MatrixCoord,
}

impl<T: Copy + PartialEq> Matrix<T> {
    /// Create a `width` x `height` grid filled with `default_value`
    pub fn new(width: usize, height: usize, default_value: T) -> Self {
        Self::from_array(Array2::from_elem((height, width), default_value), default_value)
    }

    /// Wrap existing `(rows, cols)` cells, using `default_value` for growth
    ///
    /// A grid without rows is normalized to `0 x 0`.
    pub fn from_array(cells: Array2<T>, default_value: T) -> Self {
        let cells = if cells.nrows() == 0 {
            Array2::from_elem((0, 0), default_value)
        } else {
            cells
        };

        Self {
            cells,
            default_value,
            direction: Direction::Up,
            current_coord: MatrixCoord::ORIGIN,
            start_coord: MatrixCoord::ORIGIN,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Value used to fill newly created cells
    pub const fn default_value(&self) -> T {
        self.default_value
    }

    /// Current facing of the cursor
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cursor position
    pub const fn current_coord(&self) -> MatrixCoord {
        self.current_coord
    }

    /// Index that the original `(0,0)` has shifted to
    pub const fn start_coord(&self) -> MatrixCoord {
        self.start_coord
    }

    /// Underlying `(rows, cols)` storage
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// All cell values in row-major order
    pub fn values(&self) -> Vec<T> {
        self.cells.iter().copied().collect()
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> Vec<MatrixCoord> {
        let width = self.width();
        (0..self.height())
            .flat_map(|y| (0..width).map(move |x| MatrixCoord::new(x as i32, y as i32)))
            .collect()
    }

    /// Whether the cursor is on the first row
    pub const fn is_at_top(&self) -> bool {
        self.current_coord.y == 0
    }

    /// Whether the cursor is on the last column
    pub fn is_at_right_edge(&self) -> bool {
        self.current_coord.x == self.width() as i32 - 1
    }

    /// Whether the cursor is on the last row
    pub fn is_at_bottom(&self) -> bool {
        self.current_coord.y == self.height() as i32 - 1
    }

    /// Whether the cursor is on the first column
    pub const fn is_at_left_edge(&self) -> bool {
        self.current_coord.x == 0
    }

    /// Middle cell, rounding down on even sizes
    pub fn center(&self) -> MatrixCoord {
        MatrixCoord::new((self.width() / 2) as i32, (self.height() / 2) as i32)
    }

    /// Whether `coord` lies outside the current grid
    pub fn is_out_of_range(&self, coord: MatrixCoord) -> bool {
        self.index_of(coord).is_none()
    }

    /// `(row, col)` index of an in-range coordinate
    fn index_of(&self, coord: MatrixCoord) -> Option<(usize, usize)> {
        let col = usize::try_from(coord.x).ok()?;
        let row = usize::try_from(coord.y).ok()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }

    /// Move the cursor to an absolute coordinate
    ///
    /// After any required growth, negative axes of the target are clamped to
    /// 0, which is where an upward or leftward extension places them.
    pub fn move_to(&mut self, coord: MatrixCoord, policy: MovePolicy) -> MoveOutcome {
        if self.is_out_of_range(coord) {
            match policy {
                MovePolicy::Bounded => return MoveOutcome::OutOfRange(coord),
                MovePolicy::Extending => self.extend_to(coord),
            }
        }

        let resolved = MatrixCoord::new(coord.x.max(0), coord.y.max(0));
        self.current_coord = resolved;
        MoveOutcome::Moved(resolved)
    }

    /// Move the cursor to an absolute column and row
    pub fn move_to_xy(&mut self, x: i32, y: i32, policy: MovePolicy) -> MoveOutcome {
        self.move_to(MatrixCoord::new(x, y), policy)
    }

    /// Step once along the current facing
    pub fn move_forward(&mut self, policy: MovePolicy) -> MoveOutcome {
        let (dx, dy) = self.direction.delta();
        self.move_to(self.current_coord.offset(dx, dy), policy)
    }

    /// Step once against the current facing
    pub fn move_backward(&mut self, policy: MovePolicy) -> MoveOutcome {
        let (dx, dy) = self.direction.delta();
        self.move_to(self.current_coord.offset(-dx, -dy), policy)
    }

    /// Move `steps` rows towards the top, regardless of facing
    pub fn move_up(&mut self, steps: i32, policy: MovePolicy) -> MoveOutcome {
        self.move_to(self.current_coord.offset(0, -steps), policy)
    }

    /// Move `steps` columns towards the right, regardless of facing
    pub fn move_right(&mut self, steps: i32, policy: MovePolicy) -> MoveOutcome {
        self.move_to(self.current_coord.offset(steps, 0), policy)
    }

    /// Move `steps` rows towards the bottom, regardless of facing
    pub fn move_down(&mut self, steps: i32, policy: MovePolicy) -> MoveOutcome {
        self.move_to(self.current_coord.offset(0, steps), policy)
    }

    /// Move `steps` columns towards the left, regardless of facing
    pub fn move_left(&mut self, steps: i32, policy: MovePolicy) -> MoveOutcome {
        self.move_to(self.current_coord.offset(-steps, 0), policy)
    }

    /// Quarter turn counter-clockwise
    pub const fn turn_left(&mut self) -> Direction {
        self.turn_to(self.direction.turned_left())
    }

    /// Quarter turn clockwise
    pub const fn turn_right(&mut self) -> Direction {
        self.turn_to(self.direction.turned_right())
    }

    /// Face `direction`
    pub const fn turn_to(&mut self, direction: Direction) -> Direction {
        self.direction = direction;
        direction
    }

    /// Grow every edge by `steps`
    ///
    /// Only the cells move. The cursor and the tracked origin keep their
    /// indices, so both now sit on different cells.
    pub fn extend_all_directions(&mut self, steps: usize) {
        self.grow(&ExtensionInfo::uniform(steps));
    }

    /// Prepend `steps` rows
    pub fn extend_up(&mut self, steps: usize) {
        self.grow(&ExtensionInfo::edge(Direction::Up, steps));
    }

    /// Append `steps` columns
    pub fn extend_right(&mut self, steps: usize) {
        self.grow(&ExtensionInfo::edge(Direction::Right, steps));
    }

    /// Append `steps` rows
    pub fn extend_down(&mut self, steps: usize) {
        self.grow(&ExtensionInfo::edge(Direction::Down, steps));
    }

    /// Prepend `steps` columns
    pub fn extend_left(&mut self, steps: usize) {
        self.grow(&ExtensionInfo::edge(Direction::Left, steps));
    }

    fn extend_to(&mut self, coord: MatrixCoord) {
        let info = calculate_extension(self.cells.dim(), coord);
        if self.grow(&info) {
            let (dx, dy) = info.origin_shift();
            self.start_coord = self.start_coord.offset(dx, dy);
        }
    }

    /// Reallocate with `info` padding, returning whether anything grew
    fn grow(&mut self, info: &ExtensionInfo) -> bool {
        if !info.needs_extension {
            return false;
        }

        debug!(
            "extending {}x{} matrix (left {}, right {}, top {}, bottom {})",
            self.width(),
            self.height(),
            info.pad_left,
            info.pad_right,
            info.pad_top,
            info.pad_bottom
        );

        self.cells = extend_array_2d(&self.cells, info, self.default_value);
        true
    }

    /// Reference to the cell at `coord`, or `None` outside the grid
    pub fn get(&self, coord: MatrixCoord) -> Option<&T> {
        let (row, col) = self.index_of(coord)?;
        self.cells.get((row, col))
    }

    /// Value under the cursor
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the grid, which only happens on an
    /// empty grid that was never moved into.
    pub fn read_value(&self) -> T {
        self.read_at(self.current_coord)
    }

    /// Value at `coord`
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid. Callers move or extend first.
    // Out-of-range access is a caller bug and must fail loudly
    #[allow(clippy::panic)]
    pub fn read_at(&self, coord: MatrixCoord) -> T {
        match self.get(coord) {
            Some(value) => *value,
            None => panic!(
                "read at {coord} outside the {}x{} matrix",
                self.width(),
                self.height()
            ),
        }
    }

    /// Value at column `x`, row `y`
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn read_at_xy(&self, x: i32, y: i32) -> T {
        self.read_at(MatrixCoord::new(x, y))
    }

    /// Overwrite the cell under the cursor
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the grid.
    // Out-of-range access is a caller bug and must fail loudly
    #[allow(clippy::panic)]
    pub fn write_value(&mut self, value: T) {
        let coord = self.current_coord;
        let (width, height) = (self.width(), self.height());
        let cell = self
            .index_of(coord)
            .and_then(|index| self.cells.get_mut(index));
        match cell {
            Some(cell) => *cell = value,
            None => panic!("write at {coord} outside the {width}x{height} matrix"),
        }
    }

    /// Coordinates holding `value`, scanning the `height` x `height` square
    ///
    /// Equivalent to `find_addresses(value, ScanExtent::SquareByHeight)`.
    pub fn find_all(&mut self, value: T) -> Vec<MatrixCoord> {
        self.find_addresses(value, ScanExtent::SquareByHeight)
    }

    /// Coordinates holding `value` in row-major scan order
    ///
    /// The scan walks the cursor, which rests on the last visited coordinate
    /// afterwards.
    pub fn find_addresses(&mut self, value: T, extent: ScanExtent) -> Vec<MatrixCoord> {
        let (rows, cols, policy) = match extent {
            ScanExtent::SquareByHeight => (self.height(), self.height(), MovePolicy::Extending),
            ScanExtent::Full => (self.height(), self.width(), MovePolicy::Bounded),
        };

        let mut addresses = Vec::new();
        for y in 0..rows {
            for x in 0..cols {
                let address = MatrixCoord::new(x as i32, y as i32);
                if self.move_to(address, policy).is_moved() && self.read_value() == value {
                    addresses.push(address);
                }
            }
        }

        addresses
    }

    /// In-range neighbors above, right of, below and left of the cursor
    pub fn orthogonal_adjacent_coords(&self) -> Vec<MatrixCoord> {
        Direction::CLOCKWISE
            .into_iter()
            .map(|direction| {
                let (dx, dy) = direction.delta();
                self.current_coord.offset(dx, dy)
            })
            .filter(|coord| !self.is_out_of_range(*coord))
            .collect()
    }

    /// Values of [`Self::orthogonal_adjacent_coords`]
    pub fn orthogonal_adjacent_values(&self) -> Vec<T> {
        self.values_at(&self.orthogonal_adjacent_coords())
    }

    /// In-range neighbors of the cursor, diagonals included
    ///
    /// Row offsets run `-1, 0, 1` with the sign flipped onto `y`, so the row
    /// below the cursor comes first.
    pub fn full_adjacent_coords(&self) -> Vec<MatrixCoord> {
        let current = self.current_coord;
        ADJACENT_DELTAS
            .into_iter()
            .flat_map(|dy| ADJACENT_DELTAS.into_iter().map(move |dx| current.offset(dx, -dy)))
            .filter(|coord| *coord != current && !self.is_out_of_range(*coord))
            .collect()
    }

    /// Values of [`Self::full_adjacent_coords`]
    pub fn full_adjacent_values(&self) -> Vec<T> {
        self.values_at(&self.full_adjacent_coords())
    }

    fn values_at(&self, coords: &[MatrixCoord]) -> Vec<T> {
        coords.iter().filter_map(|coord| self.get(*coord).copied()).collect()
    }

    /// Independent duplicate with the cursor on the same coordinate
    pub fn copy(&self) -> Self {
        let mut matrix = self.derived(self.cells.clone(), Corner::BottomRight);
        matrix.current_coord = self.current_coord;
        matrix
    }

    /// Quarter turn counter-clockwise
    ///
    /// The last column becomes the first row.
    pub fn rotate_left(&self) -> Self {
        self.derived(
            self.cells.slice(s![.., ..;-1]).reversed_axes().to_owned(),
            Corner::BottomRight,
        )
    }

    /// Quarter turn clockwise, as three left rotations
    pub fn rotate_right(&self) -> Self {
        self.rotate_left().rotate_left().rotate_left()
    }

    /// Mirror across the horizontal axis
    pub fn flip_vertical(&self) -> Self {
        self.derived(self.cells.slice(s![..;-1, ..]).to_owned(), Corner::TopRight)
    }

    /// Mirror across the vertical axis
    pub fn flip_horizontal(&self) -> Self {
        self.derived(self.cells.slice(s![.., ..;-1]).to_owned(), Corner::BottomLeft)
    }

    /// Inclusive rectangle from `from` to `to`, re-indexed from `(0,0)`
    ///
    /// `from` defaults to the top-left cell and `to` to the bottom-right cell.
    /// A `to` above or left of `from` yields a single default cell.
    ///
    /// # Panics
    ///
    /// Panics if either corner lies outside the grid.
    // Slice corners are a precondition, not a recoverable condition
    #[allow(clippy::panic)]
    pub fn slice(&self, from: Option<MatrixCoord>, to: Option<MatrixCoord>) -> Self {
        let from = from.unwrap_or(MatrixCoord::ORIGIN);
        let to = to.unwrap_or_else(|| {
            MatrixCoord::new(self.width() as i32 - 1, self.height() as i32 - 1)
        });

        let (Some((top, left)), Some((bottom, right))) = (self.index_of(from), self.index_of(to))
        else {
            panic!(
                "slice {from} to {to} outside the {}x{} matrix",
                self.width(),
                self.height()
            );
        };

        if bottom < top || right < left {
            return Self::new(1, 1, self.default_value);
        }

        self.derived(
            self.cells.slice(s![top..=bottom, left..=right]).to_owned(),
            Corner::BottomRight,
        )
    }

    /// Rectangle starting at `from` and ending at `from + (width, height)`
    ///
    /// # Panics
    ///
    /// Panics if the rectangle leaves the grid.
    pub fn slice_by_size(&self, from: MatrixCoord, width: i32, height: i32) -> Self {
        self.slice(Some(from), Some(from.offset(width, height)))
    }

    /// Fresh grid over `cells` sharing this grid's default value
    ///
    /// The cursor rests on `last_filled`, the cell a row-by-row fill of the
    /// transform writes last.
    fn derived(&self, cells: Array2<T>, last_filled: Corner) -> Self {
        let mut matrix = Self::from_array(cells, self.default_value);
        let right = matrix.width().saturating_sub(1) as i32;
        let bottom = matrix.height().saturating_sub(1) as i32;
        matrix.current_coord = match last_filled {
            Corner::TopRight => MatrixCoord::new(right, 0),
            Corner::BottomLeft => MatrixCoord::new(0, bottom),
            Corner::BottomRight => MatrixCoord::new(right, bottom),
        };
        matrix
    }
}

impl<T: Copy + PartialEq + fmt::Display> Matrix<T> {
    /// Render rows as lines of cell text
    ///
    /// The cursor marker takes precedence over the origin marker when both
    /// fall on one cell. The result is trimmed of surrounding whitespace.
    pub fn print(&self, options: &PrintOptions) -> String {
        let mut out = String::new();
        for (y, row) in self.cells.rows().into_iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let here = MatrixCoord::new(x as i32, y as i32);
                if options.mark_cursor && here == self.current_coord {
                    out.push(CURSOR_MARKER);
                } else if options.mark_origin && here == self.start_coord {
                    out.push(ORIGIN_MARKER);
                } else {
                    out.push_str(&cell.to_string());
                }

                if options.spacing {
                    out.push(' ');
                }
            }
            out.push('\n');
        }

        out.trim().to_owned()
    }
}

impl<T: Copy + Default + PartialEq> Default for Matrix<T> {
    fn default() -> Self {
        Self::new(1, 1, T::default())
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<T: Copy + PartialEq + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(&PrintOptions::default()))
    }
}

//! Row/column coordinates with directional arithmetic
//!
//! `Location` is a plain value: every operation returns a new location.
//! Arithmetic never wraps. The plain forms panic on overflow in every build
//! profile; the `checked_*` forms return `None` instead. Distances and
//! factors may use a different integer type than the location itself and
//! are combined through `i128` before narrowing back.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use num_traits::AsPrimitive;

use crate::common::configuration::DEFAULT_MOVE_DISTANCE;
use crate::math::hashing::{combine, mix_value};
use crate::math::integral::{
    Integral, checked_product, checked_retreat, checked_shift, overflow, same_value,
};
use crate::spatial::direction::Direction;

/// Offsets of the four diagonal neighbours, in `diagonals()` order
const DIAGONAL_OFFSETS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

// Starts at the lower-right diagonal and walks around the cell
/// Offsets of all eight neighbours, in `surrounding()` order
const SURROUNDING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
];

/// Discrete cell position or relative movement
///
/// Also serves as grid dimensions, read as `(num_rows, num_columns)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Location<I = i64> {
    /// Row index, growing downwards
    pub row: I,
    /// Column index, growing rightwards
    pub column: I,
}

impl<I> Location<I> {
    /// Create a location from its components
    pub const fn new(row: I, column: I) -> Self {
        Self { row, column }
    }
}

impl<I: Integral> Location<I> {
    /// Component-wise sum, `None` on overflow
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(&rhs.row)?,
            self.column.checked_add(&rhs.column)?,
        ))
    }

    /// Component-wise difference, `None` on overflow or unsigned underflow
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.row.checked_sub(&rhs.row)?,
            self.column.checked_sub(&rhs.column)?,
        ))
    }

    /// Multiply both components by `factor`, `None` if the result does not fit
    pub fn checked_scale<F: Integral>(self, factor: F) -> Option<Self> {
        Some(Self::new(
            checked_product(self.row, factor)?,
            checked_product(self.column, factor)?,
        ))
    }

    /// Multiply both components by `factor`
    ///
    /// # Panics
    ///
    /// Panics if a component overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn scale<F: Integral>(self, factor: F) -> Self {
        self.checked_scale(factor).unwrap_or_else(|| overflow("scale"))
    }

    /// Offset by `rows` and `columns`, `None` if the result does not fit
    pub fn checked_relative<D: Integral>(self, rows: D, columns: D) -> Option<Self> {
        Some(Self::new(
            checked_shift(self.row, rows)?,
            checked_shift(self.column, columns)?,
        ))
    }

    /// Offset by `rows` and `columns`
    ///
    /// # Panics
    ///
    /// Panics if a component overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn relative<D: Integral>(self, rows: D, columns: D) -> Self {
        self.checked_relative(rows, columns).unwrap_or_else(|| overflow("relative"))
    }

    /// Move `distance` cells in `direction`; `Direction::None` returns `self`
    pub fn checked_step_by<D: Integral>(self, direction: Direction, distance: D) -> Option<Self> {
        match direction {
            Direction::None => Some(self),
            Direction::Up => Some(Self::new(checked_retreat(self.row, distance)?, self.column)),
            Direction::Down => Some(Self::new(checked_shift(self.row, distance)?, self.column)),
            Direction::Left => Some(Self::new(self.row, checked_retreat(self.column, distance)?)),
            Direction::Right => Some(Self::new(self.row, checked_shift(self.column, distance)?)),
        }
    }

    /// Move `distance` cells in `direction`
    ///
    /// # Panics
    ///
    /// Panics if a component overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn step_by<D: Integral>(self, direction: Direction, distance: D) -> Self {
        self.checked_step_by(direction, distance).unwrap_or_else(|| overflow("step"))
    }

    /// Move one cell in `direction`
    ///
    /// # Panics
    ///
    /// Panics if a component overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn step(self, direction: Direction) -> Self {
        self.step_by(direction, DEFAULT_MOVE_DISTANCE)
    }

    /// Location `distance` rows up
    ///
    /// # Panics
    ///
    /// Panics if the row overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn above_by<D: Integral>(self, distance: D) -> Self {
        self.step_by(Direction::Up, distance)
    }

    /// Location `distance` rows down
    ///
    /// # Panics
    ///
    /// Panics if the row overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn below_by<D: Integral>(self, distance: D) -> Self {
        self.step_by(Direction::Down, distance)
    }

    /// Location `distance` columns left
    ///
    /// # Panics
    ///
    /// Panics if the column overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn left_by<D: Integral>(self, distance: D) -> Self {
        self.step_by(Direction::Left, distance)
    }

    /// Location `distance` columns right
    ///
    /// # Panics
    ///
    /// Panics if the column overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn right_by<D: Integral>(self, distance: D) -> Self {
        self.step_by(Direction::Right, distance)
    }

    /// Location one row up
    ///
    /// # Panics
    ///
    /// Panics if the row overflows `I`, e.g. row 0 of an unsigned location.
    #[must_use]
    #[track_caller]
    pub fn above(self) -> Self {
        self.step(Direction::Up)
    }

    /// Location one row down
    ///
    /// # Panics
    ///
    /// Panics if the row overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn below(self) -> Self {
        self.step(Direction::Down)
    }

    /// Location one column left
    ///
    /// # Panics
    ///
    /// Panics if the column overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn left(self) -> Self {
        self.step(Direction::Left)
    }

    /// Location one column right
    ///
    /// # Panics
    ///
    /// Panics if the column overflows `I`.
    #[must_use]
    #[track_caller]
    pub fn right(self) -> Self {
        self.step(Direction::Right)
    }

    /// Orthogonal neighbours: above, below, left, right
    ///
    /// # Panics
    ///
    /// Panics if any neighbour overflows `I`.
    #[track_caller]
    pub fn adjacent(self) -> [Self; 4] {
        [self.above(), self.below(), self.left(), self.right()]
    }

    /// Diagonal neighbours: lower-right, upper-right, lower-left, upper-left
    ///
    /// # Panics
    ///
    /// Panics if any neighbour overflows `I`.
    #[track_caller]
    pub fn diagonals(self) -> [Self; 4] {
        DIAGONAL_OFFSETS.map(|(rows, columns)| self.relative(rows, columns))
    }

    /// All eight neighbours, clockwise from the lower-right diagonal
    ///
    /// The order is stable and may be relied on for deterministic iteration.
    ///
    /// # Panics
    ///
    /// Panics if any neighbour overflows `I`.
    #[track_caller]
    pub fn surrounding(self) -> [Self; 8] {
        SURROUNDING_OFFSETS.map(|(rows, columns)| self.relative(rows, columns))
    }

    /// Neighbours in `surrounding()` order, skipping any that overflow `I`
    pub fn checked_surrounding(self) -> impl Iterator<Item = Self> {
        SURROUNDING_OFFSETS
            .into_iter()
            .filter_map(move |(rows, columns)| self.checked_relative(rows, columns))
    }

    /// Orthogonal neighbours in `adjacent()` order, skipping any that overflow `I`
    pub fn checked_adjacent(self) -> impl Iterator<Item = Self> {
        Direction::MOVES
            .into_iter()
            .filter_map(move |direction| self.checked_step_by(direction, DEFAULT_MOVE_DISTANCE))
    }

    /// Order-sensitive 64-bit hash of the component values
    ///
    /// Depends only on the values, so equal locations of different integer
    /// types produce the same code.
    pub fn hash_code(&self) -> u64 {
        combine(combine(0, mix_value(self.row)), mix_value(self.column))
    }

    /// Convert to another integer type, `None` if a component does not fit
    pub fn try_cast<J: Integral>(self) -> Option<Location<J>> {
        Some(Location::new(
            num_traits::cast(self.row)?,
            num_traits::cast(self.column)?,
        ))
    }

    /// Convert to another integer type with `as` semantics (truncating)
    pub fn cast<J>(self) -> Location<J>
    where
        I: AsPrimitive<J>,
        J: Copy + 'static,
    {
        Location::new(self.row.as_(), self.column.as_())
    }

    /// Components as a `(row, column)` tuple
    pub fn to_tuple(self) -> (I, I) {
        self.into()
    }
}

impl<I> From<(I, I)> for Location<I> {
    fn from((row, column): (I, I)) -> Self {
        Self::new(row, column)
    }
}

impl<I> From<Location<I>> for (I, I) {
    fn from(location: Location<I>) -> Self {
        (location.row, location.column)
    }
}

impl<I: Integral> Add for Location<I> {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or_else(|| overflow("add"))
    }
}

impl<I: Integral> Sub for Location<I> {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).unwrap_or_else(|| overflow("subtract"))
    }
}

impl<I: Integral, F: Integral> Mul<F> for Location<I> {
    type Output = Self;

    #[track_caller]
    fn mul(self, factor: F) -> Self {
        self.scale(factor)
    }
}

impl<I: Integral, J: Integral> PartialEq<Location<J>> for Location<I> {
    fn eq(&self, other: &Location<J>) -> bool {
        same_value(self.row, other.row) && same_value(self.column, other.column)
    }
}

impl<I: Integral> Eq for Location<I> {}

impl<I: Integral> PartialOrd for Location<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Integral> Ord for Location<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl<I: Integral> Hash for Location<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<I: fmt::Display> fmt::Display for Location<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

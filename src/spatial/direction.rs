//! Unit movements along the grid axes

use std::fmt;

/// Abstract unit movement along one axis
///
/// `Up` decreases the row, `Down` increases it; `Left` decreases the
/// column, `Right` increases it. `None` stands still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// No movement
    #[default]
    None,
    /// Towards row 0
    Up,
    /// Away from row 0
    Down,
    /// Towards column 0
    Left,
    /// Away from column 0
    Right,
}

impl Direction {
    /// Every direction, `None` first
    pub const ALL: [Self; 5] = [Self::None, Self::Up, Self::Down, Self::Left, Self::Right];

    /// Directions that actually move, in `adjacent()` order
    pub const MOVES: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Opposite direction; `None` maps to itself
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit `(row, column)` delta of one step in this direction
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::None => (0, 0),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Moves along the row axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Moves along the column axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

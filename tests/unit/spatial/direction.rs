//! Tests for unit directions and their reversal

#[cfg(test)]
mod tests {
    use gridcore::Direction;

    // Tests reverse is an involution with None as its fixed point
    // Verified by mapping Left to Up in reverse
    #[test]
    fn test_reverse_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.reverse().reverse(), direction);
        }
        assert_eq!(Direction::None.reverse(), Direction::None);
        assert_eq!(Direction::Up.reverse(), Direction::Down);
        assert_eq!(Direction::Left.reverse(), Direction::Right);
    }

    #[test]
    fn test_reverse_delta_cancels() {
        for direction in Direction::ALL {
            let (row, column) = direction.delta();
            let (back_row, back_column) = direction.reverse().delta();
            assert_eq!((row + back_row, column + back_column), (0, 0));
        }
    }

    #[test]
    fn test_axis_classification() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Right.is_vertical());
        assert!(!Direction::None.is_vertical());
        assert!(!Direction::None.is_horizontal());
    }

    #[test]
    fn test_moves_exclude_none() {
        assert!(!Direction::MOVES.contains(&Direction::None));
        assert_eq!(Direction::default(), Direction::None);
        assert_eq!(Direction::Right.to_string(), "right");
    }
}

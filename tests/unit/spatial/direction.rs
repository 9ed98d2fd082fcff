//! Tests for facing deltas and turning

#[cfg(test)]
mod tests {
    use cursorgrid::spatial::Direction;

    // Tests Up decreases the row and Down increases it
    // Verified by flipping the sign of the Up delta
    #[test]
    fn test_deltas_put_row_zero_on_top() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    // Tests a fresh facing points up
    // Verified by defaulting to Right
    #[test]
    fn test_default_is_up() {
        assert_eq!(Direction::default(), Direction::Up);
    }

    // Tests right turns cycle clockwise
    // Verified by routing Down to Right in turned_right
    #[test]
    fn test_turned_right_cycles_clockwise() {
        let mut direction = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(direction);
            direction = direction.turned_right();
        }

        assert_eq!(seen, Direction::CLOCKWISE.to_vec());
        assert_eq!(direction, Direction::Up);
    }

    // Tests a left turn undoes a right turn
    // Verified by making turned_left equal turned_right
    #[test]
    fn test_turned_left_undoes_turned_right() {
        for direction in Direction::CLOCKWISE {
            assert_eq!(direction.turned_right().turned_left(), direction);
            assert_eq!(direction.turned_left().turned_right(), direction);
        }
    }

    // Tests reversing negates the delta
    // Verified by reversing to the left-hand facing
    #[test]
    fn test_reversed_negates_delta() {
        for direction in Direction::CLOCKWISE {
            let (dx, dy) = direction.delta();
            assert_eq!(direction.reversed().delta(), (-dx, -dy));
        }
    }
}

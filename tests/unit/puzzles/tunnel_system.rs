//! Tests for the tunnel walk

#[cfg(test)]
mod tests {
    use cursorgrid::puzzles::tunnel_system::{heading, parse_directions, render, solve};
    use cursorgrid::spatial::builder::build_char_matrix;
    use cursorgrid::spatial::{Direction, MatrixCoord};

    const MAP: &str = "#####\n#   #\n# # #\n#####";

    // Tests commas and spaces are removed from directions
    // Verified by keeping spaces
    #[test]
    fn test_parse_directions_strips_separators() {
        let lines = vec!["E, E".to_string(), "S S,W".to_string()];

        assert_eq!(parse_directions(&lines), vec!['E', 'E', 'S', 'S', 'W']);
    }

    // Tests compass letters map to facings
    // Verified by mapping E to Left
    #[test]
    fn test_heading() {
        assert_eq!(heading('N'), Some(Direction::Up));
        assert_eq!(heading('E'), Some(Direction::Right));
        assert_eq!(heading('S'), Some(Direction::Down));
        assert_eq!(heading('W'), Some(Direction::Left));
        assert_eq!(heading('x'), None);
    }

    // Tests stepping into a wall is undone
    // Verified by keeping the cursor on walls instead of stepping back
    #[test]
    fn test_walls_undo_steps() {
        let map = build_char_matrix(MAP).unwrap();

        let end = solve(map, &['E', 'E', 'S', 'S', 'W'], MatrixCoord::new(1, 1));

        assert_eq!(end, MatrixCoord::new(3, 2));
    }

    // Tests unknown letters neither turn nor step
    // Verified by stepping on unknown letters
    #[test]
    fn test_unknown_letters_are_skipped() {
        let map = build_char_matrix(MAP).unwrap();

        let end = solve(map, &['E', '?', 'E'], MatrixCoord::new(1, 1));

        assert_eq!(end, MatrixCoord::new(3, 1));
    }

    // Tests the start cell is opened before the walk
    // Verified by leaving the start cell as a wall
    #[test]
    fn test_start_cell_is_cleared() {
        let map = build_char_matrix(MAP).unwrap();

        // (0,1) is a wall until the walk clears it
        let end = solve(map, &['E', 'W'], MatrixCoord::new(0, 1));

        assert_eq!(end, MatrixCoord::new(0, 1));
    }

    // Tests stepping past the edge grows the map with open cells
    // Verified by walking with bounded moves
    #[test]
    fn test_leaving_the_map_grows_it() {
        let map = build_char_matrix(MAP).unwrap();

        let end = solve(map, &['N', 'S'], MatrixCoord::new(0, 0));

        assert_eq!(end, MatrixCoord::new(0, 1));
    }

    // Tests the answer renders as a tuple
    // Verified by omitting the space after the comma
    #[test]
    fn test_render() {
        assert_eq!(render(MatrixCoord::new(3, 21)), "(3, 21)");
    }
}

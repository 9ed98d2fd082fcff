//! Walking a tunnel map
//!
//! The hero starts on a cleared cell and follows compass directions. A step
//! into anything other than open tunnel is undone.

use log::{debug, info};

use crate::io::configuration::OPEN_TUNNEL;
use crate::spatial::{Direction, Matrix, MatrixCoord, MovePolicy, PrintOptions};

/// Compass letters from the direction lines, with spaces and commas removed
pub fn parse_directions(lines: &[String]) -> Vec<char> {
    lines
        .join(",")
        .chars()
        .filter(|c| *c != ' ' && *c != ',')
        .collect()
}

/// Facing for a compass letter
pub const fn heading(compass: char) -> Option<Direction> {
    match compass {
        'N' => Some(Direction::Up),
        'E' => Some(Direction::Right),
        'S' => Some(Direction::Down),
        'W' => Some(Direction::Left),
        _ => None,
    }
}

/// Walk the map from `start` and return where the hero ends up
///
/// Steps past the map edge grow the map, so the result is an index into the
/// grown map. Letters other than `N`, `E`, `S` and `W` are skipped.
pub fn solve(mut map: Matrix<char>, directions: &[char], start: MatrixCoord) -> MatrixCoord {
    map.move_to(MatrixCoord::ORIGIN, MovePolicy::Extending);
    map.move_to(start, MovePolicy::Extending);
    map.write_value(OPEN_TUNNEL);

    for &compass in directions {
        let Some(direction) = heading(compass) else {
            continue;
        };

        map.turn_to(direction);
        map.move_forward(MovePolicy::Extending);
        if map.read_value() != OPEN_TUNNEL {
            map.move_backward(MovePolicy::Extending);
        }
    }

    debug!(
        "final tunnel map:\n{}",
        map.print(&PrintOptions {
            mark_cursor: true,
            mark_origin: true,
            spacing: false,
        })
    );
    info!("hero walked {} directions", directions.len());

    map.current_coord()
}

/// Answer text for a final position
pub fn render(coord: MatrixCoord) -> String {
    format!("({}, {})", coord.x, coord.y)
}

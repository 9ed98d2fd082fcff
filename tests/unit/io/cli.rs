//! Tests for command-line parsing and puzzle dispatch

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cursorgrid::io::cli::{Cli, Command, PuzzleRunner};
    use cursorgrid::spatial::MatrixCoord;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests the tunnel start defaults to the hero start
    // Verified by defaulting the start to the origin
    #[test]
    fn test_tunnel_system_default_start() {
        let cli = Cli::parse_from(["program", "tunnel-system", "map.txt", "dirs.txt"]);

        match cli.command {
            Command::TunnelSystem {
                map,
                directions,
                start,
            } => {
                assert_eq!(map, PathBuf::from("map.txt"));
                assert_eq!(directions, PathBuf::from("dirs.txt"));
                assert_eq!(start, MatrixCoord::new(3, 21));
            }
            other => unreachable!("Expected tunnel-system, got {other:?}"),
        }
    }

    // Tests a custom centre is parsed from x,y
    // Verified by ignoring the --center flag
    #[test]
    fn test_particle_calibration_custom_center() {
        let cli = Cli::parse_from(["program", "particle-calibration", "grid.txt", "-c", "4,5"]);

        match cli.command {
            Command::ParticleCalibration { grid, center } => {
                assert_eq!(grid, PathBuf::from("grid.txt"));
                assert_eq!(center, MatrixCoord::new(4, 5));
            }
            other => unreachable!("Expected particle-calibration, got {other:?}"),
        }
    }

    // Tests malformed coordinates fail argument parsing
    // Verified by falling back to the default start
    #[test]
    fn test_malformed_coordinate_rejected() {
        let result = Cli::try_parse_from([
            "program",
            "tunnel-system",
            "map.txt",
            "dirs.txt",
            "--start",
            "3;21",
        ]);

        assert!(result.is_err());
    }

    // Tests verbosity flags pick the log filter
    // Verified by letting --verbose win over --quiet
    #[test]
    fn test_log_filter_from_flags() {
        let filter = |args: &[&str]| {
            let mut full = vec!["program"];
            full.extend_from_slice(args);
            full.extend_from_slice(&["shredded-paper", "input.txt"]);
            Cli::parse_from(full).log_filter()
        };

        assert_eq!(filter(&[]), "warn");
        assert_eq!(filter(&["-v"]), "info");
        assert_eq!(filter(&["-vv"]), "debug");
        assert_eq!(filter(&["-q", "-vv"]), "error");
    }

    // Tests the runner dispatches to the chosen puzzle
    // Verified by always running the shredded paper puzzle
    #[test]
    fn test_runner_solves_selected_puzzle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.txt");
        fs::write(&path, "•.\n.•\n").unwrap();

        let cli = Cli::parse_from([
            "program",
            "particle-calibration",
            path.to_str().unwrap(),
            "--center",
            "0,0",
        ]);

        assert_eq!(PuzzleRunner::new(cli).solve().unwrap(), "2");
    }
}

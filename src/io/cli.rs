//! Command-line interface for running the puzzle solvers

use crate::io::configuration::{
    DEFAULT_CALIBRATION_CENTER, DEFAULT_HERO_START, DEFAULT_LOG_FILTER,
};
use crate::io::error::{PuzzleError, Result};
use crate::io::reader::{read, read_lines};
use crate::puzzles::{particle_calibration, shredded_paper, tunnel_system};
use crate::spatial::MatrixCoord;
use crate::spatial::builder::build_char_matrix;
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cursorgrid")]
#[command(author, version, about = "Solve text grid puzzles")]
/// Command-line arguments for the puzzle runner
pub struct Cli {
    /// Puzzle to solve
    #[command(subcommand)]
    pub command: Command,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more detail (repeat for debug output)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available puzzles
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reassemble a shredded sheet, one shred per input line
    ShreddedPaper {
        /// File holding the shreds
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Walk a tunnel map and report where the hero ends up
    TunnelSystem {
        /// Tunnel map, one row per line
        #[arg(value_name = "MAP")]
        map: PathBuf,

        /// Compass directions (N, E, S, W)
        #[arg(value_name = "DIRECTIONS")]
        directions: PathBuf,

        /// Hero start position as x,y
        #[arg(short, long, default_value_t = MatrixCoord::from(DEFAULT_HERO_START))]
        start: MatrixCoord,
    },

    /// Sum particle distances from a calibration centre
    ParticleCalibration {
        /// Particle grid, one row per line
        #[arg(value_name = "GRID")]
        grid: PathBuf,

        /// Calibration centre as x,y
        #[arg(short, long, default_value_t = MatrixCoord::from(DEFAULT_CALIBRATION_CENTER))]
        center: MatrixCoord,
    },
}

impl Cli {
    /// Log filter implied by the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_FILTER,
            1 => "info",
            _ => "debug",
        }
    }

    /// Install the logger, letting `RUST_LOG` override the flags
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_filter());
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("logger already installed");
        }
    }
}

/// Runs the selected puzzle and writes its answer to stdout
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the selected puzzle and print the answer
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read or parsed, or if the
    /// answer cannot be written
    pub fn run(&self) -> Result<()> {
        let answer = self.solve()?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{answer}").map_err(|source| PuzzleError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source,
        })
    }

    /// Solve the selected puzzle and return the answer text
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read or parsed
    pub fn solve(&self) -> Result<String> {
        match &self.cli.command {
            Command::ShreddedPaper { input } => {
                info!("reassembling shreds from {}", input.display());
                shredded_paper::solve(&read_lines(input)?)
            }
            Command::TunnelSystem {
                map,
                directions,
                start,
            } => {
                info!("walking {} from {start}", map.display());
                let map = build_char_matrix(&read(map)?)?;
                let directions = tunnel_system::parse_directions(&read_lines(directions)?);
                let end = tunnel_system::solve(map, &directions, *start);
                Ok(tunnel_system::render(end))
            }
            Command::ParticleCalibration { grid, center } => {
                info!("calibrating {} around {center}", grid.display());
                let grid = build_char_matrix(&read(grid)?)?;
                Ok(particle_calibration::solve(grid, *center).to_string())
            }
        }
    }
}

//! CLI entry point for the grid puzzle solvers

use clap::Parser;
use cursorgrid::io::cli::{Cli, PuzzleRunner};

fn main() -> cursorgrid::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    PuzzleRunner::new(cli).run()
}

//! Calibrating against a particle grid

use log::info;

use crate::io::configuration::PARTICLE_GLYPH;
use crate::spatial::{Matrix, MatrixCoord, ScanExtent};

/// Sum of Manhattan distances from every particle to `center`
pub fn solve(mut grid: Matrix<char>, center: MatrixCoord) -> u64 {
    let particles = grid.find_addresses(PARTICLE_GLYPH, ScanExtent::Full);
    info!("found {} particles", particles.len());

    particles
        .iter()
        .map(|particle| u64::from(particle.manhattan_distance_to(&center)))
        .sum()
}

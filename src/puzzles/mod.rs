//! Puzzle solvers
//!
//! Each solver takes already-loaded text and returns its answer; file access
//! stays in `io`.

/// Walking a tunnel map from directions
pub mod tunnel_system;
/// Summing particle distances from a calibration centre
pub mod particle_calibration;
/// Reassembling a sheet from its shreds
pub mod shredded_paper;

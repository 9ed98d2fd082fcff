//! Rendering markers and puzzle defaults

// Print overlays
/// Marker drawn over the cursor cell
pub const CURSOR_MARKER: char = 'D';
/// Marker drawn over the tracked origin cell
pub const ORIGIN_MARKER: char = 'S';

/// Fill value for cells of grids built from text
pub const TEXT_FILL: char = ' ';

// Shredded paper
/// Number of leading `BORDER_GLYPH` characters that mark a border shred
pub const BORDER_PREFIX_LEN: usize = 23;
/// Glyph a border shred is made of
pub const BORDER_GLYPH: char = '█';
/// Score order of the leading glyph of a shred's second token
pub const SHRED_SCORE_ORDER: [char; 12] =
    ['T', 'I', 'M', 'E', '-', 'C', 'O', 'R', 'P', '▄', '█', '▀'];

// Tunnel system
/// Hero start position on the tunnel map
pub const DEFAULT_HERO_START: (i32, i32) = (3, 21);
/// Cell value of an open tunnel
pub const OPEN_TUNNEL: char = ' ';

// Particle calibration
/// Calibration centre on the particle grid
pub const DEFAULT_CALIBRATION_CENTER: (i32, i32) = (51, 26);
/// Cell value of a particle
pub const PARTICLE_GLYPH: char = '•';

// Logging
/// Log filter used when neither `RUST_LOG` nor a verbosity flag is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

//! Reassembling a shredded sheet
//!
//! Every input line is one shred. Border shreds are discarded and the rest
//! are ordered by indent, then by the rank of the glyph that opens their
//! second token.

use std::iter;

use log::info;

use crate::io::configuration::{BORDER_GLYPH, BORDER_PREFIX_LEN, SHRED_SCORE_ORDER};
use crate::io::error::{Result, invalid_input};

/// One line of the shredded sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperShred {
    text: String,
    is_border: bool,
    indent: usize,
    score: usize,
}

impl PaperShred {
    /// Parse a shred from its line of text
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidInput` if a content shred has no second
    /// token or the token opens with a glyph outside the score order
    pub fn parse(text: &str) -> Result<Self> {
        let is_border = text
            .chars()
            .take(BORDER_PREFIX_LEN)
            .eq(iter::repeat_n(BORDER_GLYPH, BORDER_PREFIX_LEN));

        if is_border {
            return Ok(Self {
                text: text.to_owned(),
                is_border,
                indent: 0,
                score: 0,
            });
        }

        let mut parts = text.split(' ');
        let indent = parts.next().map_or(0, |part| part.chars().count());

        let Some(glyph) = parts.next().and_then(|part| part.chars().next()) else {
            return Err(invalid_input(&format!("shred '{text}' has no second token")));
        };

        let Some(score) = SHRED_SCORE_ORDER.iter().position(|&c| c == glyph) else {
            return Err(invalid_input(&format!(
                "shred '{text}' opens its second token with unscored glyph '{glyph}'"
            )));
        };

        Ok(Self {
            text: text.to_owned(),
            is_border,
            indent,
            score,
        })
    }

    /// Original line text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this shred is part of the sheet border
    pub const fn is_border(&self) -> bool {
        self.is_border
    }

    /// Length of the first space-separated token
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Rank of the glyph opening the second token
    pub const fn score(&self) -> usize {
        self.score
    }
}

/// Reassemble the sheet, one shred per output line
///
/// # Errors
///
/// Returns `PuzzleError::InvalidInput` if any content shred fails to parse
pub fn solve(lines: &[String]) -> Result<String> {
    let mut shreds = lines
        .iter()
        .map(|line| PaperShred::parse(line))
        .collect::<Result<Vec<_>>>()?;

    shreds.retain(|shred| !shred.is_border());
    shreds.sort_by_key(|shred| (shred.indent(), shred.score()));
    info!("reassembled {} content shreds", shreds.len());

    Ok(shreds
        .iter()
        .map(PaperShred::text)
        .collect::<Vec<_>>()
        .join("\n"))
}

//! Type aliases and common types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One latency observation in an opaque fixed unit (nanoseconds in practice).
///
/// A sample has no meaning beyond magnitude ordering. Non-negativity and
/// integrality are enforced by the type: a source value that does not fit is
/// a parse failure upstream, never a silent coercion.
pub type Sample = u64;

/// Ordered sequence of samples for a single (strategy, condition) pair.
///
/// Order is order of occurrence in the source. The sequence is not stored
/// sorted; percentile computation sorts a scratch copy.
pub type SampleSet = Vec<Sample>;

/// Measured scenario a sample set was collected under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Reads that observed a value.
    ReaderSuccess,
    /// Reads that found nothing to consume.
    ReaderFailure,
    /// Writes timed while a reader continuously polls.
    ReaderWrites,
}

impl Condition {
    /// All conditions, in canonical column order.
    pub const ALL: [Condition; 3] = [
        Condition::ReaderSuccess,
        Condition::ReaderFailure,
        Condition::ReaderWrites,
    ];

    /// File-name token for this condition.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::ReaderSuccess => "reader_success",
            Condition::ReaderFailure => "reader_failure",
            Condition::ReaderWrites => "reader_writes",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color for one strategy's histograms.
///
/// Carried through to the renderer untouched; the core attaches no meaning
/// to it beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default palette, cycled over strategies configured without an
    /// explicit color.
    pub const PALETTE: [Rgb; 6] = [
        Rgb::new(31, 119, 180),  // blue
        Rgb::new(255, 127, 14),  // orange
        Rgb::new(44, 160, 44),   // green
        Rgb::new(214, 39, 40),   // red
        Rgb::new(148, 103, 189), // purple
        Rgb::new(140, 86, 75),   // brown
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_tokens_match_file_convention() {
        assert_eq!(Condition::ReaderSuccess.as_str(), "reader_success");
        assert_eq!(Condition::ReaderFailure.as_str(), "reader_failure");
        assert_eq!(Condition::ReaderWrites.as_str(), "reader_writes");
    }

    #[test]
    fn condition_display_matches_token() {
        for condition in Condition::ALL {
            assert_eq!(condition.to_string(), condition.as_str());
        }
    }

    #[test]
    fn condition_order_is_fixed() {
        assert_eq!(
            Condition::ALL,
            [
                Condition::ReaderSuccess,
                Condition::ReaderFailure,
                Condition::ReaderWrites,
            ]
        );
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in Rgb::PALETTE.iter().enumerate() {
            for b in &Rgb::PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

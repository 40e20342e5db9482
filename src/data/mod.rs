//! Loading raw latency samples from flat text sources.
//!
//! Benchmark harnesses dump one file per (strategy, condition) pair, each
//! holding one decimal integer per line in nanoseconds. This module parses
//! those files into ordered sample sequences.
//!
//! # Source format
//!
//! - One base-10 non-negative integer per line
//! - Surrounding whitespace tolerated, empty lines skipped
//! - No header row, no comment syntax, no embedded units
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use latgrid::data::load_samples;
//!
//! let samples = load_samples(Path::new("atomic_reader_success.txt"))?;
//! println!("loaded {} samples", samples.len());
//! # Ok::<(), latgrid::LoadError>(())
//! ```

mod loader;

pub use loader::{load_samples, parse_samples};

use thiserror::Error;

/// Errors that can occur while loading a sample source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("source unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// A line was not a valid non-negative base-10 integer.
    #[error("line {line}: invalid sample '{value}': expected a non-negative base-10 integer")]
    Parse {
        /// 1-based physical line number of the offending line.
        line: usize,
        /// The offending line, as read (whitespace trimmed).
        value: String,
    },
}

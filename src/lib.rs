//! # latgrid
//!
//! Prepare latency-sample distributions for comparative histogram
//! rendering.
//!
//! Benchmarks of reader/writer synchronization strategies (atomic,
//! blocking, mutex, ticket locks) dump one flat text file of per-trial
//! latencies per (strategy, condition) pair, where the condition is one of
//! successful reads, failed reads, or writes. This crate turns those files
//! into a validated dataset ready for a histogram grid:
//!
//! - Parse per-trial samples from flat text sources, one integer per line
//! - Trim upper-tail outliers at a configurable percentile so a handful of
//!   extreme stalls do not distort the visual comparison
//! - Assemble the complete (strategy × condition) grid, failing with a
//!   report that names every missing or malformed source
//!
//! Drawing the grid is a collaborator concern behind [`GridRenderer`]; the
//! dataset carries everything a renderer needs (trimmed samples, bin
//! count, per-strategy colors, per-cell caption labels).
//!
//! ## Quick start
//!
//! ```no_run
//! use latgrid::{Dataset, DirSource, GridConfig};
//!
//! let config = GridConfig::new()
//!     .strategy("atomic")
//!     .strategy("mutex")
//!     .percentile(99.0)
//!     .bins(100);
//!
//! let dataset = Dataset::build(&config, &DirSource::new("bench-out"))?;
//! for cell in dataset.iter() {
//!     println!("{}: {} samples", cell.label(), cell.samples.len());
//! }
//! # Ok::<(), latgrid::DatasetIncomplete>(())
//! ```
//!
//! Strategies are an open set: extending the comparison to a new
//! synchronization primitive is one more [`GridConfig::strategy`] call, and
//! its sources are discovered by the same `<strategy>_<condition>.txt`
//! convention.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod types;

// Functional modules
pub mod catalog;
pub mod data;
pub mod output;
pub mod render;
pub mod statistics;

// Re-exports for public API
pub use catalog::{
    Cell, Dataset, DatasetIncomplete, DirSource, PairError, PairFailure, SourceResolver,
};
pub use config::{GridConfig, StrategySpec};
pub use data::{load_samples, parse_samples, LoadError};
pub use render::GridRenderer;
pub use statistics::{percentile_of, trim_upper, EmptyInput};
pub use types::{Condition, Rgb, Sample, SampleSet};

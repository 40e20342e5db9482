//! Statistical methods for latency-sample preparation.
//!
//! This module provides the numeric core of the pipeline:
//! - Percentile computation over integer samples using one fixed,
//!   documented interpolation rule
//! - Upper-tail outlier trimming so a handful of extreme stalls do not
//!   distort a comparative histogram

mod percentile;

pub use percentile::{percentile_of, trim_upper, EmptyInput};

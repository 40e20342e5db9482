//! Human- and machine-facing views of a prepared dataset.
//!
//! - [`terminal`]: colored, box-drawn summary for a quick sanity check
//!   before rendering
//! - [`json`]: serialization for out-of-process renderers

pub mod json;
pub mod terminal;

//! Rendering seam.
//!
//! The core stops at a fully validated [`Dataset`]; turning it into pixels
//! is a collaborator concern behind this trait. A dataset carries everything
//! a grid renderer needs: cell iteration with trimmed samples, the
//! configured bin count, a color per strategy, and a caption label per
//! cell. Implementations own all visual layout, axis scaling, and output
//! format.

use crate::catalog::Dataset;

/// A consumer that draws a comparison grid from a prepared dataset.
///
/// The dataset handed in is always complete: every configured
/// (strategy, condition) pair is present with a non-empty trimmed sample
/// set.
pub trait GridRenderer {
    /// Error the renderer may produce.
    type Error;

    /// Render the complete grid.
    fn render(&mut self, dataset: &Dataset) -> Result<(), Self::Error>;
}

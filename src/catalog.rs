//! Dataset assembly over every (strategy, condition) pair.
//!
//! The catalog resolves one source per pair, loads it, trims the upper
//! tail, and assembles the complete grid. Construction is all-or-nothing:
//! any missing or malformed source fails the whole build, and the error
//! lists every failing pair so one run surfaces every problem.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::GridConfig;
use crate::data::{load_samples, LoadError};
use crate::statistics::{trim_upper, EmptyInput};
use crate::types::{Condition, Rgb, SampleSet};

/// Maps a (strategy, condition) pair to the path of its sample source.
///
/// Implementations decide the discovery scheme; [`DirSource`] provides the
/// standard `<strategy>_<condition>.txt` convention. Closures with the same
/// signature work directly.
pub trait SourceResolver {
    /// Path holding raw samples for `strategy` measured under `condition`.
    fn resolve(&self, strategy: &str, condition: Condition) -> PathBuf;
}

impl<F> SourceResolver for F
where
    F: Fn(&str, Condition) -> PathBuf,
{
    fn resolve(&self, strategy: &str, condition: Condition) -> PathBuf {
        self(strategy, condition)
    }
}

/// Resolver for the standard naming convention: a single directory holding
/// `<strategy>_<condition>.txt` for every pair.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Resolve sources inside `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceResolver for DirSource {
    fn resolve(&self, strategy: &str, condition: Condition) -> PathBuf {
        self.root
            .join(format!("{}_{}.txt", strategy, condition.as_str()))
    }
}

/// One grid cell: the trimmed samples for a single (strategy, condition)
/// pair, plus everything a renderer needs to draw and caption it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Strategy name (grid row).
    pub strategy: String,
    /// Measured condition (grid column).
    pub condition: Condition,
    /// Histogram color for this strategy.
    pub color: Rgb,
    /// Trimmed samples, in source order. Never empty.
    pub samples: SampleSet,
}

impl Cell {
    /// Caption label for this cell, `<strategy>_<condition>`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.strategy, self.condition)
    }
}

/// Complete comparison dataset: one trimmed [`Cell`] per configured
/// (strategy, condition) pair, in row-major rendering order.
///
/// A dataset is complete or absent. [`Dataset::build`] either resolves
/// every pair or fails with [`DatasetIncomplete`]; a partially populated
/// grid never reaches a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    bins: usize,
    cells: Vec<Cell>,
}

impl Dataset {
    /// Load, trim, and assemble every (strategy, condition) pair.
    ///
    /// Pairs are mutually independent and resolved in row-major order
    /// (configured strategy order, then [`Condition::ALL`]). Every failing
    /// pair is collected before returning, so the error reports all
    /// missing and malformed sources at once.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetIncomplete`] if any pair fails to resolve, load,
    /// or trim.
    ///
    /// # Panics
    ///
    /// Panics if `config` has no strategies.
    pub fn build(
        config: &GridConfig,
        resolver: &impl SourceResolver,
    ) -> Result<Dataset, DatasetIncomplete> {
        assert!(
            !config.strategies().is_empty(),
            "at least one strategy must be configured"
        );

        let mut cells = Vec::with_capacity(config.strategies().len() * Condition::ALL.len());
        let mut failures = Vec::new();

        for spec in config.strategies() {
            for condition in Condition::ALL {
                let path = resolver.resolve(&spec.name, condition);
                match load_trimmed(&path, config.trim_percentile()) {
                    Ok(samples) => cells.push(Cell {
                        strategy: spec.name.clone(),
                        condition,
                        color: spec.color,
                        samples,
                    }),
                    Err(error) => failures.push(PairFailure {
                        strategy: spec.name.clone(),
                        condition,
                        path,
                        error,
                    }),
                }
            }
        }

        if !failures.is_empty() {
            return Err(DatasetIncomplete { failures });
        }

        Ok(Dataset {
            bins: config.bin_count(),
            cells,
        })
    }

    /// Histogram bin count handed through to the renderer.
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Number of cells (`strategies × conditions`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the dataset holds no cells. Never true for a built dataset.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major rendering order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Grid rows: one slice of cells per strategy, in configured order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(Condition::ALL.len())
    }

    /// Trimmed samples for one pair, if it is part of the grid.
    pub fn get(&self, strategy: &str, condition: Condition) -> Option<&SampleSet> {
        self.cells
            .iter()
            .find(|cell| cell.strategy == strategy && cell.condition == condition)
            .map(|cell| &cell.samples)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn load_trimmed(path: &Path, percentile: f64) -> Result<SampleSet, PairError> {
    let raw = load_samples(path)?;
    let trimmed = trim_upper(&raw, percentile)?;
    Ok(trimmed)
}

/// Cause of a single pair's failure.
#[derive(Debug, Error)]
pub enum PairError {
    /// The source was missing, unreadable, or malformed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The source parsed but held no samples to trim.
    #[error(transparent)]
    Empty(#[from] EmptyInput),
}

/// One failed (strategy, condition) pair inside a [`DatasetIncomplete`]
/// report.
#[derive(Debug)]
pub struct PairFailure {
    /// Strategy of the failed pair.
    pub strategy: String,
    /// Condition of the failed pair.
    pub condition: Condition,
    /// Path the pair resolved to.
    pub path: PathBuf,
    /// What went wrong.
    pub error: PairError,
}

impl PairFailure {
    /// Caption label of the failed pair, `<strategy>_<condition>`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.strategy, self.condition)
    }
}

/// Aggregate build failure listing every pair that did not resolve.
///
/// Collected rather than short-circuited: one failed run names every
/// missing or malformed source, not just the first.
#[derive(Debug)]
pub struct DatasetIncomplete {
    /// Every failed pair, in row-major order.
    pub failures: Vec<PairFailure>,
}

impl fmt::Display for DatasetIncomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dataset incomplete: {} pair(s) failed to resolve",
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(
                f,
                "\n  {} [{}]: {}",
                failure.label(),
                failure.path.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for DatasetIncomplete {}

//! Configuration for comparison-grid preparation.

use crate::types::Rgb;

/// One configured synchronization strategy under comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySpec {
    /// Lowercase identifier, as used in source file names (e.g. `atomic`,
    /// `ticket`).
    pub name: String,
    /// Histogram color for this strategy's row.
    pub color: Rgb,
}

/// Configuration for building a comparison dataset.
///
/// Strategies are an open set: adding a new synchronization primitive to the
/// comparison means adding one entry here, never touching the parsing or
/// trimming logic. Strategy order determines rendering row order.
///
/// # Example
///
/// ```
/// use latgrid::{GridConfig, Rgb};
///
/// let config = GridConfig::new()
///     .strategy("atomic")
///     .strategy("blocking")
///     .strategy_with_color("mutex", Rgb::new(200, 40, 40))
///     .strategy("ticket")
///     .percentile(99.0)
///     .bins(100);
///
/// assert_eq!(config.strategies().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GridConfig {
    strategies: Vec<StrategySpec>,
    percentile: f64,
    bins: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Create a configuration with no strategies, a 99th-percentile cutoff,
    /// and 100 histogram bins.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            percentile: 99.0,
            bins: 100,
        }
    }

    /// Add a strategy, assigning the next color from [`Rgb::PALETTE`].
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a non-empty lowercase `[a-z0-9_]` token, or
    /// if the strategy was already added.
    pub fn strategy(self, name: impl Into<String>) -> Self {
        let color = Rgb::PALETTE[self.strategies.len() % Rgb::PALETTE.len()];
        self.strategy_with_color(name, color)
    }

    /// Add a strategy with an explicit histogram color.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a non-empty lowercase `[a-z0-9_]` token, or
    /// if the strategy was already added.
    pub fn strategy_with_color(mut self, name: impl Into<String>, color: Rgb) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "strategy name must not be empty");
        assert!(
            name.bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
            "strategy name must be a lowercase [a-z0-9_] token, got '{name}'"
        );
        assert!(
            self.strategies.iter().all(|s| s.name != name),
            "strategy '{name}' was already added"
        );

        self.strategies.push(StrategySpec { name, color });
        self
    }

    /// Set the upper-tail trim percentile.
    ///
    /// # Panics
    ///
    /// Panics if `percentile` is outside (0, 100].
    pub fn percentile(mut self, percentile: f64) -> Self {
        assert!(
            percentile > 0.0 && percentile <= 100.0,
            "percentile must be in (0, 100]"
        );
        self.percentile = percentile;
        self
    }

    /// Set the histogram bin count handed through to the renderer.
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn bins(mut self, bins: usize) -> Self {
        assert!(bins > 0, "bins must be > 0");
        self.bins = bins;
        self
    }

    /// Configured strategies, in rendering row order.
    pub fn strategies(&self) -> &[StrategySpec] {
        &self.strategies
    }

    /// Configured trim percentile.
    pub fn trim_percentile(&self) -> f64 {
        self.percentile
    }

    /// Configured histogram bin count.
    pub fn bin_count(&self) -> usize {
        self.bins
    }
}

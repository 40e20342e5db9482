//! Percentile computation using linear interpolation between order statistics.
//!
//! This module implements Type 7 quantiles following Hyndman & Fan (1996),
//! the definition used by most numerical packages as their default.
//!
//! **Type 7 formula** (for a sorted sample x of size n at percentile p):
//! ```text
//! r = p / 100 * (n - 1)
//! T = x[floor(r)] + (r - floor(r)) * (x[ceil(r)] - x[floor(r)])
//! ```
//!
//! Different quantile definitions (nearest-rank, inverse-CDF variants)
//! produce different thresholds on small sample counts, so the rule is
//! fixed and documented here rather than left to an implementation default.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

use thiserror::Error;

use crate::types::{Sample, SampleSet};

/// Error returned when trimming a zero-length sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot trim an empty sample set: the percentile threshold is undefined")]
pub struct EmptyInput;

/// Compute the interpolated percentile threshold of `samples`.
///
/// Uses the Type 7 formula above. Order statistics are found with
/// `select_nth_unstable` on a scratch copy for O(n) expected time; the
/// input itself is never reordered.
///
/// # Arguments
///
/// * `samples` - Latency observations, in any order
/// * `percentile` - Percentile in (0, 100]
///
/// # Panics
///
/// Panics if `samples` is empty or if `percentile` is outside (0, 100].
pub fn percentile_of(samples: &[Sample], percentile: f64) -> f64 {
    assert!(
        !samples.is_empty(),
        "cannot compute a percentile of an empty slice"
    );
    assert!(
        percentile > 0.0 && percentile <= 100.0,
        "percentile must be in (0, 100]"
    );

    let n = samples.len();
    if n == 1 {
        return samples[0] as f64;
    }

    let r = percentile / 100.0 * (n - 1) as f64;
    let lower = r.floor() as usize;
    let upper = r.ceil() as usize;
    let frac = r - lower as f64;

    let mut scratch = samples.to_vec();

    if lower == upper {
        // Rank lands exactly on an order statistic
        let (_, &mut value, _) = scratch.select_nth_unstable(lower);
        return value as f64;
    }

    // Select the larger index first, then the smaller. This works because
    // select_nth_unstable leaves everything before the nth element <= it,
    // so the second selection stays valid on the same buffer.
    let (_, &mut upper_value, _) = scratch.select_nth_unstable(upper);
    let (_, &mut lower_value, _) = scratch.select_nth_unstable(lower);

    lower_value as f64 + frac * (upper_value as f64 - lower_value as f64)
}

/// Remove samples above the interpolated `percentile` threshold.
///
/// Returns the subsequence of `samples`, in original order, whose values are
/// `<= T` where `T = percentile_of(samples, percentile)`. The threshold is
/// at least the minimum value, so the result is non-empty for any non-empty
/// input. Pure function of its inputs: the same samples and percentile
/// always produce the same output.
///
/// Trimming is a single-pass operation, not an idempotent one: applying it
/// again at the same percentile recomputes the threshold over the shrunk
/// set, which can land below values the first pass retained and remove
/// them. Callers trim each sample set exactly once.
///
/// # Errors
///
/// Returns [`EmptyInput`] if `samples` is empty.
///
/// # Panics
///
/// Panics if `percentile` is outside (0, 100].
pub fn trim_upper(samples: &[Sample], percentile: f64) -> Result<SampleSet, EmptyInput> {
    if samples.is_empty() {
        return Err(EmptyInput);
    }

    let threshold = percentile_of(samples, percentile);

    Ok(samples
        .iter()
        .copied()
        .filter(|&value| value as f64 <= threshold)
        .collect())
}

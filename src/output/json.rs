//! JSON serialization for prepared datasets.
//!
//! An out-of-process renderer consumes the same contract as an in-process
//! one: cells with trimmed samples, bin count, colors, and labels.

use crate::catalog::Dataset;

/// Serialize a dataset to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `Dataset`).
pub fn to_json(dataset: &Dataset) -> Result<String, serde_json::Error> {
    serde_json::to_string(dataset)
}

/// Serialize a dataset to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `Dataset`).
pub fn to_json_pretty(dataset: &Dataset) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dataset, DirSource};
    use crate::config::GridConfig;
    use crate::types::Condition;
    use std::fs;
    use tempfile::TempDir;

    fn make_dataset() -> Dataset {
        let dir = TempDir::new().unwrap();
        for condition in Condition::ALL {
            fs::write(
                dir.path().join(format!("atomic_{}.txt", condition.as_str())),
                "10\n20\n30\n",
            )
            .unwrap();
        }

        let config = GridConfig::new().strategy("atomic").percentile(100.0);
        Dataset::build(&config, &DirSource::new(dir.path())).unwrap()
    }

    #[test]
    fn serializes_cells_with_samples() {
        let json = to_json(&make_dataset()).unwrap();

        assert!(json.contains("\"bins\":100"));
        assert!(json.contains("\"strategy\":\"atomic\""));
        assert!(json.contains("\"condition\":\"reader_success\""));
        assert!(json.contains("[10,20,30]"));
    }

    #[test]
    fn pretty_output_is_multiline() {
        let json = to_json_pretty(&make_dataset()).unwrap();
        assert!(json.lines().count() > 1);
    }
}

//! Flat-file latency sample parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::LoadError;
use crate::types::SampleSet;

/// Parse latency samples from a buffered reader.
///
/// Every non-empty line (after trimming surrounding whitespace) is parsed as
/// one base-10 non-negative integer; line order is preserved as sample
/// order.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] with the 1-based line number and raw content
/// for the first line that is not a valid non-negative integer, or
/// [`LoadError::Unavailable`] if the reader fails mid-stream.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<SampleSet, LoadError> {
    let mut samples = SampleSet::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        let value = line.parse::<u64>().map_err(|_| LoadError::Parse {
            line: line_num + 1,
            value: line.to_string(),
        })?;

        samples.push(value);
    }

    Ok(samples)
}

/// Load latency samples from a file.
///
/// # Errors
///
/// Returns [`LoadError::Unavailable`] if the file cannot be opened, plus
/// everything [`parse_samples`] can return.
pub fn load_samples(path: &Path) -> Result<SampleSet, LoadError> {
    let file = File::open(path)?;
    parse_samples(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_lines_in_order() {
        let input = b"300\n100\n200\n" as &[u8];
        let samples = parse_samples(input).unwrap();
        assert_eq!(samples, vec![300, 100, 200]);
    }

    #[test]
    fn returns_one_sample_per_valid_line() {
        let input: Vec<u8> = (0..1000u64)
            .map(|i| format!("{}\n", i * 7))
            .collect::<String>()
            .into_bytes();
        let samples = parse_samples(&input[..]).unwrap();
        assert_eq!(samples.len(), 1000);
    }

    #[test]
    fn skips_empty_lines_and_trims_whitespace() {
        let input = b"  10\n\n20\t\n\r\n30\n" as &[u8];
        let samples = parse_samples(input).unwrap();
        assert_eq!(samples, vec![10, 20, 30]);
    }

    #[test]
    fn empty_source_yields_empty_set() {
        let samples = parse_samples(&b""[..]).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn non_integral_line_fails_with_its_index() {
        let input = b"10\n20\n12.5\n40\n" as &[u8];
        let err = parse_samples(input).unwrap_err();

        match err {
            LoadError::Parse { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "12.5");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn negative_line_fails_with_its_index() {
        let input = b"10\n-3\n30\n" as &[u8];
        let err = parse_samples(input).unwrap_err();

        match err {
            LoadError::Parse { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "-3");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn line_numbers_count_physical_lines() {
        // Empty line 2 still advances the reported line number
        let input = b"10\n\nbogus\n" as &[u8];
        let err = parse_samples(input).unwrap_err();

        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "111").unwrap();
        writeln!(file, "222").unwrap();
        writeln!(file, "333").unwrap();
        file.flush().unwrap();

        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples, vec![111, 222, 333]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_samples(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Unavailable(_)));
    }
}

//! Terminal summary formatting with colors and box drawing.

use colored::Colorize;

use crate::catalog::Dataset;
use crate::statistics::percentile_of;
use crate::types::Sample;

/// Format a prepared dataset for human-readable terminal output.
///
/// One block per strategy row, one line per cell with the retained sample
/// count and the min/median/max of the trimmed samples. Intended as a quick
/// sanity check before handing the dataset to a renderer.
pub fn format_dataset(dataset: &Dataset) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(
        &"Comparison dataset".bold().to_string(),
    ));
    output.push_str(&format_box_line(&format!(
        "{} cells, {} bins",
        dataset.len(),
        dataset.bins()
    )));

    for row in dataset.rows() {
        output.push_str(&format_box_separator());
        for cell in row {
            output.push_str(&format_box_line(&cell.label().cyan().to_string()));

            let (min, median, max) = summarize(&cell.samples);
            output.push_str(&format_box_line(&format!(
                "  {} samples, min {} / median {:.0} / max {} ns",
                cell.samples.len(),
                min,
                median,
                max
            )));
        }
    }

    output.push_str(&format_box_bottom());
    output
}

fn summarize(samples: &[Sample]) -> (Sample, f64, Sample) {
    // Cells of a built dataset are never empty; trimming keeps the minimum.
    if samples.is_empty() {
        return (0, 0.0, 0);
    }

    let min = samples.iter().copied().min().unwrap_or_default();
    let max = samples.iter().copied().max().unwrap_or_default();
    let median = percentile_of(samples, 50.0);

    (min, median, max)
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

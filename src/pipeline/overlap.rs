// Overlap pipeline: score each generated summary against its reference.
//
// Unlike the keyword pipeline there is no per-row isolation. The first row
// the scorer rejects aborts the run and no columns are appended. An empty
// cell is not a failure: it is scored as the text "nan", the way a pandas
// NaN reads once turned into a string.

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::rouge::scorer::OverlapScorer;

pub const CANDIDATE_COLUMN: &str = "text";
pub const REFERENCE_COLUMN: &str = "article_summaries";

/// Columns the input CSV must have.
pub const REQUIRED_COLUMNS: [&str; 2] = [CANDIDATE_COLUMN, REFERENCE_COLUMN];

/// Text scored in place of an empty candidate or reference cell.
pub const MISSING_CELL_TEXT: &str = "nan";

/// Per-scorer summary of one overlap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapSummary {
    pub column: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Outcome of one overlap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapRun {
    pub rows: usize,
    pub summaries: Vec<OverlapSummary>,
}

/// Run every scorer over every row and append one column per scorer,
/// named after the scorer.
pub fn run(
    dataset: &mut Dataset,
    scorers: &[&dyn OverlapScorer],
    show_progress: bool,
) -> Result<OverlapRun> {
    let candidates = dataset.text_column(CANDIDATE_COLUMN)?;
    let references = dataset.text_column(REFERENCE_COLUMN)?;
    let rows = dataset.height();

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); scorers.len()];

    let pb = super::row_progress("Scoring", rows, show_progress);

    for (row, (candidate, reference)) in candidates.iter().zip(&references).enumerate() {
        if candidate.is_none() || reference.is_none() {
            debug!(row, "Empty cell scored as \"{MISSING_CELL_TEXT}\"");
        }
        let candidate = candidate.as_deref().unwrap_or(MISSING_CELL_TEXT);
        let reference = reference.as_deref().unwrap_or(MISSING_CELL_TEXT);

        for (scorer, column) in scorers.iter().zip(columns.iter_mut()) {
            let value = match scorer.score(row, candidate, reference) {
                Ok(value) => value,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };
            debug!(row, metric = scorer.name(), value, "Scored row");
            column.push(value);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut summaries = Vec::with_capacity(scorers.len());
    for (scorer, values) in scorers.iter().zip(columns) {
        summaries.push(summarize(scorer.name(), &values));
        dataset.append_score_column(scorer.name(), values)?;
    }

    for summary in &summaries {
        info!(
            metric = %summary.column,
            rows,
            mean = summary.mean,
            "Overlap pipeline complete"
        );
    }

    Ok(OverlapRun { rows, summaries })
}

fn summarize(column: &str, values: &[f64]) -> OverlapSummary {
    if values.is_empty() {
        return OverlapSummary {
            column: column.to_string(),
            mean: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let sum: f64 = values.iter().sum();
    OverlapSummary {
        column: column.to_string(),
        mean: sum / values.len() as f64,
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty() {
        let s = summarize("rouge1", &[]);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 0.0);
    }

    #[test]
    fn test_summarize_values() {
        let s = summarize("rouge1", &[0.2, 0.4, 0.9]);
        assert!((s.mean - 0.5).abs() < 1e-9);
        assert_eq!(s.min, 0.2);
        assert_eq!(s.max, 0.9);
    }
}

// Colored terminal output for enriched tables and score distributions.
//
// This module handles all terminal-specific formatting. The main.rs
// subcommands delegate here once a pipeline has finished.

use colored::Colorize;

use super::{score_histogram, truncate_chars};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::pipeline::keywords::{
    KeywordRun, CATEGORIES_COLUMN, ERROR_PREFIX, KEYWORDS_COLUMN, SCORE_COLUMN, TAG_COLUMN,
};
use crate::pipeline::overlap::{OverlapRun, CANDIDATE_COLUMN, REFERENCE_COLUMN};

/// Width of the longest bar in a distribution chart.
const BAR_WIDTH: usize = 40;

/// Display the keyword results table, limited to `max_rows` rows.
pub fn display_keyword_results(dataset: &Dataset, max_rows: usize) -> Result<()> {
    let tags = dataset.text_column(TAG_COLUMN)?;
    let keywords = dataset.text_column(KEYWORDS_COLUMN)?;
    let categories = dataset.text_column(CATEGORIES_COLUMN)?;
    let scores = dataset.score_column(SCORE_COLUMN)?;

    println!(
        "\n{}",
        format!("=== Extracted Results ({} rows) ===", dataset.height()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<14} {:<44} {:<30} {:>5}",
        "#".dimmed(),
        "Tag".dimmed(),
        "Keywords".dimmed(),
        "Categories".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(102).dimmed());

    for i in 0..dataset.height().min(max_rows) {
        let tag = tags[i].as_deref().unwrap_or("");
        let kw = keywords[i].as_deref().unwrap_or("");
        let cat = single_line(categories[i].as_deref().unwrap_or(""));
        let score = scores[i].unwrap_or(0.0);

        let kw_display = if kw.starts_with(ERROR_PREFIX) {
            truncate_chars(kw, 41).red().to_string()
        } else {
            truncate_chars(&single_line(kw), 41)
        };

        println!(
            "  {:>4}. {:<14} {:<44} {:<30} {:>5.2}",
            i + 1,
            truncate_chars(tag, 14),
            kw_display,
            truncate_chars(&cat, 27),
            score,
        );
    }

    if dataset.height() > max_rows {
        println!(
            "  {}",
            format!("... {} more rows in the exported CSV", dataset.height() - max_rows).dimmed()
        );
    }
    Ok(())
}

/// Display the summary line for a keyword run.
pub fn display_keyword_summary(run: &KeywordRun) {
    println!();
    println!("  Rows processed:   {}", run.rows);
    println!("  Mean tag match:   {:.2}", run.mean_score);
    println!(
        "  Remote calls:     {} ({} served from cache)",
        run.remote_calls, run.cache_hits
    );
    if run.error_rows > 0 {
        println!(
            "  {} {} rows hold an error marker instead of a result",
            "!".yellow(),
            run.error_rows
        );
    }
}

/// Display the overlap preview table: candidate, reference and score columns.
pub fn display_overlap_results(
    dataset: &Dataset,
    run: &OverlapRun,
    max_rows: usize,
) -> Result<()> {
    let candidates = dataset.text_column(CANDIDATE_COLUMN)?;
    let references = dataset.text_column(REFERENCE_COLUMN)?;
    let score_columns = run
        .summaries
        .iter()
        .map(|s| dataset.score_column(&s.column))
        .collect::<Result<Vec<_>>>()?;

    println!(
        "\n{}",
        format!("=== Dataset Preview ({} rows) ===", dataset.height()).bold()
    );
    println!();

    let header_scores: String = run
        .summaries
        .iter()
        .map(|s| format!(" {:>7}", s.column))
        .collect();
    println!(
        "  {:>4}  {:<40} {:<40}{}",
        "#".dimmed(),
        "Text".dimmed(),
        "Reference".dimmed(),
        header_scores.dimmed(),
    );
    println!(
        "  {}",
        "-".repeat(88 + 8 * run.summaries.len()).dimmed()
    );

    for i in 0..dataset.height().min(max_rows) {
        let candidate = single_line(candidates[i].as_deref().unwrap_or(""));
        let reference = single_line(references[i].as_deref().unwrap_or(""));
        let row_scores: String = score_columns
            .iter()
            .map(|col| format!(" {:>7.3}", col[i].unwrap_or(0.0)))
            .collect();

        println!(
            "  {:>4}. {:<40} {:<40}{}",
            i + 1,
            truncate_chars(&candidate, 37),
            truncate_chars(&reference, 37),
            row_scores,
        );
    }

    println!();
    for summary in &run.summaries {
        println!(
            "  {:<8} mean {:.3}  min {:.3}  max {:.3}",
            summary.column, summary.mean, summary.min, summary.max
        );
    }
    Ok(())
}

/// Display a horizontal bar chart of a score column's distribution.
pub fn display_distribution(title: &str, values: &[Option<f64>], bucket_width: f64) {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let histogram = score_histogram(&present, bucket_width);
    let largest = histogram.iter().map(|(_, c)| *c).max().unwrap_or(0);

    println!("\n{}", format!("=== {title} ===").bold());
    println!();

    for (lower, count) in histogram {
        let bar_len = if largest == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(largest)
        };
        println!(
            "  {:>4.2} | {:<width$} {}",
            lower,
            colorize_bar(lower, bar_len),
            count,
            width = BAR_WIDTH,
        );
    }
}

/// Collapse newlines in model output so table rows stay on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Color a bar by how good the score range is.
fn colorize_bar(lower: f64, len: usize) -> colored::ColoredString {
    let bar = "█".repeat(len);
    match lower {
        l if l >= 0.6 => bar.green(),
        l if l >= 0.3 => bar.yellow(),
        _ => bar.red(),
    }
}

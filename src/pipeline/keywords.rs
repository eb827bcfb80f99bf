// Keyword pipeline: clean → extract → categorise → score, one row at a time.
//
// Remote failures never stop the run. The failing row carries an
// "Error: ..." marker in its result column and the next row is processed as
// usual. Pacing between remote calls is the rate limiter's job, not ours.

use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::keywords::score::tag_match_score;
use crate::keywords::tagger::KeywordTagger;
use crate::text::clean_text;

pub const DESCRIPTION_COLUMN: &str = "descr";
pub const TAG_COLUMN: &str = "tags";
pub const CLEAN_COLUMN: &str = "clean_descr";
pub const KEYWORDS_COLUMN: &str = "extracted_keywords";
pub const CATEGORIES_COLUMN: &str = "keyword_categories";
pub const SCORE_COLUMN: &str = "tag_match_score";

/// Columns the input CSV must have.
pub const REQUIRED_COLUMNS: [&str; 2] = [DESCRIPTION_COLUMN, TAG_COLUMN];

/// Marker prefix for rows whose remote call failed.
pub const ERROR_PREFIX: &str = "Error: ";

/// Outcome of one keyword pass.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRun {
    pub rows: usize,
    /// Rows where extraction or categorisation produced an error marker
    pub error_rows: usize,
    pub cache_hits: usize,
    pub remote_calls: usize,
    pub mean_score: f64,
}

/// Run the keyword pipeline over every row of `dataset`.
///
/// Appends `clean_descr`, `extracted_keywords`, `keyword_categories` and
/// `tag_match_score`, row-aligned with the input.
pub async fn run(
    dataset: &mut Dataset,
    tagger: &KeywordTagger,
    show_progress: bool,
) -> Result<KeywordRun> {
    let descriptions = dataset.text_column(DESCRIPTION_COLUMN)?;
    let tags = dataset.text_column(TAG_COLUMN)?;
    let rows = dataset.height();

    let cleaned: Vec<String> = descriptions
        .iter()
        .map(|d| clean_text(d.as_deref().unwrap_or_default()))
        .collect();

    let mut extracted = Vec::with_capacity(rows);
    let mut categories = Vec::with_capacity(rows);
    let mut scores = Vec::with_capacity(rows);
    let mut error_rows = 0;

    let pb = super::row_progress("Tagging", rows, show_progress);

    for (text, tag) in cleaned.iter().zip(&tags) {
        let keywords = tagger.extract_keywords(text).await;
        let category = tagger.categorize(&keywords).await;
        let score = tag_match_score(&keywords, tag.as_deref().unwrap_or_default());

        if keywords.starts_with(ERROR_PREFIX) || category.starts_with(ERROR_PREFIX) {
            error_rows += 1;
        }

        extracted.push(keywords);
        categories.push(category);
        scores.push(score);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mean_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    dataset.append_text_column(CLEAN_COLUMN, cleaned)?;
    dataset.append_text_column(KEYWORDS_COLUMN, extracted)?;
    dataset.append_text_column(CATEGORIES_COLUMN, categories)?;
    dataset.append_score_column(SCORE_COLUMN, scores)?;

    let run = KeywordRun {
        rows,
        error_rows,
        cache_hits: tagger.cache_hits(),
        remote_calls: tagger.remote_calls(),
        mean_score,
    };

    info!(
        rows = run.rows,
        error_rows = run.error_rows,
        cache_hits = run.cache_hits,
        remote_calls = run.remote_calls,
        "Keyword pipeline complete"
    );

    Ok(run)
}

// Overlap scorer trait: the scalar the overlap pipeline records per row.
//
// The pipeline takes whatever scalar the scorer returns, unadjusted.

use std::fmt;
use std::str::FromStr;

use super::score::{rouge_l, rouge_n};
use crate::error::{Result, TextbenchError};

/// Trait for scoring a candidate text against a reference.
pub trait OverlapScorer {
    /// Column name the scalar is stored under.
    fn name(&self) -> &str;

    /// Score one pair. `row` is only used to label failures.
    fn score(&self, row: usize, candidate: &str, reference: &str) -> Result<f64>;
}

/// Which ROUGE F-measure to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RougeType {
    /// Unigram overlap (default)
    #[default]
    Rouge1,
    /// Bigram overlap
    Rouge2,
    /// Longest common subsequence
    RougeL,
}

impl RougeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RougeType::Rouge1 => "rouge1",
            RougeType::Rouge2 => "rouge2",
            RougeType::RougeL => "rougeL",
        }
    }
}

impl fmt::Display for RougeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RougeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rouge1" | "rouge-1" => Ok(RougeType::Rouge1),
            "rouge2" | "rouge-2" => Ok(RougeType::Rouge2),
            "rougel" | "rouge-l" => Ok(RougeType::RougeL),
            other => Err(format!("unknown ROUGE type {other:?} (expected rouge1, rouge2 or rougeL)")),
        }
    }
}

/// ROUGE F-measure scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RougeScorer {
    pub rouge_type: RougeType,
}

impl RougeScorer {
    pub fn new(rouge_type: RougeType) -> Self {
        Self { rouge_type }
    }
}

impl OverlapScorer for RougeScorer {
    fn name(&self) -> &str {
        self.rouge_type.as_str()
    }

    fn score(&self, row: usize, candidate: &str, reference: &str) -> Result<f64> {
        let score = match self.rouge_type {
            RougeType::Rouge1 => rouge_n(candidate, reference, 1),
            RougeType::Rouge2 => rouge_n(candidate, reference, 2),
            RougeType::RougeL => rouge_l(candidate, reference),
        };

        if !score.fmeasure.is_finite() {
            return Err(TextbenchError::ScoringFailure {
                row,
                reason: format!("{} produced a non-finite score", self.rouge_type),
            });
        }
        Ok(score.fmeasure)
    }
}

// Keyword tagging: model-extracted keywords, categories and tag match scores.

pub mod cache;
pub mod score;
pub mod tagger;

// Keyword extraction and categorisation through the text generator.
//
// Two remote calls per article: one asks for five keywords, the second asks
// for categories of those keywords. Both responses are kept as free text,
// unvalidated. A failed call doesn't propagate: its result becomes an
// "Error: ..." marker and the caller carries on. Results (markers included)
// are memoized per exact input text for the life of the tagger.

use tracing::{debug, warn};

use super::cache::MemoCache;
use crate::llm::traits::{ChatMessage, ChatRequest, TextGenerator};
use crate::output::truncate_chars;

const EXTRACT_TEMPERATURE: f64 = 0.5;
const EXTRACT_MAX_TOKENS: u32 = 60;
const CATEGORIZE_TEMPERATURE: f64 = 0.3;
const CATEGORIZE_MAX_TOKENS: u32 = 80;

/// Build the keyword extraction prompt for a cleaned article.
pub fn extraction_prompt(text: &str) -> String {
    format!(
        "Extract 5 relevant and concise keywords from this news article:\n\n{text}\n\nKeywords:"
    )
}

/// Build the categorisation prompt for an extracted keyword list.
pub fn categorization_prompt(keywords: &str) -> String {
    format!(
        "Classify these keywords into categories like Politics, Sports, Tech, Health, Entertainment:\n\n{keywords}\n\nCategories:"
    )
}

/// Keyword and category tagger with per-operation memo caches.
pub struct KeywordTagger {
    generator: Box<dyn TextGenerator>,
    model: String,
    keyword_cache: MemoCache,
    category_cache: MemoCache,
}

impl KeywordTagger {
    pub fn new(generator: Box<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            keyword_cache: MemoCache::new(),
            category_cache: MemoCache::new(),
        }
    }

    /// Ask the model for 5 keywords describing `text`.
    pub async fn extract_keywords(&self, text: &str) -> String {
        if let Some(cached) = self.keyword_cache.get(text).await {
            debug!(text_preview = %truncate_chars(text, 50), "Keyword cache hit");
            return cached;
        }

        let request = ChatRequest::new(&self.model, vec![ChatMessage::user(extraction_prompt(text))])
            .with_temperature(EXTRACT_TEMPERATURE)
            .with_max_tokens(EXTRACT_MAX_TOKENS);

        let result = self.complete_or_marker(&request, "extract keywords").await;
        self.keyword_cache.insert(text, result.clone()).await;
        result
    }

    /// Ask the model to classify an extracted keyword list.
    pub async fn categorize(&self, keywords: &str) -> String {
        if let Some(cached) = self.category_cache.get(keywords).await {
            debug!(keywords = %truncate_chars(keywords, 50), "Category cache hit");
            return cached;
        }

        let request = ChatRequest::new(
            &self.model,
            vec![ChatMessage::user(categorization_prompt(keywords))],
        )
        .with_temperature(CATEGORIZE_TEMPERATURE)
        .with_max_tokens(CATEGORIZE_MAX_TOKENS);

        let result = self.complete_or_marker(&request, "categorize keywords").await;
        self.category_cache.insert(keywords, result.clone()).await;
        result
    }

    /// Total cache hits across both operations.
    pub fn cache_hits(&self) -> usize {
        self.keyword_cache.hits() + self.category_cache.hits()
    }

    /// Total remote calls attempted across both operations.
    pub fn remote_calls(&self) -> usize {
        self.keyword_cache.misses() + self.category_cache.misses()
    }

    async fn complete_or_marker(&self, request: &ChatRequest, action: &str) -> String {
        match self.generator.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to {action}");
                e.as_marker()
            }
        }
    }
}

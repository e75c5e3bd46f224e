// Internal modules (private)
mod bigrams;
mod corpus;
mod error;
mod normalizer;
mod ranker;
mod selector;
mod validation;

// Re-export public types
pub use bigrams::{extract_bigrams, CountingPolicy, PhraseCounts};
pub use corpus::{Corpus, PhraseStats};
pub use error::{HighlightError, Result};
pub use normalizer::{normalize, normalize_with, STOP_WORDS};
pub use ranker::{rank, RankedEntry};
pub use selector::{select, Highlight, Record};
pub use validation::validate_highlight_count;

/// Number of tokens per phrase
pub const NGRAM_LENGTH: usize = 2;

/// Configuration options for the highlight engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// How repeated phrases within one review are counted (presence by default)
    pub counting: CountingPolicy,
    /// Drop filler words such as "the" and "and" before building phrases
    pub strip_stop_words: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            counting: CountingPolicy::Presence,
            strip_stop_words: true,
        }
    }
}

/// Main engine that ranks phrases and picks highlight reviews
#[derive(Debug, Clone, Default)]
pub struct HighlightEngine {
    config: HighlightConfig,
}

impl HighlightEngine {
    /// Create a new highlight engine with the given configuration
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Normalize every review and aggregate its phrases
    pub fn build_corpus(&self, reviews: &[String]) -> Corpus {
        let mut corpus = Corpus::new();

        for (index, review) in reviews.iter().enumerate() {
            let normalized = normalize_with(review, self.config.strip_stop_words);
            let local = extract_bigrams(&normalized, NGRAM_LENGTH, self.config.counting);
            corpus.merge(&local, index);
        }

        log::debug!(
            "Collected {} distinct phrases from {} reviews",
            corpus.len(),
            reviews.len()
        );

        corpus
    }

    /// Phrases of all reviews, most frequent first
    pub fn rank_phrases(&self, reviews: &[String]) -> Vec<RankedEntry> {
        rank(self.build_corpus(reviews))
    }

    /// Pick `count` highlights from the reviews
    /// When `count` covers every review, the reviews are returned unchanged and in order
    pub fn build_highlights(&self, reviews: &[String], count: usize) -> Result<Vec<Highlight>> {
        if count >= reviews.len() {
            log::debug!(
                "Requested {} highlights from {} reviews, returning all",
                count,
                reviews.len()
            );
            return Ok(reviews
                .iter()
                .enumerate()
                .map(|(index, text)| Highlight::Record {
                    index,
                    text: text.clone(),
                })
                .collect());
        }

        let ranked = self.rank_phrases(reviews);
        if ranked.is_empty() {
            log::warn!("No two-word phrases found in {} reviews", reviews.len());
        }

        let mut records: Vec<Record> = reviews.iter().map(Record::new).collect();
        let highlights = select(&mut records, &ranked, count)?;

        let fillers = highlights.iter().filter(|h| h.is_filler()).count();
        log::info!(
            "Selected {} highlights ({} reviews, {} phrases)",
            highlights.len(),
            highlights.len() - fillers,
            fillers
        );

        Ok(highlights)
    }
}

/// Pick `count` highlights using the default configuration
pub fn build_highlights(reviews: &[String], count: usize) -> Result<Vec<Highlight>> {
    HighlightEngine::default().build_highlights(reviews, count)
}

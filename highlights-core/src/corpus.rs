use crate::bigrams::PhraseCounts;
use serde::Serialize;
use std::collections::HashMap;

/// Corpus-wide statistics for a single phrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhraseStats {
    /// Sum of per-review counts
    pub total_count: usize,
    /// Reviews containing the phrase, in the order they were merged (one entry per review)
    pub contributing_records: Vec<usize>,
}

/// Phrase statistics across every review, kept in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    phrases: Vec<(String, PhraseStats)>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one review's phrase counts into the corpus
    pub fn merge(&mut self, local: &PhraseCounts, record_index: usize) {
        for (phrase, count) in local.iter() {
            match self.positions.get(phrase) {
                Some(&pos) => {
                    let stats = &mut self.phrases[pos].1;
                    stats.total_count += count;
                    stats.contributing_records.push(record_index);
                }
                None => {
                    let pos = self.phrases.len();
                    self.positions.insert(phrase.to_string(), pos);
                    self.phrases.push((
                        phrase.to_string(),
                        PhraseStats {
                            total_count: count,
                            contributing_records: vec![record_index],
                        },
                    ));
                }
            }
        }
    }

    pub fn get(&self, phrase: &str) -> Option<&PhraseStats> {
        self.positions.get(phrase).map(|&pos| &self.phrases[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhraseStats)> {
        self.phrases
            .iter()
            .map(|(phrase, stats)| (phrase.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Consumes the corpus, yielding phrases in first-insertion order
    pub fn into_phrases(self) -> impl Iterator<Item = (String, PhraseStats)> {
        self.phrases.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigrams::{extract_bigrams, CountingPolicy};

    fn merged(reviews: &[&str], policy: CountingPolicy) -> Corpus {
        let mut corpus = Corpus::new();
        for (index, review) in reviews.iter().enumerate() {
            corpus.merge(&extract_bigrams(review, 2, policy), index);
        }
        corpus
    }

    #[test]
    fn test_merge_new_phrase() {
        let corpus = merged(&["good food"], CountingPolicy::Presence);
        assert_eq!(
            corpus.get("good food"),
            Some(&PhraseStats {
                total_count: 1,
                contributing_records: vec![0],
            })
        );
    }

    #[test]
    fn test_merge_counts_distinct_reviews() {
        let corpus = merged(
            &["good food good food", "bad service", "good food"],
            CountingPolicy::Presence,
        );
        let stats = corpus.get("good food").unwrap();
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.contributing_records, vec![0, 2]);
    }

    #[test]
    fn test_merge_with_occurrence_counting() {
        let corpus = merged(
            &["good food good food", "good food"],
            CountingPolicy::Occurrences,
        );
        let stats = corpus.get("good food").unwrap();
        assert_eq!(stats.total_count, 3);
        // Still one index per review
        assert_eq!(stats.contributing_records, vec![0, 1]);
    }

    #[test]
    fn test_insertion_order_follows_first_review() {
        let corpus = merged(&["b c", "a b c"], CountingPolicy::Presence);
        let order: Vec<&str> = corpus.iter().map(|(phrase, _)| phrase).collect();
        assert_eq!(order, vec!["b c", "a b"]);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = merged(&["", "single"], CountingPolicy::Presence);
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }
}

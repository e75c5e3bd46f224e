use crate::corpus::Corpus;
use serde::Serialize;
use std::cmp::Reverse;

/// A phrase with its corpus statistics, as ordered by [`rank`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub phrase: String,
    pub total_count: usize,
    pub contributing_records: Vec<usize>,
}

/// Orders phrases by descending total count
/// The sort is stable: equal counts keep corpus insertion order, which is
/// decided by the first review each phrase appeared in (not alphabetical)
pub fn rank(corpus: Corpus) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = corpus
        .into_phrases()
        .map(|(phrase, stats)| RankedEntry {
            phrase,
            total_count: stats.total_count,
            contributing_records: stats.contributing_records,
        })
        .collect();

    ranked.sort_by_key(|entry| Reverse(entry.total_count));

    ranked
}

use crate::error::{HighlightError, Result};
use crate::ranker::RankedEntry;
use serde::Serialize;
use std::fmt;

/// A review taking part in one selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    claimed: bool,
}

impl Record {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            claimed: false,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Marks the record as used; returns false if it was already claimed
    fn claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }
}

/// One line of the highlight output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Highlight {
    /// A full review, with its position in the input
    Record { index: usize, text: String },
    /// A bare phrase used as filler once its reviews were all taken
    Phrase { text: String },
}

impl Highlight {
    pub fn text(&self) -> &str {
        match self {
            Highlight::Record { text, .. } | Highlight::Phrase { text } => text,
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, Highlight::Phrase { .. })
    }

    pub fn record_index(&self) -> Option<usize> {
        match self {
            Highlight::Record { index, .. } => Some(*index),
            Highlight::Phrase { .. } => None,
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Greedily picks `count` highlights from ranked phrases
///
/// Each phrase claims its unclaimed reviews in order. If the phrase still leaves the
/// result short, the phrase itself is appended as filler and the next phrase is tried.
/// Running out of phrases before reaching `count` is an error; no partial result is returned.
pub fn select(
    records: &mut [Record],
    ranked: &[RankedEntry],
    count: usize,
) -> Result<Vec<Highlight>> {
    let mut result = Vec::with_capacity(count.min(records.len() + ranked.len()));
    let mut ranked_iter = ranked.iter();

    while result.len() < count {
        let entry = ranked_iter
            .next()
            .ok_or(HighlightError::RankedSourceExhausted {
                requested: count,
                produced: result.len(),
                ranked: ranked.len(),
            })?;

        for &index in &entry.contributing_records {
            let len = records.len();
            let record = records
                .get_mut(index)
                .ok_or(HighlightError::RecordOutOfRange { index, len })?;

            if record.claim() {
                result.push(Highlight::Record {
                    index,
                    text: record.text.clone(),
                });
            }

            if result.len() == count {
                break;
            }
        }

        if result.len() < count {
            log::debug!(
                "Phrase '{}' has no unclaimed reviews left, using as filler",
                entry.phrase
            );
            result.push(Highlight::Phrase {
                text: entry.phrase.clone(),
            });
        }
    }

    Ok(result)
}

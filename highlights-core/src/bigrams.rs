use std::collections::HashMap;

/// How repeated phrases inside a single review are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingPolicy {
    /// A review contributes at most 1 per phrase, however often the phrase repeats
    #[default]
    Presence,
    /// Every occurrence is counted
    Occurrences,
}

/// Phrase counts for one review, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseCounts {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl PhraseCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one sighting of `phrase` under the given policy
    pub fn record(&mut self, phrase: String, policy: CountingPolicy) {
        match self.positions.get(&phrase) {
            Some(&pos) => {
                if policy == CountingPolicy::Occurrences {
                    self.entries[pos].1 += 1;
                }
            }
            None => {
                self.positions.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, 1));
            }
        }
    }

    pub fn get(&self, phrase: &str) -> Option<usize> {
        self.positions.get(phrase).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(phrase, count)| (phrase.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts n-grams of `window` tokens from already-normalized text
/// Tokens come from splitting on single spaces, so empty tokens are kept
pub fn extract_bigrams(normalized: &str, window: usize, policy: CountingPolicy) -> PhraseCounts {
    let mut counts = PhraseCounts::new();

    if normalized.is_empty() || window == 0 {
        return counts;
    }

    let tokens: Vec<&str> = normalized.split(' ').collect();

    // windows() yields nothing when there are fewer tokens than the window
    for gram in tokens.windows(window) {
        counts.record(gram.join(" "), policy);
    }

    counts
}

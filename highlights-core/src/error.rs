use thiserror::Error;

/// Errors produced while validating input or selecting highlights
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// Highlight count that is not a positive integer, or exceeds the number of records
    #[error("Highlights number is greater than reviews count or invalid (got '{requested}', {available} reviews)")]
    InvalidCount { requested: String, available: usize },

    /// Every ranked phrase was consumed before the requested number of highlights was reached
    #[error("Ran out of ranked phrases after {produced} of {requested} highlights ({ranked} phrases available)")]
    RankedSourceExhausted {
        requested: usize,
        produced: usize,
        ranked: usize,
    },

    /// A ranked phrase points at a record the selector was not given
    #[error("Phrase references record {index} but only {len} records were supplied")]
    RecordOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, HighlightError>;

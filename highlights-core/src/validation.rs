use crate::error::{HighlightError, Result};

/// Parses a user-supplied highlight count and checks it against the number of reviews
/// Accepts a positive integer no greater than `available`
pub fn validate_highlight_count(raw: &str, available: usize) -> Result<usize> {
    let invalid = || HighlightError::InvalidCount {
        requested: raw.to_string(),
        available,
    };

    let count: usize = raw.trim().parse().map_err(|_| invalid())?;

    if count == 0 || count > available {
        return Err(invalid());
    }

    Ok(count)
}

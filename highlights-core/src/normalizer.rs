use regex::Regex;

/// Filler words dropped from reviews before bigrams are built
pub const STOP_WORDS: [&str; 12] = [
    "just", "too", "is", "i", "it", "on", "a", "an", "the", "and", "or", "but",
];

lazy_static::lazy_static! {
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z ']").unwrap();
    static ref DOUBLE_SPACE: Regex = Regex::new(r"  ").unwrap();
    static ref STOP_WORD: Regex =
        Regex::new(&format!(" ({}) ", STOP_WORDS.join("|"))).unwrap();
}

/// Normalizes a review for bigram extraction
/// Lowercases, blanks out everything but letters/spaces/apostrophes,
/// halves double spaces and drops space-delimited stop words
pub fn normalize(text: &str) -> String {
    normalize_with(text, true)
}

/// Same as [`normalize`], optionally keeping stop words
pub fn normalize_with(text: &str, strip_stop_words: bool) -> String {
    let lower = text.to_lowercase();
    let letters = NON_LETTER.replace_all(&lower, " ");

    // Single pass: "   " becomes "  ", not " "
    let collapsed = DOUBLE_SPACE.replace_all(&letters, " ");

    if !strip_stop_words {
        return collapsed.into_owned();
    }

    // Matches consume both surrounding spaces, so the first and last word of the
    // text and a stop word right after a removed one are never matched
    STOP_WORD.replace_all(&collapsed, " ").into_owned()
}

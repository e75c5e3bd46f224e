use clap::Parser;
use std::path::PathBuf;

/// Picks the most representative reviews from a file
#[derive(Parser, Debug)]
#[command(name = "rh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prints review highlights ranked by recurring two-word phrases", long_about = None)]
pub struct Args {
    /// File with one review per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of highlights to print
    #[arg(value_name = "COUNT")]
    pub count: String,

    /// Print highlights as a JSON array
    #[arg(long = "json")]
    pub json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Count every repeat of a phrase within a review, not just its presence
    #[arg(long = "count-repeats")]
    pub count_repeats: bool,

    /// Keep filler words (the, and, is, ...) when building phrases
    #[arg(long = "keep-stopwords")]
    pub keep_stopwords: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

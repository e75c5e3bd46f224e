use anyhow::Result;
use highlights_core::{CountingPolicy, HighlightConfig, HighlightEngine, HighlightError};

mod cli;
mod output;
mod reviews;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let rendered = match run(&args) {
        Ok(rendered) => rendered,
        Err(e) => {
            // Bad counts are user error: print the message alone, no error chain
            if let Some(invalid @ HighlightError::InvalidCount { .. }) = e.downcast_ref() {
                eprintln!("{}", invalid);
                std::process::exit(1);
            }
            return Err(e);
        }
    };

    println!("{}", rendered);

    Ok(())
}

/// Loads the reviews, validates the count and renders the highlights
fn run(args: &cli::Args) -> Result<String> {
    let reviews = reviews::load_reviews(&args.file)?;
    let count = highlights_core::validate_highlight_count(&args.count, reviews.len())?;

    let config = HighlightConfig {
        counting: if args.count_repeats {
            CountingPolicy::Occurrences
        } else {
            CountingPolicy::Presence
        },
        strip_stop_words: !args.keep_stopwords,
    };

    log::info!(
        "Picking {} highlights from {} reviews in {}",
        count,
        reviews.len(),
        args.file.display()
    );

    let engine = HighlightEngine::new(config);
    let highlights = engine.build_highlights(&reviews, count)?;

    if args.json {
        output::render_json(&highlights)
    } else {
        Ok(output::render_plain(&highlights))
    }
}

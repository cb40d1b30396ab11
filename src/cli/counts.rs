//! Counts command implementation
//!
//! Prints a single corpus's profile: sizes plus the most frequent words.
//! Handy for deciding a --min-count threshold before a comparison.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::load_project_config;
use crate::corpus::{loader, WordCounts};

use super::CountsArgs;

pub fn run(args: CountsArgs) -> Result<()> {
    let config = load_project_config(Path::new("."))?;
    let field = args
        .field
        .or(config.defaults.field)
        .unwrap_or_else(|| "text".to_string());

    let corpus = loader::load_corpus(&args.corpus, &field)?;
    let counts = WordCounts::from_corpus(&corpus);

    println!(
        "{} {}",
        style("Corpus:").bold(),
        args.corpus.display()
    );
    println!(
        "  {} documents, {} tokens, {} distinct words",
        corpus.doc_count(),
        counts.total(),
        counts.distinct()
    );

    if counts.distinct() == 0 {
        println!("{}", style("  (empty corpus)").dim());
        return Ok(());
    }

    println!("\n{}", style(format!("TOP {} WORDS", args.top)).bold());
    println!("  {}", style(format!("{:<24} {:>8}", "word", "count")).dim());
    for (word, count) in counts.top(args.top) {
        println!("  {:<24} {:>8}", word, count);
    }

    Ok(())
}

//! CLI command definitions and handlers

mod compare;
mod counts;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wordshift - corpus comparison by log-odds-ratio
#[derive(Parser, Debug)]
#[command(name = "wordshift")]
#[command(
    version,
    about = "Rank word-usage differences between two text corpora by log-odds-ratio with informative Dirichlet priors",
    long_about = "Wordshift compares word usage between two corpora using the \
log-odds-ratio test with informative Dirichlet priors (Monroe, Colaresi & Quinn). \
Every word in the combined vocabulary gets a z-score: large positive values mark \
words characteristic of the first corpus, large negative of the second.\n\n\
Corpora are plain text files (one document per line) or JSON Lines files with a \
text field. Input must already be tokenized/cleaned - wordshift never normalizes \
text, so preprocessing stays explicit and reproducible.",
    after_help = "\
Examples:
  wordshift compare before.txt after.txt               Compare two corpora
  wordshift compare a.jsonl b.jsonl --field body       JSONL corpora, custom text field
  wordshift compare a.txt b.txt --format csv -o out.csv   Write the CSV artifact
  wordshift compare a.txt b.txt --background all.txt   Explicit prior corpus
  wordshift compare a.txt b.txt --top 20 --min-count 5 Focus on frequent words
  wordshift counts a.txt --top 40                      Profile one corpus"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two corpora and rank their vocabulary by z-score
    Compare(CompareArgs),

    /// Show size and top-word profile of a single corpus
    Counts(CountsArgs),
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First corpus (positive z-scores are characteristic of this one)
    pub corpus_a: PathBuf,

    /// Second corpus
    pub corpus_b: PathBuf,

    /// Background corpus supplying the prior (default: both corpora combined)
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Text field name for JSONL input (default: text)
    #[arg(long)]
    pub field: Option<String>,

    /// Output format: text, json, csv
    #[arg(long, short = 'f', value_parser = ["text", "json", "csv"])]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Keep only the N strongest words per direction
    #[arg(long)]
    pub top: Option<usize>,

    /// Drop words occurring fewer than N times in either corpus
    #[arg(long)]
    pub min_count: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CountsArgs {
    /// Corpus file to profile
    pub corpus: PathBuf,

    /// Text field name for JSONL input (default: text)
    #[arg(long)]
    pub field: Option<String>,

    /// Number of top words to show
    #[arg(long, default_value = "25")]
    pub top: usize,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compare(args) => compare::run(args),
        Commands::Counts(args) => counts::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_flags() {
        let cli = Cli::parse_from([
            "wordshift", "compare", "a.txt", "b.txt", "--format", "csv", "--top", "10",
        ]);
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.format.as_deref(), Some("csv"));
                assert_eq!(args.top, Some(10));
                assert_eq!(args.min_count, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from([
            "wordshift", "compare", "a.txt", "b.txt", "--format", "yaml",
        ]);
        assert!(result.is_err());
    }
}

//! Compare command implementation

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::{load_project_config, Defaults};
use crate::corpus::{loader, Corpus, WordCounts};
use crate::logodds::CorpusComparator;
use crate::models::{ComparisonReport, CorpusSummary, RankedWord};
use crate::reporters;

use super::CompareArgs;

pub fn run(args: CompareArgs) -> Result<()> {
    let config = load_project_config(Path::new("."))?;
    let defaults = config.defaults;

    let field = resolve_field(args.field.as_deref(), &defaults);
    let format = args
        .format
        .or(defaults.format)
        .unwrap_or_else(|| "text".to_string());
    let top = args.top.or(defaults.top);
    let min_count = args.min_count.or(defaults.min_count);

    let corpus_a = loader::load_corpus(&args.corpus_a, &field)?;
    let corpus_b = loader::load_corpus(&args.corpus_b, &field)?;
    let background = args
        .background
        .as_deref()
        .map(|path| loader::load_corpus(path, &field))
        .transpose()?;

    let comparator = CorpusComparator::new(&corpus_a, &corpus_b, background.as_ref())?;
    info!(
        vocabulary = comparator.vocabulary().len(),
        "comparison complete"
    );

    let mut rows = comparator.ranked();
    if let Some(min) = min_count {
        rows.retain(|r| r.count_i >= min && r.count_j >= min);
    }
    if let Some(n) = top {
        rows = truncate_rows(rows, n, &format);
    }

    let report = ComparisonReport {
        corpus_i: summarize(label_for(&args.corpus_a), &corpus_a, comparator.counts_i()),
        corpus_j: summarize(label_for(&args.corpus_b), &corpus_b, comparator.counts_j()),
        background: background_summary(
            args.background.as_deref(),
            background.as_ref(),
            &corpus_a,
            &corpus_b,
            comparator.background_counts(),
        ),
        rows,
    };

    let rendered = reporters::render(&report, &format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            eprintln!(
                "{} {}",
                style("Report written to").green(),
                style(path.display()).bold()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn resolve_field(flag: Option<&str>, defaults: &Defaults) -> String {
    flag.map(str::to_string)
        .or_else(|| defaults.field.clone())
        .unwrap_or_else(|| "text".to_string())
}

/// For text output keep the N strongest rows in each direction; for tabular
/// formats keep the first N (the table is already z-descending).
fn truncate_rows(rows: Vec<RankedWord>, n: usize, format: &str) -> Vec<RankedWord> {
    if format != "text" {
        let mut rows = rows;
        rows.truncate(n);
        return rows;
    }
    if rows.len() <= 2 * n {
        return rows;
    }
    let tail_start = rows.len() - n;
    let mut kept: Vec<RankedWord> = rows[..n].to_vec();
    kept.extend_from_slice(&rows[tail_start..]);
    kept
}

fn label_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus")
        .to_string()
}

fn summarize(label: String, corpus: &Corpus, counts: &WordCounts) -> CorpusSummary {
    CorpusSummary {
        label,
        documents: corpus.doc_count(),
        tokens: counts.total(),
        distinct_words: counts.distinct(),
    }
}

fn background_summary(
    path: Option<&Path>,
    background: Option<&Corpus>,
    corpus_a: &Corpus,
    corpus_b: &Corpus,
    counts: &WordCounts,
) -> CorpusSummary {
    match (path, background) {
        (Some(path), Some(corpus)) => summarize(label_for(path), corpus, counts),
        _ => CorpusSummary {
            label: "combined".to_string(),
            documents: corpus_a.doc_count() + corpus_b.doc_count(),
            tokens: counts.total(),
            distinct_words: counts.distinct(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(word: &str, z: f64) -> RankedWord {
        RankedWord {
            word: word.to_string(),
            z_score: z,
            count_i: 1,
            count_j: 1,
            background_count: 2,
        }
    }

    #[test]
    fn test_truncate_tabular_keeps_head() {
        let rows = vec![row("a", 2.0), row("b", 1.0), row("c", -1.0), row("d", -2.0)];
        let kept = truncate_rows(rows, 2, "csv");
        let words: Vec<&str> = kept.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_truncate_text_keeps_both_ends() {
        let rows = vec![
            row("a", 2.0),
            row("b", 1.0),
            row("c", 0.0),
            row("d", -1.0),
            row("e", -2.0),
        ];
        let kept = truncate_rows(rows, 2, "text");
        let words: Vec<&str> = kept.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn test_truncate_text_noop_when_small() {
        let rows = vec![row("a", 1.0), row("b", -1.0)];
        assert_eq!(truncate_rows(rows.clone(), 5, "text"), rows);
    }

    #[test]
    fn test_label_from_path() {
        assert_eq!(label_for(Path::new("data/incumbents.jsonl")), "incumbents");
    }
}

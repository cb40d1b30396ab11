//! Corpus file loading
//!
//! Two on-disk shapes are supported:
//! - plain text: one document per line, blank lines skipped
//! - JSON Lines (`.jsonl` / `.ndjson`): one object per line, the document text
//!   taken from a named string field (`--field`, default `text`)

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::Corpus;

/// Load a corpus from `path`, picking the parser from the file extension.
pub fn load_corpus(path: &Path, field: &str) -> Result<Corpus> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus file {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let corpus = match ext {
        "jsonl" | "ndjson" => from_jsonl(&raw, field)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        _ => from_plain_text(&raw),
    };

    debug!(
        path = %path.display(),
        documents = corpus.doc_count(),
        tokens = corpus.token_count(),
        "loaded corpus"
    );
    Ok(corpus)
}

fn from_plain_text(raw: &str) -> Corpus {
    let docs: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Corpus::from_texts(&docs)
}

fn from_jsonl(raw: &str, field: &str) -> Result<Corpus> {
    let mut docs = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("line {} is not valid JSON", idx + 1))?;
        let Some(text) = value.get(field).and_then(|v| v.as_str()) else {
            bail!("line {} has no string field {:?}", idx + 1, field);
        };
        docs.push(text.to_string());
    }
    Ok(Corpus::from_texts(&docs))
}

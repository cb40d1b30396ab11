//! Corpus representation and word-count bookkeeping
//!
//! A `Corpus` is an ordered list of documents, each an ordered list of
//! case-sensitive whitespace tokens. No stemming, casing, or punctuation
//! handling happens here: preprocessing choices change the statistics, so they
//! must be made explicitly by the caller before a corpus is built.

pub mod loader;

use rustc_hash::FxHashMap;

/// An immutable, ordered collection of tokenized documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Vec<String>>,
}

impl Corpus {
    /// Build a corpus from raw document strings, splitting each on whitespace.
    pub fn from_texts<S: AsRef<str>>(docs: &[S]) -> Self {
        let docs = docs
            .iter()
            .map(|doc| {
                doc.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        Self { docs }
    }

    /// Build a corpus from already-tokenized documents.
    pub fn from_tokens(docs: Vec<Vec<String>>) -> Self {
        Self { docs }
    }

    /// Concatenation of two corpora, document order preserved (`self` first).
    /// This is the default background corpus for a comparison.
    pub fn concat(&self, other: &Corpus) -> Corpus {
        let mut docs = self.docs.clone();
        docs.extend(other.docs.iter().cloned());
        Corpus { docs }
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn token_count(&self) -> usize {
        self.docs.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().flat_map(|doc| doc.iter().map(String::as_str))
    }

    /// First token that is not a single whitespace-free word, if any.
    /// Pre-tokenized input containing such entries still needs preprocessing.
    pub fn first_malformed_token(&self) -> Option<&str> {
        self.tokens()
            .find(|tok| tok.is_empty() || tok.chars().any(char::is_whitespace))
    }
}

/// Token occurrence counts for one corpus, with the first-seen token order
/// kept alongside the counts so downstream ranking has a deterministic
/// tie-break order.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: FxHashMap<String, u64>,
    order: Vec<String>,
    total: u64,
}

impl WordCounts {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        let mut order = Vec::new();
        let mut total = 0u64;

        for token in corpus.tokens() {
            total += 1;
            match counts.get_mut(token) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                    order.push(token.to_string());
                }
            }
        }

        Self { counts, order, total }
    }

    /// Occurrence count for `word`, 0 when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Total token count (sum of all occurrence counts).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Distinct tokens in first-seen order.
    pub fn first_seen(&self) -> &[String] {
        &self.order
    }

    /// The `n` most frequent tokens, count descending, first-seen order on ties.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.counts[w.as_str()]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

//! Output models shared by the reporters
//!
//! These are the serialized shapes of a comparison: per-word rows plus the
//! corpus bookkeeping a reader needs to interpret them.

use serde::{Deserialize, Serialize};

/// One row of the ranked comparison table.
///
/// Serialized field names follow the reported artifact's column headers:
/// `word,z_score,count1,count2,total_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub z_score: f64,
    /// Occurrences in corpus i.
    #[serde(rename = "count1")]
    pub count_i: u64,
    /// Occurrences in corpus j.
    #[serde(rename = "count2")]
    pub count_j: u64,
    /// Pseudo-count from the background corpus.
    #[serde(rename = "total_count")]
    pub background_count: u64,
}

/// Size bookkeeping for one corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub label: String,
    pub documents: usize,
    pub tokens: u64,
    pub distinct_words: usize,
}

/// A full comparison: summaries plus the ranked vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub corpus_i: CorpusSummary,
    pub corpus_j: CorpusSummary,
    pub background: CorpusSummary,
    pub rows: Vec<RankedWord>,
}

//! The corpus comparator: counts, smoothed log-odds, variance, z-scores

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::corpus::{Corpus, WordCounts};
use crate::models::RankedWord;

use super::{CompareError, CompareResult};

/// The three derived scalars for one vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStat {
    /// Prior-smoothed log-odds usage difference (log base 10).
    /// Positive means over-represented in corpus i.
    pub delta: f64,
    /// Estimated variance of `delta`.
    pub sigma_2: f64,
    /// `delta / sqrt(sigma_2)` - the ranking statistic.
    pub z_score: f64,
}

/// Compares word usage between two corpora.
///
/// Construction computes everything; the object is immutable afterwards.
/// A new comparison requires a new comparator.
#[derive(Debug)]
pub struct CorpusComparator {
    y_i: WordCounts,
    y_j: WordCounts,
    alpha: WordCounts,
    /// Union of the two corpora's tokens, first-seen order (corpus i first).
    vocab: Vec<String>,
    stats: FxHashMap<String, WordStat>,
}

impl CorpusComparator {
    /// Build a comparison of `corpus_i` against `corpus_j`.
    ///
    /// `background` supplies the Dirichlet prior pseudo-counts; when `None`
    /// it defaults to `corpus_i ++ corpus_j`. Corpora must arrive tokenized
    /// and cleaned - the comparator refuses input that still needs
    /// preprocessing rather than silently normalizing it.
    pub fn new(
        corpus_i: &Corpus,
        corpus_j: &Corpus,
        background: Option<&Corpus>,
    ) -> CompareResult<Self> {
        let labelled = [("corpus_i", Some(corpus_i)), ("corpus_j", Some(corpus_j)), ("background_corpus", background)];
        for (label, corpus) in labelled {
            let Some(corpus) = corpus else { continue };
            if let Some(token) = corpus.first_malformed_token() {
                return Err(CompareError::Config(format!(
                    "{label} contains an entry that is not a single whitespace-free \
                     token ({token:?}); tokenize and clean corpora before comparison"
                )));
            }
        }

        let y_i = WordCounts::from_corpus(corpus_i);
        let y_j = WordCounts::from_corpus(corpus_j);
        let alpha = match background {
            Some(bg) => WordCounts::from_corpus(bg),
            None => WordCounts::from_corpus(&corpus_i.concat(corpus_j)),
        };

        let vocab = Self::vocabulary_union(&y_i, &y_j);
        if vocab.is_empty() {
            return Err(CompareError::Config(
                "both corpora are empty; nothing to compare".to_string(),
            ));
        }

        let n_i = y_i.total() as f64;
        let n_j = y_j.total() as f64;
        let alpha_zero = alpha.total() as f64;
        debug!(
            n_i = y_i.total(),
            n_j = y_j.total(),
            alpha_zero = alpha.total(),
            vocabulary = vocab.len(),
            "computing log-odds statistics"
        );

        // Per-word statistics are independent; the pass is data-parallel and
        // order-preserving, failing on the first domain error.
        let computed: Vec<WordStat> = vocab
            .par_iter()
            .map(|word| Self::word_stat(word, &y_i, &y_j, &alpha, n_i, n_j, alpha_zero))
            .collect::<CompareResult<Vec<_>>>()?;

        let stats = vocab.iter().cloned().zip(computed).collect();
        Ok(Self { y_i, y_j, alpha, vocab, stats })
    }

    /// Vocabulary in first-seen order: corpus i's words, then corpus j's
    /// unseen ones. This is the stable tie-break order for ranked().
    fn vocabulary_union(y_i: &WordCounts, y_j: &WordCounts) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut vocab = Vec::with_capacity(y_i.distinct() + y_j.distinct());
        for word in y_i.first_seen().iter().chain(y_j.first_seen()) {
            if seen.insert(word.as_str()) {
                vocab.push(word.clone());
            }
        }
        vocab
    }

    /// delta -> sigma_2 -> z_score for one word, with domain checks at each
    /// stage. A zero or negative log argument and a zero smoothed count both
    /// signal corrupt input and must never leak as NaN or infinity.
    fn word_stat(
        word: &str,
        y_i: &WordCounts,
        y_j: &WordCounts,
        alpha: &WordCounts,
        n_i: f64,
        n_j: f64,
        alpha_zero: f64,
    ) -> CompareResult<WordStat> {
        let prior = alpha.get(word);
        let count_i = y_i.get(word);
        let count_j = y_j.get(word);

        // Stage 1: usage difference
        let delta = Self::log_odds(word, count_i, prior, n_i, alpha_zero)?
            - Self::log_odds(word, count_j, prior, n_j, alpha_zero)?;

        // Stage 2: variance estimate
        let smoothed_i = (count_i + prior) as f64;
        let smoothed_j = (count_j + prior) as f64;
        if smoothed_i == 0.0 || smoothed_j == 0.0 {
            return Err(CompareError::VarianceDomain {
                word: word.to_string(),
                count_i,
                count_j,
                prior,
            });
        }
        let sigma_2 = 1.0 / smoothed_i + 1.0 / smoothed_j;

        // Stage 3: standardize
        let z_score = delta / sigma_2.sqrt();

        Ok(WordStat { delta, sigma_2, z_score })
    }

    /// `log10((y + alpha) / (n + alpha_0 - y - alpha))` with domain checks.
    fn log_odds(
        word: &str,
        count: u64,
        prior: u64,
        n: f64,
        alpha_zero: f64,
    ) -> CompareResult<f64> {
        let numerator = (count + prior) as f64;
        let denominator = n + alpha_zero - numerator;
        if numerator <= 0.0 || denominator <= 0.0 {
            return Err(CompareError::LogDomain {
                word: word.to_string(),
                numerator,
                denominator,
                count,
                prior,
            });
        }
        Ok((numerator / denominator).log10())
    }

    /// Full ranked output: one row per vocabulary word, z-score descending.
    /// The sort is stable, so equal z-scores keep first-seen order.
    pub fn ranked(&self) -> Vec<RankedWord> {
        let mut rows: Vec<RankedWord> = self
            .vocab
            .iter()
            .map(|word| RankedWord {
                word: word.clone(),
                z_score: self.stats[word.as_str()].z_score,
                count_i: self.y_i.get(word),
                count_j: self.y_j.get(word),
                background_count: self.alpha.get(word),
            })
            .collect();
        rows.sort_by(|a, b| b.z_score.total_cmp(&a.z_score));
        rows
    }

    /// The vocabulary under comparison, in first-seen order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocab
    }

    /// Usage difference for `word`; `None` if the word was never observed in
    /// either compared corpus (distinct from an observed word counted 0 in one).
    pub fn delta(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(|s| s.delta)
    }

    /// Variance estimate for `word`; `None` if never observed.
    pub fn sigma_2(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(|s| s.sigma_2)
    }

    /// Standardized usage difference for `word`; `None` if never observed.
    pub fn z_score(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(|s| s.z_score)
    }

    /// Raw count of `word` in corpus i; `None` if the word is outside the
    /// vocabulary, `Some(0)` when it only occurs in corpus j.
    pub fn count_i(&self, word: &str) -> Option<u64> {
        self.stats.contains_key(word).then(|| self.y_i.get(word))
    }

    /// Raw count of `word` in corpus j; same convention as [`Self::count_i`].
    pub fn count_j(&self, word: &str) -> Option<u64> {
        self.stats.contains_key(word).then(|| self.y_j.get(word))
    }

    /// Prior pseudo-count of `word`; same observed-word convention.
    pub fn background_count(&self, word: &str) -> Option<u64> {
        self.stats.contains_key(word).then(|| self.alpha.get(word))
    }

    /// Word counts of corpus i (for reporting).
    pub fn counts_i(&self) -> &WordCounts {
        &self.y_i
    }

    /// Word counts of corpus j (for reporting).
    pub fn counts_j(&self) -> &WordCounts {
        &self.y_j
    }

    /// Word counts of the resolved background corpus (for reporting).
    pub fn background_counts(&self) -> &WordCounts {
        &self.alpha
    }
}

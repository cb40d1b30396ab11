//! Log-odds-ratio with informative Dirichlet priors
//!
//! Implements the word-usage-difference test of Monroe, Colaresi & Quinn
//! ("Fightin' Words", 2008): for every word in the combined vocabulary of two
//! corpora, the prior-smoothed log-odds difference `delta`, its estimated
//! variance `sigma_2`, and the standardized `z_score = delta / sqrt(sigma_2)`.
//! A background corpus supplies the smoothing pseudo-counts; by default it is
//! the concatenation of the two corpora under comparison.
//!
//! All statistics are computed eagerly at construction and never mutated, so
//! a built [`CorpusComparator`] can be read from multiple threads freely.

mod comparator;

pub use comparator::{CorpusComparator, WordStat};

use thiserror::Error;

/// Errors that can occur while building a comparison.
///
/// Both numerical variants identify the offending word and the intermediate
/// values that produced the invalid operation; they almost always mean the
/// background corpus was supplied inconsistently with the compared corpora.
/// There is no partial-result mode: construction either succeeds fully or
/// fails with one of these.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Corpora malformed before any arithmetic happened.
    #[error("corpus configuration error: {0}")]
    Config(String),

    /// Stage 1: logarithm of a non-positive ratio.
    #[error(
        "log-odds undefined for {word:?}: ratio {numerator}/{denominator} has a \
         non-positive term (count {count}, prior {prior}); the background corpus \
         is likely inconsistent with the compared corpora"
    )]
    LogDomain {
        word: String,
        numerator: f64,
        denominator: f64,
        count: u64,
        prior: u64,
    },

    /// Stage 2: variance would divide by a zero smoothed count.
    #[error(
        "variance undefined for {word:?}: zero smoothed count \
         (counts {count_i}/{count_j}, prior {prior})"
    )]
    VarianceDomain {
        word: String,
        count_i: u64,
        count_j: u64,
        prior: u64,
    },
}

impl CompareError {
    /// True for the numerical-domain kinds (as opposed to configuration errors).
    pub fn is_numerical(&self) -> bool {
        !matches!(self, CompareError::Config(_))
    }
}

pub type CompareResult<T> = Result<T, CompareError>;

//! Wordshift - corpus comparison via log-odds-ratio with informative Dirichlet priors
//!
//! Given two (optionally three) text corpora, computes per-word usage-difference
//! z-scores following Monroe, Colaresi & Quinn's "Fightin' Words" procedure and
//! ranks the combined vocabulary by them. Everything runs in-process over
//! in-memory corpora; the CLI layer only loads files and renders reports.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod logodds;
pub mod models;
pub mod reporters;

pub use corpus::{Corpus, WordCounts};
pub use logodds::{CompareError, CompareResult, CorpusComparator};

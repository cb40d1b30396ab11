//! Library-level tests of the comparison pipeline
//!
//! Exercises the public API the way a downstream analysis script would:
//! build corpora, run the comparator, rank, render.

use wordshift::models::{ComparisonReport, CorpusSummary};
use wordshift::reporters::{self, OutputFormat};
use wordshift::{CompareError, Corpus, CorpusComparator, WordCounts};

fn superintendent_corpora() -> (Corpus, Corpus) {
    // Coverage of two hypothetical superintendents: one story is budget
    // politics, the other curriculum reform. Shared filler words overlap.
    let a = Corpus::from_texts(&[
        "the board approved the budget",
        "budget talks stalled again",
        "the superintendent defended the budget",
    ]);
    let b = Corpus::from_texts(&[
        "the district launched a reform",
        "curriculum reform divided parents",
        "the superintendent praised the reform",
    ]);
    (a, b)
}

#[test]
fn ranked_output_separates_topics() {
    let (a, b) = superintendent_corpora();
    let cmp = CorpusComparator::new(&a, &b, None).expect("comparison");

    let rows = cmp.ranked();
    // One row per vocabulary word, z descending
    assert_eq!(rows.len(), cmp.vocabulary().len());
    for pair in rows.windows(2) {
        assert!(pair[0].z_score >= pair[1].z_score);
    }

    // "budget" tops the ranking, "reform" bottoms it
    assert_eq!(rows.first().unwrap().word, "budget");
    assert_eq!(rows.last().unwrap().word, "reform");

    // Shared words sit near the null
    let the = rows.iter().find(|r| r.word == "the").unwrap();
    assert!(the.z_score.abs() < 0.2);
}

#[test]
fn symmetry_holds_across_the_public_api() {
    let (a, b) = superintendent_corpora();
    let bg = a.concat(&b);
    let ab = CorpusComparator::new(&a, &b, Some(&bg)).expect("ab");
    let ba = CorpusComparator::new(&b, &a, Some(&bg)).expect("ba");

    for word in ab.vocabulary() {
        let z_ab = ab.z_score(word).unwrap();
        let z_ba = ba.z_score(word).unwrap();
        assert!((z_ab + z_ba).abs() < 1e-12, "asymmetric z for {word}");
        assert!((ab.sigma_2(word).unwrap() - ba.sigma_2(word).unwrap()).abs() < 1e-12);
    }
}

#[test]
fn default_background_matches_explicit_concatenation() {
    let (a, b) = superintendent_corpora();
    let implicit = CorpusComparator::new(&a, &b, None).expect("implicit");
    let bg = a.concat(&b);
    let explicit = CorpusComparator::new(&a, &b, Some(&bg)).expect("explicit");

    assert_eq!(implicit.ranked(), explicit.ranked());
}

#[test]
fn inconsistent_background_is_rejected_not_coerced() {
    let a = Corpus::from_texts(&["tax"]);
    let b = Corpus::from_texts(&["levy"]);
    // Background mass for "tax" exceeds what corpus a can hold
    let bg = Corpus::from_texts(&["tax tax tax"]);

    let err = CorpusComparator::new(&a, &b, Some(&bg)).unwrap_err();
    assert!(err.is_numerical());
    assert!(
        matches!(err, CompareError::LogDomain { .. } | CompareError::VarianceDomain { .. }),
        "unexpected error kind: {err}"
    );
}

#[test]
fn empty_first_corpus_stays_finite() {
    let empty = Corpus::from_texts::<&str>(&[]);
    let b = Corpus::from_texts(&["strike vote strike"]);
    // Background wider than corpus_j so the prior is informative
    let bg = Corpus::from_texts(&["strike vote strike news news news"]);
    let cmp = CorpusComparator::new(&empty, &b, Some(&bg)).expect("comparison");

    for row in cmp.ranked() {
        assert!(row.z_score.is_finite());
        assert!(row.z_score < 0.0, "{} should lean toward corpus j", row.word);
        assert_eq!(row.count_i, 0);
    }
}

#[test]
fn report_renders_in_every_format() {
    let (a, b) = superintendent_corpora();
    let cmp = CorpusComparator::new(&a, &b, None).expect("comparison");

    let report = ComparisonReport {
        corpus_i: summary("budget-stories", &a),
        corpus_j: summary("reform-stories", &b),
        background: summary("combined", &a.concat(&b)),
        rows: cmp.ranked(),
    };

    let csv = reporters::render_with_format(&report, OutputFormat::Csv).expect("csv");
    assert!(csv.starts_with("word,z_score,count1,count2,total_count\n"));
    assert_eq!(csv.lines().count(), report.rows.len() + 1);

    let json = reporters::render_with_format(&report, OutputFormat::Json).expect("json");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed["corpus_i"]["label"], "budget-stories");

    let text = reporters::render_with_format(&report, OutputFormat::Text).expect("text");
    assert!(text.contains("BUDGET-STORIES"));
}

fn summary(label: &str, corpus: &Corpus) -> CorpusSummary {
    let counts = WordCounts::from_corpus(corpus);
    CorpusSummary {
        label: label.to_string(),
        documents: corpus.doc_count(),
        tokens: counts.total(),
        distinct_words: counts.distinct(),
    }
}

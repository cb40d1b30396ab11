//! Text (terminal) reporter with colors and formatting

use crate::models::{ComparisonReport, CorpusSummary, RankedWord};
use anyhow::Result;

/// ANSI codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

fn summary_line(s: &CorpusSummary) -> String {
    format!(
        "  {BOLD}{}{RESET}: {} documents, {} tokens, {} distinct words\n",
        s.label, s.documents, s.tokens, s.distinct_words
    )
}

fn row_line(row: &RankedWord) -> String {
    let color = if row.z_score > 0.0 {
        GREEN
    } else if row.z_score < 0.0 {
        RED
    } else {
        DIM
    };
    format!(
        "  {color}{:>8.3}{RESET}  {:<24} {:>6} {:>6} {:>6}\n",
        row.z_score, row.word, row.count_i, row.count_j, row.background_count
    )
}

/// Render report as formatted terminal output
pub fn render(report: &ComparisonReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Wordshift Comparison{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&summary_line(&report.corpus_i));
    out.push_str(&summary_line(&report.corpus_j));
    out.push_str(&summary_line(&report.background));
    out.push_str(&format!(
        "\n  vocabulary: {} words ranked by z-score\n",
        report.rows.len()
    ));

    let header = format!(
        "\n  {DIM}{:>8}  {:<24} {:>6} {:>6} {:>6}{RESET}\n",
        "z", "word", "y_i", "y_j", "prior"
    );

    // Positive z: characteristic of corpus i, strongest first
    let positive: Vec<&RankedWord> = report.rows.iter().filter(|r| r.z_score > 0.0).collect();
    if !positive.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}CHARACTERISTIC OF {}{RESET} ({} words)\n",
            report.corpus_i.label.to_uppercase(),
            positive.len()
        ));
        out.push_str(&header);
        for row in &positive {
            out.push_str(&row_line(row));
        }
    }

    // Negative z: characteristic of corpus j, strongest (most negative) first
    let negative: Vec<&RankedWord> = report.rows.iter().rev().filter(|r| r.z_score < 0.0).collect();
    if !negative.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}CHARACTERISTIC OF {}{RESET} ({} words)\n",
            report.corpus_j.label.to_uppercase(),
            negative.len()
        ));
        out.push_str(&header);
        for row in &negative {
            out.push_str(&row_line(row));
        }
    }

    let neutral = report
        .rows
        .iter()
        .filter(|r| r.z_score == 0.0)
        .count();
    if neutral > 0 {
        out.push_str(&format!(
            "\n{DIM}{neutral} words show no usage difference (z = 0){RESET}\n"
        ));
    }

    Ok(out)
}

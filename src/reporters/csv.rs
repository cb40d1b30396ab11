//! CSV reporter
//!
//! Writes the comparison as `word,z_score,count1,count2,total_count`, one row
//! per vocabulary word, z-score descending. This is the artifact downstream
//! analysis notebooks consume.

use crate::models::ComparisonReport;
use anyhow::Result;
use std::borrow::Cow;

/// Render report as CSV
pub fn render(report: &ComparisonReport) -> Result<String> {
    let mut out = String::from("word,z_score,count1,count2,total_count\n");
    for row in &report.rows {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape(&row.word),
            row.z_score,
            row.count_i,
            row.count_j,
            row.background_count
        ));
    }
    Ok(out)
}

/// Quote a field only when it needs it. Tokens are whitespace-free but may
/// still contain commas or quotes.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_csv_header_exact() {
        let out = render(&test_report()).expect("render CSV");
        let header = out.lines().next().expect("header line");
        assert_eq!(header, "word,z_score,count1,count2,total_count");
    }

    #[test]
    fn test_csv_one_row_per_word() {
        let report = test_report();
        let out = render(&report).expect("render CSV");
        assert_eq!(out.lines().count(), report.rows.len() + 1);
        assert!(out.contains("budget,1.42,3,0,3"));
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say\"so"), "\"say\"\"so\"");
    }
}

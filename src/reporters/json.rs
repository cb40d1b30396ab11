//! JSON reporter
//!
//! Outputs the full ComparisonReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::ComparisonReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["corpus_i"]["label"], "incumbents");
        let rows = parsed["rows"].as_array().expect("rows array");
        assert_eq!(rows.len(), 3);
        // Column naming follows the reported artifact
        assert_eq!(rows[0]["count1"], 3);
        assert_eq!(rows[0]["total_count"], 3);
    }

    #[test]
    fn test_json_render_compact() {
        let json_str = render_compact(&test_report()).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_round_trips() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: ComparisonReport = serde_json::from_str(&json_str).expect("deserialize");
        assert_eq!(back.rows, report.rows);
    }
}

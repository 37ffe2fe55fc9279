// crates/clout-cli/src/output.rs
//
// Output formatting utilities for the Clout CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use clout_core::{FeatureScore, Reputation};

/// Output format for CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// One table row per score.
#[derive(Debug, Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "Feature")]
    pub feature: &'static str,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "Confidence")]
    pub confidence: String,
}

impl ScoreRow {
    fn new(feature: &'static str, s: &FeatureScore) -> Self {
        Self {
            feature,
            score: format!("{:.10}", s.score),
            confidence: format!("{:.4}", s.confidence),
        }
    }
}

/// Rows for clout, reach, and clarity, in that order.
pub fn reputation_rows(rep: &Reputation) -> Vec<ScoreRow> {
    vec![
        ScoreRow::new("clout", &rep.clout),
        ScoreRow::new("reach", &rep.reach),
        ScoreRow::new("clarity", &rep.clarity),
    ]
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Render a reputation in the requested format.
pub fn format_reputation(rep: &Reputation, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_table(&reputation_rows(rep)),
        OutputFormat::Json => format_json(rep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reputation {
        Reputation {
            reputee: "Test".to_string(),
            clout: FeatureScore::new(0.6416666666666667, 0.5),
            reach: FeatureScore::new(4.5, 0.5),
            clarity: FeatureScore::new(8.333333333333334, 0.5),
        }
    }

    #[test]
    fn test_rows_in_display_order() {
        let rows = reputation_rows(&sample());
        let features: Vec<&str> = rows.iter().map(|r| r.feature).collect();
        assert_eq!(features, vec!["clout", "reach", "clarity"]);
        assert_eq!(rows[0].score, "0.6416666667");
        assert_eq!(rows[2].score, "8.3333333333");
        assert_eq!(rows[1].confidence, "0.5000");
    }

    #[test]
    fn test_table_has_headers() {
        let table = format_reputation(&sample(), &OutputFormat::Table);
        assert!(table.contains("Feature"));
        assert!(table.contains("Confidence"));
        assert!(table.contains("clarity"));
    }

    #[test]
    fn test_json_round_trips() {
        let json = format_reputation(&sample(), &OutputFormat::Json);
        let back: Reputation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}

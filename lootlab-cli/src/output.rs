//! Report rendering — terminal table, JSON, and CSV.
//!
//! The terminal table mirrors the original calculator's results view:
//! per-entry single-draw probability, at-least-once chance, expected count,
//! and the leading terms of the outcome distribution (truncated after six
//! with an ellipsis). JSON and CSV carry the full PMF for external tools.

use anyhow::{Context, Result};
use lootlab_core::{Entry, LootTable, TableReport};

/// How probabilities are rendered in the terminal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// `12.34%`
    Percent,
    /// `0.1234`
    Decimal,
}

impl Rounding {
    fn format(self, value: f64) -> String {
        match self {
            Rounding::Percent => format!("{:.2}%", value * 100.0),
            Rounding::Decimal => format!("{value:.4}"),
        }
    }
}

/// Source column text: the raw weight or range an entry was defined with.
fn entry_source(entry: &Entry) -> String {
    match entry {
        Entry::Ranged { range: [lo, hi], .. } => format!("[{lo}-{hi}]"),
        Entry::Weighted { weight, .. } => format!("{weight}"),
    }
}

/// Leading PMF terms as `k:P` pairs, truncated after six.
fn distribution_cell(pmf: &[f64], rounding: Rounding) -> String {
    let shown = pmf.len().min(6);
    let mut cell = pmf[..shown]
        .iter()
        .enumerate()
        .map(|(k, &v)| format!("{k}:{}", rounding.format(v)))
        .collect::<Vec<_>>()
        .join(" | ");
    if pmf.len() > shown {
        cell.push_str(" | ...");
    }
    cell
}

/// Render the report as an aligned text table plus a summary line.
pub fn render_table(table: &LootTable, report: &TableReport, rounding: Rounding) -> String {
    if report.entries.is_empty() {
        return "No entries.\n".to_string();
    }

    let header = [
        "Item".to_string(),
        "Weight/Range".to_string(),
        "p(single)".to_string(),
        format!("Chance >=1 in {}", report.draws),
        "Expected".to_string(),
        "Distribution (k: P)".to_string(),
    ];

    let rows: Vec<[String; 6]> = report
        .entries
        .iter()
        .zip(table.entries())
        .map(|(outcome, entry)| {
            [
                outcome.name.clone(),
                entry_source(entry),
                rounding.format(outcome.p),
                rounding.format(outcome.at_least_once),
                format!("{:.3}", outcome.expected_count),
                distribution_cell(&outcome.pmf, rounding),
            ]
        })
        .collect();

    // Column widths over header and body (the distribution column is last
    // and left ragged).
    let mut widths = [0usize; 5];
    for col in 0..5 {
        widths[col] = header[col].len();
        for row in &rows {
            widths[col] = widths[col].max(row[col].len());
        }
    }

    let mut out = String::new();
    for col in 0..5 {
        out.push_str(&format!("{:<w$}  ", header[col], w = widths[col]));
    }
    out.push_str(&header[5]);
    out.push('\n');
    for row in &rows {
        for col in 0..5 {
            out.push_str(&format!("{:<w$}  ", row[col], w = widths[col]));
        }
        out.push_str(&row[5]);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} items. Sampling: {}.\n",
        report.entries.len(),
        report.mode
    ));
    out
}

/// Full report as pretty JSON.
pub fn export_json(report: &TableReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report to JSON")
}

/// One CSV row per entry; the full PMF rides in a semicolon-joined column.
pub fn export_csv(report: &TableReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["name", "p", "at_least_once", "expected_count", "pmf"])?;
    for entry in &report.entries {
        let pmf = entry
            .pmf
            .iter()
            .map(|v| format!("{v:.10}"))
            .collect::<Vec<_>>()
            .join(";");
        wtr.write_record([
            entry.name.as_str(),
            &format!("{:.10}", entry.p),
            &format!("{:.10}", entry.at_least_once),
            &format!("{:.10}", entry.expected_count),
            &pmf,
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootlab_core::SamplingMode;

    fn sample() -> (LootTable, TableReport) {
        let table: LootTable =
            serde_json::from_str(r#"[{"name": "a", "weight": 1}, {"name": "b", "weight": 3}]"#)
                .unwrap();
        let report = TableReport::compute(&table, 8, SamplingMode::WithReplacement).unwrap();
        (table, report)
    }

    #[test]
    fn rounding_modes() {
        assert_eq!(Rounding::Percent.format(0.256), "25.60%");
        assert_eq!(Rounding::Decimal.format(0.256), "0.2560");
    }

    #[test]
    fn distribution_truncates_after_six_terms() {
        let pmf = vec![0.1; 9];
        let cell = distribution_cell(&pmf, Rounding::Decimal);
        assert!(cell.ends_with(" | ..."));
        assert_eq!(cell.matches(':').count(), 6);

        let short = distribution_cell(&[0.25, 0.5, 0.25], Rounding::Decimal);
        assert!(!short.contains("..."));
        assert_eq!(short, "0:0.2500 | 1:0.5000 | 2:0.2500");
    }

    #[test]
    fn table_render_contains_all_entries_and_summary() {
        let (table, report) = sample();
        let text = render_table(&table, &report, Rounding::Percent);
        assert!(text.contains("Item"));
        assert!(text.contains("Chance >=1 in 8"));
        assert!(text.lines().any(|l| l.starts_with('a')));
        assert!(text.lines().any(|l| l.starts_with('b')));
        assert!(text.contains("2 items. Sampling: with."));
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let table: LootTable = serde_json::from_str("[]").unwrap();
        let report = TableReport::compute(&table, 3, SamplingMode::WithReplacement).unwrap();
        assert_eq!(render_table(&table, &report, Rounding::Percent), "No entries.\n");
    }

    #[test]
    fn csv_has_header_and_full_pmf() {
        let (_, report) = sample();
        let csv = export_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 entries
        assert_eq!(lines[0], "name,p,at_least_once,expected_count,pmf");
        // 8 draws -> 9 PMF terms in the last column
        let pmf_col = lines[1].rsplit(',').next().unwrap();
        assert_eq!(pmf_col.matches(';').count(), 8);
    }

    #[test]
    fn json_roundtrips() {
        let (_, report) = sample();
        let json = export_json(&report).unwrap();
        let back: TableReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

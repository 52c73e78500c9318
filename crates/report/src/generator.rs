//! Report aggregation and rendering.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use toolcrib_core::{CoreError, CoreResult, DataPaths};
use toolcrib_inventory::ComponentRecord;

/// Display truncation limits. Names and reasons at exactly the limit
/// pass through untouched; strictly longer values are cut to
/// `limit - 3` characters plus `...`, so a rendered cell never exceeds
/// its column. Truncation is display-only and never written back.
const NAME_LIMIT: usize = 30;
const REASON_LIMIT: usize = 20;
const ELLIPSIS: &str = "...";

const QTY_WIDTH: usize = 11;
const WORKING_WIDTH: usize = 7;
const NOT_WORKING_WIDTH: usize = 11;

/// Aggregate totals over a snapshot. Empty snapshots total zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportTotals {
    pub components: usize,
    pub quantity: u64,
    pub working: u64,
    pub not_working: u64,
}

impl ReportTotals {
    pub fn from_records(records: &[(String, ComponentRecord)]) -> Self {
        records.iter().fold(Self::default(), |acc, (_, r)| Self {
            components: acc.components + 1,
            quantity: acc.quantity + u64::from(r.quantity_in_hand),
            working: acc.working + u64::from(r.number_working),
            not_working: acc.not_working + u64::from(r.number_not_working),
        })
    }
}

/// A persisted report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub path: PathBuf,
    pub totals: ReportTotals,
}

/// Renders and persists inventory reports into a fixed output
/// directory.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.reports_dir())
    }

    /// Render the snapshot and write it under a timestamped filename.
    ///
    /// The filename embeds `generated_at` to the second, so exports
    /// started in different seconds never collide. Two exports within
    /// the same second share a name and the later one wins; that
    /// limitation is accepted. Failure to write is a storage error,
    /// fatal to this export only.
    pub fn generate(
        &self,
        generated_by: &str,
        records: &[(String, ComponentRecord)],
        generated_at: DateTime<Utc>,
    ) -> CoreResult<ReportArtifact> {
        let totals = ReportTotals::from_records(records);
        let rendered = render(generated_by, records, generated_at, totals);

        let filename = format!(
            "inventory_report_{}.txt",
            generated_at.format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(filename);

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| CoreError::storage(self.output_dir.display().to_string(), e))?;
        fs::write(&path, rendered)
            .map_err(|e| CoreError::storage(path.display().to_string(), e))?;

        tracing::info!(path = %path.display(), components = totals.components, "report exported");
        Ok(ReportArtifact { path, totals })
    }
}

fn render(
    generated_by: &str,
    records: &[(String, ComponentRecord)],
    generated_at: DateTime<Utc>,
    totals: ReportTotals,
) -> String {
    let mut out = String::new();

    let title = "WORKSHOP INVENTORY REPORT";
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Report Title:   Workshop Inventory Status");
    let _ = writeln!(out, "Generated By:   {generated_by}");
    let _ = writeln!(
        out,
        "Generated Date: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<name$} | {:>qty$} | {:>working$} | {:>nw$} | {}",
        "Component Name",
        "Qty in Hand",
        "Working",
        "Not Working",
        "Reason",
        name = NAME_LIMIT,
        qty = QTY_WIDTH,
        working = WORKING_WIDTH,
        nw = NOT_WORKING_WIDTH,
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}-+-{}-+-{}",
        "-".repeat(NAME_LIMIT),
        "-".repeat(QTY_WIDTH),
        "-".repeat(WORKING_WIDTH),
        "-".repeat(NOT_WORKING_WIDTH),
        "-".repeat(REASON_LIMIT),
    );

    for (name, record) in records {
        let _ = writeln!(
            out,
            "{:<name_w$} | {:>qty$} | {:>working$} | {:>nw$} | {}",
            truncate(name, NAME_LIMIT),
            record.quantity_in_hand,
            record.number_working,
            record.number_not_working,
            truncate(&record.reason, REASON_LIMIT),
            name_w = NAME_LIMIT,
            qty = QTY_WIDTH,
            working = WORKING_WIDTH,
            nw = NOT_WORKING_WIDTH,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "-------");
    let _ = writeln!(out, "Total Components:  {}", totals.components);
    let _ = writeln!(out, "Total Quantity:    {}", totals.quantity);
    let _ = writeln!(out, "Total Working:     {}", totals.working);
    let _ = writeln!(out, "Total Not Working: {}", totals.not_working);

    out
}

/// Cut a display value to `limit` characters, ellipsis included.
/// Counts characters, not bytes, so multi-byte names never split.
fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let kept: String = value.chars().take(limit - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

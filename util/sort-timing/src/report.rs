use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::benchmark::Timing;
use crate::error::HarnessError;

/// By versioning the report files, plotting scripts can catch format changes early.
const REPORT_VERSION: usize = 1;

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: usize,
    pub seed: u64,
    pub nb_lst: usize,
    pub rows: Vec<ReportRow>,
}

/// One point of a time vs. list length curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub sort_name: String,
    pub lst_len: usize,
    pub total_secs: f64,
    pub median_nanos: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_comparisons: Option<u64>,
}

impl Report {
    pub fn new(seed: u64, nb_lst: usize) -> Self {
        Self {
            version: REPORT_VERSION,
            seed,
            nb_lst,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, sort_name: &str, lst_len: usize, timing: &Timing) {
        self.rows.push(ReportRow {
            sort_name: sort_name.to_owned(),
            lst_len,
            total_secs: timing.total.as_secs_f64(),
            median_nanos: u64::try_from(timing.median.as_nanos()).unwrap_or(u64::MAX),
            mean_comparisons: timing.mean_comparisons,
        });
    }

    pub fn write_json(&self, path: &Path) -> Result<(), HarnessError> {
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)?;

        Ok(())
    }

    /// Plain text rendering, one block per sort.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let mut current_sort: Option<&str> = None;

        for row in &self.rows {
            if current_sort != Some(row.sort_name.as_str()) {
                out.push_str(&format!("\n{}\n", row.sort_name));
                current_sort = Some(row.sort_name.as_str());
            }

            out.push_str(&format!(
                "With {} items : took {} seconds.",
                row.lst_len, row.total_secs
            ));
            if let Some(comps) = row.mean_comparisons {
                out.push_str(&format!(" mean comparisons: {comps}"));
            }
            out.push('\n');
        }

        out
    }
}

// src/storage/mod.rs
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::record::{Dialect, ResultRecord};
use crate::utils::error::StorageError;

/// Totals over a batch of parsed reports. Values a report did not supply
/// (negative sentinels) are left out of the sums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub reports: usize,
    pub total_time_seconds: i64,
    pub test_passes: i64,
    pub test_failures: i64,
    pub test_total: i64,
    pub command_passes: i64,
    pub command_failures: i64,
    pub command_errors: i64,
}

fn known(value: i32) -> i64 {
    i64::from(value.max(0))
}

impl Totals {
    fn add(&mut self, record: &ResultRecord) {
        let seconds = match record.dialect() {
            Dialect::Structured => known(record.total_time()),
            Dialect::Logging => known(record.total_time()) / 1000,
        };
        let passes = known(record.test_pass_count());
        let failures = known(record.test_fail_count());

        self.reports += 1;
        self.total_time_seconds += seconds;
        self.test_passes += passes;
        self.test_failures += failures;
        self.test_total += passes + failures;
        self.command_passes += known(record.command_pass_count());
        self.command_failures += known(record.command_fail_count());
        self.command_errors += known(record.command_error_count());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub generated_at: String,
    pub totals: Totals,
    pub records: Vec<ResultRecord>,
}

impl Summary {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        let mut totals = Totals::default();
        for record in &records {
            totals.add(record);
        }
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            totals,
            records,
        }
    }
}

/// Writes `summary` as pretty JSON, creating parent directories as needed.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(StorageError::IoError)?;
        }
    }

    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(path, json).map_err(StorageError::IoError)?;

    tracing::info!("Saved summary of {} reports to {}", summary.totals.reports, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportParser;

    fn parse(dir: &tempfile::TempDir, name: &str, body: &str) -> ResultRecord {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        ReportParser::default().parse(&path, None).unwrap()
    }

    #[test]
    fn totals_add_up_across_dialects() {
        let dir = tempfile::tempdir().unwrap();
        let a = parse(&dir, "a.html", "<table><tr><td>numTestPasses:</td><td>3</td><td>numTestFailures:</td><td>1</td>\
            <td>numCommandPasses:</td><td>10</td><td>numCommandFailures:</td><td>1</td><td>numCommandErrors:</td><td>0</td>\
            <td>totalTime:</td><td>4000</td></tr></table>");
        let b = parse(&dir, "b.html", "<table><tr><td>commands processed:<td>5<td>failed commands:<td>2</table>");

        let summary = Summary::new(vec![a, b]);
        assert_eq!(summary.totals.reports, 2);
        assert_eq!(summary.totals.test_passes, 4);
        assert_eq!(summary.totals.test_failures, 1);
        assert_eq!(summary.totals.test_total, 5);
        assert_eq!(summary.totals.command_passes, 15);
        assert_eq!(summary.totals.command_failures, 3);
        assert_eq!(summary.totals.command_errors, 0);
        assert_eq!(summary.totals.total_time_seconds, 4);
    }

    #[test]
    fn totals_use_seconds_and_skip_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let a = parse(&dir, "a.html", "<table><tr><td>totalTime:</td><td>4000</td></tr></table>");
        let b = parse(&dir, "b.html", "<table><tr><td>test-duration [ms]:<td>4000</table>");
        assert_eq!(a.command_pass_count(), -1);
        assert_eq!(b.total_time(), 4000);

        let totals = Summary::new(vec![a, b]).totals;
        assert_eq!(totals.total_time_seconds, 8);
        assert_eq!(totals.test_passes, 1);
        assert_eq!(totals.test_failures, 0);
        assert_eq!(totals.test_total, 1);
        assert_eq!(totals.command_passes, 0);
        assert_eq!(totals.command_failures, 0);
        assert_eq!(totals.command_errors, 0);
    }

    #[test]
    fn writes_pretty_json_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let record = parse(&dir, "a.html", "<table><tr><td>result:</td><td>passed</td></tr></table>");
        let out = dir.path().join("out").join("summary.json");

        write_summary(&out, &Summary::new(vec![record])).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["totals"]["reports"], 1);
        assert_eq!(value["records"][0]["status"], "passed");
        assert_eq!(value["records"][0]["dialect"], "structured");
        assert!(value["generated_at"].as_str().is_some());
    }
}

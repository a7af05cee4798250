// src/record.rs
use serde::{Deserialize, Serialize};

/// Which report format a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Selenium core "structured" HTML report, well-formed XHTML.
    Structured,
    /// logging-selenium HTML report, parsed leniently.
    Logging,
}

/// Metrics of one test report. Built by exactly one dialect extractor and
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    source_file_name: String,
    dialect: Dialect,
    status: String,
    total_time: i32,
    test_pass_count: i32,
    test_fail_count: i32,
    command_pass_count: i32,
    command_fail_count: i32,
    command_error_count: i32,
}

/// Field values handed over by an extractor.
#[derive(Debug, Clone, Default)]
pub(crate) struct Counts {
    pub total_time: i32,
    pub test_pass: i32,
    pub test_fail: i32,
    pub command_pass: i32,
    pub command_fail: i32,
    pub command_error: i32,
}

impl ResultRecord {
    pub(crate) fn new(source_file_name: String, dialect: Dialect, status: String, counts: Counts) -> Self {
        Self {
            source_file_name,
            dialect,
            status,
            total_time: counts.total_time,
            test_pass_count: counts.test_pass,
            test_fail_count: counts.test_fail,
            command_pass_count: counts.command_pass,
            command_fail_count: counts.command_fail,
            command_error_count: counts.command_error,
        }
    }

    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Seconds for [`Dialect::Structured`]; the raw millisecond figure for
    /// [`Dialect::Logging`].
    pub fn total_time(&self) -> i32 {
        self.total_time
    }

    pub fn test_pass_count(&self) -> i32 {
        self.test_pass_count
    }

    pub fn test_fail_count(&self) -> i32 {
        self.test_fail_count
    }

    pub fn command_pass_count(&self) -> i32 {
        self.command_pass_count
    }

    pub fn command_fail_count(&self) -> i32 {
        self.command_fail_count
    }

    pub fn command_error_count(&self) -> i32 {
        self.command_error_count
    }

    pub fn test_total(&self) -> i32 {
        self.test_pass_count + self.test_fail_count
    }
}

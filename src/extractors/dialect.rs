// src/extractors/dialect.rs
use std::path::Path;

use super::fields::FieldReader;
use crate::document::{self, MarkupReader};
use crate::record::{Counts, Dialect, ResultRecord};
use crate::utils::error::ReportError;
use crate::utils::listener::{emit, Listener};

/// Structured (Selenium core) report: every figure is labelled in the table.
pub fn extract_structured(
    reader: &dyn MarkupReader,
    path: &Path,
    name: &str,
    listener: Option<&dyn Listener>,
) -> Result<ResultRecord, ReportError> {
    emit(listener, &format!("parsing resultFile {}", name));
    let source = document::read_report(path)?;
    let doc = document::open(reader, path, &source)?;
    let fields = FieldReader::new(doc.as_ref(), path, listener);

    let status = fields.text("result:")?.unwrap_or_default();
    // Reported in milliseconds; kept in whole seconds, truncated.
    let total_time = fields.integer_or_sentinel("totalTime:")? / 1000;
    let counts = Counts {
        total_time,
        test_pass: fields.integer_or_sentinel("numTestPasses:")?,
        test_fail: fields.integer_or_sentinel("numTestFailures:")?,
        command_pass: fields.integer_or_sentinel("numCommandPasses:")?,
        command_fail: fields.integer_or_sentinel("numCommandFailures:")?,
        command_error: fields.integer_or_sentinel("numCommandErrors:")?,
    };

    Ok(ResultRecord::new(name.to_string(), Dialect::Structured, status, counts))
}

/// logging-selenium report: one test per file, command figures only.
pub fn extract_logging(
    reader: &dyn MarkupReader,
    path: &Path,
    name: &str,
    listener: Option<&dyn Listener>,
) -> Result<ResultRecord, ReportError> {
    emit(listener, &format!("parsing resultFile {}", name));
    let source = document::read_report(path)?;
    let doc = document::open(reader, path, &source)?;
    let fields = FieldReader::new(doc.as_ref(), path, listener).reporting_missing();

    let status = fields
        .text("last failed message:")?
        .unwrap_or_else(|| "OK".to_string());
    let mut counts = Counts {
        // Left in milliseconds, unlike the structured dialect.
        total_time: fields.integer_or_sentinel("test-duration [ms]:")?,
        command_pass: fields.integer_or_sentinel("commands processed:")?,
        command_fail: fields.integer("failed commands:", 0)?,
        command_error: 0,
        ..Counts::default()
    };

    // Errors are never reported by this dialect, so the check always passes
    // and the file counts as one passing test.
    if counts.command_error + counts.command_error == 0 {
        counts.test_pass = 1;
        counts.test_fail = 0;
    } else {
        counts.test_pass = 0;
        counts.test_fail = 1;
    }

    Ok(ResultRecord::new(name.to_string(), Dialect::Logging, status, counts))
}

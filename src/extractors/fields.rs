// src/extractors/fields.rs
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::lookup;
use crate::document::Document;
use crate::utils::error::ReportError;
use crate::utils::listener::{emit, Listener};

/// Default for integer fields that are missing or unreadable.
pub const SENTINEL: i32 = -1;

// Everything that is not an ASCII digit, signs and decimal points included.
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9]+").expect("Failed to compile NON_DIGITS")
});

/// Typed access to labelled values of one parsed report.
pub struct FieldReader<'d> {
    document: &'d dyn Document,
    path: &'d Path,
    listener: Option<&'d dyn Listener>,
    report_missing: bool,
}

impl<'d> FieldReader<'d> {
    /// `path` only names the report in errors.
    pub fn new(document: &'d dyn Document, path: &'d Path, listener: Option<&'d dyn Listener>) -> Self {
        Self { document, path, listener, report_missing: false }
    }

    /// Also tell the listener about labels that are absent or blank.
    pub fn reporting_missing(mut self) -> Self {
        self.report_missing = true;
        self
    }

    pub fn text(&self, label: &str) -> Result<Option<String>, ReportError> {
        let value = lookup::find(self.document, label).map_err(|source| ReportError::Format {
            path: self.path.to_path_buf(),
            source,
        })?;
        if self.report_missing && value.as_deref().map_or(true, |v| v.trim().is_empty()) {
            tracing::warn!("'{}' not found in result file", label);
            emit(self.listener, &format!("{} not found in result file!", label));
        }
        Ok(value)
    }

    /// Digits of the value as an integer; `default` when the label is absent
    /// or no integer survives stripping.
    pub fn integer(&self, label: &str, default: i32) -> Result<i32, ReportError> {
        let Some(raw) = self.text(label)? else {
            return Ok(default);
        };
        let digits = NON_DIGITS.replace_all(&raw, "");
        match digits.parse::<i32>() {
            Ok(n) => Ok(n),
            Err(e) => {
                tracing::warn!("Can't parse '{}' as {} ({}), using {}", digits, label, e, default);
                emit(self.listener, &format!("can't parse {} as {}", digits, label));
                Ok(default)
            }
        }
    }

    pub fn integer_or_sentinel(&self, label: &str) -> Result<i32, ReportError> {
        self.integer(label, SENTINEL)
    }
}

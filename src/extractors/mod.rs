// src/extractors/mod.rs
pub mod dialect;
pub mod fields;
pub mod lookup;

use std::path::Path;

use crate::config::ParseConfig;
use crate::document::{LenientReader, StrictReader};
use crate::record::ResultRecord;
use crate::utils::error::ReportError;
use crate::utils::listener::Listener;

// Re-export key extraction types for convenience
pub use dialect::{extract_logging, extract_structured};
pub use fields::{FieldReader, SENTINEL};

/// Reads a report as the structured dialect, falling back to the logging
/// dialect when the document is not well-formed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser {
    strict: StrictReader,
    lenient: LenientReader,
}

impl ReportParser {
    pub fn new(config: ParseConfig) -> Self {
        Self {
            strict: StrictReader::new(config.strict),
            lenient: LenientReader,
        }
    }

    /// Parses the report at `path`, naming the record after its file name.
    pub fn parse(&self, path: &Path, listener: Option<&dyn Listener>) -> Result<ResultRecord, ReportError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.parse_named(path, &name, listener)
    }

    /// Parses `file_name` below `reports_dir`; the record keeps `file_name`.
    pub fn parse_in(
        &self,
        reports_dir: &Path,
        file_name: &str,
        listener: Option<&dyn Listener>,
    ) -> Result<ResultRecord, ReportError> {
        self.parse_named(&reports_dir.join(file_name), file_name, listener)
    }

    fn parse_named(&self, path: &Path, name: &str, listener: Option<&dyn Listener>) -> Result<ResultRecord, ReportError> {
        match extract_structured(&self.strict, path, name, listener) {
            Ok(record) => {
                tracing::info!("Parsed {} as a structured report", name);
                Ok(record)
            }
            Err(e) if e.is_format() => {
                tracing::info!("{} is not a structured report ({}), trying logging dialect", name, e);
                let record = extract_logging(&self.lenient, path, name, listener)?;
                tracing::info!("Parsed {} as a logging report", name);
                Ok(record)
            }
            Err(e) => Err(e),
        }
    }
}

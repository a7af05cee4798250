// src/document/mod.rs
//! Markup readers. Both readers reduce a report to the one thing the
//! extractors care about: the text of each table cell, in the order the
//! cells close.

pub mod lenient;
pub mod strict;

use std::ops::ControlFlow;
use std::path::Path;

use crate::utils::error::{MarkupError, ReportError};

pub use lenient::LenientReader;
pub use strict::StrictReader;

/// A parsed report.
pub trait Document {
    /// Feeds the trimmed text of every `td` to `visit` on its close event,
    /// in document order, until `visit` breaks. Every call starts over from
    /// the first byte; markup errors past the break point are never seen.
    fn walk_cells(&self, visit: &mut dyn FnMut(&str) -> ControlFlow<()>) -> Result<(), MarkupError>;
}

/// Turns raw report bytes into a [`Document`].
pub trait MarkupReader {
    fn name(&self) -> &'static str;

    fn parse<'a>(&self, source: &'a [u8]) -> Result<Box<dyn Document + 'a>, MarkupError>;
}

/// Reads the whole report into memory.
pub fn read_report(path: &Path) -> Result<Vec<u8>, ReportError> {
    std::fs::read(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `source` (the bytes of `path`) with `reader`.
pub fn open<'a>(
    reader: &dyn MarkupReader,
    path: &Path,
    source: &'a [u8],
) -> Result<Box<dyn Document + 'a>, ReportError> {
    tracing::debug!("Parsing {} with the {} reader ({} bytes)", path.display(), reader.name(), source.len());
    reader.parse(source).map_err(|source| ReportError::Format {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn is_cell(tag: &[u8]) -> bool {
    tag.eq_ignore_ascii_case(b"td")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_report(&dir.path().join("nope.html")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn undecodable_bytes_are_a_format_error() {
        let err = match open(&StrictReader::default(), Path::new("x.html"), b"<td>\xff</td>") {
            Ok(_) => panic!("invalid UTF-8 must not pass the strict reader"),
            Err(e) => e,
        };
        assert!(err.is_format());
    }

    #[test]
    fn tag_soup_opens_but_fails_when_walked() {
        let doc = match open(&StrictReader::default(), Path::new("x.html"), b"<table><td>a</table>") {
            Ok(doc) => doc,
            Err(e) => panic!("opening only decodes the bytes: {}", e),
        };
        assert!(doc.walk_cells(&mut |_| ControlFlow::Continue(())).is_err());
    }

    #[test]
    fn cell_tag_match_ignores_case() {
        assert!(is_cell(b"td"));
        assert!(is_cell(b"TD"));
        assert!(!is_cell(b"th"));
        assert!(!is_cell(b"tdx"));
    }
}

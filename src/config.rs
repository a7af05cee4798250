// src/config.rs

/// Options for the strict (well-formed XML) reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictOptions {
    /// Accept `<!DOCTYPE ...>` declarations. XHTML reports usually carry one.
    pub allow_dtd: bool,
    /// Upper bound on elements walked; larger documents are rejected as malformed.
    pub nodes_limit: u32,
}

impl Default for StrictOptions {
    fn default() -> Self {
        Self {
            allow_dtd: true,
            nodes_limit: u32::MAX,
        }
    }
}

/// Parser configuration handed to [`crate::ReportParser::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    pub strict: StrictOptions,
}

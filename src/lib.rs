// src/lib.rs
//! Reads Selenium HTML test reports into a [`ResultRecord`].
//!
//! Two report flavours are understood: the well-formed "structured" report
//! of Selenium core and the tag-soup report of logging-selenium. The
//! [`ReportParser`] tries the first and falls back to the second.
pub mod config;
pub mod document;
pub mod extractors;
pub mod record;
pub mod storage;
pub mod utils;

pub use config::{ParseConfig, StrictOptions};
pub use extractors::ReportParser;
pub use record::{Dialect, ResultRecord};
pub use utils::error::{MarkupError, ReportError};
pub use utils::listener::{LineRecorder, Listener, TracingListener};

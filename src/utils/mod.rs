// src/utils/mod.rs
pub mod error;
pub mod listener;
pub mod logging;

pub use error::{AppError, MarkupError, ReportError, StorageError};
pub use listener::{LineRecorder, Listener, TracingListener};

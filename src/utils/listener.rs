// src/utils/listener.rs
use std::cell::RefCell;

/// Sink for the plain diagnostic lines a caller wants to show next to a
/// build (e.g. "parsing resultFile X"). Parsing never depends on it.
pub trait Listener {
    fn line(&self, msg: &str);
}

/// Forwards every line to `tracing` at INFO.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl Listener for TracingListener {
    fn line(&self, msg: &str) {
        tracing::info!("{}", msg);
    }
}

/// Keeps lines in memory, in the order they were emitted.
#[derive(Debug, Default)]
pub struct LineRecorder {
    lines: RefCell<Vec<String>>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

impl Listener for LineRecorder {
    fn line(&self, msg: &str) {
        self.lines.borrow_mut().push(msg.to_string());
    }
}

/// Emits `msg` if a listener is attached.
pub(crate) fn emit(listener: Option<&dyn Listener>, msg: &str) {
    if let Some(l) = listener {
        l.line(msg);
    }
}

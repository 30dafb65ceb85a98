//! Core logging types: stage entries, status, and the [`Log`] trait.

/// Stage result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Human-readable stage name.
    pub name: String,
    /// Final status of the stage.
    pub status: TaskStatus,
    /// Optional detail message (e.g. skip reason or error description).
    pub message: Option<String>,
}

/// Status of a completed stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Stage completed successfully.
    Ok,
    /// Stage precondition already satisfied; nothing to do.
    NotApplicable,
    /// Stage ran but chose to leave things as they were.
    Skipped,
    /// Stage failed and aborted the run.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) is the production implementation;
/// stages log through this trait so tests can capture output.
pub trait Log: std::fmt::Debug {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console by default).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Record a stage result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}

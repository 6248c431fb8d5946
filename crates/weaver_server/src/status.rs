//! Status reporting for a single request.

use serde::Serialize;
use tracing::{error, info, warn};
use weaver_interface::{Phase, Progress, StatusReporter};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Missing input
    Warning,
    /// Backend failure
    Error,
}

/// A message shown above the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

/// One entry in the status timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusStep {
    /// Text shown to the user
    pub label: String,
    /// Completion for progress updates, `None` for plain labels
    pub percent: Option<u8>,
}

/// Collects what a run reports and mirrors it to the log.
///
/// The page is rendered once the run ends, so the log keeps every label and
/// progress update as the status timeline.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    phase: Option<Phase>,
    steps: Vec<StatusStep>,
    progress: Option<Progress>,
    notices: Vec<Notice>,
}

impl StatusLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last phase entered.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Every label and progress update in order.
    pub fn steps(&self) -> &[StatusStep] {
        &self.steps
    }

    /// The most recent label.
    pub fn current_label(&self) -> Option<&str> {
        self.steps.last().map(|step| step.label.as_str())
    }

    /// Outstanding progress, `None` once cleared.
    pub fn progress(&self) -> Option<Progress> {
        self.progress
    }

    /// Warnings and errors in order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl StatusReporter for StatusLog {
    fn phase(&mut self, phase: Phase) {
        info!(phase = %phase, "Phase");
        self.phase = Some(phase);
    }

    fn label(&mut self, label: &str) {
        info!(label, "Status");
        self.steps.push(StatusStep {
            label: label.to_string(),
            percent: None,
        });
    }

    fn progress(&mut self, progress: Progress) {
        info!(
            current = progress.current,
            total = progress.total,
            percent = progress.percent(),
            "{}",
            progress.label()
        );
        self.steps.push(StatusStep {
            label: progress.label(),
            percent: Some(progress.percent()),
        });
        self.progress = Some(progress);
    }

    fn clear_progress(&mut self) {
        self.progress = None;
    }

    fn warning(&mut self, message: &str) {
        warn!(message, "User warning");
        self.notices.push(Notice {
            level: NoticeLevel::Warning,
            message: message.to_string(),
        });
    }

    fn error(&mut self, message: &str) {
        error!(message, "User error");
        self.notices.push(Notice {
            level: NoticeLevel::Error,
            message: message.to_string(),
        });
    }
}

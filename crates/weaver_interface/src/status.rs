//! Status reporting shared by the pipeline stages.

use serde::Serialize;

/// States of the per-trigger orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for a trigger
    Idle,
    /// Checking the required inputs
    Validating,
    /// Waiting on the story backend
    GeneratingStory,
    /// Splitting the story and drawing scenes
    SegmentingAndIllustrating,
    /// Waiting on the speech backend
    Narrating,
    /// All stages finished
    Complete,
}

/// Illustration progress after an image completes.
///
/// # Examples
///
/// ```
/// use weaver_interface::Progress;
///
/// let progress = Progress::new(2, 3);
/// assert_eq!(progress.percent(), 66);
/// assert_eq!(progress.label(), "Illustration 2 ready!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Progress {
    /// Images finished so far (1-based)
    pub current: usize,
    /// Images requested in total
    pub total: usize,
}

impl Progress {
    /// Create a progress marker.
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Whole-number percentage, rounded down.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.current.min(self.total) * 100) / self.total) as u8
    }

    /// Caption shown next to the progress bar.
    pub fn label(&self) -> String {
        format!("Illustration {} ready!", self.current)
    }
}

/// Sink for everything the user sees while a run is in flight.
///
/// `warning` and `error` form the user-visible error channel; `label` and
/// `progress` drive the status panel.
pub trait StatusReporter: Send {
    /// The orchestrator entered a new phase.
    fn phase(&mut self, phase: Phase);

    /// Replace the status label.
    fn label(&mut self, label: &str);

    /// An illustration finished.
    fn progress(&mut self, progress: Progress);

    /// Remove the progress bar.
    fn clear_progress(&mut self);

    /// Non-fatal notice (e.g. missing input).
    fn warning(&mut self, message: &str);

    /// A backend call failed.
    fn error(&mut self, message: &str);
}

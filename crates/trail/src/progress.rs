/// Position of a reveal within a run's trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of records shown so far (1-based once anything is shown).
    pub current: usize,

    /// Total number of records in the run.
    pub total: usize,
}

impl Progress {
    /// Creates a progress marker.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Returns `current / total`, or `0.0` for an empty trail.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }

    /// Returns the iteration counter text, e.g. `Iteration: 3`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Iteration: {}", self.current)
    }

    /// Returns a text progress bar `width` cells wide, e.g. `[#####-----]`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.fraction() * width as f64).round() as usize).min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

/// Returns the "processing" indicator for an animation tick.
///
/// Cycles through zero to three trailing dots.
#[must_use]
pub fn processing_label(tick: usize) -> String {
    format!("Processing{}", ".".repeat(tick % 4))
}

use std::{
    str::Chars,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use newton_solvers::equation::newton::{IterationRecord, SolverRun};

use crate::Progress;

/// A shared flag that stops a reveal.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// (an input handler, a "Stop" button) while the reveal holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Creates a handle that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Walks a finished run's records one at a time.
///
/// The reveal owns its own cursor. It stops early once its [`CancelHandle`]
/// is cancelled; the run itself is never modified.
#[derive(Debug)]
pub struct Reveal<'a> {
    records: &'a [IterationRecord],
    cursor: usize,
    cancel: CancelHandle,
}

impl<'a> Reveal<'a> {
    /// Creates a reveal over `run`'s records.
    #[must_use]
    pub fn new(run: &'a SolverRun, cancel: CancelHandle) -> Self {
        Self {
            records: run.records(),
            cursor: 0,
            cancel,
        }
    }

    /// Returns the progress after the most recently revealed record.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.cursor, self.records.len())
    }

    /// Returns true once cancellation has been requested.
    ///
    /// This stays true after the last record is shown, so a stop during the
    /// final record still suppresses the outcome.
    #[must_use]
    pub fn was_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = (Progress, &'a IterationRecord);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let record = self.records.get(self.cursor)?;
        self.cursor += 1;
        Some((self.progress(), record))
    }
}

/// Yields the characters of a rendered record one at a time.
#[derive(Debug)]
pub struct Typewriter<'a> {
    chars: Chars<'a>,
    cancel: CancelHandle,
}

impl<'a> Typewriter<'a> {
    /// Creates a typewriter over `text` sharing `cancel` with its reveal.
    #[must_use]
    pub fn new(text: &'a str, cancel: CancelHandle) -> Self {
        Self {
            chars: text.chars(),
            cancel,
        }
    }
}

impl Iterator for Typewriter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.chars.next()
    }
}

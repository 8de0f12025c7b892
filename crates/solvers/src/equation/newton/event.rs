use super::IterationRecord;

/// Event emitted by the Newton-Raphson solver for each recorded iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record that was just appended to the trail.
    pub record: &'a IterationRecord,
}

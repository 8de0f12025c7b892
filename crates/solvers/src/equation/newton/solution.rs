use newton_core::{DomainError, Term};

use super::IterationRecord;

/// Indicates how a Newton-Raphson run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Consecutive estimates agreed within the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIterationsReached,

    /// The derivative evaluated to exactly zero.
    ZeroDerivative,

    /// The function or its derivative could not be evaluated.
    DomainError,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// How a run terminated, with the data specific to each outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Termination {
    /// The last step was smaller than the tolerance.
    Converged {
        /// The `x_new` of the final record.
        root: f64,
    },

    /// Every allowed iteration ran without converging.
    MaxIterationsReached {
        /// The last accepted estimate.
        root: f64,
    },

    /// `f'(x)` was exactly zero, so no step could be taken.
    ZeroDerivative {
        /// Estimate where the derivative vanished.
        x: f64,
        /// Function value at `x`.
        fx: f64,
    },

    /// Evaluating `f` or `f'` failed.
    DomainError {
        /// Estimate where evaluation failed.
        x: f64,
        /// Which term failed.
        term: Term,
        /// The underlying error.
        error: DomainError,
    },

    /// An observer stopped the run.
    StoppedByObserver {
        /// The `x_new` of the last observed record.
        estimate: f64,
    },
}

impl Termination {
    /// Returns the status tag for this termination.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Converged { .. } => Status::Converged,
            Self::MaxIterationsReached { .. } => Status::MaxIterationsReached,
            Self::ZeroDerivative { .. } => Status::ZeroDerivative,
            Self::DomainError { .. } => Status::DomainError,
            Self::StoppedByObserver { .. } => Status::StoppedByObserver,
        }
    }

    /// Returns the root estimate, if the run produced one.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            Self::Converged { root } | Self::MaxIterationsReached { root } => Some(*root),
            Self::StoppedByObserver { estimate } => Some(*estimate),
            Self::ZeroDerivative { .. } | Self::DomainError { .. } => None,
        }
    }
}

/// The result of a Newton-Raphson solve.
///
/// A run owns its trail; the solver keeps nothing once it returns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverRun {
    records: Vec<IterationRecord>,
    termination: Termination,
}

impl SolverRun {
    pub(super) fn new(records: Vec<IterationRecord>, termination: Termination) -> Self {
        Self {
            records,
            termination,
        }
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns how the run terminated.
    #[must_use]
    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// Returns the status tag of the termination.
    #[must_use]
    pub fn status(&self) -> Status {
        self.termination.status()
    }

    /// Returns the final root estimate, if any.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.termination.root()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.records.len()
    }
}

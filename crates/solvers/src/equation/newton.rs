//! Newton-Raphson iteration for single-variable root finding.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x`, each pass evaluates `f(x)` and
//! `f'(x)` and steps to
//!
//! ```text
//! x_new = x - f(x) / f'(x)
//! ```
//!
//! The run converges once two consecutive estimates differ by less than the
//! configured tolerance. This is a step-size criterion; it does not check
//! that `f(root)` is small.
//!
//! # Outcomes
//!
//! Every run returns a [`SolverRun`]. Failures inside the loop are modeled as
//! a [`Termination`] rather than an error, so the records computed before the
//! failure are always available:
//!
//! - [`Termination::Converged`]: step size fell below the tolerance
//! - [`Termination::MaxIterationsReached`]: gave up with a best-effort root
//! - [`Termination::ZeroDerivative`]: `f'(x)` was exactly zero
//! - [`Termination::DomainError`]: `f` or `f'` was undefined or non-finite
//! - [`Termination::StoppedByObserver`]: an observer returned [`Action::StopEarly`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each record is appended, before the
//! convergence test. Failed evaluations emit no event; they end the run.
//!
//! # Example
//!
//! ```
//! use newton_core::FnPair;
//! use newton_solvers::equation::newton::{self, Config, Status};
//!
//! let cubic = FnPair::new(|x: f64| x.powi(3) - x - 2.0, |x: f64| 3.0 * x * x - 1.0);
//! let config = Config::new(20, 1e-6).unwrap();
//!
//! let run = newton::solve_unobserved(&cubic, 1.5, &config);
//!
//! assert_eq!(run.status(), Status::Converged);
//! assert!((run.root().unwrap() - 1.521_379_707).abs() < 1e-8);
//! ```

mod action;
mod config;
mod event;
mod record;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_INITIAL_GUESS};
pub use event::Event;
pub use record::IterationRecord;
pub use solution::{SolverRun, Status, Termination};

use newton_core::{Differentiable, DomainError, Observer, Term};

/// Finds a root of `function` using Newton-Raphson iteration.
///
/// The observer receives an [`Event`] for each recorded iteration and may
/// return [`Action::StopEarly`] to end the run.
/// See the [module docs](self) for the possible outcomes.
pub fn solve<F, Obs>(function: &F, x0: f64, config: &Config, mut observer: Obs) -> SolverRun
where
    F: Differentiable + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut records = Vec::new();
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let fx = match evaluate(x, Term::Function, |x| function.value(x)) {
            Ok(fx) => fx,
            Err(termination) => return SolverRun::new(records, termination),
        };
        let dfx = match evaluate(x, Term::Derivative, |x| function.derivative(x)) {
            Ok(dfx) => dfx,
            Err(termination) => return SolverRun::new(records, termination),
        };

        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return SolverRun::new(records, Termination::ZeroDerivative { x, fx });
        }

        let record = IterationRecord::new(iter, x, fx, dfx);
        records.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event { record: &record }) {
            let estimate = record.x_new;
            return SolverRun::new(records, Termination::StoppedByObserver { estimate });
        }

        if record.step < config.tolerance() {
            return SolverRun::new(records, Termination::Converged { root: record.x_new });
        }

        x = record.x_new;
    }

    SolverRun::new(records, Termination::MaxIterationsReached { root: x })
}

/// Finds a root of `function` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<F>(function: &F, x0: f64, config: &Config) -> SolverRun
where
    F: Differentiable + ?Sized,
{
    solve(function, x0, config, ())
}

/// Evaluates one term at `x`, mapping failures to a domain-error termination.
fn evaluate(
    x: f64,
    term: Term,
    eval: impl FnOnce(f64) -> Result<f64, DomainError>,
) -> Result<f64, Termination> {
    eval(x)
        .and_then(|value| DomainError::check_finite(x, value))
        .map_err(|error| Termination::DomainError { x, term, error })
}

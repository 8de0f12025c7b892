//! Text rendering of records and outcomes.

use newton_core::Term;
use newton_solvers::equation::newton::{IterationRecord, SolverRun, Termination};

/// Separator printed after each record.
pub const SEPARATOR: &str = "-----------------------------------";

/// Renders one record as a block of text.
///
/// Values use six decimals. The block starts with a blank line and ends with
/// a separator line, so consecutive blocks can be concatenated directly.
#[must_use]
pub fn render_record(record: &IterationRecord) -> String {
    format!(
        "\nIteration {}\nx = {:.6}\nf(x) = {:.6}\nf'(x) = {:.6}\nx_new = {:.6}\n|Δx| = {:.6}\n{SEPARATOR}\n",
        record.iter, record.x, record.fx, record.dfx, record.x_new, record.step,
    )
}

/// Renders every record of a run in order.
#[must_use]
pub fn render_trail(run: &SolverRun) -> String {
    run.records()
        .iter()
        .fold(String::new(), |mut out, record| {
            out.push_str(&render_record(record));
            out
        })
}

/// Formats a root estimate with eight decimals.
#[must_use]
pub fn format_root(root: f64) -> String {
    format!("{root:.8}")
}

/// Returns the status line for a finished run.
#[must_use]
pub fn outcome_message(run: &SolverRun) -> String {
    match run.termination() {
        Termination::Converged { .. } => "Converged Successfully".to_owned(),
        Termination::MaxIterationsReached { .. } => {
            format!("Maximum iterations reached ({})", run.iters())
        }
        Termination::ZeroDerivative { x, .. } => {
            format!("Derivative became zero at x = {x:.6}")
        }
        Termination::DomainError { term, error, .. } => {
            let term = match term {
                Term::Function => "f(x)",
                Term::Derivative => "f'(x)",
            };
            format!("Domain error in {term}: {error}")
        }
        Termination::StoppedByObserver { .. } => "Process Stopped".to_owned(),
    }
}

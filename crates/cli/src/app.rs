use std::{io::Write, thread, time::Duration};

use serde::Serialize;

use newton_catalog::Catalog;
use newton_solvers::equation::newton::{self, SolverRun};
use newton_trail::{
    CancelHandle, LogObserver, Pacing, Reveal, Typewriter, processing_label,
    render::{format_root, outcome_message, render_record},
};

use crate::{CliError, OutputFormat, Settings};

/// Width of the text progress bar.
const BAR_WIDTH: usize = 30;

/// Everything the JSON output reports about one solve.
#[derive(Debug, Serialize)]
struct Report<'a> {
    function: &'a str,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
    run: &'a SolverRun,
}

/// Writes the catalog labels and keys, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list_functions(catalog: &Catalog, out: &mut impl Write) -> Result<(), CliError> {
    for spec in catalog {
        writeln!(out, "{:<15} {}", spec.key(), spec.label())?;
    }
    Ok(())
}

/// Solves with `settings` and writes the result to `out`.
///
/// The solve always runs to completion first. `cancel` only cuts the paced
/// reveal short.
///
/// # Errors
///
/// Returns an error if the settings name an unknown function or an invalid
/// config, or if writing fails.
pub fn run(
    settings: &Settings,
    catalog: &Catalog,
    out: &mut impl Write,
    cancel: &CancelHandle,
) -> Result<SolverRun, CliError> {
    let spec = settings.function(catalog)?;
    let config = settings.config()?;

    log::info!(
        "solving {} from x0 = {} (tolerance {}, max {} iterations)",
        spec.label(),
        settings.initial_guess,
        config.tolerance(),
        config.max_iters(),
    );
    let run = newton::solve(
        spec,
        settings.initial_guess,
        &config,
        LogObserver::new(spec.label()),
    );
    log::info!("{:?} after {} iterations", run.status(), run.iters());

    match settings.output {
        OutputFormat::Json => {
            let report = Report {
                function: spec.label(),
                initial_guess: settings.initial_guess,
                tolerance: config.tolerance(),
                max_iterations: config.max_iters(),
                run: &run,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Function: {}", spec.label())?;
            present(&run, &settings.pacing.into(), out, cancel)?;
        }
    }

    Ok(run)
}

/// Reveals a finished run on `out` at the given pace.
fn present(
    run: &SolverRun,
    pacing: &Pacing,
    out: &mut impl Write,
    cancel: &CancelHandle,
) -> Result<(), CliError> {
    animate_processing(pacing, out, cancel)?;

    let mut reveal = Reveal::new(run, cancel.clone());
    for (progress, record) in reveal.by_ref() {
        writeln!(out, "{} {}", progress.label(), progress.bar(BAR_WIDTH))?;

        let text = render_record(record);
        for ch in Typewriter::new(&text, cancel.clone()) {
            write!(out, "{ch}")?;
            pause(out, pacing.char_delay)?;
        }
        pause(out, pacing.record_delay)?;
    }

    if reveal.was_cancelled() {
        writeln!(out, "\nProcess Stopped")?;
        return Ok(());
    }

    writeln!(out, "{}", outcome_message(run))?;
    if let Some(root) = run.root() {
        writeln!(out, "Final Root: {}", format_root(root))?;
    }
    Ok(())
}

/// Shows one cycle of the "Processing" dots before the trail starts.
fn animate_processing(
    pacing: &Pacing,
    out: &mut impl Write,
    cancel: &CancelHandle,
) -> Result<(), CliError> {
    if pacing.dots_period.is_zero() || pacing.is_instant() {
        return Ok(());
    }
    for tick in 0..4 {
        if cancel.is_cancelled() {
            break;
        }
        write!(out, "\r{:<13}", processing_label(tick))?;
        pause(out, pacing.dots_period)?;
    }
    write!(out, "\r{:<13}\r", "")?;
    Ok(())
}

/// Flushes `out`, then sleeps for `delay` if it is non-zero.
fn pause(out: &mut impl Write, delay: Duration) -> Result<(), CliError> {
    if !delay.is_zero() {
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

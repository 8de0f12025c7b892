use std::{
    env,
    error::Error,
    io::{self, BufRead, IsTerminal},
    path::PathBuf,
    process::ExitCode,
    thread,
};

use log::LevelFilter;

use newton_catalog::Catalog;
use newton_cli::{CliError, OutputFormat, Settings};
use newton_trail::{CancelHandle, Pacing};

const USAGE: &str = "\
Usage: newton [SETTINGS.toml]
       newton --list

Solves f(x) = 0 with Newton-Raphson iteration and reveals each step.
Press Enter while the trail is printing to stop the reveal.
Set RUST_LOG=debug to log every iteration.";

enum Command {
    Solve(Option<PathBuf>),
    List,
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let command = match args.next().as_deref() {
        None => Command::Solve(None),
        Some("--list" | "-l") => Command::List,
        Some("--help" | "-h") => Command::Help,
        Some(flag) if flag.starts_with('-') => return Err(format!("unknown option {flag}")),
        Some(path) => Command::Solve(Some(PathBuf::from(path))),
    };

    match args.next() {
        None => Ok(command),
        Some(extra) => Err(format!("unexpected argument {extra}")),
    }
}

/// Blocks until a line is read from `input`, then cancels `cancel`.
///
/// End of input or a read error leaves `cancel` untouched.
fn cancel_on_enter(mut input: impl BufRead, cancel: &CancelHandle) {
    let mut line = String::new();
    if let Ok(1..) = input.read_line(&mut line) {
        cancel.cancel();
    }
}

/// Cancels `cancel` when the user presses Enter on an interactive stdin.
///
/// The thread is detached; it ends with the process.
fn watch_stdin(cancel: CancelHandle) {
    if !io::stdin().is_terminal() {
        return;
    }
    thread::spawn(move || cancel_on_enter(io::stdin().lock(), &cancel));
}

fn solve(path: Option<PathBuf>) -> Result<(), CliError> {
    let settings = match path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    log::debug!("settings: {settings:?}");

    let cancel = CancelHandle::new();
    if settings.output == OutputFormat::Text && !Pacing::from(settings.pacing).is_instant() {
        watch_stdin(cancel.clone());
    }

    let catalog = Catalog::standard();
    let mut stdout = io::stdout().lock();
    newton_cli::run(&settings, &catalog, &mut stdout, &cancel)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::List => newton_cli::list_functions(&Catalog::standard(), &mut io::stdout().lock()),
        Command::Solve(path) => solve(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            eprintln!("error: {err}");
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

//! Terminal front end for the Newton-Raphson root finder.
//!
//! Loads [`Settings`] from an optional TOML file, solves with the selected
//! catalog function, then reveals the trail on a writer at the configured
//! pace (or prints the whole run as JSON).

mod app;
mod error;
mod settings;

pub use app::{list_functions, run};
pub use error::CliError;
pub use settings::{OutputFormat, PacingSettings, Settings};

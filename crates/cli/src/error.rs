use std::{io, path::PathBuf};

use thiserror::Error;

use newton_solvers::equation::newton::ConfigError;

/// Errors that can occur while running the front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read settings from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("unknown function {name:?}, expected one of: {}", available.join(", "))]
    UnknownFunction {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("invalid solver config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error("failed to encode JSON")]
    Json(#[from] serde_json::Error),
}

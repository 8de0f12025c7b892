use std::{fs, path::Path};

use serde::Deserialize;

use newton_catalog::{Catalog, FunctionSpec};
use newton_solvers::equation::newton::{Config, DEFAULT_INITIAL_GUESS};
use newton_trail::Pacing;

use crate::CliError;

/// How a finished run is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Paced, human-readable trail.
    #[default]
    Text,

    /// The whole run as one JSON document.
    Json,
}

/// Reveal delays in milliseconds. Zero disables a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingSettings {
    pub record_delay_ms: u64,
    pub char_delay_ms: u64,
    pub dots_period_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            record_delay_ms: 500,
            char_delay_ms: 5,
            dots_period_ms: 400,
        }
    }
}

impl From<PacingSettings> for Pacing {
    fn from(settings: PacingSettings) -> Self {
        Pacing::from_millis(
            settings.record_delay_ms,
            settings.char_delay_ms,
            settings.dots_period_ms,
        )
    }
}

/// Front end settings, read from TOML. Every field is optional.
///
/// ```toml
/// function = "logarithmic"
/// initial_guess = 1.0
/// tolerance = 1e-6
/// max_iterations = 20
/// output = "text"
///
/// [pacing]
/// record_delay_ms = 500
/// char_delay_ms = 5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog label or key. Defaults to the first catalog entry.
    pub function: Option<String>,
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub output: OutputFormat,
    pub pacing: PacingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            function: None,
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: config.tolerance(),
            max_iterations: config.max_iters(),
            output: OutputFormat::default(),
            pacing: PacingSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings TOML.
    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Resolves the selected function in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry matches the configured label or key.
    pub fn function<'c>(&self, catalog: &'c Catalog) -> Result<&'c FunctionSpec, CliError> {
        match self.function.as_deref() {
            None => Ok(catalog.default_entry()),
            Some(name) => catalog
                .find(name)
                .ok_or_else(|| CliError::UnknownFunction {
                    name: name.to_owned(),
                    available: catalog.labels().collect(),
                }),
        }
    }

    /// Builds the validated solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or iteration limit is invalid.
    pub fn config(&self) -> Result<Config, CliError> {
        Ok(Config::new(self.max_iterations, self.tolerance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use newton_solvers::equation::newton::ConfigError;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::from_toml("").expect("empty settings");
        assert_eq!(settings, Settings::default());

        let config = settings.config().expect("default config");
        assert_eq!(config.max_iters(), 20);
        assert_relative_eq!(config.tolerance(), 1e-4);
        assert_relative_eq!(settings.initial_guess, 1.0);
    }

    #[test]
    fn parses_all_fields() {
        let settings = Settings::from_toml(
            r#"
            function = "Logarithmic: ln(x) + x² - 3"
            initial_guess = 2.5
            tolerance = 1e-8
            max_iterations = 50
            output = "json"

            [pacing]
            record_delay_ms = 0
            char_delay_ms = 0
            "#,
        )
        .expect("valid settings");

        let catalog = Catalog::standard();
        assert_eq!(settings.function(&catalog).expect("known").key(), "logarithmic");
        assert_relative_eq!(settings.initial_guess, 2.5);
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.pacing.dots_period_ms, 400);
        assert!(Pacing::from(settings.pacing).is_instant());
    }

    #[test]
    fn resolves_default_and_key_lookups() {
        let catalog = Catalog::standard();

        let settings = Settings::default();
        assert_eq!(settings.function(&catalog).expect("default").key(), "polynomial");

        let settings = Settings {
            function: Some("exponential".to_owned()),
            ..Settings::default()
        };
        assert_eq!(settings.function(&catalog).expect("known").key(), "exponential");
    }

    #[test]
    fn rejects_unknown_function() {
        let catalog = Catalog::standard();
        let settings = Settings {
            function: Some("sinh".to_owned()),
            ..Settings::default()
        };

        match settings.function(&catalog) {
            Err(CliError::UnknownFunction { name, available }) => {
                assert_eq!(name, "sinh");
                assert_eq!(available.len(), 4);
                assert!(available.contains(&"Trigonometric: cos(x) - x"));
            }
            other => panic!("expected an unknown function error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            Settings::from_toml("tolerence = 1e-6"),
            Err(CliError::Settings(_))
        ));
    }

    #[test]
    fn invalid_config_is_reported() {
        let settings = Settings::from_toml("max_iterations = 0").expect("parses");
        assert!(matches!(
            settings.config(),
            Err(CliError::Config(ConfigError::MaxIters))
        ));
    }
}

use thiserror::Error;

/// Initial guess used when a caller has no better starting point.
pub const DEFAULT_INITIAL_GUESS: f64 = 1.0;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 20,
            tolerance: 1e-4,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration limit and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a
    /// finite positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of loop passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step-size tolerance for convergence.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

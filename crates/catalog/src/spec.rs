use std::fmt;

use newton_core::{Differentiable, DomainError};

/// A fallible unary real function.
pub type ScalarFn = fn(f64) -> Result<f64, DomainError>;

/// A catalog entry: a labeled function and its derivative.
#[derive(Clone, Copy)]
pub struct FunctionSpec {
    key: &'static str,
    label: &'static str,
    f: ScalarFn,
    df: ScalarFn,
}

impl FunctionSpec {
    /// Creates an entry from a key, a display label, a function, and its derivative.
    ///
    /// The caller is responsible for `df` being the derivative of `f`.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, f: ScalarFn, df: ScalarFn) -> Self {
        Self { key, label, f, df }
    }

    /// Returns the short key used in configuration files.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Differentiable for FunctionSpec {
    fn value(&self, x: f64) -> Result<f64, DomainError> {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> Result<f64, DomainError> {
        (self.df)(x)
    }
}

impl fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

use thiserror::Error;

/// Errors raised when a function is evaluated outside its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DomainError {
    /// The function is mathematically undefined at `x`.
    #[error("undefined at x = {x}: {reason}")]
    Undefined { x: f64, reason: &'static str },

    /// Evaluation produced a NaN or infinite value.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

impl DomainError {
    /// Creates an [`DomainError::Undefined`] error.
    #[must_use]
    pub fn undefined(x: f64, reason: &'static str) -> Self {
        Self::Undefined { x, reason }
    }

    /// Returns `value` if it is finite, or a [`DomainError::NonFinite`] error.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN or infinite.
    pub fn check_finite(x: f64, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { x, value })
        }
    }

    /// Returns the argument at which evaluation failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Undefined { x, .. } | Self::NonFinite { x, .. } => *x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn check_finite_passes_finite_values() {
        let value = DomainError::check_finite(2.0, -3.5).expect("finite");
        assert_relative_eq!(value, -3.5);
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            DomainError::check_finite(1.0, f64::NAN),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            DomainError::check_finite(1.0, f64::NEG_INFINITY),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn reports_failing_argument() {
        assert_relative_eq!(DomainError::undefined(-1.0, "ln requires x > 0").x(), -1.0);
        assert_relative_eq!(
            DomainError::NonFinite {
                x: 800.0,
                value: f64::INFINITY
            }
            .x(),
            800.0
        );
    }

    #[test]
    fn display_names_the_reason() {
        let err = DomainError::undefined(-1.0, "ln requires x > 0");
        assert_eq!(err.to_string(), "undefined at x = -1: ln requires x > 0");
    }
}

use crate::DomainError;

/// A unary real function paired with its analytic derivative.
///
/// Both methods are fallible so that functions with a restricted domain
/// (logarithms, reciprocals) can report evaluation outside it instead of
/// returning NaN. Implementors are expected to supply the true derivative;
/// solvers do not check it.
pub trait Differentiable {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the function is undefined at `x`.
    fn value(&self, x: f64) -> Result<f64, DomainError>;

    /// Evaluates the derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the derivative is undefined at `x`.
    fn derivative(&self, x: f64) -> Result<f64, DomainError>;
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: f64) -> Result<f64, DomainError> {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> Result<f64, DomainError> {
        (**self).derivative(x)
    }
}

/// Which half of a [`Differentiable`] was being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Term {
    /// The function itself.
    Function,
    /// Its derivative.
    Derivative,
}

/// A [`Differentiable`] built from two infallible closures.
///
/// Non-finite results are reported as [`DomainError::NonFinite`].
#[derive(Debug, Clone, Copy)]
pub struct FnPair<F, D> {
    f: F,
    df: D,
}

impl<F, D> FnPair<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Pairs a function with its derivative.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> Differentiable for FnPair<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> Result<f64, DomainError> {
        DomainError::check_finite(x, (self.f)(x))
    }

    fn derivative(&self, x: f64) -> Result<f64, DomainError> {
        DomainError::check_finite(x, (self.df)(x))
    }
}

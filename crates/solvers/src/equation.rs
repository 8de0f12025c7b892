//! Solvers for equation problems: finding roots of scalar functions.
//!
//! A [`Differentiable`] supplies `f(x)` and `f'(x)`. Solvers in this module
//! drive `f(x)` toward zero and return the full trail of iterations along
//! with a tagged outcome.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson iteration from a single initial guess
//!
//! [`Differentiable`]: newton_core::Differentiable

pub mod newton;

//! Numerical solvers for Newton-Raphson root finding.
//!
//! # Modules
//!
//! - [`equation`]: solvers that drive a scalar function toward zero

pub mod equation;

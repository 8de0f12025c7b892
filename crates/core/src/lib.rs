//! Core traits and types for Newton-Raphson root finding.
//!
//! This crate defines the shared abstractions that the solver, the function
//! catalog, and presentation layers build on:
//!
//! - [`Differentiable`]: a unary real function paired with its derivative
//! - [`DomainError`]: evaluation outside a function's mathematical domain
//! - [`FnPair`]: adapts a pair of plain closures into a [`Differentiable`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod domain;
mod function;
mod observer;

pub use domain::DomainError;
pub use function::{Differentiable, FnPair, Term};
pub use observer::Observer;

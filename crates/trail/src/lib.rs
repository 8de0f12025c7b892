//! Presentation helpers for Newton-Raphson solver trails.
//!
//! A solve runs to completion before anything is shown. This crate turns the
//! finished [`SolverRun`] into what a front end displays, and paces that
//! display without touching the run:
//!
//! - [`render`]: text for each record, the final root, and outcome messages
//! - [`Progress`]: the `iteration / total` indicator
//! - [`Reveal`] and [`Typewriter`]: cancellable, cursor-owning reveals
//! - [`Pacing`]: delays between revealed records and characters
//! - [`LogObserver`]: logs each solver event through the `log` facade
//!
//! [`SolverRun`]: newton_solvers::equation::newton::SolverRun

mod observer;
mod pacing;
mod progress;
pub mod render;
mod reveal;

pub use observer::LogObserver;
pub use pacing::Pacing;
pub use progress::{Progress, processing_label};
pub use reveal::{CancelHandle, Reveal, Typewriter};

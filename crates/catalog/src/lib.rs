//! A fixed catalog of differentiable functions.
//!
//! Each [`FunctionSpec`] pairs a display label and a short configuration key
//! with a function and its analytic derivative. The [`Catalog`] is built once
//! and looked up by label or key.
//!
//! The standard entries are:
//!
//! | key             | function           | derivative    |
//! |-----------------|--------------------|---------------|
//! | `polynomial`    | `x³ - x - 2`       | `3x² - 1`     |
//! | `trigonometric` | `cos(x) - x`       | `-sin(x) - 1` |
//! | `exponential`   | `eˣ - 3x`          | `eˣ - 3`      |
//! | `logarithmic`   | `ln(x) + x² - 3`   | `1/x + 2x`    |

mod catalog;
mod spec;
pub mod standard;

pub use catalog::{Catalog, CatalogError};
pub use spec::{FunctionSpec, ScalarFn};

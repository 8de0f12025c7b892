/// One pass of the Newton-Raphson loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationRecord {
    /// Iteration index (1-based).
    pub iter: usize,

    /// Estimate at the start of the pass.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative value at `x`.
    pub dfx: f64,

    /// Next estimate, `x - fx / dfx`.
    pub x_new: f64,

    /// Step size, `|x_new - x|`.
    pub step: f64,
}

impl IterationRecord {
    /// Takes a Newton step from `x` and records it.
    pub(super) fn new(iter: usize, x: f64, fx: f64, dfx: f64) -> Self {
        let x_new = x - fx / dfx;
        Self {
            iter,
            x,
            fx,
            dfx,
            x_new,
            step: (x_new - x).abs(),
        }
    }
}

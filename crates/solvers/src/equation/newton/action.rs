/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the trail recorded so far.
    StopEarly,
}

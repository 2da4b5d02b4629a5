//! The solver seam.
//!
//! Both strategies in [`crate::solvers`] implement [`RodSolver`], so callers
//! can run either one (or both, see [`crate::verify::crosscheck`]) through the
//! same interface.
//!
//! Contract shared by every implementation:
//! - `max_profit` is the global optimum over all ordered partitions of the
//!   rod into positive integer pieces.
//! - `cuts` is one optimal plan chosen by the implementation's own,
//!   deterministic tie-break policy. Two solvers may return different plans
//!   for the same input when several partitions are optimal.
//! - `number_of_cuts` is one fewer than the number of pieces (zero for an
//!   uncut or empty rod).
//! - Each call is independent: no state survives between calls.

use crate::error::RodError;
use crate::types::{RodInstance, SolveResult};

/// Strategy for computing an optimal cut plan.
pub trait RodSolver {
    /// Short identifier used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Solve an already validated instance.
    ///
    /// Only fails on arithmetic overflow of the accumulated profit.
    fn solve_instance(&self, instance: &RodInstance) -> Result<SolveResult, RodError>;

    /// Validate raw input and solve it.
    ///
    /// Fails with [`RodError::InvalidInput`] when `length < 0`, when a price
    /// is negative, or when `prices` has fewer than `length` entries.
    fn solve(&self, length: i64, prices: &[i64]) -> Result<SolveResult, RodError> {
        let instance = RodInstance::new(length, prices)?;
        self.solve_instance(&instance)
    }
}

impl<S: RodSolver + ?Sized> RodSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve_instance(&self, instance: &RodInstance) -> Result<SolveResult, RodError> {
        (**self).solve_instance(instance)
    }
}

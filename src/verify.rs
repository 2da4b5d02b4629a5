//! Running both strategies side by side.
//!
//! Profit must agree exactly; plans may legitimately differ under ties, since
//! each strategy applies its own tie-break.

use crate::error::RodError;
use crate::solvers::{MemoSolver, TableSolver};
use crate::traits::RodSolver;
use crate::types::{RodInstance, SolveResult};

/// Results of both strategies on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub memo: SolveResult,
    pub table: SolveResult,
}

impl Comparison {
    pub fn max_profit(&self) -> u64 {
        self.memo.max_profit
    }

    /// Whether both strategies picked the same plan.
    pub fn plans_agree(&self) -> bool {
        self.memo.cuts == self.table.cuts
    }
}

/// Solve `instance` with both strategies and check that their profits match.
///
/// A profit mismatch is a defect in one of the solvers and is reported as
/// [`RodError::ProfitMismatch`].
pub fn crosscheck(instance: &RodInstance) -> Result<Comparison, RodError> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("crosscheck", length = instance.length());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let memo = MemoSolver.solve_instance(instance)?;
    let table = TableSolver.solve_instance(instance)?;
    if memo.max_profit != table.max_profit {
        #[cfg(feature = "tracing")]
        tracing::error!(
            memo = memo.max_profit,
            table = table.max_profit,
            "strategies disagree on profit"
        );
        return Err(RodError::ProfitMismatch {
            memo: memo.max_profit,
            table: table.max_profit,
        });
    }

    let comparison = Comparison { memo, table };
    #[cfg(feature = "tracing")]
    {
        if !comparison.plans_agree() {
            tracing::debug!(
                memo = ?comparison.memo.cuts,
                table = ?comparison.table.cuts,
                "plans differ under a tie"
            );
        }
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_produces_different_plans_with_equal_profit() {
        let inst = RodInstance::new(5, &[2, 5, 7, 8, 10]).unwrap();
        let cmp = crosscheck(&inst).unwrap();
        assert_eq!(cmp.max_profit(), 12);
        assert!(!cmp.plans_agree());
    }

    #[test]
    fn unique_optimum_gives_same_plan() {
        let inst = RodInstance::new(3, &[1, 3, 8]).unwrap();
        let cmp = crosscheck(&inst).unwrap();
        assert!(cmp.plans_agree());
        assert_eq!(cmp.memo.cuts.into_inner(), vec![3]);
    }
}

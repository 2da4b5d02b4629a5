//! Error types shared by both solvers.
//!
//! A solve either returns a complete, internally consistent
//! [`SolveResult`](crate::types::SolveResult) or one of these errors; there is
//! no partial-success mode.

use thiserror::Error;

/// Reasons a `(length, prices)` pair cannot be solved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("rod length must be non-negative, got {0}")]
    NegativeLength(i64),

    #[error("price table has {available} entries but rod length is {length}")]
    PriceTableTooShort { length: usize, available: usize },

    #[error("price for a piece of length {length} is negative ({price})")]
    NegativePrice { length: usize, price: i64 },
}

/// Top-level error returned by every solver entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RodError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Accumulated profit no longer fits in a `u64`.
    #[error("profit overflowed while solving a rod of length {length}")]
    Overflow { length: usize },

    #[error("strategies disagree on the optimal profit: memo={memo}, table={table}")]
    ProfitMismatch { memo: u64, table: u64 },
}

impl RodError {
    /// True for errors caused by the caller's input rather than the solve.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RodError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_converts_and_displays() {
        let err: RodError = InvalidInput::PriceTableTooShort {
            length: 4,
            available: 2,
        }
        .into();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid input: price table has 2 entries but rod length is 4"
        );
    }

    #[test]
    fn mismatch_is_not_an_input_error() {
        let err = RodError::ProfitMismatch { memo: 3, table: 4 };
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("memo=3, table=4"));
    }
}

//! The two interchangeable rod-cutting strategies.
//!
//! - [`memo`]  : top-down recursion over a per-call memo, first-found tie-break.
//! - [`table`] : bottom-up tabulation, tie-break on pieces then first cut.
//!
//! Both agree on `max_profit`; their plans may differ when several
//! partitions are optimal.

use std::fmt;
use std::str::FromStr;

use crate::traits::RodSolver;

pub mod memo;
pub mod table;

pub use memo::MemoSolver;
pub use table::TableSolver;

/// Strategy selector, e.g. for command-line parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Memo,
    Table,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Memo, SolverKind::Table];

    pub fn solver(self) -> Box<dyn RodSolver> {
        match self {
            SolverKind::Memo => Box::new(MemoSolver),
            SolverKind::Table => Box::new(TableSolver),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::Memo => "memo",
            SolverKind::Table => "table",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "memo" => Ok(SolverKind::Memo),
            "table" => Ok(SolverKind::Table),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolverKind;

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.as_str().parse::<SolverKind>(), Ok(kind));
            assert_eq!(kind.solver().name(), kind.as_str());
        }
        assert!("greedy".parse::<SolverKind>().is_err());
    }
}

//! Optimal rod partitioning (RODCUT-DP)
//!
//! Given a rod of integer length `L` and a price for every piece length
//! `1..=L`, find the maximum revenue obtainable by cutting the rod into
//! integer pieces, together with one concrete optimal cut sequence.
//!
//! ## Strategies
//! Two interchangeable solvers implement [`RodSolver`]:
//! - [`MemoSolver`]: top-down recursion with a per-call memo. On a profit tie
//!   the first (smallest) first cut found is kept.
//! - [`TableSolver`]: bottom-up tabulation over every sub-length. On a profit
//!   tie it prefers more pieces, then a larger first cut.
//!
//! Both return the same `max_profit`; the plans may differ when several
//! partitions are optimal. [`verify::crosscheck`] runs both and rejects any
//! profit disagreement.
//!
//! ## Quick start
//! ```
//! use rodcut_dp::{MemoSolver, RodSolver, TableSolver};
//!
//! let prices = [2, 5, 7, 8, 10];
//! let memo = MemoSolver.solve(5, &prices).unwrap();
//! let table = TableSolver.solve(5, &prices).unwrap();
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(table.max_profit, 12);
//! assert_eq!(&memo.cuts[..], &[1, 2, 2]);
//! assert_eq!(&table.cuts[..], &[2, 2, 1]);
//! assert_eq!(memo.number_of_cuts, 2);
//! ```
//!
//! ## Features
//! - `tracing`: spans around each solve and per-subproblem trace events.
//! - `serde`: `Serialize`/`Deserialize` for [`SolveResult`] and [`CutPlan`].
//! - `cli` (default): the `rodcut` and `scale_probe` binaries.

pub mod error;
pub mod solvers;
pub mod traits;
pub mod types;
pub mod utils;
pub mod verify;

pub use crate::error::{InvalidInput, RodError};
pub use crate::solvers::{MemoSolver, SolverKind, TableSolver};
pub use crate::traits::RodSolver;
pub use crate::types::{CutPlan, PriceTable, RodInstance, SolveResult};

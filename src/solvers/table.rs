//! Bottom-up rod cutting over a dense table of sub-lengths.
//!
//! Entry `j` of the [`DpTable`] records, for a rod of length `j`, the best
//! profit, how many pieces the chosen plan has, and its first cut. Entry 0 is
//! `(0, 0, 0)`; entry `j` only reads entries `0..j`, so the table is filled
//! strictly left to right.
//!
//! When several first cuts `i` reach the same profit for `j`, the winner is
//! chosen by a three-level preference:
//! 1. higher profit,
//! 2. then more pieces,
//! 3. then a larger first cut.
//!
//! Since the rest of an optimal plan must itself be optimal, the reconstructed
//! plan has the largest piece count among all optimal partitions.

use crate::error::RodError;
use crate::traits::RodSolver;
use crate::types::{CutPlan, RodInstance, SolveResult};

/// Best known result for one sub-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DpEntry {
    pub profit: u64,
    pub pieces: usize,
    pub first_cut: usize,
}

impl DpEntry {
    /// Three-level preference: profit, then pieces, then first cut, each
    /// strictly. A candidate equal on all three never wins.
    #[inline]
    fn beats(&self, current: &DpEntry) -> bool {
        (self.profit, self.pieces, self.first_cut)
            > (current.profit, current.pieces, current.first_cut)
    }
}

/// Dense table for sub-lengths `0..=L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    entries: Vec<DpEntry>,
}

impl DpTable {
    pub fn entry(&self, length: usize) -> Option<&DpEntry> {
        self.entries.get(length)
    }

    /// Largest sub-length covered by the table.
    pub fn max_length(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[DpEntry] {
        &self.entries
    }

    /// Walk first cuts from `length` down to zero.
    ///
    /// # Panics
    /// Panics if `length` exceeds [`max_length`](Self::max_length).
    pub fn reconstruct(&self, length: usize) -> CutPlan {
        let mut pieces = Vec::with_capacity(self.entries[length].pieces);
        let mut remaining = length;
        while remaining > 0 {
            let cut = self.entries[remaining].first_cut;
            pieces.push(cut);
            remaining -= cut;
        }
        CutPlan::new(pieces)
    }
}

/// Tabulating bottom-up solver with the profit/pieces/first-cut tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSolver;

impl TableSolver {
    pub fn new() -> Self {
        Self
    }

    /// Fill the table for every sub-length of `instance`.
    pub fn build_table(&self, instance: &RodInstance) -> Result<DpTable, RodError> {
        let length = instance.length();
        let mut entries = Vec::with_capacity(length + 1);
        entries.push(DpEntry::default());

        for j in 1..=length {
            let mut best: Option<DpEntry> = None;
            for i in 1..=j {
                let rest = entries[j - i];
                let candidate = DpEntry {
                    profit: instance
                        .price_of(i)
                        .checked_add(rest.profit)
                        .ok_or(RodError::Overflow { length: j })?,
                    pieces: 1 + rest.pieces,
                    first_cut: i,
                };
                if best.map_or(true, |current| candidate.beats(&current)) {
                    best = Some(candidate);
                }
            }
            // j >= 1 always yields at least one candidate.
            let winner = best.unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::trace!(
                length = j,
                profit = winner.profit,
                pieces = winner.pieces,
                first_cut = winner.first_cut,
                "table entry finalized"
            );
            entries.push(winner);
        }

        Ok(DpTable { entries })
    }
}

impl RodSolver for TableSolver {
    fn name(&self) -> &'static str {
        "table"
    }

    fn solve_instance(&self, instance: &RodInstance) -> Result<SolveResult, RodError> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("table_solve", length = instance.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = self.build_table(instance)?;
        let length = instance.length();
        let result = SolveResult::new(table.entries[length].profit, table.reconstruct(length));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_profit = result.max_profit,
            pieces = result.cuts.pieces(),
            "table solve finished"
        );

        Ok(result)
    }
}

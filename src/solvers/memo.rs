//! Top-down rod cutting with a per-call memo table.
//!
//! The recurrence is the textbook one:
//!
//! ```text
//! best(0) = 0
//! best(n) = max_{1 <= i <= n} price(i) + best(n - i)
//! ```
//!
//! evaluated lazily from `best(L)` downward, caching every finished `best(n)`.
//! Candidates are scanned with `i` increasing from 1 and only a strictly
//! better profit replaces the current best, so the first optimal first cut
//! found is kept. Applied recursively, the resulting plan is the
//! lexicographically smallest optimal partition.
//!
//! The descent is driven by an explicit frame stack instead of the call
//! stack. Frames are visited in exactly the order the recursive form would
//! visit them, so the memo fills in the same order and ties resolve the same
//! way, but a long rod cannot overflow the thread's stack.

use crate::error::RodError;
use crate::traits::RodSolver;
use crate::types::{CutPlan, RodInstance, SolveResult};

/// Cached optimum for one remaining length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    pub profit: u64,
    /// First piece of the cached plan; the rest of the plan is the cached
    /// plan for `length - first_cut`.
    pub first_cut: usize,
}

/// Memo keyed by remaining length `1..=L`. Length 0 is the implicit base
/// case and is never stored.
///
/// Entries are only ever inserted, never replaced or removed, during a solve.
#[derive(Debug, Clone)]
pub struct MemoTable {
    entries: Vec<Option<MemoEntry>>,
}

impl MemoTable {
    fn for_length(length: usize) -> Self {
        Self {
            entries: vec![None; length + 1],
        }
    }

    pub fn get(&self, length: usize) -> Option<MemoEntry> {
        self.entries.get(length).copied().flatten()
    }

    fn insert(&mut self, length: usize, entry: MemoEntry) {
        debug_assert!(self.entries[length].is_none(), "memo entry overwritten");
        self.entries[length] = Some(entry);
    }

    /// Number of cached lengths.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached plan for `length`: `[first_cut] ++ plan(length - first_cut)`.
    ///
    /// Returns `None` if any length along the chain has not been solved.
    pub fn plan(&self, length: usize) -> Option<CutPlan> {
        let mut pieces = Vec::new();
        let mut remaining = length;
        while remaining > 0 {
            let entry = self.get(remaining)?;
            pieces.push(entry.first_cut);
            remaining -= entry.first_cut;
        }
        Some(CutPlan::new(pieces))
    }
}

/// Counters collected while filling the memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    /// Subproblems evaluated; each length is evaluated at most once.
    pub computed: usize,
    /// Sub-length lookups answered directly from the memo.
    pub cache_hits: usize,
}

/// One suspended evaluation of `best(length)`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    length: usize,
    next_cut: usize,
    /// Set while a child frame for `length - next_cut` is being evaluated, so
    /// the lookup on return is not counted as a cache hit.
    awaiting: bool,
    best: Option<MemoEntry>,
}

impl Frame {
    fn new(length: usize) -> Self {
        Self {
            length,
            next_cut: 1,
            awaiting: false,
            best: None,
        }
    }
}

/// Memoized top-down solver with first-found tie-breaking.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoSolver;

impl MemoSolver {
    pub fn new() -> Self {
        Self
    }

    /// Fill a fresh memo table for `instance` and return it with the
    /// collected counters.
    pub fn build_memo(&self, instance: &RodInstance) -> Result<(MemoTable, MemoStats), RodError> {
        let target = instance.length();
        let mut memo = MemoTable::for_length(target);
        let mut stats = MemoStats::default();
        if target == 0 {
            return Ok((memo, stats));
        }

        let mut stack = vec![Frame::new(target)];
        while let Some(&frame) = stack.last() {
            if frame.next_cut > frame.length {
                stack.pop();
                if let Some(best) = frame.best {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        length = frame.length,
                        profit = best.profit,
                        first_cut = best.first_cut,
                        "memo subproblem solved"
                    );
                    memo.insert(frame.length, best);
                    stats.computed += 1;
                }
                continue;
            }

            let cut = frame.next_cut;
            let rest = frame.length - cut;
            let rest_profit = if rest == 0 {
                0
            } else {
                match memo.get(rest) {
                    Some(entry) => {
                        if !frame.awaiting {
                            stats.cache_hits += 1;
                        }
                        entry.profit
                    }
                    None => {
                        if let Some(top) = stack.last_mut() {
                            top.awaiting = true;
                        }
                        stack.push(Frame::new(rest));
                        continue;
                    }
                }
            };

            let profit = instance
                .price_of(cut)
                .checked_add(rest_profit)
                .ok_or(RodError::Overflow {
                    length: frame.length,
                })?;

            if let Some(top) = stack.last_mut() {
                // Strictly greater only: an equal profit never displaces an
                // earlier, smaller first cut.
                if top.best.map_or(true, |best| profit > best.profit) {
                    top.best = Some(MemoEntry {
                        profit,
                        first_cut: cut,
                    });
                }
                top.next_cut += 1;
                top.awaiting = false;
            }
        }

        Ok((memo, stats))
    }

    /// Solve and also report how much work the memo saved.
    pub fn solve_with_stats(
        &self,
        instance: &RodInstance,
    ) -> Result<(SolveResult, MemoStats), RodError> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("memo_solve", length = instance.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (memo, stats) = self.build_memo(instance)?;
        let target = instance.length();
        let max_profit = memo.get(target).map_or(0, |entry| entry.profit);
        let cuts = memo.plan(target).unwrap_or_default();
        let result = SolveResult::new(max_profit, cuts);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_profit = result.max_profit,
            pieces = result.cuts.pieces(),
            computed = stats.computed,
            cache_hits = stats.cache_hits,
            "memo solve finished"
        );

        Ok((result, stats))
    }
}

impl RodSolver for MemoSolver {
    fn name(&self) -> &'static str {
        "memo"
    }

    fn solve_instance(&self, instance: &RodInstance) -> Result<SolveResult, RodError> {
        self.solve_with_stats(instance).map(|(result, _)| result)
    }
}

//! Value types shared by the memoized and tabulated solvers.
//!
//! A [`RodInstance`] is a validated `(length, prices)` pair; both solvers
//! consume one and produce a [`SolveResult`] of identical shape.

use std::ops::Deref;

use crate::error::{InvalidInput, RodError};
use crate::utils::number_of_cuts;

/// Per-length revenue, 1-indexed: `price(i)` is what a piece of length `i`
/// sells for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceTable {
    prices: Vec<u64>,
}

impl PriceTable {
    pub fn new(prices: Vec<u64>) -> Self {
        Self { prices }
    }

    /// Revenue for a piece of length `piece`, or `None` outside `[1, len]`.
    #[inline]
    pub fn price(&self, piece: usize) -> Option<u64> {
        piece
            .checked_sub(1)
            .and_then(|idx| self.prices.get(idx))
            .copied()
    }

    /// Number of piece lengths priced by this table.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.prices
    }
}

impl From<Vec<u64>> for PriceTable {
    fn from(prices: Vec<u64>) -> Self {
        Self::new(prices)
    }
}

impl TryFrom<&[i64]> for PriceTable {
    type Error = InvalidInput;

    fn try_from(raw: &[i64]) -> Result<Self, Self::Error> {
        raw.iter()
            .enumerate()
            .map(|(idx, &price)| {
                u64::try_from(price).map_err(|_| InvalidInput::NegativePrice {
                    length: idx + 1,
                    price,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Ordered piece lengths of a partition, in the order the solver chose them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CutPlan(Vec<usize>);

impl CutPlan {
    pub fn new(pieces: Vec<usize>) -> Self {
        Self(pieces)
    }

    /// Number of pieces the rod is sold as.
    #[inline]
    pub fn pieces(&self) -> usize {
        self.0.len()
    }

    /// Sum of all piece lengths.
    pub fn total_length(&self) -> usize {
        self.0.iter().sum()
    }

    /// Cut operations needed: one fewer than the number of pieces.
    #[inline]
    pub fn number_of_cuts(&self) -> usize {
        number_of_cuts(self.0.len())
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for CutPlan {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for CutPlan {
    fn from(pieces: Vec<usize>) -> Self {
        Self(pieces)
    }
}

/// Optimal profit plus one concrete optimal plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub max_profit: u64,
    pub cuts: CutPlan,
    pub number_of_cuts: usize,
}

impl SolveResult {
    pub fn new(max_profit: u64, cuts: CutPlan) -> Self {
        let number_of_cuts = cuts.number_of_cuts();
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Pieces sum to `length`, every piece is positive, and the cut count
    /// matches the piece count.
    pub fn is_consistent_with(&self, length: usize) -> bool {
        self.cuts.total_length() == length
            && self.cuts.iter().all(|&piece| piece > 0)
            && self.number_of_cuts == number_of_cuts(self.cuts.pieces())
    }
}

/// A validated rod-cutting instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodInstance {
    length: usize,
    prices: PriceTable,
}

impl RodInstance {
    /// Validate raw boundary input.
    ///
    /// Fails when `length < 0`, when any price is negative, or when fewer
    /// than `length` prices are supplied. Prices past `length` are accepted
    /// and ignored by the solvers.
    pub fn new(length: i64, prices: &[i64]) -> Result<Self, RodError> {
        let length = usize::try_from(length).map_err(|_| InvalidInput::NegativeLength(length))?;
        let prices = PriceTable::try_from(prices)?;
        Self::from_parts(length, prices)
    }

    pub fn from_parts(length: usize, prices: PriceTable) -> Result<Self, RodError> {
        if prices.len() < length {
            return Err(InvalidInput::PriceTableTooShort {
                length,
                available: prices.len(),
            }
            .into());
        }
        Ok(Self { length, prices })
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Price of a piece that is known to lie in `[1, length]`.
    #[inline]
    pub(crate) fn price_of(&self, piece: usize) -> u64 {
        debug_assert!(piece >= 1 && piece <= self.length);
        self.prices.as_slice()[piece - 1]
    }
}

//! Gap penalties and the pairwise comparison used by every score.
//!
//! Gap symbols are not matrix keys, so every comparison goes through
//! [`GapPenalty`] first and only reaches the [`SubstitutionMatrix`] when
//! neither symbol is a gap. [`PairScorer`] bundles the two.

use msaq_core::Result;

use crate::scoring::SubstitutionMatrix;

/// How a residue aligned against a gap is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GapCost {
    /// Every residue-vs-gap comparison scores the same.
    Fixed(f64),
    /// A residue-vs-gap comparison scores `extend` when the gapped row of the
    /// pair was already gapped in the previous column, `open` otherwise.
    Affine { open: f64, extend: f64 },
}

/// Gap policy: gap symbol, residue-vs-gap cost and gap-vs-gap score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapPenalty {
    /// The gap byte.
    pub symbol: u8,
    /// Residue-vs-gap cost.
    pub cost: GapCost,
    /// Score of a gap aligned against a gap.
    pub gap_gap: f64,
}

impl Default for GapPenalty {
    /// `-` gaps, fixed penalty -8, gap-vs-gap +1.
    fn default() -> Self {
        Self {
            symbol: Self::DEFAULT_SYMBOL,
            cost: GapCost::Fixed(-8.0),
            gap_gap: 1.0,
        }
    }
}

impl GapPenalty {
    /// Conventional gap symbol.
    pub const DEFAULT_SYMBOL: u8 = b'-';

    /// Fixed residue-vs-gap penalty with the default symbol and gap-vs-gap score.
    pub fn fixed(penalty: f64) -> Self {
        Self {
            cost: GapCost::Fixed(penalty),
            ..Self::default()
        }
    }

    /// Affine residue-vs-gap penalty with the default symbol and gap-vs-gap score.
    pub fn affine(open: f64, extend: f64) -> Self {
        Self {
            cost: GapCost::Affine { open, extend },
            ..Self::default()
        }
    }

    /// Set the gap-vs-gap score.
    pub fn with_gap_gap(mut self, score: f64) -> Self {
        self.gap_gap = score;
        self
    }

    /// Set the gap symbol.
    pub fn with_symbol(mut self, symbol: u8) -> Self {
        self.symbol = symbol;
        self
    }

    /// Whether `s` is the gap symbol.
    #[inline]
    pub fn is_gap(&self, s: u8) -> bool {
        s == self.symbol
    }

    /// Score of comparing `a` with `b` when at least one is a gap.
    ///
    /// `previous` is the same pair of rows one column to the left, used by
    /// [`GapCost::Affine`]. Returns `None` when neither symbol is a gap.
    pub fn penalty(&self, a: u8, b: u8, previous: Option<(u8, u8)>) -> Option<f64> {
        let (a_gap, b_gap) = (self.is_gap(a), self.is_gap(b));
        if !a_gap && !b_gap {
            return None;
        }
        if a_gap && b_gap {
            return Some(self.gap_gap);
        }
        Some(match self.cost {
            GapCost::Fixed(p) => p,
            GapCost::Affine { open, extend } => {
                let extending = previous.is_some_and(|(pa, pb)| {
                    if a_gap {
                        self.is_gap(pa)
                    } else {
                        self.is_gap(pb)
                    }
                });
                if extending {
                    extend
                } else {
                    open
                }
            }
        })
    }
}

/// A substitution matrix paired with a gap policy.
#[derive(Debug, Clone, Copy)]
pub struct PairScorer<'a> {
    matrix: &'a SubstitutionMatrix,
    gap: &'a GapPenalty,
}

impl<'a> PairScorer<'a> {
    pub fn new(matrix: &'a SubstitutionMatrix, gap: &'a GapPenalty) -> Self {
        Self { matrix, gap }
    }

    /// Score two aligned symbols with no left context.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if neither symbol is a gap and the matrix does
    /// not define the pair.
    #[inline]
    pub fn pair(&self, a: u8, b: u8) -> Result<f64> {
        self.pair_in_context(None, a, b)
    }

    /// Score two aligned symbols given the same rows' symbols one column left.
    #[inline]
    pub fn pair_in_context(&self, previous: Option<(u8, u8)>, a: u8, b: u8) -> Result<f64> {
        match self.gap.penalty(a, b, previous) {
            Some(p) => Ok(p),
            None => self.matrix.score(a, b),
        }
    }

    pub fn gap(&self) -> &GapPenalty {
        self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let g = GapPenalty::default();
        assert_eq!(g.symbol, b'-');
        assert_eq!(g.penalty(b'A', b'-', None), Some(-8.0));
        assert_eq!(g.penalty(b'-', b'A', None), Some(-8.0));
        assert_eq!(g.penalty(b'-', b'-', None), Some(1.0));
        assert_eq!(g.penalty(b'A', b'C', None), None);
    }

    #[test]
    fn custom_symbol_and_gap_gap() {
        let g = GapPenalty::fixed(-2.0).with_gap_gap(-2.0).with_symbol(b'.');
        assert_eq!(g.penalty(b'.', b'.', None), Some(-2.0));
        assert_eq!(g.penalty(b'A', b'.', None), Some(-2.0));
        assert_eq!(g.penalty(b'A', b'-', None), None);
    }

    #[test]
    fn affine_open_then_extend() {
        let g = GapPenalty::affine(-10.0, -1.0);
        // No left context: opening.
        assert_eq!(g.penalty(b'-', b'A', None), Some(-10.0));
        // Same row gapped one column left: extension.
        assert_eq!(g.penalty(b'-', b'A', Some((b'-', b'C'))), Some(-1.0));
        assert_eq!(g.penalty(b'A', b'-', Some((b'C', b'-'))), Some(-1.0));
        // The other row was gapped: a new gap opens.
        assert_eq!(g.penalty(b'-', b'A', Some((b'C', b'-'))), Some(-10.0));
        assert_eq!(g.penalty(b'-', b'A', Some((b'C', b'C'))), Some(-10.0));
    }

    #[test]
    fn scorer_consults_gap_policy_first() {
        let m = SubstitutionMatrix::blosum62();
        let g = GapPenalty::fixed(-4.0);
        let scorer = PairScorer::new(m, &g);
        assert_eq!(scorer.pair(b'W', b'W').unwrap(), 11.0);
        assert_eq!(scorer.pair(b'W', b'-').unwrap(), -4.0);
        assert_eq!(scorer.pair(b'-', b'-').unwrap(), 1.0);
        assert!(scorer.pair(b'W', b'?').is_err());
        assert_eq!(scorer.gap().symbol, b'-');
    }
}

//! Sum-of-pairs score.
//!
//! Every column contributes the pairwise score of all `n(n-1)/2` unordered
//! row pairs.

use log::debug;
use msaq_core::{MsaqError, Result};

use crate::alignment::Alignment;
use crate::gap::{GapPenalty, PairScorer};
use crate::score::{Objective, Score};
use crate::scoring::{SharedMatrix, SubstitutionMatrix};

/// Sum over columns and over unordered row pairs of the pair score.
#[derive(Debug, Clone, Default)]
pub struct SumOfPairs {
    matrix: SharedMatrix,
    gap: GapPenalty,
}

impl SumOfPairs {
    /// Sum-of-pairs with `matrix` and the default gap policy.
    pub fn new(matrix: impl Into<SharedMatrix>) -> Self {
        Self {
            matrix: matrix.into(),
            gap: GapPenalty::default(),
        }
    }

    pub fn with_gap_penalty(mut self, gap: GapPenalty) -> Self {
        self.gap = gap;
        self
    }

    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    pub fn gap_penalty(&self) -> &GapPenalty {
        &self.gap
    }

    /// Score of one column. `previous` is the column to its left, if any.
    ///
    /// # Errors
    ///
    /// Returns a lookup error for a residue pair missing from the matrix, or
    /// [`MsaqError::InvalidInput`] if `previous` differs from `column` in height.
    pub fn column_score(&self, column: &[u8], previous: Option<&[u8]>) -> Result<f64> {
        if let Some(p) = previous.filter(|p| p.len() != column.len()) {
            return Err(MsaqError::InvalidInput(format!(
                "previous column has {} entries, column has {}",
                p.len(),
                column.len()
            )));
        }
        let scorer = PairScorer::new(&self.matrix, &self.gap);
        let mut score = 0.0;
        for i in 0..column.len() {
            for j in (i + 1)..column.len() {
                let context = previous.map(|p| (p[i], p[j]));
                score += scorer.pair_in_context(context, column[i], column[j])?;
            }
        }
        Ok(score)
    }
}

impl Score for SumOfPairs {
    fn name(&self) -> &str {
        "SumOfPairs"
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        let mut total = 0.0;
        let mut previous: Option<Vec<u8>> = None;
        for (k, column) in alignment.columns().enumerate() {
            let score = self.column_score(&column, previous.as_deref())?;
            debug!("column {}: score {}", k, score);
            total += score;
            previous = Some(column);
        }
        debug!("sum of pairs ({}): {}", self.matrix.name(), total);
        Ok(total)
    }
}

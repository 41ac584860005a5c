//! Star score: every row compared against a centre.

use log::debug;
use msaq_core::{MsaqError, Result};

use crate::alignment::Alignment;
use crate::column::most_frequent_symbol;
use crate::gap::{GapPenalty, PairScorer};
use crate::score::{Objective, Score};
use crate::scoring::{SharedMatrix, SubstitutionMatrix};

/// What each column is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarCenter {
    /// A reference row; every other row is compared with it.
    Row(usize),
    /// The column's most frequent symbol; every row is compared with it.
    Consensus,
}

impl Default for StarCenter {
    fn default() -> Self {
        StarCenter::Row(0)
    }
}

/// Sum over columns of the pair scores between the centre and the rows.
#[derive(Debug, Clone, Default)]
pub struct Star {
    matrix: SharedMatrix,
    gap: GapPenalty,
    center: StarCenter,
}

impl Star {
    /// Star score centred on the first row.
    pub fn new(matrix: impl Into<SharedMatrix>) -> Self {
        Self {
            matrix: matrix.into(),
            gap: GapPenalty::default(),
            center: StarCenter::default(),
        }
    }

    pub fn with_gap_penalty(mut self, gap: GapPenalty) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_center(mut self, center: StarCenter) -> Self {
        self.center = center;
        self
    }

    /// Centre on row `index`.
    pub fn with_reference(self, index: usize) -> Self {
        self.with_center(StarCenter::Row(index))
    }

    pub fn center(&self) -> StarCenter {
        self.center
    }

    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    fn score_against_row(&self, alignment: &Alignment, reference: usize) -> Result<f64> {
        let n = alignment.n_sequences();
        if reference >= n {
            return Err(MsaqError::InvalidInput(format!(
                "reference row {} out of range for {} sequences",
                reference, n
            )));
        }
        let scorer = PairScorer::new(&self.matrix, &self.gap);
        let mut total = 0.0;
        let mut previous: Option<Vec<u8>> = None;
        for (k, column) in alignment.columns().enumerate() {
            let center = column[reference];
            let mut score = 0.0;
            for (i, &s) in column.iter().enumerate() {
                if i == reference {
                    continue;
                }
                let context = previous.as_ref().map(|p| (p[reference], p[i]));
                score += scorer.pair_in_context(context, center, s)?;
            }
            debug!("column {}: centre {} score {}", k, center as char, score);
            total += score;
            previous = Some(column);
        }
        Ok(total)
    }

    fn score_against_consensus(&self, alignment: &Alignment) -> Result<f64> {
        let scorer = PairScorer::new(&self.matrix, &self.gap);
        let mut total = 0.0;
        for (k, column) in alignment.columns().enumerate() {
            let Some(center) = most_frequent_symbol(&column, self.matrix.case_rule()) else {
                continue;
            };
            let mut score = 0.0;
            for &s in &column {
                score += scorer.pair(center, s)?;
            }
            debug!("column {}: consensus {} score {}", k, center as char, score);
            total += score;
        }
        Ok(total)
    }
}

impl Score for Star {
    fn name(&self) -> &str {
        "Star"
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        let total = match self.center {
            StarCenter::Row(reference) => self.score_against_row(alignment, reference)?,
            StarCenter::Consensus => self.score_against_consensus(alignment)?,
        };
        debug!("star ({}, {:?}): {}", self.matrix.name(), self.center, total);
        Ok(total)
    }
}

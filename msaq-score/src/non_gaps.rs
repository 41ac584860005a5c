//! Percentage of non-gap cells.

use log::debug;
use msaq_core::Result;

use crate::alignment::Alignment;
use crate::column::percentage_non_gap;
use crate::gap::GapPenalty;
use crate::score::{Objective, Score, ScoreUnit};

/// Mean over columns of the fraction of residues, in the configured unit.
#[derive(Debug, Clone)]
pub struct PercentageOfNonGaps {
    gap: u8,
    unit: ScoreUnit,
}

impl Default for PercentageOfNonGaps {
    /// `-` gaps, reported as a percentage (0–100).
    fn default() -> Self {
        Self {
            gap: GapPenalty::DEFAULT_SYMBOL,
            unit: ScoreUnit::Percentage,
        }
    }
}

impl PercentageOfNonGaps {
    pub fn new(unit: ScoreUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn with_gap_symbol(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    pub fn unit(&self) -> ScoreUnit {
        self.unit
    }
}

impl Score for PercentageOfNonGaps {
    fn name(&self) -> &str {
        "PercentageOfNonGaps"
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        let sum: f64 = alignment
            .columns()
            .map(|column| percentage_non_gap(&column, self.gap))
            .sum();
        let fraction = sum / alignment.n_columns() as f64;
        debug!(
            "non-gaps: {:.0} of {} cells",
            fraction * alignment.n_cells() as f64,
            alignment.n_cells()
        );
        Ok(self.unit.scale(fraction))
    }
}

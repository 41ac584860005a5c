//! Percentage of totally conserved columns.

use log::debug;
use msaq_core::Result;

use crate::alignment::Alignment;
use crate::column::{is_fully_conserved, CaseRule, ConservationRule};
use crate::gap::GapPenalty;
use crate::score::{Objective, Score, ScoreUnit};

/// Conserved columns over total columns, in the configured unit.
#[derive(Debug, Clone)]
pub struct PercentageOfTotallyConservedColumns {
    gap: u8,
    rule: ConservationRule,
    case: CaseRule,
    unit: ScoreUnit,
}

impl Default for PercentageOfTotallyConservedColumns {
    /// `-` gaps, strict rule, case-sensitive, percentage.
    fn default() -> Self {
        Self {
            gap: GapPenalty::DEFAULT_SYMBOL,
            rule: ConservationRule::Strict,
            case: CaseRule::default(),
            unit: ScoreUnit::Percentage,
        }
    }
}

impl PercentageOfTotallyConservedColumns {
    pub fn new(rule: ConservationRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    pub fn with_gap_symbol(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_case_rule(mut self, case: CaseRule) -> Self {
        self.case = case;
        self
    }

    pub fn with_unit(mut self, unit: ScoreUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Number of conserved columns.
    pub fn count(&self, alignment: &Alignment) -> usize {
        alignment
            .columns()
            .filter(|column| is_fully_conserved(column, self.gap, self.rule, self.case))
            .count()
    }
}

impl Score for PercentageOfTotallyConservedColumns {
    fn name(&self) -> &str {
        "PercentageOfTotallyConservedColumns"
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        let conserved = self.count(alignment);
        debug!(
            "conserved columns: {} out of {}",
            conserved,
            alignment.n_columns()
        );
        Ok(self
            .unit
            .scale(conserved as f64 / alignment.n_columns() as f64))
    }
}

//! Minimum-entropy score: the sum of per-column Shannon entropies.

use log::{debug, trace};
use msaq_core::Result;

use crate::alignment::Alignment;
use crate::column::{shannon_entropy, CaseRule, GapTreatment};
use crate::gap::GapPenalty;
use crate::score::{Objective, Score};

/// Sign convention of the reported entropy sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntropySign {
    /// Σ H(column), non-negative; lower is better.
    #[default]
    Shannon,
    /// Σ p ln p, i.e. −Σ H(column), non-positive; higher is better.
    Negated,
}

/// Sum over columns of the column's Shannon entropy.
#[derive(Debug, Clone)]
pub struct Entropy {
    gap: u8,
    gaps: GapTreatment,
    case: CaseRule,
    sign: EntropySign,
}

impl Default for Entropy {
    fn default() -> Self {
        Self {
            gap: GapPenalty::DEFAULT_SYMBOL,
            gaps: GapTreatment::default(),
            case: CaseRule::default(),
            sign: EntropySign::default(),
        }
    }
}

impl Entropy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_symbol(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_gap_treatment(mut self, gaps: GapTreatment) -> Self {
        self.gaps = gaps;
        self
    }

    /// Whether `a` and `A` count as the same symbol.
    pub fn with_case_rule(mut self, case: CaseRule) -> Self {
        self.case = case;
        self
    }

    pub fn with_sign(mut self, sign: EntropySign) -> Self {
        self.sign = sign;
        self
    }
}

impl Score for Entropy {
    fn name(&self) -> &str {
        "Entropy"
    }

    fn objective(&self) -> Objective {
        match self.sign {
            EntropySign::Shannon => Objective::Minimize,
            EntropySign::Negated => Objective::Maximize,
        }
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        let mut total = 0.0;
        for (k, column) in alignment.columns().enumerate() {
            let h = shannon_entropy(&column, self.gap, self.gaps, self.case);
            trace!("column {}: entropy {}", k, h);
            total += h;
        }
        let total = match self.sign {
            EntropySign::Shannon => total,
            EntropySign::Negated => -total,
        };
        debug!("entropy ({:?}, {:?}): {}", self.sign, self.gaps, total);
        Ok(total)
    }
}

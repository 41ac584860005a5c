//! The [`Score`] trait shared by every alignment-quality model.

use msaq_core::{Result, Sequence};

use crate::alignment::Alignment;

/// Whether larger or smaller values mean a better alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    pub fn is_minimization(self) -> bool {
        self == Objective::Minimize
    }

    /// Whether `a` is strictly better than `b` under this objective.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Maximize => a > b,
            Objective::Minimize => a < b,
        }
    }
}

/// Unit of the percentage-style scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreUnit {
    /// 0–100.
    #[default]
    Percentage,
    /// 0–1.
    Fraction,
}

impl ScoreUnit {
    /// Express a fraction in this unit.
    pub fn scale(self, fraction: f64) -> f64 {
        match self {
            ScoreUnit::Percentage => fraction * 100.0,
            ScoreUnit::Fraction => fraction,
        }
    }
}

/// An alignment-quality model.
///
/// Implementations hold only immutable configuration, so a single instance
/// can score many alignments, from several threads at once.
pub trait Score: Send + Sync {
    /// Model name, e.g. `"SumOfPairs"`.
    fn name(&self) -> &str;

    /// Whether the model's values are minimized or maximized.
    fn objective(&self) -> Objective;

    /// Score a validated alignment.
    fn evaluate(&self, alignment: &Alignment) -> Result<f64>;

    /// Validate raw aligned rows and score them.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `rows` is empty, the rows are empty,
    /// non-ASCII or differ in length, plus any error of [`Score::evaluate`].
    fn compute<S: Sequence>(&self, rows: &[S]) -> Result<f64>
    where
        Self: Sized,
    {
        let alignment = Alignment::new(rows)?;
        self.evaluate(&alignment)
    }

    fn is_minimization(&self) -> bool {
        self.objective().is_minimization()
    }
}

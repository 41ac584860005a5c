//! Batch evaluation: several models on one alignment, or one model on many
//! alignments.
//!
//! Models hold only immutable configuration, so with the `parallel` feature
//! each evaluation runs on the rayon pool. Results keep the input order.

use msaq_core::{Result, Scored, Summarizable};

use crate::alignment::Alignment;
use crate::score::{Objective, Score};

/// The value of one model on one alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    pub name: String,
    pub value: f64,
    pub objective: Objective,
}

impl Scored for ScoreReport {
    fn score(&self) -> f64 {
        self.value
    }
}

impl Summarizable for ScoreReport {
    fn summary(&self) -> String {
        let direction = match self.objective {
            Objective::Maximize => "higher is better",
            Objective::Minimize => "lower is better",
        };
        format!("{}: {} ({})", self.name, self.value, direction)
    }
}

fn report(model: &dyn Score, alignment: &Alignment) -> Result<ScoreReport> {
    Ok(ScoreReport {
        name: model.name().to_string(),
        value: model.evaluate(alignment)?,
        objective: model.objective(),
    })
}

/// Evaluate every model on the same alignment.
///
/// # Errors
///
/// Returns the first error raised by any model; no partial results.
pub fn score_all(alignment: &Alignment, models: &[&dyn Score]) -> Result<Vec<ScoreReport>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        models
            .par_iter()
            .map(|model| report(*model, alignment))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        models
            .iter()
            .map(|model| report(*model, alignment))
            .collect()
    }
}

/// Evaluate one model on every alignment.
///
/// # Errors
///
/// Returns the first error raised for any alignment; no partial results.
pub fn score_alignments(model: &dyn Score, alignments: &[Alignment]) -> Result<Vec<f64>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        alignments
            .par_iter()
            .map(|alignment| model.evaluate(alignment))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        alignments
            .iter()
            .map(|alignment| model.evaluate(alignment))
            .collect()
    }
}

/// Index of the best value under `objective`; the first one wins ties.
///
/// NaN values are never selected. Returns `None` if no value qualifies.
pub fn best(values: &[f64], objective: Objective) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if !objective.is_better(v, b) => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

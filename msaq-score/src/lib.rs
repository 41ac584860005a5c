//! Quality scores for multiple sequence alignments.
//!
//! Every model reduces an aligned set of equal-length sequences to a single
//! number: sum-of-pairs and star scores over a substitution matrix, column
//! entropy, the share of non-gap cells, the share of totally conserved columns,
//! and STRIKE, which weights residue pairs by contacts in a reference structure.
//! Models implement the [`Score`] trait and are immutable, so one instance can
//! score any number of alignments from any number of threads.
//!
//! # Quick start
//!
//! ```
//! use msaq_score::{Alignment, Entropy, Score, SubstitutionMatrix, SumOfPairs};
//!
//! let alignment = Alignment::new(&["MKV-LA", "MRVGLA", "MKI-LA"]).unwrap();
//!
//! let sop = SumOfPairs::new(SubstitutionMatrix::blosum62());
//! let entropy = Entropy::new();
//! assert!(sop.evaluate(&alignment).unwrap() > 0.0);
//! assert!(entropy.is_minimization());
//! ```

pub mod alignment;
pub mod scoring;
pub mod gap;
pub mod column;
pub mod score;
pub mod sum_of_pairs;
pub mod star;
pub mod entropy;
pub mod non_gaps;
pub mod conserved;
pub mod contact;
pub mod strike;
pub mod batch;
pub mod config;

pub use alignment::{Alignment, Columns};
pub use scoring::{SharedMatrix, SubstitutionMatrix};
pub use gap::{GapCost, GapPenalty, PairScorer};
pub use column::{
    column_symbol_counts, is_fully_conserved, most_frequent_symbol, percentage_non_gap,
    shannon_entropy, CaseRule, ConservationRule, GapTreatment,
};
pub use score::{Objective, Score, ScoreUnit};
pub use sum_of_pairs::SumOfPairs;
pub use star::{Star, StarCenter};
pub use entropy::{Entropy, EntropySign};
pub use non_gaps::PercentageOfNonGaps;
pub use conserved::PercentageOfTotallyConservedColumns;
pub use contact::{Contact, ContactMap};
pub use strike::{ContactIndexing, Strike};
pub use batch::{best, score_alignments, score_all, ScoreReport};
pub use config::{MatrixChoice, ScoreConfig};

use msaq_core::Sequence;

/// Convenience function: score aligned rows with a configured model.
///
/// # Errors
///
/// Returns an error if the rows do not form a valid alignment, the model
/// cannot be built (STRIKE needs [`ScoreConfig::build_with_contacts`]), or
/// scoring fails.
pub fn score<S: Sequence>(rows: &[S], config: &ScoreConfig) -> msaq_core::Result<f64> {
    let alignment = Alignment::new(rows)?;
    config.build()?.evaluate(&alignment)
}

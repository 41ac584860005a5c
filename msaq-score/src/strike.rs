//! STRIKE: substitution scoring weighted by structural contacts.
//!
//! Residues that touch in a reference structure should carry compatible
//! substitutions in every aligned sequence. For each contact `(i, j, w)` the
//! two alignment columns are compared row by row with the substitution matrix
//! and gap policy, and the row sum is added to the total with weight `w`.
//! Work is proportional to the number of contacts, not to the squared width.

use std::sync::Arc;

use log::{debug, trace, warn};
use msaq_core::{MsaqError, Result};

use crate::alignment::Alignment;
use crate::contact::ContactMap;
use crate::gap::{GapPenalty, PairScorer};
use crate::score::{Objective, Score};
use crate::scoring::{SharedMatrix, SubstitutionMatrix};

/// How contact indices are mapped onto alignment columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactIndexing {
    /// Indices are alignment columns.
    #[default]
    Column,
    /// Indices are residue numbers (0-based, gaps skipped) of a reference row,
    /// i.e. the numbering of the structure that row was taken from.
    Residue { reference_row: usize },
}

/// Contact-weighted substitution score.
#[derive(Debug, Clone)]
pub struct Strike {
    matrix: SharedMatrix,
    gap: GapPenalty,
    contacts: Arc<ContactMap>,
    indexing: ContactIndexing,
    normalized: bool,
}

impl Strike {
    pub fn new(matrix: impl Into<SharedMatrix>, contacts: impl Into<Arc<ContactMap>>) -> Self {
        Self {
            matrix: matrix.into(),
            gap: GapPenalty::default(),
            contacts: contacts.into(),
            indexing: ContactIndexing::default(),
            normalized: false,
        }
    }

    pub fn with_gap_penalty(mut self, gap: GapPenalty) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_indexing(mut self, indexing: ContactIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Divide the total by the summed contact weight times the row count,
    /// giving the mean weighted pair score.
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn contacts(&self) -> &ContactMap {
        &self.contacts
    }

    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    /// Map every positively weighted contact to a column pair.
    ///
    /// All indices are checked before anything is scored.
    fn resolve(&self, alignment: &Alignment) -> Result<Vec<(usize, usize, f64)>> {
        let residues = match self.indexing {
            ContactIndexing::Column => None,
            ContactIndexing::Residue { reference_row } => Some(
                alignment
                    .residue_columns(reference_row, self.gap.symbol)
                    .ok_or_else(|| {
                        MsaqError::InvalidInput(format!(
                            "reference row {} out of range for {} sequences",
                            reference_row,
                            alignment.n_sequences()
                        ))
                    })?,
            ),
        };
        let limit = residues
            .as_ref()
            .map_or(alignment.n_columns(), Vec::len);
        let to_column = |index: usize| match &residues {
            Some(columns) => columns[index],
            None => index,
        };

        let mut resolved = Vec::with_capacity(self.contacts.len());
        for contact in self.contacts.iter() {
            if contact.j >= limit {
                return Err(MsaqError::InvalidInput(format!(
                    "contact ({}, {}) out of range: {} {} available",
                    contact.i,
                    contact.j,
                    limit,
                    if residues.is_some() { "residues" } else { "columns" }
                )));
            }
            if contact.weight > 0.0 {
                resolved.push((to_column(contact.i), to_column(contact.j), contact.weight));
            }
        }
        Ok(resolved)
    }
}

impl Score for Strike {
    fn name(&self) -> &str {
        "STRIKE"
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn evaluate(&self, alignment: &Alignment) -> Result<f64> {
        if self.contacts.is_empty() {
            warn!("STRIKE scored with an empty contact map");
        }
        let contacts = self.resolve(alignment)?;
        let scorer = PairScorer::new(&self.matrix, &self.gap);

        let mut total = 0.0;
        let mut weight = 0.0;
        for &(ci, cj, w) in &contacts {
            let mut aggregate = 0.0;
            for row in alignment.rows() {
                aggregate += scorer.pair(row[ci], row[cj])?;
            }
            trace!("columns ({}, {}) weight {}: {}", ci, cj, w, aggregate);
            total += w * aggregate;
            weight += w;
        }

        if self.normalized {
            let denominator = weight * alignment.n_sequences() as f64;
            total = if denominator > 0.0 { total / denominator } else { 0.0 };
        }
        debug!(
            "strike ({}, {} contacts): {}",
            self.matrix.name(),
            contacts.len(),
            total
        );
        Ok(total)
    }
}

//! Sparse residue-residue contact maps.
//!
//! A [`ContactMap`] is the structural input of the STRIKE score: a set of
//! residue pairs that sit close together in a reference 3D structure, each
//! with a non-negative weight. It is built by the caller (from a parsed
//! structure, a predicted contact list, or a distance matrix) and only read by
//! the scorer.

use std::collections::BTreeMap;

use msaq_core::{MsaqError, Result, Summarizable};

/// One weighted contact between residues `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    pub i: usize,
    pub j: usize,
    pub weight: f64,
}

/// A sparse, symmetric set of weighted residue contacts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMap {
    /// Keyed by `(min, max)` residue index.
    contacts: BTreeMap<(usize, usize), f64>,
}

impl ContactMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contacts of weight 1 from unweighted pairs.
    ///
    /// # Errors
    ///
    /// Returns an error on a self contact (`i == j`).
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        Self::from_weighted(pairs.into_iter().map(|(i, j)| (i, j, 1.0)))
    }

    /// Contacts from `(i, j, weight)` triples. Later duplicates replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error on a self contact or a negative or non-finite weight.
    pub fn from_weighted(contacts: impl IntoIterator<Item = (usize, usize, f64)>) -> Result<Self> {
        let mut map = Self::new();
        for (i, j, w) in contacts {
            map.insert(i, j, w)?;
        }
        Ok(map)
    }

    /// Derive contacts from a row-major `size × size` distance matrix.
    ///
    /// Every pair closer than `cutoff` becomes a contact of weight 1.
    /// Non-finite distances (missing atoms) never count as contacts.
    ///
    /// # Errors
    ///
    /// Returns an error if `distances` does not hold `size * size` entries.
    pub fn from_distances(size: usize, distances: &[f64], cutoff: f64) -> Result<Self> {
        if distances.len() != size * size {
            return Err(MsaqError::InvalidInput(format!(
                "expected {} distances for {} residues, got {}",
                size * size,
                size,
                distances.len()
            )));
        }
        let mut map = Self::new();
        for i in 0..size {
            for j in (i + 1)..size {
                let d = distances[i * size + j];
                if d.is_finite() && d < cutoff {
                    map.contacts.insert((i, j), 1.0);
                }
            }
        }
        Ok(map)
    }

    /// Add or replace a contact.
    ///
    /// # Errors
    ///
    /// Returns an error on a self contact or a negative or non-finite weight.
    pub fn insert(&mut self, i: usize, j: usize, weight: f64) -> Result<()> {
        if i == j {
            return Err(MsaqError::InvalidInput(format!(
                "residue {} cannot contact itself",
                i
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(MsaqError::InvalidInput(format!(
                "contact ({}, {}) has invalid weight {}",
                i, j, weight
            )));
        }
        self.contacts.insert((i.min(j), i.max(j)), weight);
        Ok(())
    }

    /// Drop contacts between residues fewer than `min_separation` apart in sequence.
    pub fn without_local(mut self, min_separation: usize) -> Self {
        self.contacts.retain(|&(i, j), _| j - i >= min_separation);
        self
    }

    /// Weight of the contact between `i` and `j`, in either order.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.contacts.get(&(i.min(j), i.max(j))).copied()
    }

    /// Contacts in ascending `(i, j)` order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Contact> + '_ {
        self.contacts
            .iter()
            .map(|(&(i, j), &weight)| Contact { i, j, weight })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Largest residue index referenced by any contact.
    pub fn max_index(&self) -> Option<usize> {
        self.contacts.keys().map(|&(_, j)| j).max()
    }

    /// Sum of all contact weights.
    pub fn total_weight(&self) -> f64 {
        self.contacts.values().sum()
    }
}

impl Summarizable for ContactMap {
    fn summary(&self) -> String {
        match self.max_index() {
            Some(max) => format!(
                "ContactMap: {} contacts over residues 0..={}, total weight {}",
                self.len(),
                max,
                self.total_weight()
            ),
            None => "ContactMap: empty".to_string(),
        }
    }
}

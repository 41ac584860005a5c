//! Per-column analysis: symbol counts, conservation, gap fraction, entropy.
//!
//! Symbols are compared exactly unless a [`CaseRule::Insensitive`] is given,
//! in which case counts are keyed by the uppercase symbol. Exact comparison
//! keeps lowercase insert-state residues (A2M, a3m) apart from aligned ones.
//! The gap symbol is counted like any other symbol.

use std::collections::BTreeMap;

/// When a column counts as totally conserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConservationRule {
    /// Every entry is the same residue; any gap breaks conservation.
    #[default]
    Strict,
    /// Every entry is the same symbol, so an all-gap column is conserved.
    Uniform,
}

/// Whether symbols differing only in letter case are the same symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseRule {
    /// `a` and `A` are different symbols.
    #[default]
    Sensitive,
    /// Letters are folded to uppercase before comparison.
    Insensitive,
}

impl CaseRule {
    /// The symbol `s` is compared as.
    #[inline]
    pub fn normalize(self, s: u8) -> u8 {
        match self {
            CaseRule::Sensitive => s,
            CaseRule::Insensitive => s.to_ascii_uppercase(),
        }
    }
}

/// How the gap symbol enters an entropy computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GapTreatment {
    /// Gaps are one more symbol in the frequency table.
    #[default]
    AsSymbol,
    /// Gap positions are dropped before computing frequencies.
    Ignore,
}

/// Frequency table of a column, gap included.
pub fn column_symbol_counts(column: &[u8], case: CaseRule) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for &s in column {
        *counts.entry(case.normalize(s)).or_insert(0) += 1;
    }
    counts
}

/// Whether the column is totally conserved under `rule`.
pub fn is_fully_conserved(
    column: &[u8],
    gap: u8,
    rule: ConservationRule,
    case: CaseRule,
) -> bool {
    let Some(&first) = column.first() else {
        return false;
    };
    if rule == ConservationRule::Strict && column.contains(&gap) {
        return false;
    }
    let first = case.normalize(first);
    column.iter().all(|&s| case.normalize(s) == first)
}

/// Fraction of entries that are not the gap symbol, in `[0, 1]`.
///
/// An empty column has no residues and yields 0.
pub fn percentage_non_gap(column: &[u8], gap: u8) -> f64 {
    if column.is_empty() {
        return 0.0;
    }
    let residues = column.iter().filter(|&&s| s != gap).count();
    residues as f64 / column.len() as f64
}

/// Shannon entropy H = -Σ p(s) ln p(s) over the symbols of a column.
///
/// Uses the natural logarithm. A column with a single distinct symbol, or
/// with nothing left after dropping gaps, has entropy 0.
pub fn shannon_entropy(column: &[u8], gap: u8, gaps: GapTreatment, case: CaseRule) -> f64 {
    let mut counts = column_symbol_counts(column, case);
    if gaps == GapTreatment::Ignore {
        counts.remove(&case.normalize(gap));
    }
    let n: usize = counts.values().sum();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let mut h = 0.0;
    for &c in counts.values() {
        let p = c as f64 / n;
        h -= p * p.ln();
    }
    h
}

/// The most frequent symbol of a column, as normalized by `case`.
///
/// Ties go to the symbol that appears first in the column.
pub fn most_frequent_symbol(column: &[u8], case: CaseRule) -> Option<u8> {
    let counts = column_symbol_counts(column, case);
    let best = *counts.values().max()?;
    column
        .iter()
        .map(|&s| case.normalize(s))
        .find(|s| counts.get(s) == Some(&best))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn column(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'-')],
            1..=max_len,
        )
    }

    proptest! {
        #[test]
        fn entropy_is_permutation_symmetric(
            (col, shuffled) in column(30).prop_flat_map(|c| (Just(c.clone()), Just(c).prop_shuffle())),
        ) {
            let a = shannon_entropy(&col, b'-', GapTreatment::AsSymbol, CaseRule::Sensitive);
            let b = shannon_entropy(&shuffled, b'-', GapTreatment::AsSymbol, CaseRule::Sensitive);
            prop_assert!((a - b).abs() < 1e-12);
        }

        #[test]
        fn entropy_nonnegative_and_bounded(col in column(30)) {
            let h = shannon_entropy(&col, b'-', GapTreatment::AsSymbol, CaseRule::Sensitive);
            prop_assert!(h >= 0.0);
            prop_assert!(h <= (5.0f64).ln() + 1e-12);
        }

        #[test]
        fn conserved_columns_have_one_residue(col in column(10)) {
            let strict = is_fully_conserved(&col, b'-', ConservationRule::Strict, CaseRule::Sensitive);
            let distinct = column_symbol_counts(&col, CaseRule::Sensitive).len();
            prop_assert_eq!(strict, distinct == 1 && !col.contains(&b'-'));
        }
    }
}

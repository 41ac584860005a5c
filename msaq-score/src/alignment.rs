//! Validated multiple sequence alignments and column access.

use msaq_core::{MsaqError, Result, Sequence, Summarizable};

/// An immutable multiple sequence alignment.
///
/// Rows keep their insertion order, which is meaningful for scores that
/// single out a reference row. Every row has the same non-zero width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    rows: Vec<Vec<u8>>,
    names: Option<Vec<String>>,
    width: usize,
}

impl Alignment {
    /// Build an alignment from aligned rows.
    ///
    /// # Errors
    ///
    /// Returns [`MsaqError::InvalidInput`] if there are no rows, the rows are
    /// empty, a row holds a non-ASCII byte, or the rows differ in length.
    pub fn new<S: Sequence>(rows: &[S]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| {
            MsaqError::InvalidInput("alignment has no sequences".into())
        })?;
        let width = first.len();
        if width == 0 {
            return Err(MsaqError::InvalidInput(
                "alignment sequences are empty".into(),
            ));
        }
        // Columns are byte-wise, so a multi-byte character would span columns.
        if let Some(i) = rows.iter().position(|r| !r.as_bytes().is_ascii()) {
            return Err(MsaqError::InvalidInput(format!(
                "sequence {} contains a non-ASCII symbol",
                i
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MsaqError::InvalidInput(format!(
                "all sequences must be aligned: sequence {} has length {}, expected {}",
                i,
                row.len(),
                width
            )));
        }
        Ok(Self {
            rows: rows.iter().map(|r| r.as_bytes().to_vec()).collect(),
            names: None,
            width,
        })
    }

    /// Build an alignment from `(name, row)` pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Alignment::new`].
    pub fn with_names<N: AsRef<str>, S: Sequence>(records: &[(N, S)]) -> Result<Self> {
        let rows: Vec<&[u8]> = records.iter().map(|(_, s)| s.as_bytes()).collect();
        let mut alignment = Self::new(&rows)?;
        alignment.names = Some(records.iter().map(|(n, _)| n.as_ref().to_string()).collect());
        Ok(alignment)
    }

    /// Number of sequences.
    pub fn n_sequences(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.width
    }

    /// Total number of cells (`n_sequences * n_columns`).
    pub fn n_cells(&self) -> usize {
        self.rows.len() * self.width
    }

    /// A row, if `index` is in range.
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// All rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Name of a row, when the alignment was built with names.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.as_ref()?.get(index).map(String::as_str)
    }

    /// Get a column of the alignment (one byte per sequence).
    pub fn column(&self, col: usize) -> Option<Vec<u8>> {
        if col >= self.width {
            return None;
        }
        Some(self.rows.iter().map(|s| s[col]).collect())
    }

    /// Iterate over the columns left to right.
    pub fn columns(&self) -> Columns<'_> {
        Columns {
            alignment: self,
            next: 0,
        }
    }

    /// Column index of every residue (non-gap symbol) of a row, in order.
    ///
    /// Entry `k` is the column holding the row's `k`-th residue, which maps
    /// structure residue numbers onto alignment columns.
    pub fn residue_columns(&self, row: usize, gap: u8) -> Option<Vec<usize>> {
        let row = self.rows.get(row)?;
        Some(
            row.iter()
                .enumerate()
                .filter(|(_, &s)| s != gap)
                .map(|(c, _)| c)
                .collect(),
        )
    }

    /// Return a copy with rows `a` and `b` exchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MsaqError::InvalidInput`] if either index is out of range.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Self> {
        let n = self.rows.len();
        if a >= n || b >= n {
            return Err(MsaqError::InvalidInput(format!(
                "row index out of range for {} sequences",
                n
            )));
        }
        let mut swapped = self.clone();
        swapped.rows.swap(a, b);
        if let Some(names) = swapped.names.as_mut() {
            names.swap(a, b);
        }
        Ok(swapped)
    }
}

impl Summarizable for Alignment {
    fn summary(&self) -> String {
        format!(
            "Alignment: {} sequence{}, {} column{}",
            self.rows.len(),
            if self.rows.len() == 1 { "" } else { "s" },
            self.width,
            if self.width == 1 { "" } else { "s" },
        )
    }
}

/// Iterator over alignment columns, see [`Alignment::columns`].
pub struct Columns<'a> {
    alignment: &'a Alignment,
    next: usize,
}

impl Iterator for Columns<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let column = self.alignment.column(self.next)?;
        self.next += 1;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.alignment.width - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Columns<'_> {}

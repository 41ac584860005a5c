//! Substitution matrices for scoring aligned residue pairs.
//!
//! A [`SubstitutionMatrix`] maps an ordered pair of symbols to a real score.
//! Two protein tables ship with the crate ([`SubstitutionMatrix::pam250`] and
//! [`SubstitutionMatrix::blosum62`]); they are built once per process and handed
//! out as `&'static` references. Arbitrary tables can be loaded from the usual
//! whitespace-separated text layout with [`SubstitutionMatrix::from_file`], and
//! simple match/mismatch tables are available through
//! [`SubstitutionMatrix::identity`].
//!
//! Gap symbols are never matrix keys; see [`crate::gap`] for how they are scored.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use log::debug;
use msaq_core::{MsaqError, Result, Summarizable};

use crate::column::CaseRule;

/// Sentinel for bytes that are not part of the matrix alphabet.
const NO_INDEX: u16 = u16::MAX;

// ---------------------------------------------------------------------------
// Substitution matrix
// ---------------------------------------------------------------------------

/// An immutable table of pairwise symbol scores.
///
/// Lookups are exact by default, so `a` is unknown to a table that only lists
/// `A`. [`SubstitutionMatrix::with_case_rule`] with [`CaseRule::Insensitive`]
/// falls back to the other case of a letter the table does not spell out.
/// There is no mutation API for scores: once built, a matrix can be shared
/// freely between threads and scoring models.
#[derive(Clone)]
pub struct SubstitutionMatrix {
    name: String,
    alphabet: Vec<u8>,
    /// Byte → position in `alphabet`, `NO_INDEX` when absent.
    index: [u16; 256],
    /// `alphabet.len()` squared scores, row-major.
    scores: Vec<f64>,
    case: CaseRule,
}

impl SubstitutionMatrix {
    /// Build a matrix from an alphabet and a row-major score table.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty, contains duplicates, or the
    /// table does not hold exactly `alphabet.len()²` finite scores.
    pub fn from_table(name: impl Into<String>, alphabet: &[u8], scores: Vec<f64>) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(MsaqError::InvalidInput(
                "matrix alphabet must not be empty".into(),
            ));
        }
        let dim = alphabet.len();
        if scores.len() != dim * dim {
            return Err(MsaqError::InvalidInput(format!(
                "expected {} scores for {} symbols, got {}",
                dim * dim,
                dim,
                scores.len()
            )));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(MsaqError::InvalidInput(format!(
                "matrix scores must be finite, got {bad}"
            )));
        }

        let mut index = [NO_INDEX; 256];
        for (i, &symbol) in alphabet.iter().enumerate() {
            if index[symbol as usize] != NO_INDEX {
                return Err(MsaqError::InvalidInput(format!(
                    "duplicate matrix symbol '{}'",
                    symbol as char
                )));
            }
            index[symbol as usize] = i as u16;
        }

        Ok(Self {
            name: name.into(),
            alphabet: alphabet.to_vec(),
            index,
            scores,
            case: CaseRule::default(),
        })
    }

    /// A match/mismatch table over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not greater than `mismatch_score`,
    /// or if the alphabet is empty or has duplicates.
    pub fn identity(alphabet: &[u8], match_score: f64, mismatch_score: f64) -> Result<Self> {
        if match_score <= mismatch_score {
            return Err(MsaqError::InvalidInput(
                "match_score must be greater than mismatch_score".into(),
            ));
        }
        let dim = alphabet.len();
        let scores = (0..dim * dim)
            .map(|k| {
                if k / dim == k % dim {
                    match_score
                } else {
                    mismatch_score
                }
            })
            .collect();
        Self::from_table("IDENTITY", alphabet, scores)
    }

    /// Default nucleotide table: +2 match, -1 mismatch over `ACGTUN`.
    pub fn dna_default() -> &'static Self {
        static DNA: OnceLock<SubstitutionMatrix> = OnceLock::new();
        DNA.get_or_init(|| builtin("DNA", b"ACGTUN", |i, j| if i == j { 2 } else { -1 }))
    }

    /// PAM250 (Dayhoff) over the 20 amino acids plus B, Z, X and `*`.
    pub fn pam250() -> &'static Self {
        static PAM: OnceLock<SubstitutionMatrix> = OnceLock::new();
        PAM.get_or_init(|| builtin("PAM250", AA_ALPHABET, |i, j| PAM250[i * AA_DIM + j]))
    }

    /// BLOSUM62 over the 20 amino acids plus B, Z, X and `*`.
    pub fn blosum62() -> &'static Self {
        static BLOSUM: OnceLock<SubstitutionMatrix> = OnceLock::new();
        BLOSUM.get_or_init(|| builtin("BLOSUM62", AA_ALPHABET, |i, j| BLOSUM62[i * AA_DIM + j]))
    }

    /// Load a matrix from a text file, named after the file stem.
    ///
    /// The file is opened, read through a buffer and closed before this
    /// returns, on success and on every error path.
    ///
    /// # Errors
    ///
    /// Returns [`MsaqError::Io`] if the file cannot be read, or
    /// [`MsaqError::FileFormat`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MsaqError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "FILE".to_string());
        let matrix = Self::from_reader(name, file)?;
        debug!(
            "loaded matrix {} ({} symbols) from {}",
            matrix.name,
            matrix.alphabet.len(),
            path.display()
        );
        Ok(matrix)
    }

    /// Parse a matrix from any reader. See [`SubstitutionMatrix::parse`] for the layout.
    pub fn from_reader(name: impl Into<String>, reader: impl Read) -> Result<Self> {
        let mut parser = MatrixParser::default();
        for (n, line) in BufReader::new(reader).lines().enumerate() {
            parser.feed(n + 1, &line?)?;
        }
        parser.finish(name.into())
    }

    /// Parse a matrix from text.
    ///
    /// Lines starting with `#` and blank lines are skipped. The first
    /// remaining line lists the column symbols; each following line starts
    /// with a row symbol and carries one score per column:
    ///
    /// ```text
    /// # toy table
    ///    A  C  G  T
    /// A  1 -1 -1 -1
    /// C -1  1 -1 -1
    /// G -1 -1  1 -1
    /// T -1 -1 -1  1
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MsaqError::FileFormat`] if the header is missing or holds
    /// multi-character or repeated symbols, if any row has the wrong number
    /// of fields or a non-numeric score, or if the row symbols do not match
    /// the header symbols.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut parser = MatrixParser::default();
        for (n, line) in text.lines().enumerate() {
            parser.feed(n + 1, line)?;
        }
        parser.finish(name.into())
    }

    /// The same table with lookups under `case`.
    pub fn with_case_rule(mut self, case: CaseRule) -> Self {
        self.case = case;
        self
    }

    pub fn case_rule(&self) -> CaseRule {
        self.case
    }

    /// Score an ordered pair of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`MsaqError::Lookup`] if either symbol is not in the table.
    pub fn score(&self, a: u8, b: u8) -> Result<f64> {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => Ok(self.scores[i * self.alphabet.len() + j]),
            _ => Err(MsaqError::Lookup {
                a: a as char,
                b: b as char,
                matrix: self.name.clone(),
            }),
        }
    }

    /// Whether `symbol` can be looked up.
    pub fn contains(&self, symbol: u8) -> bool {
        self.position(symbol).is_some()
    }

    /// Matrix name (e.g. "BLOSUM62").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols in table order.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Whether `score(a, b) == score(b, a)` for every pair of symbols.
    pub fn is_symmetric(&self) -> bool {
        let dim = self.alphabet.len();
        (0..dim).all(|i| ((i + 1)..dim).all(|j| self.scores[i * dim + j] == self.scores[j * dim + i]))
    }

    /// Lowest score in the table.
    pub fn min_score(&self) -> f64 {
        self.scores.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest score in the table.
    pub fn max_score(&self) -> f64 {
        self.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    fn position(&self, symbol: u8) -> Option<usize> {
        let found = match self.index[symbol as usize] {
            NO_INDEX if self.case == CaseRule::Insensitive && symbol.is_ascii_alphabetic() => {
                self.index[(symbol ^ 0x20) as usize]
            }
            i => i,
        };
        (found != NO_INDEX).then_some(found as usize)
    }
}

impl fmt::Debug for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionMatrix")
            .field("name", &self.name)
            .field("alphabet", &String::from_utf8_lossy(&self.alphabet))
            .field("case", &self.case)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SubstitutionMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet && self.scores == other.scores
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = MsaqError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse("CUSTOM", s)
    }
}

impl Summarizable for SubstitutionMatrix {
    fn summary(&self) -> String {
        format!(
            "{}: {} symbols, scores {}..{}{}",
            self.name,
            self.alphabet.len(),
            self.min_score(),
            self.max_score(),
            if self.is_symmetric() { ", symmetric" } else { "" },
        )
    }
}

fn builtin(name: &str, alphabet: &[u8], score: impl Fn(usize, usize) -> i32) -> SubstitutionMatrix {
    let dim = alphabet.len();
    let mut index = [NO_INDEX; 256];
    for (i, &symbol) in alphabet.iter().enumerate() {
        index[symbol as usize] = i as u16;
    }
    SubstitutionMatrix {
        name: name.to_string(),
        alphabet: alphabet.to_vec(),
        index,
        scores: (0..dim * dim).map(|k| score(k / dim, k % dim) as f64).collect(),
        case: CaseRule::default(),
    }
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MatrixParser {
    header: Option<Vec<u8>>,
    rows: Vec<(u8, Vec<f64>)>,
    last_line: usize,
}

impl MatrixParser {
    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.last_line = line_no;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let Some(header) = self.header.as_deref() else {
            self.header = Some(parse_header(line_no, trimmed)?);
            return Ok(());
        };

        let mut fields = trimmed.split_whitespace();
        let label = fields.next().unwrap_or_default();
        let symbol = single_symbol(label).ok_or_else(|| {
            MsaqError::file_format(line_no, format!("row symbol '{label}' is not a single character"))
        })?;
        if !header.contains(&symbol) {
            return Err(MsaqError::file_format(
                line_no,
                format!("row symbol '{}' is not in the header", symbol as char),
            ));
        }
        if self.rows.iter().any(|(s, _)| *s == symbol) {
            return Err(MsaqError::file_format(
                line_no,
                format!("row symbol '{}' appears twice", symbol as char),
            ));
        }

        let values = fields
            .map(|field| {
                field.parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                    MsaqError::file_format(line_no, format!("'{field}' is not a number"))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        if values.len() != header.len() {
            return Err(MsaqError::file_format(
                line_no,
                format!(
                    "row '{}' has {} scores, expected {}",
                    symbol as char,
                    values.len(),
                    header.len()
                ),
            ));
        }
        self.rows.push((symbol, values));
        Ok(())
    }

    fn finish(self, name: String) -> Result<SubstitutionMatrix> {
        let header = self
            .header
            .ok_or_else(|| MsaqError::file_format(self.last_line.max(1), "matrix has no header line"))?;
        let dim = header.len();
        let mut scores = Vec::with_capacity(dim * dim);
        for &symbol in &header {
            let (_, row) = self.rows.iter().find(|(s, _)| *s == symbol).ok_or_else(|| {
                MsaqError::file_format(
                    self.last_line,
                    format!("no row for header symbol '{}'", symbol as char),
                )
            })?;
            scores.extend_from_slice(row);
        }
        SubstitutionMatrix::from_table(name, &header, scores)
            .map_err(|e| MsaqError::file_format(self.last_line, e.to_string()))
    }
}

fn parse_header(line_no: usize, line: &str) -> Result<Vec<u8>> {
    let mut symbols = Vec::new();
    for token in line.split_whitespace() {
        let symbol = single_symbol(token).ok_or_else(|| {
            MsaqError::file_format(line_no, format!("header symbol '{token}' is not a single character"))
        })?;
        if symbols.contains(&symbol) {
            return Err(MsaqError::file_format(
                line_no,
                format!("header symbol '{}' appears twice", symbol as char),
            ));
        }
        symbols.push(symbol);
    }
    Ok(symbols)
}

fn single_symbol(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [b] if b.is_ascii_graphic() => Some(*b),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// A cheap-to-clone handle to a matrix: builtins by `'static` reference,
/// loaded tables behind an [`Arc`].
#[derive(Debug, Clone)]
pub enum SharedMatrix {
    Builtin(&'static SubstitutionMatrix),
    Owned(Arc<SubstitutionMatrix>),
}

impl SharedMatrix {
    /// This handle with lookups under `case`; copies the table only when the
    /// rule changes.
    pub fn with_case_rule(self, case: CaseRule) -> Self {
        if self.case_rule() == case {
            return self;
        }
        let mut matrix = (*self).clone();
        matrix.case = case;
        SharedMatrix::Owned(Arc::new(matrix))
    }
}

impl Deref for SharedMatrix {
    type Target = SubstitutionMatrix;

    fn deref(&self) -> &SubstitutionMatrix {
        match self {
            SharedMatrix::Builtin(m) => m,
            SharedMatrix::Owned(m) => m,
        }
    }
}

impl From<&'static SubstitutionMatrix> for SharedMatrix {
    fn from(m: &'static SubstitutionMatrix) -> Self {
        SharedMatrix::Builtin(m)
    }
}

impl From<SubstitutionMatrix> for SharedMatrix {
    fn from(m: SubstitutionMatrix) -> Self {
        SharedMatrix::Owned(Arc::new(m))
    }
}

impl From<Arc<SubstitutionMatrix>> for SharedMatrix {
    fn from(m: Arc<SubstitutionMatrix>) -> Self {
        SharedMatrix::Owned(m)
    }
}

impl Default for SharedMatrix {
    fn default() -> Self {
        SharedMatrix::Builtin(SubstitutionMatrix::pam250())
    }
}

// ===========================================================================
// NCBI substitution matrix data
// Row/column order: A R N D C Q E G H I L K M F P S T W Y V B Z X *
// ===========================================================================

/// Matrix dimension: 24 amino acid symbols.
const AA_DIM: usize = 24;

const AA_ALPHABET: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

/// BLOSUM62, 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM62: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// PAM250, 24x24 flattened, NCBI/Dayhoff reference.
#[rustfmt::skip]
const PAM250: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     2, -2,  0,  0, -2,  0,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
    -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -8, // R
     0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -8, // N
     0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -6, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
    -2, -4, -4, -5, 12, -5, -5, -3, -3, -2, -6, -5, -5, -4, -3,  0, -2, -8,  0, -2, -4, -5, -3, -8, // C
     0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
     0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
     1, -3,  0,  1, -3, -1,  0,  5, -2, -3, -4, -2, -3, -5,  0,  1,  0, -7, -5, -1,  0,  0, -1, -8, // G
    -1,  2,  2,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -2,  0, -1, -1, -3,  0, -2,  1,  2, -1, -8, // H
    -1, -2, -2, -2, -2, -2, -2, -3, -2,  5,  2, -2,  2,  1, -2, -1,  0, -5, -1,  4, -2, -2, -1, -8, // I
    -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -3, -3, -2, -2, -1,  2, -3, -3, -1, -8, // L
    -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  0, -5, -1,  0,  0, -3, -4, -2,  1,  0, -1, -8, // K
    -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6,  0, -2, -2, -1, -4, -2,  2, -2, -2, -1, -8, // M
    -3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  0,  7, -1, -4, -5, -2, -8, // F
     1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
     1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -8, // S
     1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
    -6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17,  0, -6, -5, -6, -4, -8, // W
    -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10, -2, -3, -4, -2, -8, // Y
     0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -8, // V
     0, -1,  2,  3, -4,  1,  3,  0,  1, -2, -3,  1, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -8, // B
     0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
     0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

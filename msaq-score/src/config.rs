//! Declarative model configuration.
//!
//! [`ScoreConfig`] describes a model and its options as plain data, so a
//! scoring run can be stored or read from a settings file (with the `serde`
//! feature) and turned into a boxed [`Score`] at run time.

use std::path::PathBuf;
use std::sync::Arc;

use msaq_core::{MsaqError, Result};

use crate::column::{CaseRule, ConservationRule, GapTreatment};
use crate::conserved::PercentageOfTotallyConservedColumns;
use crate::contact::ContactMap;
use crate::entropy::{Entropy, EntropySign};
use crate::gap::GapPenalty;
use crate::non_gaps::PercentageOfNonGaps;
use crate::score::{Score, ScoreUnit};
use crate::scoring::{SharedMatrix, SubstitutionMatrix};
use crate::star::{Star, StarCenter};
use crate::strike::{ContactIndexing, Strike};
use crate::sum_of_pairs::SumOfPairs;

/// Which substitution matrix a model uses.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixChoice {
    #[default]
    Pam250,
    Blosum62,
    Dna,
    Identity {
        alphabet: String,
        match_score: f64,
        mismatch_score: f64,
    },
    /// A matrix text file, read when the model is built.
    File(PathBuf),
}

impl MatrixChoice {
    /// Resolve to a matrix handle. Builtins are shared, other choices are built.
    ///
    /// # Errors
    ///
    /// Propagates identity-table and matrix-file errors.
    pub fn load(&self) -> Result<SharedMatrix> {
        Ok(match self {
            MatrixChoice::Pam250 => SubstitutionMatrix::pam250().into(),
            MatrixChoice::Blosum62 => SubstitutionMatrix::blosum62().into(),
            MatrixChoice::Dna => SubstitutionMatrix::dna_default().into(),
            MatrixChoice::Identity {
                alphabet,
                match_score,
                mismatch_score,
            } => SubstitutionMatrix::identity(alphabet.as_bytes(), *match_score, *mismatch_score)?
                .into(),
            MatrixChoice::File(path) => SubstitutionMatrix::from_file(path)?.into(),
        })
    }
}

/// A scoring model and its options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreConfig {
    SumOfPairs {
        matrix: MatrixChoice,
        gap: GapPenalty,
        #[cfg_attr(feature = "serde", serde(default))]
        case: CaseRule,
    },
    Star {
        matrix: MatrixChoice,
        gap: GapPenalty,
        center: StarCenter,
        #[cfg_attr(feature = "serde", serde(default))]
        case: CaseRule,
    },
    Entropy {
        gap_symbol: u8,
        gaps: GapTreatment,
        sign: EntropySign,
        #[cfg_attr(feature = "serde", serde(default))]
        case: CaseRule,
    },
    PercentageOfNonGaps {
        gap_symbol: u8,
        unit: ScoreUnit,
    },
    PercentageOfTotallyConservedColumns {
        gap_symbol: u8,
        rule: ConservationRule,
        unit: ScoreUnit,
        #[cfg_attr(feature = "serde", serde(default))]
        case: CaseRule,
    },
    /// Needs a contact map, see [`ScoreConfig::build_with_contacts`].
    Strike {
        matrix: MatrixChoice,
        gap: GapPenalty,
        indexing: ContactIndexing,
        normalized: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        case: CaseRule,
    },
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig::SumOfPairs {
            matrix: MatrixChoice::default(),
            gap: GapPenalty::default(),
            case: CaseRule::default(),
        }
    }
}

impl ScoreConfig {
    /// The `name()` of the model this configuration builds.
    pub fn name(&self) -> &'static str {
        match self {
            ScoreConfig::SumOfPairs { .. } => "SumOfPairs",
            ScoreConfig::Star { .. } => "Star",
            ScoreConfig::Entropy { .. } => "Entropy",
            ScoreConfig::PercentageOfNonGaps { .. } => "PercentageOfNonGaps",
            ScoreConfig::PercentageOfTotallyConservedColumns { .. } => {
                "PercentageOfTotallyConservedColumns"
            }
            ScoreConfig::Strike { .. } => "STRIKE",
        }
    }

    /// Default options for every model that needs no external data.
    pub fn defaults() -> Vec<ScoreConfig> {
        let gap_symbol = GapPenalty::DEFAULT_SYMBOL;
        vec![
            ScoreConfig::default(),
            ScoreConfig::Star {
                matrix: MatrixChoice::default(),
                gap: GapPenalty::default(),
                center: StarCenter::default(),
                case: CaseRule::default(),
            },
            ScoreConfig::Entropy {
                gap_symbol,
                gaps: GapTreatment::default(),
                sign: EntropySign::default(),
                case: CaseRule::default(),
            },
            ScoreConfig::PercentageOfNonGaps {
                gap_symbol,
                unit: ScoreUnit::default(),
            },
            ScoreConfig::PercentageOfTotallyConservedColumns {
                gap_symbol,
                rule: ConservationRule::default(),
                unit: ScoreUnit::default(),
                case: CaseRule::default(),
            },
        ]
    }

    /// Build the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix cannot be loaded, or for
    /// [`ScoreConfig::Strike`], which needs a contact map.
    pub fn build(&self) -> Result<Box<dyn Score>> {
        self.build_inner(None)
    }

    /// Build the model, handing `contacts` to STRIKE. Other models ignore it.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix cannot be loaded.
    pub fn build_with_contacts(&self, contacts: Arc<ContactMap>) -> Result<Box<dyn Score>> {
        self.build_inner(Some(contacts))
    }

    fn build_inner(&self, contacts: Option<Arc<ContactMap>>) -> Result<Box<dyn Score>> {
        Ok(match self {
            ScoreConfig::SumOfPairs { matrix, gap, case } => Box::new(
                SumOfPairs::new(matrix.load()?.with_case_rule(*case)).with_gap_penalty(*gap),
            ),
            ScoreConfig::Star {
                matrix,
                gap,
                center,
                case,
            } => Box::new(
                Star::new(matrix.load()?.with_case_rule(*case))
                    .with_gap_penalty(*gap)
                    .with_center(*center),
            ),
            ScoreConfig::Entropy {
                gap_symbol,
                gaps,
                sign,
                case,
            } => Box::new(
                Entropy::new()
                    .with_gap_symbol(*gap_symbol)
                    .with_gap_treatment(*gaps)
                    .with_case_rule(*case)
                    .with_sign(*sign),
            ),
            ScoreConfig::PercentageOfNonGaps { gap_symbol, unit } => {
                Box::new(PercentageOfNonGaps::new(*unit).with_gap_symbol(*gap_symbol))
            }
            ScoreConfig::PercentageOfTotallyConservedColumns {
                gap_symbol,
                rule,
                unit,
                case,
            } => Box::new(
                PercentageOfTotallyConservedColumns::new(*rule)
                    .with_gap_symbol(*gap_symbol)
                    .with_case_rule(*case)
                    .with_unit(*unit),
            ),
            ScoreConfig::Strike {
                matrix,
                gap,
                indexing,
                normalized,
                case,
            } => {
                let contacts = contacts.ok_or_else(|| {
                    MsaqError::InvalidInput("STRIKE needs a contact map".into())
                })?;
                Box::new(
                    Strike::new(matrix.load()?.with_case_rule(*case), contacts)
                        .with_gap_penalty(*gap)
                        .with_indexing(*indexing)
                        .normalized(*normalized),
                )
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Alignment;
    use std::io::Write;

    #[test]
    fn builds_every_default_model() {
        let alignment = Alignment::new(&["MKV-", "MRV-"]).unwrap();
        for config in ScoreConfig::defaults() {
            let model = config.build().unwrap();
            assert_eq!(model.name(), config.name());
            assert!(model.evaluate(&alignment).unwrap().is_finite());
        }
    }

    #[test]
    fn identity_matrix_choice() {
        let config = ScoreConfig::SumOfPairs {
            matrix: MatrixChoice::Identity {
                alphabet: "ACGT".into(),
                match_score: 1.0,
                mismatch_score: -1.0,
            },
            gap: GapPenalty::fixed(-2.0).with_gap_gap(-2.0),
            case: CaseRule::Sensitive,
        };
        let model = config.build().unwrap();
        let alignment = Alignment::new(&["AC-T", "AG-T", "AC-A"]).unwrap();
        assert_eq!(model.evaluate(&alignment).unwrap(), -5.0);
    }

    #[test]
    fn strike_requires_contacts() {
        let config = ScoreConfig::Strike {
            matrix: MatrixChoice::Dna,
            gap: GapPenalty::default(),
            indexing: ContactIndexing::Column,
            normalized: false,
            case: CaseRule::Sensitive,
        };
        assert!(matches!(config.build(), Err(MsaqError::InvalidInput(_))));

        let contacts = Arc::new(ContactMap::from_pairs([(0, 1)]).unwrap());
        let model = config.build_with_contacts(contacts).unwrap();
        let alignment = Alignment::new(&["AA", "AA"]).unwrap();
        // A/A scores 2 in both rows
        assert_eq!(model.evaluate(&alignment).unwrap(), 4.0);
    }

    #[test]
    fn file_matrix_choice() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   A  C").unwrap();
        writeln!(file, "A  3 -2").unwrap();
        writeln!(file, "C -2  3").unwrap();
        file.flush().unwrap();

        let choice = MatrixChoice::File(file.path().to_path_buf());
        let matrix = choice.load().unwrap();
        assert_eq!(matrix.score(b'A', b'C').unwrap(), -2.0);

        let missing = MatrixChoice::File(PathBuf::from("/nonexistent/matrix.txt"));
        assert!(matches!(missing.load(), Err(MsaqError::Io(_))));
    }

    #[test]
    fn case_rule_reaches_every_model() {
        let rows = ["Mk", "mK"];
        let alignment = Alignment::new(&rows).unwrap();
        let exact = ScoreConfig::SumOfPairs {
            matrix: MatrixChoice::Blosum62,
            gap: GapPenalty::default(),
            case: CaseRule::Sensitive,
        };
        assert!(matches!(
            exact.build().unwrap().evaluate(&alignment),
            Err(MsaqError::Lookup { .. })
        ));

        let folded = ScoreConfig::SumOfPairs {
            matrix: MatrixChoice::Blosum62,
            gap: GapPenalty::default(),
            case: CaseRule::Insensitive,
        };
        // M/M 5, K/K 5
        assert_eq!(folded.build().unwrap().evaluate(&alignment).unwrap(), 10.0);

        let conserved = ScoreConfig::PercentageOfTotallyConservedColumns {
            gap_symbol: b'-',
            rule: ConservationRule::Strict,
            unit: ScoreUnit::Percentage,
            case: CaseRule::Insensitive,
        };
        assert_eq!(conserved.build().unwrap().evaluate(&alignment).unwrap(), 100.0);

        let entropy = ScoreConfig::Entropy {
            gap_symbol: b'-',
            gaps: GapTreatment::AsSymbol,
            sign: EntropySign::Shannon,
            case: CaseRule::Sensitive,
        };
        let h = entropy.build().unwrap().evaluate(&alignment).unwrap();
        assert!((h - 2.0 * 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn matrix_choice_defaults_to_pam250() {
        assert_eq!(MatrixChoice::default().load().unwrap().name(), "PAM250");
        assert_eq!(MatrixChoice::Blosum62.load().unwrap().name(), "BLOSUM62");
    }
}

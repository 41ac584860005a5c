use std::io::Write;
use std::sync::Arc;

use msaq_core::{MsaqError, Scored, Summarizable};
use msaq_score::{
    score_all, Alignment, CaseRule, ContactIndexing, ContactMap, Entropy, GapPenalty, MatrixChoice,
    PercentageOfNonGaps, PercentageOfTotallyConservedColumns, Score, ScoreConfig, Star,
    StarCenter, Strike, SubstitutionMatrix, SumOfPairs,
};
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const ROWS: [&str; 3] = ["AC-T", "AG-T", "AC-A"];

const NUCLEOTIDE_TABLE: &str = "\
# match +1, mismatch -1
   A  C  G  T
A  1 -1 -1 -1
C -1  1 -1 -1
G -1 -1  1 -1
T -1 -1 -1  1
";

fn matrix_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn hand_computed_sum_of_pairs_from_file_matrix() {
    init_logging();
    let file = matrix_file(NUCLEOTIDE_TABLE);
    let matrix = SubstitutionMatrix::from_file(file.path()).unwrap();
    assert!(matrix.is_symmetric());

    // AAA: +3 ; CGC: -1 -1 +1 ; ---: 3 x -2 ; TTA: +1 -1 -1
    let sop = SumOfPairs::new(matrix).with_gap_penalty(GapPenalty::fixed(-2.0).with_gap_gap(-2.0));
    assert_eq!(sop.compute(&ROWS).unwrap(), -5.0);
}

#[test]
fn truncated_matrix_row_is_a_format_error() {
    init_logging();
    let file = matrix_file("   A  C  G\nA  1 -1 -1\nC -1  1\nG -1 -1  1\n");
    let err = SubstitutionMatrix::from_file(file.path()).unwrap_err();
    match err {
        MsaqError::FileFormat { line, .. } => assert_eq!(line, 3),
        other => panic!("expected a format error, got {other}"),
    }
}

#[test]
fn every_model_on_one_alignment() {
    init_logging();
    let alignment = Alignment::with_names(&[("s1", "MKV-LA"), ("s2", "MRVGLA"), ("s3", "MKI-LA")])
        .unwrap();
    assert_eq!(alignment.summary(), "Alignment: 3 sequences, 6 columns");

    let blosum = SubstitutionMatrix::blosum62();
    let contacts = Arc::new(ContactMap::from_pairs([(0, 5), (1, 4)]).unwrap());
    let sop = SumOfPairs::new(blosum);
    let star = Star::new(blosum).with_center(StarCenter::Consensus);
    let entropy = Entropy::new();
    let non_gaps = PercentageOfNonGaps::default();
    let conserved = PercentageOfTotallyConservedColumns::default();
    let strike = Strike::new(blosum, contacts);

    let models: [&dyn Score; 6] = [&sop, &star, &entropy, &non_gaps, &conserved, &strike];
    let reports = score_all(&alignment, &models).unwrap();
    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "SumOfPairs",
            "Star",
            "Entropy",
            "PercentageOfNonGaps",
            "PercentageOfTotallyConservedColumns",
            "STRIKE",
        ]
    );

    // M, L, A conserved out of six columns
    assert_eq!(reports[4].score(), 50.0);
    // 2 gaps in 18 cells
    assert!((reports[3].score() - 16.0 / 18.0 * 100.0).abs() < 1e-9);
    assert!(reports[2].objective.is_minimization());
    for (report, model) in reports.iter().zip(models) {
        assert_eq!(report.value, model.evaluate(&alignment).unwrap());
        assert_eq!(report.objective, model.objective());
    }
}

#[test]
fn strike_with_structure_numbering() {
    init_logging();
    // Reference row 0 has residues at columns 0, 1, 2, 4, 5
    let rows = ["MKV-LA", "MRVGLA", "MKI-LA"];
    let contacts = ContactMap::from_pairs([(0, 4)]).unwrap();
    let strike = Strike::new(SubstitutionMatrix::blosum62(), contacts)
        .with_indexing(ContactIndexing::Residue { reference_row: 0 });
    // Residues 0 and 4 sit in columns 0 and 5: M/A in every row, BLOSUM62 -1
    assert_eq!(strike.compute(&rows).unwrap(), -3.0);

    let out_of_range = Strike::new(SubstitutionMatrix::blosum62(), ContactMap::from_pairs([(0, 5)]).unwrap())
        .with_indexing(ContactIndexing::Residue { reference_row: 0 });
    assert!(matches!(
        out_of_range.compute(&rows),
        Err(MsaqError::InvalidInput(_))
    ));
}

#[test]
fn configs_built_from_data() {
    init_logging();
    let file = matrix_file(NUCLEOTIDE_TABLE);
    let config = ScoreConfig::Star {
        matrix: MatrixChoice::File(file.path().to_path_buf()),
        gap: GapPenalty::fixed(-2.0).with_gap_gap(0.0),
        center: StarCenter::Row(0),
        case: CaseRule::Sensitive,
    };
    let model = config.build().unwrap();
    // Centre AC-T vs AG-T: +1 -1 0 +1 ; vs AC-A: +1 +1 0 -1
    assert_eq!(model.evaluate(&Alignment::new(&ROWS).unwrap()).unwrap(), 2.0);
}

#[test]
fn unknown_residue_is_a_lookup_error() {
    init_logging();
    let sop = SumOfPairs::new(SubstitutionMatrix::blosum62());
    match sop.compute(&["MKJ", "MKV"]).unwrap_err() {
        MsaqError::Lookup { a, b, matrix } => {
            assert_eq!((a, b), ('J', 'V'));
            assert_eq!(matrix, "BLOSUM62");
        }
        other => panic!("expected a lookup error, got {other}"),
    }
}

#[test]
fn models_are_shareable_across_threads() {
    init_logging();
    let sop = Arc::new(SumOfPairs::new(SubstitutionMatrix::pam250()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sop = Arc::clone(&sop);
            std::thread::spawn(move || sop.compute(&["ACDEFG", "ACDEFG"]).unwrap())
        })
        .collect();
    let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn lowercase_inserts_are_distinct_residues() {
    init_logging();
    // A2M-style rows: lowercase marks insert states
    let rows = ["MKvLA", "MKVLA", "MKvLA"];
    let conserved = PercentageOfTotallyConservedColumns::default();
    assert_eq!(conserved.compute(&rows).unwrap(), 80.0);
    assert!(Entropy::new().compute(&rows).unwrap() > 0.0);
    assert!(matches!(
        SumOfPairs::new(SubstitutionMatrix::blosum62()).compute(&rows),
        Err(MsaqError::Lookup { .. })
    ));

    let folded = conserved.with_case_rule(CaseRule::Insensitive);
    assert_eq!(folded.compute(&rows).unwrap(), 100.0);
    let blosum = SubstitutionMatrix::blosum62().clone().with_case_rule(CaseRule::Insensitive);
    let upper = SumOfPairs::new(SubstitutionMatrix::blosum62()).compute(&["MKVLA"; 3]).unwrap();
    assert_eq!(SumOfPairs::new(blosum).compute(&rows).unwrap(), upper);
}

#[test]
fn non_ascii_rows_are_rejected_before_scoring() {
    init_logging();
    let rows = ["AÄ", "ACG"];
    assert!(matches!(Alignment::new(&rows), Err(MsaqError::InvalidInput(_))));
    assert!(matches!(Entropy::new().compute(&rows), Err(MsaqError::InvalidInput(_))));
    assert!(PercentageOfNonGaps::default().compute(&rows).is_err());
}

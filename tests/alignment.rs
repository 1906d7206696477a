use pairalign::{
    alignment::{
        AlignMode, Aligner, Alignment, AlignmentError, GapModel, GetCode, MatchMismatch, ScoringModel, Sequence,
        Transposed, align,
    },
    data::{DNA_STRICT_MAP, WeightMatrix},
    math::Score,
};

const MODES: [AlignMode; 3] = [AlignMode::Global, AlignMode::Local, AlignMode::Semiglobal];

fn strip<E: Clone>(gapped: &[Option<E>]) -> Vec<E> {
    gapped.iter().flatten().cloned().collect()
}

/// Checks every structural property that must hold for any alignment of `a`
/// and `b`.
fn check_alignment<E, F>(alignment: &Alignment<i32>, mode: AlignMode, scoring: &F, gap: GapModel<i32>, a: &[E], b: &[E])
where
    E: Clone + PartialEq + std::fmt::Debug,
    F: ScoringModel<E, i32>, {
    let (gapped_a, gapped_b) = alignment.view_alignment(a, b);
    assert_eq!(gapped_a.len(), gapped_b.len());
    assert_eq!(strip(&gapped_a), a);
    assert_eq!(strip(&gapped_b), b);
    assert!(!gapped_a.iter().zip(&gapped_b).any(|(x, y)| x.is_none() && y.is_none()));

    let (core_a, core_b) = alignment.aligned_core(a, b);
    assert_eq!(core_a.len(), alignment.aligned_len());
    assert_eq!(core_a.len(), core_b.len());
    assert_eq!(strip(&core_a), &a[alignment.a_range.clone()]);
    assert_eq!(strip(&core_b), &b[alignment.b_range.clone()]);

    assert_eq!(alignment.rescore(a, b, scoring, gap), Ok(alignment.score));
    assert_eq!((alignment.a_len, alignment.b_len), (a.len(), b.len()));

    match mode {
        AlignMode::Global => {
            assert_eq!(alignment.a_range, 0..a.len());
            assert_eq!(alignment.b_range, 0..b.len());
        }
        AlignMode::Local => assert!(alignment.score >= 0),
        AlignMode::Semiglobal => {
            assert!(alignment.a_range.start == 0 || alignment.b_range.start == 0);
            assert!(alignment.a_range.end == a.len() || alignment.b_range.end == b.len());
        }
    }
}

#[test]
fn gap_models_diverge() {
    let (a, b) = (b"AATTTAA", b"AAAA");
    let scoring = MatchMismatch::new(10, -5);

    let linear = align(AlignMode::Local, scoring, GapModel::linear(-10), a, b).unwrap();
    assert_eq!(linear.view_bytes(a, b), (b"AATTT--AA".to_vec(), b"-----AAAA".to_vec()));
    assert_eq!(linear.score, 20);

    let affine = align(AlignMode::Local, scoring, GapModel::affine(-10, -1), a, b).unwrap();
    assert_eq!(affine.view_bytes(a, b), (b"AATTTAA".to_vec(), b"AA---AA".to_vec()));
    assert_eq!(affine.score, 27);
}

#[test]
fn identical_sequences_in_every_mode() {
    let scoring = MatchMismatch::new(1, -1);
    for mode in MODES {
        for gap in [GapModel::linear(-1), GapModel::affine(-2, -1)] {
            let alignment = align(mode, scoring, gap, b"ATGC", b"ATGC").unwrap();
            assert_eq!(alignment.view_bytes(b"ATGC", b"ATGC"), (b"ATGC".to_vec(), b"ATGC".to_vec()));
            assert_eq!(alignment.score, 4);
            assert_eq!(alignment.states.to_string(), "4M");
        }
    }
}

#[test]
fn semiglobal_uses_free_end_gaps() {
    let scoring = MatchMismatch::new(1, -100);
    for gap in [GapModel::affine(-5, -1), GapModel::linear(-1)] {
        let alignment = align(AlignMode::Semiglobal, scoring, gap, b"a", b"z").unwrap();
        assert_eq!(alignment.view_bytes(b"a", b"z"), (b"a-".to_vec(), b"-z".to_vec()));
        assert_eq!(alignment.score, 0);
    }

    let alignment = align(AlignMode::Semiglobal, scoring, GapModel::linear(-1), b"a", b"z").unwrap();
    let (core_a, core_b) = alignment.core_bytes(b"a", b"z");
    assert!(core_a.is_empty() && core_b.is_empty());
}

#[test]
fn semiglobal_corner_needs_a_strictly_better_score() {
    // A mismatch costing nothing ties the corner with the free end gaps
    let scoring = MatchMismatch::new(1, 0);
    for gap in [GapModel::affine(-5, -1), GapModel::linear(-1)] {
        let alignment = align(AlignMode::Semiglobal, scoring, gap, b"a", b"z").unwrap();
        assert_eq!(alignment.view_bytes(b"a", b"z"), (b"a-".to_vec(), b"-z".to_vec()));
        assert_eq!(alignment.score, 0);
        assert_eq!((alignment.a_range.clone(), alignment.b_range.clone()), (1..1, 0..0));
    }

    let (a, b) = (b"GATC", b"GATG");
    let alignment = align(AlignMode::Semiglobal, scoring, GapModel::linear(0), a, b).unwrap();
    check_alignment(&alignment, AlignMode::Semiglobal, &scoring, GapModel::linear(0), a, b);
    assert_eq!(alignment.score, 3);
    assert_eq!(alignment.states.to_string(), "3M1D");
    assert_eq!(alignment.b_range, 0..3);
    assert_eq!(alignment.view_bytes(a, b), (b"GATC-".to_vec(), b"GAT-G".to_vec()));

    // Any gap cost makes the full diagonal strictly better
    for gap in [GapModel::linear(-1), GapModel::affine(-2, -1)] {
        let alignment = align(AlignMode::Semiglobal, scoring, gap, a, b).unwrap();
        assert_eq!(alignment.score, 3);
        assert_eq!(alignment.states.to_string(), "4M");
    }
}

#[test]
fn saturated_scores_keep_a_valid_path() {
    let long = [b'A'; 4000];
    let scoring = MatchMismatch::new(1i16, -1);

    for gap in [GapModel::affine(-10i16, -10), GapModel::linear(-10i16)] {
        let alignment = align(AlignMode::Global, scoring, gap, &long, b"").unwrap();
        assert_eq!(alignment.score, i16::FLOOR);
        assert!(!alignment.score.is_neg_inf());
        assert_eq!(alignment.states.to_string(), "4000D");
        assert_eq!(Aligner::new(AlignMode::Global, scoring, gap).score(&long, b""), Ok(i16::FLOOR));

        // The final match still counts once the gaps have saturated
        let alignment = align(AlignMode::Global, scoring, gap, b"A", &long).unwrap();
        assert_eq!(alignment.score, i16::FLOOR + 1);
        assert_eq!(alignment.states.to_string(), "3999I1M");
        assert_eq!((alignment.a_range.clone(), alignment.b_range.clone()), (0..1, 0..4000));
        let (gapped_a, gapped_b) = alignment.view_bytes(b"A", &long);
        assert_eq!(gapped_a.len(), 4000);
        assert_eq!(gapped_b, long.to_vec());
    }
}

#[test]
fn empty_inputs() {
    let scoring = MatchMismatch::new(1, -1);
    let gap = GapModel::linear(-2);

    let alignment = align(AlignMode::Global, scoring, gap, b"", b"abc").unwrap();
    assert_eq!(alignment.score, -6);
    assert_eq!(alignment.view_bytes(b"", b"abc"), (b"---".to_vec(), b"abc".to_vec()));

    for mode in [AlignMode::Local, AlignMode::Semiglobal] {
        let alignment = align(mode, scoring, gap, b"", b"abc").unwrap();
        assert_eq!(alignment.score, 0);
        assert!(alignment.states.is_empty());
        check_alignment(&alignment, mode, &scoring, gap, b"", b"abc");
    }
}

#[test]
fn generic_elements() {
    let a = ["the", "quick", "brown", "fox", "jumps"];
    let b = ["the", "slow", "fox", "jumps"];
    let scoring = MatchMismatch::new(3, -2);
    let gap = GapModel::affine(-2, -1);

    let alignment = align(AlignMode::Global, scoring, gap, &a, &b).unwrap();
    check_alignment(&alignment, AlignMode::Global, &scoring, gap, &a, &b);
    assert_eq!(alignment.score, 3 - 2 - 3 + 3 + 3);
    assert_eq!(alignment.states.to_string(), "1M1D3M");

    let chars: Vec<char> = "kitten".chars().collect();
    let other: Vec<char> = "sitting".chars().collect();
    let alignment = align(AlignMode::Global, MatchMismatch::new(0, -1), GapModel::linear(-1), &chars, &other).unwrap();
    assert_eq!(alignment.score, -3);
}

#[test]
fn validation_errors() {
    let scoring = MatchMismatch::new(1, -1);

    let error = align(AlignMode::Global, scoring, GapModel::affine(-1, 2), b"A", b"A").unwrap_err();
    assert_eq!(
        error,
        AlignmentError::PositiveGapPenalty {
            parameter: "extend",
            value:     2,
        }
    );
    assert_eq!(error.get_code(), 2);

    let matrix = WeightMatrix::new(&DNA_STRICT_MAP, 2, -3, None);
    let error = align(AlignMode::Local, matrix, GapModel::linear(-2), b"ACXT", b"NCGT").unwrap_err();
    assert_eq!(
        error,
        AlignmentError::UnscorableElement {
            sequence: Sequence::A,
            index:    2,
        }
    );
    let error = align(AlignMode::Local, matrix, GapModel::linear(-2), b"acgu", b"ACNT").unwrap_err();
    assert_eq!(
        error,
        AlignmentError::UnscorableElement {
            sequence: Sequence::B,
            index:    2,
        }
    );

    let aligner = Aligner::new(AlignMode::Global, scoring, GapModel::linear(-1)).with_max_cells(20);
    assert_eq!(
        aligner.align(b"ACGT", b"ACGT"),
        Err(AlignmentError::TooManyCells { cells: 25, limit: 20 })
    );
    assert!(aligner.align(b"ACG", b"ACGT").is_ok());

    // Gap penalties are checked first
    let aligner = Aligner::new(AlignMode::Global, scoring, GapModel::linear(3)).with_max_cells(1);
    assert!(matches!(
        aligner.score(b"ACGT", b"ACGT"),
        Err(AlignmentError::PositiveGapPenalty { .. })
    ));
}

#[test]
fn weight_matrix_alignment() {
    let matrix = WeightMatrix::new(&DNA_STRICT_MAP, 2, -3, None);
    let (a, b) = (b"acgtACGT", b"CGTUACG");
    let gap = GapModel::affine(-5, -2);

    let alignment = align(AlignMode::Local, matrix, gap, a, b).unwrap();
    check_alignment(&alignment, AlignMode::Local, &matrix, gap, a, b);
    assert_eq!(alignment.score, 8);
    assert_eq!(alignment.states.to_string(), "4M");
    assert_eq!(alignment.core_bytes(a, b), (b"tACG".to_vec(), b"UACG".to_vec()));
}

#[cfg(feature = "rand")]
mod randomized {
    use super::*;
    use pairalign::generate::rand_sequence;

    fn cases() -> impl Iterator<Item = (Vec<u8>, Vec<u8>)> {
        (0..40u64).map(|seed| {
            let a = rand_sequence(b"ACGT", (seed % 17) as usize, seed);
            let b = rand_sequence(b"ACGT", ((seed * 7) % 13) as usize, seed + 1_000);
            (a, b)
        })
    }

    fn asymmetric(x: &u8, y: &u8) -> i32 {
        match (x, y) {
            _ if x == y => 3,
            (b'A', _) => -1,
            (_, b'A') => -4,
            _ => -2,
        }
    }

    const GAPS: [GapModel<i32>; 4] = [
        GapModel::linear(-2),
        GapModel::linear(0),
        GapModel::affine(-4, -1),
        GapModel::affine(0, -3),
    ];

    #[test]
    fn structural_properties() {
        let scoring = MatchMismatch::new(4, -3);
        for (a, b) in cases() {
            let (a, b) = (a.as_slice(), b.as_slice());
            for mode in MODES {
                for gap in GAPS {
                    let aligner = Aligner::new(mode, scoring, gap);
                    let alignment = aligner.align(a, b).unwrap();
                    check_alignment(&alignment, mode, &scoring, gap, a, b);
                    assert_eq!(aligner.score(a, b), Ok(alignment.score));
                }
            }
        }
    }

    const NARROW_GAPS: [GapModel<i16>; 4] = [
        GapModel::linear(-2),
        GapModel::linear(0),
        GapModel::affine(-4, -1),
        GapModel::affine(0, -3),
    ];

    fn widen<S: Score + From<i16>>(gap: GapModel<i16>) -> GapModel<S> {
        match gap {
            GapModel::Linear { cost } => GapModel::linear(cost.into()),
            GapModel::Affine { open, extend } => GapModel::affine(open.into(), extend.into()),
        }
    }

    #[test]
    fn score_types_agree() {
        for (a, b) in cases() {
            let (a, b) = (a.as_slice(), b.as_slice());
            for mode in MODES {
                for gap in NARROW_GAPS {
                    let narrow = align(mode, MatchMismatch::new(4i16, -3), gap, a, b).unwrap();
                    let wide = align(mode, MatchMismatch::new(4i64, -3), widen::<i64>(gap), a, b).unwrap();
                    let default = align(mode, MatchMismatch::new(4i32, -3), widen::<i32>(gap), a, b).unwrap();

                    assert_eq!(i32::from(narrow.score), default.score);
                    assert_eq!(wide.score, i64::from(default.score));
                    assert_eq!(narrow.states, default.states);
                    assert_eq!(wide.states, default.states);
                    assert_eq!((&narrow.a_range, &narrow.b_range), (&default.a_range, &default.b_range));
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        let scoring = MatchMismatch::new(1, -1);
        for (a, b) in cases() {
            for mode in MODES {
                let first = align(mode, scoring, GapModel::affine(-1, -1), a.as_slice(), b.as_slice()).unwrap();
                let second = align(mode, scoring, GapModel::affine(-1, -1), a.as_slice(), b.as_slice()).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn swapping_sequences_transposes_scoring() {
        let transposed = Transposed(asymmetric);
        for (a, b) in cases() {
            let (a, b) = (a.as_slice(), b.as_slice());
            for mode in MODES {
                for gap in GAPS {
                    let forward = align(mode, asymmetric, gap, a, b).unwrap();
                    let backward = align(mode, transposed, gap, b, a).unwrap();
                    assert_eq!(forward.score, backward.score);
                    check_alignment(&backward, mode, &transposed, gap, b, a);

                    // The inverted path is also optimal for the swapped problem
                    let inverted = forward.invert();
                    assert_eq!(inverted.rescore(b, a, &transposed, gap), Ok(forward.score));
                    assert_eq!(inverted.view_alignment(b, a).0.len(), forward.view_alignment(a, b).0.len());
                }
            }
        }
    }
}

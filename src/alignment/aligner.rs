use crate::{
    alignment::{
        AlignMode, Alignment, AlignmentError, GapModel, ScoringModel, Sequence,
        engine::{fill_and_traceback, fill_score},
        recurrence::{AffineRecurrence, LinearRecurrence},
        scoring::first_uncovered,
    },
    math::Score,
};
use log::debug;

/// A complete alignment configuration: the mode, the substitution scoring
/// model, the gap model, and an optional limit on the size of the dynamic
/// programming matrices.
///
/// The configuration is immutable once built and can be reused for any number
/// of sequence pairs. Every call allocates its own matrices, so an [`Aligner`]
/// may be shared between threads whenever the scoring model allows it.
///
/// ## Example
///
/// ```
/// # use pairalign::alignment::{AlignMode, Aligner, AlignmentError, GapModel, MatchMismatch};
/// let aligner = Aligner::new(AlignMode::Semiglobal, MatchMismatch::new(10, -5), GapModel::linear(-3))
///     .with_max_cells(1_000);
///
/// let alignment = aligner.align(b"CCGATTA", b"GAT").unwrap();
/// assert_eq!(alignment.score, 30);
/// assert_eq!(alignment.a_range, 2..5);
///
/// let long = vec![b'A'; 1_000];
/// assert!(matches!(aligner.align(long.as_slice(), b"GAT"), Err(AlignmentError::TooManyCells { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Aligner<S, F> {
    /// The alignment semantics
    pub mode:      AlignMode,
    /// The substitution scoring model
    pub scoring:   F,
    /// The gap penalty model
    pub gap:       GapModel<S>,
    /// The largest number of cells a single matrix may have
    pub max_cells: Option<usize>,
}

impl<S: Score, F> Aligner<S, F> {
    /// Creates a new aligner without a limit on the matrix size.
    #[inline]
    #[must_use]
    pub const fn new(mode: AlignMode, scoring: F, gap: GapModel<S>) -> Self {
        Aligner {
            mode,
            scoring,
            gap,
            max_cells: None,
        }
    }

    /// Rejects any pair of sequences whose matrices would have more than
    /// `max_cells` cells. A pair of lengths $n$ and $m$ needs $(n+1)(m+1)$
    /// cells per matrix.
    #[inline]
    #[must_use]
    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    /// Checks the configuration and both sequences before any matrix is
    /// allocated.
    ///
    /// ## Errors
    ///
    /// In order of precedence:
    /// - [`AlignmentError::PositiveGapPenalty`] if a gap penalty is positive
    /// - [`AlignmentError::UnscorableElement`] for the first element the
    ///   scoring model does not cover, searching A before B
    /// - [`AlignmentError::TooManyCells`] if the matrices would exceed
    ///   `max_cells`
    pub fn validate<E>(&self, a: &[E], b: &[E]) -> Result<(), AlignmentError>
    where
        F: ScoringModel<E, S>, {
        self.gap.validate()?;

        if let Some(index) = first_uncovered(&self.scoring, a) {
            return Err(AlignmentError::UnscorableElement {
                sequence: Sequence::A,
                index,
            });
        }
        if let Some(index) = first_uncovered(&self.scoring, b) {
            return Err(AlignmentError::UnscorableElement {
                sequence: Sequence::B,
                index,
            });
        }

        if let Some(limit) = self.max_cells {
            let cells = (a.len() + 1).saturating_mul(b.len() + 1);
            if cells > limit {
                return Err(AlignmentError::TooManyCells { cells, limit });
            }
        }

        Ok(())
    }

    /// Computes an optimal alignment of `a` against `b`.
    ///
    /// ## Errors
    ///
    /// Any error from [`validate`] is returned before any matrix work begins.
    /// Once validated, the alignment cannot fail.
    ///
    /// [`validate`]: Aligner::validate
    pub fn align<E>(&self, a: &[E], b: &[E]) -> Result<Alignment<S>, AlignmentError>
    where
        F: ScoringModel<E, S>, {
        self.validate(a, b)?;
        debug!(
            "Aligning {} x {} residues ({} mode, {} gaps)",
            a.len(),
            b.len(),
            self.mode,
            if self.gap.is_affine() { "affine" } else { "linear" }
        );

        let alignment = match self.gap {
            GapModel::Linear { cost } => {
                let rec = LinearRecurrence::new(a.len(), b.len(), cost);
                fill_and_traceback(rec, self.mode, &self.scoring, a, b)
            }
            GapModel::Affine { open, extend } => {
                let rec = AffineRecurrence::new(a.len(), b.len(), open, extend);
                fill_and_traceback(rec, self.mode, &self.scoring, a, b)
            }
        };
        Ok(alignment)
    }

    /// Computes only the optimal score of aligning `a` against `b`. This
    /// equals the score of [`align`], but skips the traceback.
    ///
    /// ## Errors
    ///
    /// Same as [`align`].
    ///
    /// [`align`]: Aligner::align
    pub fn score<E>(&self, a: &[E], b: &[E]) -> Result<S, AlignmentError>
    where
        F: ScoringModel<E, S>, {
        self.validate(a, b)?;

        let score = match self.gap {
            GapModel::Linear { cost } => {
                fill_score(LinearRecurrence::new(a.len(), b.len(), cost), self.mode, &self.scoring, a, b)
            }
            GapModel::Affine { open, extend } => fill_score(
                AffineRecurrence::new(a.len(), b.len(), open, extend),
                self.mode,
                &self.scoring,
                a,
                b,
            ),
        };
        Ok(score)
    }
}

/// Computes an optimal alignment of `a` against `b` under the given mode,
/// scoring model, and gap model.
///
/// This is shorthand for [`Aligner::new`] followed by [`Aligner::align`], with
/// no limit on the matrix size.
///
/// ## Errors
///
/// See [`Aligner::validate`].
///
/// ## Example
///
/// ```
/// # use pairalign::alignment::{AlignMode, GapModel, MatchMismatch, align};
/// let scoring = MatchMismatch::new(10, -5);
/// let (a, b) = (b"AATTTAA", b"AAAA");
///
/// let linear = align(AlignMode::Local, scoring, GapModel::linear(-10), a, b).unwrap();
/// assert_eq!(linear.view_bytes(a, b), (b"AATTT--AA".to_vec(), b"-----AAAA".to_vec()));
///
/// let affine = align(AlignMode::Local, scoring, GapModel::affine(-10, -1), a, b).unwrap();
/// assert_eq!(affine.view_bytes(a, b), (b"AATTTAA".to_vec(), b"AA---AA".to_vec()));
/// assert_eq!(affine.states.to_string(), "2M3D2M");
/// ```
#[inline]
pub fn align<E, S, F>(
    mode: AlignMode, scoring: F, gap: GapModel<S>, a: &[E], b: &[E],
) -> Result<Alignment<S>, AlignmentError>
where
    S: Score,
    F: ScoringModel<E, S>, {
    Aligner::new(mode, scoring, gap).align(a, b)
}

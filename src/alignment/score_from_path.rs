use crate::{
    alignment::{Alignment, Ciglet, GapModel, ScoringError, ScoringModel},
    math::Score,
};

/// Given the alignment states `ciglets`, recomputes the score of the path
/// through `a` and `b` from scratch.
///
/// `a` and `b` should contain exactly the aligned portions of the two
/// sequences. Every `M`, `=`, or `X` column adds the substitution score, and
/// every maximal run of `D` (or of `I`) adds the gap cost of a run of that
/// length. A `D` run directly followed by an `I` run is charged as two runs.
///
/// ## Errors
///
/// - [`ScoringError::AEnded`] or [`ScoringError::BEnded`] if the path runs
///   past the end of a sequence
/// - [`ScoringError::FullANotUsed`] or [`ScoringError::FullBNotUsed`] if the
///   path does not consume a sequence entirely
/// - [`ScoringError::InvalidOp`] for any other operation
///
/// ## Example
///
/// ```
/// # use pairalign::alignment::{AlignmentStates, GapModel, MatchMismatch, score_from_path};
/// let states = AlignmentStates::try_from("2M3D2M").unwrap();
/// let scoring = MatchMismatch::new(10, -5);
///
/// let score = score_from_path(&states, b"AATTTAA", b"AAAA", &scoring, GapModel::affine(-10, -1));
/// assert_eq!(score, Ok(27));
/// ```
pub fn score_from_path<E, S, F>(
    ciglets: impl IntoIterator<Item = Ciglet>, a: &[E], b: &[E], scoring: &F, gap: GapModel<S>,
) -> Result<S, ScoringError>
where
    S: Score,
    F: ScoringModel<E, S>, {
    let mut score = S::ZERO;
    let (mut i, mut j) = (0, 0);

    // The pending gap run, flushed whenever the operation changes
    let mut run: Option<(u8, usize)> = None;

    for Ciglet { inc, op } in ciglets {
        if let Some((run_op, len)) = run
            && run_op != op
        {
            score = score.add_score(gap.run_cost(len));
            run = None;
        }

        match op {
            b'M' | b'=' | b'X' => {
                let a_end = i + inc;
                let b_end = j + inc;
                let Some(a_part) = a.get(i..a_end) else {
                    return Err(ScoringError::AEnded);
                };
                let Some(b_part) = b.get(j..b_end) else {
                    return Err(ScoringError::BEnded);
                };
                for (x, y) in a_part.iter().zip(b_part) {
                    score = score.add_score(scoring.score(x, y));
                }
                (i, j) = (a_end, b_end);
            }
            b'D' => {
                i += inc;
                if i > a.len() {
                    return Err(ScoringError::AEnded);
                }
                run = Some((op, run.map_or(0, |(_, len)| len) + inc));
            }
            b'I' => {
                j += inc;
                if j > b.len() {
                    return Err(ScoringError::BEnded);
                }
                run = Some((op, run.map_or(0, |(_, len)| len) + inc));
            }
            _ => return Err(ScoringError::InvalidOp(op)),
        }
    }

    if let Some((_, len)) = run {
        score = score.add_score(gap.run_cost(len));
    }

    if i < a.len() {
        Err(ScoringError::FullANotUsed)
    } else if j < b.len() {
        Err(ScoringError::FullBNotUsed)
    } else {
        Ok(score)
    }
}

impl<S: Score> Alignment<S> {
    /// Recomputes the score of this alignment from its states using
    /// [`score_from_path`]. `a` and `b` should be the full sequences
    /// originally passed to the aligner.
    ///
    /// For any alignment produced by this crate, the result equals
    /// [`Alignment::score`] when the same scoring and gap models are used.
    ///
    /// ## Errors
    ///
    /// See [`score_from_path`]. A range out of bounds for `a` or `b` is
    /// reported as [`ScoringError::AEnded`] or [`ScoringError::BEnded`].
    pub fn rescore<E, F>(&self, a: &[E], b: &[E], scoring: &F, gap: GapModel<S>) -> Result<S, ScoringError>
    where
        F: ScoringModel<E, S>, {
        let a = a.get(self.a_range.clone()).ok_or(ScoringError::AEnded)?;
        let b = b.get(self.b_range.clone()).ok_or(ScoringError::BEnded)?;
        score_from_path(&self.states, a, b, scoring, gap)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alignment::{AlignmentStates, MatchMismatch};

    const SCORING: MatchMismatch<i32> = MatchMismatch::new(10, -5);

    fn states(s: &str) -> AlignmentStates {
        AlignmentStates::try_from(s).unwrap()
    }

    #[test]
    fn gap_runs() {
        let affine = GapModel::affine(-10, -1);
        let linear = GapModel::linear(-10);

        assert_eq!(score_from_path(&states("2M3D2M"), b"AATTTAA", b"AAAA", &SCORING, affine), Ok(27));
        assert_eq!(score_from_path(&states("2M3D2M"), b"AATTTAA", b"AAAA", &SCORING, linear), Ok(10));

        // Adjacent runs of different kinds are opened separately
        assert_eq!(score_from_path(&states("1D1I"), b"A", b"C", &SCORING, affine), Ok(-22));
    }

    #[test]
    fn unmerged_runs_are_joined() {
        let ciglets = [Ciglet { inc: 1, op: b'D' }, Ciglet { inc: 2, op: b'D' }];
        let score = score_from_path(ciglets, b"AAA", b"", &SCORING, GapModel::affine(-10, -1));
        assert_eq!(score, Ok(-13));
    }

    #[test]
    fn path_errors() {
        let gap = GapModel::linear(-1);
        assert_eq!(
            score_from_path(&states("3M"), b"AA", b"AAA", &SCORING, gap),
            Err(ScoringError::AEnded)
        );
        assert_eq!(
            score_from_path(&states("2I"), b"", b"A", &SCORING, gap),
            Err(ScoringError::BEnded)
        );
        assert_eq!(
            score_from_path(&states("1M"), b"AA", b"A", &SCORING, gap),
            Err(ScoringError::FullANotUsed)
        );
        assert_eq!(
            score_from_path(&states("1M"), b"A", b"AG", &SCORING, gap),
            Err(ScoringError::FullBNotUsed)
        );
        let ciglets = [Ciglet { inc: 1, op: b'S' }];
        assert_eq!(
            score_from_path(ciglets, b"A", b"A", &SCORING, gap),
            Err(ScoringError::InvalidOp(b'S'))
        );
    }

    #[test]
    fn rescore_uses_ranges() {
        let alignment = Alignment {
            score:   20,
            a_range: 5..7,
            b_range: 2..4,
            states:  states("2M"),
            a_len:   7,
            b_len:   4,
        };
        assert_eq!(
            alignment.rescore(b"AATTTAA", b"AAAA", &SCORING, GapModel::linear(-10)),
            Ok(20)
        );
    }
}

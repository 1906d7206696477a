use crate::math::Score;

/// A substitution scoring model, mapping a pair of elements to a score.
///
/// The first argument is always the element from sequence A and the second is
/// from sequence B; the model does not need to be symmetric. Any closure or
/// function `Fn(&E, &E) -> S` is a scoring model.
///
/// A model may be partial over the element type. In that case it should
/// override [`covers`], which is checked for every element of both sequences
/// before any matrix work begins.
///
/// [`covers`]: ScoringModel::covers
pub trait ScoringModel<E, S: Score> {
    /// The score of aligning `a` (from sequence A) against `b` (from
    /// sequence B).
    fn score(&self, a: &E, b: &E) -> S;

    /// Whether the model defines scores for `element`.
    #[inline]
    fn covers(&self, _element: &E) -> bool {
        true
    }
}

impl<E, S, F> ScoringModel<E, S> for F
where
    S: Score,
    F: Fn(&E, &E) -> S,
{
    #[inline]
    fn score(&self, a: &E, b: &E) -> S {
        self(a, b)
    }
}

/// A scoring model giving one score to equal elements and another to unequal
/// elements.
///
/// ## Example
///
/// ```
/// # use pairalign::alignment::{MatchMismatch, ScoringModel};
/// let scoring = MatchMismatch::new(2, -3);
/// assert_eq!(scoring.score(&b'A', &b'A'), 2);
/// assert_eq!(scoring.score(&b'A', &b'T'), -3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchMismatch<S> {
    pub matching: S,
    pub mismatch: S,
}

impl<S: Score> MatchMismatch<S> {
    #[inline]
    #[must_use]
    pub const fn new(matching: S, mismatch: S) -> Self {
        MatchMismatch { matching, mismatch }
    }
}

impl<E: PartialEq, S: Score> ScoringModel<E, S> for MatchMismatch<S> {
    #[inline]
    fn score(&self, a: &E, b: &E) -> S {
        if a == b { self.matching } else { self.mismatch }
    }
}

/// Wraps a scoring model so that its arguments are swapped, giving
/// `scoring'(x, y) = scoring(y, x)`.
///
/// Aligning B against A with the transposed model yields the same optimal
/// score as aligning A against B with the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transposed<T>(pub T);

impl<E, S: Score, T: ScoringModel<E, S>> ScoringModel<E, S> for Transposed<T> {
    #[inline]
    fn score(&self, a: &E, b: &E) -> S {
        self.0.score(b, a)
    }

    #[inline]
    fn covers(&self, element: &E) -> bool {
        self.0.covers(element)
    }
}

/// Returns the position of the first element of `seq` not covered by
/// `scoring`.
#[inline]
pub(crate) fn first_uncovered<E, S: Score, F: ScoringModel<E, S>>(scoring: &F, seq: &[E]) -> Option<usize> {
    seq.iter().position(|element| !scoring.covers(element))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_models() {
        let scoring = |a: &char, b: &char| if a == b { 5i32 } else { -4 };
        assert_eq!(scoring.score(&'a', &'a'), 5);
        assert_eq!(first_uncovered(&scoring, &['a', 'b']), None);
    }

    #[test]
    fn transposed_swaps_arguments() {
        let scoring = |a: &u8, b: &u8| i32::from(*a) - i32::from(*b);
        let transposed = Transposed(scoring);
        assert_eq!(scoring.score(&10, &3), 7);
        assert_eq!(transposed.score(&10, &3), -7);
    }
}

//! The fill and traceback loops shared by every combination of
//! [`AlignMode`] and gap model.
//!
//! The matrices are filled row by row (rows follow sequence A), after which
//! the traceback walks from the start cell chosen by the mode back to a
//! terminal cell, emitting one state per move. The states are collected in
//! reverse and flipped once at the end.

use crate::{
    alignment::{AlignMode, Alignment, AlignmentStates, ScoringModel, recurrence::Recurrence},
    math::Score,
};
use log::{debug, trace};

/// Fills every cell of `rec` for sequences `a` and `b`.
pub(crate) fn fill<E, S, F, R>(rec: &mut R, mode: AlignMode, scoring: &F, a: &[E], b: &[E])
where
    S: Score,
    F: ScoringModel<E, S>,
    R: Recurrence<S>, {
    rec.init_borders(mode);

    let floor = mode.floors_at_zero();
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            rec.fill_cell(i + 1, j + 1, scoring.score(x, y), floor);
        }
    }
}

/// Fills the matrices and returns the score at the start cell, without
/// performing the traceback.
pub(crate) fn fill_score<E, S, F, R>(mut rec: R, mode: AlignMode, scoring: &F, a: &[E], b: &[E]) -> S
where
    S: Score,
    F: ScoringModel<E, S>,
    R: Recurrence<S>, {
    fill(&mut rec, mode, scoring, a, b);
    let (i, j) = mode.start_cell(a.len(), b.len(), |i, j| rec.value(i, j));
    rec.value(i, j)
}

/// Fills the matrices and reconstructs an optimal alignment.
///
/// Whenever several moves reach the value of the current state, the diagonal
/// is preferred, then the move consuming A, then the move consuming B.
pub(crate) fn fill_and_traceback<E, S, F, R>(
    mut rec: R, mode: AlignMode, scoring: &F, a: &[E], b: &[E],
) -> Alignment<S>
where
    S: Score,
    F: ScoringModel<E, S>,
    R: Recurrence<S>, {
    fill(&mut rec, mode, scoring, a, b);

    let (start_i, start_j) = mode.start_cell(a.len(), b.len(), |i, j| rec.value(i, j));
    let score = rec.value(start_i, start_j);
    let mut state = rec.start_state(start_i, start_j);
    trace!("Traceback starts at ({start_i}, {start_j}) in state {state:?}");

    let mut states = AlignmentStates::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (start_i, start_j);
    while !mode.is_terminal(i, j, rec.restarts_at(i, j, state)) {
        let substitution = if i > 0 && j > 0 {
            scoring.score(&a[i - 1], &b[j - 1])
        } else {
            S::ZERO
        };

        let (step, previous) = rec.step(i, j, state, substitution);
        states.add_state(step.op());
        (i, j) = step.retreat(i, j);
        state = previous;
    }
    states.make_reverse();

    debug!("Aligned ({start_i}, {start_j}) back to ({i}, {j}) with score {score}: {states}");

    Alignment {
        score,
        a_range: i..start_i,
        b_range: j..start_j,
        states,
        a_len: a.len(),
        b_len: b.len(),
    }
}

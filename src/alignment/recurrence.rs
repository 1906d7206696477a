//! Per-gap-model dynamic programming recurrences.
//!
//! Definitions used throughout:
//! * A[i] = i-th residue of sequence A, one-indexed here to match the matrix
//! * B[j] = j-th residue of sequence B
//! * W[i,j] = substitution score of aligning A[i] against B[j]
//! * H[i,j] = best score for aligning A[1..=i] with B[1..=j]
//! * M[i,j] = best score such that the alignment ends with A[i] against B[j]
//! * X[i,j] = best score such that the alignment ends with a gap consuming
//!   A[i] (a `D` state)
//! * Y[i,j] = best score such that the alignment ends with a gap consuming
//!   B[j] (an `I` state)

use crate::{
    alignment::{AlignMode, matrix::DpMatrix},
    math::Score,
};

/// A single traceback move, naming the residues it consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Consumes A[i] and B[j]
    Diagonal,
    /// Consumes A[i] against a gap
    ConsumeA,
    /// Consumes B[j] against a gap
    ConsumeB,
}

impl Step {
    /// The alignment state emitted for this move.
    #[inline]
    pub(crate) const fn op(self) -> u8 {
        match self {
            Step::Diagonal => b'M',
            Step::ConsumeA => b'D',
            Step::ConsumeB => b'I',
        }
    }

    /// The cell preceding `(i, j)` along this move.
    #[inline]
    pub(crate) const fn retreat(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Step::Diagonal => (i - 1, j - 1),
            Step::ConsumeA => (i - 1, j),
            Step::ConsumeB => (i, j - 1),
        }
    }
}

/// The per-gap-model part of the dynamic programming engine.
///
/// The fill and traceback loops live in the engine and are shared by every
/// combination of [`AlignMode`] and gap model; implementors only supply the
/// border initialization, the cell update, and the choice of predecessor.
/// Predecessors are always chosen in the order [`Step::Diagonal`],
/// [`Step::ConsumeA`], [`Step::ConsumeB`].
pub(crate) trait Recurrence<S: Score> {
    /// Which matrix the traceback is currently walking.
    type State: Copy + std::fmt::Debug;

    /// Sets row 0 and column 0 according to `mode`.
    fn init_borders(&mut self, mode: AlignMode);

    /// Computes cell `(i, j)` for `i, j >= 1` given W[i,j]. Cells above, to
    /// the left, and diagonally above must already be filled.
    fn fill_cell(&mut self, i: usize, j: usize, substitution: S, floor_at_zero: bool);

    /// The best score of cell `(i, j)` over all states.
    fn value(&self, i: usize, j: usize) -> S;

    /// The state the traceback starts in at cell `(i, j)`.
    fn start_state(&self, i: usize, j: usize) -> Self::State;

    /// Whether `state` at cell `(i, j)` is a zero from which a local alignment
    /// may start fresh. Only states floored at zero qualify.
    fn restarts_at(&self, i: usize, j: usize, state: Self::State) -> bool;

    /// Chooses the move producing `state` at cell `(i, j)` and the state of
    /// its predecessor. `substitution` is W[i,j] when both `i` and `j` are
    /// non-zero.
    fn step(&self, i: usize, j: usize, state: Self::State, substitution: S) -> (Step, Self::State);
}

/// Single-matrix recurrence for a linear gap penalty `g`:
///
/// H[i,j] = max(H[i-1,j-1] + W[i,j], H[i-1,j] + g, H[i,j-1] + g)
#[derive(Clone, Debug)]
pub(crate) struct LinearRecurrence<S> {
    h:    DpMatrix<S>,
    gap:  S,
    rows: usize,
    cols: usize,
}

impl<S: Score> LinearRecurrence<S> {
    pub(crate) fn new(a_len: usize, b_len: usize, gap: S) -> Self {
        LinearRecurrence {
            h: DpMatrix::new(a_len + 1, b_len + 1, S::ZERO),
            gap,
            rows: a_len,
            cols: b_len,
        }
    }
}

impl<S: Score> Recurrence<S> for LinearRecurrence<S> {
    type State = ();

    fn init_borders(&mut self, mode: AlignMode) {
        if !mode.charges_borders() {
            // Already zero
            return;
        }

        for i in 1..=self.rows {
            self.h[(i, 0)] = self.h[(i - 1, 0)].add_score(self.gap);
        }
        for j in 1..=self.cols {
            self.h[(0, j)] = self.h[(0, j - 1)].add_score(self.gap);
        }
    }

    #[inline]
    fn fill_cell(&mut self, i: usize, j: usize, substitution: S, floor_at_zero: bool) {
        let diagonal = self.h[(i - 1, j - 1)].add_score(substitution);
        let up = self.h[(i - 1, j)].add_score(self.gap);
        let left = self.h[(i, j - 1)].add_score(self.gap);

        let mut h = diagonal.max(up).max(left);
        if floor_at_zero {
            h = h.max(S::ZERO);
        }
        self.h[(i, j)] = h;
    }

    #[inline]
    fn value(&self, i: usize, j: usize) -> S {
        self.h[(i, j)]
    }

    #[inline]
    fn start_state(&self, _i: usize, _j: usize) -> Self::State {}

    #[inline]
    fn restarts_at(&self, i: usize, j: usize, _state: Self::State) -> bool {
        self.h[(i, j)] == S::ZERO
    }

    fn step(&self, i: usize, j: usize, _state: Self::State, substitution: S) -> (Step, Self::State) {
        let h = self.h[(i, j)];

        if i > 0 && j > 0 && self.h[(i - 1, j - 1)].add_score(substitution) == h {
            (Step::Diagonal, ())
        } else if i > 0 && (j == 0 || self.h[(i - 1, j)].add_score(self.gap) == h) {
            (Step::ConsumeA, ())
        } else {
            (Step::ConsumeB, ())
        }
    }
}

/// The matrix an affine traceback is walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AffineState {
    M,
    X,
    Y,
}

/// Three-state recurrence of Gotoh for an affine gap penalty $o + k \cdot e$:
///
/// * M[i,j] = W[i,j] + max(M[i-1,j-1], X[i-1,j-1], Y[i-1,j-1])
/// * X[i,j] = max(M[i-1,j] + o + e, X[i-1,j] + e, Y[i-1,j] + o + e)
/// * Y[i,j] = max(M[i,j-1] + o + e, Y[i,j-1] + e, X[i,j-1] + o + e)
///
/// Unreachable states hold [`Score::NEG_INF`].
#[derive(Clone, Debug)]
pub(crate) struct AffineRecurrence<S> {
    m:          DpMatrix<S>,
    x:          DpMatrix<S>,
    y:          DpMatrix<S>,
    gap_open:   S,
    gap_extend: S,
    rows:       usize,
    cols:       usize,
}

impl<S: Score> AffineRecurrence<S> {
    pub(crate) fn new(a_len: usize, b_len: usize, gap_open: S, gap_extend: S) -> Self {
        let (rows, cols) = (a_len + 1, b_len + 1);
        AffineRecurrence {
            m: DpMatrix::new(rows, cols, S::NEG_INF),
            x: DpMatrix::new(rows, cols, S::NEG_INF),
            y: DpMatrix::new(rows, cols, S::NEG_INF),
            gap_open,
            gap_extend,
            rows: a_len,
            cols: b_len,
        }
    }

    /// The penalty for the first gap of a run.
    #[inline]
    fn opening(&self) -> S {
        self.gap_open.add_score(self.gap_extend)
    }

    #[inline]
    fn next_x(&self, i: usize, j: usize) -> S {
        let open = self.opening();
        let from_m = self.m[(i - 1, j)].add_score(open);
        let from_x = self.x[(i - 1, j)].add_score(self.gap_extend);
        let from_y = self.y[(i - 1, j)].add_score(open);
        from_m.max(from_x).max(from_y)
    }

    #[inline]
    fn next_y(&self, i: usize, j: usize) -> S {
        let open = self.opening();
        let from_m = self.m[(i, j - 1)].add_score(open);
        let from_y = self.y[(i, j - 1)].add_score(self.gap_extend);
        let from_x = self.x[(i, j - 1)].add_score(open);
        from_m.max(from_y).max(from_x)
    }

    #[inline]
    fn state_score(&self, i: usize, j: usize, state: AffineState) -> S {
        match state {
            AffineState::M => self.m[(i, j)],
            AffineState::X => self.x[(i, j)],
            AffineState::Y => self.y[(i, j)],
        }
    }

    /// Whether `state` can hold a path ending at `(i, j)`.
    #[inline]
    fn reachable(&self, i: usize, j: usize, state: AffineState) -> bool {
        !self.state_score(i, j, state).is_neg_inf()
    }

    /// The first reachable state at `(i, j)` whose score plus `weight` equals
    /// `target`, checking M, then X, then Y. Falls back to a state that can
    /// still move off the border, which only happens if the matrices are
    /// inconsistent.
    #[inline]
    fn predecessor(&self, i: usize, j: usize, target: S, weight_m: S, weight_x: S, weight_y: S) -> AffineState {
        if self.reachable(i, j, AffineState::M) && self.m[(i, j)].add_score(weight_m) == target {
            AffineState::M
        } else if self.reachable(i, j, AffineState::X) && self.x[(i, j)].add_score(weight_x) == target {
            AffineState::X
        } else if self.reachable(i, j, AffineState::Y) && self.y[(i, j)].add_score(weight_y) == target {
            AffineState::Y
        } else {
            debug_assert!(false, "No predecessor reaches {target} at ({i}, {j})");
            border_state(i, j)
        }
    }
}

/// A state that can always move from `(i, j)`: a gap along a border, and
/// otherwise the diagonal.
#[inline]
fn border_state(i: usize, j: usize) -> AffineState {
    match (i > 0, j > 0) {
        (true, false) => AffineState::X,
        (false, true) => AffineState::Y,
        _ => AffineState::M,
    }
}

impl<S: Score> Recurrence<S> for AffineRecurrence<S> {
    type State = AffineState;

    fn init_borders(&mut self, mode: AlignMode) {
        if mode.charges_borders() {
            // Only the origin may start an alignment. The gap states along
            // the borders follow from the recurrence.
            self.m[(0, 0)] = S::ZERO;
            for i in 1..=self.rows {
                self.x[(i, 0)] = self.next_x(i, 0);
            }
            for j in 1..=self.cols {
                self.y[(0, j)] = self.next_y(0, j);
            }
        } else {
            // Any border cell may start an alignment for free
            for i in 0..=self.rows {
                self.m[(i, 0)] = S::ZERO;
            }
            for j in 0..=self.cols {
                self.m[(0, j)] = S::ZERO;
            }
        }
    }

    #[inline]
    fn fill_cell(&mut self, i: usize, j: usize, substitution: S, floor_at_zero: bool) {
        let diagonal = self.m[(i - 1, j - 1)]
            .max(self.x[(i - 1, j - 1)])
            .max(self.y[(i - 1, j - 1)]);
        let mut m = diagonal.add_score(substitution);
        if floor_at_zero {
            m = m.max(S::ZERO);
        }

        self.m[(i, j)] = m;
        self.x[(i, j)] = self.next_x(i, j);
        self.y[(i, j)] = self.next_y(i, j);
    }

    #[inline]
    fn value(&self, i: usize, j: usize) -> S {
        self.m[(i, j)].max(self.x[(i, j)]).max(self.y[(i, j)])
    }

    #[inline]
    fn start_state(&self, i: usize, j: usize) -> Self::State {
        let best = self.value(i, j);
        [AffineState::M, AffineState::X, AffineState::Y]
            .into_iter()
            .find(|&state| self.state_score(i, j, state) == best && self.reachable(i, j, state))
            .unwrap_or_else(|| border_state(i, j))
    }

    #[inline]
    fn restarts_at(&self, i: usize, j: usize, state: Self::State) -> bool {
        // A gap state holding zero has already paid for opening its run
        state == AffineState::M && self.m[(i, j)] == S::ZERO
    }

    fn step(&self, i: usize, j: usize, state: Self::State, substitution: S) -> (Step, Self::State) {
        let open = self.opening();
        let extend = self.gap_extend;

        match state {
            AffineState::M => {
                let target = self.m[(i, j)];
                let prev = self.predecessor(i - 1, j - 1, target, substitution, substitution, substitution);
                (Step::Diagonal, prev)
            }
            AffineState::X => {
                let target = self.x[(i, j)];
                (Step::ConsumeA, self.predecessor(i - 1, j, target, open, extend, open))
            }
            AffineState::Y => {
                let target = self.y[(i, j)];
                (Step::ConsumeB, self.predecessor(i, j - 1, target, open, open, extend))
            }
        }
    }
}

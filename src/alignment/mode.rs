use crate::math::Score;

/// The alignment semantics, governing how the matrix borders are
/// initialized, which cell the traceback starts from, and where it stops.
///
/// | Mode | Borders | Traceback start | Traceback stop |
/// |---|---|---|---|
/// | [`Global`] | cumulative gap penalty | bottom-right corner | top-left corner |
/// | [`Local`] | zero, interior floored at zero | best cell anywhere | a cell worth zero |
/// | [`Semiglobal`] | zero | best cell in last row or column | row or column zero |
///
/// ## Ties
///
/// When several cells share the best score, the *last* one in scan order is
/// used. [`Local`] scans every cell in row-major order (rows follow sequence
/// A). [`Semiglobal`] scans the bottom-right corner first, then the rest of
/// the last column from top to bottom, then the rest of the last row from
/// left to right. The corner therefore only wins when it is strictly better
/// than any cell ending in free trailing gaps, and free trailing gaps in B are
/// preferred over free trailing gaps in A.
///
/// [`Global`]: AlignMode::Global
/// [`Local`]: AlignMode::Local
/// [`Semiglobal`]: AlignMode::Semiglobal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum AlignMode {
    /// Both sequences fully consumed (Needleman–Wunsch)
    #[default]
    Global,
    /// Best-scoring pair of contiguous subsequences (Smith–Waterman)
    Local,
    /// Leading and trailing gaps on either sequence are free
    Semiglobal,
}

impl AlignMode {
    /// Whether gaps along the matrix borders are charged. Otherwise all border
    /// cells are zero.
    #[inline]
    #[must_use]
    pub(crate) const fn charges_borders(self) -> bool {
        matches!(self, AlignMode::Global)
    }

    /// Whether interior cells are floored at zero, allowing a fresh
    /// alignment to start anywhere.
    #[inline]
    #[must_use]
    pub(crate) const fn floors_at_zero(self) -> bool {
        matches!(self, AlignMode::Local)
    }

    /// Selects the cell the traceback starts from, given the number of
    /// residues in A (`rows`) and B (`cols`) and the best value of each cell.
    pub(crate) fn start_cell<S: Score>(
        self, rows: usize, cols: usize, value: impl Fn(usize, usize) -> S,
    ) -> (usize, usize) {
        match self {
            AlignMode::Global => (rows, cols),
            AlignMode::Local => {
                let cells = (0..=rows).flat_map(move |i| (0..=cols).map(move |j| (i, j)));
                last_best(cells, &value).unwrap_or((rows, cols))
            }
            AlignMode::Semiglobal => {
                let last_column = (0..rows).map(|i| (i, cols));
                let last_row = (0..cols).map(|j| (rows, j));
                let cells = std::iter::once((rows, cols)).chain(last_column).chain(last_row);
                last_best(cells, &value).unwrap_or((rows, cols))
            }
        }
    }

    /// Whether the traceback stops at cell `(i, j)`, where `at_zero` tells
    /// whether the current traceback state is a zero-valued restart point.
    #[inline]
    #[must_use]
    pub(crate) const fn is_terminal(self, i: usize, j: usize, at_zero: bool) -> bool {
        match self {
            AlignMode::Global => i == 0 && j == 0,
            AlignMode::Local => i == 0 || j == 0 || at_zero,
            AlignMode::Semiglobal => i == 0 || j == 0,
        }
    }
}

impl std::fmt::Display for AlignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignMode::Global => f.write_str("global"),
            AlignMode::Local => f.write_str("local"),
            AlignMode::Semiglobal => f.write_str("semiglobal"),
        }
    }
}

/// The last cell holding the maximum value.
fn last_best<S: Score>(
    cells: impl Iterator<Item = (usize, usize)>, value: &impl Fn(usize, usize) -> S,
) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), S)> = None;
    for (i, j) in cells {
        let v = value(i, j);
        match best {
            Some((_, best_value)) if v < best_value => {}
            _ => best = Some(((i, j), v)),
        }
    }
    best.map(|(cell, _)| cell)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn local_ties_take_last_in_row_major_order() {
        let value = |i: usize, j: usize| if (i, j) == (1, 2) || (i, j) == (2, 0) { 5i32 } else { 0 };
        assert_eq!(AlignMode::Local.start_cell(2, 2, value), (2, 0));
    }

    #[test]
    fn semiglobal_prefers_free_trailing_gaps() {
        let zeros = |_: usize, _: usize| 0i32;
        assert_eq!(AlignMode::Semiglobal.start_cell(1, 1, zeros), (1, 0));
        assert_eq!(AlignMode::Semiglobal.start_cell(0, 0, zeros), (0, 0));

        let value = |i: usize, j: usize| if (i, j) == (2, 3) { 4i32 } else { 3 };
        assert_eq!(AlignMode::Semiglobal.start_cell(2, 3, value), (2, 3));

        // A tie with the corner goes to the last row
        let value = |i: usize, j: usize| if matches!((i, j), (2, 3) | (2, 1) | (1, 3)) { 4i32 } else { 0 };
        assert_eq!(AlignMode::Semiglobal.start_cell(2, 3, value), (2, 1));
    }

    #[test]
    fn terminal_cells() {
        assert!(!AlignMode::Global.is_terminal(0, 3, true));
        assert!(AlignMode::Global.is_terminal(0, 0, false));
        assert!(AlignMode::Semiglobal.is_terminal(0, 3, false));
        assert!(!AlignMode::Semiglobal.is_terminal(2, 3, true));
        assert!(AlignMode::Local.is_terminal(4, 3, true));
        assert!(!AlignMode::Local.is_terminal(4, 3, false));
    }
}

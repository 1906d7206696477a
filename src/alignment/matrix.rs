use std::ops::{Index, IndexMut};

/// A dense, row-major dynamic programming matrix.
///
/// Row `i` corresponds to the first `i` residues of sequence A having been
/// consumed, and column `j` to the first `j` residues of sequence B, so a
/// matrix for sequences of length $n$ and $m$ has $(n+1)(m+1)$ cells.
#[derive(Clone, Debug)]
pub(crate) struct DpMatrix<T> {
    data: Vec<T>,
    cols: usize,
}

impl<T: Copy> DpMatrix<T> {
    /// Allocates a matrix with every cell set to `fill`.
    #[inline]
    pub(crate) fn new(rows: usize, cols: usize, fill: T) -> Self {
        DpMatrix {
            data: vec![fill; rows * cols],
            cols,
        }
    }
}

impl<T> Index<(usize, usize)> for DpMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DpMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}

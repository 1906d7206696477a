use crate::{alignment::ScoringModel, data::mappings::ByteIndexMap, math::Score};

/// A substitution matrix over an alphabet of bytes.
///
/// Rows are indexed by the residue from sequence A and columns by the residue
/// from sequence B, each through the same [`ByteIndexMap`]. Bytes the mapping
/// does not contain are not covered, so aligning them is rejected before any
/// matrix work begins.
///
/// ## Example
///
/// ```
/// # use pairalign::{alignment::{AlignMode, GapModel, align}, data::WeightMatrix};
/// let matrix = WeightMatrix::new_dna_matrix(4, -2, Some(b'N'));
/// assert_eq!(matrix.get_weight(b'a', b'A'), 4);
/// assert_eq!(matrix.get_weight(b'N', b'A'), 0);
///
/// let alignment = align(AlignMode::Global, matrix, GapModel::linear(-3), b"ACGNT", b"ACGGT").unwrap();
/// assert_eq!(alignment.score, 16i32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightMatrix<'a, const S: usize> {
    pub weights: [[i8; S]; S],
    pub mapping: &'a ByteIndexMap<S>,
}

impl<'a, const S: usize> WeightMatrix<'a, S> {
    /// Creates a new [`WeightMatrix`] with a given alphabet represented by
    /// `mapping`, a fixed `matching` score and `mismatch` score, and an
    /// optionally ignored base. A pair of bases where either is the ignored
    /// base will always have a score of 0.
    ///
    /// If working with DNA, consider using [`new_dna_matrix`]. For more
    /// flexibility, use [`new_custom`].
    ///
    /// [`new_dna_matrix`]: WeightMatrix::new_dna_matrix
    /// [`new_custom`]: WeightMatrix::new_custom
    ///
    /// ## Panics
    ///
    /// Panics if an invalid byte was specified for the `ignoring` field.
    #[must_use]
    pub const fn new(mapping: &'a ByteIndexMap<S>, matching: i8, mismatch: i8, ignoring: Option<u8>) -> Self {
        let mut weights = [[0i8; S]; S];

        let skip_index = match ignoring {
            Some(ignoring) => match mapping.to_index(ignoring) {
                Some(index) if mapping.in_byte_keys(ignoring) => Some(index),
                _ => panic!("An invalid byte was specified for the ignoring field."),
            },
            None => None,
        };

        let mut i = 0;
        while i < S {
            let mut j = 0;
            while j < S {
                if let Some(k) = skip_index
                    && (k == i || k == j)
                {
                    j += 1;
                    continue;
                }

                weights[i][j] = if i == j { matching } else { mismatch };
                j += 1;
            }
            i += 1;
        }

        WeightMatrix { weights, mapping }
    }

    /// Creates a new [`WeightMatrix`] with a given alphabet represented by
    /// `mapping` and a custom weight matrix (where the rows represent the
    /// residue from sequence A, and the columns the residue from sequence B).
    #[inline]
    #[must_use]
    pub const fn new_custom(mapping: &'a ByteIndexMap<S>, weights: [[i8; S]; S]) -> Self {
        WeightMatrix { weights, mapping }
    }

    /// Retrieves the weight for `a_residue` against `b_residue`, or `None` if
    /// either residue is not in the mapping.
    #[inline]
    #[must_use]
    pub const fn try_weight(&self, a_residue: u8, b_residue: u8) -> Option<i8> {
        match (self.mapping.to_index(a_residue), self.mapping.to_index(b_residue)) {
            (Some(i), Some(j)) => Some(self.weights[i][j]),
            _ => None,
        }
    }

    /// Retrieves the weight for `a_residue` against `b_residue`.
    ///
    /// ## Panics
    ///
    /// Either residue is not in the mapping.
    #[inline]
    #[must_use]
    pub const fn get_weight(&self, a_residue: u8, b_residue: u8) -> i8 {
        match self.try_weight(a_residue, b_residue) {
            Some(weight) => weight,
            None => panic!("The residue is not in the weight matrix mapping."),
        }
    }
}

impl WeightMatrix<'static, 5> {
    /// Creates a new DNA [`WeightMatrix`] over `ACGTN` (see
    /// [`DNA_PROFILE_MAP`]), with a fixed `matching` score and `mismatch`
    /// score, and optionally ignoring a base. Any byte outside the alphabet is
    /// scored as `N`.
    ///
    /// [`DNA_PROFILE_MAP`]: crate::data::DNA_PROFILE_MAP
    #[inline]
    #[must_use]
    pub const fn new_dna_matrix(matching: i8, mismatch: i8, ignoring: Option<u8>) -> Self {
        WeightMatrix::new(&crate::data::DNA_PROFILE_MAP, matching, mismatch, ignoring)
    }
}

impl<S, const N: usize> ScoringModel<u8, S> for WeightMatrix<'_, N>
where
    S: Score + From<i8>,
{
    /// The weight as a score. Uncovered residues score zero, although the
    /// aligner rejects them before scoring.
    #[inline]
    fn score(&self, a: &u8, b: &u8) -> S {
        self.try_weight(*a, *b).map_or(S::ZERO, S::from)
    }

    #[inline]
    fn covers(&self, element: &u8) -> bool {
        self.mapping.contains(*element)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{DNA_PROFILE_MAP, DNA_STRICT_MAP};

    #[test]
    fn dna_matrix_ignoring_n() {
        let matrix = WeightMatrix::new_dna_matrix(2, -5, Some(b'N'));
        assert_eq!(matrix.get_weight(b'A', b'A'), 2);
        assert_eq!(matrix.get_weight(b'A', b'g'), -5);
        assert_eq!(matrix.get_weight(b'N', b'N'), 0);
        assert_eq!(matrix.get_weight(b'T', b'N'), 0);
        // Unlisted bytes fall back to N
        assert_eq!(matrix.get_weight(b'R', b'C'), 0);
        assert_eq!(matrix.get_weight(b'U', b't'), 2);
    }

    #[test]
    fn strict_matrix_coverage() {
        let matrix = WeightMatrix::new(&DNA_STRICT_MAP, 1, -1, None);
        assert_eq!(matrix.try_weight(b'N', b'A'), None);
        assert!(ScoringModel::<u8, i32>::covers(&matrix, &b'c'));
        assert!(!ScoringModel::<u8, i32>::covers(&matrix, &b'N'));
        assert_eq!(ScoringModel::<u8, i64>::score(&matrix, &b'C', &b'G'), -1);
    }

    #[test]
    fn custom_matrix_is_not_symmetric() {
        let mut weights = [[-1i8; 5]; 5];
        weights[0][2] = 3;
        let matrix = WeightMatrix::new_custom(&DNA_PROFILE_MAP, weights);
        assert_eq!(matrix.get_weight(b'A', b'G'), 3);
        assert_eq!(matrix.get_weight(b'G', b'A'), -1);
    }

    #[test]
    #[should_panic = "An invalid byte was specified for the ignoring field."]
    fn ignoring_must_be_a_key() {
        let _ = WeightMatrix::new(&DNA_STRICT_MAP, 1, -1, Some(b'N'));
    }
}

use crate::alignment::{AlignmentIter, AlignmentStates, Ciglet};
use std::ops::Range;

/// The gap marker used by the byte views.
pub const GAP: u8 = b'-';

// Both ranges are 0-based and end-exclusive. For a global alignment, they
// encompass the full length of each sequence. For local and semiglobal
// alignments, residues outside the ranges are not part of `states`.

/// A struct representing the information for an alignment, such as its score
/// and where in the sequences it occurs.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Alignment<S> {
    /// The score of the alignment
    pub score:   S,
    /// The indices of sequence A included in the aligned portion
    pub a_range: Range<usize>,
    /// The indices of sequence B included in the aligned portion
    pub b_range: Range<usize>,
    /// States describing the aligned portion, from left to right
    pub states:  AlignmentStates,
    /// The length of sequence A
    pub a_len:   usize,
    /// The length of sequence B
    pub b_len:   usize,
}

impl<S> Alignment<S> {
    /// Returns an [`Alignment`] whose aligned portion covers both sequences
    /// entirely.
    #[inline]
    #[must_use]
    pub fn new_global(score: S, states: AlignmentStates, a_len: usize, b_len: usize) -> Self {
        Self {
            score,
            a_range: 0..a_len,
            b_range: 0..b_len,
            states,
            a_len,
            b_len,
        }
    }

    /// The number of columns in the aligned portion.
    #[inline]
    #[must_use]
    pub fn aligned_len(&self) -> usize {
        self.states.num_columns()
    }

    /// Returns an iterator over the columns of the aligned portion. The first
    /// element of each pair is from `a` and the second from `b`, with `None`
    /// representing a gap.
    ///
    /// `a` and `b` should be the full sequences originally passed to the
    /// aligner. If they are shorter than implied by the alignment, missing
    /// residues are also yielded as `None`.
    #[inline]
    #[must_use]
    pub fn get_aligned_iter<'a, E>(
        &'a self, a: &'a [E], b: &'a [E],
    ) -> AlignmentIter<'a, E, std::iter::Copied<std::slice::Iter<'a, Ciglet>>> {
        AlignmentIter::new(a, b, &self.states, self.a_range.start, self.b_range.start)
    }

    /// Generates the gapped aligned portion of both sequences, with `None`
    /// marking gaps.
    ///
    /// Removing the gaps from the first output yields `a[a_range]`, and
    /// removing them from the second yields `b[b_range]`.
    #[must_use]
    pub fn aligned_core<E: Clone>(&self, a: &[E], b: &[E]) -> (Vec<Option<E>>, Vec<Option<E>>) {
        self.get_aligned_iter(a, b)
            .map(|(x, y)| (x.cloned(), y.cloned()))
            .unzip()
    }

    /// Generates both full gapped sequences, with `None` marking gaps.
    ///
    /// Residues outside the aligned portion are placed against gaps in the
    /// following order: the leading residues of `a`, the leading residues of
    /// `b`, then the aligned portion, then the trailing residues of `a` and
    /// finally the trailing residues of `b`. Removing the gaps from each
    /// output reproduces the whole input sequence, and both outputs have the
    /// same length.
    ///
    /// ## Example
    ///
    /// ```
    /// # use pairalign::alignment::{AlignMode, GapModel, MatchMismatch, align};
    /// let (a, b) = (b"AATTTAA", b"AAAA");
    /// let scoring = MatchMismatch::new(10, -5);
    /// let alignment = align(AlignMode::Local, scoring, GapModel::linear(-10), a, b).unwrap();
    ///
    /// let (gapped_a, gapped_b) = alignment.view_alignment(a, b);
    /// assert_eq!(gapped_a.iter().filter(|x| x.is_none()).count(), 2);
    /// assert_eq!(gapped_b.iter().filter(|y| y.is_none()).count(), 5);
    /// ```
    #[must_use]
    pub fn view_alignment<E: Clone>(&self, a: &[E], b: &[E]) -> (Vec<Option<E>>, Vec<Option<E>>) {
        let (a_lead, a_trail) = flanks(a, &self.a_range);
        let (b_lead, b_trail) = flanks(b, &self.b_range);

        let columns = a_lead.len() + b_lead.len() + self.aligned_len() + a_trail.len() + b_trail.len();
        let mut gapped_a = Vec::with_capacity(columns);
        let mut gapped_b = Vec::with_capacity(columns);

        push_flank(&mut gapped_a, &mut gapped_b, a_lead);
        push_flank(&mut gapped_b, &mut gapped_a, b_lead);
        for (x, y) in self.get_aligned_iter(a, b) {
            gapped_a.push(x.cloned());
            gapped_b.push(y.cloned());
        }
        push_flank(&mut gapped_a, &mut gapped_b, a_trail);
        push_flank(&mut gapped_b, &mut gapped_a, b_trail);

        (gapped_a, gapped_b)
    }

    /// Byte version of [`view_alignment`], using `-` as the gap character.
    ///
    /// [`view_alignment`]: Alignment::view_alignment
    #[must_use]
    pub fn view_bytes(&self, a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let (gapped_a, gapped_b) = self.view_alignment(a, b);
        (fill_gaps(gapped_a), fill_gaps(gapped_b))
    }

    /// Byte version of [`aligned_core`], using `-` as the gap character.
    ///
    /// [`aligned_core`]: Alignment::aligned_core
    #[must_use]
    pub fn core_bytes(&self, a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
        self.get_aligned_iter(a, b)
            .map(|(x, y)| (x.copied().unwrap_or(GAP), y.copied().unwrap_or(GAP)))
            .unzip()
    }
}

impl<S: Copy> Alignment<S> {
    /// Gets the alignment for when sequences A and B are swapped.
    ///
    /// `D` and `I` states are exchanged, as are the ranges and lengths. The
    /// score is unchanged, which matches aligning with a [`Transposed`]
    /// scoring model.
    ///
    /// [`Transposed`]: crate::alignment::Transposed
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            score:   self.score,
            a_range: self.b_range.clone(),
            b_range: self.a_range.clone(),
            states:  self.states.to_inverted(),
            a_len:   self.b_len,
            b_len:   self.a_len,
        }
    }
}

/// The residues of `seq` before and after `range`. Out of bounds portions are
/// empty.
#[inline]
fn flanks<'a, E>(seq: &'a [E], range: &Range<usize>) -> (&'a [E], &'a [E]) {
    let start = range.start.min(seq.len());
    let end = range.end.clamp(start, seq.len());
    (&seq[..start], &seq[end..])
}

/// Places the unaligned residues `flank` in `own` against gaps in `other`.
#[inline]
fn push_flank<E: Clone>(own: &mut Vec<Option<E>>, other: &mut Vec<Option<E>>, flank: &[E]) {
    own.extend(flank.iter().cloned().map(Some));
    other.extend(std::iter::repeat_n(None, flank.len()));
}

#[inline]
fn fill_gaps(gapped: Vec<Option<u8>>) -> Vec<u8> {
    gapped.into_iter().map(|x| x.unwrap_or(GAP)).collect()
}

/// A run-length encoded alignment operation, such as `5M`.
///
/// The operations produced by the aligners are:
/// - `M`: A residue of A aligned against a residue of B (match or mismatch)
/// - `D`: A residue of A aligned against a gap (consumes A only)
/// - `I`: A residue of B aligned against a gap (consumes B only)
///
/// `=` and `X` are also accepted when parsing or scoring, and are treated like
/// `M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ciglet {
    /// Increment or repetition count.
    pub inc: usize,
    /// Alignment operation code.
    pub op:  u8,
}

impl Ciglet {
    /// Whether the operation consumes a residue of sequence A.
    #[inline]
    #[must_use]
    pub const fn consumes_a(&self) -> bool {
        matches!(self.op, b'M' | b'=' | b'X' | b'D')
    }

    /// Whether the operation consumes a residue of sequence B.
    #[inline]
    #[must_use]
    pub const fn consumes_b(&self) -> bool {
        matches!(self.op, b'M' | b'=' | b'X' | b'I')
    }
}

/// Whether `op` is a valid alignment operation.
#[inline]
#[must_use]
pub(crate) const fn is_valid_op(op: u8) -> bool {
    matches!(op, b'M' | b'=' | b'X' | b'D' | b'I')
}

/// A struct for storing alignment states, displayable as a CIGAR string.
///
/// Adjacent states with the same operation are always merged, and every
/// increment is non-zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AlignmentStates(pub(crate) Vec<Ciglet>);

impl AlignmentStates {
    /// Initializes an empty alignment.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        AlignmentStates(Vec::new())
    }

    /// Initializes the states with capacity for `n` (inc, op) pairs.
    #[inline]
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        AlignmentStates(Vec::with_capacity(n))
    }

    /// Returns the [`Ciglet`] elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Ciglet] {
        self.0.as_slice()
    }

    /// Whether there are no states.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds a state to the right end of the alignment.
    #[inline]
    pub fn add_state(&mut self, op: u8) {
        self.add_ciglet(Ciglet { inc: 1, op });
    }

    /// Adds a ciglet to the right end of the alignment. If the operation is the
    /// same as the rightmost operation, the ciglet is merged with the last one.
    pub fn add_ciglet(&mut self, ciglet: Ciglet) {
        if ciglet.inc > 0 {
            if let Some(c) = self.0.last_mut()
                && c.op == ciglet.op
            {
                c.inc += ciglet.inc;
            } else {
                self.0.push(ciglet);
            }
        }
    }

    /// Adds an alignment `op` of size `inc`.
    #[inline]
    pub fn add_inc_op(&mut self, inc: usize, op: u8) {
        self.add_ciglet(Ciglet { inc, op });
    }

    /// Reverses the order of the stored alignment states in-place.
    #[inline]
    pub fn make_reverse(&mut self) {
        self.0.reverse();
    }

    /// Yields an iterator over the alignment states.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Ciglet> {
        self.0.iter()
    }

    /// The number of alignment columns, which is the length of each gapped
    /// sequence in the aligned portion.
    #[inline]
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.0.iter().map(|c| c.inc).sum()
    }

    /// The number of residues of sequence A consumed.
    #[inline]
    #[must_use]
    pub fn a_consumed(&self) -> usize {
        self.0.iter().filter(|c| c.consumes_a()).map(|c| c.inc).sum()
    }

    /// The number of residues of sequence B consumed.
    #[inline]
    #[must_use]
    pub fn b_consumed(&self) -> usize {
        self.0.iter().filter(|c| c.consumes_b()).map(|c| c.inc).sum()
    }

    /// Swaps the roles of sequences A and B, exchanging `D` and `I`.
    #[must_use]
    pub fn to_inverted(&self) -> Self {
        AlignmentStates(
            self.0
                .iter()
                .map(|&Ciglet { inc, op }| match op {
                    b'D' => Ciglet { inc, op: b'I' },
                    b'I' => Ciglet { inc, op: b'D' },
                    _ => Ciglet { inc, op },
                })
                .collect(),
        )
    }
}

/// Iterator yielding the aligned columns as specified by the given alignment
/// states.
///
/// The first element is from sequence A, and the second is from sequence B.
/// Gaps are represented by `None`.
pub struct AlignmentIter<'a, E, I>
where
    I: Iterator<Item = Ciglet>, {
    a:       &'a [E],
    b:       &'a [E],
    ciglets: I,
    current: Option<Ciglet>,
    a_index: usize,
    b_index: usize,
}

impl<'a, E, I> AlignmentIter<'a, E, I>
where
    I: Iterator<Item = Ciglet>,
{
    /// Creates an iterator over the columns described by `ciglets`, starting at
    /// `a_index` in `a` and `b_index` in `b`.
    #[inline]
    pub(crate) fn new(
        a: &'a [E], b: &'a [E], ciglets: impl IntoIterator<IntoIter = I>, a_index: usize, b_index: usize,
    ) -> Self {
        AlignmentIter {
            a,
            b,
            ciglets: ciglets.into_iter(),
            current: None,
            a_index,
            b_index,
        }
    }
}

impl<'a, E, I> Iterator for AlignmentIter<'a, E, I>
where
    I: Iterator<Item = Ciglet>,
{
    type Item = (Option<&'a E>, Option<&'a E>);

    fn next(&mut self) -> Option<Self::Item> {
        let ciglet = loop {
            match self.current {
                Some(ciglet) if ciglet.inc > 0 => break ciglet,
                _ => self.current = Some(self.ciglets.next()?),
            }
        };

        let a = if ciglet.consumes_a() {
            let residue = self.a.get(self.a_index);
            self.a_index += 1;
            residue
        } else {
            None
        };

        let b = if ciglet.consumes_b() {
            let residue = self.b.get(self.b_index);
            self.b_index += 1;
            residue
        } else {
            None
        };

        self.current = Some(Ciglet {
            inc: ciglet.inc - 1,
            op:  ciglet.op,
        });
        Some((a, b))
    }
}

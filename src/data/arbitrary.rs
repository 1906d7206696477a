//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the alignment types, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::alignment::{AlignMode, AlignmentStates, Ciglet, GapModel, MatchMismatch};
use arbitrary::{Arbitrary, Result, Unstructured};

/// The longest sequence generated by [`AlignmentInput`].
const MAX_SEQ_LEN: usize = 64;

impl<'a> Arbitrary<'a> for Ciglet {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Ciglet {
            inc: u.int_in_range(1..=16)?,
            op:  *u.choose(b"MID".as_slice())?,
        })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (2, Some(16))
    }
}

impl<'a> Arbitrary<'a> for AlignmentStates {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter::<Ciglet>()?.collect()
    }
}

/// A complete, valid input for the aligner: a scoring model, a gap model with
/// non-positive penalties, a mode, and two short sequences over `ACGT`.
///
/// Scores are small enough that no `i32` cell can overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentInput {
    pub mode:    AlignMode,
    pub scoring: MatchMismatch<i32>,
    pub gap:     GapModel<i32>,
    pub a:       Vec<u8>,
    pub b:       Vec<u8>,
}

impl<'a> Arbitrary<'a> for AlignmentInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mode = AlignMode::arbitrary(u)?;
        let scoring = MatchMismatch::new(u.int_in_range(-20..=20)?, u.int_in_range(-20..=20)?);
        let gap = if bool::arbitrary(u)? {
            GapModel::linear(u.int_in_range(-20..=0)?)
        } else {
            GapModel::affine(u.int_in_range(-20..=0)?, u.int_in_range(-20..=0)?)
        };

        Ok(AlignmentInput {
            mode,
            scoring,
            gap,
            a: dna_sequence(u)?,
            b: dna_sequence(u)?,
        })
    }
}

fn dna_sequence(u: &mut Unstructured<'_>) -> Result<Vec<u8>> {
    let len = u.int_in_range(0..=MAX_SEQ_LEN)?;
    (0..len).map(|_| u.choose(b"ACGT".as_slice()).copied()).collect()
}

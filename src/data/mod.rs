//! ## Byte alphabets and substitution matrices.
//!
//! Alignments of byte sequences such as DNA are usually scored with a
//! substitution matrix rather than a single match/mismatch pair. A
//! [`WeightMatrix`] stores one weight per pair of residues, with rows and
//! columns addressed through a [`ByteIndexMap`].
//!
//! Two DNA mappings are provided:
//! - [`DNA_PROFILE_MAP`] maps every byte, treating anything outside `ACGT` as
//!   `N`. A matrix over it covers any input.
//! - [`DNA_STRICT_MAP`] only maps `ACGT` (and `U`). A matrix over it rejects
//!   other bytes with
//!   [`AlignmentError::UnscorableElement`](crate::alignment::AlignmentError::UnscorableElement).
//!
//! Both mappings ignore case.

mod mappings;
mod matrices;

/// Arbitrary implementations for fuzzing.
#[cfg(feature = "fuzzing")]
pub mod arbitrary;

pub use mappings::*;
pub use matrices::*;

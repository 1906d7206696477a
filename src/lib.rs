#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alignment functions
pub mod alignment;
/// Byte alphabets and substitution matrices.
pub mod data;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;
/// Numeric score types.
pub mod math;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignMode, Aligner, Alignment, AlignmentError, AlignmentStates, GapModel, MatchMismatch, ScoringModel,
        Transposed, align,
    };
    pub use crate::data::WeightMatrix;
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
    pub use crate::math::Score;
}

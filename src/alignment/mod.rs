//! ## Functions for aligning sequence data.
//!
//! Any two slices of comparable elements can be aligned, whether they hold
//! DNA, protein residues, characters, or tokens. An alignment is configured
//! along three independent axes:
//!
//! - [`AlignMode`]: [Global] (Needleman–Wunsch), [Local] (Smith–Waterman), or
//!   semiglobal, where leading and trailing gaps are free.
//! - [`GapModel`]: a linear penalty per gap symbol, or an affine open plus
//!   extend penalty using the three-state recurrence of Gotoh.
//! - [`ScoringModel`]: any closure `Fn(&E, &E) -> S`, a [`MatchMismatch`]
//!   score, or a substitution matrix such as
//!   [`WeightMatrix`](crate::data::WeightMatrix).
//!
//! Every combination shares one fill loop and one traceback loop. The full
//! $(n+1)(m+1)$ matrices are computed exactly, using three matrices for
//! affine gaps.
//!
//! ### Ties
//!
//! When several moves reach the optimal value of a cell, the traceback prefers
//! the diagonal, then the move consuming sequence A (a `D` state), then the
//! move consuming sequence B (an `I` state). See [`AlignMode`] for how ties
//! between start cells are broken.
//!
//! ### Penalties
//!
//! Gap penalties are added as given, so they must be zero or negative. Positive
//! values are rejected with [`AlignmentError::PositiveGapPenalty`] rather than
//! having their sign flipped.
//!
//! ### Example
//!
//! ```
//! # use pairalign::alignment::{AlignMode, GapModel, MatchMismatch, align};
//! let a = b"GGCCACAGGATTGAG";
//! let b = b"TACCACAGTATTAG";
//!
//! let alignment = align(AlignMode::Global, MatchMismatch::new(4, -2), GapModel::affine(-2, -1), a, b).unwrap();
//! assert_eq!(alignment.score, 35);
//! assert_eq!(alignment.states.to_string(), "12M1D2M");
//!
//! let (gapped_a, gapped_b) = alignment.view_bytes(a, b);
//! assert_eq!(gapped_a, b"GGCCACAGGATTGAG");
//! assert_eq!(gapped_b, b"TACCACAGTATT-AG");
//! ```
//!
//! [Global]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm
//! [Local]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm

mod aligner;
mod engine;
mod errors;
mod gaps;
mod matrix;
mod mode;
mod recurrence;
mod score_from_path;
mod scoring;
mod types;

pub use aligner::*;
pub use errors::*;
pub use gaps::*;
pub use mode::*;
pub use score_from_path::*;
pub use scoring::{MatchMismatch, ScoringModel, Transposed};
pub use types::*;

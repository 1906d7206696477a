use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, Mul, Neg, Sub},
};

/// A signed integer type usable as an alignment score.
///
/// Dynamic programming cells that cannot be reached hold [`Score::NEG_INF`].
/// All arithmetic in the engine goes through [`Score::add_score`] and
/// [`Score::scale`], which propagate the sentinel and otherwise saturate
/// within `[NEG_INF + 1, MAX]`. Adding a weight to an unreachable cell keeps
/// it unreachable, and a reachable score never becomes the sentinel no matter
/// how far it saturates.
pub trait Score:
    Sized
    + Copy
    + Debug
    + Display
    + Ord
    + Hash
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Into<i64>
    + Send
    + Sync {
    const ZERO: Self;
    /// Sentinel for unreachable cells, half of the type's minimum.
    const NEG_INF: Self;
    /// The smallest reachable score.
    const FLOOR: Self;

    /// Saturating addition, clamped to [`FLOOR`] unless either operand is
    /// [`NEG_INF`].
    ///
    /// [`FLOOR`]: Score::FLOOR
    /// [`NEG_INF`]: Score::NEG_INF
    #[must_use]
    fn add_score(self, other: Self) -> Self;

    /// Saturating multiplication by a length, clamped to [`FLOOR`].
    ///
    /// [`FLOOR`]: Score::FLOOR
    #[must_use]
    fn scale(self, len: usize) -> Self;

    /// Converts a length to a score, saturating at the maximum value.
    #[must_use]
    fn from_len(len: usize) -> Self;

    /// Whether the value is the unreachable sentinel.
    #[inline]
    #[must_use]
    fn is_neg_inf(self) -> bool {
        self == Self::NEG_INF
    }
}

macro_rules! impl_score {
    { $($ty:ty),* } => {
        $(
        impl Score for $ty {
            const ZERO: $ty = 0;
            const NEG_INF: $ty = <$ty>::MIN / 2;
            const FLOOR: $ty = <$ty>::MIN / 2 + 1;

            #[inline]
            fn add_score(self, other: Self) -> Self {
                if self == Self::NEG_INF || other == Self::NEG_INF {
                    Self::NEG_INF
                } else {
                    self.saturating_add(other).max(Self::FLOOR)
                }
            }

            #[inline]
            fn scale(self, len: usize) -> Self {
                self.saturating_mul(Self::from_len(len)).max(Self::FLOOR)
            }

            #[inline]
            fn from_len(len: usize) -> Self {
                <$ty>::try_from(len).unwrap_or(<$ty>::MAX)
            }
        }
        )*
    }
}

impl_score!(i16, i32, i64);

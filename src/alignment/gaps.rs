use crate::{alignment::AlignmentError, math::Score};

/// The gap penalty model used to score runs of gaps.
///
/// Both variants add the supplied penalties as-is, so they are expected to be
/// zero or negative. [`GapModel::validate`] rejects positive values.
///
/// ### Linear
///
/// A single `cost` is charged for every gap symbol, so a run of $k$ gaps costs
/// $k \cdot g$.
///
/// ### Affine
///
/// We use the affine gap formula $W(k) = o + k \cdot e$, where $k$ is the gap
/// length, $o$ is the gap open penalty charged once per run, and $e$ is the
/// gap extend penalty charged for every symbol in the run, including the
/// first. This requires the three-state recurrence of Gotoh, and makes one
/// long run of gaps cheaper than several short runs of the same total length
/// whenever $o < 0$.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum GapModel<S> {
    /// Every gap symbol costs `cost`
    Linear { cost: S },
    /// A run of gaps costs `open` once plus `extend` per symbol
    Affine { open: S, extend: S },
}

impl<S: Score> GapModel<S> {
    /// Creates a linear gap model.
    #[inline]
    #[must_use]
    pub const fn linear(cost: S) -> Self {
        GapModel::Linear { cost }
    }

    /// Creates an affine gap model.
    #[inline]
    #[must_use]
    pub const fn affine(open: S, extend: S) -> Self {
        GapModel::Affine { open, extend }
    }

    /// Whether the model needs the three-state recurrence.
    #[inline]
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        matches!(self, GapModel::Affine { .. })
    }

    /// Checks that all penalties are zero or negative.
    ///
    /// ## Errors
    ///
    /// [`AlignmentError::PositiveGapPenalty`] names the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), AlignmentError> {
        let check = |parameter: &'static str, value: S| {
            if value > S::ZERO {
                Err(AlignmentError::PositiveGapPenalty {
                    parameter,
                    value: value.into(),
                })
            } else {
                Ok(())
            }
        };

        match *self {
            GapModel::Linear { cost } => check("linear", cost),
            GapModel::Affine { open, extend } => {
                check("open", open)?;
                check("extend", extend)
            }
        }
    }

    /// The total penalty for a single run of `len` gaps. An empty run costs
    /// nothing.
    ///
    /// ## Example
    ///
    /// ```
    /// # use pairalign::alignment::GapModel;
    /// assert_eq!(GapModel::linear(-2).run_cost(3), -6);
    /// assert_eq!(GapModel::affine(-10, -1).run_cost(3), -13);
    /// assert_eq!(GapModel::affine(-10, -1).run_cost(0), 0);
    /// ```
    #[must_use]
    pub fn run_cost(&self, len: usize) -> S {
        if len == 0 {
            return S::ZERO;
        }

        match *self {
            GapModel::Linear { cost } => cost.scale(len),
            GapModel::Affine { open, extend } => open.add_score(extend.scale(len)),
        }
    }
}

//! Sets defined by a predicate, [`Pred`].

use crate::prelude::*;

/// The class of elements satisfying a predicate.
///
/// Unlike [`Set`], this supports nothing beyond membership and complement: there's no way to tell
/// whether two predicates overlap, or whether one implies the other.
#[derive(Clone, Copy)]
pub struct Pred<F> {
    /// The predicate.
    pred: F,
    /// Whether the predicate has been complemented.
    neg: bool,
}

impl<F> Debug for Pred<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Pred").field("neg", &self.neg).finish_non_exhaustive()
    }
}

impl<F> Pred<F> {
    /// Initializes the class of elements satisfying the predicate.
    pub const fn new(pred: F) -> Self {
        Self { pred, neg: false }
    }

    /// Absolute complement. This negates the predicate.
    #[must_use]
    pub fn complement(self) -> Self {
        Self {
            pred: self.pred,
            neg: !self.neg,
        }
    }

    /// Membership relation ∈.
    pub fn contains<T: ?Sized>(&self, el: &T) -> bool
    where
        F: Fn(&T) -> bool,
    {
        (self.pred)(el) != self.neg
    }
}

impl<T, F: Fn(&T) -> bool> Member<T> for Pred<F> {
    fn contains(&self, el: &T) -> bool {
        Pred::contains(self, el)
    }
}

impl<F> Complement for Pred<F> {
    type Output = Self;

    fn complement(self) -> Self {
        Pred::complement(self)
    }
}

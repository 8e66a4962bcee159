//! Case dispatch over pairs of [`Sets`](Set).
//!
//! Every binary operation and relation on sets is defined by four identities, one for each
//! combination of finite sets and anti-sets. A [`Case`] tags a pair of operands with its
//! combination, and hands out the underlying finite sets: the elements of a finite set, or the
//! excluded elements of an anti-set.

use crate::prelude::*;

/// The combination of variants of two [`Sets`](Set), together with their underlying finite sets.
///
/// `F` is either [`Fin`] or a reference to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case<F> {
    /// Two finite sets.
    FinFin(F, F),
    /// A finite set and an anti-set.
    FinAnti(F, F),
    /// An anti-set and a finite set.
    AntiFin(F, F),
    /// Two anti-sets.
    AntiAnti(F, F),
}

impl<T> Case<Fin<T>> {
    /// Classifies two owned sets.
    pub fn of(fst: Set<T>, snd: Set<T>) -> Self {
        match (fst, snd) {
            (Set::Fin(a), Set::Fin(b)) => Self::FinFin(a, b),
            (Set::Fin(a), Set::Anti(b)) => Self::FinAnti(a, b),
            (Set::Anti(a), Set::Fin(b)) => Self::AntiFin(a, b),
            (Set::Anti(a), Set::Anti(b)) => Self::AntiAnti(a, b),
        }
    }
}

impl<'a, T> Case<&'a Fin<T>> {
    /// Classifies two borrowed sets.
    pub fn of_ref(fst: &'a Set<T>, snd: &'a Set<T>) -> Self {
        match (fst, snd) {
            (Set::Fin(a), Set::Fin(b)) => Self::FinFin(a, b),
            (Set::Fin(a), Set::Anti(b)) => Self::FinAnti(a, b),
            (Set::Anti(a), Set::Fin(b)) => Self::AntiFin(a, b),
            (Set::Anti(a), Set::Anti(b)) => Self::AntiAnti(a, b),
        }
    }
}

impl<F> Case<F> {
    /// Whether the first operand is an anti-set.
    pub const fn fst_anti(&self) -> bool {
        matches!(self, Self::AntiFin(..) | Self::AntiAnti(..))
    }

    /// Whether the second operand is an anti-set.
    pub const fn snd_anti(&self) -> bool {
        matches!(self, Self::FinAnti(..) | Self::AntiAnti(..))
    }

    /// The underlying finite sets of both operands.
    pub fn into_inner(self) -> (F, F) {
        match self {
            Self::FinFin(a, b) | Self::FinAnti(a, b) | Self::AntiFin(a, b) | Self::AntiAnti(a, b) => {
                (a, b)
            }
        }
    }
}

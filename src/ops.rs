//! Binary operations on [`Sets`](Set).
//!
//! Each operation is given by four identities, one per [`Case`]. Writing `A'` and `B'` for the
//! excluded elements of anti-sets, these are:
//!
//! | Operation | A, B    | A, anti B'   | anti A', B      | anti A', anti B' |
//! |-----------|---------|--------------|-----------------|------------------|
//! | A ∪ B     | A ∪ B   | anti B' \ A  | anti A' \ B     | anti A' ∩ B'     |
//! | A ∩ B     | A ∩ B   | A \ B'       | B \ A'          | anti A' ∪ B'     |
//! | A \ B     | A \ B   | A ∩ B'       | anti A' ∪ B     | B' \ A'          |
//!
//! Every right-hand side is an operation on finite sets, so nothing unbounded is ever computed.

use crate::prelude::*;
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

impl<T: Ord> Set<T> {
    // -------------------- Binary operations -------------------- //

    /// Union x ∪ y.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        match Case::of(self, other) {
            Case::FinFin(a, b) => Self::Fin(a.union(b)),
            Case::FinAnti(a, b) => Self::Anti(b.diff(&a)),
            Case::AntiFin(a, b) => Self::Anti(a.diff(&b)),
            Case::AntiAnti(a, b) => Self::Anti(a.inter(b)),
        }
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn inter(self, other: Self) -> Self {
        match Case::of(self, other) {
            Case::FinFin(a, b) => Self::Fin(a.inter(b)),
            Case::FinAnti(a, b) => Self::Fin(a.diff(&b)),
            Case::AntiFin(a, b) => Self::Fin(b.diff(&a)),
            Case::AntiAnti(a, b) => Self::Anti(a.union(b)),
        }
    }

    /// Difference x \ y.
    #[must_use]
    pub fn diff(self, other: Self) -> Self {
        match Case::of(self, other) {
            Case::FinFin(a, b) => Self::Fin(a.diff(&b)),
            Case::FinAnti(a, b) => Self::Fin(a.inter(b)),
            Case::AntiFin(a, b) => Self::Anti(a.union(b)),
            Case::AntiAnti(a, b) => Self::Fin(b.diff(&a)),
        }
    }

    /// Symmetric difference x Δ y, computed as (x ∪ y) \ (x ∩ y).
    #[must_use]
    pub fn sym_diff(self, other: Self) -> Self
    where
        T: Clone,
    {
        let union = self.clone().union(other.clone());
        union.diff(self.inter(other))
    }

    // -------------------- Variadic operations -------------------- //

    /// Union over an iterator. The union of no sets is Ø.
    ///
    /// Stops consuming the iterator once the union becomes U.
    pub fn union_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        let mut res = Self::empty();
        for set in iter {
            res = res.union(set);
            if res.is_univ() {
                log::trace!("union reached the universal set");
                break;
            }
        }

        res
    }

    /// Intersection over an iterator. The intersection of no sets is U.
    ///
    /// Stops consuming the iterator once the intersection becomes Ø.
    pub fn inter_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        let mut res = Self::univ();
        for set in iter {
            res = res.inter(set);
            if res.is_empty() {
                log::trace!("intersection reached the empty set");
                break;
            }
        }

        res
    }

    /// Removes each set in an iterator from this one, from left to right.
    ///
    /// Stops consuming the iterator once the difference becomes Ø.
    #[must_use]
    pub fn diff_iter<I: IntoIterator<Item = Self>>(self, iter: I) -> Self {
        let mut res = self;
        for set in iter {
            if res.is_empty() {
                log::trace!("difference reached the empty set");
                break;
            }
            res = res.diff(set);
        }

        res
    }
}

// -------------------- Operators -------------------- //

/// Union x ∪ y.
impl<T: Ord> BitOr for Set<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Intersection x ∩ y.
impl<T: Ord> BitAnd for Set<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.inter(rhs)
    }
}

/// Difference x \ y.
impl<T: Ord> Sub for Set<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.diff(rhs)
    }
}

/// Symmetric difference x Δ y.
impl<T: Ord + Clone> BitXor for Set<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.sym_diff(rhs)
    }
}

/// Absolute complement.
impl<T> Not for Set<T> {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

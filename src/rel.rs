//! Relations between [`Sets`](Set).
//!
//! As with the [binary operations](crate::ops), intersection and subset tests are defined by four
//! identities each, reducing to relations between finite sets. The remaining relations are built
//! from these two.
//!
//! ## The universe
//!
//! Two of the identities can't be computed from finite data. They instead rely on the universe being
//! infinite:
//!
//! - Two anti-sets always intersect, as each of them misses only finitely many elements.
//! - An anti-set is never a subset of a finite set.
//!
//! These are false over a finite universe.

use crate::prelude::*;

impl<T: Ord> Set<T> {
    /// Whether two sets have some element in common.
    pub fn intersect(&self, other: &Self) -> bool {
        match Case::of_ref(self, other) {
            Case::FinFin(a, b) => !a.disjoint(b),
            // A ⊈ B'
            Case::FinAnti(a, b) => !a.subset(b),
            // B ⊈ A'
            Case::AntiFin(a, b) => !b.subset(a),
            Case::AntiAnti(..) => true,
        }
    }

    /// Whether two sets have no elements in common.
    pub fn disjoint(&self, other: &Self) -> bool {
        !self.intersect(other)
    }

    /// Subset relation ⊆.
    pub fn subset(&self, other: &Self) -> bool {
        match Case::of_ref(self, other) {
            Case::FinFin(a, b) => a.subset(b),
            // A ∩ B' = Ø
            Case::FinAnti(a, b) => a.disjoint(b),
            Case::AntiFin(..) => false,
            // B' ⊆ A'
            Case::AntiAnti(a, b) => b.subset(a),
        }
    }

    /// Superset relation ⊇.
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Strict subset relation ⊂.
    pub fn ssubset(&self, other: &Self) -> bool {
        self != other && self.subset(other)
    }

    /// Strict superset relation ⊃.
    pub fn ssuperset(&self, other: &Self) -> bool {
        other.ssubset(self)
    }
}

/// Sets are partially ordered by inclusion.
impl<T: Ord> PartialOrd for Set<T> {
    fn le(&self, other: &Self) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.superset(other)
    }

    fn lt(&self, other: &Self) -> bool {
        self.ssubset(other)
    }

    fn gt(&self, other: &Self) -> bool {
        self.ssuperset(other)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.subset(other) {
            Some(Ordering::Less)
        } else if self.superset(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

//! # Anti-sets
//!
//! Finite sets, together with their complements within an implicit, unbounded universe. A
//! complemented set, or **anti-set**, is stored as the finite set of elements it excludes.
//!
//! Every operation in this crate combines these two representations so that the result is again a
//! finite set or an anti-set. For instance, the union of `{1, 2}` with the anti-set excluding
//! `{2, 3}` is the anti-set excluding `{3}`:
//!
//! ```rust
//! use antiset::prelude::*;
//!
//! let a = Set::from([1, 2]);
//! let b = Set::from([2, 3]).complement();
//! assert_eq!(a.union(b), Set::from([3]).complement());
//! ```
//!
//! ## The universe
//!
//! The universe is never materialized, and is assumed to be infinite. Under this assumption, two
//! anti-sets always intersect, and an anti-set is never a subset of a finite set. Both of these
//! facts fail for finite universes, which this crate does not model.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod case;
pub mod fin;
pub mod ops;
pub mod pred;
pub mod prelude;
pub mod rel;
pub mod set;
mod tests;

use prelude::*;

/// A type whose values can be tested for membership of elements of type `T`.
///
/// This is implemented by [`Fin`], [`Set`], and [`Pred`]. Only the first two support any further
/// set algebra.
pub trait Member<T> {
    /// Membership relation ∈.
    fn contains(&self, el: &T) -> bool;

    /// Returns the element if it belongs to the set, or `None` otherwise.
    fn filter<'a>(&self, el: &'a T) -> Option<&'a T> {
        self.contains(el).then_some(el)
    }
}

/// A type with an absolute complement, taken within the universe.
pub trait Complement {
    /// The type of the complement.
    type Output;

    /// Absolute complement.
    #[must_use]
    fn complement(self) -> Self::Output;
}

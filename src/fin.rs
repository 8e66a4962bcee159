//! Finite sets [`Fin`].

use crate::prelude::*;

/// A finite set, stored as an ordered collection of distinct elements.
///
/// This is the primitive every other operation in the crate reduces to. All of its operations are
/// total, and all of them produce or consume finite sets only.
#[derive(Clone, PartialEq, Eq, Hash, From, IntoIterator)]
pub struct Fin<T>(#[into_iterator(owned, ref)] BTreeSet<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Fin<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Fin<T>> for BTreeSet<T> {
    fn from(set: Fin<T>) -> Self {
        set.0
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Fin<T> {
    fn from(arr: [T; N]) -> Self {
        Self(BTreeSet::from(arr))
    }
}

impl<T: Ord> FromIterator<T> for Fin<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Debug> Debug for Fin<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Displays a finite set in roster notation, with elements in increasing order.
impl<T: Display> Display for Fin<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for el in iter {
                write!(f, ", {el}")?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a set from its roster notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Missing or mismatched braces.
    Brackets,
    /// Some element could not be parsed.
    Element,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::Brackets => "mismatched brackets",
            Self::Element => "invalid set element",
        })
    }
}

impl std::error::Error for ParseError {}

/// Finite sets are parsed from their roster notation `{x, y, ...}`. Elements are separated by
/// commas, and whitespace around them is ignored. Repeated elements are merged.
impl<T: Ord + FromStr> FromStr for Fin<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseError::Brackets)?;

        if inner.contains(&['{', '}'][..]) {
            return Err(ParseError::Brackets);
        }
        if inner.trim().is_empty() {
            return Ok(Self::empty());
        }

        inner
            .split(',')
            .map(|el| el.trim().parse().map_err(|_| ParseError::Element))
            .collect()
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Fin<T> {
    /// Empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in increasing order.
    pub fn iter(&self) -> btree_set::Iter<T> {
        self.0.iter()
    }

    /// A reference to the underlying ordered set.
    #[must_use]
    pub const fn as_btree(&self) -> &BTreeSet<T> {
        &self.0
    }
}

impl<T: Ord> Fin<T> {
    /// Membership relation ∈.
    pub fn contains(&self, el: &T) -> bool {
        self.0.contains(el)
    }

    /// Singleton set {x}.
    pub fn singleton(el: T) -> Self {
        Self::from([el])
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, el: T) -> Self {
        self.0.insert(el);
        self
    }

    /// Set removal x \ {y}.
    #[must_use]
    pub fn remove(mut self, el: &T) -> Self {
        self.0.remove(el);
        self
    }

    // -------------------- Constructions -------------------- //

    /// Union x ∪ y.
    ///
    /// The elements of the smaller set are moved into the larger one.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let (mut large, small) = if self.card() >= other.card() {
            (self, other)
        } else {
            (other, self)
        };

        large.0.extend(small.0);
        large
    }

    /// Intersection x ∩ y.
    ///
    /// The smaller set is filtered against the larger one.
    #[must_use]
    pub fn inter(self, other: Self) -> Self {
        let (large, mut small) = if self.card() >= other.card() {
            (self, other)
        } else {
            (other, self)
        };

        small.0.retain(|el| large.contains(el));
        small
    }

    /// Difference x \ y.
    #[must_use]
    pub fn diff(mut self, other: &Self) -> Self {
        if other.card() < self.card() {
            for el in other.iter() {
                self.0.remove(el);
            }
        } else {
            self.0.retain(|el| !other.contains(el));
        }

        self
    }

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆.
    pub fn subset(&self, other: &Self) -> bool {
        self.card() <= other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Whether two sets have no elements in common.
    ///
    /// Iterates over the smaller set, testing membership in the larger.
    pub fn disjoint(&self, other: &Self) -> bool {
        let (large, small) = if self.card() >= other.card() {
            (self, other)
        } else {
            (other, self)
        };

        !small.iter().any(|el| large.contains(el))
    }
}

impl<T: Ord> Member<T> for Fin<T> {
    fn contains(&self, el: &T) -> bool {
        Fin::contains(self, el)
    }
}

/// The complement of a finite set is the anti-set excluding it.
impl<T> Complement for Fin<T> {
    type Output = Set<T>;

    fn complement(self) -> Set<T> {
        Set::Anti(self)
    }
}

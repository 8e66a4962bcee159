//! Finite sets and anti-sets, combined in [`Set`].

use crate::prelude::*;

/// Either a finite set, or an anti-set: the complement of a finite set within the universe.
///
/// ## Invariants
///
/// An anti-set stores the finite set of its excluded elements. Since this is always a [`Fin`],
/// complementing twice returns a structurally equal value.
///
/// Two sets are equal precisely when they have the same variant and the same underlying finite
/// set. Since the universe is assumed infinite, no finite set equals an anti-set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Set<T> {
    /// A finite set.
    Fin(Fin<T>),
    /// The anti-set excluding exactly the elements of a finite set.
    Anti(Fin<T>),
}

/// Error for queries that only make sense for finite sets.
///
/// An anti-set contains all but finitely many elements of an infinite universe, so it can't be
/// enumerated, and it has no finite cardinality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// The cardinality of an anti-set was requested.
    Card,
    /// The elements of an anti-set were requested.
    Iter,
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::Card => "an anti-set has no finite cardinality",
            Self::Iter => "the elements of an anti-set can't be enumerated",
        })
    }
}

impl std::error::Error for Unsupported {}

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Fin<T>> for Set<T> {
    fn from(set: Fin<T>) -> Self {
        Self::Fin(set)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Set<T> {
    fn from(arr: [T; N]) -> Self {
        Self::Fin(Fin::from(arr))
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Fin(iter.into_iter().collect())
    }
}

/// Only finite sets can be converted into [`Fin`].
impl<T> TryFrom<Set<T>> for Fin<T> {
    type Error = Unsupported;

    fn try_from(set: Set<T>) -> Result<Self, Unsupported> {
        match set {
            Set::Fin(set) => Ok(set),
            Set::Anti(_) => Err(Unsupported::Iter),
        }
    }
}

/// Anti-sets are written as their excluded set, prefixed by `#-`.
impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fin(set) => write!(f, "{set:?}"),
            Self::Anti(set) => write!(f, "#-{set:?}"),
        }
    }
}

/// Anti-sets are written as their excluded set, prefixed by `#-`.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fin(set) => write!(f, "{set}"),
            Self::Anti(set) => write!(f, "#-{set}"),
        }
    }
}

/// Parses either `{x, y, ...}` or `#-{x, y, ...}`. See [`Fin::from_str`].
impl<T: Ord + FromStr> FromStr for Set<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if let Some(excluded) = s.strip_prefix("#-") {
            excluded.parse().map(Self::Anti)
        } else {
            s.parse().map(Self::Fin)
        }
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// Empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Fin(Fin::empty())
    }

    /// Universal set U, the complement of Ø.
    #[must_use]
    pub const fn univ() -> Self {
        Self::Anti(Fin::empty())
    }

    /// Whether this is the empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Fin(set) if set.is_empty())
    }

    /// Whether this is the universal set.
    #[must_use]
    pub fn is_univ(&self) -> bool {
        matches!(self, Self::Anti(set) if set.is_empty())
    }

    /// Whether this is a finite set.
    #[must_use]
    pub const fn is_fin(&self) -> bool {
        matches!(self, Self::Fin(_))
    }

    /// Whether this is an anti-set.
    #[must_use]
    pub const fn is_anti(&self) -> bool {
        matches!(self, Self::Anti(_))
    }

    /// The elements excluded by an anti-set, or `None` for a finite set.
    #[must_use]
    pub const fn excluded(&self) -> Option<&Fin<T>> {
        match self {
            Self::Fin(_) => None,
            Self::Anti(set) => Some(set),
        }
    }

    /// Absolute complement.
    ///
    /// This is an involution, and the only way to build an anti-set out of a finite set.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Fin(set) => Self::Anti(set),
            Self::Anti(set) => Self::Fin(set),
        }
    }

    /// Set cardinality.
    ///
    /// ## Errors
    ///
    /// Anti-sets have no finite cardinality, and return [`Unsupported::Card`].
    pub fn card(&self) -> Result<usize, Unsupported> {
        match self {
            Self::Fin(set) => Ok(set.card()),
            Self::Anti(_) => Err(Unsupported::Card),
        }
    }

    /// Iterate over the elements of a finite set.
    ///
    /// ## Errors
    ///
    /// Anti-sets can't be enumerated, and return [`Unsupported::Iter`].
    pub fn iter(&self) -> Result<btree_set::Iter<T>, Unsupported> {
        match self {
            Self::Fin(set) => Ok(set.iter()),
            Self::Anti(_) => Err(Unsupported::Iter),
        }
    }
}

impl<T: Ord> Set<T> {
    /// Membership relation ∈.
    pub fn contains(&self, el: &T) -> bool {
        match self {
            Self::Fin(set) => set.contains(el),
            Self::Anti(set) => !set.contains(el),
        }
    }

    /// Set insertion x ∪ {y}.
    ///
    /// For an anti-set, this removes the element from the excluded set.
    #[must_use]
    pub fn insert(self, el: T) -> Self {
        match self {
            Self::Fin(set) => Self::Fin(set.insert(el)),
            Self::Anti(set) => Self::Anti(set.remove(&el)),
        }
    }

    /// Set removal x \ {y}.
    ///
    /// For an anti-set, this adds the element to the excluded set.
    #[must_use]
    pub fn remove(self, el: &T) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Fin(set) => Self::Fin(set.remove(el)),
            Self::Anti(set) => Self::Anti(set.insert(el.clone())),
        }
    }
}

impl<T: Ord> Member<T> for Set<T> {
    fn contains(&self, el: &T) -> bool {
        Set::contains(self, el)
    }
}

impl<T> Complement for Set<T> {
    type Output = Self;

    fn complement(self) -> Self {
        Set::complement(self)
    }
}

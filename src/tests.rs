//! General library tests.
//!
//! Every law is checked over all pairs of sets in a suite, for several element types. Operations
//! are compared element by element against a small alphabet.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// Creates analogous tests for sets of integers and sets of characters.
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = int, $name {
                #[test]
                fn fn_name() {
                    u8::$name();
                }
            });

            concat_idents!(fn_name = char, $name {
                #[test]
                fn fn_name() {
                    char::$name();
                }
            });
        )*
    };
}

trait Suite: Ord + Clone + Debug + Display + FromStr + 'static {
    /// Finite sets and anti-sets for general-purpose testing.
    ///
    /// Each set should be normalized, i.e. written as it is displayed.
    const SUITE: &'static [&'static str];

    /// Elements to test membership against. These should include every element mentioned in
    /// [`SUITE`](Suite::SUITE), plus some others.
    const ALPHABET: &'static [Self];

    /// Our [`SUITE`](Suite::SUITE) as `(&str, Set)` pairs.
    fn suite() -> impl Iterator<Item = (&'static str, Set<Self>)> {
        Self::SUITE.iter().map(|&str| (str, str.parse().unwrap()))
    }

    /// All ordered pairs of sets from the suite.
    fn pairs() -> impl Iterator<Item = (Set<Self>, Set<Self>)> {
        Self::suite().flat_map(|(_, fst)| Self::suite().map(move |(_, snd)| (fst.clone(), snd)))
    }

    /// Asserts that `set` contains precisely the elements of the alphabet satisfying `pred`.
    fn check<P: Fn(&Self) -> bool>(set: &Set<Self>, pred: P, msg: &str) {
        for el in Self::ALPHABET {
            assert_eq!(set.contains(el), pred(el), "{msg} fail at {el}: {set}");
        }
    }

    /// Test that our [`SUITE`](Suite::SUITE) round-trips.
    fn _suite() {
        for (str, set) in Self::suite() {
            assert_eq!(set.to_string(), str, "test suite must round-trip");
        }
    }

    /// Test [`Set::eq`].
    fn _eq() {
        for (i, (_, set_1)) in Self::suite().enumerate() {
            for (j, (_, set_2)) in Self::suite().enumerate() {
                assert_eq!(
                    i == j,
                    set_1 == set_2,
                    "set equality fail at {i}, {j}: {set_1} | {set_2}"
                );
            }
        }
    }

    /// Test [`Set::complement`].
    fn _complement() {
        for (_, set) in Self::suite() {
            let comp = set.clone().complement();
            Self::check(&comp, |el| !set.contains(el), "complement");
            assert_eq!(comp.complement(), set, "complement must be an involution");
        }
    }

    /// Test that the universal and empty sets absorb union and intersection respectively.
    fn _absorb() {
        for (_, set) in Self::suite() {
            assert_eq!(set.clone().union(Set::univ()), Set::univ());
            assert_eq!(Set::univ().union(set.clone()), Set::univ());
            assert_eq!(set.clone().inter(Set::empty()), Set::empty());
            assert_eq!(Set::empty().inter(set.clone()), Set::empty());
            assert_eq!(Set::empty().diff(set.clone()), Set::empty());

            assert_eq!(set.clone().union(Set::empty()), set);
            assert_eq!(set.clone().inter(Set::univ()), set);
            assert_eq!(set.clone().diff(Set::empty()), set);
            assert_eq!(set.clone().diff(Set::univ()), Set::empty());
        }
    }

    /// Test [`Set::union`].
    fn _union() {
        for (a, b) in Self::pairs() {
            let union = a.clone().union(b.clone());
            Self::check(&union, |el| a.contains(el) || b.contains(el), "union");
            assert_eq!(union, b.union(a), "union must commute");
        }
    }

    /// Test [`Set::inter`].
    fn _inter() {
        for (a, b) in Self::pairs() {
            let inter = a.clone().inter(b.clone());
            Self::check(&inter, |el| a.contains(el) && b.contains(el), "intersection");
            assert_eq!(inter, b.inter(a), "intersection must commute");
        }
    }

    /// Test [`Set::diff`].
    fn _diff() {
        for (a, b) in Self::pairs() {
            let diff = a.clone().diff(b.clone());
            Self::check(&diff, |el| a.contains(el) && !b.contains(el), "difference");
        }
    }

    /// Test [`Set::sym_diff`].
    fn _sym_diff() {
        for (a, b) in Self::pairs() {
            let sym_diff = a.clone().sym_diff(b.clone());
            Self::check(
                &sym_diff,
                |el| a.contains(el) != b.contains(el),
                "symmetric difference",
            );
        }
    }

    /// Test De Morgan's laws.
    fn _de_morgan() {
        for (a, b) in Self::pairs() {
            assert_eq!(
                a.clone().union(b.clone()).complement(),
                a.clone().complement().inter(b.clone().complement())
            );
            assert_eq!(
                a.clone().inter(b.clone()).complement(),
                a.clone().complement().union(b.clone().complement())
            );
            assert_eq!(a.clone().diff(b.clone()), a.inter(b.complement()));
        }
    }

    /// Test [`Set::intersect`] and [`Set::disjoint`].
    fn _intersect() {
        for (a, b) in Self::pairs() {
            let inter = a.clone().inter(b.clone());
            assert_eq!(
                a.intersect(&b),
                !inter.is_empty(),
                "intersect fail: {a} | {b}"
            );
            assert_eq!(a.intersect(&b), b.intersect(&a));
            assert_eq!(a.disjoint(&b), !a.intersect(&b));
        }
    }

    /// Test [`Set::subset`] and [`Set::superset`].
    fn _subset() {
        for (a, b) in Self::pairs() {
            let union = a.clone().union(b.clone());
            let diff = a.clone().diff(b.clone());
            assert_eq!(a.subset(&b), union == b, "subset fail: {a} | {b}");
            assert_eq!(a.subset(&b), diff.is_empty(), "subset fail: {a} | {b}");
            assert_eq!(a.subset(&b), b.superset(&a));
            assert_eq!(a.subset(&b), a <= b);
        }
    }

    /// Test [`Set::ssubset`] and [`Set::ssuperset`].
    fn _ssubset() {
        for (a, b) in Self::pairs() {
            assert_eq!(a.ssubset(&b), a.subset(&b) && a != b);
            assert_eq!(a.ssubset(&b), b.ssuperset(&a));
            assert_eq!(a.ssubset(&b), a < b);
        }
    }

    /// Test that the variadic operations agree with plain folds, whether or not they
    /// short-circuit.
    fn _variadic() {
        let sets: Vec<Set<Self>> = Self::suite().map(|(_, set)| set).collect();
        for i in 0..sets.len() {
            let mut rot = sets.clone();
            rot.rotate_left(i);

            let union = rot.iter().cloned().fold(Set::empty(), Set::union);
            assert_eq!(Set::union_iter(rot.clone()), union);

            let inter = rot.iter().cloned().fold(Set::univ(), Set::inter);
            assert_eq!(Set::inter_iter(rot.clone()), inter);

            let fst = rot.remove(0);
            let diff = rot.iter().cloned().fold(fst.clone(), Set::diff);
            assert_eq!(fst.diff_iter(rot), diff);
        }
    }

    /// Test [`Set::card`] and [`Set::iter`].
    fn _card() {
        for (_, set) in Self::suite() {
            if let Some(excluded) = set.excluded() {
                assert!(!excluded.iter().any(|el| set.contains(el)));
                assert_eq!(set.card(), Err(Unsupported::Card));
                assert!(set.iter().is_err());
            } else {
                let els: Vec<_> = set.iter().unwrap().cloned().collect();
                assert_eq!(set.card(), Ok(els.len()));
                Self::check(&set, |el| els.contains(el), "enumeration");
            }
        }
    }
}

impl Suite for u8 {
    const SUITE: &'static [&'static str] = &[
        "{}",
        "{1}",
        "{1, 2}",
        "{2, 3}",
        "{0, 2, 4}",
        "#-{}",
        "#-{1}",
        "#-{1, 2}",
        "#-{2, 3}",
        "#-{0, 1, 2, 3, 4, 5}",
    ];

    const ALPHABET: &'static [Self] = &[0, 1, 2, 3, 4, 5, 6];
}

impl Suite for char {
    const SUITE: &'static [&'static str] = &[
        "{}",
        "{a}",
        "{a, b}",
        "{b, c}",
        "#-{}",
        "#-{a}",
        "#-{b, c}",
        "#-{a, b, c, d}",
    ];

    const ALPHABET: &'static [Self] = &['a', 'b', 'c', 'd', 'e', 'f'];
}

test!(
    _suite,
    _eq,
    _complement,
    _absorb,
    _union,
    _inter,
    _diff,
    _sym_diff,
    _de_morgan,
    _intersect,
    _subset,
    _ssubset,
    _variadic,
    _card
);

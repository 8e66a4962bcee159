//! Crate prelude.

// The actual prelude.
pub use crate::{
    case::Case,
    fin::{Fin, ParseError},
    pred::Pred,
    set::{Set, Unsupported},
    Complement, Member,
};

// Convenient imports within the crate.
pub(crate) use derive_more::{From, IntoIterator};
pub(crate) use std::{
    cmp::Ordering,
    collections::{btree_set, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    str::FromStr,
};

//! Immutable, value-semantic ordered sequences.
//!
//! The core is [`Seq<T>`](sequence::Seq): a fixed snapshot of elements with indexed
//! access, search, filtering, mapping, stable sorting, joining, structural equality
//! and reproducible hash codes. [`lang`] carries a few small helpers that travel
//! with it.

/// Builds a [`Seq`](crate::sequence::Seq) from a list of elements.
///
/// ```
/// use seqview::sequence::prelude::*;
///
/// let hello = seqview::seq!["h", "e", "l", "l", "o"];
/// assert_eq!(hello.size(), 5);
///
/// let none: Seq<u8> = seqview::seq![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::Seq::empty()
    };
    ($($item: expr),+ $(,)?) => {
        $crate::sequence::Seq::from(vec![$($item),+])
    };
}

pub mod lang;
pub mod sequence;


use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::sync::Arc;

use super::error::{Result, SeqError};
use super::Seq;

/// ### -> `Sequence<T> Trait`.
///
/// The read-only contract of an ordered, fixed-length, immutable collection.
///
/// Implementors supply a single accessor, `as_slice`, and receive every query,
/// transform and comparison operation as a provided method. Because all the
/// behaviour lives here, any two implementations agree on semantics, and
/// structural equality (`content_eq`) works across implementations and across
/// element types.
///
/// Type Parameters:
/// - `T`: The element type. Absent values are modelled as `Option<_>` elements.
///
/// ### -> `Methods`
/// - Queries: `size`, `is_empty`, `has_items`, `has_single_item`, `item`, `first`,
///   `index_of`, `contains`, `single_item`, `single_item_or_none`, `any_item`,
///   `any_item_or_none`, `for_each`, `iter`.
/// - Transforms (each returns a new `Seq`): `filter`, `try_filter`, `map`, `try_map`,
///   `sorted`, `sorted_by`, `sorted_by_key`.
/// - Text: `joined`, `joined_with`, `joined_by`.
/// - Identity: `content_eq`.
///
/// ### -> `Errors`
///
/// Queries whose precondition is not met return a [`SeqError`]. Callbacks handed to
/// transforms are never guarded: a panic unwinds through the call, and the `try_*`
/// variants hand back the callback's own error untouched.
///
/// ### -> `Usage`
///
/// ```
/// use seqview::sequence::prelude::*;
///
/// let hello = seqview::seq!["h", "e", "l", "l", "o"];
///
/// assert_eq!(hello.size(), 5);
/// assert_eq!(hello.index_of(&"l"), Some(2));
/// assert_eq!(hello.filter(|item| *item == "l"), ["l", "l"]);
/// assert_eq!(hello.sorted(), ["e", "h", "l", "l", "o"]);
/// assert_eq!(hello.joined_by("-", |item| format!("({item})")), "(h)-(e)-(l)-(l)-(o)");
/// ```
pub trait Sequence<T> {
    /// The elements, in sequence order.
    fn as_slice(&self) -> &[T];

    fn size(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn has_items(&self) -> bool {
        self.size() > 0
    }

    fn has_single_item(&self) -> bool {
        self.size() == 1
    }

    /// Returns the element at `index` (0-based).
    fn item(&self, index: usize) -> Result<&T> {
        let items = self.as_slice();
        items.get(index).ok_or(SeqError::IndexOutOfBounds { index, size: items.len() })
    }

    fn first(&self) -> Result<&T> {
        self.as_slice().first().ok_or(SeqError::Empty)
    }

    /// Returns the index of the first element equal to `value`, or `None`.
    fn index_of<U>(&self, value: &U) -> Option<usize>
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.as_slice().iter().position(|item| item == value)
    }

    fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.index_of(value).is_some()
    }

    /// Returns the sole element. Fails when the sequence is empty or holds more than one item.
    fn single_item(&self) -> Result<&T> {
        match self.as_slice() {
            [item] => Ok(item),
            [] => Err(SeqError::Empty),
            items => Err(SeqError::MultipleItems { size: items.len() }),
        }
    }

    /// As `single_item`, but an empty sequence yields `Ok(None)`.
    fn single_item_or_none(&self) -> Result<Option<&T>> {
        match self.single_item() {
            Ok(item) => Ok(Some(item)),
            Err(SeqError::Empty) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Returns some element of the sequence. Which one is unspecified.
    fn any_item(&self) -> Result<&T> {
        self.any_item_or_none().ok_or(SeqError::Empty)
    }

    fn any_item_or_none(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.as_slice().iter().for_each(action)
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the elements matching `predicate`, in their original order.
    #[must_use = "Filtering builds a new sequence and leaves this one untouched!"]
    fn filter<P>(&self, mut predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
        Self: Sized,
    {
        self.as_slice()
            .iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect()
    }

    /// As `filter`, stopping at the first error the predicate returns.
    fn try_filter<P, E>(&self, mut predicate: P) -> std::result::Result<Seq<T>, E>
    where
        P: FnMut(&T) -> std::result::Result<bool, E>,
        T: Clone,
        Self: Sized,
    {
        let mut kept = Vec::new();
        for item in self.as_slice() {
            if predicate(item)? {
                kept.push(item.clone());
            }
        }
        Ok(Seq::from(kept))
    }

    /// Returns a sequence of the same length whose element `i` is `function(item(i))`.
    #[must_use = "Mapping builds a new sequence and leaves this one untouched!"]
    fn map<U, F>(&self, function: F) -> Seq<U>
    where
        F: FnMut(&T) -> U,
        Self: Sized,
    {
        self.as_slice().iter().map(function).collect()
    }

    /// As `map`, stopping at the first error the function returns.
    fn try_map<U, F, E>(&self, function: F) -> std::result::Result<Seq<U>, E>
    where
        F: FnMut(&T) -> std::result::Result<U, E>,
        Self: Sized,
    {
        self.as_slice()
            .iter()
            .map(function)
            .collect::<std::result::Result<Vec<U>, E>>()
            .map(Seq::from)
    }

    /// Returns the elements reordered by `comparator`. The sort is stable.
    #[must_use = "Sorting builds a new sequence and leaves this one untouched!"]
    fn sorted_by<C>(&self, comparator: C) -> Seq<T>
    where
        C: FnMut(&T, &T) -> Ordering,
        T: Clone,
        Self: Sized,
    {
        let mut items = self.as_slice().to_vec();
        items.sort_by(comparator);
        tracing::trace!(size = items.len(), "sorted sequence");
        Seq::from(items)
    }

    /// Sorts in natural order.
    #[must_use = "Sorting builds a new sequence and leaves this one untouched!"]
    fn sorted(&self) -> Seq<T>
    where
        T: Ord + Clone,
        Self: Sized,
    {
        self.sorted_by(Ord::cmp)
    }

    #[must_use = "Sorting builds a new sequence and leaves this one untouched!"]
    fn sorted_by_key<K, F>(&self, mut key: F) -> Seq<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
        T: Clone,
        Self: Sized,
    {
        self.sorted_by(|left, right| key(left).cmp(&key(right)))
    }

    /// Concatenates the text of every element, without a separator.
    fn joined(&self) -> String
    where
        T: Display,
    {
        self.joined_with("")
    }

    /// Concatenates the text of every element, with `separator` between adjacent elements.
    fn joined_with(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut text = String::new();
        for (position, item) in self.as_slice().iter().enumerate() {
            if position > 0 {
                text.push_str(separator);
            }
            write!(text, "{item}").ok();
        }
        text
    }

    /// As `joined_with`, rendering each element through `to_text`.
    fn joined_by<S, F>(&self, separator: &str, mut to_text: F) -> String
    where
        S: Display,
        F: FnMut(&T) -> S,
    {
        let mut text = String::new();
        for (position, item) in self.as_slice().iter().enumerate() {
            if position > 0 {
                text.push_str(separator);
            }
            write!(text, "{}", to_text(item)).ok();
        }
        text
    }

    /// Structural equality: same length and pairwise equal elements, in order.
    ///
    /// Works across implementations and element types. A sequence compared with
    /// its own backing store is always equal, even when its elements are not
    /// reflexively equal (e.g. `f64::NAN`).
    fn content_eq<U, S>(&self, other: &S) -> bool
    where
        S: Sequence<U> + ?Sized,
        T: PartialEq<U>,
    {
        let (left, right) = (self.as_slice(), other.as_slice());
        if left.len() != right.len() {
            return false;
        }
        std::ptr::eq(left.as_ptr().cast::<()>(), right.as_ptr().cast::<()>()) || left == right
    }
}

impl <T, S> Sequence<T> for Arc<S>
where
    S: Sequence<T>,
{
    fn as_slice(&self) -> &[T] {
        (**self).as_slice()
    }
}

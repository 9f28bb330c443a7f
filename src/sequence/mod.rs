use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

mod error;
mod hash;
mod stream;
mod traits;

pub use error::{Result, SeqError};
pub use hash::{ordered_hash_code, HashCode};
pub use stream::Stream;
pub use traits::Sequence;

/// Backing store of a [`Seq`]. The empty variant needs no allocation, which is
/// what lets the canonical empty sequence be a constant.
pub(crate) enum Snapshot<T> {
    Empty,
    Shared(Arc<[T]>),
}

impl <T> Snapshot<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Snapshot::Empty => &[],
            Snapshot::Shared(items) => &items[..],
        }
    }
}

impl <T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        match self {
            Snapshot::Empty => Snapshot::Empty,
            Snapshot::Shared(items) => Snapshot::Shared(Arc::clone(items)),
        }
    }
}

/// ### -> `Seq<T>` - An immutable, value-semantic, ordered sequence.
///
/// `Seq<T>` is a fixed-length snapshot of elements. Once built, neither its length
/// nor the value at any position ever changes; every transform (`filter`, `map`,
/// `sorted`, ...) returns a new `Seq`.
///
/// ### -> `Construction`
///
/// - `Seq::of(iterable)`, `Seq::from(vec)`, `Seq::from(&slice)`, `Seq::from([..])`,
///   `iter.collect::<Seq<_>>()` or the `seq![..]` macro.
/// - The input is copied (or moved) into the snapshot, so later changes to the
///   caller's collection are never observed through the sequence.
/// - Zero elements yield the canonical empty sequence, [`Seq::EMPTY`].
///
/// ### -> `Operations`
///
/// All query and transform operations come from the [`Sequence`] trait; bring it in
/// scope through `seqview::sequence::prelude::*`.
///
/// ### -> `Equality and Hashing`
///
/// - Equality is structural: two sequences are equal when they have the same length
///   and pairwise equal elements, whatever their element types
///   (`Seq<String> == Seq<&str>` works when `String: PartialEq<&str>`).
/// - [`HashCode`] gives a reproducible 32-bit code (`1`, then `31 * acc + code(item)`
///   per element); `std::hash::Hash` is implemented as well, consistent with `Eq`.
///
/// ### -> `Text`
///
/// `Display` and `joined`/`joined_with` need `T: Display`. Absent elements are
/// `Option<_>`, which has no `Display`, so render those through `joined_by`:
///
/// ```
/// use seqview::sequence::prelude::*;
///
/// let gaps = Seq::of([Some(1), None, Some(3)]);
/// let text = gaps.joined_by(", ", |item| item.map_or(String::from("none"), |n| n.to_string()));
/// assert_eq!(text, "1, none, 3");
/// ```
///
/// ### -> `Memory and Threads`
///
/// The elements live in an `Arc<[T]>`. Cloning a `Seq` shares the snapshot and costs
/// one reference-count increment. Since nothing is ever written after construction,
/// `Seq<T>` is `Send + Sync` whenever `T` is and reads never lock.
///
/// ### -> `Usage Example`
///
/// ```
/// use seqview::sequence::prelude::*;
///
/// let single = Seq::of(["a"]);
/// assert_eq!(single.single_item(), Ok(&"a"));
/// assert_eq!(single.hash_code(), 128);
/// assert!(single.to_string().ends_with("[a]"));
///
/// let codes = seqview::seq!["h", "e", "l", "l", "o"].map(|item| item.chars().next().map_or(0, u32::from));
/// assert_eq!(codes, [104u32, 101, 108, 108, 111]);
///
/// assert_eq!(empty::<String>().joined_with("-"), "");
/// ```
pub struct Seq<T> {
    snapshot: Snapshot<T>,
}

impl <T> Seq<T> {
    /// The canonical zero-length sequence.
    pub const EMPTY: Self = Self { snapshot: Snapshot::Empty };

    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Builds a sequence from the elements of `elements`, preserving their order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(elements.into_iter().collect::<Vec<T>>())
    }

    /// Returns a lazy, owning view over the elements.
    ///
    /// Each call yields an independent stream; the stream shares the snapshot, so
    /// creating one does not copy the elements.
    pub fn stream(&self) -> Stream<T>
    where
        T: Clone,
    {
        Stream::new(self.snapshot.clone())
    }
}

impl <T> Seq<T>
where
    T: PartialEq + 'static,
{
    /// Run-time, type-erased equality.
    ///
    /// `other` is equal when it is a `Seq<T>` (or an `Arc<Seq<T>>`) with the same
    /// content. An absent comparand or a value of any other type is never equal.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        let Some(other) = other else { return false };

        if let Some(sequence) = other.downcast_ref::<Seq<T>>() {
            self.content_eq(sequence)
        } else if let Some(sequence) = other.downcast_ref::<Arc<Seq<T>>>() {
            self.content_eq(sequence)
        } else {
            false
        }
    }
}

/// Returns the canonical empty sequence.
pub const fn empty<T>() -> Seq<T> {
    Seq::EMPTY
}

impl <T> Sequence<T> for Seq<T> {
    fn as_slice(&self) -> &[T] {
        self.snapshot.as_slice()
    }
}

impl <T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self { snapshot: self.snapshot.clone() }
    }
}

impl <T> Default for Seq<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl <T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            return Self::EMPTY;
        }
        tracing::trace!(size = items.len(), "snapshot sequence");
        Self { snapshot: Snapshot::Shared(Arc::from(items)) }
    }
}

impl <T: Clone> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl <T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl <T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl <'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl <T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = Stream<T>;

    fn into_iter(self) -> Self::IntoIter {
        Stream::new(self.snapshot)
    }
}

impl <T, U> PartialEq<Seq<U>> for Seq<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Seq<U>) -> bool {
        self.content_eq(other)
    }
}

impl <T: Eq> Eq for Seq<T> {}

impl <T, U> PartialEq<[U]> for Seq<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl <T, U, const N: usize> PartialEq<[U; N]> for Seq<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl <T, U> PartialEq<Vec<U>> for Seq<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl <T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl <T: HashCode> HashCode for Seq<T> {
    fn hash_code(&self) -> i32 {
        ordered_hash_code(self.as_slice())
    }
}

impl <T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seq[")?;
        for (position, item) in self.as_slice().iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl <T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seq")?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;

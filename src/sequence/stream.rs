use std::iter::FusedIterator;

use super::Snapshot;

/// A lazy, owning view over the elements of a [`Seq`](super::Seq).
///
/// The stream holds its own handle on the snapshot, so it outlives the sequence it
/// came from and never observes anything but the original elements. Cloning a
/// stream forks it at its current position.
pub struct Stream<T> {
    snapshot: Snapshot<T>,
    front: usize,
    back: usize,
}

impl <T> Stream<T> {
    pub(crate) fn new(snapshot: Snapshot<T>) -> Self {
        let back = snapshot.as_slice().len();
        Self { snapshot, front: 0, back }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.snapshot.as_slice()[self.front..self.back]
    }
}

impl <T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self { snapshot: self.snapshot.clone(), front: self.front, back: self.back }
    }
}

impl <T: Clone> Iterator for Stream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.snapshot.as_slice().get(self.front).cloned();
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl <T: Clone> DoubleEndedIterator for Stream<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.snapshot.as_slice().get(self.back).cloned()
    }
}

impl <T: Clone> ExactSizeIterator for Stream<T> {}

impl <T: Clone> FusedIterator for Stream<T> {}

impl <T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Stream").field(&self.as_slice()).finish()
    }
}

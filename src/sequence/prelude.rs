pub use {
    crate::sequence::{Seq, Stream, empty},
    crate::sequence::traits::Sequence,
    crate::sequence::hash::HashCode,
    crate::sequence::error::SeqError,
};

//! Small language-level helpers that sit next to the sequence core: line-break
//! constants, checked casts over type-erased values and error erasure.

pub mod character;
pub mod object;
pub mod unchecked;

pub use object::{check_type, value_or_else, TypeMismatch};
pub use unchecked::unchecked;

use std::any::{type_name, Any};

use thiserror::Error;

/// A value did not have the type a caller required of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value is not of type {expected} (but {actual})")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// Returns `value` as a `&T`, or a [`TypeMismatch`] when it is absent or of another type.
///
/// ```
/// use std::any::Any;
/// use seqview::lang::check_type;
///
/// let value: Box<dyn Any> = Box::new(String::from("foo"));
/// assert_eq!(check_type::<String>(Some(&*value)).unwrap(), "foo");
///
/// let error = check_type::<u32>(Some(&*value)).unwrap_err();
/// assert_eq!(error.to_string(), "value is not of type u32 (but another type)");
/// ```
pub fn check_type<T: Any>(value: Option<&dyn Any>) -> Result<&T, TypeMismatch> {
    let mismatch = |actual| TypeMismatch { expected: type_name::<T>(), actual };

    match value {
        None => Err(mismatch("none")),
        Some(value) => value.downcast_ref::<T>().ok_or_else(|| mismatch("another type")),
    }
}

/// Returns `value` when present, otherwise `other`.
pub fn value_or_else<T>(value: Option<T>, other: T) -> T {
    value.unwrap_or(other)
}

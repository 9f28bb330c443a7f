use std::rc::Rc;
use std::sync::Arc;

/// ### -> `HashCode Trait`.
///
/// A reproducible 32-bit hash code for sequence elements.
///
/// Unlike `std::hash::Hash`, whose output depends on the hasher in use, a
/// `HashCode` is fixed for a given value. This is what makes the code of a whole
/// [`Seq`](super::Seq) byte-for-byte reproducible across processes and
/// implementations.
///
/// ### -> `Built-in Codes`
///
/// - `str` / `String`: `h = 31 * h + unit` over the UTF-16 code units, starting at 0.
/// - `char`: the scalar value.
/// - `i8`, `i16`, `i32`, `u8`, `u16`, `u32`: the value as `i32`.
/// - `i64`, `u64`, `isize`, `usize`: `(v ^ (v >> 32)) as i32`.
/// - `bool`: `1231` for `true`, `1237` for `false`.
/// - `f32` / `f64`: the canonical bit pattern (all NaNs hash alike, `-0.0` hashes as `0.0`).
/// - `Option<T>`: `0` for `None`, the inner code for `Some`.
/// - slices and vectors: the ordered-collection code (see `ordered_hash_code`).
///
/// All arithmetic wraps.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

/// Folds element codes the way every ordered collection in this crate does:
/// start at 1, then `acc = 31 * acc + code` for each element in order.
pub fn ordered_hash_code<'a, T, I>(items: I) -> i32
where
    T: HashCode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(1i32, |acc, item| acc.wrapping_mul(31).wrapping_add(item.hash_code()))
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl HashCode for char {
    fn hash_code(&self) -> i32 {
        *self as u32 as i32
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

macro_rules! narrow_hash_code {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! wide_hash_code {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                fn hash_code(&self) -> i32 {
                    let v = *self as u64;
                    (v ^ (v >> 32)) as i32
                }
            }
        )*
    };
}

narrow_hash_code!(i8, i16, i32, u8, u16, u32);
wide_hash_code!(i64, u64, isize, usize);

impl HashCode for f32 {
    fn hash_code(&self) -> i32 {
        // 0.0 == -0.0, so both must share a code
        let bits = if self.is_nan() { 0x7fc0_0000 } else if *self == 0.0 { 0 } else { self.to_bits() };
        bits as i32
    }
}

impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() { 0x7ff8_0000_0000_0000 } else if *self == 0.0 { 0 } else { self.to_bits() };
        (bits ^ (bits >> 32)) as i32
    }
}

impl <T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl <T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        ordered_hash_code(self)
    }
}

impl <T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        ordered_hash_code(self)
    }
}

impl <T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl <T: HashCode + ?Sized> HashCode for Box<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl <T: HashCode + ?Sized> HashCode for Rc<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl <T: HashCode + ?Sized> HashCode for Arc<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

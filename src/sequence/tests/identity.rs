use super::*;
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equals() {
    assert_eq!(no_item_seq(), no_item_seq());
    assert_eq!(single_item_seq(), single_item_seq());
    assert_eq!(hello_seq(), hello_seq());

    assert_ne!(no_item_seq(), single_item_seq());
    assert_ne!(single_item_seq(), hello_seq());
    assert_ne!(hello_seq(), no_item_seq());

    let hello = hello_seq();
    assert_eq!(hello, hello);
}

#[test]
fn equals_across_element_types() {
    let owned: Seq<String> = hello_seq().map(|item| item.to_string());

    assert_eq!(owned, hello_seq());
    assert_eq!(hello_seq(), owned);
    assert_ne!(owned, single_item_seq());
}

#[test]
fn equals_is_reflexive_for_nan() {
    let sequence = Seq::of([1.0, f64::NAN]);
    let copied = Seq::of([1.0, f64::NAN]);

    assert_eq!(sequence, sequence.clone());
    assert_ne!(sequence, copied);
}

#[test]
fn equals_any() {
    let hello = hello_seq();

    assert!(hello.equals_any(Some(&hello as &dyn Any)));
    assert!(hello.equals_any(Some(&hello_seq() as &dyn Any)));
    assert!(hello.equals_any(Some(&Arc::new(hello_seq()) as &dyn Any)));

    assert!(!hello.equals_any(None));
    assert!(!hello.equals_any(Some(&single_item_seq() as &dyn Any)));
    assert!(!hello.equals_any(Some(&"hello" as &dyn Any)));
    assert!(!hello.equals_any(Some(&HELLO.to_vec() as &dyn Any)));
    // element types are part of the run-time type
    assert!(!hello.equals_any(Some(&hello_seq().map(|item| item.to_string()) as &dyn Any)));
}

#[test]
fn hash_code() {
    assert_eq!(no_item_seq().hash_code(), 1);
    assert_eq!(single_item_seq().hash_code(), 128);
    assert_eq!(hello_seq().hash_code(), 127791473);
}

#[test]
fn hash_code_matches_across_element_types() {
    let owned: Seq<String> = hello_seq().map(|item| item.to_string());
    let chars = Seq::of("hello".chars());

    assert_eq!(owned.hash_code(), hello_seq().hash_code());
    // a one-character string hashes like its character
    assert_eq!(chars.hash_code(), hello_seq().hash_code());
}

#[test]
fn hash_code_of_elements() {
    assert_eq!("hello".hash_code(), 99162322);
    assert_eq!('a'.hash_code(), 97);
    assert_eq!(true.hash_code(), 1231);
    assert_eq!(false.hash_code(), 1237);
    assert_eq!((-1i64).hash_code(), 0);
    assert_eq!(0x1_0000_0001u64.hash_code(), 0);
    assert_eq!(None::<&str>.hash_code(), 0);
    assert_eq!(Some("a").hash_code(), 97);
    assert_eq!(0.0f64.hash_code(), 0);
    assert_eq!(f64::NAN.hash_code(), (-f64::NAN).hash_code());
}

#[test]
fn hash_code_absent_elements() {
    let with_gap = Seq::of([Some("a"), None]);
    assert_eq!(with_gap.hash_code(), 128 * 31);
}

#[test]
fn hash_code_nested() {
    let nested = Seq::of([single_item_seq(), no_item_seq()]);
    assert_eq!(nested.hash_code(), (31 + 128) * 31 + 1);
}

#[test]
fn std_hash_agrees_with_eq() {
    assert_eq!(std_hash(&hello_seq()), std_hash(&hello_seq()));
    assert_eq!(std_hash(&no_item_seq()), std_hash(&empty::<&str>()));
}

#[test]
fn display() {
    assert!(no_item_seq().to_string().ends_with("[]"));
    assert!(single_item_seq().to_string().ends_with("[a]"));
    assert!(hello_seq().to_string().ends_with("[h, e, l, l, o]"));
}

#[test]
fn debug() {
    assert_eq!(format!("{:?}", single_item_seq()), r#"Seq["a"]"#);
    assert_eq!(format!("{:?}", empty::<u8>()), "Seq[]");
}

#[test]
fn hash_code_signed_zero() {
    let positive = Seq::of([0.0f64, 1.5]);
    let negative = Seq::of([-0.0f64, 1.5]);

    assert_eq!(positive, negative);
    assert_eq!(positive.hash_code(), negative.hash_code());
    assert_eq!((-0.0f64).hash_code(), 0);
    assert_eq!((-0.0f32).hash_code(), 0.0f32.hash_code());
}

struct Broken;

impl std::fmt::Display for Broken {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Err(std::fmt::Error)
    }
}

#[test]
fn display_propagates_element_error() {
    use std::fmt::Write;

    let mut text = String::new();
    let written = write!(text, "{}", Seq::of([Broken]));

    assert!(written.is_err());
    assert_eq!(text, "Seq[");
}

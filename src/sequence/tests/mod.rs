use crate::sequence::prelude::*;

mod identity;

const HELLO: [&str; 5] = ["h", "e", "l", "l", "o"];

fn no_item_seq() -> Seq<&'static str> {
    empty()
}

fn single_item_seq() -> Seq<&'static str> {
    Seq::of(["a"])
}

fn hello_seq() -> Seq<&'static str> {
    Seq::of(HELLO)
}

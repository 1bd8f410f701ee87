#![allow(dead_code)]

use proptest::prelude::*;
use std::convert::TryFrom;
use trie_nibbles::{HexPath, Nibble};

pub fn nibble() -> impl Strategy<Value = Nibble> {
    (0u8..16).prop_map(|v| Nibble::try_from(v).unwrap())
}

pub fn hex_path() -> impl Strategy<Value = HexPath> {
    prop::collection::vec(nibble(), 0..64)
}

prop_compose! {
    pub fn odd_hex_path()
            (mut path in hex_path(), extra in nibble())
            -> HexPath {
        if path.len() % 2 == 0 {
            path.push(extra);
        }
        path
    }
}

prop_compose! {
    pub fn even_hex_path()
            (mut path in hex_path())
            -> HexPath {
        if path.len() % 2 == 1 {
            path.pop();
        }
        path
    }
}

prop_compose! {
    /// A batch of one-nibble-per-byte values with one out-of-range byte at `index`.
    pub fn batch_with_bad_byte()
            (values in prop::collection::vec(0u8..16, 1..32))
            (bad_index in 0..values.len(), bad in 16u8..=255, values in Just(values))
            -> (Vec<u8>, usize, u8) {
        let mut values = values;
        values[bad_index] = bad;
        (values, bad_index, bad)
    }
}

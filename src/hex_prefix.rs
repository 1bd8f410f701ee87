//! Hex-prefix framing of trie keys.
//!
//! A framed path starts with one flag nibble when its length is odd, or with
//! a flag nibble and a zero pad when even. The flag records the parity and
//! whether the path ends at a leaf:
//!
//! | flag | length | leaf |
//! |------|--------|------|
//! | 0    | even   | no   |
//! | 1    | odd    | no   |
//! | 2    | even   | yes  |
//! | 3    | odd    | yes  |
//!
//! Framed paths always have even length.

use crate::hex_path::{pack_pairs, HexPath};
use crate::nibble::Nibble;

pub const EVEN_EXTENSION: Nibble = Nibble::new_unchecked(0);
pub const ODD_EXTENSION: Nibble = Nibble::new_unchecked(1);
pub const EVEN_LEAF: Nibble = Nibble::new_unchecked(2);
pub const ODD_LEAF: Nibble = Nibble::new_unchecked(3);

const LEAF_FLAG: u8 = 2;

/// Prepends the parity and leaf flags to `path`.
pub fn to_prefixed(path: &[Nibble], is_leaf: bool) -> HexPath {
    let odd = path.len() % 2 == 1;
    let mut prefixed = HexPath::with_capacity(path.len() + 2);
    if odd {
        prefixed.push(ODD_EXTENSION);
    } else {
        prefixed.push(EVEN_EXTENSION);
        prefixed.push(Nibble::new_unchecked(0));
    }
    prefixed.extend_from_slice(path);

    if is_leaf {
        // 0 or 1 becomes 2 or 3
        prefixed[0] = Nibble::new_unchecked(prefixed[0].value() + LEAF_FLAG);
    }
    prefixed
}

/// Frames `path` and packs it into bytes.
pub fn to_prefixed_bytes(path: &[Nibble], is_leaf: bool) -> Vec<u8> {
    pack_pairs(&to_prefixed(path, is_leaf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_path::nibbles_of_bytes;

    #[test]
    fn packs_flags_into_first_byte() {
        let even = nibbles_of_bytes(&[0xab]);
        assert_eq!(to_prefixed_bytes(&even, false), vec![0x00, 0xab]);
        assert_eq!(to_prefixed_bytes(&even, true), vec![0x20, 0xab]);

        let odd = &even[1..];
        assert_eq!(to_prefixed_bytes(odd, false), vec![0x1b]);
        assert_eq!(to_prefixed_bytes(odd, true), vec![0x3b]);
    }

    #[test]
    fn flag_constants_match_framing() {
        let one = [Nibble::new_unchecked(5)];
        assert_eq!(to_prefixed(&one, false)[0], ODD_EXTENSION);
        assert_eq!(to_prefixed(&one, true)[0], ODD_LEAF);
        assert_eq!(to_prefixed(&[], false)[0], EVEN_EXTENSION);
        assert_eq!(to_prefixed(&[], true)[0], EVEN_LEAF);
    }
}

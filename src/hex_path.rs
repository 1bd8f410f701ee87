use tracing::trace;

use crate::error::{NibbleError, Result};
use crate::nibble::{nibble_from_byte, nibbles_of_byte, Nibble};

/// A hexadecimal string.
pub type HexPath = Vec<Nibble>;

/// Validates a byte array holding one nibble per byte.
///
/// Fails on the first out-of-range byte, without returning a partial path.
pub fn nibbles_from_bytes(values: &[u8]) -> Result<HexPath> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            nibble_from_byte(v).map_err(|_| NibbleError::InvalidNibble {
                value: v,
                index: Some(i),
            })
        })
        .collect()
}

/// Converts a byte array to a hexadecimal string, high nibble first.
pub fn nibbles_of_bytes(bs: &[u8]) -> HexPath {
    let mut p = HexPath::with_capacity(bs.len() * 2);
    for &b in bs {
        let (hi, lo) = nibbles_of_byte(b);
        p.push(hi);
        p.push(lo);
    }
    p
}

/// Converts the UTF-8 bytes of a string to a hexadecimal string.
pub fn nibbles_of_text(s: &str) -> HexPath {
    nibbles_of_bytes(s.as_bytes())
}

/// Packs pairs of nibbles back into bytes.
pub fn bytes_of_nibbles(path: &[Nibble]) -> Result<Vec<u8>> {
    if path.len() % 2 != 0 {
        trace!(target: "nibbles", len = path.len(), "refusing to pack odd-length path");
        return Err(NibbleError::OddLength(path.len()));
    }
    Ok(pack_pairs(path))
}

/// Callers guarantee `path` has even length.
pub(crate) fn pack_pairs(path: &[Nibble]) -> Vec<u8> {
    path.chunks_exact(2)
        .map(|pair| (pair[0].value() << 4) | pair[1].value())
        .collect()
}

pub fn show_hex_path(path: &[Nibble]) -> String {
    path.iter().map(|digit| digit.to_string()).collect()
}

/// Is the first vector a prefix of the second?
pub fn is_prefix<T: Eq>(pre: &[T], full: &[T]) -> bool {
    pre.len() <= full.len() && pre.iter().zip(full.iter()).all(|(x, y)| x == y)
}

/// Is the first vector a postfix of the second?
pub fn is_postfix<T: Eq>(post: &[T], full: &[T]) -> bool {
    post.len() <= full.len()
        && post
            .iter()
            .rev()
            .zip(full.iter().rev())
            .all(|(x, y)| x == y)
}

/// Number of leading digits two paths share.
pub fn common_prefix_len(a: &[Nibble], b: &[Nibble]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

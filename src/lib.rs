//! Nibble paths and hex-prefix framing for radix trie keys.

pub mod error;

pub mod nibble;

pub mod hex_path;
pub mod hex_prefix;

pub use error::{NibbleError, Result};
pub use hex_path::{
    bytes_of_nibbles, common_prefix_len, is_postfix, is_prefix, nibbles_from_bytes,
    nibbles_of_bytes, nibbles_of_text, show_hex_path, HexPath,
};
pub use hex_prefix::{to_prefixed, to_prefixed_bytes};
pub use nibble::{is_nibble, nibble_from_byte, nibbles_of_byte, Nibble};

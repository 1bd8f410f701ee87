//! The validated 4-bit value type.

use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{NibbleError, Result};

/// A hexadecimal digit, stored in the low half of a byte.
///
/// The value is always in `0..=15`. Checked construction goes through
/// [`Nibble::new`] or `TryFrom<u8>`; serde deserialization validates too.
#[repr(transparent)]
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, Debug, Clone, Copy,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Nibble(u8);

impl Nibble {
    pub const MAX: u8 = 0x0f;

    /// Validates `value` as a nibble.
    pub fn new(value: u8) -> Result<Nibble> {
        nibble_from_byte(value)
    }

    /// Callers guarantee `value <= 15`.
    pub(crate) const fn new_unchecked(value: u8) -> Nibble {
        Nibble(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Nibble {
    type Error = NibbleError;

    fn try_from(value: u8) -> Result<Nibble> {
        nibble_from_byte(value)
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> u8 {
        n.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// Is `value` in `0..=15`?
pub fn is_nibble(value: u8) -> bool {
    value <= Nibble::MAX
}

/// Converts a byte holding a single nibble.
pub fn nibble_from_byte(value: u8) -> Result<Nibble> {
    if !is_nibble(value) {
        trace!(target: "nibbles", value, "rejected non-nibble byte");
        return Err(NibbleError::InvalidNibble { value, index: None });
    }
    Ok(Nibble(value))
}

/// Splits a full byte into its high and low nibbles.
///
/// No validation happens here: both halves of a byte are in range.
pub fn nibbles_of_byte(b: u8) -> (Nibble, Nibble) {
    (Nibble(b >> 4), Nibble(b % 16))
}

use thiserror::Error;

/// Errors produced when validating or packing nibbles.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NibbleError {
    /// A byte outside `0..=15` was given where a nibble is required.
    ///
    /// `index` is the position of the byte when it came from a batch conversion.
    #[error("non-nibble byte: {value}{}", at_index(.index))]
    InvalidNibble { value: u8, index: Option<usize> },

    /// An odd number of nibbles cannot be packed into whole bytes.
    #[error("cannot pack {0} nibbles into bytes: length is odd")]
    OddLength(usize),
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, NibbleError>;

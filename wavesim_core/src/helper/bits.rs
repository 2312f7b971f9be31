use std::fmt;

use bitvec::prelude::*;

/// ordered bit sequence parsed from a user-supplied binary string
pub type BitSeq = BitVec;

/// Invalid-Input: the binary string contains a character outside {'0','1'}.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBitsError {
  /// byte offset of the offending character
  pub position: usize,
  /// the offending character
  pub found: char,
}
impl fmt::Display for ParseBitsError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "invalid character {:?} at position {}, expected '0' or '1'",
      self.found, self.position
    )
  }
}
impl std::error::Error for ParseBitsError {}

/// Parse a binary string into a [`BitSeq`].
/// The whole input is rejected on the first character outside {'0','1'}.
/// The empty string parses to an empty sequence.
pub fn parse_bits(input: &str) -> Result<BitSeq, ParseBitsError> {
  let mut bits = BitSeq::with_capacity(input.len());
  for (position, found) in input.char_indices() {
    match found {
      '0' => bits.push(false),
      '1' => bits.push(true),
      _ => return Err(ParseBitsError { position, found }),
    }
  }
  Ok(bits)
}

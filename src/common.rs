//! Shared error type, algorithm constants and block helpers.

/// Unified error type for all FF3 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key is not 16, 24 or 32 bytes.
    KeyLengthInvalid,
    /// Radix is outside [2, 65536].
    RadixOutOfRange,
    /// Alphabet contains a repeated character.
    AlphabetInvalid,
    /// Tweak is not exactly 8 bytes.
    TweakLengthInvalid,
    /// A character is not in the alphabet, or a numeral is out of range
    /// for the radix.
    StringNotInRadix,
    /// Message length is outside the admissible range for the radix.
    MessageLengthOutOfBounds,
    /// The derived minimum text length exceeds the maximum; the radix is
    /// unusable.
    LengthBoundsInvalid,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::KeyLengthInvalid => write!(f, "key length must be 128, 192, or 256 bits"),
            Error::RadixOutOfRange => {
                write!(f, "radix must be between 2 and 65536, inclusive")
            }
            Error::AlphabetInvalid => write!(f, "alphabet must not contain repeated characters"),
            Error::TweakLengthInvalid => write!(f, "tweak must be 8 bytes, or 64 bits"),
            Error::StringNotInRadix => write!(f, "string is not within base/radix"),
            Error::MessageLengthOutOfBounds => {
                write!(f, "message length is not within min and max bounds")
            }
            Error::LengthBoundsInvalid => {
                write!(f, "minLen or maxLen invalid, adjust your radix")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Number of Feistel rounds.
pub const NUM_ROUNDS: usize = 8;

/// Tweak length in bytes.
pub const TWEAK_LENGTH: usize = 8;

/// Length of each tweak half in bytes.
pub const HALF_TWEAK_LENGTH: usize = TWEAK_LENGTH / 2;

/// Lower bound on the domain size: radix^min_len >= 100.
///
/// NIST SP 800-38G Appendix A recommends radix^minLength >= 1,000,000;
/// this follows the normative body of SP 800-38G instead.
pub const FEISTEL_MIN: u64 = 100;

/// Largest admissible radix (2^16).
pub const MAX_RADIX: u32 = 1 << 16;

/// Direction of cipher operation.
#[derive(Clone, Copy)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Reverse a 16-byte block into a fresh array.
///
/// FF3 reverses the block on both sides of the AES call; the reversal must
/// never happen in place on a buffer that is reused across rounds.
#[inline]
pub fn rev_block(block: [u8; BLOCK_LENGTH]) -> [u8; BLOCK_LENGTH] {
    let mut out = block;
    out.reverse();
    out
}

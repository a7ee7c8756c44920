#![allow(deprecated)]
//! FF3 tweakable format-preserving cipher.
//!
//! FF3 encrypts a string over an arbitrary alphabet into a ciphertext with
//! the same length and alphabet, using an eight-round unbalanced Feistel
//! network whose round function is AES over a block built from a tweak
//! half, the round counter and the numeral value of the opposite message
//! half.
//!
//! Two constructions set FF3 apart from FF1 and must be exact for
//! interoperability:
//! - AES is keyed with the byte-reversed user key;
//! - the 16-byte round block is byte-reversed immediately before and after
//!   every AES call.
//!
//! Security properties:
//! - Ciphertext length and alphabet equal the plaintext's
//! - Deterministic for a fixed (key, tweak, alphabet)
//! - No authentication - consider AEAD if integrity protection is needed
//! - Implements the original 8-byte-tweak FF3, not the FF3-1 revision

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use num_bigint::BigUint;
use num_traits::One;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use crate::codec::Codec;
use crate::common::{
    rev_block, Direction, Error, BLOCK_LENGTH, FEISTEL_MIN, HALF_TWEAK_LENGTH, MAX_RADIX,
    NUM_ROUNDS, TWEAK_LENGTH,
};
use crate::numeral::{num_rev, str_rev};

/// Alphabet used by [`Ff3::with_radix`].
///
/// The `...QRTSU...` ordering is historical and deliberate; changing it
/// would break decryption of ciphertexts produced with radix-based
/// construction.
pub const LEGACY_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRTSUVWXYZ";

/// Keyed AES block primitive, selected from the key length at run time.
///
/// FF3 only ever runs AES in the encrypt direction; rounds are inverted
/// through modular subtraction.
enum AesBlock {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesBlock {
    fn new(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            16 => Ok(AesBlock::Aes128(Aes128::new(Array::from_slice(key)))),
            24 => Ok(AesBlock::Aes192(Aes192::new(Array::from_slice(key)))),
            32 => Ok(AesBlock::Aes256(Aes256::new(Array::from_slice(key)))),
            _ => Err(Error::KeyLengthInvalid),
        }
    }

    fn encrypt_block(&self, block: [u8; BLOCK_LENGTH]) -> [u8; BLOCK_LENGTH] {
        let mut out = Array::clone_from_slice(&block);
        match self {
            AesBlock::Aes128(ks) => ks.encrypt_block(&mut out),
            AesBlock::Aes192(ks) => ks.encrypt_block(&mut out),
            AesBlock::Aes256(ks) => ks.encrypt_block(&mut out),
        }
        out.as_slice().try_into().unwrap()
    }
}

/// Derive the admissible message length range for a radix.
///
/// `min_len` is the smallest m with radix^m >= 100; `max_len` is the
/// largest m with radix^m <= 2^192. Both are computed with exact integer
/// arithmetic.
fn text_length_bounds(radix: u32) -> Result<(usize, usize), Error> {
    let mut min_len = 1;
    let mut domain = u64::from(radix);
    while domain < FEISTEL_MIN {
        domain *= u64::from(radix);
        min_len += 1;
    }

    let limit = BigUint::one() << 192usize;
    let mut max_len = 0;
    let mut power = BigUint::from(radix);
    while power <= limit {
        max_len += 1;
        power *= radix;
    }

    if max_len < min_len {
        return Err(Error::LengthBoundsInvalid);
    }

    Ok((min_len, max_len))
}

/// Fill the 16-byte AES input block for one round.
///
/// Layout: `w[0..3]` verbatim, `w[3] ^ round`, then the big-endian bytes of
/// `n` right-aligned in the remaining 12 bytes. The block is reused across
/// rounds, so the pad region is re-zeroed every time.
fn build_block(p: &mut [u8; BLOCK_LENGTH], w: &[u8; HALF_TWEAK_LENGTH], round: u8, n: &BigUint) {
    p[0] = w[0];
    p[1] = w[1];
    p[2] = w[2];
    p[3] = w[3] ^ round;

    let bytes = n.to_bytes_be();
    debug_assert!(bytes.len() <= BLOCK_LENGTH - HALF_TWEAK_LENGTH);

    p[HALF_TWEAK_LENGTH..BLOCK_LENGTH - bytes.len()].fill(0);
    p[BLOCK_LENGTH - bytes.len()..].copy_from_slice(&bytes);
}

/// An instance of the FF3 mode of format-preserving encryption for a
/// particular key, alphabet and default tweak.
///
/// The cipher is immutable once constructed; all per-call scratch state is
/// local, so a shared reference can be used concurrently.
pub struct Ff3 {
    aes: AesBlock,
    codec: Codec,
    tweak: [u8; TWEAK_LENGTH],
    min_len: usize,
    max_len: usize,
}

impl Ff3 {
    /// Initialize an FF3 cipher from an alphabet, key and default tweak.
    ///
    /// # Arguments
    /// * `alphabet` - between 2 and 65536 distinct characters; its size is
    ///   the radix
    /// * `key` - 16, 24 or 32 bytes, selecting AES-128/192/256
    /// * `tweak` - default tweak, exactly 8 bytes
    ///
    /// # Errors
    /// Returns an error for an invalid key length, alphabet, radix or tweak
    /// length, or when the derived length bounds are unusable.
    pub fn new(alphabet: &str, key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(Error::KeyLengthInvalid);
        }

        let codec = Codec::new(alphabet)?;

        let radix = codec.radix();
        if !(2..=MAX_RADIX).contains(&radix) {
            return Err(Error::RadixOutOfRange);
        }

        let tweak: [u8; TWEAK_LENGTH] =
            tweak.try_into().map_err(|_| Error::TweakLengthInvalid)?;

        let (min_len, max_len) = text_length_bounds(radix)?;

        // AES is keyed with the byte-reversed user key.
        let mut reversed_key = key.to_vec();
        reversed_key.reverse();
        let aes = AesBlock::new(&reversed_key)?;

        Ok(Ff3 {
            aes,
            codec,
            tweak,
            min_len,
            max_len,
        })
    }

    /// Initialize an FF3 cipher over the first `radix` characters of
    /// [`LEGACY_ALPHABET`].
    ///
    /// Provided for compatibility with radix-based client code; `radix` may
    /// be at most 62.
    pub fn with_radix(radix: usize, key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        if radix < 2 || radix > LEGACY_ALPHABET.len() {
            return Err(Error::RadixOutOfRange);
        }
        Self::new(&LEGACY_ALPHABET[..radix], key, tweak)
    }

    /// Number of characters in the alphabet.
    pub fn radix(&self) -> u32 {
        self.codec.radix()
    }

    /// Smallest admissible message length in characters.
    pub fn min_message_length(&self) -> usize {
        self.min_len
    }

    /// Upper bound on message length in characters; messages must be
    /// strictly shorter.
    pub fn max_message_length(&self) -> usize {
        self.max_len
    }

    /// Encrypt `plaintext` with the default tweak.
    ///
    /// The ciphertext has the same length and alphabet as the plaintext.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        self.encrypt_with_tweak(plaintext, &self.tweak)
    }

    /// Encrypt `plaintext` with a per-call tweak.
    ///
    /// Overriding the tweak allows one cipher (for a given key) to be
    /// reused across many records, each diversified by its own tweak.
    ///
    /// # Errors
    /// Returns [`Error::StringNotInRadix`] if the plaintext contains a
    /// character outside the alphabet, [`Error::MessageLengthOutOfBounds`]
    /// if its length is out of range, and [`Error::TweakLengthInvalid`] if
    /// the tweak is not 8 bytes.
    pub fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String, Error> {
        let numerals = self.codec.encode(plaintext)?;
        let out = self.feistel(&numerals, tweak, Direction::Encrypt)?;
        self.codec.decode(&out)
    }

    /// Decrypt `ciphertext` with the default tweak.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, Error> {
        self.decrypt_with_tweak(ciphertext, &self.tweak)
    }

    /// Decrypt `ciphertext` with a per-call tweak.
    ///
    /// The tweak must match the one used to encrypt.
    pub fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String, Error> {
        let numerals = self.codec.encode(ciphertext)?;
        let out = self.feistel(&numerals, tweak, Direction::Decrypt)?;
        self.codec.decode(&out)
    }

    fn feistel(
        &self,
        numerals: &[u16],
        tweak: &[u8],
        direction: Direction,
    ) -> Result<Vec<u16>, Error> {
        let n = numerals.len();

        // n == max_len is rejected: the top half of a maximum-length
        // message can need more than the 12 numeral bytes available in P.
        if n < self.min_len || n >= self.max_len {
            return Err(Error::MessageLengthOutOfBounds);
        }
        if tweak.len() != TWEAK_LENGTH {
            return Err(Error::TweakLengthInvalid);
        }

        let radix = self.codec.radix();

        let u = n.div_ceil(2);
        let v = n - u;

        let mut a = numerals[..u].to_vec();
        let mut b = numerals[u..].to_vec();
        // Scratch half; u >= v, so capacity u covers both target lengths.
        let mut c = vec![0u16; u];

        let tl: [u8; HALF_TWEAK_LENGTH] = tweak[..HALF_TWEAK_LENGTH].try_into().unwrap();
        let tr: [u8; HALF_TWEAK_LENGTH] = tweak[HALF_TWEAK_LENGTH..].try_into().unwrap();

        // Only two moduli ever apply, depending on round parity.
        let base = BigUint::from(radix);
        let mod_u = base.pow(u as u32);
        let mod_v = base.pow(v as u32);

        let mut p = [0u8; BLOCK_LENGTH];

        for round in 0..NUM_ROUNDS {
            let i = match direction {
                Direction::Encrypt => round,
                Direction::Decrypt => NUM_ROUNDS - 1 - round,
            };

            let (m, w, modulus) = if i % 2 == 0 {
                (u, &tr, &mod_u)
            } else {
                (v, &tl, &mod_v)
            };

            let opposite = match direction {
                Direction::Encrypt => &b,
                Direction::Decrypt => &a,
            };
            build_block(&mut p, w, i as u8, &num_rev(opposite, radix)?);

            // The block is byte-reversed into a fresh buffer on both sides
            // of the AES call. AES runs in the encrypt direction for both
            // operations; decryption inverts through the subtraction below.
            let s = rev_block(self.aes.encrypt_block(rev_block(p)));
            let y = BigUint::from_bytes_be(&s);

            let num_c = match direction {
                Direction::Encrypt => (num_rev(&a, radix)? + y) % modulus,
                Direction::Decrypt => {
                    // Canonical non-negative residue of (b - y) mod radix^m.
                    let y = y % modulus;
                    (num_rev(&b, radix)? + modulus - y) % modulus
                }
            };

            c.resize(m, 0);
            str_rev(num_c, &mut c, radix);

            match direction {
                Direction::Encrypt => {
                    // A, B, C <- B, C, A
                    mem::swap(&mut a, &mut b);
                    mem::swap(&mut b, &mut c);
                }
                Direction::Decrypt => {
                    // B, A, C <- A, C, B
                    mem::swap(&mut b, &mut a);
                    mem::swap(&mut a, &mut c);
                }
            }
        }

        let mut out = a;
        out.extend_from_slice(&b);
        Ok(out)
    }
}

//! FF3 format-preserving encryption library.
//!
//! This crate implements the FF3 mode of format-preserving encryption from
//! NIST SP 800-38G: a keyed, tweakable permutation over strings drawn from
//! an arbitrary alphabet. Ciphertext has the same length and character set
//! as the plaintext, which makes FF3 suitable for encrypting structured
//! identifiers in place:
//! - Credit card and account numbers in fixed-width database columns
//! - National identifiers (SSNs and similar)
//! - Any wire or storage schema that validates the field's format
//!
//! # Quick Start
//!
//! ## Encrypting decimal identifiers
//!
//! ```rust
//! use ff3::Ff3;
//!
//! let key = [0x2Bu8; 16]; // AES-128; 24 or 32 bytes select AES-192/256
//! let tweak = [0u8; 8];
//! let cipher = Ff3::new("0123456789", &key, &tweak).unwrap();
//!
//! let ciphertext = cipher.encrypt("4147098765432112").unwrap();
//! assert_eq!(ciphertext.len(), 16);
//! assert!(ciphertext.chars().all(|c| c.is_ascii_digit()));
//!
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "4147098765432112");
//! ```
//!
//! ## Per-record tweaks
//!
//! A single cipher (for a given key) can protect many records, each
//! diversified by its own public tweak:
//!
//! ```rust
//! use ff3::Ff3;
//!
//! let key = [0x2Bu8; 32];
//! let cipher = Ff3::new("0123456789", &key, &[0u8; 8]).unwrap();
//!
//! let record_tweak = *b"\x01\x02\x03\x04\x05\x06\x07\x08";
//! let ciphertext = cipher
//!     .encrypt_with_tweak("890121234567890000", &record_tweak)
//!     .unwrap();
//! let plaintext = cipher
//!     .decrypt_with_tweak(&ciphertext, &record_tweak)
//!     .unwrap();
//! assert_eq!(plaintext, "890121234567890000");
//! ```
//!
//! # Security Considerations
//!
//! - **No authentication**: FF3 provides confidentiality only; use AEAD if
//!   integrity protection is needed
//! - **Small domains are weak**: the admissible message length is bounded
//!   below so that the permutation domain holds at least 100 values, the
//!   floor from SP 800-38G; prefer longer inputs where the schema allows
//! - **Original FF3**: this is the 8-byte-tweak FF3 construction, not the
//!   revised FF3-1 tweak schedule
//! - **Not constant time**: the arbitrary-precision arithmetic is
//!   value-dependent; wrap the calls if timing side channels matter
//!
//! # Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - When disabled, the crate is `no_std` compatible (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod common;
mod ff3;
mod numeral;

#[cfg(test)]
mod nist_vectors;

pub use codec::Codec;
pub use common::Error;
pub use ff3::{Ff3, LEGACY_ALPHABET};

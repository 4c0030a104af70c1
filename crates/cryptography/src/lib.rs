//! Cryptographic primitives for the Meridian blockchain.
//!
//! Provides the hash functions used for account addresses and transaction
//! identities, plus NIST P-256 key material and ECDSA signing. Transaction
//! signing itself lives with the callers of `meridian-core`; the core codec
//! only consumes public keys.

mod error;
pub mod hash;
mod keys;

pub use error::{CryptoError, CryptoResult};
pub use hash::{hash160, hash256, ripemd160, sha256};
pub use keys::{verify_signature, KeyPair, PublicKey, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};

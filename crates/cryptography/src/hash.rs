//! Hash functions used by the Meridian protocol.
//!
//! Account addresses are RIPEMD-160 over SHA-256 of a verification program;
//! transaction identities are double SHA-256 over the unsigned encoding.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash160 (RIPEMD-160 of SHA-256), the program-to-address hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Computes Hash256 (double SHA-256), the transaction identity hash.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

//! NIST P-256 key material and ECDSA signatures.
//!
//! Meridian serializes public keys as bare 33-byte SEC1 compressed points.
//! Signatures are 64-byte `r || s` values over the SHA-256 digest of the
//! message.

use std::cmp::Ordering;
use std::fmt;

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::{CryptoError, CryptoResult};

/// Wire size of a compressed public key.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Wire size of an ECDSA signature (`r || s`).
pub const SIGNATURE_SIZE: usize = 64;

/// A validated P-256 public key.
///
/// Construction goes through [`PublicKey::from_bytes`], so every instance
/// holds a structurally valid curve point. Ordering compares the compressed
/// encodings, which is the canonical key order inside multisig programs.
#[derive(Clone, Copy)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    /// Parses a 33-byte SEC1 compressed point.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidPublicKey);
        }
        let key =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self { key })
    }

    /// The compressed SEC1 encoding of this key.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.key.to_encoded_point(true);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.key
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_bytes().cmp(&other.to_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

/// A P-256 ECDSA keypair for producing transaction signatures.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Generates a fresh random keypair.
    pub fn generate() -> Self {
        Self {
            signing: SigningKey::random(&mut OsRng),
        }
    }

    /// The public half of this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            key: *self.signing.verifying_key(),
        }
    }

    /// Signs `message`, returning the 64-byte `r || s` signature.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signature: Signature = self.signing.sign(message);
        signature.to_bytes().to_vec()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the secret scalar
        write!(f, "KeyPair({})", self.public_key())
    }
}

/// Verifies a 64-byte signature over `message` against `public_key`.
pub fn verify_signature(
    public_key: &PublicKey,
    message: &[u8],
    signature: &[u8],
) -> CryptoResult<()> {
    let signature =
        Signature::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;
    public_key
        .verifying_key()
        .verify(message, &signature)
        .map_err(|_| CryptoError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_roundtrips_through_bytes() {
        let pair = KeyPair::generate();
        let pk = pair.public_key();
        let bytes = pk.to_bytes();
        assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
        assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), pk);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(
            PublicKey::from_bytes(&[0u8; PUBLIC_KEY_SIZE]),
            Err(CryptoError::InvalidPublicKey)
        );
        assert_eq!(
            PublicKey::from_bytes(&[2u8; 32]),
            Err(CryptoError::InvalidPublicKey)
        );
        // uncompressed points are not accepted on the wire
        assert_eq!(
            PublicKey::from_bytes(&[4u8; 65]),
            Err(CryptoError::InvalidPublicKey)
        );
    }

    #[test]
    fn sign_verify_roundtrip() {
        let pair = KeyPair::generate();
        let message = b"unsigned transaction bytes";
        let signature = pair.sign(message);
        assert_eq!(signature.len(), SIGNATURE_SIZE);
        assert!(verify_signature(&pair.public_key(), message, &signature).is_ok());

        let other = KeyPair::generate();
        assert_eq!(
            verify_signature(&other.public_key(), message, &signature),
            Err(CryptoError::VerificationFailed)
        );
        assert_eq!(
            verify_signature(&pair.public_key(), b"tampered", &signature),
            Err(CryptoError::VerificationFailed)
        );
    }

    #[test]
    fn ordering_follows_compressed_encoding() {
        let mut keys: Vec<PublicKey> = (0..8).map(|_| KeyPair::generate().public_key()).collect();
        keys.sort();
        for pair in keys.windows(2) {
            assert!(pair[0].to_bytes() <= pair[1].to_bytes());
        }
    }
}

use thiserror::Error;

/// Errors from key parsing and signature checks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// The bytes do not encode a valid compressed P-256 point.
    #[error("invalid public key encoding")]
    InvalidPublicKey,

    /// The bytes do not encode a valid ECDSA signature.
    #[error("invalid signature encoding")]
    InvalidSignature,

    /// The signature does not verify against the key and message.
    #[error("signature verification failed")]
    VerificationFailed,
}

/// Result alias for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

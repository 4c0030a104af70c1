//! # Meridian-RS: the Meridian transaction layer in Rust
//!
//! This library implements the wire format of Meridian transactions: the
//! zero-copy serialization primitives, the signature-program model that turns
//! structured signatures into on-chain scripts, account address derivation,
//! and the transaction entity with its double-SHA256 identity.
//!
//! Everything that crosses this boundary is untrusted input: decoding is
//! all-or-nothing, bounded in work, and yields typed errors rather than
//! panics.
//!
//! ## Architecture
//!
//! The implementation is organized into member crates:
//!
//! - [`meridian_io`] - zero-copy byte cursor, binary sink and var-int codec
//! - [`meridian_cryptography`] - hash functions, P-256 keys and ECDSA
//! - [`meridian_core`] - transactions, signature programs and addresses

#![warn(missing_docs)]

pub use meridian_core as core;
pub use meridian_cryptography as crypto;
pub use meridian_io as io;

/// Common imports for working with Meridian transactions.
pub mod prelude {
    pub use crate::core::{
        Address, MutableTransaction, RawSig, Sig, Transaction, TransactionPayload,
        TransactionType, UInt256,
    };
    pub use crate::crypto::{KeyPair, PublicKey};
    pub use crate::io::{BinaryWriter, MemoryReader, Serializable, SerializableExt};
}

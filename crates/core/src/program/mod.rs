// Copyright (C) 2023-2025 The Meridian Project.
//
// mod.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Signature programs.
//!
//! An authorization travels on the wire as two small VM programs: an
//! *invocation program* pushing the raw signature values and a *verification
//! program* encoding the public key (or m-of-n key set) they must satisfy.
//! This module builds both from structured data and parses them back,
//! total and typed-error in both directions.

mod builder;
mod parser;

pub use builder::{invocation_program, multi_sig_program, signature_program, ProgramBuilder};
pub use parser::{parse_invocation_program, parse_verification_program, ProgramInfo};

/// The opcode subset signature programs are written in.
pub(crate) mod opcode {
    pub const PUSH0: u8 = 0x00;
    pub const PUSHBYTES1: u8 = 0x01;
    pub const PUSHBYTES75: u8 = 0x4b;
    pub const PUSHDATA1: u8 = 0x4c;
    pub const PUSHDATA2: u8 = 0x4d;
    pub const PUSHDATA4: u8 = 0x4e;
    pub const PUSH1: u8 = 0x51;
    pub const PUSH16: u8 = 0x60;
    pub const CHECKSIG: u8 = 0xac;
    pub const CHECKMULTISIG: u8 = 0xae;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use meridian_cryptography::{KeyPair, PublicKey};

    fn canonical_keys(count: usize) -> Vec<PublicKey> {
        let mut keys: Vec<PublicKey> =
            (0..count).map(|_| KeyPair::generate().public_key()).collect();
        keys.sort();
        keys
    }

    #[test]
    fn signature_program_layout() {
        let key = KeyPair::generate().public_key();
        let script = signature_program(&key);
        // one 33-byte push then CHECKSIG
        assert_eq!(script.len(), 35);
        assert_eq!(script[0], 0x21);
        assert_eq!(script[1..34], key.to_bytes());
        assert_eq!(script[34], opcode::CHECKSIG);
    }

    #[test]
    fn signature_program_roundtrip() {
        let key = KeyPair::generate().public_key();
        let info = parse_verification_program(&signature_program(&key)).unwrap();
        assert_eq!(info.m, 1);
        assert_eq!(info.pub_keys, vec![key]);
    }

    #[test]
    fn multi_sig_program_roundtrip() {
        let keys = canonical_keys(3);
        let script = multi_sig_program(&keys, 2).unwrap();
        assert_eq!(*script.last().unwrap(), opcode::CHECKMULTISIG);

        let info = parse_verification_program(&script).unwrap();
        assert_eq!(info.m, 2);
        assert_eq!(info.pub_keys, keys);
    }

    #[test]
    fn multi_sig_program_sorts_keys() {
        let mut keys = canonical_keys(3);
        let sorted = keys.clone();
        keys.reverse();
        let info = parse_verification_program(&multi_sig_program(&keys, 2).unwrap()).unwrap();
        assert_eq!(info.pub_keys, sorted);
    }

    #[test]
    fn multi_sig_program_validates_parameters() {
        let keys = canonical_keys(3);
        assert!(matches!(
            multi_sig_program(&keys, 0),
            Err(CoreError::InvalidThreshold { m: 0, n: 3 })
        ));
        assert!(matches!(
            multi_sig_program(&keys, 4),
            Err(CoreError::InvalidThreshold { m: 4, n: 3 })
        ));
        assert!(matches!(
            multi_sig_program(&[], 1),
            Err(CoreError::EmptyKeySet)
        ));
        let too_many = canonical_keys(17);
        assert!(matches!(
            multi_sig_program(&too_many, 1),
            Err(CoreError::SizeExceeded { .. })
        ));
    }

    #[test]
    fn invocation_program_roundtrip() {
        let sigs = vec![vec![0xaa; 64], vec![0xbb; 64]];
        let script = invocation_program(&sigs).unwrap();
        assert_eq!(parse_invocation_program(&script).unwrap(), sigs);
    }

    #[test]
    fn invocation_program_preserves_order_and_long_pushes() {
        // 76 bytes forces the PUSHDATA1 form, 300 the PUSHDATA2 form
        let sigs = vec![vec![0x01; 76], vec![0x02; 300], vec![0x03; 1]];
        let script = invocation_program(&sigs).unwrap();
        assert_eq!(parse_invocation_program(&script).unwrap(), sigs);
    }

    #[test]
    fn invocation_program_rejects_empty_values() {
        assert!(matches!(
            invocation_program(&[Vec::new()]),
            Err(CoreError::MalformedScript(_))
        ));
    }

    #[test]
    fn parse_invocation_rejects_non_push_opcodes() {
        let mut script = invocation_program(&[vec![0xaa; 64]]).unwrap();
        script.push(opcode::CHECKSIG);
        assert!(matches!(
            parse_invocation_program(&script),
            Err(CoreError::TrailingBytes(1))
        ));
    }

    #[test]
    fn parse_invocation_rejects_truncated_push() {
        // claims 64 bytes of data, provides none
        let script = [0x40];
        assert!(matches!(
            parse_invocation_program(&script),
            Err(CoreError::TruncatedScript)
        ));
    }

    #[test]
    fn parse_verification_rejects_foreign_programs() {
        assert!(matches!(
            parse_verification_program(&[]),
            Err(CoreError::MalformedScript(_))
        ));
        assert!(matches!(
            parse_verification_program(&[0x01, 0x02, 0x03, 0x04]),
            Err(CoreError::MalformedScript(_))
        ));

        // trailing bytes between the key push and CHECKSIG
        let key = KeyPair::generate().public_key();
        let mut script = signature_program(&key);
        script.insert(34, 0x21);
        assert!(parse_verification_program(&script).is_err());
    }

    #[test]
    fn parse_verification_rejects_bad_multisig_counts() {
        let keys = canonical_keys(2);
        let script = multi_sig_program(&keys, 2).unwrap();

        // raise the embedded threshold above the key count: m=3 of 2
        let mut tampered = script.clone();
        tampered[0] = opcode::PUSH1 + 2;
        assert!(matches!(
            parse_verification_program(&tampered),
            Err(CoreError::MalformedScript(_))
        ));

        // lower the embedded key count below the pushed keys: n=1
        let mut tampered = script;
        let n_index = tampered.len() - 2;
        tampered[n_index] = opcode::PUSH1;
        assert!(matches!(
            parse_verification_program(&tampered),
            Err(CoreError::MalformedScript(_))
        ));
    }

    #[test]
    fn parse_verification_rejects_invalid_key_material() {
        // well-formed pushes, but the key bytes are not a curve point
        let mut builder = ProgramBuilder::new();
        builder.push_bytes(&[0u8; 33]).push_opcode(opcode::CHECKSIG);
        assert!(parse_verification_program(&builder.into_bytes()).is_err());
    }
}

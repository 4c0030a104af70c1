//! End-to-end transaction flows: drafting, signing, decoding and the
//! protocol's rejection paths.

use meridian_core::constants::{ADDR_LEN, MAX_TX_SIZE};
use meridian_core::{
    Address, CoreError, InvokeCode, MutableTransaction, Sig, Transaction, TransactionPayload,
    TransactionType,
};
use meridian_cryptography::{verify_signature, KeyPair, PublicKey};
use meridian_io::{BinaryWriter, IoError, Serializable};
use proptest::prelude::*;

fn canonical_keys(count: usize) -> Vec<PublicKey> {
    let mut keys: Vec<PublicKey> = (0..count).map(|_| KeyPair::generate().public_key()).collect();
    keys.sort();
    keys
}

/// Builds the single-key invoke transaction of the reference scenario:
/// gas_price 500, gas_limit 20000, nonce 1, code `[0x00, 0x01]`, one signer.
fn signed_invoke(pair: &KeyPair) -> Transaction {
    let mut draft = MutableTransaction::new_invoke(500, 20_000, vec![0x00, 0x01]);
    draft.nonce = 1;
    draft.payer = Address::from_pubkey(&pair.public_key());

    // the signer collaborator: sign the byte-stable unsigned encoding
    let signature = pair.sign(&draft.encode_unsigned().unwrap());
    draft.push_sig(Sig::single(signature, pair.public_key()));
    draft.into_transaction().unwrap()
}

#[test]
fn single_key_invoke_scenario() {
    let pair = KeyPair::generate();
    let tx = signed_invoke(&pair);

    assert_eq!(tx.version(), 0);
    assert_eq!(tx.tx_type(), TransactionType::Invoke);
    assert_eq!(tx.nonce(), 1);
    assert_eq!(tx.gas_price(), 500);
    assert_eq!(tx.gas_limit(), 20_000);
    assert_eq!(tx.payload().code(), &[0x00, 0x01]);
    assert_eq!(tx.sigs().len(), 1);
    assert_eq!(tx.sigs()[0].pub_keys.len(), 1);
    assert_eq!(tx.sigs()[0].m, 1);

    // the attached signature verifies against the unsigned bytes
    assert!(verify_signature(
        &pair.public_key(),
        tx.unsigned_bytes(),
        &tx.sigs()[0].sig_data[0]
    )
    .is_ok());

    // decode and re-encode must be byte-exact
    let bytes = tx.to_array();
    let decoded = Transaction::from_raw_bytes(&bytes).unwrap();
    assert_eq!(decoded.to_array(), bytes);
    assert_eq!(decoded, tx);
    assert_eq!(decoded.hash(), tx.hash());
}

#[test]
fn multisig_two_of_three_scenario() {
    let keys = canonical_keys(3);
    let mut draft = MutableTransaction::new_invoke(500, 20_000, vec![0x00, 0x01]);
    draft.payer = Address::from_multi_pubkeys(&keys, 2).unwrap();
    draft.push_sig(Sig {
        sig_data: vec![vec![0xa1; 64], vec![0xb2; 64]],
        pub_keys: keys.clone(),
        m: 2,
    });

    let tx = draft.into_transaction().unwrap();
    let decoded = Transaction::from_raw_bytes(&tx.to_array()).unwrap();

    assert_eq!(decoded.sigs().len(), 1);
    let sig = &decoded.sigs()[0];
    assert_eq!(sig.m, 2);
    assert_eq!(sig.pub_keys, keys);
    assert_eq!(sig.sig_data, vec![vec![0xa1; 64], vec![0xb2; 64]]);

    // the committed payer address is the one recovered signatures verify for
    assert_eq!(decoded.sig_addresses().unwrap(), vec![decoded.payer()]);
}

#[test]
fn hash_covers_only_the_unsigned_body() {
    let pair_a = KeyPair::generate();
    let pair_b = KeyPair::generate();

    let mut draft = MutableTransaction::new_invoke(500, 20_000, vec![0x00, 0x01]);
    draft.nonce = 7;

    let unsigned = draft.encode_unsigned().unwrap();
    let mut signed_by_a = draft.clone();
    signed_by_a.push_sig(Sig::single(pair_a.sign(&unsigned), pair_a.public_key()));
    let mut signed_by_b = draft.clone();
    signed_by_b.push_sig(Sig::single(pair_b.sign(&unsigned), pair_b.public_key()));

    let tx_a = signed_by_a.into_transaction().unwrap();
    let tx_b = signed_by_b.into_transaction().unwrap();

    assert_ne!(tx_a.to_array(), tx_b.to_array());
    assert_eq!(tx_a.hash(), tx_b.hash());
    assert_eq!(tx_a.hash(), draft.hash().unwrap());
    assert_eq!(tx_a.unsigned_bytes(), unsigned.as_slice());
}

#[test]
fn draft_roundtrips_through_parsed_form() {
    let pair = KeyPair::generate();
    let tx = signed_invoke(&pair);

    // detaching and refinalizing reproduces the exact canonical bytes
    let refinalized = tx.to_mutable().into_transaction().unwrap();
    assert_eq!(refinalized.to_array(), tx.to_array());
}

#[test]
fn oversized_buffer_is_rejected_before_parsing() {
    let buffer = vec![0u8; MAX_TX_SIZE + 1];
    assert!(matches!(
        Transaction::from_raw_bytes(&buffer),
        Err(CoreError::SizeExceeded {
            entity: "transaction",
            ..
        })
    ));
}

#[test]
fn oversized_signature_count_is_rejected_before_signature_bodies() {
    let pair = KeyPair::generate();
    let tx = signed_invoke(&pair);

    // canonical unsigned body followed by a sig count of 17 and no bodies
    let mut writer = BinaryWriter::new();
    writer.write_bytes(tx.unsigned_bytes());
    writer.write_var_uint(17);
    assert!(matches!(
        Transaction::from_raw_bytes(writer.as_bytes()),
        Err(CoreError::SizeExceeded {
            entity: "signature count",
            actual: 17,
            ..
        })
    ));
}

/// Serializes a valid unsigned invoke body, stopping before the attribute
/// field so tests can append their own encoding of it.
fn body_without_attributes() -> BinaryWriter {
    let mut writer = BinaryWriter::new();
    writer.write_byte(0); // version
    writer.write_byte(TransactionType::Invoke as u8);
    writer.write_u32(1); // nonce
    writer.write_u64(500); // gas price
    writer.write_u64(20_000); // gas limit
    writer.write_bytes(&[0u8; ADDR_LEN]); // payer
    InvokeCode {
        code: vec![0x00, 0x01],
    }
    .serialize(&mut writer)
    .unwrap();
    writer
}

#[test]
fn attribute_field_must_fit_one_wire_byte() {
    // canonically encoded var-uint of 0xfd occupies three bytes
    let mut writer = body_without_attributes();
    writer.write_var_uint(0xfd);
    writer.write_var_uint(0); // sig count
    assert!(matches!(
        Transaction::from_raw_bytes(writer.as_bytes()),
        Err(CoreError::MalformedAttributes(3))
    ));

    // an irregular encoding of 0 fails at the codec layer
    let mut writer = body_without_attributes();
    writer.write_bytes(&[0xfd, 0x00, 0x00]);
    writer.write_var_uint(0);
    assert!(matches!(
        Transaction::from_raw_bytes(writer.as_bytes()),
        Err(CoreError::Io(IoError::IrregularData { .. }))
    ));
}

#[test]
fn valid_attribute_byte_roundtrips() {
    let mut writer = body_without_attributes();
    writer.write_var_uint(0);
    writer.write_var_uint(0); // no signatures
    let tx = Transaction::from_raw_bytes(writer.as_bytes()).unwrap();
    assert_eq!(tx.attributes(), 0);
    assert_eq!(tx.sigs().len(), 0);
    assert_eq!(tx.to_array(), writer.as_bytes());
}

#[test]
fn unknown_and_reserved_type_tags_are_rejected() {
    let pair = KeyPair::generate();
    let mut bytes = signed_invoke(&pair).to_array();

    bytes[1] = 0x99;
    assert!(matches!(
        Transaction::from_raw_bytes(&bytes),
        Err(CoreError::UnsupportedTxType(0x99))
    ));

    // Bookkeeper is declared but reserved
    bytes[1] = 0x02;
    assert!(matches!(
        Transaction::from_raw_bytes(&bytes),
        Err(CoreError::UnsupportedTxType(0x02))
    ));
}

#[test]
fn trailing_bytes_after_transaction_are_rejected() {
    let pair = KeyPair::generate();
    let mut bytes = signed_invoke(&pair).to_array();
    bytes.push(0x00);
    assert!(matches!(
        Transaction::from_raw_bytes(&bytes),
        Err(CoreError::TrailingBytes(1))
    ));
}

#[test]
fn every_truncation_fails_cleanly() {
    let pair = KeyPair::generate();
    let bytes = signed_invoke(&pair).to_array();
    for cut in 0..bytes.len() {
        assert!(
            Transaction::from_raw_bytes(&bytes[..cut]).is_err(),
            "prefix of {cut} bytes decoded"
        );
    }
}

#[test]
fn deploy_transaction_roundtrip() {
    let deploy = meridian_core::DeployCode {
        code: vec![0xde, 0xad, 0xbe, 0xef],
        need_storage: true,
        name: "registry".into(),
        version: "0.1".into(),
        author: "meridian".into(),
        email: "dev@meridian.network".into(),
        description: "name registry".into(),
    };
    let pair = KeyPair::generate();
    let mut draft = MutableTransaction::new_deploy(500, 100_000, deploy.clone());
    draft.payer = Address::from_pubkey(&pair.public_key());
    let signature = pair.sign(&draft.encode_unsigned().unwrap());
    draft.push_sig(Sig::single(signature, pair.public_key()));

    let tx = draft.into_transaction().unwrap();
    assert_eq!(tx.tx_type(), TransactionType::Deploy);

    let decoded = Transaction::from_raw_bytes(&tx.to_array()).unwrap();
    assert_eq!(
        decoded.payload(),
        &TransactionPayload::Deploy(deploy)
    );
    assert_eq!(decoded.to_array(), tx.to_array());
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic_the_decoder(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        // hostile input must only ever yield a typed error
        let _ = Transaction::from_raw_bytes(&bytes);
    }

    #[test]
    fn corrupted_transactions_fail_or_decode_cleanly(
        flip in any::<usize>(),
        seed in any::<u64>(),
    ) {
        let pair = KeyPair::generate();
        let mut draft = MutableTransaction::new_invoke(500, 20_000, vec![0x00, 0x01]);
        draft.nonce = seed as u32;
        draft.payer = Address::from_pubkey(&pair.public_key());
        let signature = pair.sign(&draft.encode_unsigned().unwrap());
        draft.push_sig(Sig::single(signature, pair.public_key()));
        let mut bytes = draft.into_transaction().unwrap().to_array();

        let index = flip % bytes.len();
        bytes[index] ^= 0xff;
        if let Ok(decoded) = Transaction::from_raw_bytes(&bytes) {
            // a flip the decoder tolerates must still round-trip exactly
            prop_assert_eq!(decoded.to_array(), bytes);
        }
    }
}

#[test]
fn concurrent_first_hash_reads_agree() {
    use std::sync::Arc;
    use std::thread;

    let pair = KeyPair::generate();
    let tx = Arc::new(signed_invoke(&pair));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tx = Arc::clone(&tx);
            thread::spawn(move || tx.hash())
        })
        .collect();
    let hashes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for hash in &hashes {
        assert_eq!(*hash, tx.hash());
    }
}

// Copyright (C) 2023-2025 The Meridian Project.
//
// constants.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Protocol constants of the Meridian network.

/// Hard cap on the encoded size of a transaction, enforced before parsing.
pub const MAX_TX_SIZE: usize = 2 * 1024 * 1024;

/// Maximum number of signatures a transaction may carry.
pub const TX_MAX_SIG_SIZE: u64 = 16;

/// Maximum number of public keys in a multisig program.
pub const MULTI_SIG_MAX_PUBKEY_SIZE: usize = 16;

/// Wire size of an account address.
pub const ADDR_LEN: usize = 20;

/// Wire size of a transaction hash.
pub const UINT256_SIZE: usize = 32;

/// Version byte prepended to Base58Check-encoded addresses.
pub const ADDRESS_VERSION: u8 = 0x17;

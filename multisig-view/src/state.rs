//! On-chain account layouts owned by the multisig program.
//!
//! These structs mirror, byte for byte, what the program persists. The layout
//! is a versioned binary contract this crate decodes but does not define:
//! addresses are kept as raw 32-byte buffers and text fields as zero-padded
//! fixed-size buffers until the decode boundary converts them.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{account::Account, pubkey::Pubkey};

/// Capacity of the fixed owner array in a v2 multisig account. Unused slots
/// hold the zero address.
pub const MAX_OWNERS: usize = 8;

/// Serialized size of a v2 multisig account.
pub const MULTISIG_V2_SPACE: usize = 8 // threshold
    + 4 // owner_set_seqno
    + 32 // label
    + 8 // created_at
    + 8 // pending_transaction_count
    + MAX_OWNERS * (32 + 32); // owner slots

/// Transaction accounts are allocated at a fixed size by the program.
pub const TRANSACTION_SPACE: usize = 1500;

/// A raw account record as fetched from the cluster: the account's address
/// plus whatever bytes the program persisted under it.
#[derive(Debug, Clone)]
pub struct KeyedAccount {
    pub pubkey: Pubkey,
    pub account: Account,
}

impl KeyedAccount {
    pub fn new(pubkey: Pubkey, account: Account) -> Self {
        Self { pubkey, account }
    }

    pub fn data(&self) -> &[u8] {
        &self.account.data
    }
}

/// First-generation multisig account: owners and their display names live in
/// two parallel, index-aligned vectors.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct MultisigV1State {
    pub threshold: u64,
    pub owner_set_seqno: u32,
    pub label: [u8; 32],
    pub created_at: i64,
    pub pending_transaction_count: u64,
    pub owners: Vec<[u8; 32]>,
    pub owner_names: Vec<[u8; 32]>,
}

/// One entry of the fixed-capacity v2 owner array.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerSlot {
    pub address: [u8; 32],
    pub name: [u8; 32],
}

impl OwnerSlot {
    /// A slot whose address is all zeros is unused.
    pub fn is_vacant(&self) -> bool {
        self.address == [0u8; 32]
    }
}

/// Second-generation multisig account: a fixed array of owner slots with
/// zero-address sentinels marking unused capacity.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct MultisigV2State {
    pub threshold: u64,
    pub owner_set_seqno: u32,
    pub label: [u8; 32],
    pub created_at: i64,
    pub pending_transaction_count: u64,
    pub owners: [OwnerSlot; MAX_OWNERS],
}

/// Account reference carried inside a proposed transaction.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionAccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Proposal account: one pending instruction plus the per-owner approval
/// bitmap. `executed_at` and `pda_timestamp` use zero as "unset".
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionState {
    pub multisig: [u8; 32],
    pub program_id: [u8; 32],
    pub accounts: Vec<TransactionAccountMeta>,
    pub data: Vec<u8>,
    pub signers: Vec<bool>,
    pub owner_set_seqno: u32,
    pub created_at: i64,
    pub executed_at: i64,
    pub proposer: [u8; 32],
    pub pda_timestamp: i64,
    pub pda_bump: u8,
}

/// Free-form metadata attached to a transaction, independent of consensus.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetailState {
    pub title: [u8; 64],
    pub description: [u8; 256],
    pub expiration_date: i64,
}

/// Deserializes a program account from its raw data.
///
/// Accounts are allocated at fixed sizes, so trailing zero padding past the
/// serialized payload is expected and tolerated. Callers wrap the IO error
/// with their own operation tag.
pub fn unpack<T: BorshDeserialize>(data: &[u8]) -> std::io::Result<T> {
    let mut slice = data;
    T::deserialize(&mut slice)
}

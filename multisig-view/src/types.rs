//! Normalized views of multisig program state.
//!
//! Everything here is a read-only projection rebuilt on every decode call;
//! nothing is cached or persisted by this crate.

use std::fmt;

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

/// The action a fee estimate is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultisigAction {
    CreateMultisig,
    CreateTransaction,
    CancelTransaction,
    Other,
}

/// Lifecycle status of a proposed transaction, derived from chain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    /// The target instruction has been executed on chain.
    Executed,
    /// The attached expiration date has passed before execution.
    Expired,
    /// The approval bitmap has reached the multisig's threshold.
    Approved,
    /// The owner set changed after the proposal, invalidating it.
    Voided,
    /// Still collecting approvals.
    Pending,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Executed => "Executed",
            TransactionStatus::Expired => "Expired",
            TransactionStatus::Approved => "Approved",
            TransactionStatus::Voided => "Voided",
            TransactionStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of the owner set, with its optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigParticipant {
    pub address: Pubkey,
    /// `None` when the on-chain name buffer is empty.
    pub name: Option<String>,
}

/// Normalized summary of a multisig account (either record version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigInfo {
    pub address: Pubkey,
    /// Record version this summary was decoded from (1 or 2).
    pub version: u8,
    pub label: String,
    /// Program-derived signing authority for this multisig.
    pub authority: Pubkey,
    /// Bump seed used to derive `authority`.
    pub nonce: u8,
    pub owner_set_seqno: u32,
    pub threshold: u64,
    pub pending_transaction_count: u64,
    /// Milliseconds since epoch.
    pub created_at: i64,
    pub owners: Vec<MultisigParticipant>,
}

impl MultisigInfo {
    /// Position of an owner in the owner list, if present. The index lines up
    /// with the transaction signer bitmap.
    pub fn participant_index(&self, owner: &Pubkey) -> Option<usize> {
        self.owners.iter().position(|p| p.address == *owner)
    }
}

/// Decoded account reference of the proposed instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Free-form metadata attached to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultisigTransactionDetail {
    pub title: String,
    pub description: String,
    /// Milliseconds since epoch; `None` when no expiration is set.
    pub expires_at: Option<i64>,
}

/// Normalized proposal record with its derived status and attached detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigTransaction {
    pub address: Pubkey,
    pub multisig: Pubkey,
    pub program_id: Pubkey,
    /// Per-owner approval bitmap, index-aligned with the multisig owner list
    /// as of proposal time.
    pub signers: Vec<bool>,
    pub owner_set_seqno: u32,
    /// Milliseconds since epoch.
    pub created_at: i64,
    /// Milliseconds since epoch; set only when the program recorded a
    /// positive execution timestamp.
    pub executed_at: Option<i64>,
    pub status: TransactionStatus,
    pub accounts: Vec<TransactionAccount>,
    /// Whether the querying owner has already signed. False when the owner is
    /// not part of the current owner list.
    pub signed_by_owner: bool,
    pub proposer: Pubkey,
    pub pda_timestamp: Option<i64>,
    pub pda_bump: u8,
    /// Raw instruction payload, exactly as proposed.
    pub data: Vec<u8>,
    pub detail: MultisigTransactionDetail,
}

/// Fee estimate for a multisig action, in SOL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultisigTransactionFees {
    pub network_fee: f64,
    pub rent_exempt: f64,
    pub multisig_fee: f64,
}

/// Display flattening of one referenced account of the proposed instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionAccount {
    pub index: usize,
    pub address: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Display flattening of one decoded value of the proposed instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionParameter {
    pub name: String,
    pub value: String,
}

/// Human-inspectable rendering of the proposed instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultisigInstruction {
    pub program_id: String,
    pub accounts: Vec<InstructionAccount>,
    /// Raw payload as space-joined two-hex-digit byte tokens.
    pub data: String,
    pub parameters: Vec<InstructionParameter>,
}

/// Display flattening of a decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultisigTransactionSummary {
    pub address: String,
    pub multisig: String,
    pub program_id: String,
    pub proposer: String,
    pub status: String,
    /// Count of true entries in the signer bitmap.
    pub approvals: usize,
    pub owner_count: usize,
    pub created_at: String,
    pub executed_at: Option<String>,
    pub expires_at: Option<String>,
    pub title: String,
    pub description: String,
    pub signed_by_owner: bool,
    pub instruction: Option<MultisigInstruction>,
}

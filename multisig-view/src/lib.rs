//! Read-side accessor layer for an on-chain multisig program.
//!
//! The multisig state machine itself (thresholds, signer sets, execution)
//! lives in an external program; this crate only mirrors what that program
//! persisted. It decodes raw account buffers into normalized views, derives
//! a transaction's lifecycle status, flattens records for display, and
//! estimates the fees of multisig actions. The one network dependency is the
//! rent-exemption query behind the [`rpc::RpcConnection`] trait.
//!
//! Two error policies coexist on purpose. The strict paths — status
//! resolution, transaction decode, detail decode, fee estimation — return
//! [`errors::MultisigViewError`] and the caller must handle failure. The
//! forgiving paths — the two multisig account decoders and the two display
//! builders — log and return `None`, because malformed or partially
//! initialized accounts are an expected state of the chain, not a crash
//! condition.

pub mod decode;
pub mod errors;
pub mod fees;
pub mod rpc;
pub mod state;
pub mod summary;
pub mod types;
pub mod utils;

pub use decode::{
    decode_multisig_v1, decode_multisig_v2, decode_transaction, decode_transaction_detail,
    resolve_transaction_status,
};
pub use errors::{MultisigViewError, RpcError};
pub use fees::{MULTISIG_FLAT_FEE, estimate_multisig_fees};
pub use rpc::{RpcConnection, SolanaRpcConnection};
pub use state::{KeyedAccount, MAX_OWNERS, MULTISIG_V2_SPACE, TRANSACTION_SPACE};
pub use summary::{build_instruction_preview, build_transaction_summary};
pub use types::{
    InstructionAccount, InstructionParameter, MultisigAction, MultisigInfo, MultisigInstruction,
    MultisigParticipant, MultisigTransaction, MultisigTransactionDetail, MultisigTransactionFees,
    MultisigTransactionSummary, TransactionAccount, TransactionStatus,
};

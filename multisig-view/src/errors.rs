use solana_client::client_error::ClientError;
use thiserror::Error;

/// Errors surfaced by the outbound RPC seam.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] ClientError),

    #[error("Error: `{0}`")]
    CustomError(String),
}

/// Top-level error type for the strict decode paths.
///
/// Each variant tags the operation that failed and carries a description of
/// the underlying cause. The fallible decoders (`decode_multisig_v1`,
/// `decode_multisig_v2`, the summary builders) never return this type; they
/// log and collapse to `None` instead.
#[derive(Error, Debug)]
pub enum MultisigViewError {
    #[error("multisig account is required to resolve transaction status")]
    MissingMultisig,

    #[error("failed to resolve transaction status: {0}")]
    StatusResolution(String),

    #[error("failed to decode multisig account: {0}")]
    MultisigDecode(String),

    #[error("failed to decode transaction account: {0}")]
    TransactionDecode(String),

    #[error("failed to decode transaction detail: {0}")]
    TransactionDetailDecode(String),

    #[error("failed to build transaction summary: {0}")]
    SummaryBuild(String),

    #[error("rpc request failed: {0}")]
    Rpc(#[from] RpcError),
}

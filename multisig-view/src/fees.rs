//! Fee estimation for multisig actions.

use solana_sdk::native_token::lamports_to_sol;

use crate::{
    errors::MultisigViewError,
    rpc::RpcConnection,
    state::{MULTISIG_V2_SPACE, TRANSACTION_SPACE},
    types::{MultisigAction, MultisigTransactionFees},
};

/// Flat protocol fee charged on every action, in SOL.
pub const MULTISIG_FLAT_FEE: f64 = 0.02;

/// Network fee for actions that create a new account, in SOL.
const CREATE_NETWORK_FEE: f64 = 0.00001;

/// Network fee for cancelling a transaction, in SOL.
const CANCEL_NETWORK_FEE: f64 = 0.000005;

/// Estimates the fees for one multisig action, in SOL.
///
/// Creating a multisig or a transaction allocates a new account, so those two
/// actions query the cluster for the rent-exemption minimum of the allocated
/// size; cancelling allocates nothing and makes no network call. RPC failures
/// propagate to the caller unchanged, with no local retry.
pub async fn estimate_multisig_fees(
    rpc: &dyn RpcConnection,
    action: MultisigAction,
) -> Result<MultisigTransactionFees, MultisigViewError> {
    let fees = match action {
        MultisigAction::CreateMultisig => MultisigTransactionFees {
            network_fee: CREATE_NETWORK_FEE,
            rent_exempt: rent_exempt_sol(rpc, MULTISIG_V2_SPACE).await?,
            multisig_fee: MULTISIG_FLAT_FEE,
        },
        MultisigAction::CreateTransaction => MultisigTransactionFees {
            network_fee: CREATE_NETWORK_FEE,
            rent_exempt: rent_exempt_sol(rpc, TRANSACTION_SPACE).await?,
            multisig_fee: MULTISIG_FLAT_FEE,
        },
        MultisigAction::CancelTransaction => MultisigTransactionFees {
            network_fee: CANCEL_NETWORK_FEE,
            rent_exempt: 0.0,
            multisig_fee: MULTISIG_FLAT_FEE,
        },
        MultisigAction::Other => MultisigTransactionFees {
            network_fee: 0.0,
            rent_exempt: 0.0,
            multisig_fee: MULTISIG_FLAT_FEE,
        },
    };
    Ok(fees)
}

async fn rent_exempt_sol(
    rpc: &dyn RpcConnection,
    data_len: usize,
) -> Result<f64, MultisigViewError> {
    let lamports = rpc.get_minimum_balance_for_rent_exemption(data_len).await?;
    Ok(lamports_to_sol(lamports))
}

//! Transaction and transaction-detail decoders.
//!
//! Unlike the multisig account decoders, these are strict: a transaction
//! record the caller explicitly asked for must decode, and any failure is
//! wrapped with its operation tag and returned.

use solana_sdk::pubkey::Pubkey;

use crate::{
    decode::status::resolve_transaction_status,
    errors::MultisigViewError,
    state::{KeyedAccount, TransactionDetailState, TransactionState, unpack},
    types::{MultisigInfo, MultisigTransaction, MultisigTransactionDetail, TransactionAccount},
    utils::{decode_fixed_text, seconds_to_millis},
};

/// Decodes a proposal account into a normalized transaction record.
///
/// `owner` is the querying owner; `signed_by_owner` reflects that owner's
/// entry in the approval bitmap, and is false when the owner is not part of
/// the multisig's current owner list. The resolved status and decoded detail
/// are embedded in the result.
pub fn decode_transaction(
    multisig: &MultisigInfo,
    owner: &Pubkey,
    record: &KeyedAccount,
    detail_record: Option<&KeyedAccount>,
) -> Result<MultisigTransaction, MultisigViewError> {
    let state: TransactionState = unpack(record.data())
        .map_err(|e| MultisigViewError::TransactionDecode(format!("borsh: {e}")))?;

    let detail = decode_transaction_detail(detail_record)?;
    let status = resolve_transaction_status(Some(multisig), &state, Some(&detail))
        .map_err(|e| MultisigViewError::StatusResolution(e.to_string()))?;

    // An owner missing from the current owner list has no bitmap slot; guard
    // the lookup instead of indexing.
    let signed_by_owner = multisig
        .participant_index(owner)
        .and_then(|index| state.signers.get(index))
        .copied()
        .unwrap_or(false);

    let accounts = state
        .accounts
        .iter()
        .map(|meta| TransactionAccount {
            pubkey: Pubkey::new_from_array(meta.pubkey),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect();

    Ok(MultisigTransaction {
        address: record.pubkey,
        multisig: Pubkey::new_from_array(state.multisig),
        program_id: Pubkey::new_from_array(state.program_id),
        signers: state.signers,
        owner_set_seqno: state.owner_set_seqno,
        created_at: seconds_to_millis(state.created_at),
        executed_at: positive_millis(state.executed_at),
        status,
        accounts,
        signed_by_owner,
        proposer: Pubkey::new_from_array(state.proposer),
        pda_timestamp: positive_millis(state.pda_timestamp),
        pda_bump: state.pda_bump,
        data: state.data,
        detail,
    })
}

/// Decodes the optional metadata account attached to a transaction.
///
/// An absent record is a valid state and yields empty text with no
/// expiration; a present record that fails to decode is an error.
pub fn decode_transaction_detail(
    record: Option<&KeyedAccount>,
) -> Result<MultisigTransactionDetail, MultisigViewError> {
    let Some(record) = record else {
        return Ok(MultisigTransactionDetail::default());
    };

    let state: TransactionDetailState = unpack(record.data())
        .map_err(|e| MultisigViewError::TransactionDetailDecode(format!("borsh: {e}")))?;

    Ok(MultisigTransactionDetail {
        title: decode_fixed_text(&state.title),
        description: decode_fixed_text(&state.description),
        expires_at: positive_millis(state.expiration_date),
    })
}

/// Seconds-since-epoch to milliseconds, treating non-positive values as
/// unset.
fn positive_millis(seconds: i64) -> Option<i64> {
    (seconds > 0).then(|| seconds_to_millis(seconds))
}

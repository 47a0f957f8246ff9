//! Display flattenings of decoded transactions.
//!
//! Like the multisig account decoders, the builders here swallow failures:
//! a summary that cannot be rendered is logged and reported as absent, never
//! as an error the UI has to handle.

use crate::{
    errors::MultisigViewError,
    types::{
        InstructionAccount, InstructionParameter, MultisigInstruction, MultisigTransaction,
        MultisigTransactionSummary,
    },
    utils::{format_timestamp, hex_byte_tokens, normalize_expiration_millis},
};

/// Flattens a decoded transaction into display strings.
pub fn build_transaction_summary(
    transaction: &MultisigTransaction,
) -> Option<MultisigTransactionSummary> {
    match try_build_summary(transaction) {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::warn!(transaction = %transaction.address, %err, "failed to build transaction summary");
            None
        }
    }
}

/// Renders the proposed instruction as an indexed account listing plus the
/// raw payload as two-hex-digit byte tokens.
pub fn build_instruction_preview(
    transaction: &MultisigTransaction,
) -> Option<MultisigInstruction> {
    let accounts = transaction
        .accounts
        .iter()
        .enumerate()
        .map(|(index, account)| InstructionAccount {
            index,
            address: account.pubkey.to_string(),
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();

    let data = hex_byte_tokens(&transaction.data);
    let parameters = vec![InstructionParameter {
        name: "data".to_string(),
        value: data.clone(),
    }];

    Some(MultisigInstruction {
        program_id: transaction.program_id.to_string(),
        accounts,
        data,
        parameters,
    })
}

fn try_build_summary(
    transaction: &MultisigTransaction,
) -> Result<MultisigTransactionSummary, MultisigViewError> {
    let approvals = transaction.signers.iter().filter(|signed| **signed).count();

    let created_at = render_timestamp(transaction.created_at)?;
    let executed_at = transaction
        .executed_at
        .map(render_timestamp)
        .transpose()?;
    // Expiration dates have been observed double-scaled upstream; normalize
    // before formatting.
    let expires_at = transaction
        .detail
        .expires_at
        .map(|ms| render_timestamp(normalize_expiration_millis(ms)))
        .transpose()?;

    Ok(MultisigTransactionSummary {
        address: transaction.address.to_string(),
        multisig: transaction.multisig.to_string(),
        program_id: transaction.program_id.to_string(),
        proposer: transaction.proposer.to_string(),
        status: transaction.status.to_string(),
        approvals,
        owner_count: transaction.signers.len(),
        created_at,
        executed_at,
        expires_at,
        title: transaction.detail.title.clone(),
        description: transaction.detail.description.clone(),
        signed_by_owner: transaction.signed_by_owner,
        instruction: build_instruction_preview(transaction),
    })
}

fn render_timestamp(timestamp_ms: i64) -> Result<String, MultisigViewError> {
    format_timestamp(timestamp_ms).ok_or_else(|| {
        MultisigViewError::SummaryBuild(format!(
            "timestamp {timestamp_ms} is out of the representable range"
        ))
    })
}

//! Transaction lifecycle status derivation.

use crate::{
    errors::MultisigViewError,
    state::TransactionState,
    types::{MultisigInfo, MultisigTransactionDetail, TransactionStatus},
    utils::now_millis,
};

/// Derives the lifecycle status of a proposal from three account snapshots.
///
/// The rules are evaluated in strict priority order, first match wins:
/// Executed, Expired, Approved, Voided, Pending. The multisig snapshot is
/// required; a transaction cannot be interpreted without its current owner
/// set and threshold.
pub fn resolve_transaction_status(
    multisig: Option<&MultisigInfo>,
    transaction: &TransactionState,
    detail: Option<&MultisigTransactionDetail>,
) -> Result<TransactionStatus, MultisigViewError> {
    resolve_transaction_status_at(multisig, transaction, detail, now_millis())
}

/// Same as [`resolve_transaction_status`] with an injectable clock.
pub fn resolve_transaction_status_at(
    multisig: Option<&MultisigInfo>,
    transaction: &TransactionState,
    detail: Option<&MultisigTransactionDetail>,
    now_ms: i64,
) -> Result<TransactionStatus, MultisigViewError> {
    let multisig = multisig.ok_or(MultisigViewError::MissingMultisig)?;

    if transaction.executed_at > 0 {
        return Ok(TransactionStatus::Executed);
    }

    if let Some(expires_at) = detail.and_then(|d| d.expires_at) {
        if expires_at > 0 && expires_at < now_ms {
            return Ok(TransactionStatus::Expired);
        }
    }

    let approvals = transaction.signers.iter().filter(|signed| **signed).count() as u64;
    if approvals == multisig.threshold {
        return Ok(TransactionStatus::Approved);
    }

    if transaction.owner_set_seqno != multisig.owner_set_seqno {
        return Ok(TransactionStatus::Voided);
    }

    Ok(TransactionStatus::Pending)
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn multisig(threshold: u64, owner_set_seqno: u32, owner_count: usize) -> MultisigInfo {
        MultisigInfo {
            address: Pubkey::new_unique(),
            version: 2,
            label: "treasury".to_string(),
            authority: Pubkey::new_unique(),
            nonce: 255,
            owner_set_seqno,
            threshold,
            pending_transaction_count: 1,
            created_at: NOW_MS - 86_400_000,
            owners: (0..owner_count)
                .map(|_| crate::types::MultisigParticipant {
                    address: Pubkey::new_unique(),
                    name: None,
                })
                .collect(),
        }
    }

    fn transaction(signers: Vec<bool>, owner_set_seqno: u32, executed_at: i64) -> TransactionState {
        TransactionState {
            multisig: [1u8; 32],
            program_id: [2u8; 32],
            accounts: vec![],
            data: vec![],
            signers,
            owner_set_seqno,
            created_at: NOW_MS / 1000 - 3600,
            executed_at,
            proposer: [3u8; 32],
            pda_timestamp: 0,
            pda_bump: 0,
        }
    }

    fn detail_expiring_at(expires_at: i64) -> MultisigTransactionDetail {
        MultisigTransactionDetail {
            title: "pay vendor".to_string(),
            description: String::new(),
            expires_at: Some(expires_at),
        }
    }

    #[test]
    fn missing_multisig_is_an_error() {
        let tx = transaction(vec![true], 0, 0);
        let err = resolve_transaction_status_at(None, &tx, None, NOW_MS).unwrap_err();
        assert!(matches!(err, MultisigViewError::MissingMultisig));
    }

    #[test]
    fn executed_timestamp_wins_over_everything() {
        let ms = multisig(2, 5, 3);
        // Also expired and past its owner set, but executed takes priority.
        let tx = transaction(vec![true, true, false], 4, NOW_MS / 1000 - 60);
        let detail = detail_expiring_at(NOW_MS - 1);

        let status = resolve_transaction_status_at(Some(&ms), &tx, Some(&detail), NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Executed);
    }

    #[test]
    fn past_expiration_beats_approval() {
        let ms = multisig(2, 5, 3);
        // Signer count meets the threshold, but the detail already expired.
        let tx = transaction(vec![true, true, false], 5, 0);
        let detail = detail_expiring_at(NOW_MS - 1);

        let status = resolve_transaction_status_at(Some(&ms), &tx, Some(&detail), NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Expired);
    }

    #[test]
    fn future_expiration_does_not_expire() {
        let ms = multisig(2, 5, 3);
        let tx = transaction(vec![true, false, false], 5, 0);
        let detail = detail_expiring_at(NOW_MS + 60_000);

        let status = resolve_transaction_status_at(Some(&ms), &tx, Some(&detail), NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Pending);
    }

    #[test]
    fn threshold_signatures_mean_approved() {
        let ms = multisig(2, 5, 3);
        let tx = transaction(vec![true, true, false], 5, 0);

        let status = resolve_transaction_status_at(Some(&ms), &tx, None, NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Approved);
    }

    #[test]
    fn stale_owner_set_seqno_means_voided() {
        let ms = multisig(2, 5, 3);
        let tx = transaction(vec![true, false, false], 4, 0);

        let status = resolve_transaction_status_at(Some(&ms), &tx, None, NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Voided);
    }

    #[test]
    fn nothing_else_matches_means_pending() {
        let ms = multisig(2, 5, 3);
        let tx = transaction(vec![true, false, false], 5, 0);

        let status = resolve_transaction_status_at(Some(&ms), &tx, None, NOW_MS).unwrap();
        assert_eq!(status, TransactionStatus::Pending);
    }

    #[test]
    fn approval_requires_exact_threshold_count() {
        let ms = multisig(2, 5, 3);
        for (signers, expected) in [
            (vec![false, false, false], TransactionStatus::Pending),
            (vec![true, false, false], TransactionStatus::Pending),
            (vec![true, true, false], TransactionStatus::Approved),
        ] {
            let tx = transaction(signers, 5, 0);
            let status = resolve_transaction_status_at(Some(&ms), &tx, None, NOW_MS).unwrap();
            assert_eq!(status, expected);
        }
    }
}

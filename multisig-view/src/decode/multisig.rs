//! Multisig account decoders for both record versions.
//!
//! These decoders are deliberately forgiving: on-chain accounts can be
//! malformed or only partially initialized (e.g. not yet finalized), and such
//! records must surface as "could not be decoded" rather than as a hard
//! error. Every failure is logged and collapsed to `None`.

use solana_sdk::pubkey::Pubkey;

use crate::{
    errors::MultisigViewError,
    state::{KeyedAccount, MultisigV1State, MultisigV2State, unpack},
    types::{MultisigInfo, MultisigParticipant},
    utils::{decode_fixed_text, decode_optional_text, seconds_to_millis},
};

/// Decodes a first-generation multisig account.
///
/// Owners and their names are stored in two parallel, index-aligned vectors.
pub fn decode_multisig_v1(program_id: &Pubkey, record: &KeyedAccount) -> Option<MultisigInfo> {
    match try_decode_v1(program_id, record) {
        Ok(info) => Some(info),
        Err(err) => {
            tracing::warn!(account = %record.pubkey, %err, "skipping undecodable v1 multisig account");
            None
        }
    }
}

/// Decodes a second-generation multisig account.
///
/// The fixed-capacity owner array is filtered at this boundary: vacant
/// zero-address slots never appear in the resulting owner list.
pub fn decode_multisig_v2(program_id: &Pubkey, record: &KeyedAccount) -> Option<MultisigInfo> {
    match try_decode_v2(program_id, record) {
        Ok(info) => Some(info),
        Err(err) => {
            tracing::warn!(account = %record.pubkey, %err, "skipping undecodable v2 multisig account");
            None
        }
    }
}

fn try_decode_v1(
    program_id: &Pubkey,
    record: &KeyedAccount,
) -> Result<MultisigInfo, MultisigViewError> {
    let state: MultisigV1State = unpack(record.data())
        .map_err(|e| MultisigViewError::MultisigDecode(format!("v1 layout: {e}")))?;
    let (authority, nonce) = derive_authority(program_id, &record.pubkey)?;

    let owners = state
        .owners
        .iter()
        .enumerate()
        .map(|(i, address)| MultisigParticipant {
            address: Pubkey::new_from_array(*address),
            name: state.owner_names.get(i).and_then(|n| decode_optional_text(n)),
        })
        .collect();

    Ok(MultisigInfo {
        address: record.pubkey,
        version: 1,
        label: decode_fixed_text(&state.label),
        authority,
        nonce,
        owner_set_seqno: state.owner_set_seqno,
        threshold: state.threshold,
        pending_transaction_count: state.pending_transaction_count,
        created_at: seconds_to_millis(state.created_at),
        owners,
    })
}

fn try_decode_v2(
    program_id: &Pubkey,
    record: &KeyedAccount,
) -> Result<MultisigInfo, MultisigViewError> {
    let state: MultisigV2State = unpack(record.data())
        .map_err(|e| MultisigViewError::MultisigDecode(format!("v2 layout: {e}")))?;
    let (authority, nonce) = derive_authority(program_id, &record.pubkey)?;

    let owners = state
        .owners
        .iter()
        .filter(|slot| !slot.is_vacant())
        .map(|slot| MultisigParticipant {
            address: Pubkey::new_from_array(slot.address),
            name: decode_optional_text(&slot.name),
        })
        .collect();

    Ok(MultisigInfo {
        address: record.pubkey,
        version: 2,
        label: decode_fixed_text(&state.label),
        authority,
        nonce,
        owner_set_seqno: state.owner_set_seqno,
        threshold: state.threshold,
        pending_transaction_count: state.pending_transaction_count,
        created_at: seconds_to_millis(state.created_at),
        owners,
    })
}

/// Derives the multisig's signing authority from its own address, walking
/// bump seeds until the first valid off-curve address.
fn derive_authority(
    program_id: &Pubkey,
    multisig: &Pubkey,
) -> Result<(Pubkey, u8), MultisigViewError> {
    Pubkey::try_find_program_address(&[multisig.as_ref()], program_id).ok_or_else(|| {
        MultisigViewError::MultisigDecode(format!("no valid authority bump for {multisig}"))
    })
}

#[cfg(test)]
mod tests {
    use borsh::BorshSerialize;
    use solana_sdk::account::Account;

    use super::*;
    use crate::state::{MAX_OWNERS, OwnerSlot};

    fn keyed(pubkey: Pubkey, owner: Pubkey, data: Vec<u8>) -> KeyedAccount {
        KeyedAccount::new(
            pubkey,
            Account {
                lamports: 1_000_000,
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        )
    }

    fn serialize<T: BorshSerialize>(state: &T) -> Vec<u8> {
        borsh::to_vec(state).unwrap()
    }

    fn padded_name(name: &str) -> [u8; 32] {
        let mut buffer = [0u8; 32];
        buffer[..name.len()].copy_from_slice(name.as_bytes());
        buffer
    }

    fn vacant() -> OwnerSlot {
        OwnerSlot {
            address: [0u8; 32],
            name: [0u8; 32],
        }
    }

    #[test]
    fn decodes_v1_with_parallel_owner_names() {
        let program_id = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let state = MultisigV1State {
            threshold: 2,
            owner_set_seqno: 3,
            label: padded_name("ops treasury"),
            created_at: 1_700_000_000,
            pending_transaction_count: 4,
            owners: vec![alice.to_bytes(), bob.to_bytes()],
            owner_names: vec![padded_name("alice"), padded_name("")],
        };

        let info =
            decode_multisig_v1(&program_id, &keyed(address, program_id, serialize(&state)))
                .unwrap();

        assert_eq!(info.address, address);
        assert_eq!(info.version, 1);
        assert_eq!(info.label, "ops treasury");
        assert_eq!(info.threshold, 2);
        assert_eq!(info.owner_set_seqno, 3);
        assert_eq!(info.pending_transaction_count, 4);
        assert_eq!(info.created_at, 1_700_000_000_000);
        assert_eq!(info.owners.len(), 2);
        assert_eq!(info.owners[0].address, alice);
        assert_eq!(info.owners[0].name.as_deref(), Some("alice"));
        assert_eq!(info.owners[1].address, bob);
        assert_eq!(info.owners[1].name, None);

        let (expected_authority, expected_nonce) =
            Pubkey::find_program_address(&[address.as_ref()], &program_id);
        assert_eq!(info.authority, expected_authority);
        assert_eq!(info.nonce, expected_nonce);
    }

    #[test]
    fn decodes_v2_and_filters_vacant_slots() {
        let program_id = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let mut owners = [vacant(); MAX_OWNERS];
        owners[0] = OwnerSlot {
            address: alice.to_bytes(),
            name: padded_name("alice"),
        };
        // Slot 1 left vacant on purpose: a removed owner's tombstone.
        owners[2] = OwnerSlot {
            address: bob.to_bytes(),
            name: padded_name(""),
        };

        let state = MultisigV2State {
            threshold: 2,
            owner_set_seqno: 7,
            label: padded_name("vault"),
            created_at: 1_700_000_000,
            pending_transaction_count: 0,
            owners,
        };

        let info =
            decode_multisig_v2(&program_id, &keyed(address, program_id, serialize(&state)))
                .unwrap();

        assert_eq!(info.version, 2);
        assert_eq!(info.owners.len(), 2);
        assert_eq!(info.owners[0].address, alice);
        assert_eq!(info.owners[0].name.as_deref(), Some("alice"));
        assert_eq!(info.owners[1].address, bob);
        assert_eq!(info.owners[1].name, None);
    }

    #[test]
    fn v2_label_with_embedded_zeros_decodes_without_corruption() {
        let program_id = Pubkey::new_unique();
        let address = Pubkey::new_unique();

        let mut label = [0u8; 32];
        label[0] = b'a';
        label[5] = b'b';
        label[9] = b'c';

        let state = MultisigV2State {
            threshold: 1,
            owner_set_seqno: 0,
            label,
            created_at: 0,
            pending_transaction_count: 0,
            owners: [vacant(); MAX_OWNERS],
        };

        let info =
            decode_multisig_v2(&program_id, &keyed(address, program_id, serialize(&state)))
                .unwrap();
        assert_eq!(info.label, "abc");
        assert!(info.owners.is_empty());
    }

    #[test]
    fn malformed_bytes_yield_none_instead_of_error() {
        let program_id = Pubkey::new_unique();
        let address = Pubkey::new_unique();

        assert!(decode_multisig_v1(&program_id, &keyed(address, program_id, vec![1, 2, 3])).is_none());
        assert!(decode_multisig_v2(&program_id, &keyed(address, program_id, vec![])).is_none());
    }
}

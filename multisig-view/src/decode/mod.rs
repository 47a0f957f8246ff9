//! Account decoders: raw program records in, normalized views out.

pub mod multisig;
pub mod status;
pub mod transaction;

pub use multisig::{decode_multisig_v1, decode_multisig_v2};
pub use status::{resolve_transaction_status, resolve_transaction_status_at};
pub use transaction::{decode_transaction, decode_transaction_detail};

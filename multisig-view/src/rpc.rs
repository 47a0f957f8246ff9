//! Outbound RPC seam.
//!
//! The only network dependency of this crate is the rent-exemption query used
//! by the fee estimator. It sits behind a trait so callers can plug in a test
//! double; cancellation and retries belong to the transport layer behind it.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::errors::RpcError;

#[async_trait]
pub trait RpcConnection: Send + Sync {
    /// Minimum balance in lamports required to keep an account of
    /// `data_len` bytes rent-exempt.
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError>;
}

/// Live [`RpcConnection`] over a Solana JSON-RPC endpoint.
pub struct SolanaRpcConnection {
    client: RpcClient,
}

impl SolanaRpcConnection {
    pub fn new<U: ToString>(url: U) -> Self {
        Self::new_with_commitment(url, CommitmentConfig::confirmed())
    }

    pub fn new_with_commitment<U: ToString>(url: U, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        let lamports = self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?;
        Ok(lamports)
    }
}

use crate::application::errors::ChainError;
use async_trait::async_trait;

/// ChainClient trait - abstraction for the blockchain RPC boundary.
///
/// Works entirely in the chain's base unit (lamports); unit conversion
/// for user-facing amounts is the wallet service's job.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Query the lamport balance of a wallet address.
    async fn balance_lamports(&self, address: &str) -> Result<u64, ChainError>;

    /// Sign and submit a single-recipient transfer, returning the
    /// transaction signature. Fire-and-forget: no confirmation polling.
    async fn submit_transfer(
        &self,
        sender_key: &str,
        recipient: &str,
        lamports: u64,
    ) -> Result<String, ChainError>;
}

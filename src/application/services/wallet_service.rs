//! Chain gateway - unit conversion and delegation to the RPC client

use crate::application::errors::ChainError;
use crate::domain::traits::ChainClient;

/// Scale between SOL and the chain's base unit.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a human-readable SOL amount to lamports.
pub fn sol_to_lamports(amount_sol: f64) -> u64 {
    (amount_sol * LAMPORTS_PER_SOL as f64).round() as u64
}

/// Wraps the blockchain client: converts between SOL and lamports and
/// surfaces RPC outcomes as reply-ready results.
pub struct WalletService<C> {
    client: C,
}

impl<C: ChainClient> WalletService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Look up a wallet balance in SOL.
    pub async fn balance_sol(&self, address: &str) -> Result<f64, ChainError> {
        tracing::debug!("Balance lookup for {}", address);
        let lamports = self.client.balance_lamports(address).await?;
        Ok(lamports as f64 / LAMPORTS_PER_SOL as f64)
    }

    /// Submit a single-recipient transfer. A single fire-and-forget
    /// submission; the caller gets the transaction signature or the
    /// failure cause, nothing more.
    pub async fn transfer_sol(
        &self,
        sender_key: &str,
        recipient: &str,
        amount_sol: f64,
    ) -> Result<String, ChainError> {
        let lamports = sol_to_lamports(amount_sol);
        tracing::info!("Submitting transfer of {} lamports to {}", lamports, recipient);
        self.client
            .submit_transfer(sender_key, recipient, lamports)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_and_fractional_sol() {
        assert_eq!(sol_to_lamports(1.0), 1_000_000_000);
        assert_eq!(sol_to_lamports(1.5), 1_500_000_000);
        assert_eq!(sol_to_lamports(0.000000001), 1);
    }

    #[test]
    fn rounds_instead_of_truncating() {
        // 0.1 * 1e9 is not exactly representable; truncation would
        // lose a lamport.
        assert_eq!(sol_to_lamports(0.1), 100_000_000);
        assert_eq!(sol_to_lamports(2.2), 2_200_000_000);
    }
}

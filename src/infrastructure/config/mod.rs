//! Configuration management

use std::fmt;

use crate::application::errors::ConfigError;

/// Default public mainnet RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Bot configuration, read once at startup and immutable afterwards.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot token; absent means console (dev) mode
    pub telegram_token: Option<String>,
    /// Solana JSON-RPC endpoint
    pub rpc_url: String,
    /// Hex-encoded sender secret key
    pub wallet_private_key: String,
    /// Base58 wallet address
    pub wallet_public_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
        let rpc_url =
            std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let wallet_private_key = require("WALLET_PRIVATE_KEY")?;
        let wallet_public_key = require("WALLET_PUBLIC_KEY")?;

        Ok(Self {
            telegram_token,
            rpc_url,
            wallet_private_key,
            wallet_public_key,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingField(name.to_string()))
}

// Manual Debug so the private key never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_token", &self.telegram_token.as_deref().map(|_| "<redacted>"))
            .field("rpc_url", &self.rpc_url)
            .field("wallet_private_key", &"<redacted>")
            .field("wallet_public_key", &self.wallet_public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation happens in a single test to avoid races
    // between parallel test threads.
    #[test]
    fn loads_and_requires_env() {
        std::env::set_var("WALLET_PRIVATE_KEY", "ab".repeat(32));
        std::env::set_var("WALLET_PUBLIC_KEY", "SomeBase58Address");
        std::env::remove_var("SOLANA_RPC_URL");
        std::env::remove_var("TELEGRAM_BOT_TOKEN");

        let config = Config::from_env().unwrap();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.telegram_token, None);
        assert_eq!(config.wallet_public_key, "SomeBase58Address");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("abab"), "private key must be redacted");

        std::env::remove_var("WALLET_PRIVATE_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField(field) if field == "WALLET_PRIVATE_KEY"
        ));
        std::env::remove_var("WALLET_PUBLIC_KEY");
    }
}

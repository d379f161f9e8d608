//! Solana JSON-RPC client
//!
//! Talks to a Solana node over JSON-RPC 2.0: balance lookup, recent
//! blockhash fetch, and signed transaction submission. A missing
//! `result` member or a JSON-RPC `error` member is surfaced as an
//! explicit error carrying the cause.

pub mod transaction;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde_json::{json, Value};

use crate::application::errors::ChainError;
use crate::domain::traits::ChainClient;
use transaction::Keypair;

/// Solana RPC client
pub struct SolanaRpcClient {
    url: String,
    client: Client,
}

impl SolanaRpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// Single JSON-RPC round trip. Returns the `result` member or the
    /// failure cause as a string; the caller picks the error variant.
    async fn call(&self, method: &str, params: Value) -> Result<Value, String> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        tracing::debug!("RPC {} -> {}", method, self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("RPC HTTP error: {}", response.status()));
        }

        let data: Value = response.json().await.map_err(|e| e.to_string())?;

        if let Some(error) = data.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(message);
        }

        data.get("result")
            .cloned()
            .ok_or_else(|| "no result in RPC response".to_string())
    }

    /// Fetch a recent blockhash to embed in a transaction.
    async fn latest_blockhash(&self) -> Result<[u8; 32], String> {
        let result = self.call("getLatestBlockhash", json!([])).await?;
        let blockhash = result
            .pointer("/value/blockhash")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "no blockhash in RPC response".to_string())?;
        transaction::decode_hash(blockhash)
    }
}

#[async_trait]
impl ChainClient for SolanaRpcClient {
    async fn balance_lamports(&self, address: &str) -> Result<u64, ChainError> {
        let result = self
            .call("getBalance", json!([address]))
            .await
            .map_err(ChainError::LookupFailed)?;

        result
            .pointer("/value")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ChainError::LookupFailed("no balance in RPC response".to_string()))
    }

    async fn submit_transfer(
        &self,
        sender_key: &str,
        recipient: &str,
        lamports: u64,
    ) -> Result<String, ChainError> {
        let keypair = Keypair::from_hex(sender_key).map_err(ChainError::SubmissionFailed)?;

        let blockhash = self
            .latest_blockhash()
            .await
            .map_err(ChainError::SubmissionFailed)?;

        let tx = transaction::build_transfer(&keypair, recipient, lamports, &blockhash)
            .map_err(ChainError::SubmissionFailed)?;

        // Mirrors the node's immediate response; no preflight, no
        // confirmation polling.
        let result = self
            .call(
                "sendTransaction",
                json!([BASE64.encode(&tx), {"encoding": "base64", "skipPreflight": true}]),
            )
            .await
            .map_err(ChainError::SubmissionFailed)?;

        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ChainError::SubmissionFailed("no signature in RPC response".to_string()))
    }
}

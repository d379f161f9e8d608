//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading from the environment
//! - Adapters: Platform integrations (Telegram, console)
//! - Solana: JSON-RPC client and transaction wire codec

pub mod adapters;
pub mod config;
pub mod solana;

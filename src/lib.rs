//! soltrade-bot - a minimal Telegram bot for a single Solana wallet
//!
//! Supports balance lookup and single-recipient SOL transfers via text
//! commands. Layered clean-architecture style: domain entities and
//! traits, application services (command dispatch + chain gateway),
//! and infrastructure adapters (Telegram, console, Solana JSON-RPC).

pub mod application;
pub mod domain;
pub mod infrastructure;

//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod chain;

pub use bot::{Bot, BotInfo};
pub use chain::ChainClient;

//! Application services - Business logic orchestration

pub mod command_service;
pub mod wallet_commands;
pub mod wallet_service;

pub use command_service::CommandService;
pub use wallet_commands::register_wallet_commands;
pub use wallet_service::{WalletService, LAMPORTS_PER_SOL};

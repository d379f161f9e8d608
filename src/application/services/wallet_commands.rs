//! Registration of the wallet-backed commands (/balance, /transfer)

use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::services::{CommandService, WalletService};
use crate::domain::entities::{Command, Content, TransferRequest};
use crate::domain::traits::ChainClient;

/// Register the two chain-backed commands. The wallet address and
/// sender key come from configuration, loaded once at startup.
pub fn register_wallet_commands<C>(
    commands: &mut CommandService,
    wallet: Arc<WalletService<C>>,
    wallet_address: String,
    sender_key: String,
) where
    C: ChainClient + 'static,
{
    let balance_wallet = wallet.clone();
    commands.register(
        Command::new("balance")
            .with_description("Check your Solana wallet balance")
            .with_handler(move |_msg| {
                let wallet = balance_wallet.clone();
                let address = wallet_address.clone();
                async move {
                    match wallet.balance_sol(&address).await {
                        Ok(balance) => Ok(format!("Your balance: {} SOL", balance)),
                        Err(e) => Ok(format!("Error: {}", e)),
                    }
                }
            }),
    );

    commands.register(
        Command::new("transfer")
            .with_description("Transfer SOL to another wallet")
            .with_usage("/transfer <recipient> <amount>")
            .with_handler(move |msg| {
                let wallet = wallet.clone();
                let sender_key = sender_key.clone();
                async move {
                    let Content::Command { args, .. } = &msg.content else {
                        return Err(CommandError::InvalidArgs("not a command".to_string()));
                    };

                    // Malformed input never reaches the gateway.
                    let request = match TransferRequest::from_args(args) {
                        Ok(request) => request,
                        Err(e) => return Ok(e.to_string()),
                    };

                    match wallet
                        .transfer_sol(&sender_key, &request.recipient, request.amount_sol)
                        .await
                    {
                        Ok(tx_id) => Ok(format!("Transaction successful! TX ID: {}", tx_id)),
                        Err(e) => Ok(format!("Error: {}", e)),
                    }
                }
            }),
    );
}

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use soltrade_bot::application::messaging::MessageParser;
use soltrade_bot::application::services::{
    register_wallet_commands, CommandService, WalletService,
};
use soltrade_bot::domain::entities::User;
use soltrade_bot::domain::traits::Bot;
use soltrade_bot::infrastructure::adapters::console::ConsoleAdapter;
use soltrade_bot::infrastructure::adapters::telegram::TelegramAdapter;
use soltrade_bot::infrastructure::config::Config;
use soltrade_bot::infrastructure::solana::SolanaRpcClient;

#[derive(Parser)]
#[command(name = "soltrade-bot")]
#[command(about = "A minimal Solana wallet bot for Telegram", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Bot token (overrides environment)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.token);
        }
        Commands::Version => {
            println!("soltrade-bot v{}", env!("CARGO_PKG_VERSION"));
        }
    }
}

fn run_bot(token_override: Option<String>) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return;
        }
    };

    tracing::info!("Starting soltrade-bot (rpc: {})", config.rpc_url);

    // Wire up the chain gateway and command handlers
    let rpc = SolanaRpcClient::new(&config.rpc_url);
    let wallet = Arc::new(WalletService::new(rpc));

    let mut commands = CommandService::new("/");
    commands.register_defaults();
    register_wallet_commands(
        &mut commands,
        wallet,
        config.wallet_public_key.clone(),
        config.wallet_private_key.clone(),
    );

    let rt = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");

    if let Some(token) = token_override.or_else(|| config.telegram_token.clone()) {
        rt.block_on(async {
            let mut bot = TelegramAdapter::new(token);
            run_telegram_bot(&mut bot, &commands).await;
        });
    } else {
        // No token configured: console mode for local development
        rt.block_on(async {
            let bot = ConsoleAdapter::new();
            run_console_bot(bot, &commands).await;
        });
    }
}

async fn run_telegram_bot(bot: &mut TelegramAdapter, commands: &CommandService) {
    if let Err(e) = bot.fetch_bot_info().await {
        tracing::error!("Failed to fetch bot info: {}", e);
        return;
    }

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    if let Err(e) = bot.register_commands().await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let parser = MessageParser::new(commands.prefix());
    let mut offset: i64 = 0;
    let timeout_seconds = 30;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, timeout_seconds).await {
            Ok(updates) => {
                for update in &updates {
                    let Some(msg) = &update.message else { continue };
                    let Some(text) = msg.text.as_deref() else { continue };
                    if text.trim().is_empty() {
                        continue;
                    }

                    let chat_id = msg.chat.id.to_string();
                    let sender = msg.from.as_ref().map(|u| {
                        let mut user = User::new(u.id.to_string());
                        if let Some(username) = &u.username {
                            user = user.with_username(username);
                        }
                        if let Some(first_name) = &u.first_name {
                            user = user.with_first_name(first_name);
                        }
                        user
                    });

                    let message = parser
                        .parse(&chat_id, text, sender.clone())
                        .with_platform("telegram");

                    let reply = match commands.handle(&message).await {
                        Ok(Some(reply)) => reply,
                        Ok(None) => continue,
                        Err(e) => format!("Error: {}", e),
                    };

                    if let Some(user) = &sender {
                        tracing::info!("Replying to {} in chat {}", user, chat_id);
                    }
                    if let Err(e) = bot.send_message(&chat_id, &reply).await {
                        tracing::error!("Failed to send message: {}", e);
                    }
                }

                if !updates.is_empty() {
                    offset = TelegramAdapter::get_next_offset(&updates);
                }
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }
}

async fn run_console_bot(bot: ConsoleAdapter, commands: &CommandService) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start console bot: {}", e);
        return;
    }

    let parser = MessageParser::new(commands.prefix());

    loop {
        let Some(line) = bot.read_line("> ").await else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let message = parser.parse("console", &line, None).with_platform("console");

        match commands.handle(&message).await {
            Ok(Some(reply)) => {
                let _ = bot.send_message("console", &reply).await;
            }
            Ok(None) => {}
            Err(e) => {
                let _ = bot.send_message("console", &format!("Error: {}", e)).await;
            }
        }
    }
}

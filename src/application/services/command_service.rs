use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandRegistry, Content, Message};

/// Service for managing and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    /// Register the fixed-reply commands
    pub fn register_defaults(&mut self) {
        self.register(
            Command::new("start")
                .with_description("Start the bot")
                .with_handler(|_msg| async {
                    Ok(
                        "Welcome to the Solana Trading Bot! Use /help to see available commands."
                            .to_string(),
                    )
                }),
        );

        self.register(
            Command::new("help")
                .with_description("Show help message")
                .with_handler(|_msg| async {
                    Ok("Available Commands:\n\
                        /start - Start the bot.\n\
                        /help - Show this message.\n\
                        /balance - Check your Solana wallet balance.\n\
                        /transfer <recipient> <amount> - Transfer SOL to another wallet."
                        .to_string())
                }),
        );
    }

    /// Dispatch a parsed message. Returns `Ok(None)` for non-command
    /// content; commands are handled independently and statelessly.
    pub async fn handle(&self, message: &Message) -> Result<Option<String>, CommandError> {
        let Content::Command { name, .. } = &message.content else {
            return Ok(None);
        };

        let cmd = self
            .registry
            .find(name)
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        tracing::debug!("Handling /{} (message {})", cmd.name, message.id);

        if let Some(handler) = &cmd.handler {
            Ok(Some(handler(message.clone()).await?))
        } else {
            Ok(Some(format!("Command {} not implemented", cmd.name)))
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_returns_welcome() {
        let mut commands = CommandService::new("/");
        commands.register_defaults();

        let msg = Message::from_command("chat1", "start", vec![]);
        let reply = commands.handle(&msg).await.unwrap().unwrap();
        assert_eq!(
            reply,
            "Welcome to the Solana Trading Bot! Use /help to see available commands."
        );
    }

    #[tokio::test]
    async fn help_lists_commands() {
        let mut commands = CommandService::new("/");
        commands.register_defaults();

        let msg = Message::from_command("chat1", "help", vec![]);
        let reply = commands.handle(&msg).await.unwrap().unwrap();
        assert!(reply.contains("/balance"));
        assert!(reply.contains("/transfer <recipient> <amount>"));
    }

    #[tokio::test]
    async fn unknown_command_is_an_error() {
        let mut commands = CommandService::new("/");
        commands.register_defaults();

        let msg = Message::from_command("chat1", "frobnicate", vec![]);
        let err = commands.handle(&msg).await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound(name) if name == "frobnicate"));
    }

    #[tokio::test]
    async fn plain_text_is_ignored() {
        let mut commands = CommandService::new("/");
        commands.register_defaults();

        let msg = Message::from_text("chat1", "hello");
        assert_eq!(commands.handle(&msg).await.unwrap(), None);
    }
}

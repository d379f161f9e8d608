//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming messages into structured Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse a text message
    pub fn parse(
        &self,
        chat_id: impl Into<String>,
        text: impl Into<String>,
        sender: Option<User>,
    ) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();

        if text.starts_with('/') || text.starts_with(&self.command_prefix) {
            return self.parse_command(chat_id, text, sender);
        }

        Message::new(chat_id, Content::Text(text)).with_sender_opt(sender)
    }

    /// Parse a command message
    fn parse_command(&self, chat_id: String, text: String, sender: Option<User>) -> Message {
        let cmd_text = if text.starts_with('/') {
            text.trim_start_matches('/')
        } else {
            text.trim_start_matches(&self.command_prefix)
        };

        let parts: Vec<&str> = cmd_text.split_whitespace().collect();
        let name = parts.first().unwrap_or(&"").to_string();
        let args: Vec<String> = parts
            .get(1..)
            .unwrap_or(&[])
            .iter()
            .map(|s| s.to_string())
            .collect();

        Message::new(chat_id, Content::Command { name, args }).with_sender_opt(sender)
    }
}

impl Message {
    /// Helper to set sender as Option
    pub fn with_sender_opt(mut self, user: Option<User>) -> Self {
        if let Some(u) = user {
            self.sender = Some(u);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_args() {
        let parser = MessageParser::new("/");
        let msg = parser.parse("chat1", "/transfer abc123 1.5", None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "transfer".to_string(),
                args: vec!["abc123".to_string(), "1.5".to_string()],
            }
        );
    }

    #[test]
    fn parses_command_without_args() {
        let parser = MessageParser::new("/");
        let msg = parser.parse("chat1", "/balance", None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "balance".to_string(),
                args: vec![],
            }
        );
    }

    #[test]
    fn parses_plain_text() {
        let parser = MessageParser::new("/");
        let msg = parser.parse("chat1", "hello there", None);
        assert_eq!(msg.content, Content::Text("hello there".to_string()));
        assert!(!msg.content.is_command());
    }

    #[test]
    fn keeps_sender() {
        let parser = MessageParser::new("/");
        let user = User::new("42").with_username("alice");
        let msg = parser.parse("chat1", "/start", Some(user));
        assert_eq!(msg.sender.unwrap().display_name(), "alice");
    }
}

//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;
pub mod transfer;
pub mod user;

pub use command::{Command, CommandRegistry};
pub use message::{Content, Message};
pub use transfer::{InvalidTransfer, TransferRequest};
pub use user::User;

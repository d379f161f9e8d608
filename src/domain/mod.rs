//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (User, Message, Command, TransferRequest)
//! - Traits: Abstractions for infrastructure (Bot, ChainClient)

pub mod entities;
pub mod traits;

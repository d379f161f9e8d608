//! Message handling - Parsing raw transport text into structured messages

pub mod parser;

pub use parser::MessageParser;

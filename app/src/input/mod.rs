//! Incoming message parsing.

pub mod message;

pub use message::Message;

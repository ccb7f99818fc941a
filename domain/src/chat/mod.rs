//! Conversation entities: messages and transcripts

pub mod message;
pub mod transcript;

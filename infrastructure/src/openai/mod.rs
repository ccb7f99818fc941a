//! OpenAI-compatible gateway adapter

pub mod gateway;
mod protocol;

pub use gateway::{OpenAiGateway, DEFAULT_BASE_URL};

//! OpenAI-compatible chat-completions adapter.

pub mod gateway;
pub mod protocol;

pub use gateway::OpenAiGateway;

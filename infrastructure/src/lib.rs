//! Infrastructure layer for adchat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the OpenAI-compatible streaming gateway, the SerpApi
//! shopping search, configuration file loading with credential resolution,
//! and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod openai;
pub mod serpapi;

// Re-export commonly used types
pub use config::{ConfigLoader, CredentialError, Credentials, FileConfig};
pub use logging::JsonlConversationLogger;
pub use openai::OpenAiGateway;
pub use serpapi::SerpApiSearch;

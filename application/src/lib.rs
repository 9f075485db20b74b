//! Application layer for adchat
//!
//! This crate contains the conversation orchestrator, the coherence judge,
//! port definitions for the two external collaborators (text generation and
//! shopping search), and chat parameters. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway, StreamEvent, StreamHandle},
    product_search::{ProductSearch, SearchError},
};
pub use use_cases::chat_turn::{ChatTurnError, ChatTurnUseCase};
pub use use_cases::judge_topic::CoherenceJudge;

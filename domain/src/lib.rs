//! Domain layer for adchat
//!
//! This crate contains the core business logic: conversation turns and the
//! bounded buffer, coherence-verdict parsing, product record normalization,
//! and prompt text. It has no dependencies on infrastructure or I/O.
//!
//! # Core Concepts
//!
//! - **Turn**: one user question or assistant answer in the conversation.
//! - **Coherence Verdict**: the judge's structured answer to "are the last
//!   few exchanges about one topic, and what product fits?"
//! - **Product Record**: a normalized shopping listing ready to be embedded
//!   in a reply.

pub mod coherence;
pub mod conversation;
pub mod product;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use coherence::{CoherenceVerdict, NONE_SENTINEL};
pub use conversation::{
    buffer::ConversationBuffer,
    entities::{Message, Role, Speaker, Turn},
};
pub use product::{DESCRIPTION_LIMIT, ELLIPSIS, ProductRecord};
pub use prompt::{ANSWER_SYSTEM_PROMPT, JUDGE_PRIMER, JUDGE_SYSTEM_PROMPT, recommendation_suffix};
pub use util::truncate_chars;

//! Conversation entities and the bounded turn buffer.

pub mod buffer;
pub mod entities;

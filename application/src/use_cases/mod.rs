//! Use cases: the conversation orchestrator and the coherence judge.

pub mod chat_turn;
pub mod judge_topic;

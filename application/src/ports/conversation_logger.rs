//! Port for structured conversation logging.
//!
//! Separate from `tracing`-based diagnostics: tracing carries operator
//! messages, while this port records the conversation transcript (questions,
//! answers, verdicts, recommendations) in a machine-readable form.

use serde_json::Value;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "user_question", "assistant_answer",
    /// "judge_verdict", "recommendation").
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording transcript events.
///
/// `log` is synchronous and non-fallible: transcript logging must never
/// disturb the conversation flow, so implementations swallow their own
/// failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

//! Conversation orchestrator.
//!
//! Owns the turn buffer and the question counter for one conversation,
//! drives the primary answer generation, and on the trigger cadence runs
//! the coherence judge and, conditionally, the product lookup, merging a
//! sponsored recommendation into the reply.
//!
//! # Flow per user message
//!
//! 1. Append the question to the buffer (capacity eviction applies) and
//!    increment the question counter.
//! 2. Send the system instruction plus the full buffered history to the
//!    gateway. A failure here is fatal to the turn and rolls the question
//!    back out of the buffer.
//! 3. When the counter reaches the trigger period: snapshot the trailing
//!    window, judge it, look up a product for a usable suggestion, and
//!    append the recommendation suffix when one is found. The counter
//!    resets whether or not a recommendation was produced.
//! 4. Append the (possibly suffixed) answer to the buffer and return it.

use crate::config::ChatParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::product_search::ProductSearch;
use crate::use_cases::judge_topic::CoherenceJudge;
use adchat_domain::{
    ANSWER_SYSTEM_PROMPT, CoherenceVerdict, ConversationBuffer, Message, ProductRecord,
    recommendation_suffix,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a conversation turn.
#[derive(Error, Debug)]
pub enum ChatTurnError {
    /// The primary answer generation failed. Judge and lookup failures
    /// never surface here; they degrade to "no recommendation".
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for running one conversation.
///
/// One instance per conversation: the buffer and counter are owned state,
/// and `chat` takes `&mut self`, so concurrent callers must hold their own
/// instance.
pub struct ChatTurnUseCase {
    gateway: Arc<dyn LlmGateway>,
    search: Arc<dyn ProductSearch>,
    judge: CoherenceJudge,
    logger: Arc<dyn ConversationLogger>,
    params: ChatParams,
    buffer: ConversationBuffer,
    questions_since_trigger: u32,
}

impl ChatTurnUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        search: Arc<dyn ProductSearch>,
        mut params: ChatParams,
    ) -> Self {
        // A zero period would trigger on every question with an empty
        // snapshot; treat it as 1 (trigger every question)
        params.trigger_period = params.trigger_period.max(1);
        let buffer = ConversationBuffer::new(params.buffer_capacity);
        let judge = CoherenceJudge::new(gateway.clone());
        Self {
            gateway,
            search,
            judge,
            logger: Arc::new(NoConversationLogger),
            params,
            buffer,
            questions_since_trigger: 0,
        }
    }

    /// Attach a transcript logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Number of retained turns (for diagnostics).
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Answer one user message, possibly appending a sponsored
    /// recommendation on the trigger cadence.
    pub async fn chat(&mut self, user_msg: &str) -> Result<String, ChatTurnError> {
        self.buffer.push_user(user_msg);
        self.questions_since_trigger += 1;
        self.logger.log(ConversationEvent::new(
            "user_question",
            serde_json::json!({ "text": user_msg }),
        ));

        let mut answer = match self.gateway.complete(self.answer_request()).await {
            Ok(text) => text,
            Err(e) => {
                // Fatal to the turn: leave no trace of the failed exchange
                self.buffer.pop_last();
                self.questions_since_trigger -= 1;
                return Err(e.into());
            }
        };

        if self.questions_since_trigger >= self.params.trigger_period {
            if let Some((topic, product)) = self.evaluate_trigger().await {
                answer.push_str(&recommendation_suffix(&topic, &product));
                self.logger.log(ConversationEvent::new(
                    "recommendation",
                    serde_json::json!({
                        "topic": topic,
                        "product": product,
                    }),
                ));
            }
            // Reset regardless of outcome: a degraded slot is skipped,
            // not retried at the next question
            self.questions_since_trigger = 0;
        }

        self.buffer.push_assistant(&answer);
        self.logger.log(ConversationEvent::new(
            "assistant_answer",
            serde_json::json!({ "bytes": answer.len(), "text": answer }),
        ));
        Ok(answer)
    }

    /// Full-context request for the primary answer: the system instruction
    /// followed by every buffered turn in order, ending with the question
    /// pushed at the start of this turn.
    fn answer_request(&self) -> CompletionRequest {
        let mut messages = Vec::with_capacity(self.buffer.len() + 1);
        messages.push(Message::system(ANSWER_SYSTEM_PROMPT));
        messages.extend(self.buffer.turns().map(|turn| turn.to_message()));
        CompletionRequest::new(messages, self.params.temperature, self.params.max_tokens)
    }

    /// Run the judge and, when it names a usable suggestion, the product
    /// lookup. Returns the topic and product to recommend, or `None`.
    async fn evaluate_trigger(&self) -> Option<(String, ProductRecord)> {
        let snapshot = self.buffer.snapshot(self.params.snapshot_len());
        let verdict = self.judge.evaluate(&snapshot, &self.params).await;
        self.logger.log(ConversationEvent::new(
            "judge_verdict",
            serde_json::json!({ "verdict": verdict }),
        ));

        if !verdict.has_suggestion() {
            debug!("judge declined; no recommendation this trigger");
            return None;
        }
        let CoherenceVerdict::Coherent { topic, suggestion } = verdict else {
            return None;
        };

        match self.search.find_first(&suggestion).await {
            Ok(Some(product)) => {
                info!(topic = %topic, product = %product.name, "appending recommendation");
                Some((topic, product))
            }
            Ok(None) => {
                debug!(query = %suggestion, "no usable shopping result");
                None
            }
            Err(e) => {
                warn!("product lookup failed, skipping recommendation: {e}");
                None
            }
        }
    }
}

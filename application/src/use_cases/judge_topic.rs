//! Coherence judge.
//!
//! Sends a snapshot of recent turns to the gateway with the strict
//! three-line verdict instruction and parses the result. Any gateway
//! failure or malformed response degrades to "not coherent" — this
//! component never fails the turn.

use crate::config::ChatParams;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use adchat_domain::{CoherenceVerdict, JUDGE_PRIMER, JUDGE_SYSTEM_PROMPT, Message};
use std::sync::Arc;
use tracing::{debug, warn};

/// Classifies whether a snapshot of recent conversation is topically
/// unified and, if so, names a topic and a product/service concept.
pub struct CoherenceJudge {
    gateway: Arc<dyn LlmGateway>,
}

impl CoherenceJudge {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Evaluate a snapshot at the judge's (colder) sampling parameters.
    pub async fn evaluate(&self, snapshot: &str, params: &ChatParams) -> CoherenceVerdict {
        let request = CompletionRequest::new(
            vec![
                Message::system(JUDGE_SYSTEM_PROMPT),
                Message::user(format!("{snapshot}{JUDGE_PRIMER}")),
            ],
            params.judge_temperature,
            params.judge_max_tokens,
        );

        match self.gateway.complete(request).await {
            Ok(raw) => {
                debug!(raw = %raw, "judge response");
                CoherenceVerdict::parse(&raw)
            }
            Err(e) => {
                warn!("coherence judge failed, skipping recommendation: {e}");
                CoherenceVerdict::NotCoherent
            }
        }
    }
}

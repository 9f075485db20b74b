//! Streaming gateway to an OpenAI-compatible chat-completions endpoint.
//!
//! The transport is a one-way SSE stream of fragments; a spawned reader
//! task bridges it onto an mpsc channel of [`StreamEvent`]s, and
//! [`complete`](LlmGateway::complete) collects the channel into one string,
//! so the caller sees a blocking call that returns the assembled text.

use super::protocol::{ChatCompletionRequest, ChatMessage, SseData, parse_sse_line};
use adchat_application::ports::llm_gateway::{
    CompletionRequest, GatewayError, LlmGateway, StreamEvent, StreamHandle,
};
use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// [`LlmGateway`] adapter for OpenAI-compatible providers.
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            // Connect timeout only: a full request timeout would cut off
            // long streamed completions
            client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Override the API base URL (Azure deployments, local servers, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        self.complete_streaming(request).await?.collect_text().await
    }

    async fn complete_streaming(
        &self,
        request: CompletionRequest,
    ) -> Result<StreamHandle, GatewayError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: request.messages.iter().map(ChatMessage::from_message).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: true,
        };

        debug!(
            model = %self.model,
            messages = body.messages.len(),
            "requesting completion"
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Provider(format!("{status}: {body}")));
        }

        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(async move {
            let mut byte_stream = response.bytes_stream();
            // SSE lines may be split across transport chunks
            let mut pending = String::new();
            let mut full_text = String::new();

            while let Some(chunk) = byte_stream.next().await {
                let chunk = match chunk {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                        return;
                    }
                };
                pending.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(newline) = pending.find('\n') {
                    let line: String = pending.drain(..=newline).collect();
                    match parse_sse_line(&line) {
                        SseData::Delta(fragment) => {
                            full_text.push_str(&fragment);
                            if tx.send(StreamEvent::Delta(fragment)).await.is_err() {
                                return;
                            }
                        }
                        SseData::Done => {
                            let _ = tx.send(StreamEvent::Completed(full_text)).await;
                            return;
                        }
                        SseData::Skip => {}
                    }
                }
            }

            // Stream ended without [DONE]; treat what arrived as the answer
            let _ = tx.send(StreamEvent::Completed(full_text)).await;
        });

        Ok(StreamHandle::new(rx))
    }
}

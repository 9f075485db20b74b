//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation
//! provider. Implementations (adapters) live in the infrastructure layer.

use adchat_domain::Message;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion request: an ordered message list plus sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            messages,
            temperature,
            max_tokens,
        }
    }
}

/// An event in a streaming completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment from the model, in arrival order.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming.
    Error(String),
}

/// Handle for receiving streaming events from a completion.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides a convenience method
/// for assembling the full text.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all fragments into a single string,
    /// concatenated in arrival order and trimmed of surrounding whitespace.
    ///
    /// This is what makes the gateway blocking from the caller's
    /// perspective even when the transport streams.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(fragment) => full_text.push_str(&fragment),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text.trim().to_string());
                    }
                    return Ok(full_text.trim().to_string());
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::Stream(e));
                }
            }
        }
        // Channel closed without Completed; return what we have
        Ok(full_text.trim().to_string())
    }
}

/// Gateway for text generation.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run a completion and return the fully assembled response text.
    ///
    /// Does not return until the provider has finished, even when the
    /// underlying transport delivers fragments.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;

    /// Run a completion with incremental delivery.
    ///
    /// Optional hook for interactive surfaces; the default implementation
    /// calls [`complete()`](Self::complete) and wraps the result in a
    /// single `Completed` event, so adapters without true streaming work
    /// unchanged.
    async fn complete_streaming(
        &self,
        request: CompletionRequest,
    ) -> Result<StreamHandle, GatewayError> {
        let result = self.complete(request).await?;
        let (tx, rx) = mpsc::channel(1);
        // If the receiver is dropped before reading, that's fine
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}

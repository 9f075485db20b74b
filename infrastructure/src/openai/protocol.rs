//! Wire types and SSE framing for the chat-completions endpoint.
//!
//! The provider streams the response as server-sent events: each frame is a
//! `data: {json}` line carrying a delta fragment, terminated by a literal
//! `data: [DONE]`. [`parse_sse_line`] classifies one line; malformed frames
//! are skipped rather than failing the stream.

use adchat_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

/// One role-tagged message in the request body.
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn from_message(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role,
            content: message.content.clone(),
        }
    }
}

/// One streamed chunk (`data:` payload).
#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
}

/// Classification of one SSE line.
#[derive(Debug, PartialEq, Eq)]
pub enum SseData {
    /// A text fragment to append.
    Delta(String),
    /// End-of-stream marker (`data: [DONE]`).
    Done,
    /// Keep-alive, non-data line, empty delta, or malformed frame.
    Skip,
}

/// Classify one line of the SSE stream.
pub fn parse_sse_line(line: &str) -> SseData {
    let line = line.trim();
    let Some(data) = line.strip_prefix("data:") else {
        // Blank keep-alives and event/comment lines carry no content
        return SseData::Skip;
    };
    let data = data.trim();
    if data == "[DONE]" {
        return SseData::Done;
    }
    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
            .map(SseData::Delta)
            .unwrap_or(SseData::Skip),
        // Malformed frames are skipped, never fatal
        Err(_) => SseData::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_line_yields_fragment() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hel"}}]}"#;
        assert_eq!(parse_sse_line(line), SseData::Delta("Hel".to_string()));
    }

    #[test]
    fn done_marker_terminates() {
        assert_eq!(parse_sse_line("data: [DONE]"), SseData::Done);
    }

    #[test]
    fn blank_keepalive_is_skipped() {
        assert_eq!(parse_sse_line(""), SseData::Skip);
        assert_eq!(parse_sse_line("   "), SseData::Skip);
    }

    #[test]
    fn non_data_line_is_skipped() {
        assert_eq!(parse_sse_line(": ping"), SseData::Skip);
        assert_eq!(parse_sse_line("event: message"), SseData::Skip);
    }

    #[test]
    fn malformed_json_is_skipped() {
        assert_eq!(parse_sse_line("data: {not json"), SseData::Skip);
    }

    #[test]
    fn role_only_delta_is_skipped() {
        // The first chunk usually carries only the role, no content
        let line = r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(parse_sse_line(line), SseData::Skip);
    }

    #[test]
    fn empty_choices_is_skipped() {
        assert_eq!(parse_sse_line(r#"data: {"choices":[]}"#), SseData::Skip);
    }

    #[test]
    fn empty_content_is_skipped() {
        let line = r#"data: {"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(parse_sse_line(line), SseData::Skip);
    }

    #[test]
    fn chat_message_maps_roles() {
        assert_eq!(ChatMessage::from_message(&Message::system("s")).role, "system");
        assert_eq!(ChatMessage::from_message(&Message::user("u")).role, "user");
        assert_eq!(
            ChatMessage::from_message(&Message::assistant("a")).role,
            "assistant"
        );
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::from_message(&Message::user("hi"))],
            temperature: 0.7,
            max_tokens: 800,
            stream: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}

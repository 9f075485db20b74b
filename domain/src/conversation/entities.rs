//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Role of a wire-level message sent to the text-generation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a provider request (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Who produced a buffered conversation turn.
///
/// The system prompt never enters the buffer, so unlike [`Role`] there is
/// no `System` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Line prefix used when serializing a snapshot for the coherence judge.
    pub fn snapshot_prefix(&self) -> &'static str {
        match self {
            Speaker::User => "Q:",
            Speaker::Assistant => "A:",
        }
    }
}

/// One completed utterance in the conversation (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            content: content.into(),
        }
    }

    /// Convert this turn into the wire-level message sent to the provider.
    pub fn to_message(&self) -> Message {
        match self.speaker {
            Speaker::User => Message::user(self.content.clone()),
            Speaker::Assistant => Message::assistant(self.content.clone()),
        }
    }

    /// Render this turn as a single snapshot line (`Q: ...` / `A: ...`).
    pub fn snapshot_line(&self) -> String {
        format!("{} {}", self.speaker.snapshot_prefix(), self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_speaker() {
        assert_eq!(Turn::user("hi").speaker, Speaker::User);
        assert_eq!(Turn::assistant("hello").speaker, Speaker::Assistant);
    }

    #[test]
    fn to_message_maps_roles() {
        assert_eq!(Turn::user("q").to_message().role, Role::User);
        assert_eq!(Turn::assistant("a").to_message().role, Role::Assistant);
    }

    #[test]
    fn snapshot_line_uses_role_prefix() {
        assert_eq!(Turn::user("any shoes?").snapshot_line(), "Q: any shoes?");
        assert_eq!(Turn::assistant("sure").snapshot_line(), "A: sure");
    }
}

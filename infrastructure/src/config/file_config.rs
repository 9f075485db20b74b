//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. Every
//! section and field is optional; defaults match the reference deployment.

use adchat_application::ChatParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat model and orchestration settings
    pub chat: FileChatConfig,
    /// Text-generation provider settings
    pub openai: FileOpenAiConfig,
    /// Shopping-search provider settings
    pub serpapi: FileSerpApiConfig,
    /// Transcript logging settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Convert the `[chat]` section into orchestration parameters.
    pub fn to_chat_params(&self) -> ChatParams {
        ChatParams {
            model: self.chat.model.clone(),
            temperature: self.chat.temperature,
            max_tokens: self.chat.max_tokens,
            judge_temperature: self.chat.judge_temperature,
            judge_max_tokens: self.chat.judge_max_tokens,
            trigger_period: self.chat.trigger_period,
            buffer_capacity: self.chat.buffer_capacity,
        }
    }

    /// Validate the configuration, returning human-readable issues.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.chat.trigger_period == 0 {
            issues.push(
                "chat.trigger_period must be at least 1; a value of 0 is treated as 1"
                    .to_string(),
            );
        }
        if self.chat.buffer_capacity == 0 {
            issues.push("chat.buffer_capacity must be at least 1".to_string());
        }
        if self.chat.model.is_empty() {
            issues.push("chat.model must not be empty".to_string());
        }
        issues
    }
}

/// `[chat]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model identifier for both answers and the judge.
    pub model: String,
    /// Sampling temperature for answers.
    pub temperature: f32,
    /// Max output tokens for answers.
    pub max_tokens: u32,
    /// Sampling temperature for the coherence judge.
    pub judge_temperature: f32,
    /// Max output tokens for the coherence judge.
    pub judge_max_tokens: u32,
    /// Fire a coherence check every N user questions.
    pub trigger_period: u32,
    /// Max turns kept in the conversation buffer.
    pub buffer_capacity: usize,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        let params = ChatParams::default();
        Self {
            model: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            judge_temperature: params.judge_temperature,
            judge_max_tokens: params.judge_max_tokens,
            trigger_period: params.trigger_period,
            buffer_capacity: params.buffer_capacity,
        }
    }
}

/// `[openai]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Base URL for the API (can be overridden for compatible providers).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

/// `[serpapi]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSerpApiConfig {
    /// Environment variable name for the API key (default: "SERPAPI_KEY").
    pub api_key_env: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl Default for FileSerpApiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "SERPAPI_KEY".to_string(),
            base_url: "https://serpapi.com".to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path for the JSONL conversation transcript (disabled when unset).
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = FileConfig::default();
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert_eq!(config.chat.max_tokens, 800);
        assert_eq!(config.chat.trigger_period, 4);
        assert_eq!(config.chat.buffer_capacity, 100);
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.serpapi.api_key_env, "SERPAPI_KEY");
    }

    #[test]
    fn default_config_validates_clean() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn zero_trigger_period_is_flagged() {
        let mut config = FileConfig::default();
        config.chat.trigger_period = 0;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("trigger_period"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: FileConfig =
            toml::from_str("[chat]\ntrigger_period = 6\n").unwrap();
        assert_eq!(config.chat.trigger_period, 6);
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert_eq!(config.serpapi.base_url, "https://serpapi.com");
    }

    #[test]
    fn to_chat_params_round_trips() {
        let mut config = FileConfig::default();
        config.chat.trigger_period = 5;
        let params = config.to_chat_params();
        assert_eq!(params.trigger_period, 5);
        assert_eq!(params.snapshot_len(), 9);
    }
}

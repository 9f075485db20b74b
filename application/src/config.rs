//! Chat parameters.

/// Sampling and orchestration parameters for one conversation.
///
/// Defaults match the reference deployment: `gpt-4o-mini` at temperature
/// 0.7 for answers, a colder 0.2 for the judge, a recommendation trigger
/// every 4th question, and a 100-turn buffer.
#[derive(Debug, Clone)]
pub struct ChatParams {
    /// Model identifier sent to the text-generation provider.
    pub model: String,
    /// Sampling temperature for the primary answer.
    pub temperature: f32,
    /// Maximum output tokens for the primary answer.
    pub max_tokens: u32,
    /// Sampling temperature for the coherence judge (low, favoring
    /// determinism).
    pub judge_temperature: f32,
    /// Maximum output tokens for the coherence judge.
    pub judge_max_tokens: u32,
    /// Number of user questions between coherence evaluations.
    pub trigger_period: u32,
    /// Maximum number of turns retained in the conversation buffer.
    pub buffer_capacity: usize,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            judge_temperature: 0.2,
            judge_max_tokens: 256,
            trigger_period: 4,
            buffer_capacity: 100,
        }
    }
}

impl ChatParams {
    /// Number of turns in the judge snapshot: the prior question/answer
    /// pairs of the current trigger window plus the current question
    /// (7 lines at the default period of 4).
    pub fn snapshot_len(&self) -> usize {
        (self.trigger_period as usize * 2).saturating_sub(1)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_trigger_period(mut self, period: u32) -> Self {
        self.trigger_period = period;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_seven_lines() {
        assert_eq!(ChatParams::default().snapshot_len(), 7);
    }

    #[test]
    fn snapshot_len_follows_trigger_period() {
        let params = ChatParams::default().with_trigger_period(3);
        assert_eq!(params.snapshot_len(), 5);
    }

    #[test]
    fn judge_sampling_is_colder_than_answer() {
        let params = ChatParams::default();
        assert!(params.judge_temperature < params.temperature);
        assert!(params.judge_max_tokens < params.max_tokens);
    }
}

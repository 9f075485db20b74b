//! Bounded conversation buffer with FIFO eviction.
//!
//! The buffer holds alternating user/assistant [`Turn`]s, oldest first.
//! Once the configured capacity is exceeded, the oldest turns are evicted
//! in complete question/answer pairs so that the retained entries keep
//! alternating and start with a user turn whenever more than one turn is
//! retained. The newest turn is never evicted.

use super::entities::{Speaker, Turn};
use std::collections::VecDeque;

/// Default maximum number of turns kept in memory.
pub const DEFAULT_CAPACITY: usize = 100;

/// Ordered sequence of conversation turns, bounded to a maximum capacity.
///
/// Mutated only by appending completed turns; entries are never edited in
/// place. Owned exclusively by the orchestrator for one conversation.
#[derive(Debug, Clone)]
pub struct ConversationBuffer {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl ConversationBuffer {
    /// Create a buffer holding at most `capacity` turns.
    ///
    /// A zero capacity is treated as 1 so a push always retains at least
    /// the newest turn.
    pub fn new(capacity: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All retained turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Append a completed user turn and enforce the capacity bound.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Turn::user(content));
    }

    /// Append a completed assistant turn and enforce the capacity bound.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Turn::assistant(content));
    }

    /// Remove and return the most recent turn.
    ///
    /// Used by the orchestrator to roll back a user turn whose answer
    /// failed, so a failed exchange leaves no trace in the buffer.
    pub fn pop_last(&mut self) -> Option<Turn> {
        self.turns.pop_back()
    }

    /// The trailing `n` turns serialized one per line with `Q:`/`A:`
    /// prefixes, oldest first. Returns fewer lines when the buffer is
    /// shorter than `n`.
    pub fn snapshot(&self, n: usize) -> String {
        let skip = self.turns.len().saturating_sub(n);
        self.turns
            .iter()
            .skip(skip)
            .map(Turn::snapshot_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
            // Evicting a question leaves its answer dangling at the front;
            // drop it too so alternation starts with a user turn again.
            // Never drop the sole remaining turn: the newest entry is
            // always retained, even at capacity 1.
            if self.turns.len() > 1
                && self
                    .turns
                    .front()
                    .is_some_and(|t| t.speaker == Speaker::Assistant)
            {
                self.turns.pop_front();
            }
        }
    }
}

impl Default for ConversationBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternates(buffer: &ConversationBuffer) -> bool {
        buffer
            .turns()
            .zip(buffer.turns().skip(1))
            .all(|(a, b)| a.speaker != b.speaker)
    }

    fn fill_pairs(buffer: &mut ConversationBuffer, pairs: usize) {
        for i in 0..pairs {
            buffer.push_user(format!("question {i}"));
            buffer.push_assistant(format!("answer {i}"));
        }
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = ConversationBuffer::new(10);
        fill_pairs(&mut buffer, 50);
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn keeps_most_recent_turns() {
        let mut buffer = ConversationBuffer::new(4);
        fill_pairs(&mut buffer, 5);
        let contents: Vec<_> = buffer.turns().map(|t| t.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["question 3", "answer 3", "question 4", "answer 4"]
        );
    }

    #[test]
    fn eviction_preserves_alternation() {
        let mut buffer = ConversationBuffer::new(6);
        fill_pairs(&mut buffer, 20);
        assert!(alternates(&buffer));
        assert_eq!(
            buffer.turns().next().map(|t| t.speaker),
            Some(Speaker::User)
        );
    }

    #[test]
    fn odd_capacity_still_alternates() {
        let mut buffer = ConversationBuffer::new(5);
        fill_pairs(&mut buffer, 20);
        assert!(buffer.len() <= 5);
        assert!(alternates(&buffer));
        assert_eq!(
            buffer.turns().next().map(|t| t.speaker),
            Some(Speaker::User)
        );
    }

    #[test]
    fn snapshot_takes_trailing_window() {
        let mut buffer = ConversationBuffer::new(100);
        fill_pairs(&mut buffer, 3);
        buffer.push_user("question 3");

        let snapshot = buffer.snapshot(7);
        let lines: Vec<_> = snapshot.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Q: question 0");
        assert_eq!(lines[6], "Q: question 3");
    }

    #[test]
    fn snapshot_shorter_than_window() {
        let mut buffer = ConversationBuffer::new(100);
        buffer.push_user("only question");
        assert_eq!(buffer.snapshot(7), "Q: only question");
    }

    #[test]
    fn pop_last_rolls_back_a_turn() {
        let mut buffer = ConversationBuffer::new(100);
        buffer.push_user("q0");
        buffer.push_assistant("a0");
        buffer.push_user("failed question");

        let popped = buffer.pop_last().unwrap();
        assert_eq!(popped.content, "failed question");
        assert_eq!(buffer.len(), 2);
        assert!(alternates(&buffer));
    }

    #[test]
    fn capacity_one_always_keeps_the_newest_turn() {
        let mut buffer = ConversationBuffer::new(1);
        buffer.push_user("q");
        buffer.push_assistant("a");
        assert_eq!(buffer.len(), 1);
        assert_eq!(
            buffer.turns().next().map(|t| t.content.as_str()),
            Some("a")
        );

        buffer.push_user("q2");
        assert_eq!(
            buffer.turns().next().map(|t| t.content.as_str()),
            Some("q2")
        );
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let mut buffer = ConversationBuffer::new(0);
        buffer.push_user("q");
        assert_eq!(buffer.len(), 1);
    }
}

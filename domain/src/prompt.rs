//! Prompt text for the answer model and the coherence judge.

use crate::product::ProductRecord;

/// System instruction for the primary answer generation.
pub const ANSWER_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. \
Format responses using markdown: **bold** for emphasis, *italic* for subtle \
emphasis, `code` for terms, and lists. Preserve any links exactly as provided.";

/// System instruction for the coherence judge, demanding the exact
/// three-line verdict format parsed by
/// [`CoherenceVerdict::parse`](crate::coherence::CoherenceVerdict::parse).
pub const JUDGE_SYSTEM_PROMPT: &str = "Determine whether the last 4 Q&A pairs \
share one topic and suggest a product or service.\n\n\
If yes, respond exactly:\nRELATED: yes\nTOPIC: <topic>\nP/S: <product>\n\n\
Else respond exactly:\nRELATED: no\nTOPIC: None\nP/S: None";

/// Literal fragment appended after the snapshot to prime completion of the
/// first verdict field.
pub const JUDGE_PRIMER: &str = "\nRELATED:";

/// Format the sponsored-recommendation suffix appended to an answer.
pub fn recommendation_suffix(topic: &str, product: &ProductRecord) -> String {
    format!(
        "\n\n▶ Because you've been talking about **{}**, you might like: [{}]({}) — {}",
        topic, product.name, product.link, product.description
    )
}

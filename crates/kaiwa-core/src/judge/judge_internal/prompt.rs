use crate::model::{ChatMessage, ChatRole, Turn};

pub const DEVELOPER_TEXT: &str = "You are a language assessment expert.";

pub const INPUT_TEXT: &str = r#"Above is a transcript of a learner interacting with ChatGPT to practice Japanese.
Evaluate the transcript on five metrics:
1. Fluency (0-5)
2. Coherence (0-5)
3. Complexity (0-5)
4. Engagement (0-5)
5. Frustration (0-5)

Without preamble, respond with:
{
    "fluency": {
        "score": 0-5,
        "confidence": 0.0-1.0,
        "evidence": "Provide specific examples or explanations supporting the fluency rating"
    },
    "coherence": {
        "score": 0-5,
        "confidence": 0.0-1.0,
        "evidence": "Provide specific examples or explanations supporting the coherence rating"
    },
    "complexity": {
        "score": 0-5,
        "confidence": 0.0-1.0,
        "evidence": "Provide specific examples or explanations supporting the complexity rating"
    },
    "engagement": {
        "score": 0-5,
        "confidence": 0.0-1.0,
        "evidence": "Cues for engagement level"
    },
    "frustration": {
        "score": 0-5,
        "confidence": 0.0-1.0,
        "evidence": "Cues for frustration level"
    }
}
"#;

/// Outbound message sequence: instructions, the turns (each cut to
/// `max_turn_chars` characters), then the evaluation request.
pub fn build_messages(turns: &[Turn], max_turn_chars: usize) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(turns.len() + 2);
    messages.push(ChatMessage::new(ChatRole::Developer, DEVELOPER_TEXT));
    messages.extend(turns.iter().map(|t| {
        ChatMessage::new(t.role.into(), truncate_chars(&t.content, max_turn_chars))
    }));
    messages.push(ChatMessage::new(ChatRole::User, INPUT_TEXT));
    messages
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One question/answer pair split out of a `keyword:definition` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Parse a flashcard reply, one card per line.
///
/// A line without a colon, or with an empty half after trimming, is
/// dropped. Colons after the first stay inside the answer. No dedup, no
/// count limit.
pub fn parse(raw: &str) -> Vec<Flashcard> {
    raw.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            let (question, answer) = line.split_once(':')?;
            let question = question.trim();
            let answer = answer.trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }

            Some(Flashcard {
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect()
}

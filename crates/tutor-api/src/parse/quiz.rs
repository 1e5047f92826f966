use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One multiple-choice question from the quiz envelope. Options map the
/// keys "A".."D" to option text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    pub question: String,
    pub options: BTreeMap<String, String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// The JSON document the quiz prompt instructs the assistant to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub questions: Vec<QuizQuestion>,
}

/// A question the client answered, sent back for feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnsweredQuestion {
    pub question: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    #[serde(rename = "selectedAnswer", default)]
    pub selected_answer: String,
}

impl AnsweredQuestion {
    pub fn is_wrong(&self) -> bool {
        self.selected_answer != self.correct_answer
    }

    /// Text of the option behind a key, or "" when the key is absent.
    pub fn option_text(&self, key: &str) -> &str {
        self.options.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Parse the quiz reply as a single JSON document.
///
/// No substring rescue: JSON wrapped in surrounding prose is a hard
/// failure the route reports together with the raw text.
pub fn parse(raw: &str) -> Result<QuizPayload, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "questions": [
            {
                "question": "What carries nerve impulses?",
                "options": {"A": "Neuron", "B": "Photon", "C": "Proton", "D": "Electron"},
                "correctAnswer": "A"
            }
        ]
    }"#;

    #[test]
    fn test_parses_valid_envelope() {
        let payload = parse(VALID).unwrap();
        assert_eq!(payload.questions.len(), 1);
        assert_eq!(payload.questions[0].correct_answer, "A");
        assert_eq!(payload.questions[0].options["B"], "Photon");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse("not json at all").is_err());
    }

    #[test]
    fn test_json_wrapped_in_prose_is_an_error() {
        let wrapped = format!("Here is your quiz:\n{}", VALID);
        assert!(parse(&wrapped).is_err());
    }

    #[test]
    fn test_is_wrong_compares_selected_to_correct() {
        let mut question = AnsweredQuestion {
            question: "Q".to_string(),
            options: BTreeMap::from([
                ("A".to_string(), "right".to_string()),
                ("B".to_string(), "wrong".to_string()),
            ]),
            correct_answer: "A".to_string(),
            selected_answer: "B".to_string(),
        };
        assert!(question.is_wrong());

        question.selected_answer = "A".to_string();
        assert!(!question.is_wrong());
    }

    #[test]
    fn test_option_text_falls_back_to_empty() {
        let question = AnsweredQuestion {
            question: "Q".to_string(),
            options: BTreeMap::new(),
            correct_answer: "A".to_string(),
            selected_answer: "B".to_string(),
        };
        assert_eq!(question.option_text("A"), "");
    }
}

//! Quiz items returned by the generation service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text including its choices
    pub question: String,

    /// Answer and optional explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: Option<String>) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }

    /// The answer block to show, if any. Blank answers are not shown.
    pub fn visible_answer(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .filter(|answer| !answer.trim().is_empty())
    }
}

/// Success body of the generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Result of a completed submission.
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    /// Identifier assigned when the request was submitted
    pub request_id: Uuid,
    pub questions: Vec<Question>,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_with_and_without_answers() {
        let body = r#"{"questions": [
            {"question": "Q1", "answer": "A1"},
            {"question": "Q2"},
            {"question": "Q3", "answer": "  "}
        ]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.questions.len(), 3);
        assert_eq!(response.questions[0].visible_answer(), Some("A1"));
        assert_eq!(response.questions[1].visible_answer(), None);
        assert_eq!(response.questions[2].visible_answer(), None);
    }

    #[test]
    fn test_missing_questions_field_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.questions.is_empty());
    }
}

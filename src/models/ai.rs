use serde::{Deserialize, Serialize};

/// Request body for the AI assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantQuery {
    pub question: String,
    /// Recipe context the question refers to
    pub context: String,
}

/// Assistant response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_query_serializes() {
        let query = AssistantQuery {
            question: "Berapa lama memasaknya?".to_string(),
            context: "Rendang".to_string(),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"question\""));
        assert!(json.contains("\"context\""));
    }

    #[test]
    fn test_assistant_answer_deserializes() {
        let answer: AssistantAnswer =
            serde_json::from_str(r#"{"answer":"Sekitar empat jam."}"#).unwrap();
        assert_eq!(answer.answer, "Sekitar empat jam.");
    }
}

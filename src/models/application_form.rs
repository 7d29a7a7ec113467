//! Application form (questionnaire template) DTOs.

use serde::{Deserialize, Serialize};

use crate::models::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    #[default]
    MultiLineText,
    SingleLineText,
}

impl QuestionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::MultiLineText => "Long answer",
            Self::SingleLineText => "Short answer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub description: String,
    pub max_content_length: Option<u32>,
    pub question_type: QuestionKind,
    pub required: bool,
}

/// An organization-defined questionnaire template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub application_form_id: i64,
    pub name: String,
    pub team: Team,
    pub questions: Vec<Question>,
    pub created_at: String,
    pub updated_at: String,
    /// Member position key, e.g. `WEB_LEADER`.
    pub created_by: String,
    pub updated_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFormCreateRequest {
    pub name: String,
    pub team_id: i64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFormUpdateRequest {
    pub name: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_id_omitted_when_absent() {
        let question = Question {
            content: "Why do you apply?".to_string(),
            max_content_length: Some(500),
            required: true,
            ..Question::default()
        };
        let json = serde_json::to_value(&question).unwrap();
        assert!(json.get("questionId").is_none());
        assert_eq!(json["questionType"], json!("MULTI_LINE_TEXT"));
    }

    #[test]
    fn test_form_deserializes_from_api_shape() {
        let form: ApplicationForm = serde_json::from_value(json!({
            "applicationFormId": 3,
            "name": "13th Web Recruiting",
            "team": {"teamId": 1, "name": "WEB"},
            "questions": [{
                "questionId": 10,
                "content": "Introduce yourself",
                "description": "",
                "maxContentLength": 700,
                "questionType": "MULTI_LINE_TEXT",
                "required": true
            }],
            "createdAt": "2024-01-10T09:00:00",
            "updatedAt": "2024-02-01T10:00:00",
            "createdBy": "WEB_LEADER",
            "updatedBy": "WEB_SUBLEADER"
        }))
        .unwrap();

        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.questions[0].question_type, QuestionKind::MultiLineText);
    }
}

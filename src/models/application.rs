//! Submitted application DTOs and their status vocabularies.

use serde::{Deserialize, Serialize};

use crate::models::application_form::Question;
use crate::models::team::Team;

/// A candidate's submitted response to an application form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: i64,
    pub applicant: Applicant,
    pub team: Team,
    pub confirmation_status: ApplicationConfirmationStatus,
    pub result: ApplicationResult,
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub applicant_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResult {
    pub status: ApplicationResultStatus,
    pub interview_started_at: Option<String>,
    pub interview_ended_at: Option<String>,
}

/// One answered question within an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub content: Option<String>,
    pub question: Question,
}

/// Whether the applicant has confirmed the interview/final offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationConfirmationStatus {
    ToBeDetermined,
    InterviewConfirmWaiting,
    InterviewConfirmAccepted,
    InterviewConfirmRejected,
    FinalConfirmWaiting,
    FinalConfirmAccepted,
    FinalConfirmRejected,
}

impl ApplicationConfirmationStatus {
    pub const ALL: &'static [Self] = &[
        Self::ToBeDetermined,
        Self::InterviewConfirmWaiting,
        Self::InterviewConfirmAccepted,
        Self::InterviewConfirmRejected,
        Self::FinalConfirmWaiting,
        Self::FinalConfirmAccepted,
        Self::FinalConfirmRejected,
    ];

    /// Wire value used in query parameters and JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToBeDetermined => "TO_BE_DETERMINED",
            Self::InterviewConfirmWaiting => "INTERVIEW_CONFIRM_WAITING",
            Self::InterviewConfirmAccepted => "INTERVIEW_CONFIRM_ACCEPTED",
            Self::InterviewConfirmRejected => "INTERVIEW_CONFIRM_REJECTED",
            Self::FinalConfirmWaiting => "FINAL_CONFIRM_WAITING",
            Self::FinalConfirmAccepted => "FINAL_CONFIRM_ACCEPTED",
            Self::FinalConfirmRejected => "FINAL_CONFIRM_REJECTED",
        }
    }

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToBeDetermined => "To be determined",
            Self::InterviewConfirmWaiting => "Interview confirm waiting",
            Self::InterviewConfirmAccepted => "Interview accepted",
            Self::InterviewConfirmRejected => "Interview declined",
            Self::FinalConfirmWaiting => "Final confirm waiting",
            Self::FinalConfirmAccepted => "Final accepted",
            Self::FinalConfirmRejected => "Final declined",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Screening/interview outcome of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationResultStatus {
    NotRated,
    ScreeningToBeDetermined,
    ScreeningPassed,
    ScreeningFailed,
    InterviewToBeDetermined,
    InterviewPassed,
    InterviewFailed,
}

impl ApplicationResultStatus {
    pub const ALL: &'static [Self] = &[
        Self::NotRated,
        Self::ScreeningToBeDetermined,
        Self::ScreeningPassed,
        Self::ScreeningFailed,
        Self::InterviewToBeDetermined,
        Self::InterviewPassed,
        Self::InterviewFailed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotRated => "NOT_RATED",
            Self::ScreeningToBeDetermined => "SCREENING_TO_BE_DETERMINED",
            Self::ScreeningPassed => "SCREENING_PASSED",
            Self::ScreeningFailed => "SCREENING_FAILED",
            Self::InterviewToBeDetermined => "INTERVIEW_TO_BE_DETERMINED",
            Self::InterviewPassed => "INTERVIEW_PASSED",
            Self::InterviewFailed => "INTERVIEW_FAILED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotRated => "Not rated",
            Self::ScreeningToBeDetermined => "Screening TBD",
            Self::ScreeningPassed => "Screening passed",
            Self::ScreeningFailed => "Screening failed",
            Self::InterviewToBeDetermined => "Interview TBD",
            Self::InterviewPassed => "Interview passed",
            Self::InterviewFailed => "Interview failed",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_deserializes_from_api_shape() {
        let application: Application = serde_json::from_value(json!({
            "applicationId": 42,
            "applicant": {
                "applicantId": 7,
                "name": "Kim",
                "email": "kim@example.com",
                "phoneNumber": "010-1234-5678"
            },
            "team": {"teamId": 1, "name": "WEB"},
            "confirmationStatus": "TO_BE_DETERMINED",
            "result": {
                "status": "NOT_RATED",
                "interviewStartedAt": null,
                "interviewEndedAt": null
            },
            "submittedAt": "2024-03-01T12:34:56"
        }))
        .unwrap();

        assert_eq!(application.application_id, 42);
        assert_eq!(application.applicant.name, "Kim");
        assert_eq!(application.result.status, ApplicationResultStatus::NotRated);
        assert!(application.answers.is_empty());
    }

    #[test]
    fn test_status_wire_round_trip() {
        for status in ApplicationResultStatus::ALL {
            assert_eq!(ApplicationResultStatus::from_wire(status.as_str()), Some(*status));
        }
        for status in ApplicationConfirmationStatus::ALL {
            assert_eq!(
                ApplicationConfirmationStatus::from_wire(status.as_str()),
                Some(*status)
            );
        }
        assert_eq!(ApplicationResultStatus::from_wire("UNKNOWN"), None);
    }

    #[test]
    fn test_status_serde_matches_wire_names() {
        let json = serde_json::to_value(ApplicationResultStatus::ScreeningPassed).unwrap();
        assert_eq!(json, json!("SCREENING_PASSED"));
    }
}

//! REST request parameter objects and the paged response envelope.

use serde::{Deserialize, Serialize};

use crate::models::application::{ApplicationConfirmationStatus, ApplicationResultStatus};

/// Paged list response: `{ "data": [...], "page": { "totalCount": n } }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub page: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: u64,
}

/// Query parameters for `GET /applications`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationParams {
    /// 0-based page index.
    pub page: u32,
    pub size: u32,
    pub team_id: Option<i64>,
    pub search_word: Option<String>,
    pub confirm_status: Option<ApplicationConfirmationStatus>,
    pub result_status: Option<ApplicationResultStatus>,
    /// `"accessor,ASC|DESC"`, already remapped to wire field names.
    pub sort: Option<String>,
}

impl ApplicationParams {
    pub fn to_query(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(team_id) = self.team_id {
            push_param(&mut query, "teamId", &team_id.to_string());
        }
        if let Some(word) = self.search_word.as_deref()
            && !word.is_empty()
        {
            push_param(&mut query, "searchWord", word);
        }
        if let Some(status) = self.confirm_status {
            push_param(&mut query, "confirmStatus", status.as_str());
        }
        if let Some(status) = self.result_status {
            push_param(&mut query, "resultStatus", status.as_str());
        }
        if let Some(sort) = self.sort.as_deref() {
            push_param(&mut query, "sort", sort);
        }
        query
    }
}

/// Query parameters for `GET /application-forms`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationFormParams {
    pub page: u32,
    pub size: u32,
    pub team_id: Option<i64>,
    pub search_word: Option<String>,
    pub sort: Option<String>,
}

impl ApplicationFormParams {
    pub fn to_query(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(team_id) = self.team_id {
            push_param(&mut query, "teamId", &team_id.to_string());
        }
        if let Some(word) = self.search_word.as_deref()
            && !word.is_empty()
        {
            push_param(&mut query, "searchWord", word);
        }
        if let Some(sort) = self.sort.as_deref() {
            push_param(&mut query, "sort", sort);
        }
        query
    }
}

/// Body of `POST /sms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsRequest {
    pub application_ids: Vec<i64>,
    pub content: String,
}

/// Body of `POST /applications/results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultUpdateRequest {
    pub application_ids: Vec<i64>,
    pub result_status: ApplicationResultStatus,
}

fn push_param(query: &mut String, key: &str, value: &str) {
    query.push('&');
    query.push_str(key);
    query.push('=');
    query.push_str(&percent_encode(value));
}

/// Minimal percent encoding for query parameter values (RFC 3986 unreserved
/// characters pass through, everything else is encoded byte-wise).
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_query_minimal() {
        let params = ApplicationParams {
            page: 0,
            size: 20,
            ..ApplicationParams::default()
        };
        assert_eq!(params.to_query(), "page=0&size=20");
    }

    #[test]
    fn test_application_query_full() {
        let params = ApplicationParams {
            page: 2,
            size: 50,
            team_id: Some(3),
            search_word: Some("kim lee".to_string()),
            confirm_status: Some(ApplicationConfirmationStatus::FinalConfirmWaiting),
            result_status: Some(ApplicationResultStatus::ScreeningPassed),
            sort: Some("submittedAt,DESC".to_string()),
        };
        assert_eq!(
            params.to_query(),
            "page=2&size=50&teamId=3&searchWord=kim%20lee\
             &confirmStatus=FINAL_CONFIRM_WAITING&resultStatus=SCREENING_PASSED\
             &sort=submittedAt%2CDESC"
        );
    }

    #[test]
    fn test_empty_search_word_is_skipped() {
        let params = ApplicationFormParams {
            page: 0,
            size: 20,
            search_word: Some(String::new()),
            ..ApplicationFormParams::default()
        };
        assert_eq!(params.to_query(), "page=0&size=20");
    }

    #[test]
    fn test_percent_encode_multibyte() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("김"), "%EA%B9%80");
        assert_eq!(percent_encode("safe-._~"), "safe-._~");
    }

    #[test]
    fn test_paged_envelope_deserializes() {
        let paged: Paged<i32> =
            serde_json::from_str(r#"{"data": [1, 2], "page": {"totalCount": 25}}"#).unwrap();
        assert_eq!(paged.data, vec![1, 2]);
        assert_eq!(paged.page.total_count, 25);
    }
}

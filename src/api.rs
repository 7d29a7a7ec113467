//! REST API client for the recruitment backend.
//!
//! Thin typed wrappers over `utils::fetch`; every function returns
//! `Result<_, ApiError>` and callers decide how failures surface in the UI.

use crate::config::API_BASE_URL;
use crate::core::error::ApiError;
use crate::models::{
    Application, ApplicationForm, ApplicationFormCreateRequest, ApplicationFormParams,
    ApplicationFormUpdateRequest, ApplicationParams, ApplicationResultStatus, Paged,
    ResultUpdateRequest, SmsRequest, Team,
};
use crate::utils::fetch;

pub async fn get_applications(params: &ApplicationParams) -> Result<Paged<Application>, ApiError> {
    let url = format!("{}/applications?{}", API_BASE_URL, params.to_query());
    fetch::get_json(&url).await
}

pub async fn get_application_by_id(application_id: i64) -> Result<Application, ApiError> {
    let url = format!("{}/applications/{}", API_BASE_URL, application_id);
    fetch::get_json(&url).await
}

pub async fn get_application_forms(
    params: &ApplicationFormParams,
) -> Result<Paged<ApplicationForm>, ApiError> {
    let url = format!("{}/application-forms?{}", API_BASE_URL, params.to_query());
    fetch::get_json(&url).await
}

pub async fn get_application_form_by_id(form_id: i64) -> Result<ApplicationForm, ApiError> {
    let url = format!("{}/application-forms/{}", API_BASE_URL, form_id);
    fetch::get_json(&url).await
}

pub async fn create_application_form(
    request: &ApplicationFormCreateRequest,
) -> Result<(), ApiError> {
    let url = format!("{}/application-forms", API_BASE_URL);
    fetch::post_json(&url, request).await
}

pub async fn update_application_form(
    form_id: i64,
    request: &ApplicationFormUpdateRequest,
) -> Result<(), ApiError> {
    let url = format!("{}/application-forms/{}", API_BASE_URL, form_id);
    fetch::put_json(&url, request).await
}

pub async fn get_teams() -> Result<Vec<Team>, ApiError> {
    let url = format!("{}/teams", API_BASE_URL);
    fetch::get_json(&url).await
}

/// Send an SMS notification to the applicants behind the given applications.
pub async fn send_sms(application_ids: Vec<i64>, content: String) -> Result<(), ApiError> {
    let url = format!("{}/sms", API_BASE_URL);
    fetch::post_json(
        &url,
        &SmsRequest {
            application_ids,
            content,
        },
    )
    .await
}

/// Change the result status of the given applications in one call.
pub async fn update_results(
    application_ids: Vec<i64>,
    result_status: ApplicationResultStatus,
) -> Result<(), ApiError> {
    let url = format!("{}/applications/results", API_BASE_URL);
    fetch::post_json(
        &url,
        &ResultUpdateRequest {
            application_ids,
            result_status,
        },
    )
    .await
}

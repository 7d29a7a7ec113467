//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Application`], [`Applicant`], [`ApplicationResult`] - submitted applications
//! - [`ApplicationForm`], [`Question`] - questionnaire templates
//! - [`Team`] - organization sub-teams
//! - [`ApplicationParams`], [`ApplicationFormParams`], [`Paged`] - REST request/response shapes
//! - [`Route`], [`ListQuery`] - hash-based navigation

mod application;
mod application_form;
mod request;
mod route;
mod team;

pub use application::{
    Applicant, Application, ApplicationConfirmationStatus, ApplicationResult,
    ApplicationResultStatus, Answer,
};
pub use application_form::{
    ApplicationForm, ApplicationFormCreateRequest, ApplicationFormUpdateRequest, Question,
    QuestionKind,
};
pub use request::{ApplicationFormParams, ApplicationParams, Paged, ResultUpdateRequest, SmsRequest};
pub use route::{ListQuery, Route};
pub use team::Team;

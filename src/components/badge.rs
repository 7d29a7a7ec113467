//! Status badges for table cells.

use leptos::prelude::*;

use crate::models::{ApplicationConfirmationStatus, ApplicationResultStatus};

stylance::import_crate_style!(css, "src/components/badge.module.css");

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Positive,
    Negative,
    Pending,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => css::neutral,
            BadgeTone::Positive => css::positive,
            BadgeTone::Negative => css::negative,
            BadgeTone::Pending => css::pending,
        }
    }
}

pub fn confirmation_tone(status: ApplicationConfirmationStatus) -> BadgeTone {
    use ApplicationConfirmationStatus::*;
    match status {
        ToBeDetermined => BadgeTone::Neutral,
        InterviewConfirmWaiting | FinalConfirmWaiting => BadgeTone::Pending,
        InterviewConfirmAccepted | FinalConfirmAccepted => BadgeTone::Positive,
        InterviewConfirmRejected | FinalConfirmRejected => BadgeTone::Negative,
    }
}

pub fn result_tone(status: ApplicationResultStatus) -> BadgeTone {
    use ApplicationResultStatus::*;
    match status {
        NotRated => BadgeTone::Neutral,
        ScreeningToBeDetermined | InterviewToBeDetermined => BadgeTone::Pending,
        ScreeningPassed | InterviewPassed => BadgeTone::Positive,
        ScreeningFailed | InterviewFailed => BadgeTone::Negative,
    }
}

#[component]
pub fn StatusBadge(label: String, tone: BadgeTone) -> impl IntoView {
    view! { <span class=format!("{} {}", css::badge, tone.class())>{label}</span> }
}

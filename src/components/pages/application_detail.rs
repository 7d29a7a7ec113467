//! Detail view of a single submitted application.

use leptos::prelude::*;

use crate::api;
use crate::components::badge::{StatusBadge, confirmation_tone, result_tone};
use crate::models::Application;
use crate::utils::dom::history_back;
use crate::utils::format::format_date_time;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ApplicationDetailPage(application_id: Signal<i64>) -> impl IntoView {
    let resource = LocalResource::new(move || {
        let id = application_id.get();
        async move { api::get_application_by_id(id).await }
    });

    view! {
        <div class=css::page>
            <button class=css::back_link on:click=|_| history_back()>
                "< Back to list"
            </button>
            {move || match resource.get() {
                None => view! { <p class=css::detail_loading>"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! {
                    <p class=css::detail_error>
                        {format!("Failed to load application: {}", e)}
                    </p>
                }
                .into_any(),
                Some(Ok(application)) => view! { <ApplicationDetail application=application /> }
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ApplicationDetail(application: Application) -> impl IntoView {
    let submitted = application
        .submitted_at
        .as_deref()
        .and_then(format_date_time)
        .unwrap_or_else(|| "-".to_string());
    let confirmation = application.confirmation_status;
    let result = application.result.status;

    view! {
        <h1 class=css::page_title>{application.applicant.name.clone()}</h1>
        <div class=css::badges>
            <StatusBadge label=confirmation.label().to_string() tone=confirmation_tone(confirmation) />
            <StatusBadge label=result.label().to_string() tone=result_tone(result) />
        </div>
        <dl class=css::detail_fields>
            <dt>"Team"</dt>
            <dd>{application.team.name.clone()}</dd>
            <dt>"Email"</dt>
            <dd>{application.applicant.email.clone()}</dd>
            <dt>"Phone"</dt>
            <dd>{application.applicant.phone_number.clone()}</dd>
            <dt>"Submitted"</dt>
            <dd>{submitted}</dd>
        </dl>
        <section class=css::answers>
            <h2>"Answers"</h2>
            {if application.answers.is_empty() {
                view! { <p class=css::detail_loading>"No answers."</p> }.into_any()
            } else {
                application
                    .answers
                    .iter()
                    .map(|answer| {
                        view! {
                            <article class=css::answer>
                                <h3>{answer.question.content.clone()}</h3>
                                <p>
                                    {answer
                                        .content
                                        .clone()
                                        .unwrap_or_else(|| "(no answer)".to_string())}
                                </p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

//! Create/edit page for application form templates.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons;
use crate::components::router::Navigator;
use crate::models::{
    ApplicationFormCreateRequest, ApplicationFormUpdateRequest, ListQuery, Question, QuestionKind,
    Route,
};
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// One editable question row; `key` keeps list identity stable while the
/// user adds and removes rows.
#[derive(Debug, Clone, PartialEq)]
struct QuestionDraft {
    key: u64,
    question: Question,
}

#[component]
pub fn FormEditorPage(form_id: Signal<Option<i64>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigator = expect_context::<Navigator>();

    let name = RwSignal::new(String::new());
    let team_id = RwSignal::new(None::<i64>);
    let drafts = RwSignal::new(Vec::<QuestionDraft>::new());
    let next_key = RwSignal::new(0u64);
    let saving = RwSignal::new(false);

    let add_draft = move |question: Question| {
        let key = next_key.get_untracked();
        next_key.set(key + 1);
        drafts.update(|drafts| drafts.push(QuestionDraft { key, question }));
    };

    let update_draft = move |key: u64, apply: &dyn Fn(&mut Question)| {
        drafts.update(|drafts| {
            if let Some(draft) = drafts.iter_mut().find(|draft| draft.key == key) {
                apply(&mut draft.question);
            }
        });
    };

    // Editing an existing form loads it once; creating starts with one blank
    // question row.
    let existing = LocalResource::new(move || {
        let id = form_id.get();
        async move {
            match id {
                Some(id) => Some(api::get_application_form_by_id(id).await),
                None => None,
            }
        }
    });

    // Which form id the fields were last populated for, so reactive re-runs
    // never wipe in-progress edits.
    let populated_for = RwSignal::new(None::<Option<i64>>);
    Effect::new(move |_| {
        let current_id = form_id.get();
        if populated_for.get_untracked() == Some(current_id) {
            return;
        }
        match current_id {
            None => {
                name.set(String::new());
                team_id.set(None);
                drafts.set(Vec::new());
                add_draft(Question::default());
                populated_for.set(Some(None));
            }
            Some(_) => match existing.get().flatten() {
                Some(Ok(form)) => {
                    name.set(form.name.clone());
                    team_id.set(Some(form.team.team_id));
                    drafts.set(Vec::new());
                    for question in form.questions {
                        add_draft(question);
                    }
                    populated_for.set(Some(current_id));
                }
                Some(Err(e)) => {
                    ctx.toast_error(format!("Failed to load form: {}", e));
                    populated_for.set(Some(current_id));
                }
                // Still loading; the resource read re-runs this effect.
                None => {}
            },
        }
    });

    let save = move |_| {
        let form_name = name.get_untracked().trim().to_string();
        if form_name.is_empty() {
            ctx.toast_error("Form name is required.");
            return;
        }
        let questions: Vec<Question> = drafts.with_untracked(|drafts| {
            drafts
                .iter()
                .map(|draft| draft.question.clone())
                .filter(|question| !question.content.trim().is_empty())
                .collect()
        });
        if questions.is_empty() {
            ctx.toast_error("At least one question is required.");
            return;
        }

        let id = form_id.get_untracked();
        let team = team_id.get_untracked();
        if id.is_none() && team.is_none() {
            ctx.toast_error("Select a team for the new form.");
            return;
        }

        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => {
                    api::update_application_form(
                        id,
                        &ApplicationFormUpdateRequest {
                            name: form_name,
                            questions,
                        },
                    )
                    .await
                }
                None => {
                    api::create_application_form(&ApplicationFormCreateRequest {
                        name: form_name,
                        // Checked above.
                        team_id: team.unwrap_or_default(),
                        questions,
                    })
                    .await
                }
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    ctx.toast_success("Form saved.");
                    navigator.go(Route::ApplicationFormList(ListQuery::default()));
                }
                Err(e) => ctx.toast_error(format!("Failed to save form: {}", e)),
            }
        });
    };

    let title = move || {
        if form_id.get().is_some() {
            "Edit Application Form"
        } else {
            "New Application Form"
        }
    };

    view! {
        <div class=css::page>
            <h1 class=css::page_title>{title}</h1>
            <div class=css::editor_field>
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || form_id.get().is_none()>
                <div class=css::editor_field>
                    <label>"Team"</label>
                    <select on:change=move |ev| {
                        team_id.set(event_target_value(&ev).parse().ok());
                    }>
                        <option value="">"Select a team"</option>
                        {move || {
                            ctx.teams
                                .get()
                                .into_iter()
                                .map(|team| {
                                    let id = team.team_id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || team_id.get() == Some(id)
                                        >
                                            {team.name}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </Show>
            <section class=css::question_editor>
                <h2>"Questions"</h2>
                <For
                    each=move || drafts.get()
                    key=|draft| draft.key
                    children=move |draft| {
                        view! { <QuestionEditor draft=draft update=update_draft remove=move |key| {
                            drafts.update(|drafts| drafts.retain(|draft| draft.key != key));
                        } /> }
                    }
                />
                <button
                    class=css::add_question
                    on:click=move |_| add_draft(Question::default())
                >
                    <Icon icon=icons::PLUS />
                    "Add question"
                </button>
            </section>
            <div class=css::editor_footer>
                <button class=css::cancel_button on:click=move |_| {
                    navigator.go(Route::ApplicationFormList(ListQuery::default()));
                }>
                    "Cancel"
                </button>
                <button class=css::save_button disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn QuestionEditor(
    draft: QuestionDraft,
    update: impl Fn(u64, &dyn Fn(&mut Question)) + Copy + Send + 'static,
    remove: impl Fn(u64) + Copy + Send + 'static,
) -> impl IntoView {
    let key = draft.key;
    let question = draft.question;

    view! {
        <article class=css::question_row>
            <div class=css::question_main>
                <input
                    type="text"
                    placeholder="Question"
                    value=question.content.clone()
                    on:input=move |ev| {
                        let content = event_target_value(&ev);
                        update(key, &|question| question.content = content.clone());
                    }
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    value=question.description.clone()
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        update(key, &|question| question.description = description.clone());
                    }
                />
            </div>
            <div class=css::question_options>
                <select on:change=move |ev| {
                    let kind = match event_target_value(&ev).as_str() {
                        "SINGLE_LINE_TEXT" => QuestionKind::SingleLineText,
                        _ => QuestionKind::MultiLineText,
                    };
                    update(key, &|question| question.question_type = kind);
                }>
                    <option
                        value="MULTI_LINE_TEXT"
                        selected=question.question_type == QuestionKind::MultiLineText
                    >
                        {QuestionKind::MultiLineText.label()}
                    </option>
                    <option
                        value="SINGLE_LINE_TEXT"
                        selected=question.question_type == QuestionKind::SingleLineText
                    >
                        {QuestionKind::SingleLineText.label()}
                    </option>
                </select>
                <input
                    type="number"
                    placeholder="Max length"
                    value=question.max_content_length.map(|n| n.to_string()).unwrap_or_default()
                    on:input=move |ev| {
                        let max = event_target_value(&ev).parse().ok();
                        update(key, &|question| question.max_content_length = max);
                    }
                />
                <label class=css::required_toggle>
                    <input
                        type="checkbox"
                        checked=question.required
                        on:change=move |ev| {
                            let required = event_target_checked(&ev);
                            update(key, &|question| question.required = required);
                        }
                    />
                    "Required"
                </label>
                <button class=css::remove_question on:click=move |_| remove(key)>
                    <Icon icon=icons::REMOVE />
                </button>
            </div>
        </article>
    }
}

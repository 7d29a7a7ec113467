//! Application form list page: sortable table of questionnaire templates with
//! per-row question preview and links into the form editor.

use leptos::prelude::*;
use serde_json::Value;

use crate::api;
use crate::app::AppContext;
use crate::components::icons;
use crate::components::modal::Modal;
use crate::components::pagination::PaginationProps;
use crate::components::router::Navigator;
use crate::components::search_bar::SearchBar;
use crate::components::table::{SortOptions, SupportButton, Table, TableColumn};
use crate::components::team_tabs::TeamTabs;
use crate::core::pagination::PageOptions;
use crate::core::sort::{SortEntry, active_param};
use crate::models::{ApplicationFormParams, ListQuery, Question, Route};
use crate::utils::format::format_date;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

fn render_name(value: Option<Value>, open_row: Option<Callback<()>>) -> AnyView {
    let name = value
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string();
    match open_row {
        Some(open) => view! {
            <a class=css::row_link on:click=move |_| open.run(())>{name}</a>
        }
        .into_any(),
        None => name.into_any(),
    }
}

fn render_date(value: Option<Value>, _open_row: Option<Callback<()>>) -> AnyView {
    value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(format_date)
        .unwrap_or_else(|| "-".to_string())
        .into_any()
}

fn render_questions(value: Option<Value>, _open_row: Option<Callback<()>>) -> AnyView {
    let questions: Vec<Question> = value
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default();
    view! { <QuestionPreviewCell questions=questions /> }.into_any()
}

fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Name", "name", "28%")
            .with_render(render_name)
            .with_link("applicationFormId"),
        TableColumn::new("Team", "team.name", "12%"),
        TableColumn::new("Questions", "questions", "12%").with_render(render_questions),
        TableColumn::new("Created", "createdAt", "18%").with_render(render_date),
        TableColumn::new("Updated", "updatedAt", "18%").with_render(render_date),
        TableColumn::new("Updated by", "updatedBy", "12%"),
    ]
}

/// Question count button that opens a preview dialog for its own row.
#[component]
fn QuestionPreviewCell(questions: Vec<Question>) -> impl IntoView {
    let show = RwSignal::new(false);
    let count = questions.len();

    view! {
        <button class=css::preview_button on:click=move |_| show.set(true)>
            <Icon icon=icons::PREVIEW />
            <span>{count}</span>
        </button>
        <Show when=move || show.get()>
            {
                let questions = questions.clone();
                view! {
                    <Modal title="Questions" on_close=Callback::new(move |()| show.set(false))>
                        <ol class=css::question_preview>
                            {questions
                                .iter()
                                .map(|question| {
                                    view! {
                                        <li>
                                            <span class=css::question_content>
                                                {question.content.clone()}
                                            </span>
                                            <span class=css::question_meta>
                                                {question.question_type.label()}
                                                {question.required.then_some(" · required")}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    </Modal>
                }
            }
        </Show>
    }
}

#[component]
pub fn ApplicationFormListPage(query: Signal<ListQuery>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigator = expect_context::<Navigator>();

    let sort_entries = RwSignal::new(vec![
        SortEntry::new("name"),
        SortEntry::new("team.name"),
        SortEntry::new("createdAt"),
        SortEntry::new("updatedAt"),
    ]);
    let search_word = RwSignal::new(String::new());
    let search_draft = RwSignal::new(String::new());

    let loaded_rows = RwSignal::new(Vec::<Value>::new());
    let total_count = RwSignal::new(0u64);

    let params = Memo::new(move |_| {
        let query = query.get();
        ApplicationFormParams {
            page: query.page - 1,
            size: query.size,
            team_id: ctx.team_id_by_name(query.team.as_deref()),
            search_word: {
                let word = search_word.get();
                (!word.is_empty()).then_some(word)
            },
            sort: sort_entries.with(|entries| active_param(entries)),
        }
    });

    let resource = LocalResource::new(move || {
        let params = params.get();
        async move {
            let result = api::get_application_forms(&params).await;
            (params, result)
        }
    });

    let is_loading = Signal::derive(move || match resource.get() {
        None => true,
        Some((fetched_params, _)) => fetched_params != params.get(),
    });

    Effect::new(move |_| {
        let Some((fetched_params, result)) = resource.get() else {
            return;
        };
        if fetched_params != params.get_untracked() {
            return;
        }
        match result {
            Ok(paged) => {
                loaded_rows.set(
                    paged
                        .data
                        .iter()
                        .filter_map(|form| serde_json::to_value(form).ok())
                        .collect(),
                );
                total_count.set(paged.page.total_count);
            }
            Err(e) => ctx.toast_error(format!("Failed to load application forms: {}", e)),
        }
    });

    let page_options = Signal::derive(move || {
        let query = query.get();
        PageOptions::new(query.page, query.size, total_count.get())
    });

    let on_change_page = Callback::new(move |page| {
        navigator.go(Route::ApplicationFormList(query.get_untracked().with_page(page)));
    });
    let on_change_size = Callback::new(move |size| {
        navigator.go(Route::ApplicationFormList(query.get_untracked().with_size(size)));
    });
    // Switching teams drops the previous team's search word entirely.
    let on_team = Callback::new(move |team| {
        search_word.set(String::new());
        search_draft.set(String::new());
        navigator.go(Route::ApplicationFormList(query.get_untracked().with_team(team)));
    });
    let on_search = Callback::new(move |word: String| {
        search_word.set(word);
        let current = query.get_untracked();
        if current.page != 1 {
            navigator.go(Route::ApplicationFormList(current.with_page(1)));
        }
    });

    let row_link = Callback::new(move |id: i64| {
        navigator.go(Route::ApplicationFormEdit { id });
    });

    let active_team = Signal::derive(move || query.get().team);

    view! {
        <div class=css::page>
            <h1 class=css::page_title>"Application Forms"</h1>
            <TeamTabs active=active_team on_select=on_team />
            <SearchBar
                placeholder="Search form name"
                on_submit=on_search
                draft=search_draft
            />
            <Table
                columns=columns()
                rows=loaded_rows
                is_loading=is_loading
                total_count=total_count
                sort={SortOptions {
                    entries: sort_entries,
                    single_sort: true,
                }}
                buttons=vec![SupportButton::new(
                    "New form",
                    Callback::new(move |()| navigator.go(Route::ApplicationFormNew)),
                )]
                row_link=row_link
                pagination={PaginationProps {
                    options: page_options,
                    on_change_page,
                    on_change_size,
                }}
            />
        </div>
    }
}

//! Application list page: filterable, sortable, selectable table of submitted
//! applications with SMS, result-change and export actions.

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::badge::{StatusBadge, confirmation_tone, result_tone};
use crate::components::pagination::PaginationProps;
use crate::components::result_modal::ResultModal;
use crate::components::router::Navigator;
use crate::components::search_bar::SearchBar;
use crate::components::sms_modal::SmsModal;
use crate::components::table::{
    SelectableRow, SortOptions, SupportButton, Table, TableColumn,
};
use crate::components::team_tabs::TeamTabs;
use crate::config::SELECT_ALL_OVERFETCH;
use crate::core::export::{SheetRecord, export_file_name, write_csv};
use crate::core::object::{get_own_value_by_key, uniq};
use crate::core::pagination::PageOptions;
use crate::core::sort::{SortEntry, active_param};
use crate::models::{
    ApplicationConfirmationStatus, ApplicationParams, ApplicationResultStatus, ListQuery, Route,
};
use crate::utils::dom::download_bytes;
use crate::utils::format::{format_date_time, today_iso};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

// ============================================================================
// Row helpers
// ============================================================================

fn text_at(row: &Value, path: &str) -> String {
    get_own_value_by_key(row, path)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}

/// Sort accessors use the row field paths; the backend sorts the result
/// fields under `applicationResult`, so the wire parameter is remapped.
fn remap_sort(param: String) -> String {
    match param.strip_prefix("result.") {
        Some(rest) => format!("applicationResult.{}", rest),
        None => param,
    }
}

fn selected_ids(rows: &[Value]) -> Vec<i64> {
    rows.iter()
        .filter_map(|row| get_own_value_by_key(row, "applicationId").and_then(Value::as_i64))
        .collect()
}

/// Fetch size covering every row plus a margin for concurrent inserts.
fn overfetch_size(total_count: u64) -> u32 {
    u32::try_from(total_count.saturating_add(SELECT_ALL_OVERFETCH)).unwrap_or(u32::MAX)
}

/// Flatten one selected row into the exported label/value record.
fn sheet_record(row: &Value) -> SheetRecord {
    let confirmation = get_own_value_by_key(row, "confirmationStatus")
        .and_then(Value::as_str)
        .and_then(ApplicationConfirmationStatus::from_wire)
        .map(|status| status.label())
        .unwrap_or("-");
    let result = get_own_value_by_key(row, "result.status")
        .and_then(Value::as_str)
        .and_then(ApplicationResultStatus::from_wire)
        .map(|status| status.label())
        .unwrap_or("-");
    let submitted = get_own_value_by_key(row, "submittedAt")
        .and_then(Value::as_str)
        .and_then(format_date_time)
        .unwrap_or_else(|| "-".to_string());

    vec![
        ("Name", text_at(row, "applicant.name")),
        ("Team", text_at(row, "team.name")),
        ("Phone", text_at(row, "applicant.phoneNumber")),
        ("Email", text_at(row, "applicant.email")),
        ("Confirmation", confirmation.to_string()),
        ("Result", result.to_string()),
        ("Submitted", submitted),
    ]
}

// ============================================================================
// Cell renderers
// ============================================================================

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

fn render_confirmation(value: Option<Value>, _open_row: Option<Callback<()>>) -> AnyView {
    match value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ApplicationConfirmationStatus::from_wire)
    {
        Some(status) => view! {
            <StatusBadge label=status.label().to_string() tone=confirmation_tone(status) />
        }
        .into_any(),
        None => "-".into_any(),
    }
}

fn render_result(value: Option<Value>, _open_row: Option<Callback<()>>) -> AnyView {
    match value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ApplicationResultStatus::from_wire)
    {
        Some(status) => view! {
            <StatusBadge label=status.label().to_string() tone=result_tone(status) />
        }
        .into_any(),
        None => "-".into_any(),
    }
}

fn render_date_time(value: Option<Value>, _open_row: Option<Callback<()>>) -> AnyView {
    value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(format_date_time)
        .unwrap_or_else(|| "-".to_string())
        .into_any()
}

fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Name", "applicant.name", "14%")
            .with_render(render_name)
            .with_link("applicationId"),
        TableColumn::new("Team", "team.name", "9%"),
        TableColumn::new("Phone", "applicant.phoneNumber", "14%"),
        TableColumn::new("Confirmation", "confirmationStatus", "15%")
            .with_render(render_confirmation),
        TableColumn::new("Result", "result.status", "15%").with_render(render_result),
        TableColumn::new("Submitted", "submittedAt", "16%").with_render(render_date_time),
        TableColumn::new("Interview", "result.interviewStartedAt", "17%")
            .with_render(render_date_time),
    ]
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn ApplicationListPage(query: Signal<ListQuery>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigator = expect_context::<Navigator>();

    let selected_rows = RwSignal::new(Vec::<Value>::new());
    let sort_entries = RwSignal::new(vec![
        SortEntry::new("applicant.name"),
        SortEntry::new("submittedAt"),
        SortEntry::new("result.interviewStartedAt"),
    ]);
    let search_word = RwSignal::new(String::new());
    let search_draft = RwSignal::new(String::new());
    let confirm_filter = RwSignal::new(None::<ApplicationConfirmationStatus>);
    let result_filter = RwSignal::new(None::<ApplicationResultStatus>);
    let refresh_version = RwSignal::new(0u32);

    let show_sms = RwSignal::new(false);
    let show_result = RwSignal::new(false);

    let loaded_rows = RwSignal::new(Vec::<Value>::new());
    let total_count = RwSignal::new(0u64);

    let params = Memo::new(move |_| {
        let query = query.get();
        ApplicationParams {
            page: query.page - 1,
            size: query.size,
            team_id: ctx.team_id_by_name(query.team.as_deref()),
            search_word: {
                let word = search_word.get();
                (!word.is_empty()).then_some(word)
            },
            confirm_status: confirm_filter.get(),
            result_status: result_filter.get(),
            sort: sort_entries.with(|entries| active_param(entries)).map(remap_sort),
        }
    });

    let resource = LocalResource::new(move || {
        let params = params.get();
        let version = refresh_version.get();
        async move {
            let result = api::get_applications(&params).await;
            (params, version, result)
        }
    });

    // Loading until the resolved result matches the current request identity;
    // stale rows stay visible under the overlay in the meantime.
    let is_loading = Signal::derive(move || match resource.get() {
        None => true,
        Some((fetched_params, fetched_version, _)) => {
            fetched_params != params.get() || fetched_version != refresh_version.get()
        }
    });

    // Commit rows only once loading has finished for the current params.
    Effect::new(move |_| {
        let Some((fetched_params, fetched_version, result)) = resource.get() else {
            return;
        };
        if fetched_params != params.get_untracked()
            || fetched_version != refresh_version.get_untracked()
        {
            return;
        }
        match result {
            Ok(paged) => {
                loaded_rows.set(
                    paged
                        .data
                        .iter()
                        .filter_map(|application| serde_json::to_value(application).ok())
                        .collect(),
                );
                total_count.set(paged.page.total_count);
            }
            Err(e) => ctx.toast_error(format!("Failed to load applications: {}", e)),
        }
    });

    let page_options = Signal::derive(move || {
        let query = query.get();
        PageOptions::new(query.page, query.size, total_count.get())
    });

    let on_change_page = Callback::new(move |page| {
        navigator.go(Route::ApplicationList(query.get_untracked().with_page(page)));
    });
    let on_change_size = Callback::new(move |size| {
        navigator.go(Route::ApplicationList(query.get_untracked().with_size(size)));
    });
    // Switching teams drops the previous team's search word entirely.
    let on_team = Callback::new(move |team| {
        selected_rows.set(Vec::new());
        search_word.set(String::new());
        search_draft.set(String::new());
        navigator.go(Route::ApplicationList(query.get_untracked().with_team(team)));
    });
    let on_search = Callback::new(move |word: String| {
        search_word.set(word);
        let current = query.get_untracked();
        if current.page != 1 {
            navigator.go(Route::ApplicationList(current.with_page(1)));
        }
    });

    // Selects every matching row across all pages by overfetching the full
    // result set, so selection still holds complete records.
    let select_all_pages = Callback::new(move |select: bool| {
        if !select {
            selected_rows.set(Vec::new());
            return;
        }
        let fetch_params = ApplicationParams {
            page: 0,
            size: overfetch_size(total_count.get_untracked()),
            ..params.get_untracked()
        };
        spawn_local(async move {
            match api::get_applications(&fetch_params).await {
                Ok(paged) => selected_rows.set(uniq(
                    paged
                        .data
                        .iter()
                        .filter_map(|application| serde_json::to_value(application).ok())
                        .collect(),
                )),
                Err(e) => ctx.toast_error(format!("Failed to select all pages: {}", e)),
            }
        });
    });

    // Row click validates the application is still readable before navigating.
    let row_link = Callback::new(move |id: i64| {
        spawn_local(async move {
            match api::get_application_by_id(id).await {
                Ok(_) => navigator.go(Route::ApplicationDetail { id }),
                Err(e) if e.is_unauthorized() => {
                    ctx.toast_error("Not authorized to view this application.");
                }
                Err(e) => ctx.toast_error(format!("Cannot open application: {}", e)),
            }
        });
    });

    let send_sms = Callback::new(move |content: String| {
        let ids = selected_rows.with_untracked(|rows| selected_ids(rows));
        spawn_local(async move {
            match api::send_sms(ids, content).await {
                Ok(()) => {
                    ctx.toast_success("SMS sent.");
                    show_sms.set(false);
                }
                Err(e) => ctx.toast_error(format!("Failed to send SMS: {}", e)),
            }
        });
    });

    let change_result = Callback::new(move |status: ApplicationResultStatus| {
        let ids = selected_rows.with_untracked(|rows| selected_ids(rows));
        spawn_local(async move {
            match api::update_results(ids, status).await {
                Ok(()) => {
                    ctx.toast_success("Result updated.");
                    show_result.set(false);
                    selected_rows.set(Vec::new());
                    refresh_version.update(|version| *version += 1);
                }
                Err(e) => ctx.toast_error(format!("Failed to update results: {}", e)),
            }
        });
    });

    let export = Callback::new(move |()| {
        let records: Vec<SheetRecord> =
            selected_rows.with_untracked(|rows| rows.iter().map(sheet_record).collect());
        match write_csv(&records) {
            Ok(None) => {}
            Ok(Some(bytes)) => {
                let file_name =
                    export_file_name(&today_iso(), query.get_untracked().team.as_deref());
                if let Err(e) = download_bytes(&file_name, "text/csv", &bytes) {
                    ctx.toast_error(format!("Export failed: {}", e));
                }
            }
            Err(e) => ctx.toast_error(format!("Export failed: {}", e)),
        }
    });

    let selected_count = Signal::derive(move || selected_rows.with(|rows| rows.len()));
    let active_team = Signal::derive(move || query.get().team);

    view! {
        <div class=css::page>
            <h1 class=css::page_title>"Applications"</h1>
            <TeamTabs active=active_team on_select=on_team />
            <SearchBar
                placeholder="Search name or phone"
                on_submit=on_search
                draft=search_draft
            >
                <select on:change=move |ev| {
                    confirm_filter
                        .set(ApplicationConfirmationStatus::from_wire(&event_target_value(&ev)));
                }>
                    <option value="">"All confirmations"</option>
                    {ApplicationConfirmationStatus::ALL
                        .iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| {
                    result_filter
                        .set(ApplicationResultStatus::from_wire(&event_target_value(&ev)));
                }>
                    <option value="">"All results"</option>
                    {ApplicationResultStatus::ALL
                        .iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </SearchBar>
            <Table
                columns=columns()
                rows=loaded_rows
                is_loading=is_loading
                total_count=total_count
                selectable={SelectableRow {
                    selected_rows,
                    on_select_all_pages: Some(select_all_pages),
                }}
                sort={SortOptions {
                    entries: sort_entries,
                    single_sort: true,
                }}
                buttons=vec![
                    SupportButton::selection_action(
                        "Send SMS",
                        Callback::new(move |()| show_sms.set(true)),
                    ),
                    SupportButton::selection_action(
                        "Change result",
                        Callback::new(move |()| show_result.set(true)),
                    ),
                    SupportButton::selection_action("Export CSV", export),
                ]
                row_link=row_link
                pagination={PaginationProps {
                    options: page_options,
                    on_change_page,
                    on_change_size,
                }}
            />
            <Show when=move || show_sms.get()>
                <SmsModal
                    recipient_count=selected_count
                    on_send=send_sms
                    on_close=Callback::new(move |()| show_sms.set(false))
                />
            </Show>
            <Show when=move || show_result.get()>
                <ResultModal
                    target_count=selected_count
                    on_submit=change_result
                    on_close=Callback::new(move |()| show_result.set(false))
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remap_sort_targets_result_fields_only() {
        assert_eq!(
            remap_sort("result.interviewStartedAt,ASC".to_string()),
            "applicationResult.interviewStartedAt,ASC"
        );
        assert_eq!(
            remap_sort("applicant.name,DESC".to_string()),
            "applicant.name,DESC"
        );
        assert_eq!(remap_sort("submittedAt,ASC".to_string()), "submittedAt,ASC");
    }

    #[test]
    fn test_overfetch_size_saturates() {
        assert_eq!(overfetch_size(40), 140);
        assert_eq!(overfetch_size(u64::MAX), u32::MAX);
        assert_eq!(overfetch_size(u64::from(u32::MAX)), u32::MAX);
    }

    #[test]
    fn test_selected_ids_skips_rows_without_id() {
        let rows = vec![
            json!({"applicationId": 3}),
            json!({"name": "no id"}),
            json!({"applicationId": 8}),
        ];
        assert_eq!(selected_ids(&rows), vec![3, 8]);
    }

    #[test]
    fn test_sheet_record_flattens_row() {
        let row = json!({
            "applicant": {"name": "Kim", "phoneNumber": "010-1234", "email": "kim@example.com"},
            "team": {"name": "WEB"},
            "confirmationStatus": "TO_BE_DETERMINED",
            "result": {"status": "SCREENING_PASSED"},
            "submittedAt": "2024-03-01T14:05:00"
        });
        let record = sheet_record(&row);
        assert_eq!(record[0], ("Name", "Kim".to_string()));
        assert_eq!(record[1], ("Team", "WEB".to_string()));
        assert_eq!(record[4], ("Confirmation", "To be determined".to_string()));
        assert_eq!(record[5], ("Result", "Screening passed".to_string()));
        assert_eq!(record[6], ("Submitted", "Mar 1, 2024 2:05 PM".to_string()));
    }

    #[test]
    fn test_sheet_record_missing_fields_degrade_to_placeholder() {
        let record = sheet_record(&json!({}));
        assert!(record.iter().all(|(_, value)| value == "-"));
    }
}

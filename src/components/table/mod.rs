//! Generic data table over dynamic JSON rows.
//!
//! Pages own all table state (rows, selection, sort spec, paging) and pass it
//! in through option bundles; the table itself is stateless apart from what
//! it derives. Cells are resolved through dotted-path accessors so any row
//! shape the API returns can be displayed without a dedicated row type.

pub mod column;
mod header;
mod support_bar;

pub use column::{CellRenderer, SelectableRow, SortOptions, SupportButton, TableColumn};

use leptos::prelude::*;
use serde_json::Value;

use crate::components::icons;
use crate::components::pagination::{PaginationControls, PaginationProps};
use crate::core::object::get_own_value_by_key;
use crate::core::selection::{is_selected, toggle_all_visible, toggle_row};
use header::HeaderCell;
use leptos_icons::Icon;
use support_bar::TableSupportBar;

stylance::import_crate_style!(css, "src/components/table/table.module.css");

/// The empty-state graphic waits for loading to settle so it never renders
/// under the spinner.
fn show_no_data(row_count: usize, is_loading: bool) -> bool {
    row_count == 0 && !is_loading
}

/// Text shown for a cell when no custom renderer is given.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn Table(
    columns: Vec<TableColumn>,
    #[prop(into)] rows: Signal<Vec<Value>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] total_count: Signal<u64>,
    #[prop(optional)] selectable: Option<SelectableRow>,
    #[prop(optional)] sort: Option<SortOptions>,
    #[prop(optional)] buttons: Vec<SupportButton>,
    /// Navigates to a row's detail view, keyed by each column's `id_accessor`.
    #[prop(optional)]
    row_link: Option<Callback<i64>>,
    #[prop(optional)] pagination: Option<PaginationProps>,
) -> impl IntoView {
    let selected_count = Signal::derive(move || match selectable {
        Some(selectable) => selectable.selected_rows.with(|selected| selected.len()),
        None => 0,
    });
    let visible_count = Signal::derive(move || rows.with(|rows| rows.len()));
    let page_fully_selected = Signal::derive(move || match selectable {
        Some(selectable) => rows.with(|rows| {
            !rows.is_empty()
                && selectable
                    .selected_rows
                    .with(|selected| rows.iter().all(|row| is_selected(selected, row)))
        }),
        None => false,
    });
    let all_selected = Signal::derive(move || {
        let total = total_count.get();
        total > 0 && selected_count.get() as u64 == total
    });

    let header_checkbox = selectable.map(|selectable| {
        view! {
            <th class=css::checkbox_cell>
                <input
                    type="checkbox"
                    prop:checked=page_fully_selected
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        rows.with_untracked(|rows| {
                            selectable
                                .selected_rows
                                .update(|selected| toggle_all_visible(selected, rows, checked));
                        });
                    }
                />
            </th>
        }
    });

    let body_columns = columns.clone();
    let body = move |row: Value| {
        let row_checkbox = selectable.map(|selectable| {
            let row = row.clone();
            let checked = {
                let row = row.clone();
                Signal::derive(move || {
                    selectable
                        .selected_rows
                        .with(|selected| is_selected(selected, &row))
                })
            };
            view! {
                <td class=css::checkbox_cell>
                    <input
                        type="checkbox"
                        prop:checked=checked
                        on:change=move |ev| {
                            let is_checked = event_target_checked(&ev);
                            selectable
                                .selected_rows
                                .update(|selected| toggle_row(selected, &row, is_checked));
                        }
                    />
                </td>
            }
        });

        let cells = body_columns
            .iter()
            .map(|column| {
                let value = column
                    .accessor
                    .and_then(|path| get_own_value_by_key(&row, path))
                    .cloned();
                let open_row = row_link.and_then(|link| {
                    let id = column
                        .id_accessor
                        .and_then(|path| get_own_value_by_key(&row, path))
                        .and_then(Value::as_i64)?;
                    Some(Callback::new(move |()| link.run(id)))
                });
                match column.render {
                    Some(render) => view! { <td>{render(value, open_row)}</td> }.into_any(),
                    None => view! { <td>{display_value(value.as_ref())}</td> }.into_any(),
                }
            })
            .collect::<Vec<_>>();

        view! {
            <tr class=css::row>
                {row_checkbox}
                {cells}
            </tr>
        }
    };

    view! {
        <div class=css::container>
            <TableSupportBar
                total_count=total_count
                selected_count=selected_count
                visible_count=visible_count
                page_fully_selected=page_fully_selected
                all_selected=all_selected
                on_select_all_pages=selectable.and_then(|s| s.on_select_all_pages)
                buttons=buttons
            />
            <div class=css::body_wrapper>
                <table class=css::table>
                    <colgroup>
                        {selectable.map(|_| view! { <col class=css::checkbox_col /> })}
                        {columns
                            .iter()
                            .map(|column| view! { <col style:width=column.width_ratio /> })
                            .collect::<Vec<_>>()}
                    </colgroup>
                    <thead>
                        <tr>
                            {header_checkbox}
                            {columns
                                .iter()
                                .map(|column| view! { <HeaderCell column=*column sort=sort /> })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(&body).collect::<Vec<_>>()}
                    </tbody>
                </table>
                <Show when=move || show_no_data(rows.with(Vec::len), is_loading.get())>
                    <div class=css::no_data>
                        <Icon icon=icons::NO_DATA />
                        <span>"No data to display."</span>
                    </div>
                </Show>
                <Show when=move || is_loading.get()>
                    <div class=css::loading_overlay>
                        <span class=css::spinner />
                    </div>
                </Show>
            </div>
            {pagination.map(|props| view! {
                <Show when=move || rows.with(|rows| !rows.is_empty())>
                    <PaginationControls props=props />
                </Show>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_data_waits_for_loading() {
        assert!(show_no_data(0, false));
        assert!(!show_no_data(0, true));
        assert!(!show_no_data(3, false));
        assert!(!show_no_data(3, true));
    }

    #[test]
    fn test_display_value_fallbacks() {
        assert_eq!(display_value(None), "-");
        assert_eq!(display_value(Some(&Value::Null)), "-");
        assert_eq!(display_value(Some(&json!("WEB"))), "WEB");
        assert_eq!(display_value(Some(&json!(42))), "42");
        assert_eq!(display_value(Some(&json!(true))), "true");
    }
}
